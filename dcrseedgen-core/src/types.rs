use crate::network::Network;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    pub address: String,
    pub private_key: String, // WIF
    pub network: Network,
}

impl KeyPair {
    pub fn as_row(&self) -> [&str; 2] {
        [&self.address, &self.private_key]
    }
}
