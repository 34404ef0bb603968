use crate::error::{Result, SeedgenError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Decred networks supported for address generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Network {
    #[default]
    Mainnet,
    Testnet3,
    Simnet,
    Regnet,
}

impl Network {
    pub const ALL: [Network; 4] = [
        Network::Mainnet,
        Network::Testnet3,
        Network::Simnet,
        Network::Regnet,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "Mainnet",
            Network::Testnet3 => "Testnet3",
            Network::Simnet => "Simnet",
            Network::Regnet => "Regnet",
        }
    }

    /// Version bytes of a pay-to-pubkey-hash address.
    pub fn pubkey_hash_addr_id(&self) -> [u8; 2] {
        match self {
            Network::Mainnet => [0x07, 0x3f],  // Ds
            Network::Testnet3 => [0x0f, 0x21], // Ts
            Network::Simnet => [0x0e, 0x91],   // Ss
            Network::Regnet => [0x0e, 0x00],   // Rs
        }
    }

    /// Version bytes of a WIF private key.
    pub fn private_key_id(&self) -> [u8; 2] {
        match self {
            Network::Mainnet => [0x22, 0xde],  // Pm
            Network::Testnet3 => [0x23, 0x0e], // Pt
            Network::Simnet => [0x23, 0x07],   // Ps
            Network::Regnet => [0x22, 0xfe],   // Pr
        }
    }

    pub fn from_pubkey_hash_addr_id(id: [u8; 2]) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|net| net.pubkey_hash_addr_id() == id)
    }

    pub fn from_private_key_id(id: [u8; 2]) -> Option<Self> {
        Self::ALL.into_iter().find(|net| net.private_key_id() == id)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = SeedgenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" => Ok(Network::Mainnet),
            "testnet3" | "testnet" | "test" => Ok(Network::Testnet3),
            "simnet" | "sim" => Ok(Network::Simnet),
            "regnet" | "regtest" | "reg" => Ok(Network::Regnet),
            _ => Err(SeedgenError::UnknownNetwork(format!(
                "{}. Supported networks: mainnet, testnet3, simnet, regnet",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_network() {
        assert_eq!("Mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("testnet".parse::<Network>().unwrap(), Network::Testnet3);
        assert_eq!("SIMNET".parse::<Network>().unwrap(), Network::Simnet);
        assert_eq!("regnet".parse::<Network>().unwrap(), Network::Regnet);
        assert!("signet".parse::<Network>().is_err());
    }

    #[test]
    fn test_version_ids_are_distinct() {
        for net in Network::ALL {
            assert_eq!(
                Network::from_pubkey_hash_addr_id(net.pubkey_hash_addr_id()),
                Some(net)
            );
            assert_eq!(Network::from_private_key_id(net.private_key_id()), Some(net));
        }
    }
}
