//! dcrseedgen - Core library for Decred seed and key pair generation
//!
//! Generates wallet seeds with their mnemonic and hex renderings, lays the
//! mnemonic out for display and re-entry checks, creates address/WIF pairs
//! for the Decred networks and exports them as CSV.

pub mod config;
pub mod entropy;
pub mod error;
pub mod export;
pub mod grid;
pub mod keys;
pub mod network;
pub mod seed;
pub mod types;

pub use config::SeedgenConfig;
pub use entropy::{EntropySource, OsEntropy};
pub use error::{Result, SeedgenError};
pub use export::{export_key_pairs, write_key_pairs};
pub use grid::{partition, GridLayout, Verification, WordColumn, WordGrid};
pub use keys::{generate_key_pair, generate_key_pairs, parse_quantity, recheck_key_pair};
pub use network::Network;
pub use seed::{decode_mnemonic, generate_seed, MnemonicEncoding, Seed};
pub use types::KeyPair;
