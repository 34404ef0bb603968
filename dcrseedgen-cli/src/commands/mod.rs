pub mod address;
pub mod config;
pub mod seed;

pub use address::{handle_address_command, AddressCommands};
pub use config::{handle_config_command, ConfigCommands};
pub use seed::{handle_seed_command, SeedCommands};
