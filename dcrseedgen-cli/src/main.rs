mod commands;
mod config;
mod theme;

use clap::{Parser, Subcommand};
use config::CliContext;
use dcrseedgen_core::SeedgenError;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dcrseedgen")]
#[command(about = "Decred seed and address generator")]
#[command(version)]
struct Cli {
    /// Data directory for configuration
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file (defaults to <data-dir>/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed generation and verification commands
    #[command(subcommand)]
    Seed(commands::SeedCommands),

    /// Address and private key commands
    #[command(subcommand)]
    Address(commands::AddressCommands),

    /// Configuration commands
    #[command(subcommand)]
    Config(commands::ConfigCommands),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "dcrseedgen={0},dcrseedgen_core={0}",
            log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Get data directory
    let data_dir = cli.data_dir.unwrap_or_else(config::default_data_dir);
    tokio::fs::create_dir_all(&data_dir).await?;

    let config_path = cli
        .config
        .unwrap_or_else(|| data_dir.join(config::CONFIG_FILE_NAME));
    let ctx = CliContext::load(data_dir, config_path)?;

    // Execute command
    let result = match cli.command {
        Commands::Seed(cmd) => commands::handle_seed_command(cmd, &ctx).await,
        Commands::Address(cmd) => commands::handle_address_command(cmd, &ctx).await,
        Commands::Config(cmd) => commands::handle_config_command(cmd, &ctx).await,
    };

    if let Err(e) = result {
        match e {
            SeedgenError::InvalidQuantity(msg) => {
                eprintln!("{}", ctx.theme.error(&msg));
            }
            SeedgenError::UnknownNetwork(msg) => {
                eprintln!("{}", ctx.theme.error(&format!("Unknown network: {}", msg)));
            }
            SeedgenError::InvalidMnemonic(msg) => {
                eprintln!("{}", ctx.theme.error(&format!("Invalid mnemonic: {}", msg)));
                eprintln!("Words must be separated by spaces and include the checksum word");
            }
            SeedgenError::Clipboard(msg) => {
                eprintln!(
                    "{}",
                    ctx.theme
                        .error(&format!("Could not copy to clipboard: {}", msg))
                );
            }
            SeedgenError::Csv(err) => {
                eprintln!("{}", ctx.theme.error(&format!("Error exporting csv: {}", err)));
            }
            _ => {
                eprintln!("{}", ctx.theme.error(&e.to_string()));
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
