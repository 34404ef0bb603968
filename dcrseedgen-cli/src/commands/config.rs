use crate::config::CliContext;
use clap::Subcommand;
use dcrseedgen_core::{Network, Result, SeedgenConfig, SeedgenError};
use dialoguer::Confirm;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the active configuration
    Show,
    /// Write a configuration file with default values
    Init {
        /// Default network (mainnet, testnet3, simnet, regnet)
        #[arg(short, long)]
        network: Option<String>,
        /// Overwrite an existing file without asking
        #[arg(short, long)]
        force: bool,
    },
}

pub async fn handle_config_command(cmd: ConfigCommands, ctx: &CliContext) -> Result<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("Data directory: {}", ctx.data_dir.display());
            println!("Config file: {}", ctx.config_path.display());
            if !ctx.config_path.exists() {
                println!("  (not found, showing defaults)");
            }
            println!();
            println!("{}", serde_json::to_string_pretty(&ctx.config)?);
        }

        ConfigCommands::Init { network, force } => {
            if ctx.config_path.exists() && !force {
                let confirm = Confirm::new()
                    .with_prompt(format!(
                        "Config file {} already exists. Overwrite?",
                        ctx.config_path.display()
                    ))
                    .default(false)
                    .interact()
                    .map_err(|e| SeedgenError::dialog(e.to_string()))?;

                if !confirm {
                    println!("Init cancelled.");
                    return Ok(());
                }
            }

            let config = match network {
                Some(n) => SeedgenConfig::new(n.parse::<Network>()?),
                None => SeedgenConfig::default(),
            };
            config.save(&ctx.config_path)?;

            tracing::info!("Wrote config to {}", ctx.config_path.display());
            println!(
                "{}",
                ctx.theme.success(&format!(
                    "Config written to {}",
                    ctx.config_path.display()
                ))
            );
        }
    }

    Ok(())
}
