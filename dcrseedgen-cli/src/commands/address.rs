use crate::config::CliContext;
use crate::theme::Theme;
use clap::Subcommand;
use comfy_table::Table;
use dcrseedgen_core::{
    export_key_pairs, generate_key_pairs, parse_quantity, recheck_key_pair, KeyPair, Network,
    OsEntropy, Result,
};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum AddressCommands {
    /// Generate addresses with their private keys
    Generate {
        /// Decred network (mainnet, testnet3, simnet, regnet)
        #[arg(short, long)]
        network: Option<String>,
        /// How many addresses to generate
        #[arg(short, long, default_value = "1")]
        count: String,
        /// Export the generated pairs as CSV
        #[arg(long)]
        export: bool,
        /// Target folder for the CSV export
        #[arg(long)]
        export_dir: Option<PathBuf>,
        /// Print the pairs as JSON
        #[arg(long)]
        json: bool,
    },
}

pub async fn handle_address_command(cmd: AddressCommands, ctx: &CliContext) -> Result<()> {
    match cmd {
        AddressCommands::Generate {
            network,
            count,
            export,
            export_dir,
            json,
        } => {
            let count = parse_quantity(&count)?;
            let network = match network {
                Some(n) => n.parse::<Network>()?,
                None => ctx.config.network,
            };

            let pairs = generate_key_pairs(network, count, &mut OsEntropy)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&pairs)?);
            } else {
                println!("Network: {}", network);
                println!("{}", pairs_table(&pairs, &ctx.theme));
            }

            if export {
                for pair in &pairs {
                    recheck_key_pair(pair)?;
                }
                tracing::debug!("Re-checked {} pair(s) before export", pairs.len());

                let dir = ctx.export_dir(export_dir);
                let path = export_key_pairs(&pairs, &dir)?;
                println!(
                    "{}",
                    ctx.theme
                        .success(&format!("Exported file to {}", path.display()))
                );
            }
        }
    }

    Ok(())
}

fn pairs_table(pairs: &[KeyPair], theme: &Theme) -> Table {
    let mut table = theme.table();
    table.set_header(vec!["Address", "Private Key"]);
    for pair in pairs {
        table.add_row(pair.as_row().to_vec());
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcrseedgen_core::{generate_key_pair, SeedgenConfig, SeedgenError};
    use tempfile::TempDir;

    fn test_context(data_dir: &TempDir) -> CliContext {
        CliContext {
            data_dir: data_dir.path().to_path_buf(),
            config_path: data_dir.path().join("config.json"),
            config: SeedgenConfig::default(),
            theme: Theme::default(),
        }
    }

    fn generate(count: &str, export_dir: &TempDir) -> AddressCommands {
        AddressCommands::Generate {
            network: Some("simnet".to_string()),
            count: count.to_string(),
            export: true,
            export_dir: Some(export_dir.path().to_path_buf()),
            json: false,
        }
    }

    #[tokio::test]
    async fn test_invalid_count_exports_nothing() {
        let data_dir = TempDir::new().unwrap();
        let export_dir = TempDir::new().unwrap();
        let ctx = test_context(&data_dir);

        for count in ["0", "abc", ""] {
            let result = handle_address_command(generate(count, &export_dir), &ctx).await;
            assert!(
                matches!(result, Err(SeedgenError::InvalidQuantity(_))),
                "{:?} should be rejected",
                count
            );
        }
        assert_eq!(std::fs::read_dir(export_dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_export_writes_rechecked_pairs() {
        let data_dir = TempDir::new().unwrap();
        let export_dir = TempDir::new().unwrap();
        let ctx = test_context(&data_dir);

        handle_address_command(generate("3", &export_dir), &ctx)
            .await
            .unwrap();

        let files: Vec<_> = std::fs::read_dir(export_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        assert_eq!(files.len(), 1);

        let contents = std::fs::read_to_string(&files[0]).unwrap();
        let rows: Vec<&str> = contents.lines().skip(1).collect();
        assert_eq!(rows.len(), 3);
        for row in rows {
            let (address, key) = row.split_once(',').unwrap();
            let pair = KeyPair {
                address: address.to_string(),
                private_key: key.to_string(),
                network: Network::Simnet,
            };
            recheck_key_pair(&pair).unwrap();
        }
    }

    #[test]
    fn test_pairs_table_lists_every_pair() {
        let pairs: Vec<KeyPair> = (0..3)
            .map(|_| generate_key_pair(Network::Regnet, &mut OsEntropy).unwrap())
            .collect();

        let table = pairs_table(&pairs, &Theme::default());
        let rendered = table.to_string();

        assert_eq!(table.row_iter().count(), 3);
        assert!(rendered.contains("Private Key"));
        for pair in &pairs {
            assert!(rendered.contains(&pair.address));
            assert!(rendered.contains(&pair.private_key));
        }
    }
}
