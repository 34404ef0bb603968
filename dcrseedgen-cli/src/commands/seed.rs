use crate::config::CliContext;
use crate::theme::Theme;
use clap::Subcommand;
use comfy_table::Table;
use dcrseedgen_core::{
    decode_mnemonic, generate_seed, MnemonicEncoding, OsEntropy, Result, Seed, SeedgenError,
    Verification, WordGrid,
};
use dialoguer::Input;

#[derive(Subcommand)]
pub enum SeedCommands {
    /// Generate a new seed and show its mnemonic words
    Generate {
        /// Seed size in bytes (16-64)
        #[arg(short, long)]
        size: Option<usize>,
        /// Mnemonic encoding (pgp, bip39)
        #[arg(short, long)]
        encoding: Option<String>,
        /// Re-enter the words afterwards to check they were written down
        #[arg(long)]
        verify: bool,
        /// Print the seed as JSON
        #[arg(long)]
        json: bool,
        /// Copy the hex seed to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Decode mnemonic words back into the hex seed
    Decode {
        /// Mnemonic words or hex seed (will prompt if not provided)
        words: Vec<String>,
        /// Mnemonic encoding (pgp, bip39)
        #[arg(short, long)]
        encoding: Option<String>,
    },
}

pub async fn handle_seed_command(cmd: SeedCommands, ctx: &CliContext) -> Result<()> {
    match cmd {
        SeedCommands::Generate {
            size,
            encoding,
            verify,
            json,
            copy,
        } => {
            let size = size.unwrap_or(ctx.config.seed_size);
            let encoding = parse_encoding(encoding, ctx)?;
            let layout = ctx.config.layout;

            let (seed, mut grid) = tokio::task::spawn_blocking(move || {
                let seed = generate_seed(size, encoding, &mut OsEntropy)?;
                let grid = WordGrid::new(seed.words(), layout);
                Ok::<_, SeedgenError>((seed, grid))
            })
            .await
            .map_err(|e| SeedgenError::internal(format!("Seed generation task failed: {}", e)))??;

            if json {
                println!("{}", serde_json::to_string_pretty(&seed)?);
            } else {
                print_seed(&seed, &grid, &ctx.theme);
            }

            if copy {
                copy_hex_seed(&seed, |text| arboard::Clipboard::new()?.set_text(text))?;
                println!("{}", ctx.theme.success("Hex seed copied to clipboard"));
            }

            if verify {
                let outcome = verify_interactively(&mut grid)?;
                report_verification(outcome, &grid, &ctx.theme);
            }
        }

        SeedCommands::Decode { words, encoding } => {
            let encoding = parse_encoding(encoding, ctx)?;

            let input = if words.is_empty() {
                Input::<String>::new()
                    .with_prompt("Enter mnemonic words or hex seed")
                    .interact_text()
                    .map_err(|e| SeedgenError::dialog(e.to_string()))?
            } else {
                words.join(" ")
            };

            let bytes = decode_mnemonic(&input, encoding)?;
            println!("{}", ctx.theme.success("Mnemonic is valid"));
            println!("Hex Seed: {}", hex::encode(&bytes));
        }
    }

    Ok(())
}

fn parse_encoding(encoding: Option<String>, ctx: &CliContext) -> Result<MnemonicEncoding> {
    match encoding {
        Some(e) => e.parse(),
        None => Ok(ctx.config.encoding),
    }
}

fn print_seed(seed: &Seed, grid: &WordGrid, theme: &Theme) {
    println!("Mnemonic Words:");
    println!("{}", grid_table(grid, theme, GridCell::Word));
    println!();
    println!("Hex Seed:");
    println!("{}", seed.hex());
}

fn copy_hex_seed<F>(seed: &Seed, set_text: F) -> Result<()>
where
    F: FnOnce(String) -> std::result::Result<(), arboard::Error>,
{
    set_text(seed.hex().to_string()).map_err(|e| SeedgenError::clipboard(e.to_string()))
}

#[derive(Clone, Copy)]
enum GridCell {
    Word,
    Input,
}

/// One table column per grid column, words numbered top to bottom.
fn grid_table(grid: &WordGrid, theme: &Theme, cell: GridCell) -> Table {
    let mut table = theme.table();
    let rows = grid.columns().iter().map(|c| c.len()).max().unwrap_or(0);

    let mut offsets = Vec::with_capacity(grid.columns().len());
    let mut next = 1;
    for column in grid.columns() {
        offsets.push(next);
        next += column.len();
    }

    for row in 0..rows {
        let cells: Vec<String> = grid
            .columns()
            .iter()
            .zip(&offsets)
            .map(|(column, offset)| {
                let values = match cell {
                    GridCell::Word => column.words(),
                    GridCell::Input => column.inputs(),
                };
                values
                    .get(row)
                    .map(|value| format!("{}. {}", offset + row, value))
                    .unwrap_or_default()
            })
            .collect();
        table.add_row(cells);
    }
    table
}

fn verify_interactively(grid: &mut WordGrid) -> Result<Verification> {
    println!();
    println!("Verify: enter each word in order");

    grid.clear_inputs();
    for position in 1..=grid.word_count() {
        let value = Input::<String>::new()
            .with_prompt(format!("{}.", position))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| SeedgenError::dialog(e.to_string()))?;
        grid.set_input(position, value)?;
    }

    Ok(grid.verify())
}

fn report_verification(outcome: Verification, grid: &WordGrid, theme: &Theme) {
    match outcome {
        Verification::Verified => println!("{}", theme.success(outcome.message())),
        Verification::Mismatch => {
            println!("{}", theme.error(outcome.message()));
            let wrong: Vec<String> = grid.mismatches().iter().map(|p| p.to_string()).collect();
            println!("Check word(s): {}", wrong.join(", "));
            println!("{}", grid_table(grid, theme, GridCell::Input));
        }
    }
}
