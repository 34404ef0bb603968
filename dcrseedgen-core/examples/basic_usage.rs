use dcrseedgen_core::{
    export_key_pairs, generate_key_pairs, generate_seed, Network, OsEntropy, SeedgenConfig,
    WordGrid,
};
use tempfile::tempdir;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = SeedgenConfig::default();

    println!("Generating seed...");
    let seed = generate_seed(config.seed_size, config.encoding, &mut OsEntropy)?;
    let grid = WordGrid::new(seed.words(), config.layout);

    println!("Mnemonic words:");
    for (index, column) in grid.columns().iter().enumerate() {
        println!("  column {}: {}", index + 1, column.words().join(" "));
    }
    println!("Hex seed: {}", seed.hex());

    println!("\nGenerating addresses...");
    let pairs = generate_key_pairs(Network::Testnet3, 3, &mut OsEntropy)?;
    for pair in &pairs {
        println!("{}  {}", pair.address, pair.private_key);
    }

    let temp_dir = tempdir()?;
    let path = export_key_pairs(&pairs, temp_dir.path())?;
    println!("\nExported to {}", path.display());

    Ok(())
}
