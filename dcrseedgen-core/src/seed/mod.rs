pub mod pgp;
mod wordlist;

use crate::entropy::EntropySource;
use crate::error::{Result, SeedgenError};
use bip39::{Language, Mnemonic};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MIN_SEED_BYTES: usize = 16;
pub const MAX_SEED_BYTES: usize = 64;
pub const RECOMMENDED_SEED_BYTES: usize = 32;

/// How seed bytes are turned into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MnemonicEncoding {
    /// PGP word list with a trailing checksum word; `n` bytes give `n + 1` words.
    #[default]
    Pgp,
    /// English BIP39 word list.
    Bip39,
}

impl fmt::Display for MnemonicEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MnemonicEncoding::Pgp => f.write_str("pgp"),
            MnemonicEncoding::Bip39 => f.write_str("bip39"),
        }
    }
}

impl FromStr for MnemonicEncoding {
    type Err = SeedgenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pgp" => Ok(MnemonicEncoding::Pgp),
            "bip39" => Ok(MnemonicEncoding::Bip39),
            _ => Err(SeedgenError::config(format!(
                "Invalid mnemonic encoding: {}. Supported encodings: pgp, bip39",
                s
            ))),
        }
    }
}

/// A freshly generated wallet seed with its mnemonic and hex renderings.
#[derive(Clone, Serialize)]
pub struct Seed {
    #[serde(skip)]
    bytes: Vec<u8>,
    words: Vec<String>,
    hex: String,
    encoding: MnemonicEncoding,
}

impl Seed {
    pub fn from_bytes(bytes: Vec<u8>, encoding: MnemonicEncoding) -> Result<Self> {
        check_seed_size(bytes.len())?;
        let words = encode_mnemonic(&bytes, encoding)?;
        let hex = hex::encode(&bytes);
        Ok(Self {
            bytes,
            words,
            hex,
            encoding,
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn mnemonic(&self) -> String {
        self.words.join(" ")
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn encoding(&self) -> MnemonicEncoding {
        self.encoding
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seed")
            .field("len", &self.bytes.len())
            .field("encoding", &self.encoding)
            .finish_non_exhaustive()
    }
}

fn check_seed_size(size: usize) -> Result<()> {
    if !(MIN_SEED_BYTES..=MAX_SEED_BYTES).contains(&size) {
        return Err(SeedgenError::InvalidSeedSize {
            size,
            min: MIN_SEED_BYTES,
            max: MAX_SEED_BYTES,
        });
    }
    Ok(())
}

/// Checks that `size` bytes can be rendered with `encoding`.
pub fn validate_seed_size(size: usize, encoding: MnemonicEncoding) -> Result<()> {
    check_seed_size(size)?;
    if encoding == MnemonicEncoding::Bip39 && (size > 32 || size % 4 != 0) {
        return Err(SeedgenError::config(format!(
            "BIP39 needs 16 to 32 bytes of entropy in steps of 4, got {}",
            size
        )));
    }
    Ok(())
}

pub fn generate_seed(
    size: usize,
    encoding: MnemonicEncoding,
    entropy: &mut impl EntropySource,
) -> Result<Seed> {
    validate_seed_size(size, encoding)?;

    let mut bytes = vec![0u8; size];
    entropy.fill(&mut bytes)?;

    let seed = Seed::from_bytes(bytes, encoding)?;
    tracing::info!(
        "Generated {}-byte seed ({} words, {})",
        size,
        seed.words().len(),
        encoding
    );
    Ok(seed)
}

pub fn encode_mnemonic(bytes: &[u8], encoding: MnemonicEncoding) -> Result<Vec<String>> {
    match encoding {
        MnemonicEncoding::Pgp => Ok(pgp::encode(bytes)),
        MnemonicEncoding::Bip39 => {
            let mnemonic = Mnemonic::from_entropy_in(Language::English, bytes)
                .map_err(|e| SeedgenError::mnemonic(format!("Failed to encode entropy: {}", e)))?;
            Ok(mnemonic
                .to_string()
                .split_whitespace()
                .map(str::to_string)
                .collect())
        }
    }
}

/// Recovers seed bytes from user input.
///
/// A single token that parses as hex of a valid seed length is taken as the
/// raw seed. Otherwise the input is split on whitespace and decoded as words.
pub fn decode_mnemonic(input: &str, encoding: MnemonicEncoding) -> Result<Vec<u8>> {
    let words: Vec<&str> = input.split_whitespace().collect();

    if words.len() == 1 {
        let bytes = hex::decode(words[0])
            .map_err(|e| SeedgenError::mnemonic(format!("Input is not a hex seed: {}", e)))?;
        check_seed_size(bytes.len())?;
        return Ok(bytes);
    }

    let bytes = match encoding {
        MnemonicEncoding::Pgp => pgp::decode(&words)?,
        MnemonicEncoding::Bip39 => Mnemonic::parse_in(Language::English, words.join(" "))
            .map_err(|e| SeedgenError::mnemonic(e.to_string()))?
            .to_entropy(),
    };
    check_seed_size(bytes.len())?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::testing::{FailingEntropy, FixedEntropy};
    use crate::entropy::OsEntropy;

    #[test]
    fn test_generate_recommended_seed() {
        let seed =
            generate_seed(RECOMMENDED_SEED_BYTES, MnemonicEncoding::Pgp, &mut OsEntropy).unwrap();

        assert_eq!(seed.bytes().len(), 32);
        assert_eq!(seed.words().len(), 33);
        assert_eq!(seed.hex().len(), 64);
    }

    #[test]
    fn test_seed_from_fixed_entropy() {
        let mut entropy = FixedEntropy::new((0u8..32).collect());
        let seed = generate_seed(32, MnemonicEncoding::Pgp, &mut entropy).unwrap();

        assert_eq!(
            seed.hex(),
            "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f"
        );
        assert_eq!(seed.words()[0], "aardvark");
        assert_eq!(seed.words()[32], "flatfoot");
    }

    #[test]
    fn test_regenerate_produces_new_seed() {
        let a = generate_seed(32, MnemonicEncoding::Pgp, &mut OsEntropy).unwrap();
        let b = generate_seed(32, MnemonicEncoding::Pgp, &mut OsEntropy).unwrap();

        assert_ne!(a.hex(), b.hex());
    }

    #[test]
    fn test_bip39_zero_entropy() {
        let words = encode_mnemonic(&[0u8; 32], MnemonicEncoding::Bip39).unwrap();

        assert_eq!(words.len(), 24);
        assert!(words[..23].iter().all(|w| w == "abandon"));
        assert_eq!(words[23], "art");
    }

    #[test]
    fn test_invalid_seed_sizes() {
        assert!(matches!(
            generate_seed(8, MnemonicEncoding::Pgp, &mut OsEntropy),
            Err(SeedgenError::InvalidSeedSize { size: 8, .. })
        ));
        assert!(generate_seed(65, MnemonicEncoding::Pgp, &mut OsEntropy).is_err());
        assert!(generate_seed(33, MnemonicEncoding::Bip39, &mut OsEntropy).is_err());
        assert!(generate_seed(64, MnemonicEncoding::Bip39, &mut OsEntropy).is_err());
    }

    #[test]
    fn test_entropy_failure_aborts_generation() {
        let result = generate_seed(32, MnemonicEncoding::Pgp, &mut FailingEntropy);
        assert!(matches!(result, Err(SeedgenError::Entropy(_))));
    }

    #[test]
    fn test_decode_mnemonic_words_and_hex() {
        let seed = generate_seed(32, MnemonicEncoding::Pgp, &mut OsEntropy).unwrap();

        let from_words = decode_mnemonic(&seed.mnemonic(), MnemonicEncoding::Pgp).unwrap();
        let from_hex = decode_mnemonic(seed.hex(), MnemonicEncoding::Pgp).unwrap();

        assert_eq!(from_words, seed.bytes());
        assert_eq!(from_hex, seed.bytes());
    }

    #[test]
    fn test_decode_bip39() {
        let phrase = format!("{} art", ["abandon"; 23].join(" "));
        let bytes = decode_mnemonic(&phrase, MnemonicEncoding::Bip39).unwrap();

        assert_eq!(bytes, vec![0u8; 32]);
    }
}
