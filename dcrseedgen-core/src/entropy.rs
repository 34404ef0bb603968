use crate::error::{Result, SeedgenError};
use rand::rngs::OsRng;
use rand::TryRngCore;

/// Source of the random bytes behind seeds and private keys.
pub trait EntropySource {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()>;
}

/// Operating system CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| SeedgenError::entropy(format!("OS random source failed: {}", e)))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_entropy_fills_buffer() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        OsEntropy.fill(&mut a).unwrap();
        OsEntropy.fill(&mut b).unwrap();

        assert_ne!(a, b);
    }
}
