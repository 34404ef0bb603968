use crate::error::{Result, SeedgenError};
use bitcoin::base58;
use bitcoin::hashes::{ripemd160, Hash};
use blake_hash::{Blake256, Digest};

pub const CHECKSUM_LEN: usize = 4;

pub fn blake256(data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Blake256::digest(data));
    out
}

pub fn double_blake256(data: &[u8]) -> [u8; 32] {
    blake256(&blake256(data))
}

/// RIPEMD160(BLAKE256(data)).
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160::Hash::hash(&blake256(data)).to_byte_array()
}

fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = double_blake256(payload);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}

/// Base58 with a double BLAKE-256 checksum appended.
pub fn check_encode(payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum(payload));
    base58::encode(&data)
}

pub fn check_decode(encoded: &str) -> Result<Vec<u8>> {
    let mut data =
        base58::decode(encoded).map_err(|e| SeedgenError::crypto(format!("Bad base58: {}", e)))?;
    if data.len() < CHECKSUM_LEN {
        return Err(SeedgenError::crypto("Encoded data too short"));
    }

    let split = data.len() - CHECKSUM_LEN;
    if data[split..] != checksum(&data[..split]) {
        return Err(SeedgenError::crypto("Checksum mismatch"));
    }
    data.truncate(split);
    Ok(data)
}
