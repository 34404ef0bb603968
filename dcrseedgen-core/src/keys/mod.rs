pub mod hash;

use crate::entropy::EntropySource;
use crate::error::{Result, SeedgenError};
use crate::network::Network;
use crate::types::KeyPair;
use bitcoin::secp256k1::{PublicKey, Secp256k1, SecretKey};

/// Signature scheme byte carried in a WIF (ECDSA over secp256k1).
pub const ECDSA_SECP256K1: u8 = 0x00;

const ADDRESS_PAYLOAD_LEN: usize = 2 + 20;
const WIF_PAYLOAD_LEN: usize = 2 + 1 + 32;

/// Pay-to-pubkey-hash address for a compressed public key.
pub fn encode_address(pubkey: &PublicKey, network: Network) -> String {
    let mut payload = Vec::with_capacity(ADDRESS_PAYLOAD_LEN);
    payload.extend_from_slice(&network.pubkey_hash_addr_id());
    payload.extend_from_slice(&hash::hash160(&pubkey.serialize()));
    hash::check_encode(&payload)
}

pub fn encode_wif(secret: &SecretKey, network: Network) -> String {
    let mut payload = Vec::with_capacity(WIF_PAYLOAD_LEN);
    payload.extend_from_slice(&network.private_key_id());
    payload.push(ECDSA_SECP256K1);
    payload.extend_from_slice(&secret.secret_bytes());
    hash::check_encode(&payload)
}

pub fn decode_wif(wif: &str) -> Result<(Network, SecretKey)> {
    let payload = hash::check_decode(wif)
        .map_err(|e| SeedgenError::InvalidPrivateKey(e.to_string()))?;
    if payload.len() != WIF_PAYLOAD_LEN {
        return Err(SeedgenError::InvalidPrivateKey(format!(
            "unexpected length {}",
            payload.len()
        )));
    }

    let network = Network::from_private_key_id([payload[0], payload[1]])
        .ok_or_else(|| SeedgenError::InvalidPrivateKey("unknown network id".to_string()))?;
    if payload[2] != ECDSA_SECP256K1 {
        return Err(SeedgenError::InvalidPrivateKey(format!(
            "unsupported signature type {}",
            payload[2]
        )));
    }
    let secret = SecretKey::from_slice(&payload[3..])
        .map_err(|e| SeedgenError::InvalidPrivateKey(e.to_string()))?;

    Ok((network, secret))
}

/// Checks the checksum and version of a pay-to-pubkey-hash address.
pub fn validate_address(address: &str) -> Result<Network> {
    let payload =
        hash::check_decode(address).map_err(|e| SeedgenError::InvalidAddress(e.to_string()))?;
    if payload.len() != ADDRESS_PAYLOAD_LEN {
        return Err(SeedgenError::InvalidAddress(format!(
            "unexpected length {}",
            payload.len()
        )));
    }
    Network::from_pubkey_hash_addr_id([payload[0], payload[1]])
        .ok_or_else(|| SeedgenError::InvalidAddress("unknown network id".to_string()))
}

/// Builds the address and WIF for an existing secret key.
pub fn key_pair_from_secret(secret: &SecretKey, network: Network) -> KeyPair {
    let secp = Secp256k1::signing_only();
    let pubkey = PublicKey::from_secret_key(&secp, secret);

    KeyPair {
        address: encode_address(&pubkey, network),
        private_key: encode_wif(secret, network),
        network,
    }
}

/// Decodes the WIF of a pair and checks that it rebuilds the same address on the same network.
pub fn recheck_key_pair(pair: &KeyPair) -> Result<()> {
    let (network, secret) = decode_wif(&pair.private_key)?;
    if network != pair.network {
        return Err(SeedgenError::crypto(format!(
            "Private key is for {}, expected {}",
            network, pair.network
        )));
    }
    if validate_address(&pair.address)? != pair.network {
        return Err(SeedgenError::crypto(format!(
            "Address {} is not a {} address",
            pair.address, pair.network
        )));
    }
    if key_pair_from_secret(&secret, network) != *pair {
        return Err(SeedgenError::crypto(format!(
            "Private key does not match address {}",
            pair.address
        )));
    }
    Ok(())
}

/// A new key pair from fresh randomness.
pub fn generate_key_pair(network: Network, entropy: &mut impl EntropySource) -> Result<KeyPair> {
    let mut bytes = [0u8; 32];
    entropy.fill(&mut bytes)?;

    let secret = SecretKey::from_slice(&bytes)
        .map_err(|e| SeedgenError::crypto(format!("Failed to create secret key: {}", e)))?;

    Ok(key_pair_from_secret(&secret, network))
}

pub fn generate_key_pairs(
    network: Network,
    count: usize,
    entropy: &mut impl EntropySource,
) -> Result<Vec<KeyPair>> {
    let mut pairs = Vec::with_capacity(count);
    for _ in 0..count {
        pairs.push(generate_key_pair(network, entropy)?);
    }

    tracing::info!("Generated {} key pair(s) for {}", pairs.len(), network);
    Ok(pairs)
}

/// Parses a user-supplied number of key pairs to generate.
pub fn parse_quantity(input: &str) -> Result<usize> {
    let input = input.trim();
    if input.is_empty() {
        return Err(SeedgenError::quantity(
            "Please specify the number of addresses to generate",
        ));
    }

    let quantity: usize = input.parse().map_err(|_| {
        SeedgenError::quantity("Number of addresses to generate must be a valid number")
    })?;

    if quantity == 0 {
        return Err(SeedgenError::quantity(
            "Number of addresses must be greater than 0",
        ));
    }

    Ok(quantity)
}
