use super::wordlist::{EVEN_WORDS, ODD_WORDS};
use crate::error::{Result, SeedgenError};
use sha2::{Digest, Sha256};

fn word_for(byte: u8, position: usize) -> &'static str {
    if position % 2 == 0 {
        EVEN_WORDS[byte as usize]
    } else {
        ODD_WORDS[byte as usize]
    }
}

fn byte_for(word: &str, position: usize) -> Option<u8> {
    let list = if position % 2 == 0 {
        &EVEN_WORDS
    } else {
        &ODD_WORDS
    };
    list.iter()
        .position(|w| w.eq_ignore_ascii_case(word))
        .map(|idx| idx as u8)
}

fn checksum_byte(seed: &[u8]) -> u8 {
    Sha256::digest(seed)[0]
}

/// One word per seed byte followed by a checksum word.
pub fn encode(seed: &[u8]) -> Vec<String> {
    let mut words: Vec<String> = seed
        .iter()
        .enumerate()
        .map(|(pos, b)| word_for(*b, pos).to_string())
        .collect();
    words.push(word_for(checksum_byte(seed), seed.len()).to_string());
    words
}

pub fn decode<S: AsRef<str>>(words: &[S]) -> Result<Vec<u8>> {
    if words.len() < 2 {
        return Err(SeedgenError::mnemonic("too few words"));
    }

    let mut bytes = Vec::with_capacity(words.len());
    for (pos, word) in words.iter().enumerate() {
        let word = word.as_ref();
        let byte = byte_for(word, pos).ok_or_else(|| {
            SeedgenError::mnemonic(format!("word {} ('{}') is not valid here", pos + 1, word))
        })?;
        bytes.push(byte);
    }

    // the last word is the checksum
    let checksum = bytes.pop().unwrap_or_default();
    if checksum != checksum_byte(&bytes) {
        return Err(SeedgenError::mnemonic("checksum mismatch"));
    }

    Ok(bytes)
}
