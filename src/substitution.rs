//! Monoalphabetic substitution cipher
//!
//! Non-letters are dropped on both encryption and decryption, unlike the
//! shift cipher which passes them through.

use crate::alphabet::{letter_index, letters_only, ALPHABET};
use crate::error::{CipherError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sha3::{Digest, Sha3_256};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A permutation of `a..z`, stored as the image of each letter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SubstitutionKey {
    image: [u8; 26],
    inverse: [u8; 26],
}

impl SubstitutionKey {
    /// Validate a 26-letter permutation such as `"qwertyuiopasdfghjklzxcvbnm"`
    pub fn from_letters(letters: &str) -> Result<Self> {
        if letters.is_empty() {
            return Err(CipherError::EmptyKey("substitution key"));
        }
        let count = letters.chars().count();
        if count != ALPHABET.len() {
            return Err(CipherError::InvalidSubstitutionKey(format!(
                "expected {} letters, got {}",
                ALPHABET.len(),
                count
            )));
        }

        let mut image = [0u8; 26];
        for (slot, ch) in image.iter_mut().zip(letters.chars()) {
            if !ch.is_ascii_alphabetic() {
                return Err(CipherError::InvalidCharacter {
                    ch,
                    context: "substitution key",
                });
            }
            *slot = ch.to_ascii_lowercase() as u8;
        }
        Self::from_image(image)
    }

    fn from_image(image: [u8; 26]) -> Result<Self> {
        let mut inverse = [0u8; 26];
        let mut seen = [false; 26];
        for (plain, &cipher) in ALPHABET.iter().zip(image.iter()) {
            let idx = letter_index(cipher);
            if seen[idx] {
                return Err(CipherError::InvalidSubstitutionKey(format!(
                    "letter {:?} appears more than once",
                    cipher as char
                )));
            }
            seen[idx] = true;
            inverse[idx] = *plain;
        }
        Ok(Self { image, inverse })
    }

    /// Derive a reproducible key from a passphrase
    ///
    /// The SHA3-256 digest of the passphrase seeds the generator, so the
    /// same passphrase always yields the same permutation.
    pub fn from_passphrase(passphrase: &str) -> Result<Self> {
        if passphrase.is_empty() {
            return Err(CipherError::EmptyKey("substitution passphrase"));
        }
        let seed: [u8; 32] = Sha3_256::digest(passphrase.as_bytes()).into();
        let mut rng = StdRng::from_seed(seed);
        Ok(generate_permutation_with(&mut rng))
    }

    /// Key drawn from a generator seeded with `seed`
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_permutation_with(&mut rng)
    }

    /// Ciphertext letter for a plaintext letter
    pub fn substitute(&self, letter: u8) -> u8 {
        self.image[letter_index(letter)]
    }

    /// Plaintext letter for a ciphertext letter
    pub fn restore(&self, letter: u8) -> u8 {
        self.inverse[letter_index(letter)]
    }

    /// Encrypt the letters of `text`, dropping everything else
    pub fn encrypt(&self, text: &str) -> String {
        letters_only(text)
            .map(|b| self.substitute(b) as char)
            .collect()
    }

    /// Decrypt the letters of `text`, dropping everything else
    pub fn decrypt(&self, text: &str) -> String {
        letters_only(text)
            .map(|b| self.restore(b) as char)
            .collect()
    }

    pub fn as_string(&self) -> String {
        self.image.iter().map(|&b| b as char).collect()
    }
}

impl fmt::Display for SubstitutionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl FromStr for SubstitutionKey {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_letters(s)
    }
}

impl From<SubstitutionKey> for String {
    fn from(key: SubstitutionKey) -> Self {
        key.as_string()
    }
}

impl TryFrom<String> for SubstitutionKey {
    type Error = CipherError;

    fn try_from(s: String) -> Result<Self> {
        Self::from_letters(&s)
    }
}

/// Uniformly random permutation of the alphabet from the thread-local RNG
pub fn generate_permutation() -> SubstitutionKey {
    generate_permutation_with(&mut rand::thread_rng())
}

/// Uniformly random permutation of the alphabet from `rng`
///
/// Each position takes a uniformly chosen letter out of those not yet
/// used.
pub fn generate_permutation_with<R: Rng + ?Sized>(rng: &mut R) -> SubstitutionKey {
    let mut remaining: Vec<u8> = ALPHABET.to_vec();
    let mut image = [0u8; 26];
    for slot in image.iter_mut() {
        let pick = rng.gen_range(0..remaining.len());
        *slot = remaining.remove(pick);
    }
    debug!("generated substitution permutation");

    // Every letter was taken exactly once
    match SubstitutionKey::from_image(image) {
        Ok(key) => key,
        Err(_) => unreachable!("drawing without replacement yields a permutation"),
    }
}

pub fn substitution_encrypt(text: &str, key: &SubstitutionKey) -> String {
    key.encrypt(text)
}

pub fn substitution_decrypt(text: &str, key: &SubstitutionKey) -> String {
    key.decrypt(text)
}
