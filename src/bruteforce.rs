use crate::alphabet::ALPHABET_LEN;
use crate::shift::unrotate;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// One decryption attempt of a shift-cipher key sweep
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub key: u8,
    pub plaintext: String,
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>2}: {}", self.key, self.plaintext)
    }
}

/// Decrypt `ciphertext` under every shift `0..26`, in ascending key order
///
/// No candidate is ranked or selected; picking the readable one is up to
/// the caller.
pub fn brute_force_rotate(ciphertext: &str) -> Vec<Candidate> {
    debug!(chars = ciphertext.chars().count(), "sweeping shift key space");
    (0..ALPHABET_LEN)
        .map(|key| Candidate {
            key,
            plaintext: unrotate(ciphertext, key as i64),
        })
        .collect()
}
