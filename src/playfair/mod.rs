//! Playfair digraph cipher
//!
//! ```text
//! keyword → KeySquare        plaintext → preprocess → [Digraph] → encrypt → [Digraph]
//! ```
//!
//! Decryption recovers the preprocessed digraphs exactly, filler letters
//! included; removing fillers is left to the reader.

pub mod digraph;
pub mod keysquare;
pub mod transform;

pub use digraph::{join_digraphs, preprocess, Digraph, ALT_FILLER, FILLER};
pub use keysquare::KeySquare;

use crate::error::Result;

/// Build the key square for `keyword`
pub fn build_key_square(keyword: &str) -> Result<KeySquare> {
    KeySquare::from_keyword(keyword)
}

/// Normalize plaintext into digraphs ready for encryption
pub fn preprocess_for_playfair(text: &str) -> Vec<Digraph> {
    preprocess(text)
}

/// Encrypt digraphs; join and upper-case the result for display
pub fn playfair_encrypt(digraphs: &[Digraph], square: &KeySquare) -> Vec<Digraph> {
    transform::encrypt(digraphs, square)
}

/// Decrypt digraphs into one upper-case string
pub fn playfair_decrypt(digraphs: &[Digraph], square: &KeySquare) -> String {
    transform::decrypt(digraphs, square)
}

/// A Playfair cipher bound to one key square
#[derive(Debug, Clone)]
pub struct Playfair {
    square: KeySquare,
}

impl Playfair {
    pub fn new(keyword: &str) -> Result<Self> {
        Ok(Self {
            square: KeySquare::from_keyword(keyword)?,
        })
    }

    pub fn with_square(square: KeySquare) -> Self {
        Self { square }
    }

    pub fn square(&self) -> &KeySquare {
        &self.square
    }

    /// Preprocess and encrypt free text, returning upper-case ciphertext
    pub fn encrypt_text(&self, plaintext: &str) -> String {
        let ciphertext = playfair_encrypt(&preprocess(plaintext), &self.square);
        join_digraphs(&ciphertext).to_ascii_uppercase()
    }

    /// Decrypt ciphertext letters (whitespace ignored)
    pub fn decrypt_text(&self, ciphertext: &str) -> Result<String> {
        let digraphs = Digraph::parse_stream(ciphertext)?;
        Ok(playfair_decrypt(&digraphs, &self.square))
    }
}
