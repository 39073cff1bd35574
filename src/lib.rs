//! Cipherkit - classical ciphers for teaching
//!
//! Pure, independent implementations of pre-modern ciphers. None of them
//! offer any real security.
//!
//! ## Ciphers
//!
//! - **Playfair**: digraph cipher over a 5x5 key square built from a keyword
//! - **Shift**: generalized Caesar / ROT13 rotation, plus a brute-force
//!   sweep of all 26 keys
//! - **Substitution**: arbitrary permutation of the alphabet
//! - **Vigenere**: rotation keyed by a repeating keyword
//!
//! ## Playfair pipeline
//!
//! ```text
//! Plaintext → Filter letters → j→i → Split doubles → Pair → Encrypt digraphs → Ciphertext
//! ```
//!
//! ## Example
//!
//! ```
//! use cipherkit::playfair::{build_key_square, join_digraphs, playfair_decrypt,
//!     playfair_encrypt, preprocess_for_playfair};
//!
//! let square = build_key_square("monarchy").unwrap();
//! let digraphs = preprocess_for_playfair("instruments");
//! let ciphertext = playfair_encrypt(&digraphs, &square);
//! assert_eq!(join_digraphs(&ciphertext).to_uppercase(), "GATLMZCLRQTS");
//! assert_eq!(playfair_decrypt(&ciphertext, &square), "INSTRUMENTSQ");
//! ```

pub mod alphabet;
pub mod bruteforce;
pub mod cli;
pub mod error;
pub mod options;
pub mod playfair;
pub mod shift;
pub mod substitution;
pub mod vigenere;

pub use bruteforce::{brute_force_rotate, Candidate};
pub use error::{CipherError, Result};
pub use playfair::{
    build_key_square, playfair_decrypt, playfair_encrypt, preprocess_for_playfair, Digraph,
    KeySquare, Playfair,
};
pub use shift::{rotate, unrotate};
pub use substitution::{
    generate_permutation, generate_permutation_with, substitution_decrypt, substitution_encrypt,
    SubstitutionKey,
};
pub use vigenere::{vigenere_decrypt, vigenere_encrypt, VigenereKey};
