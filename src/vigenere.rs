use crate::alphabet::{letters_only, ALPHABET_LEN};
use crate::error::{CipherError, Result};

/// Vigenere running key, kept as per-position shifts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VigenereKey {
    shifts: Vec<u8>,
}

impl VigenereKey {
    /// Parse a key of ASCII letters; case is ignored
    pub fn new(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(CipherError::EmptyKey("Vigenere key"));
        }
        let shifts = key
            .chars()
            .map(|ch| {
                if ch.is_ascii_alphabetic() {
                    Ok(ch.to_ascii_lowercase() as u8 - b'a')
                } else {
                    Err(CipherError::InvalidCharacter {
                        ch,
                        context: "Vigenere key",
                    })
                }
            })
            .collect::<Result<Vec<u8>>>()?;
        Ok(Self { shifts })
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    fn shift_at(&self, position: usize) -> u8 {
        self.shifts[position % self.shifts.len()]
    }

    /// Encrypt the letters of `text` into lower-case ciphertext
    ///
    /// Non-letters are discarded before the key is applied, so they do not
    /// advance the key position.
    pub fn encrypt(&self, text: &str) -> String {
        letters_only(text)
            .enumerate()
            .map(|(i, b)| {
                let p = b - b'a';
                (b'a' + (p + self.shift_at(i)) % ALPHABET_LEN) as char
            })
            .collect()
    }

    /// Decrypt ciphertext made only of letters
    pub fn decrypt(&self, text: &str) -> Result<String> {
        text.chars()
            .enumerate()
            .map(|(i, ch)| {
                if !ch.is_ascii_alphabetic() {
                    return Err(CipherError::InvalidCharacter {
                        ch,
                        context: "Vigenere ciphertext",
                    });
                }
                let c = ch.to_ascii_lowercase() as u8 - b'a';
                let p = (c + ALPHABET_LEN - self.shift_at(i)) % ALPHABET_LEN;
                Ok((b'a' + p) as char)
            })
            .collect()
    }
}

pub fn vigenere_encrypt(text: &str, key: &str) -> Result<String> {
    Ok(VigenereKey::new(key)?.encrypt(text))
}

pub fn vigenere_decrypt(text: &str, key: &str) -> Result<String> {
    VigenereKey::new(key)?.decrypt(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lemon_vector() {
        assert_eq!(vigenere_encrypt("attackatdawn", "lemon").unwrap(), "lxfopvefrnhr");
        assert_eq!(vigenere_decrypt("lxfopvefrnhr", "lemon").unwrap(), "attackatdawn");
    }

    #[test]
    fn test_encrypt_filters_before_keying() {
        assert_eq!(
            vigenere_encrypt("Attack at dawn!", "LEMON").unwrap(),
            "lxfopvefrnhr"
        );
    }

    #[test]
    fn test_key_a_is_identity() {
        assert_eq!(vigenere_encrypt("Hello", "a").unwrap(), "hello");
    }

    #[test]
    fn test_decrypt_accepts_upper_case() {
        assert_eq!(vigenere_decrypt("LXFOPV", "lemon").unwrap(), "attack");
    }

    #[test]
    fn test_decrypt_rejects_non_letters() {
        let err = vigenere_decrypt("lxf opv", "lemon").unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_invalid_keys() {
        assert!(matches!(VigenereKey::new(""), Err(CipherError::EmptyKey(_))));
        assert!(VigenereKey::new("two words").is_err());
        assert!(VigenereKey::new("k3y").is_err());
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(vigenere_encrypt("", "key").unwrap(), "");
        assert_eq!(vigenere_decrypt("", "key").unwrap(), "");
    }
}
