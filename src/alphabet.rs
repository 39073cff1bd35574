/// The 26-letter universe of the shift, substitution and Vigenere ciphers
pub const ALPHABET: [u8; 26] = *b"abcdefghijklmnopqrstuvwxyz";

/// The 25-letter Playfair universe: `a`..`z` without `j`
pub const PLAYFAIR_ALPHABET: [u8; 25] = *b"abcdefghiklmnopqrstuvwxyz";

/// Number of letters in the full alphabet
pub const ALPHABET_LEN: u8 = 26;

/// Zero-based position of a lower-case ASCII letter in `a..z`
#[inline]
pub fn letter_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase());
    (letter - b'a') as usize
}

/// Rotate an ASCII letter within its own case, leaving anything else alone
#[inline]
pub fn rotate_letter(c: char, shift: u8) -> char {
    let base = match c {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return c,
    };
    let offset = (c as u8 - base + shift % ALPHABET_LEN) % ALPHABET_LEN;
    (base + offset) as char
}

/// Lower-cased ASCII letters of `text`, everything else discarded
pub fn letters_only(text: &str) -> impl Iterator<Item = u8> + '_ {
    text.bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| b.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playfair_alphabet_has_no_j() {
        assert_eq!(PLAYFAIR_ALPHABET.len(), 25);
        assert!(!PLAYFAIR_ALPHABET.contains(&b'j'));
        assert!(PLAYFAIR_ALPHABET.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_rotate_letter_preserves_case() {
        assert_eq!(rotate_letter('a', 1), 'b');
        assert_eq!(rotate_letter('Z', 1), 'A');
        assert_eq!(rotate_letter('m', 13), 'z');
        assert_eq!(rotate_letter('!', 5), '!');
        assert_eq!(rotate_letter('é', 5), 'é');
    }

    #[test]
    fn test_letters_only() {
        let filtered: Vec<u8> = letters_only("Hi, 2 you!").collect();
        assert_eq!(filtered, b"hiyou");
    }
}
