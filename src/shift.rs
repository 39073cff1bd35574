//! Shift cipher (generalized Caesar)
//!
//! Letters rotate within their own case; everything else passes through.
//! A shift of 3 is the Caesar cipher and 13 is ROT13.

use crate::alphabet::{rotate_letter, ALPHABET_LEN};
use crate::error::{CipherError, Result};

/// Caesar's original shift
pub const CAESAR_SHIFT: i64 = 3;

/// ROT13 shift, its own inverse
pub const ROT13_SHIFT: i64 = 13;

/// Largest shift the command line accepts
pub const MAX_CLI_SHIFT: i64 = 26;

/// Rotate every ASCII letter of `text` by `shift` positions
pub fn rotate(text: &str, shift: i64) -> String {
    let shift = reduce(shift);
    text.chars().map(|c| rotate_letter(c, shift)).collect()
}

/// Undo [`rotate`] with the same shift
pub fn unrotate(text: &str, shift: i64) -> String {
    rotate(text, -i64::from(reduce(shift)))
}

pub fn rot13(text: &str) -> String {
    rotate(text, ROT13_SHIFT)
}

/// Reduce any integer shift to `0..26`
pub fn reduce(shift: i64) -> u8 {
    shift.rem_euclid(ALPHABET_LEN as i64) as u8
}

/// Accept a shift typed by a user
///
/// Rotation works for any integer; the range check only keeps command
/// line keys readable.
pub fn validate_cli_shift(shift: i64) -> Result<i64> {
    if (0..=MAX_CLI_SHIFT).contains(&shift) {
        Ok(shift)
    } else {
        Err(CipherError::ShiftOutOfRange(shift))
    }
}

/// Human name for well-known shifts
pub fn shift_name(shift: i64) -> Option<&'static str> {
    match shift {
        CAESAR_SHIFT => Some("Caesar cipher"),
        ROT13_SHIFT => Some("ROT13 cipher"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_vectors() {
        assert_eq!(rotate("ABC", 3), "DEF");
        assert_eq!(rotate("xyz", 3), "abc");
        assert_eq!(rotate("Hello, World!", 13), "Uryyb, Jbeyq!");
    }

    #[test]
    fn test_negative_and_large_shifts() {
        assert_eq!(rotate("abc", -1), "zab");
        assert_eq!(rotate("abc", 27), "bcd");
        assert_eq!(rotate("abc", -53), "zab");
        assert_eq!(rotate("abc", 26), "abc");
        assert_eq!(unrotate(&rotate("abc", i64::MIN), i64::MIN), "abc");
        assert_eq!(unrotate(&rotate("abc", i64::MAX), i64::MAX), "abc");
        assert_eq!(unrotate("stu", i64::MIN), "abc");
    }

    #[test]
    fn test_unrotate_inverts() {
        let text = "Attack at dawn, 0600 hours.";
        for shift in -30..30 {
            assert_eq!(unrotate(&rotate(text, shift), shift), text);
        }
    }

    #[test]
    fn test_rot13_is_involution() {
        assert_eq!(rot13(&rot13("Why did the chicken")), "Why did the chicken");
    }

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(rotate("café", 1), "dbgé");
    }

    #[test]
    fn test_validate_cli_shift() {
        assert!(validate_cli_shift(0).is_ok());
        assert!(validate_cli_shift(26).is_ok());
        assert!(validate_cli_shift(27).is_err());
        assert!(validate_cli_shift(-1).is_err());
    }

    #[test]
    fn test_shift_name() {
        assert_eq!(shift_name(3), Some("Caesar cipher"));
        assert_eq!(shift_name(13), Some("ROT13 cipher"));
        assert_eq!(shift_name(7), None);
    }
}
