use super::render;
use crate::error::Result;
use crate::options::{Direction, OutputFormat};
use crate::vigenere::VigenereKey;
use serde::Serialize;

/// Options for the vigenere command
#[derive(Debug, Clone, Default)]
pub struct VigenereOptions {
    pub key: String,
    pub direction: Direction,
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct VigenereReport<'a> {
    cipher: &'static str,
    direction: Direction,
    key_length: usize,
    output: &'a str,
}

pub fn run_vigenere(input: &str, options: &VigenereOptions) -> Result<String> {
    let key = VigenereKey::new(&options.key)?;
    let output = match options.direction {
        Direction::Encrypt => key.encrypt(input),
        Direction::Decrypt => key.decrypt(input.trim())?,
    };

    let report = VigenereReport {
        cipher: "vigenere",
        direction: options.direction,
        key_length: key.len(),
        output: &output,
    };
    render(options.format, &report, format!("{}\n", output))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_vigenere() {
        let opts = VigenereOptions {
            key: "lemon".into(),
            ..Default::default()
        };
        assert_eq!(run_vigenere("attack at dawn", &opts).unwrap(), "lxfopvefrnhr\n");

        let opts = VigenereOptions {
            direction: Direction::Decrypt,
            ..opts
        };
        assert_eq!(run_vigenere("lxfopvefrnhr", &opts).unwrap(), "attackatdawn\n");
    }

    #[test]
    fn test_run_vigenere_requires_key() {
        assert!(run_vigenere("abc", &VigenereOptions::default())
            .unwrap_err()
            .is_invalid_input());
    }
}
