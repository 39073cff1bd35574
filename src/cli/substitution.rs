use super::render;
use crate::error::{CipherError, Result};
use crate::options::{Direction, OutputFormat};
use crate::substitution::{generate_permutation, SubstitutionKey};
use serde::Serialize;

/// Options for the substitution command
///
/// `key` wins over `passphrase`. With neither, encryption draws a fresh
/// random permutation and reports it; decryption fails.
#[derive(Debug, Clone, Default)]
pub struct SubstitutionOptions {
    pub key: Option<String>,
    pub passphrase: Option<String>,
    pub direction: Direction,
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct SubstitutionReport<'a> {
    cipher: &'static str,
    direction: Direction,
    key: &'a SubstitutionKey,
    generated_key: bool,
    output: &'a str,
}

fn resolve_key(options: &SubstitutionOptions) -> Result<(SubstitutionKey, bool)> {
    if let Some(letters) = &options.key {
        return Ok((SubstitutionKey::from_letters(letters)?, false));
    }
    if let Some(phrase) = &options.passphrase {
        return Ok((SubstitutionKey::from_passphrase(phrase)?, false));
    }
    match options.direction {
        Direction::Encrypt => Ok((generate_permutation(), true)),
        Direction::Decrypt => Err(CipherError::EmptyKey("decryption needs --key or --passphrase")),
    }
}

pub fn run_substitution(input: &str, options: &SubstitutionOptions) -> Result<String> {
    let (key, generated) = resolve_key(options)?;
    let output = match options.direction {
        Direction::Encrypt => key.encrypt(input),
        Direction::Decrypt => key.decrypt(input),
    };

    let report = SubstitutionReport {
        cipher: "substitution",
        direction: options.direction,
        key: &key,
        generated_key: generated,
        output: &output,
    };

    let text = if generated {
        format!("Key: {}\n{}\n", key, output)
    } else {
        format!("{}\n", output)
    };
    render(options.format, &report, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const QWERTY: &str = "qwertyuiopasdfghjklzxcvbnm";

    #[test]
    fn test_run_with_explicit_key() {
        let opts = SubstitutionOptions {
            key: Some(QWERTY.into()),
            ..Default::default()
        };
        assert_eq!(run_substitution("abc, xyz", &opts).unwrap(), "qwebnm\n");
    }

    #[test]
    fn test_run_with_passphrase_roundtrip() {
        let enc_opts = SubstitutionOptions {
            passphrase: Some("swordfish".into()),
            ..Default::default()
        };
        let ciphertext = run_substitution("Hello there", &enc_opts).unwrap();
        let dec_opts = SubstitutionOptions {
            direction: Direction::Decrypt,
            ..enc_opts
        };
        assert_eq!(run_substitution(ciphertext.trim(), &dec_opts).unwrap(), "hellothere\n");
    }

    #[test]
    fn test_run_generates_key_for_encryption() {
        let out = run_substitution("abc", &SubstitutionOptions::default()).unwrap();
        assert!(out.starts_with("Key: "));
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn test_run_decrypt_without_key_fails() {
        let opts = SubstitutionOptions {
            direction: Direction::Decrypt,
            ..Default::default()
        };
        assert!(matches!(
            run_substitution("abc", &opts),
            Err(CipherError::EmptyKey(_))
        ));
    }

    #[test]
    fn test_run_json_report() {
        let opts = SubstitutionOptions {
            key: Some(QWERTY.into()),
            format: OutputFormat::Json,
            ..Default::default()
        };
        let value: serde_json::Value =
            serde_json::from_str(&run_substitution("abc", &opts).unwrap()).unwrap();
        assert_eq!(value["key"], QWERTY);
        assert_eq!(value["generated_key"], false);
        assert_eq!(value["output"], "qwe");
    }
}
