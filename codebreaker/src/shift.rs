use anyhow::{bail, Result};
use cipherkit::bruteforce::{brute_force_rotate, Candidate};
use cipherkit::cli::read_input;
use std::path::Path;

#[derive(Default)]
pub struct ShiftAttackOptions {
    pub json: bool,
    /// Only print this key's candidate
    pub key: Option<u8>,
}

/// Load ciphertext from inline text, a file, or stdin.
pub fn load_ciphertext(text: Option<&str>, file: Option<&Path>) -> Result<String> {
    Ok(read_input(text, file)?)
}

/// Try every shift key and report each candidate plaintext.
pub fn run(ciphertext: &str, options: &ShiftAttackOptions) -> Result<String> {
    let mut candidates = brute_force_rotate(ciphertext);
    if let Some(key) = options.key {
        if key > 25 {
            bail!("Key {} out of bounds (0..25)", key);
        }
        candidates.retain(|c| c.key == key);
    }

    if options.json {
        let mut json = serde_json::to_string_pretty(&candidates)?;
        json.push('\n');
        return Ok(json);
    }

    Ok(format_report(ciphertext, &candidates))
}

fn format_report(ciphertext: &str, candidates: &[Candidate]) -> String {
    let mut output = String::new();
    output.push_str("Shift Cipher Brute Force\n");
    output.push_str("========================\n\n");
    output.push_str(&format!("Ciphertext: {}\n", ciphertext));
    output.push_str(&format!("Candidates: {}\n\n", candidates.len()));
    for candidate in candidates {
        output.push_str(&format!("Possible shift/key: {}\n", candidate.key));
        output.push_str(&format!("{}\n\n", candidate.plaintext));
    }
    output
}
