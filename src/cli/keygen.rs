use super::render;
use crate::error::Result;
use crate::options::OutputFormat;
use crate::substitution::{generate_permutation, SubstitutionKey};
use serde::Serialize;

/// Options for the keygen command
#[derive(Debug, Clone, Default)]
pub struct KeygenOptions {
    /// Seed for a reproducible permutation
    pub seed: Option<u64>,
    pub passphrase: Option<String>,
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct KeygenReport<'a> {
    key: &'a SubstitutionKey,
    source: &'static str,
}

/// Print a substitution permutation
pub fn run_keygen(options: &KeygenOptions) -> Result<String> {
    let (key, source) = match (&options.passphrase, options.seed) {
        (Some(phrase), _) => (SubstitutionKey::from_passphrase(phrase)?, "passphrase"),
        (None, Some(seed)) => (SubstitutionKey::from_seed(seed), "seed"),
        (None, None) => (generate_permutation(), "random"),
    };

    let report = KeygenReport { key: &key, source };
    render(options.format, &report, format!("{}\n", key))
}
