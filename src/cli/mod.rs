pub mod keygen;
pub mod playfair;
pub mod shift;
pub mod substitution;
pub mod vigenere;

pub use keygen::*;
pub use playfair::*;
pub use shift::*;
pub use substitution::*;
pub use vigenere::*;

use crate::error::{CipherError, Result};
use crate::options::OutputFormat;
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Resolve command input: inline text, then a file, then stdin
///
/// One trailing line ending is removed. Blank input is rejected.
pub fn read_input(text: Option<&str>, file: Option<&Path>) -> Result<String> {
    let mut input = match (text, file) {
        (Some(text), _) => text.to_string(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }

    if input.trim().is_empty() {
        return Err(CipherError::EmptyInput("nothing to transform"));
    }
    Ok(input)
}

/// Render a report either as its plain text or as pretty JSON
pub(crate) fn render<T: Serialize>(format: OutputFormat, report: &T, text: String) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            Ok(json)
        }
    }
}
