use crate::error::{CipherError, Result};
use serde::{Deserialize, Serialize};

/// Which way a cipher runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Encrypt,
    Decrypt,
}

impl std::str::FromStr for Direction {
    type Err = CipherError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "encrypt" | "enc" | "e" => Ok(Self::Encrypt),
            "decrypt" | "dec" | "d" => Ok(Self::Decrypt),
            _ => Err(CipherError::UnsupportedOption(format!("direction: {}", s))),
        }
    }
}

/// Report format for command output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = CipherError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(CipherError::UnsupportedOption(format!("format: {}", s))),
        }
    }
}
