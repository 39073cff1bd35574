use super::render;
use crate::error::Result;
use crate::options::{Direction, OutputFormat};
use crate::shift::{rotate, shift_name, unrotate, validate_cli_shift};
use serde::Serialize;

/// Options for the shift command
#[derive(Debug, Clone)]
pub struct ShiftOptions {
    pub shift: i64,
    pub direction: Direction,
    pub format: OutputFormat,
}

impl Default for ShiftOptions {
    fn default() -> Self {
        Self {
            shift: crate::shift::CAESAR_SHIFT,
            direction: Direction::Encrypt,
            format: OutputFormat::Text,
        }
    }
}

#[derive(Serialize)]
struct ShiftReport<'a> {
    cipher: &'static str,
    direction: Direction,
    shift: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    variant: Option<&'static str>,
    output: &'a str,
}

pub fn run_shift(input: &str, options: &ShiftOptions) -> Result<String> {
    let shift = validate_cli_shift(options.shift)?;
    let output = match options.direction {
        Direction::Encrypt => rotate(input, shift),
        Direction::Decrypt => unrotate(input, shift),
    };

    let report = ShiftReport {
        cipher: "shift",
        direction: options.direction,
        shift,
        variant: shift_name(shift),
        output: &output,
    };
    render(options.format, &report, format!("{}\n", output))
}
