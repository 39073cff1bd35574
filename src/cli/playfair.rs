use super::render;
use crate::error::Result;
use crate::options::{Direction, OutputFormat};
use crate::playfair::{join_digraphs, playfair_decrypt, playfair_encrypt, preprocess, Digraph, KeySquare};
use serde::Serialize;

/// Options for the playfair command
#[derive(Debug, Clone, Default)]
pub struct PlayfairOptions {
    pub keyword: String,
    pub direction: Direction,
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct PlayfairReport<'a> {
    cipher: &'static str,
    direction: Direction,
    key_square: Vec<String>,
    digraphs: Vec<String>,
    output: &'a str,
}

/// Encrypt or decrypt `input` with a Playfair square built from the keyword
///
/// Encryption prints the upper-case ciphertext; decryption prints the
/// recovered letters with fillers still in place.
pub fn run_playfair(input: &str, options: &PlayfairOptions) -> Result<String> {
    let square = KeySquare::from_keyword(&options.keyword)?;

    let (digraphs, output) = match options.direction {
        Direction::Encrypt => {
            let ciphertext = playfair_encrypt(&preprocess(input), &square);
            let output = join_digraphs(&ciphertext).to_ascii_uppercase();
            (ciphertext, output)
        }
        Direction::Decrypt => {
            let ciphertext = Digraph::parse_stream(input)?;
            let output = playfair_decrypt(&ciphertext, &square);
            (ciphertext, output)
        }
    };

    let report = PlayfairReport {
        cipher: "playfair",
        direction: options.direction,
        key_square: square.rows(),
        digraphs: digraphs.iter().map(ToString::to_string).collect(),
        output: &output,
    };
    render(options.format, &report, format!("{}\n", output))
}

/// Show the key square for a keyword as a 5x5 grid
pub fn show_square(keyword: &str) -> Result<String> {
    let square = KeySquare::from_keyword(keyword)?;
    let mut output = String::new();
    output.push_str(&format!("Playfair key square for {:?}\n\n", keyword));
    output.push_str(&square.to_string());
    output.push('\n');
    Ok(output)
}
