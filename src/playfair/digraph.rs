use crate::alphabet::letters_only;
use crate::error::{CipherError, Result};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Letter inserted between doubled letters and used to pad odd messages
pub const FILLER: u8 = b'q';

/// Filler used where `q` itself would collide: a doubled `q`, or a
/// trailing `q` that needs a partner
pub const ALT_FILLER: u8 = b'z';

/// An ordered pair of distinct Playfair letters (lower-case, never `j`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digraph {
    first: u8,
    second: u8,
}

impl Digraph {
    /// Build a digraph, rejecting `j`, non-letters and identical letters
    pub fn new(first: char, second: char) -> Result<Self> {
        let first = playfair_letter(first)?;
        let second = playfair_letter(second)?;
        if first == second {
            return Err(CipherError::InvalidDigraphStream(format!(
                "digraph {}{} repeats a letter",
                first as char, second as char
            )));
        }
        Ok(Self { first, second })
    }

    /// Construct from letters already known to be valid and distinct
    pub(crate) fn from_valid(first: u8, second: u8) -> Self {
        debug_assert!(first != second && first != b'j' && second != b'j');
        Self { first, second }
    }

    pub fn first(&self) -> char {
        self.first as char
    }

    pub fn second(&self) -> char {
        self.second as char
    }

    pub(crate) fn bytes(&self) -> (u8, u8) {
        (self.first, self.second)
    }

    /// Split ciphertext into digraphs
    ///
    /// Whitespace is ignored; any other non-letter, a `j`, an odd letter
    /// count or a pair with two identical letters is rejected.
    pub fn parse_stream(text: &str) -> Result<Vec<Digraph>> {
        let letters: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
        if letters.len() % 2 != 0 {
            return Err(CipherError::InvalidDigraphStream(format!(
                "odd number of letters ({})",
                letters.len()
            )));
        }
        letters
            .chunks_exact(2)
            .map(|pair| Digraph::new(pair[0], pair[1]))
            .collect()
    }
}

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first as char, self.second as char)
    }
}

impl FromStr for Digraph {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => Digraph::new(a, b),
            _ => Err(CipherError::InvalidDigraphStream(format!(
                "{:?} is not a two-letter digraph",
                s
            ))),
        }
    }
}

fn playfair_letter(c: char) -> Result<u8> {
    let lower = c.to_ascii_lowercase();
    if !lower.is_ascii_lowercase() || lower == 'j' {
        return Err(CipherError::InvalidCharacter {
            ch: c,
            context: "Playfair digraph",
        });
    }
    Ok(lower as u8)
}

/// Prepare raw plaintext for Playfair
///
/// Keeps letters only (lower-cased), maps `j` to `i`, breaks every run of
/// identical adjacent letters with a filler and pads the final letter.
pub fn preprocess(text: &str) -> Vec<Digraph> {
    let mut letters: Vec<u8> = letters_only(text)
        .map(|b| if b == b'j' { b'i' } else { b })
        .collect();

    if letters.len() % 2 == 1 && letters.last() == Some(&FILLER) {
        letters.push(ALT_FILLER);
    }

    let split = split_duplicates(&letters);
    debug!(
        letters = letters.len(),
        fillers = split.len() - letters.len(),
        "split doubled letters"
    );

    split
        .chunks(2)
        .map(|pair| match *pair {
            [a, b] => Digraph::from_valid(a, b),
            [a] => Digraph::from_valid(a, pad_for(a)),
            _ => unreachable!("chunks(2) yields one or two letters"),
        })
        .collect()
}

/// Insert a filler after the first letter of every adjacent identical pair
///
/// The filler always differs from the letter it follows, so a single
/// left-to-right pass already leaves no adjacent duplicates.
pub fn split_duplicates(letters: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(letters.len() + letters.len() / 2);
    for &letter in letters {
        if out.last() == Some(&letter) {
            out.push(pad_for(letter));
        }
        out.push(letter);
    }
    out
}

fn pad_for(letter: u8) -> u8 {
    if letter == FILLER {
        ALT_FILLER
    } else {
        FILLER
    }
}

/// Concatenate digraphs into one lower-case string
pub fn join_digraphs(digraphs: &[Digraph]) -> String {
    digraphs.iter().map(ToString::to_string).collect()
}
