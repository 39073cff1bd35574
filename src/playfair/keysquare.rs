use crate::alphabet::{letter_index, PLAYFAIR_ALPHABET};
use crate::error::{CipherError, Result};
use std::fmt;
use tracing::debug;

/// Side length of the Playfair grid
pub const SIDE: usize = 5;

/// Number of cells in the Playfair grid
pub const CELLS: usize = SIDE * SIDE;

/// 5x5 Playfair key square
///
/// Stores the 25 letters in row-major order together with a letter-indexed
/// position table, so lookups never scan the grid. Every letter of the
/// 25-letter alphabet appears exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySquare {
    letters: [u8; CELLS],
    /// Position of each letter `a..z`; `j` is never present
    positions: [Option<u8>; 26],
}

impl KeySquare {
    /// Build the key square for a keyword
    ///
    /// The keyword is lower-cased, `j` becomes `i`, repeated letters keep
    /// only their first occurrence, and the remaining alphabet letters
    /// follow in natural order. An empty keyword gives the plain alphabet.
    pub fn from_keyword(keyword: &str) -> Result<Self> {
        let mut used = [false; 26];
        let mut letters = Vec::with_capacity(CELLS);

        for ch in keyword.chars() {
            if !ch.is_ascii_alphabetic() {
                return Err(CipherError::InvalidCharacter {
                    ch,
                    context: "Playfair keyword",
                });
            }
            let letter = match ch.to_ascii_lowercase() as u8 {
                b'j' => b'i',
                other => other,
            };
            if !used[letter_index(letter)] {
                used[letter_index(letter)] = true;
                letters.push(letter);
            }
        }

        let keyword_len = letters.len();
        letters.extend(
            PLAYFAIR_ALPHABET
                .iter()
                .copied()
                .filter(|&l| !used[letter_index(l)]),
        );

        debug!(
            keyword_letters = keyword_len,
            "built Playfair key square {}",
            String::from_utf8_lossy(&letters)
        );

        Self::from_letters(&letters)
    }

    /// Validate an explicit 25-letter arrangement, given row by row
    pub fn from_letters(letters: &[u8]) -> Result<Self> {
        if letters.len() != CELLS {
            return Err(CipherError::InvalidKeySquare(format!(
                "expected {} letters, got {}",
                CELLS,
                letters.len()
            )));
        }

        let mut grid = [0u8; CELLS];
        let mut positions = [None; 26];
        for (idx, &raw) in letters.iter().enumerate() {
            let letter = raw.to_ascii_lowercase();
            if !letter.is_ascii_lowercase() || letter == b'j' {
                return Err(CipherError::InvalidKeySquare(format!(
                    "{:?} is not a Playfair letter",
                    raw as char
                )));
            }
            let slot = &mut positions[letter_index(letter)];
            if slot.is_some() {
                return Err(CipherError::InvalidKeySquare(format!(
                    "letter {:?} appears more than once",
                    letter as char
                )));
            }
            *slot = Some(idx as u8);
            grid[idx] = letter;
        }

        Ok(Self {
            letters: grid,
            positions,
        })
    }

    /// Index (0..25) of a letter, or `None` for `j` and non-letters
    pub fn index_of(&self, letter: u8) -> Option<usize> {
        let letter = letter.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return None;
        }
        self.positions[letter_index(letter)].map(usize::from)
    }

    /// Letter at a grid index. Panics if `index >= 25`.
    pub fn letter_at(&self, index: usize) -> u8 {
        self.letters[index]
    }

    pub fn letters(&self) -> &[u8; CELLS] {
        &self.letters
    }

    /// The 25 letters as one lower-case string
    pub fn as_string(&self) -> String {
        self.letters.iter().map(|&b| b as char).collect()
    }

    /// The grid as five strings, top row first
    pub fn rows(&self) -> Vec<String> {
        self.letters
            .chunks_exact(SIDE)
            .map(|row| row.iter().map(|&b| b as char).collect())
            .collect()
    }
}

impl fmt::Display for KeySquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.letters.chunks_exact(SIDE).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row
                .iter()
                .map(|&b| (b as char).to_ascii_uppercase().to_string())
                .collect();
            write!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

#[inline]
pub(crate) fn row(index: usize) -> usize {
    index / SIDE
}

#[inline]
pub(crate) fn column(index: usize) -> usize {
    index % SIDE
}
