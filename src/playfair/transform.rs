use super::digraph::Digraph;
use super::keysquare::{column, row, KeySquare, CELLS, SIDE};

/// Direction of a Playfair pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Encrypt,
    Decrypt,
}

/// Encrypt a digraph stream
pub fn encrypt(digraphs: &[Digraph], square: &KeySquare) -> Vec<Digraph> {
    digraphs
        .iter()
        .map(|&d| transform_digraph(d, square, Pass::Encrypt))
        .collect()
}

/// Decrypt a digraph stream into upper-case text, fillers included
pub fn decrypt(digraphs: &[Digraph], square: &KeySquare) -> String {
    decrypt_digraphs(digraphs, square)
        .iter()
        .flat_map(|d| [d.first(), d.second()])
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Decrypt a digraph stream, keeping the digraph structure
pub fn decrypt_digraphs(digraphs: &[Digraph], square: &KeySquare) -> Vec<Digraph> {
    digraphs
        .iter()
        .map(|&d| transform_digraph(d, square, Pass::Decrypt))
        .collect()
}

fn transform_digraph(digraph: Digraph, square: &KeySquare, pass: Pass) -> Digraph {
    let (a, b) = digraph.bytes();
    // Digraph letters are always Playfair letters, and a square holds all 25
    let (i1, i2) = match (square.index_of(a), square.index_of(b)) {
        (Some(i1), Some(i2)) => (i1, i2),
        _ => unreachable!("key square is missing a Playfair letter"),
    };

    let (n1, n2) = if i1.abs_diff(i2) % SIDE == 0 {
        (shift_down(i1, pass), shift_down(i2, pass))
    } else if row(i1) == row(i2) {
        (shift_right(i1, pass), shift_right(i2, pass))
    } else {
        (
            SIDE * row(i1) + column(i2),
            SIDE * row(i2) + column(i1),
        )
    };

    Digraph::from_valid(square.letter_at(n1), square.letter_at(n2))
}

/// Next cell in the same column, wrapping bottom to top
fn shift_down(index: usize, pass: Pass) -> usize {
    match pass {
        Pass::Encrypt => (index + SIDE) % CELLS,
        Pass::Decrypt => (index + CELLS - SIDE) % CELLS,
    }
}

/// Next cell in the same row, wrapping right edge to left
fn shift_right(index: usize, pass: Pass) -> usize {
    let col = match pass {
        Pass::Encrypt => (column(index) + 1) % SIDE,
        Pass::Decrypt => (column(index) + SIDE - 1) % SIDE,
    };
    SIDE * row(index) + col
}
