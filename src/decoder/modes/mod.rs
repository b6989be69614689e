//! Aztec character decoding
//!
//! Corrected data bits are a stream of table indices. Five character
//! tables are selected by in-stream latch (permanent) and shift (one
//! token) codes; a binary shift switches to raw 8-bit bytes for a
//! counted run.

use crate::error::Result;
use crate::models::BitArray;

/// Binary-shift run length and byte reading
pub mod byte;
/// Table state machine producing text and byte segments
pub mod text;

pub use text::{DecodedPayload, decode_payload};

/// Active symbol table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    /// Upper-case letters (initial table)
    Upper,
    /// Lower-case letters
    Lower,
    /// Control characters and assorted ASCII symbols
    Mixed,
    /// Punctuation, including two-character pairs
    Punct,
    /// Digits, comma and period (4-bit tokens)
    Digit,
    /// Raw 8-bit bytes
    Binary,
}

impl Table {
    /// Token width in bits
    pub fn token_bits(self) -> usize {
        match self {
            Self::Digit => 4,
            Self::Binary => 8,
            _ => 5,
        }
    }
}

/// Meaning of one table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Emits text
    Chars(&'static str),
    /// Switches table permanently
    Latch(Table),
    /// Switches table for the next token only
    Shift(Table),
}

use Token::{Chars as C, Latch, Shift};

#[rustfmt::skip]
const UPPER_TABLE: [Token; 32] = [
    Shift(Table::Punct), C(" "), C("A"), C("B"), C("C"), C("D"), C("E"), C("F"),
    C("G"), C("H"), C("I"), C("J"), C("K"), C("L"), C("M"), C("N"),
    C("O"), C("P"), C("Q"), C("R"), C("S"), C("T"), C("U"), C("V"),
    C("W"), C("X"), C("Y"), C("Z"), Latch(Table::Lower), Latch(Table::Mixed), Latch(Table::Digit), Shift(Table::Binary),
];

#[rustfmt::skip]
const LOWER_TABLE: [Token; 32] = [
    Shift(Table::Punct), C(" "), C("a"), C("b"), C("c"), C("d"), C("e"), C("f"),
    C("g"), C("h"), C("i"), C("j"), C("k"), C("l"), C("m"), C("n"),
    C("o"), C("p"), C("q"), C("r"), C("s"), C("t"), C("u"), C("v"),
    C("w"), C("x"), C("y"), C("z"), Shift(Table::Upper), Latch(Table::Mixed), Latch(Table::Digit), Shift(Table::Binary),
];

#[rustfmt::skip]
const MIXED_TABLE: [Token; 32] = [
    Shift(Table::Punct), C(" "), C("\x01"), C("\x02"), C("\x03"), C("\x04"), C("\x05"), C("\x06"),
    C("\x07"), C("\x08"), C("\t"), C("\n"), C("\x0b"), C("\x0c"), C("\r"), C("\x1b"),
    C("\x1c"), C("\x1d"), C("\x1e"), C("\x1f"), C("@"), C("\\"), C("^"), C("_"),
    C("`"), C("|"), C("~"), C("\x7f"), Latch(Table::Lower), Latch(Table::Upper), Latch(Table::Punct), Shift(Table::Binary),
];

// Entry 0 is FLG(n), which carries no text
#[rustfmt::skip]
const PUNCT_TABLE: [Token; 32] = [
    C(""), C("\r"), C("\r\n"), C(". "), C(", "), C(": "), C("!"), C("\""),
    C("#"), C("$"), C("%"), C("&"), C("'"), C("("), C(")"), C("*"),
    C("+"), C(","), C("-"), C("."), C("/"), C(":"), C(";"), C("<"),
    C("="), C(">"), C("?"), C("["), C("]"), C("{"), C("}"), Latch(Table::Upper),
];

#[rustfmt::skip]
const DIGIT_TABLE: [Token; 16] = [
    Shift(Table::Punct), C(" "), C("0"), C("1"), C("2"), C("3"), C("4"), C("5"),
    C("6"), C("7"), C("8"), C("9"), C(","), C("."), Latch(Table::Upper), Shift(Table::Upper),
];

/// Look up `code` in a character table.
///
/// Returns `None` for the binary pseudo-table or a code wider than the
/// table.
pub fn token(table: Table, code: u32) -> Option<Token> {
    let entries: &[Token] = match table {
        Table::Upper => &UPPER_TABLE,
        Table::Lower => &LOWER_TABLE,
        Table::Mixed => &MIXED_TABLE,
        Table::Punct => &PUNCT_TABLE,
        Table::Digit => &DIGIT_TABLE,
        Table::Binary => return None,
    };
    entries.get(code as usize).copied()
}

/// Sequential reader over the first `end` bits of a corrected stream
#[derive(Debug)]
pub struct BitCursor<'a> {
    bits: &'a BitArray,
    position: usize,
    end: usize,
}

impl<'a> BitCursor<'a> {
    /// Reader over `bits[..end]`; `end` is clamped to the array length
    pub fn new(bits: &'a BitArray, end: usize) -> Self {
        Self {
            bits,
            position: 0,
            end: end.min(bits.len()),
        }
    }

    /// Bits left before the end index
    pub fn remaining(&self) -> usize {
        self.end - self.position
    }

    /// Read a big-endian field, or `None` if fewer than `width` bits remain
    pub fn read(&mut self, width: usize) -> Result<Option<u32>> {
        if self.remaining() < width {
            return Ok(None);
        }
        let value = self.bits.read_bits(self.position, width)?;
        self.position += width;
        Ok(Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lookup() {
        assert_eq!(token(Table::Upper, 2), Some(Token::Chars("A")));
        assert_eq!(token(Table::Lower, 27), Some(Token::Chars("z")));
        assert_eq!(token(Table::Upper, 31), Some(Token::Shift(Table::Binary)));
        assert_eq!(token(Table::Lower, 28), Some(Token::Shift(Table::Upper)));
        assert_eq!(token(Table::Mixed, 29), Some(Token::Latch(Table::Upper)));
        assert_eq!(token(Table::Punct, 2), Some(Token::Chars("\r\n")));
        assert_eq!(token(Table::Digit, 11), Some(Token::Chars("9")));
        assert_eq!(token(Table::Digit, 16), None);
        assert_eq!(token(Table::Binary, 0), None);
    }

    #[test]
    fn test_cursor_stops_at_end() {
        let bits = BitArray::from_bools(&[true, false, true, true, false, false]);
        let mut cursor = BitCursor::new(&bits, 5);
        assert_eq!(cursor.read(3), Ok(Some(0b101)));
        assert_eq!(cursor.read(3), Ok(None));
        assert_eq!(cursor.read(2), Ok(Some(0b10)));
        assert_eq!(cursor.remaining(), 0);
    }
}
