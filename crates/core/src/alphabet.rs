//! Symbol alphabet for peg-color indices.
//!
//! The UI layer owns the actual color palette (names, CSS, ordering); the
//! codec layer only ever sees palette *indices* rendered as decimal-digit
//! characters. This module is the glue between the two: callers construct
//! an [`Alphabet`] from their palette size and use it to convert between
//! index slices and symbol sequences.
//!
//! The codecs themselves never consult the alphabet. They treat symbols as
//! opaque characters, so boards from either palette variant (8 or 9
//! colors) pass through the same encode/decode paths.

use crate::error::{AlphabetError, Result};

/// Largest palette expressible with decimal-digit symbols.
pub const MAX_SYMBOLS: usize = 10;

/// A finite, ordered set of peg-color symbols.
///
/// Symbol i is the decimal digit for i, so the canonical ordering is
/// simply `'0', '1', ..`. Index 0 conventionally means a blank peg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    len: usize,
}

impl Alphabet {
    /// Create an alphabet for a palette of `len` colors.
    ///
    /// # Errors
    /// Returns `AlphabetError::InvalidSize` if `len` is zero or exceeds
    /// [`MAX_SYMBOLS`].
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 || len > MAX_SYMBOLS {
            return Err(AlphabetError::InvalidSize {
                size: len,
                max: MAX_SYMBOLS,
            }
            .into());
        }
        Ok(Self { len })
    }

    /// Number of symbols in the alphabet.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the alphabet is empty (never true for a constructed one).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `symbol` belongs to this alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        matches!(symbol.to_digit(10), Some(d) if (d as usize) < self.len)
    }

    /// The symbol for a palette index.
    ///
    /// # Errors
    /// Returns `AlphabetError::IndexOutOfRange` if `index >= len`.
    pub fn symbol(&self, index: usize) -> Result<char> {
        if index >= self.len {
            return Err(AlphabetError::IndexOutOfRange {
                index,
                len: self.len,
            }
            .into());
        }
        // index < len <= 10, so this is always a valid decimal digit
        Ok(char::from_digit(index as u32, 10).unwrap())
    }

    /// The palette index for a symbol.
    ///
    /// # Errors
    /// Returns `AlphabetError::UnknownSymbol` if `symbol` is not a digit
    /// within this alphabet.
    pub fn index(&self, symbol: char) -> Result<usize> {
        match symbol.to_digit(10) {
            Some(d) if (d as usize) < self.len => Ok(d as usize),
            _ => Err(AlphabetError::UnknownSymbol { symbol }.into()),
        }
    }

    /// Iterate the symbols in canonical order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        (0..self.len as u32).map(|i| char::from_digit(i, 10).unwrap())
    }

    /// Render a slice of palette indices as a symbol sequence.
    ///
    /// # Errors
    /// Returns `AlphabetError::IndexOutOfRange` on the first bad index.
    pub fn sequence_from_indices(&self, indices: &[usize]) -> Result<String> {
        let mut seq = String::with_capacity(indices.len());
        for &index in indices {
            seq.push(self.symbol(index)?);
        }
        Ok(seq)
    }

    /// Parse a symbol sequence back into palette indices.
    ///
    /// # Errors
    /// Returns `AlphabetError::UnknownSymbol` on the first foreign symbol.
    pub fn indices_from_sequence(&self, seq: &str) -> Result<Vec<usize>> {
        seq.chars().map(|c| self.index(c)).collect()
    }

    /// Validate that every symbol of `seq` belongs to this alphabet.
    ///
    /// # Errors
    /// Returns `AlphabetError::UnknownSymbol` on the first foreign symbol.
    pub fn validate(&self, seq: &str) -> Result<()> {
        for symbol in seq.chars() {
            if !self.contains(symbol) {
                return Err(AlphabetError::UnknownSymbol { symbol }.into());
            }
        }
        Ok(())
    }
}
