//! Error types for the pegtoken codec layer.
//!
//! All operations return structured errors rather than panicking.
//! A failed decode never yields a partial or wrong sequence.

use thiserror::Error;

/// Top-level error type for all operations in the codec layer.
///
/// Each variant corresponds to a specific failure domain:
/// - Alphabet: caller-side palette/symbol misuse
/// - Base36: bitstream packing/unpacking failures
/// - Huffman: undecodable bit prefixes
/// - RLE: damaged run streams
/// - Token: tagged-token parsing and payload deserialization
#[derive(Debug, Error)]
pub enum Error {
    /// Alphabet error (e.g., symbol outside the palette)
    #[error("alphabet error: {0}")]
    Alphabet(#[from] AlphabetError),

    /// Base-36 bit-packer error (e.g., invalid digit, lost sentinel)
    #[error("base36 error: {0}")]
    Base36(#[from] Base36Error),

    /// Huffman codec error (e.g., bits matching no code)
    #[error("huffman codec error: {0}")]
    Huffman(#[from] HuffmanError),

    /// Run-length codec error (e.g., mismatched stream lengths)
    #[error("rle codec error: {0}")]
    Rle(#[from] RleError),

    /// Tagged-token error (e.g., unknown scheme prefix, bad payload)
    #[error("token error: {0}")]
    Token(#[from] TokenError),
}

/// Alphabet errors.
///
/// These are caller-side errors: the codecs themselves are
/// alphabet-agnostic and never produce them.
#[derive(Debug, Error)]
pub enum AlphabetError {
    /// Palette size cannot be expressed with decimal-digit symbols
    #[error("invalid alphabet size {size}: must be 1..={max}")]
    InvalidSize { size: usize, max: usize },

    /// Color index has no symbol in this alphabet
    #[error("index {index} out of range for alphabet of {len} symbols")]
    IndexOutOfRange { index: usize, len: usize },

    /// Symbol does not belong to this alphabet
    #[error("unknown symbol {symbol:?}")]
    UnknownSymbol { symbol: char },
}

/// Base-36 bit-packer errors.
#[derive(Debug, Error)]
pub enum Base36Error {
    /// Character is not a digit of the requested radix
    #[error("invalid digit {digit:?} for radix {radix}")]
    InvalidDigit { digit: char, radix: u32 },

    /// Unpacked bitstream is missing the leading sentinel bit,
    /// meaning the packed value was not produced by this packer
    #[error("packed bitstream is missing its sentinel bit")]
    MissingSentinel,
}

/// Huffman codec errors.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// Remaining bits match no code in the table
    #[error("undecodable bits at position {position}")]
    UndecodableBits { position: usize },
}

/// Run-length codec errors.
#[derive(Debug, Error)]
pub enum RleError {
    /// Symbol and run-length streams disagree in length
    #[error("stream length mismatch: {chars} symbols vs {runs} run digits")]
    LengthMismatch { chars: usize, runs: usize },

    /// Run-length digit is not a base-36 digit
    #[error("invalid run-length digit {digit:?}")]
    InvalidRunDigit { digit: char },
}

/// Tagged-token errors.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Token does not start with a recognized scheme prefix
    #[error("missing scheme prefix (expected \"r=\" or \"h=\")")]
    MissingScheme,

    /// Percent-decoding did not yield valid UTF-8
    #[error("payload is not valid UTF-8 after percent-decoding")]
    InvalidUtf8,

    /// Payload is not the expected two-element JSON structure
    #[error("invalid payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
