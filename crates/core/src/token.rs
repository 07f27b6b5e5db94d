//! Tagged-token serialization and parsing.
//!
//! A tagged token packages one codec's payload for a URL query string:
//!
//! ```text
//! r=%5B%220127%22%2C%22z203%22%5D
//! ^^ ^^^^^^^^^^^^^^^^^^^^^^^^^^^^
//! |  percent-encoded JSON payload
//! scheme prefix ("r=" RLE, "h=" Huffman)
//! ```
//!
//! # Payload Formats
//!
//! - RLE: `["runSymbols", "runLengths"]` — two equal-length strings.
//! - Huffman: `[{"symbol": "code", ...}, "packedBitsBase36"]` — the code
//!   table as a flat object keyed by single-character symbols, then the
//!   packed bitstream.
//!
//! Percent-encoding leaves the characters `encodeURIComponent` leaves
//! (alphanumerics and `- _ . ! ~ * ' ( )`), so tokens embed into query
//! strings byte-for-byte the way the original boards did.

use std::collections::BTreeMap;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TokenError};

/// Everything `encodeURIComponent` escapes, nothing more.
const QUERY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Which codec produced a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Run-length codec, prefix `r=`
    Rle,
    /// Huffman codec, prefix `h=`
    Huffman,
}

impl Scheme {
    /// The literal token prefix for this scheme.
    pub fn prefix(self) -> &'static str {
        match self {
            Scheme::Rle => "r=",
            Scheme::Huffman => "h=",
        }
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scheme::Rle => write!(f, "rle"),
            Scheme::Huffman => write!(f, "huffman"),
        }
    }
}

/// RLE payload: run symbols, then run-length digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RlePayload(pub String, pub String);

/// Huffman payload: code table, then packed bitstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HuffmanPayload(pub BTreeMap<char, String>, pub String);

/// Assemble a tagged token from a scheme and its serialized payload.
pub fn write_token(scheme: Scheme, payload_json: &str) -> String {
    format!(
        "{}{}",
        scheme.prefix(),
        utf8_percent_encode(payload_json, QUERY_ESCAPE)
    )
}

/// Split a tagged token into its scheme and percent-decoded payload.
///
/// # Errors
/// - `TokenError::MissingScheme` when the prefix is not `r=` or `h=`
/// - `TokenError::InvalidUtf8` when percent-decoding yields bytes that
///   are not UTF-8
pub fn parse_token(token: &str) -> Result<(Scheme, String)> {
    let (scheme, rest) = if let Some(rest) = token.strip_prefix(Scheme::Rle.prefix()) {
        (Scheme::Rle, rest)
    } else if let Some(rest) = token.strip_prefix(Scheme::Huffman.prefix()) {
        (Scheme::Huffman, rest)
    } else {
        return Err(TokenError::MissingScheme.into());
    };

    let payload = percent_decode_str(rest)
        .decode_utf8()
        .map_err(|_| TokenError::InvalidUtf8)?
        .into_owned();

    Ok((scheme, payload))
}
