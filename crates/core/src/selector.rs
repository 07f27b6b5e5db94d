//! Codec selection: run both codecs, keep the shorter result.
//!
//! Board contents vary a lot: a mostly-blank board collapses into a few
//! long runs, while a dense drawing with little repetition suits the
//! frequency-shaped Huffman code. Rather than guess, [`pack`] encodes
//! with both codecs, compares the serialized payload lengths, and tags
//! the winner with its scheme prefix. [`unpack`] reads the tag back and
//! dispatches to the matching decoder.
//!
//! Lengths are compared on the raw JSON payloads, before
//! percent-encoding; ties go to RLE.

use crate::error::{Result, TokenError};
use crate::huffman;
use crate::rle;
use crate::stats::PackStats;
use crate::token::{self, HuffmanPayload, RlePayload, Scheme};

/// Encode a sequence into a tagged, URL-safe token.
///
/// Runs both codecs and returns whichever token is shorter; see
/// [`pack_detailed`] to also observe the comparison.
pub fn pack(seq: &str) -> Result<String> {
    pack_detailed(seq).map(|(token, _)| token)
}

/// Encode a sequence and report how the selection went.
pub fn pack_detailed(seq: &str) -> Result<(String, PackStats)> {
    let (chars, runs) = rle::encode(seq);
    let rle_json =
        serde_json::to_string(&RlePayload(chars, runs)).map_err(TokenError::Payload)?;

    let (codes, packed) = huffman::encode(seq)?;
    let huffman_json =
        serde_json::to_string(&HuffmanPayload(codes, packed)).map_err(TokenError::Payload)?;

    let (scheme, payload_json) = if huffman_json.len() < rle_json.len() {
        (Scheme::Huffman, &huffman_json)
    } else {
        (Scheme::Rle, &rle_json)
    };
    let token = token::write_token(scheme, payload_json);

    let stats = PackStats {
        input_symbols: seq.chars().count(),
        rle_payload_len: rle_json.len(),
        huffman_payload_len: huffman_json.len(),
        token_len: token.len(),
        scheme,
    };
    Ok((token, stats))
}

/// Decode a tagged token back into the original sequence.
///
/// # Errors
/// - `TokenError` for an unrecognized prefix or a payload that is not
///   the expected two-element structure
/// - The matching codec's errors for damaged payload contents
pub fn unpack(token: &str) -> Result<String> {
    let (scheme, payload) = token::parse_token(token)?;
    match scheme {
        Scheme::Rle => {
            let RlePayload(chars, runs) =
                serde_json::from_str(&payload).map_err(TokenError::Payload)?;
            rle::decode(&chars, &runs)
        }
        Scheme::Huffman => {
            let HuffmanPayload(codes, packed) =
                serde_json::from_str(&payload).map_err(TokenError::Payload)?;
            huffman::decode(&codes, &packed)
        }
    }
}
