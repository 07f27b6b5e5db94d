//! pegtoken-core: Peg-board serialization with dual-codec compression
//!
//! This library turns a peg board's per-cell color indices into a compact,
//! URL-safe text token and back:
//! - Encodes the board with both a run-length codec and a Huffman codec
//! - Keeps whichever encoding came out shorter, tagged with its scheme
//! - Reconstructs the exact board from any tagged token
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `alphabet`: Caller-supplied palette glue (index ↔ digit symbol)
//! - `base36`: Bitstream ↔ base-36 text packing for Huffman payloads
//! - `rle`: Run-length codec with a 36-length run cap
//! - `huffman`: Prefix-free coding with a deterministic tree build
//! - `token`: Tagged-token serialization (JSON payloads, percent-encoding)
//! - `selector`: Runs both codecs and keeps the shorter token
//! - `stats`: Observable selection behavior
//!
//! # Design Principles
//!
//! - **No panics**: All errors are structured and recoverable
//! - **Deterministic**: Identical inputs produce identical tokens
//! - **Pure**: Every operation is a synchronous function of its input;
//!   calls share no state and may run concurrently without coordination
//! - **Alphabet-agnostic**: The codecs treat symbols as opaque characters;
//!   only callers consult the palette

pub mod alphabet;
pub mod base36;
pub mod error;
pub mod huffman;
pub mod rle;
pub mod selector;
pub mod stats;
pub mod token;

// Re-export commonly used types
pub use error::{Error, Result};
