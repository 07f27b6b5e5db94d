//! Observable behavior of the codec selector.
//!
//! Packing runs both codecs over the same input, so the interesting
//! numbers fall out for free: how large each payload came out, which
//! scheme won, and what the final token costs relative to the raw
//! sequence. `PackStats` captures them for one pack call.

use crate::token::Scheme;

/// Size breakdown of one pack call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackStats {
    /// Symbols in the input sequence
    pub input_symbols: usize,

    /// Serialized RLE payload length (raw JSON, pre-percent-encoding)
    pub rle_payload_len: usize,

    /// Serialized Huffman payload length (raw JSON, pre-percent-encoding)
    pub huffman_payload_len: usize,

    /// Length of the emitted tagged token (prefix + percent-encoded payload)
    pub token_len: usize,

    /// Which codec won the comparison
    pub scheme: Scheme,
}

impl PackStats {
    /// Raw payload length of the winning codec.
    pub fn chosen_payload_len(&self) -> usize {
        match self.scheme {
            Scheme::Rle => self.rle_payload_len,
            Scheme::Huffman => self.huffman_payload_len,
        }
    }

    /// Compute compression ratio (chosen payload / input symbols).
    ///
    /// Returns 0.0 for an empty input.
    pub fn compression_ratio(&self) -> f64 {
        if self.input_symbols == 0 {
            0.0
        } else {
            self.chosen_payload_len() as f64 / self.input_symbols as f64
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Encoding Summary ===");
        println!("Input symbols: {}", self.input_symbols);
        println!();
        println!("RLE payload:     {} bytes", self.rle_payload_len);
        println!("Huffman payload: {} bytes", self.huffman_payload_len);
        println!(
            "Chosen scheme: {} ({})",
            self.scheme,
            self.scheme.prefix()
        );
        println!();
        println!("Token length: {} bytes", self.token_len);
        println!("Ratio: {:.1}%", self.compression_ratio() * 100.0);
        println!();
    }

    /// Export stats as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "input_symbols={}\n\
             rle_payload_len={}\n\
             huffman_payload_len={}\n\
             scheme={}\n\
             token_len={}\n\
             compression_ratio={:.4}\n",
            self.input_symbols,
            self.rle_payload_len,
            self.huffman_payload_len,
            self.scheme,
            self.token_len,
            self.compression_ratio(),
        )
    }
}
