//! Run-length codec for symbol sequences.
//!
//! Encoding produces two parallel streams: one symbol per run and one
//! base-36 digit per run holding (run length − 1). With the length offset,
//! a single digit covers runs of 1 through 36, so runs never need a zero
//! digit and the cap stays at 36.
//!
//! # Example
//! ```
//! use pegtoken_core::rle;
//!
//! let (chars, runs) = rle::encode("0001112222");
//! assert_eq!(chars, "012");
//! assert_eq!(runs, "223"); // run lengths 3, 3, 4
//! assert_eq!(rle::decode(&chars, &runs).unwrap(), "0001112222");
//! ```

use crate::error::{Result, RleError};

/// Longest run a single base-36 digit can express.
pub const MAX_RUN: u32 = 36;

/// Encode a symbol sequence as parallel (symbol, run-digit) streams.
///
/// Scans left to right, closing the current run when the symbol changes
/// or the run reaches [`MAX_RUN`]; a run at the cap closes even when the
/// next symbol is identical. The empty sequence encodes to two empty
/// streams.
pub fn encode(seq: &str) -> (String, String) {
    let mut chars = String::new();
    let mut runs = String::new();

    let mut symbols = seq.chars();
    let Some(first) = symbols.next() else {
        return (chars, runs);
    };

    let mut current = first;
    let mut run = 1u32;
    for symbol in symbols {
        if symbol == current && run < MAX_RUN {
            run += 1;
        } else {
            chars.push(current);
            runs.push(run_digit(run));
            current = symbol;
            run = 1;
        }
    }
    chars.push(current);
    runs.push(run_digit(run));

    (chars, runs)
}

/// Decode parallel (symbol, run-digit) streams back into a sequence.
///
/// Position i of `chars` repeats `parse_base36(runs[i]) + 1` times, in
/// order. Both upper- and lowercase run digits parse.
///
/// # Errors
/// - `RleError::LengthMismatch` when the streams differ in length
/// - `RleError::InvalidRunDigit` for a non-base-36 run digit
pub fn decode(chars: &str, runs: &str) -> Result<String> {
    let char_count = chars.chars().count();
    let run_count = runs.chars().count();
    if char_count != run_count {
        return Err(RleError::LengthMismatch {
            chars: char_count,
            runs: run_count,
        }
        .into());
    }

    let mut seq = String::new();
    for (symbol, digit) in chars.chars().zip(runs.chars()) {
        let run = digit
            .to_digit(36)
            .ok_or(RleError::InvalidRunDigit { digit })?
            + 1;
        for _ in 0..run {
            seq.push(symbol);
        }
    }
    Ok(seq)
}

/// The base-36 digit for a run length in [1, MAX_RUN].
fn run_digit(run: u32) -> char {
    debug_assert!((1..=MAX_RUN).contains(&run));
    char::from_digit(run - 1, 36).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_encode_concrete_scenario() {
        let (chars, runs) = encode("0001112222");
        assert_eq!(chars, "012");
        assert_eq!(runs, "223");
    }

    #[test]
    fn test_round_trip() {
        for seq in ["0", "01", "0011223344", "777000777", "0123456789"] {
            let (chars, runs) = encode(seq);
            assert_eq!(decode(&chars, &runs).unwrap(), seq);
        }
    }

    #[test]
    fn test_empty_sequence() {
        let (chars, runs) = encode("");
        assert_eq!(chars, "");
        assert_eq!(runs, "");
        assert_eq!(decode(&chars, &runs).unwrap(), "");
    }

    #[test]
    fn test_run_cap_split() {
        // 40 identical symbols: one capped 36-run, then a 4-run
        let seq = "5".repeat(40);
        let (chars, runs) = encode(&seq);
        assert_eq!(chars, "55");
        assert_eq!(runs, "z3");
        assert_eq!(decode(&chars, &runs).unwrap(), seq);
    }

    #[test]
    fn test_run_exactly_at_cap() {
        let seq = "1".repeat(36);
        let (chars, runs) = encode(&seq);
        assert_eq!(chars, "1");
        assert_eq!(runs, "z");
        assert_eq!(decode(&chars, &runs).unwrap(), seq);
    }

    #[test]
    fn test_long_runs_round_trip() {
        // 100 = 36 + 36 + 28, 72 = 36 + 36, then a single trailing peg
        let seq = format!("{}{}{}", "0".repeat(100), "3".repeat(72), "0");
        let (chars, runs) = encode(&seq);
        assert_eq!(chars, "000330");
        assert_eq!(runs, "zzrzz0");
        assert_eq!(decode(&chars, &runs).unwrap(), seq);
    }

    #[test]
    fn test_decode_uppercase_run_digit() {
        assert_eq!(decode("5", "Z").unwrap(), "5".repeat(36));
    }

    #[test]
    fn test_decode_length_mismatch() {
        assert!(matches!(
            decode("01", "2"),
            Err(Error::Rle(RleError::LengthMismatch { chars: 2, runs: 1 }))
        ));
    }

    #[test]
    fn test_decode_invalid_run_digit() {
        assert!(matches!(
            decode("0", "!"),
            Err(Error::Rle(RleError::InvalidRunDigit { digit: '!' }))
        ));
    }
}
