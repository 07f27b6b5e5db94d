//! Base-36 bit-packer for Huffman bitstreams.
//!
//! The Huffman codec produces one long string of '0'/'1' digits. To keep
//! tokens short, that string is interpreted as a big unsigned integer and
//! rendered in base 36. The standard library parses fixed-width integers
//! in any radix but offers no arbitrary-precision radix parse, so
//! [`to_integer`] folds fixed-size digit blocks into a `BigUint` instead.
//!
//! # Sentinel Bit
//!
//! Converting a digit string to an integer discards leading zeros, so a
//! bitstream starting with '0' would come back shorter than it went in
//! and decode to the wrong sequence. [`pack_bits`] therefore prefixes a
//! single '1' sentinel bit before conversion and [`unpack_bits`] strips
//! it afterwards, preserving bit-length exactly. A packed value without
//! the sentinel cannot have come from this packer and is rejected.

use num_bigint::BigUint;

use crate::error::{Base36Error, Result};

/// Digits parsed per block by [`to_integer`].
///
/// 36^10 still fits a u64, so each block parses with the native
/// fixed-width parser; the fold into `BigUint` carries the rest.
const BLOCK_DIGITS: usize = 10;

/// Parse a digit string of arbitrary length into a big unsigned integer.
///
/// The string is split into 10-digit blocks (the first block short when
/// the length is not a multiple), each block is parsed natively, and
/// blocks fold left-to-right via `acc * radix^10 + block`.
///
/// An empty string parses as zero.
///
/// # Errors
/// Returns `Base36Error::InvalidDigit` for any character that is not a
/// digit of `radix`. Sign characters are invalid here even though the
/// native parser would accept them.
pub fn to_integer(text: &str, radix: u32) -> Result<BigUint> {
    debug_assert!((2..=36).contains(&radix));

    // Reject everything the per-block parser would misinterpret ('+')
    // and everything multi-byte before slicing by byte offset below.
    if let Some(digit) = text.chars().find(|c| !c.is_digit(radix)) {
        return Err(Base36Error::InvalidDigit { digit, radix }.into());
    }

    let factor = BigUint::from((radix as u64).pow(BLOCK_DIGITS as u32));
    let mut acc = BigUint::from(0u32);

    let first_len = match text.len() % BLOCK_DIGITS {
        0 => BLOCK_DIGITS,
        rem => rem,
    };

    let mut start = 0;
    let mut end = first_len.min(text.len());
    while start < text.len() {
        // Validated above, and radix^BLOCK_DIGITS fits a u64
        let block = u64::from_str_radix(&text[start..end], radix).unwrap();
        acc = acc * &factor + BigUint::from(block);
        start = end;
        end = (start + BLOCK_DIGITS).min(text.len());
    }

    Ok(acc)
}

/// Pack a '0'/'1' bitstream into base-36 text.
///
/// The sentinel '1' bit is prefixed before conversion so that leading
/// zero bits survive the integer round trip. The empty bitstream packs
/// to `"1"` (the sentinel alone).
///
/// # Errors
/// Returns `Base36Error::InvalidDigit` if `bits` contains anything other
/// than '0' and '1'.
pub fn pack_bits(bits: &str) -> Result<String> {
    let mut guarded = String::with_capacity(bits.len() + 1);
    guarded.push('1');
    guarded.push_str(bits);
    Ok(to_integer(&guarded, 2)?.to_str_radix(36))
}

/// Unpack base-36 text back into the original '0'/'1' bitstream.
///
/// # Errors
/// - `Base36Error::InvalidDigit` if `packed` is not base-36 text.
/// - `Base36Error::MissingSentinel` if the recovered value lacks the
///   leading sentinel bit (a corrupted or foreign token).
pub fn unpack_bits(packed: &str) -> Result<String> {
    let bits = to_integer(packed, 36)?.to_str_radix(2);
    match bits.strip_prefix('1') {
        Some(rest) => Ok(rest.to_owned()),
        // A zero value formats as "0", which also lacks the sentinel
        None => Err(Base36Error::MissingSentinel.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_to_integer_single_block() {
        assert_eq!(to_integer("0", 36).unwrap(), BigUint::from(0u32));
        assert_eq!(to_integer("z", 36).unwrap(), BigUint::from(35u32));
        assert_eq!(to_integer("zz", 36).unwrap(), BigUint::from(1295u32));
        assert_eq!(to_integer("101", 2).unwrap(), BigUint::from(5u32));
    }

    #[test]
    fn test_to_integer_uppercase_digits() {
        assert_eq!(to_integer("ZZ", 36).unwrap(), BigUint::from(1295u32));
    }

    #[test]
    fn test_to_integer_multi_block() {
        // 25 binary digits: one short block of 5, then two full blocks
        let bits = "1000000000000000000000000";
        assert_eq!(to_integer(bits, 2).unwrap(), BigUint::from(1u64 << 24));

        // Cross-check a multi-block base-36 value against its formatter
        let value = BigUint::from(123456789012345678901234567890u128);
        let text = value.to_str_radix(36);
        assert!(text.len() > BLOCK_DIGITS);
        assert_eq!(to_integer(&text, 36).unwrap(), value);
    }

    #[test]
    fn test_to_integer_empty() {
        assert_eq!(to_integer("", 36).unwrap(), BigUint::from(0u32));
    }

    #[test]
    fn test_to_integer_invalid_digit() {
        assert!(matches!(
            to_integer("12g", 16),
            Err(Error::Base36(Base36Error::InvalidDigit { digit: 'g', .. }))
        ));
        // Sign characters are not digits
        assert!(to_integer("+101", 2).is_err());
        assert!(to_integer("-1", 36).is_err());
    }

    #[test]
    fn test_pack_preserves_leading_zeros() {
        let bits = "001011";
        let packed = pack_bits(bits).unwrap();
        assert_eq!(unpack_bits(&packed).unwrap(), bits);
    }

    #[test]
    fn test_pack_all_zero_bits() {
        let bits = "0000000000";
        let packed = pack_bits(bits).unwrap();
        assert_eq!(unpack_bits(&packed).unwrap(), bits);
    }

    #[test]
    fn test_pack_empty_bitstream() {
        let packed = pack_bits("").unwrap();
        assert_eq!(packed, "1");
        assert_eq!(unpack_bits(&packed).unwrap(), "");
    }

    #[test]
    fn test_pack_long_bitstream() {
        // Longer than any native integer, exercises the fold
        let bits: String = (0..300).map(|i| if i % 3 == 0 { '1' } else { '0' }).collect();
        let packed = pack_bits(&bits).unwrap();
        assert!(packed.len() < bits.len());
        assert_eq!(unpack_bits(&packed).unwrap(), bits);
    }

    #[test]
    fn test_unpack_missing_sentinel() {
        // "0" parses to zero, which has no sentinel bit
        assert!(matches!(
            unpack_bits("0"),
            Err(Error::Base36(Base36Error::MissingSentinel))
        ));
        // The empty payload likewise parses to zero
        assert!(unpack_bits("").is_err());
    }

    #[test]
    fn test_unpack_invalid_text() {
        assert!(unpack_bits("not base36!").is_err());
    }

    #[test]
    fn test_pack_rejects_non_bits() {
        assert!(pack_bits("012").is_err());
    }
}
