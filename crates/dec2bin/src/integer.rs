//! Whole-number part conversion.

use crate::{ConvertError, DecimalDigits};

/// Converts the digits left of the decimal point to binary.
///
/// The empty string and any run of zeros convert to `"0"`. Every other value
/// converts without leading zeros. Magnitude is unbounded.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidFormat`] if `dec` holds a non-digit.
///
/// # Example
///
/// ```
/// use dec2bin::integer_to_binary;
///
/// assert_eq!(integer_to_binary("5").unwrap(), "101");
/// assert_eq!(integer_to_binary("").unwrap(), "0");
/// assert_eq!(integer_to_binary("0016").unwrap(), "10000");
/// ```
pub fn integer_to_binary(dec: &str) -> Result<String, ConvertError> {
    let n = DecimalDigits::parse(dec)?;
    Ok(digits_to_binary(n))
}

/// Repeated halving: each remainder is the next bit, least significant first.
pub(crate) fn digits_to_binary(mut n: DecimalDigits) -> String {
    n.trim_leading_zeros();
    if n.is_empty() {
        return "0".to_string();
    }

    // Roughly log2(10) bits per decimal digit.
    let mut bits: Vec<char> = Vec::with_capacity(n.len() * 10 / 3 + 1);
    while !n.is_empty() {
        bits.push(if n.halve() == 1 { '1' } else { '0' });
        n.trim_leading_zeros();
    }
    tracing::trace!(bits = bits.len(), "integer part converted");
    bits.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(integer_to_binary("").unwrap(), "0");
    }

    #[test]
    fn test_zero() {
        assert_eq!(integer_to_binary("0").unwrap(), "0");
        assert_eq!(integer_to_binary("0000").unwrap(), "0");
    }

    #[test]
    fn test_small_values() {
        assert_eq!(integer_to_binary("1").unwrap(), "1");
        assert_eq!(integer_to_binary("01").unwrap(), "1");
        assert_eq!(integer_to_binary("2").unwrap(), "10");
        assert_eq!(integer_to_binary("3").unwrap(), "11");
        assert_eq!(integer_to_binary("4").unwrap(), "100");
        assert_eq!(integer_to_binary("5").unwrap(), "101");
        assert_eq!(integer_to_binary("10").unwrap(), "1010");
    }

    #[test]
    fn test_powers_of_two() {
        assert_eq!(integer_to_binary("16").unwrap(), "10000");
        assert_eq!(integer_to_binary("64").unwrap(), "1000000");
        assert_eq!(integer_to_binary("1024").unwrap(), "10000000000");
    }

    #[test]
    fn test_table_values() {
        assert_eq!(integer_to_binary("127").unwrap(), "1111111");
        assert_eq!(integer_to_binary("200").unwrap(), "11001000");
        assert_eq!(integer_to_binary("300").unwrap(), "100101100");
        assert_eq!(integer_to_binary("167929").unwrap(), "101000111111111001");
    }

    #[test]
    fn test_beyond_u64() {
        // 2^64
        assert_eq!(
            integer_to_binary("18446744073709551616").unwrap(),
            format!("1{}", "0".repeat(64))
        );
        // 2^64 - 1
        assert_eq!(
            integer_to_binary("18446744073709551615").unwrap(),
            "1".repeat(64)
        );
    }

    #[test]
    fn test_matches_u64_formatting() {
        for n in [6u64, 255, 256, 1000, 83648237389827329, u64::MAX] {
            assert_eq!(integer_to_binary(&n.to_string()).unwrap(), format!("{n:b}"));
        }
    }

    #[test]
    fn test_rejects_separator() {
        assert!(integer_to_binary("1.5").is_err());
    }
}
