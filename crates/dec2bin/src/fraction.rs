//! Fractional part conversion with repeating-block detection.
//!
//! The digits right of the decimal point are a numerator over `10^order`,
//! where `order` is the number of digits. Each step doubles the numerator;
//! a carry past `10^order` emits a `1` bit, otherwise a `0`. Because the
//! numerator always has exactly `order` digits there are at most `10^order`
//! distinct states, so the expansion either reaches zero or revisits a state.
//! The bits emitted since the first visit form the repeating block.

use std::collections::HashMap;
use std::fmt;

use crate::{ConvertError, DecimalDigits};

/// Upper bound on emitted bits before a fraction is abandoned.
///
/// An `n`-digit numerator such as `0.000...001` can have a period near
/// `4 * 5^(n-1)`, so ten-digit fractions still fit under this bound.
pub const MAX_FRACTION_STEPS: usize = 1 << 24;

/// Step cap for a numerator of `order` digits.
///
/// Up to seven digits the pigeonhole bound `10^order + 1` is the smaller one,
/// and the expansion always settles before reaching it.
pub(crate) fn step_limit(order: usize) -> usize {
    u32::try_from(order)
        .ok()
        .and_then(|exp| 10usize.checked_pow(exp))
        .map_or(MAX_FRACTION_STEPS, |states| {
            states.saturating_add(1).min(MAX_FRACTION_STEPS)
        })
}

/// Binary expansion of a fraction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BinaryFraction {
    /// All bits emitted before the expansion terminated or repeated.
    /// Empty for a zero-valued fraction such as `"00"`.
    pub digits: String,
    /// Offset into `digits` where the repeating block starts.
    pub repeat_from: Option<usize>,
}

impl BinaryFraction {
    /// True when the expansion terminated.
    pub fn is_exact(&self) -> bool {
        self.repeat_from.is_none()
    }

    /// The repeating block, if any.
    ///
    /// ```
    /// use dec2bin::fraction_parts;
    ///
    /// let third = fraction_parts("3").unwrap();
    /// assert_eq!(third.digits, "01001");
    /// assert_eq!(third.repeating(), Some("1001"));
    /// ```
    pub fn repeating(&self) -> Option<&str> {
        self.repeat_from.map(|pos| &self.digits[pos..])
    }
}

impl fmt::Display for BinaryFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)?;
        if let Some(block) = self.repeating() {
            write!(f, " {block}...")?;
        }
        Ok(())
    }
}

/// Expands the digits right of the decimal point into binary.
///
/// Returns the structured form; see [`fraction_to_binary`] for the string.
/// The empty string expands to the single bit `0`. A non-empty zero-valued
/// fraction expands to no bits at all.
///
/// # Errors
///
/// - [`ConvertError::InvalidFormat`] if `dec` holds a non-digit.
/// - [`ConvertError::StepLimit`] if the expansion runs past
///   [`MAX_FRACTION_STEPS`] bits.
pub fn fraction_parts(dec: &str) -> Result<BinaryFraction, ConvertError> {
    if dec.is_empty() {
        return Ok(BinaryFraction {
            digits: "0".to_string(),
            repeat_from: None,
        });
    }
    let remainder = DecimalDigits::parse(dec)?;
    let limit = step_limit(remainder.len());
    expand(remainder, limit)
}

/// Converts the digits right of the decimal point to a binary string.
///
/// Terminating fractions yield their bits. Repeating fractions yield the bits
/// emitted up to the first repeated state, a space, the repeating block, and
/// `...`. The empty string yields `"0"`; a non-empty fraction whose value is
/// zero, such as `"00"`, yields the empty string.
///
/// # Errors
///
/// Same as [`fraction_parts`].
///
/// # Example
///
/// ```
/// use dec2bin::fraction_to_binary;
///
/// assert_eq!(fraction_to_binary("125").unwrap(), "001");
/// assert_eq!(fraction_to_binary("1").unwrap(), "00011 0011...");
/// assert_eq!(fraction_to_binary("").unwrap(), "0");
/// assert_eq!(fraction_to_binary("0").unwrap(), "");
/// ```
pub fn fraction_to_binary(dec: &str) -> Result<String, ConvertError> {
    Ok(fraction_parts(dec)?.to_string())
}

pub(crate) fn expand(
    mut remainder: DecimalDigits,
    max_steps: usize,
) -> Result<BinaryFraction, ConvertError> {
    let mut digits = String::new();
    let mut seen: HashMap<DecimalDigits, usize> = HashMap::new();

    loop {
        if remainder.is_zero() {
            tracing::trace!(bits = digits.len(), "fraction terminated");
            return Ok(BinaryFraction {
                digits,
                repeat_from: None,
            });
        }

        if let Some(&pos) = seen.get(&remainder) {
            tracing::debug!(
                bits = digits.len(),
                period = digits.len() - pos,
                %remainder,
                "repeating block detected"
            );
            return Ok(BinaryFraction {
                digits,
                repeat_from: Some(pos),
            });
        }

        if digits.len() >= max_steps {
            tracing::warn!(steps = max_steps, order = remainder.len(), "fraction step limit reached");
            return Err(ConvertError::StepLimit { steps: max_steps });
        }

        seen.insert(remainder.clone(), digits.len());
        digits.push(if remainder.double() == 1 { '1' } else { '0' });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(dec: &str) -> BinaryFraction {
        fraction_parts(dec).unwrap()
    }

    #[test]
    fn test_empty() {
        assert_eq!(fraction_to_binary("").unwrap(), "0");
        assert_eq!(parts("").digits, "0");
        assert!(parts("").is_exact());
    }

    #[test]
    fn test_zero_fraction() {
        assert_eq!(fraction_to_binary("0").unwrap(), "");
        assert_eq!(fraction_to_binary("000").unwrap(), "");
        assert_eq!(parts("00").digits, "");
        assert!(parts("00").is_exact());
        assert_ne!(parts(""), parts("0"));
    }

    #[test]
    fn test_step_limit_by_order() {
        assert_eq!(step_limit(1), 11);
        assert_eq!(step_limit(4), 10_001);
        assert_eq!(step_limit(7), 10_000_001);
        assert_eq!(step_limit(8), MAX_FRACTION_STEPS);
        assert_eq!(step_limit(40), MAX_FRACTION_STEPS);
    }

    #[test]
    fn test_exact_fractions() {
        assert_eq!(fraction_to_binary("5").unwrap(), "1");
        assert_eq!(fraction_to_binary("25").unwrap(), "01");
        assert_eq!(fraction_to_binary("125").unwrap(), "001");
        assert_eq!(fraction_to_binary("375").unwrap(), "011");
        assert_eq!(fraction_to_binary("875").unwrap(), "111");
        assert_eq!(fraction_to_binary("0625").unwrap(), "0001");
    }

    #[test]
    fn test_trailing_zeros_keep_value() {
        assert_eq!(fraction_to_binary("50").unwrap(), "1");
        assert_eq!(fraction_to_binary("1250").unwrap(), "001");
    }

    #[test]
    fn test_leading_zeros_change_value() {
        // 0.5 and 0.05 differ only by a leading zero.
        assert_eq!(fraction_to_binary("5").unwrap(), "1");
        assert_ne!(fraction_to_binary("05").unwrap(), "1");
    }

    #[test]
    fn test_repeating_tenths() {
        assert_eq!(fraction_to_binary("1").unwrap(), "00011 0011...");
        assert_eq!(fraction_to_binary("2").unwrap(), "0011 0011...");
        assert_eq!(fraction_to_binary("3").unwrap(), "01001 1001...");
    }

    #[test]
    fn test_repeat_offset() {
        let tenth = parts("1");
        assert_eq!(tenth.repeat_from, Some(1));
        assert_eq!(tenth.repeating(), Some("0011"));

        let fifth = parts("2");
        assert_eq!(fifth.repeat_from, Some(0));
        assert!(!fifth.is_exact());
    }

    #[test]
    fn test_two_hundredths() {
        let r = parts("02");
        assert_eq!(r.digits, "000001010001111010111");
        assert_eq!(r.repeat_from, Some(1));
        assert_eq!(
            fraction_to_binary("02").unwrap(),
            "000001010001111010111 00001010001111010111..."
        );
    }

    #[test]
    fn test_step_limit() {
        // 0.1 needs five bits before it repeats.
        let tenth = DecimalDigits::parse("1").unwrap();
        assert_eq!(
            expand(tenth.clone(), 4),
            Err(ConvertError::StepLimit { steps: 4 })
        );
        assert!(expand(tenth, 5).is_ok());
    }

    #[test]
    fn test_rejects_non_digit() {
        assert_eq!(
            fraction_to_binary("12x"),
            Err(ConvertError::InvalidFormat { offset: 2, found: 'x' })
        );
    }

    #[test]
    fn test_display_matches_parts() {
        for dec in ["", "0", "00", "5", "1", "3", "02", "73"] {
            assert_eq!(parts(dec).to_string(), fraction_to_binary(dec).unwrap());
        }
    }
}
