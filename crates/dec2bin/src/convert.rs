//! Top-level conversion: split on the decimal point and join the halves.

use std::fmt;

use crate::fraction::{fraction_parts, BinaryFraction};
use crate::integer::integer_to_binary;
use crate::validate::validate_decimal;
use crate::ConvertError;

/// Binary form of a decimal numeral.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryNumber {
    /// Bits of the whole part, `"0"` for zero.
    pub integer: String,
    /// Present when the input had a decimal point.
    pub fraction: Option<BinaryFraction>,
}

impl BinaryNumber {
    /// True when the input was a whole number or its fraction terminated.
    pub fn is_exact(&self) -> bool {
        self.fraction.as_ref().map_or(true, BinaryFraction::is_exact)
    }
}

impl fmt::Display for BinaryNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.integer)?;
        if let Some(fraction) = &self.fraction {
            write!(f, ".{fraction}")?;
        }
        Ok(())
    }
}

/// Converts a decimal numeral to its structured binary form.
///
/// Unlike [`convert`], the empty string converts to the number zero.
///
/// # Errors
///
/// - [`ConvertError::InvalidFormat`] for anything but digits and one `.`.
/// - [`ConvertError::StepLimit`] for fractions with an enormous period.
///
/// # Example
///
/// ```
/// use dec2bin::convert_parts;
///
/// let n = convert_parts("13.73").unwrap();
/// assert_eq!(n.integer, "1101");
/// assert!(!n.is_exact());
/// ```
pub fn convert_parts(decimal: &str) -> Result<BinaryNumber, ConvertError> {
    let number = match validate_decimal(decimal)? {
        Some(pos) => BinaryNumber {
            integer: integer_to_binary(&decimal[..pos])?,
            fraction: Some(fraction_parts(&decimal[pos + 1..])?),
        },
        None => BinaryNumber {
            integer: integer_to_binary(decimal)?,
            fraction: None,
        },
    };
    tracing::debug!(input = decimal, exact = number.is_exact(), "converted");
    Ok(number)
}

/// Converts a decimal numeral to a binary string.
///
/// The output is the whole part in binary, then for inputs with a decimal
/// point a `.` and the fraction bits. A repeating fraction is followed by a
/// space, the repeating block, and `...`. The empty string converts to the
/// empty string.
///
/// # Errors
///
/// Same as [`convert_parts`].
///
/// # Example
///
/// ```
/// use dec2bin::convert;
///
/// assert_eq!(convert("3.875").unwrap(), "11.111");
/// assert_eq!(convert("0.1").unwrap(), "0.00011 0011...");
/// assert_eq!(convert("").unwrap(), "");
/// assert!(convert("1.2.3").is_err());
/// ```
pub fn convert(decimal: &str) -> Result<String, ConvertError> {
    if decimal.is_empty() {
        return Ok(String::new());
    }
    Ok(convert_parts(decimal)?.to_string())
}
