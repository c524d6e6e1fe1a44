//! Input validation for decimal numerals.

use crate::ConvertError;

/// Validates a decimal numeral and locates its separator.
///
/// Accepts ASCII digits with at most one `.`. The empty string is valid.
///
/// # Returns
///
/// The byte offset of the `.` separator, or `None` for a whole number.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidFormat`] pointing at the first character
/// that is neither a digit nor the first `.`.
///
/// # Example
///
/// ```
/// use dec2bin::validate_decimal;
///
/// assert_eq!(validate_decimal("3.875").unwrap(), Some(1));
/// assert_eq!(validate_decimal("16").unwrap(), None);
/// assert!(validate_decimal("1.2.3").is_err());
/// ```
pub fn validate_decimal(decimal: &str) -> Result<Option<usize>, ConvertError> {
    let mut separator = None;
    for (offset, c) in decimal.char_indices() {
        match c {
            '0'..='9' => {}
            '.' if separator.is_none() => separator = Some(offset),
            found => return Err(ConvertError::InvalidFormat { offset, found }),
        }
    }
    Ok(separator)
}
