//! Exact decimal to binary conversion.
//!
//! Converts decimal numerals such as `"3.875"` or `"0.1"` into binary strings
//! without going through floating point:
//! - Whole parts of any size, by repeated halving of the decimal digits
//! - Fractional parts by repeated doubling, with the repeating block of a
//!   non-terminating expansion detected and marked
//!
//! # Example
//!
//! ```
//! use dec2bin::convert;
//!
//! assert_eq!(convert("5").unwrap(), "101");
//! assert_eq!(convert("3.875").unwrap(), "11.111");
//!
//! // 0.3 = 0.0 1001 1001 1001 ... in binary
//! assert_eq!(convert("0.3").unwrap(), "0.01001 1001...");
//! ```

mod convert;
mod digits;
mod error;
mod fraction;
mod integer;
mod validate;

pub use convert::{convert, convert_parts, BinaryNumber};
pub use digits::DecimalDigits;
pub use error::ConvertError;
pub use fraction::{fraction_parts, fraction_to_binary, BinaryFraction, MAX_FRACTION_STEPS};
pub use integer::integer_to_binary;
pub use validate::validate_decimal;
