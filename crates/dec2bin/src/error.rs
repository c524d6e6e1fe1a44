//! Error type for decimal to binary conversion.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The input holds a character that is not an ASCII digit, or a second `.`.
    #[error("INVALID_FORMAT: unexpected {found:?} at offset {offset}")]
    InvalidFormat { offset: usize, found: char },
    /// The fractional expansion neither terminated nor repeated within the step cap.
    #[error("fraction did not terminate or repeat within {steps} bits")]
    StepLimit { steps: usize },
}
