//! Arbitrary-precision base-10 digit sequences.

use std::fmt;
use std::str::FromStr;

use crate::ConvertError;

/// A non-negative decimal numeral stored as its digits, most significant first.
///
/// The length of the sequence is part of the value's meaning: a fractional
/// numerator `"05"` is `5 / 100`, not `5 / 10`. Doubling keeps the length
/// fixed, so leading zeros survive every step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DecimalDigits {
    digits: Vec<u8>,
}

impl DecimalDigits {
    /// Parses a string of ASCII digits. The empty string yields an empty sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidFormat`] on the first non-digit character.
    ///
    /// # Example
    ///
    /// ```
    /// use dec2bin::DecimalDigits;
    ///
    /// let n = DecimalDigits::parse("007").unwrap();
    /// assert_eq!(n.len(), 3);
    /// assert_eq!(n.to_string(), "007");
    /// ```
    pub fn parse(s: &str) -> Result<Self, ConvertError> {
        let mut digits = Vec::with_capacity(s.len());
        for (offset, c) in s.char_indices() {
            if !c.is_ascii_digit() {
                return Err(ConvertError::InvalidFormat { offset, found: c });
            }
            digits.push(c as u8 - b'0');
        }
        Ok(Self { digits })
    }

    /// Number of digits, leading zeros included.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// True when every digit is zero. An empty sequence counts as zero.
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Drops leading zero digits. Zero becomes the empty sequence.
    pub fn trim_leading_zeros(&mut self) {
        let zeros = self.digits.iter().take_while(|&&d| d == 0).count();
        if zeros > 0 {
            self.digits.drain(..zeros);
        }
    }

    /// Divides by two in place and returns the remainder (0 or 1).
    ///
    /// Long division from the most significant digit. The length is kept, so
    /// the result may gain a leading zero.
    ///
    /// ```
    /// use dec2bin::DecimalDigits;
    ///
    /// let mut n = DecimalDigits::parse("13").unwrap();
    /// assert_eq!(n.halve(), 1);
    /// assert_eq!(n.to_string(), "06");
    /// ```
    pub fn halve(&mut self) -> u8 {
        let mut rem = 0;
        for d in self.digits.iter_mut() {
            let cur = rem * 10 + *d;
            *d = cur / 2;
            rem = cur % 2;
        }
        rem
    }

    /// Multiplies by two in place and returns the carry out of the most
    /// significant digit (0 or 1).
    ///
    /// The length is kept: a carry of 1 means the doubled value reached
    /// `10^len`, and the digits left behind are the value minus `10^len`.
    ///
    /// ```
    /// use dec2bin::DecimalDigits;
    ///
    /// let mut n = DecimalDigits::parse("64").unwrap();
    /// assert_eq!(n.double(), 1);
    /// assert_eq!(n.to_string(), "28");
    ///
    /// let mut n = DecimalDigits::parse("04").unwrap();
    /// assert_eq!(n.double(), 0);
    /// assert_eq!(n.to_string(), "08");
    /// ```
    pub fn double(&mut self) -> u8 {
        let mut carry = 0;
        for d in self.digits.iter_mut().rev() {
            let cur = *d * 2 + carry;
            *d = cur % 10;
            carry = cur / 10;
        }
        carry
    }
}

impl FromStr for DecimalDigits {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DecimalDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in &self.digits {
            write!(f, "{}", (b'0' + d) as char)?;
        }
        Ok(())
    }
}
