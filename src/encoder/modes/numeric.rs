/// Numeric mode encoder (Mode 0001)
use crate::encoder::bits::to_binary;

/// Encode numeric data
/// Groups of 3 digits; each group value takes 10 bits above 99, 7 bits above 9, else 4 bits
pub struct NumericEncoder;

impl NumericEncoder {
    /// ASCII digit check
    pub fn is_encodable(c: char) -> bool {
        c.is_ascii_digit()
    }

    /// Digit values of a message; the first non-digit is returned as the error
    pub fn to_units(message: &str) -> Result<Vec<u8>, char> {
        message
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as u8).ok_or(c))
            .collect()
    }

    /// Encode digit values (0-9) into the payload bit string
    pub fn encode(digits: &[u8]) -> String {
        let mut encoded = String::with_capacity(digits.len() / 3 * 10 + 7);

        for group in digits.chunks(3) {
            let value = group.iter().fold(0usize, |acc, &d| acc * 10 + d as usize);
            let width = if value > 99 {
                10
            } else if value > 9 {
                7
            } else {
                4
            };
            encoded.push_str(&to_binary(value, width));
        }

        encoded
    }
}
