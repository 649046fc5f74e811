//! Error types for QR payload encoding

use crate::models::{ECLevel, EncodingMode};
use thiserror::Error;

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, QrError>;

/// Errors raised while selecting an encoder or building a payload
///
/// Every variant is a caller input error raised at construction or selection
/// time; `encode()` itself never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QrError {
    /// Message is longer than any symbol can hold
    #[error("Input exceeds maximum encoding length.")]
    InputTooLarge {
        /// Message length in characters
        length: usize,
    },

    /// Message does not fit version 40 at the requested level
    #[error("Message too long for correction level {level}.")]
    CapacityExceeded {
        /// Requested correction level
        level: ECLevel,
    },

    /// Correction level text is not one of L/M/Q/H
    #[error("Unrecognized correction level: {0}.")]
    UnrecognizedLevel(String),

    /// Raw input was missing or not valid text
    #[error("Message is not a string: {0}.")]
    NotText(String),

    /// Mode has no encoder (Kanji)
    #[error("Encoding mode {0} is not supported.")]
    UnsupportedMode(EncodingMode),

    /// Character outside the set the mode can represent
    #[error("Character {ch:?} cannot be encoded in {mode} mode.")]
    UnencodableCharacter {
        /// Offending character
        ch: char,
        /// Mode that rejected it
        mode: EncodingMode,
    },

    /// Data stream length disagrees with the block structure
    #[error("Expected {expected} data codewords, got {actual}.")]
    CodewordCount {
        /// Data codewords the block structure holds
        expected: usize,
        /// Data codewords supplied
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            QrError::InputTooLarge { length: 7090 }.to_string(),
            "Input exceeds maximum encoding length."
        );
        assert_eq!(
            QrError::CapacityExceeded { level: ECLevel::H }.to_string(),
            "Message too long for correction level H."
        );
        assert_eq!(
            QrError::UnrecognizedLevel("J".into()).to_string(),
            "Unrecognized correction level: J."
        );
        assert_eq!(
            QrError::NotText("None".into()).to_string(),
            "Message is not a string: None."
        );
    }
}
