//! rust_qr_encoder - QR code data payload encoding
//!
//! Turns text into the exact bit sequence of a QR symbol's data region:
//! mode selection, mode/count prefix, mode payload, terminator and pad
//! codewords, Reed-Solomon error correction and block interleaving.
//! Module placement and masking are left to the renderer.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// QR data encoding modules (mode encoders, error correction, tables)
pub mod encoder;
/// Error type shared by all entry points
pub mod error;
/// Core data structures (ECLevel, EncodingMode, Version, EncodedData)
pub mod models;
/// End-to-end encoding and batch encoding
pub mod pipeline;

pub use encoder::{EncoderConfig, QrEncoder, select_encoder, select_encoding};
pub use error::{QrError, Result};
pub use models::{ECLevel, EncodedData, EncodingMode, Version};

/// Encode text into the data region of the smallest fitting QR symbol
///
/// # Arguments
/// * `text` - Message to encode
/// * `level` - Error correction level
///
/// # Returns
/// Data bits, data codewords and the interleaved codeword stream
pub fn encode(text: &str, level: ECLevel) -> Result<EncodedData> {
    pipeline::encode_text(text, level)
}

/// Reusable encoder holding its own configuration
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    /// Create an encoder configured from the environment
    pub fn new() -> Self {
        Self {
            config: EncoderConfig::from_env(),
        }
    }

    /// Create an encoder with explicit settings
    pub fn with_config(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Settings in use
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode at the configured default level
    pub fn encode(&self, text: &str) -> Result<EncodedData> {
        self.encode_with_level(text, self.config.default_level)
    }

    /// Encode at an explicit level
    pub fn encode_with_level(&self, text: &str, level: ECLevel) -> Result<EncodedData> {
        pipeline::encode_text_with_config(text, level, &self.config)
    }

    /// Encode many messages in parallel at the configured default level
    pub fn encode_batch<S: AsRef<str> + Sync>(&self, messages: &[S]) -> Vec<Result<EncodedData>> {
        pipeline::encode_batch_with_config(messages, self.config.default_level, &self.config)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}
