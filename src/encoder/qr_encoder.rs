use tracing::{debug, trace};

use super::bits::to_binary;
use super::config::{EncoderConfig, process_config};
use super::modes::{AlphanumericEncoder, ByteEncoder, NumericEncoder};
use super::tables::{self, BlockInfo};
use crate::error::{QrError, Result};
use crate::models::{ECLevel, EncodingMode, Version};

/// Pad codewords appended alternately once the terminator is in place
const PAD_BYTES: [&str; 2] = ["11101100", "00010001"];

/// Encoder for one message in one mode at one correction level.
///
/// Version and capacity are fixed at construction, which is the only step
/// that can fail. The remaining operations are pure.
#[derive(Debug, Clone)]
pub struct QrEncoder {
    message: String,
    correction_level: ECLevel,
    mode: EncodingMode,
    version: Version,
    bit_cap: usize,
    /// Message in mode units: digit values, alphanumeric values or bytes
    units: Vec<u8>,
}

impl QrEncoder {
    /// Build an encoder using the process-wide configuration
    pub fn new(mode: EncodingMode, message: &str, correction_level: ECLevel) -> Result<Self> {
        Self::with_config(mode, message, correction_level, process_config())
    }

    /// Convert the message to mode units and pick the smallest version whose
    /// capacity holds it.
    ///
    /// # Errors
    /// * `UnsupportedMode` for Kanji
    /// * `UnencodableCharacter` if the message has a character the mode cannot carry
    /// * `CapacityExceeded` if version 40 is still too small
    pub fn with_config(
        mode: EncodingMode,
        message: &str,
        correction_level: ECLevel,
        config: &EncoderConfig,
    ) -> Result<Self> {
        let units = match mode {
            EncodingMode::Numeric => NumericEncoder::to_units(message),
            EncodingMode::Alphanumeric => AlphanumericEncoder::to_units(message),
            EncodingMode::Byte => ByteEncoder::to_units(message, config.byte_charset),
            EncodingMode::Kanji => return Err(QrError::UnsupportedMode(mode)),
        }
        .map_err(|ch| QrError::UnencodableCharacter { ch, mode })?;

        let capacities = tables::char_capacities(mode, correction_level)
            .ok_or(QrError::UnsupportedMode(mode))?;

        let length = units.len();
        let (version, bit_cap) = capacities
            .iter()
            .zip(1u8..)
            .find(|(cap, _)| length <= **cap as usize)
            .and_then(|(cap, number)| Some((Version::new(number)?, *cap as usize)))
            .ok_or(QrError::CapacityExceeded {
                level: correction_level,
            })?;

        debug!(
            %mode,
            level = %correction_level,
            length,
            version = version.number(),
            bit_cap,
            "selected version"
        );

        Ok(Self {
            message: message.to_string(),
            correction_level,
            mode,
            version,
            bit_cap,
            units,
        })
    }

    /// Message as given
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Requested error correction level
    pub fn correction_level(&self) -> ECLevel {
        self.correction_level
    }

    /// Mode the message is encoded in
    pub fn mode(&self) -> EncodingMode {
        self.mode
    }

    /// Smallest version whose capacity holds the message
    pub fn version(&self) -> Version {
        self.version
    }

    /// Character capacity of the selected version at this level
    pub fn bit_cap(&self) -> usize {
        self.bit_cap
    }

    /// Value of the character count indicator (bytes in byte mode)
    pub fn char_count(&self) -> usize {
        self.units.len()
    }

    /// Block structure of the selected version and level
    pub fn block_info(&self) -> BlockInfo {
        tables::block_info(self.version, self.correction_level)
    }

    /// Mode indicator followed by the character count indicator
    pub fn get_prefix(&self) -> String {
        let width = self.mode.char_count_bits(self.version);
        let mut prefix = String::with_capacity(4 + width);
        prefix.push_str(self.mode.indicator());
        prefix.push_str(&to_binary(self.char_count(), width));
        prefix
    }

    /// Bit length the data region must reach: 8 bits per data codeword
    pub fn get_num_bits(&self) -> usize {
        8 * self.block_info().data_codewords()
    }

    /// Terminator, byte-alignment zeros and pad bytes that extend a stream of
    /// `current_length` bits to exactly [`QrEncoder::get_num_bits`].
    ///
    /// Returns an empty string when nothing is missing.
    pub fn get_suffix(&self, current_length: usize) -> String {
        let required = self.get_num_bits();
        if current_length >= required {
            return String::new();
        }

        let mut suffix = "0".repeat((required - current_length).min(4));

        let misalignment = (current_length + suffix.len()) % 8;
        if misalignment != 0 {
            suffix.push_str(&"0".repeat(8 - misalignment));
        }

        // Terminator and alignment never pass `required`, a multiple of 8
        let pad_count = (required - current_length - suffix.len()) / 8;
        for pad in PAD_BYTES.iter().cycle().take(pad_count) {
            suffix.push_str(pad);
        }

        trace!(current_length, required, suffix_len = suffix.len(), "built suffix");
        suffix
    }

    /// Mode-specific payload bits (without prefix or suffix)
    pub fn encode(&self) -> String {
        match self.mode {
            EncodingMode::Numeric => NumericEncoder::encode(&self.units),
            EncodingMode::Alphanumeric => AlphanumericEncoder::encode(&self.units),
            EncodingMode::Byte => ByteEncoder::encode(&self.units),
            // Rejected at construction
            EncodingMode::Kanji => String::new(),
        }
    }

    /// Prefix, payload and suffix: the complete data bit string
    pub fn data_bits(&self) -> String {
        let mut bits = self.get_prefix();
        bits.push_str(&self.encode());
        let suffix = self.get_suffix(bits.len());
        bits.push_str(&suffix);
        bits
    }
}
