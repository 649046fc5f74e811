use tracing::debug;

use super::config::{EncoderConfig, process_config};
use super::modes::{AlphanumericEncoder, NumericEncoder};
use super::qr_encoder::QrEncoder;
use super::tables::MAX_MESSAGE_LENGTH;
use crate::error::{QrError, Result};
use crate::models::{ECLevel, EncodingMode};

/// Cheapest mode able to carry `message`
///
/// Digits only (including the empty message) select numeric; digits, A-Z and
/// the nine symbols select alphanumeric; anything else selects byte.
///
/// # Errors
/// `InputTooLarge` above 7089 characters, before any classification.
pub fn select_encoding(message: &str) -> Result<EncodingMode> {
    let length = message.chars().count();
    if length > MAX_MESSAGE_LENGTH {
        return Err(QrError::InputTooLarge { length });
    }

    let mode = if message.chars().all(NumericEncoder::is_encodable) {
        EncodingMode::Numeric
    } else if message.chars().all(AlphanumericEncoder::is_encodable) {
        EncodingMode::Alphanumeric
    } else {
        EncodingMode::Byte
    };

    debug!(length, %mode, "selected encoding");
    Ok(mode)
}

/// Select the mode for `message` and build its encoder
///
/// `correction_level` is case-insensitive.
pub fn select_encoder(message: &str, correction_level: &str) -> Result<QrEncoder> {
    select_encoder_with_config(message, correction_level, process_config())
}

/// [`select_encoder`] with explicit settings instead of the process configuration
pub fn select_encoder_with_config(
    message: &str,
    correction_level: &str,
    config: &EncoderConfig,
) -> Result<QrEncoder> {
    let level: ECLevel = correction_level.parse()?;
    let mode = select_encoding(message)?;
    QrEncoder::with_config(mode, message, level, config)
}

/// Entry point for untyped input such as file contents
///
/// # Errors
/// `NotText` when `message` is missing or not valid UTF-8, then everything
/// [`select_encoder`] can return.
pub fn select_encoder_raw(message: Option<&[u8]>, correction_level: &str) -> Result<QrEncoder> {
    let raw = message.ok_or_else(|| QrError::NotText("None".to_string()))?;
    select_encoder(message_text(raw)?, correction_level)
}

/// View raw bytes as a message, or `NotText` with the bytes escaped
pub fn message_text(raw: &[u8]) -> Result<&str> {
    std::str::from_utf8(raw).map_err(|_| QrError::NotText(format!("b'{}'", raw.escape_ascii())))
}

/// Drop one trailing `\n` or `\r\n`
pub fn strip_line_ending(raw: &[u8]) -> &[u8] {
    match raw.strip_suffix(b"\n") {
        Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
        None => raw,
    }
}

/// Split file contents into lines without decoding them
///
/// Same framing as `str::lines`: `\n` separated, a trailing `\r` is removed
/// from each line and a final line ending does not start an empty line.
pub fn split_lines(raw: &[u8]) -> Vec<&[u8]> {
    if raw.is_empty() {
        return Vec::new();
    }
    let body = raw.strip_suffix(b"\n").unwrap_or(raw);
    body.split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .collect()
}
