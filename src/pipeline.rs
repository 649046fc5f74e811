//! End-to-end encoding: text -> mode -> padded data bits -> codewords ->
//! interleaved codeword stream.

use rayon::prelude::*;
use tracing::debug;

use crate::encoder::bits::bits_to_codewords;
use crate::encoder::config::{EncoderConfig, process_config};
use crate::encoder::reed_solomon::ErrorCorrector;
use crate::encoder::selector::{message_text, select_encoding};
use crate::encoder::QrEncoder;
use crate::error::Result;
use crate::models::{ECLevel, EncodedData};

/// Encode `message` at `level` using the process-wide configuration
pub fn encode_text(message: &str, level: ECLevel) -> Result<EncodedData> {
    encode_text_with_config(message, level, process_config())
}

/// [`encode_text`] with explicit settings
pub fn encode_text_with_config(
    message: &str,
    level: ECLevel,
    config: &EncoderConfig,
) -> Result<EncodedData> {
    let mode = select_encoding(message)?;
    let encoder = QrEncoder::with_config(mode, message, level, config)?;
    finish(&encoder)
}

/// Pad, pack and error-correct the output of an encoder
pub fn finish(encoder: &QrEncoder) -> Result<EncodedData> {
    let data_bits = encoder.data_bits();
    debug_assert_eq!(data_bits.len(), encoder.get_num_bits());

    let data_codewords = bits_to_codewords(&data_bits);
    let corrector = ErrorCorrector::new(encoder.block_info());
    let codewords = corrector.interleave(&data_codewords)?;

    debug!(
        version = encoder.version().number(),
        level = %encoder.correction_level(),
        data = data_codewords.len(),
        total = codewords.len(),
        "encoded symbol data"
    );

    Ok(EncodedData {
        mode: encoder.mode(),
        version: encoder.version(),
        ec_level: encoder.correction_level(),
        char_count: encoder.char_count(),
        data_bits,
        data_codewords,
        codewords,
    })
}

/// Encode independent messages in parallel; results keep input order
pub fn encode_batch<S: AsRef<str> + Sync>(messages: &[S], level: ECLevel) -> Vec<Result<EncodedData>> {
    encode_batch_with_config(messages, level, process_config())
}

/// [`encode_batch`] with explicit settings
pub fn encode_batch_with_config<S: AsRef<str> + Sync>(
    messages: &[S],
    level: ECLevel,
    config: &EncoderConfig,
) -> Vec<Result<EncodedData>> {
    messages
        .par_iter()
        .map(|message| encode_text_with_config(message.as_ref(), level, config))
        .collect()
}

/// Encode undecoded messages, such as the lines of a file, in parallel
///
/// A message that is not valid UTF-8 fails on its own with `NotText`; the
/// others still encode. Results keep input order.
pub fn encode_batch_raw<B: AsRef<[u8]> + Sync>(
    messages: &[B],
    level: ECLevel,
) -> Vec<Result<EncodedData>> {
    let config = process_config();
    messages
        .par_iter()
        .map(|raw| {
            message_text(raw.as_ref())
                .and_then(|text| encode_text_with_config(text, level, config))
        })
        .collect()
}
