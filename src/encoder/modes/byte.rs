/// Byte mode encoder (Mode 0100) for 8-bit data
use crate::encoder::config::ByteCharset;

/// Encode byte mode data (8 bits per byte)
pub struct ByteEncoder;

impl ByteEncoder {
    /// Bytes of a message under the given charset
    ///
    /// Returns the first character that has no single-byte form under
    /// `Latin1`; `Utf8` always succeeds.
    pub fn to_units(message: &str, charset: ByteCharset) -> Result<Vec<u8>, char> {
        match charset {
            ByteCharset::Utf8 => Ok(message.as_bytes().to_vec()),
            ByteCharset::Latin1 => message
                .chars()
                .map(|c| u8::try_from(c).map_err(|_| c))
                .collect(),
        }
    }

    /// Eight bits per byte, MSB first
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:08b}", b)).collect()
    }
}
