use std::fmt;
use std::str::FromStr;

use super::EncodingMode;
use crate::error::QrError;

/// QR code version (1-40)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest symbol, 21x21
    pub const MIN: Version = Version(1);
    /// Largest symbol, 177x177
    pub const MAX: Version = Version(40);

    /// Build a version, `None` outside 1-40
    pub fn new(number: u8) -> Option<Self> {
        (1..=40).contains(&number).then_some(Version(number))
    }

    /// Get the version number
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * (self.0 as usize) + 17
    }

    /// Index into the character count width triple: 0 below 10, 1 below 27, else 2
    pub fn char_count_band(&self) -> usize {
        match self.0 {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        }
    }
}

/// Error correction level, ordered by redundancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L,
    /// Medium (~15% recovery capacity)
    M,
    /// Quartile (~25% recovery capacity)
    Q,
    /// High (~30% recovery capacity)
    H,
}

impl ECLevel {
    /// Uppercase level letter
    pub fn as_str(&self) -> &'static str {
        match self {
            ECLevel::L => "L",
            ECLevel::M => "M",
            ECLevel::Q => "Q",
            ECLevel::H => "H",
        }
    }

    /// Two-bit field used in format information (01=L, 00=M, 11=Q, 10=H)
    pub fn format_bits(&self) -> u8 {
        match self {
            ECLevel::L => 0b01,
            ECLevel::M => 0b00,
            ECLevel::Q => 0b11,
            ECLevel::H => 0b10,
        }
    }

    /// Inverse of [`ECLevel::format_bits`]
    pub fn from_format_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0b01 => ECLevel::L,
            0b00 => ECLevel::M,
            0b11 => ECLevel::Q,
            _ => ECLevel::H,
        }
    }
}

impl FromStr for ECLevel {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "L" => Ok(ECLevel::L),
            "M" => Ok(ECLevel::M),
            "Q" => Ok(ECLevel::Q),
            "H" => Ok(ECLevel::H),
            _ => Err(QrError::UnrecognizedLevel(s.to_string())),
        }
    }
}

impl fmt::Display for ECLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully encoded data region of one symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedData {
    /// Mode the message was encoded in
    pub mode: EncodingMode,
    /// Smallest version that holds the message
    pub version: Version,
    /// Error correction level
    pub ec_level: ECLevel,
    /// Value written to the character count indicator
    pub char_count: usize,
    /// Prefix + payload + suffix, exactly the symbol's data bit count
    pub data_bits: String,
    /// `data_bits` packed into 8-bit codewords
    pub data_codewords: Vec<u8>,
    /// Interleaved data codewords followed by interleaved EC codewords
    pub codewords: Vec<u8>,
}

impl EncodedData {
    /// Final codeword stream as a '0'/'1' string
    pub fn bits(&self) -> String {
        crate::encoder::bits::codewords_to_bits(&self.codewords)
    }
}
