use std::fmt;

use super::Version;

/// Data encoding mode of a QR segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingMode {
    /// Decimal digits, 3 per 10 bits
    Numeric,
    /// 0-9, A-Z, space and $%*+-./:, 2 per 11 bits
    Alphanumeric,
    /// Arbitrary 8-bit data
    Byte,
    /// Shift JIS double-byte characters (no encoder)
    Kanji,
}

impl EncodingMode {
    /// Mode indicator bits placed at the head of the segment
    pub fn indicator(&self) -> &'static str {
        match self {
            EncodingMode::Numeric => "0001",
            EncodingMode::Alphanumeric => "0010",
            EncodingMode::Byte => "0100",
            EncodingMode::Kanji => "1000",
        }
    }

    /// Character count indicator widths for versions 1-9, 10-26 and 27-40
    pub fn char_count_widths(&self) -> [usize; 3] {
        match self {
            EncodingMode::Numeric => [10, 12, 14],
            EncodingMode::Alphanumeric => [9, 11, 13],
            EncodingMode::Byte => [8, 16, 16],
            EncodingMode::Kanji => [8, 10, 12],
        }
    }

    /// Character count indicator width for a given version
    pub fn char_count_bits(&self, version: Version) -> usize {
        self.char_count_widths()[version.char_count_band()]
    }

    /// Lowercase mode name
    pub fn name(&self) -> &'static str {
        match self {
            EncodingMode::Numeric => "numeric",
            EncodingMode::Alphanumeric => "alphanumeric",
            EncodingMode::Byte => "byte",
            EncodingMode::Kanji => "kanji",
        }
    }
}

impl fmt::Display for EncodingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
