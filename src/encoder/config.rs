use std::str::FromStr;
use std::sync::OnceLock;

use crate::models::ECLevel;

/// How byte mode turns characters into bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteCharset {
    /// UTF-8 bytes of each character; the count indicator counts bytes
    #[default]
    Utf8,
    /// One byte per character; code points above 255 are rejected
    Latin1,
}

impl FromStr for ByteCharset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(ByteCharset::Utf8),
            "latin1" | "latin-1" | "iso-8859-1" => Ok(ByteCharset::Latin1),
            other => Err(format!("unknown byte charset: {other}")),
        }
    }
}

/// Encoder settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Level used when the caller does not name one
    pub default_level: ECLevel,
    /// Byte-mode character to byte conversion
    pub byte_charset: ByteCharset,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            default_level: ECLevel::L,
            byte_charset: ByteCharset::Utf8,
        }
    }
}

fn parse_env<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

impl EncoderConfig {
    /// Read `QR_EC_LEVEL` and `QR_BYTE_CHARSET`, falling back to defaults
    /// on missing or unparsable values.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_level: parse_env("QR_EC_LEVEL", defaults.default_level),
            byte_charset: parse_env("QR_BYTE_CHARSET", defaults.byte_charset),
        }
    }
}

static PROCESS_CONFIG: OnceLock<EncoderConfig> = OnceLock::new();

/// Process-wide configuration, read from the environment once
pub fn process_config() -> &'static EncoderConfig {
    PROCESS_CONFIG.get_or_init(EncoderConfig::from_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_parse() {
        assert_eq!("UTF-8".parse::<ByteCharset>(), Ok(ByteCharset::Utf8));
        assert_eq!(" latin1 ".parse::<ByteCharset>(), Ok(ByteCharset::Latin1));
        assert!("ascii".parse::<ByteCharset>().is_err());
    }

    #[test]
    fn test_defaults() {
        let config = EncoderConfig::default();
        assert_eq!(config.default_level, ECLevel::L);
        assert_eq!(config.byte_charset, ByteCharset::Utf8);
    }

    #[test]
    fn test_parse_env_fallback() {
        assert_eq!(
            parse_env("QR_TEST_UNSET_VARIABLE_FOR_CONFIG", ECLevel::Q),
            ECLevel::Q
        );
    }
}
