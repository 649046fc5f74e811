//! QR code data mode encoders
//!
//! Each encoder turns a message that was already validated and converted to
//! mode units into its payload bit string:
//! - Numeric: digit values 0-9, 3 digits per group
//! - Alphanumeric: character values 0-44, 2 characters per group
//! - Byte: raw bytes, 8 bits each

/// Alphanumeric mode (0010)
pub mod alphanumeric;
/// Byte mode (0100)
pub mod byte;
/// Numeric mode (0001)
pub mod numeric;

pub use alphanumeric::AlphanumericEncoder;
pub use byte::ByteEncoder;
pub use numeric::NumericEncoder;
