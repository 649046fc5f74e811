//! QR code data encoding modules
//!
//! This module contains all the logic for turning text into the data region
//! of a QR symbol:
//! - Mode selection (numeric, alphanumeric, byte)
//! - Mode encoders and the shared prefix/suffix/padding contract
//! - Reed-Solomon error correction and block interleaving
//! - Bit-string helpers and the standard's capacity/block tables

/// Bit-string padding and codeword packing
pub mod bits;
/// Encoder settings and the process-wide configuration
pub mod config;
/// Data mode encoders (numeric, alphanumeric, byte)
pub mod modes;
/// Encoder shared by all modes: version, prefix, suffix, bit budget
pub mod qr_encoder;
/// GF(256) tables, generator polynomial, EC codewords, interleaving
pub mod reed_solomon;
/// Mode selection and encoder construction from raw input
pub mod selector;
/// QR specification tables (character capacities, block structure)
pub mod tables;

pub use config::{ByteCharset, EncoderConfig};
pub use qr_encoder::QrEncoder;
pub use reed_solomon::{ErrorCorrector, GfTables};
pub use selector::{
    message_text, select_encoder, select_encoder_raw, select_encoding, split_lines,
    strip_line_ending,
};
pub use tables::{BlockGroup, BlockInfo};
