//! Integration tests for QR data payload encoding
//!
//! These tests pin the public API against reference symbols worked through
//! by hand from ISO/IEC 18004, protecting mode selection, padding, the
//! Reed-Solomon generator and the block interleaving order.

use rust_qr_encoder::encoder::bits::{bits_to_codewords, codewords_to_bits};
use rust_qr_encoder::encoder::tables::block_info;
use rust_qr_encoder::encoder::{
    BlockInfo, ByteCharset, EncoderConfig, ErrorCorrector, QrEncoder, select_encoder,
    select_encoding,
};
use rust_qr_encoder::{ECLevel, Encoder, EncodingMode, QrError, Version, encode};

const HELLO_WORLD_DATA: [u8; 16] = [
    32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, 17, 236, 17,
];
const HELLO_WORLD_ECC: [u8; 10] = [196, 35, 39, 119, 235, 215, 231, 226, 93, 23];

// 5-Q: two blocks of 15 data codewords, two blocks of 16
const BLOCKS_5Q: [&[u8]; 4] = [
    &[67, 85, 70, 134, 87, 38, 85, 194, 119, 50, 6, 18, 6, 103, 38],
    &[246, 246, 66, 7, 118, 134, 242, 7, 38, 86, 22, 198, 199, 146, 6],
    &[182, 230, 247, 119, 50, 7, 118, 134, 87, 38, 82, 6, 134, 151, 50, 7],
    &[70, 247, 118, 86, 194, 6, 151, 50, 16, 236, 17, 236, 17, 236, 17, 236],
];

const INTERLEAVED_DATA_5Q: [u8; 62] = [
    67, 246, 182, 70, 85, 246, 230, 247, 70, 66, 247, 118, 134, 7, 119, 86, 87, 118, 50, 194, 38,
    134, 7, 6, 85, 242, 118, 151, 194, 7, 134, 50, 119, 38, 87, 16, 50, 86, 38, 236, 6, 22, 82,
    17, 18, 198, 6, 236, 6, 199, 134, 17, 103, 146, 151, 236, 38, 6, 50, 17, 7, 236,
];

const INTERLEAVED_ECC_5Q: [u8; 72] = [
    213, 87, 148, 235, 199, 204, 116, 159, 11, 96, 177, 5, 45, 60, 212, 173, 115, 202, 76, 24,
    247, 182, 133, 147, 241, 124, 75, 59, 223, 157, 242, 33, 229, 200, 238, 106, 248, 134, 76, 40,
    154, 27, 195, 255, 117, 129, 230, 172, 154, 209, 189, 82, 111, 17, 10, 2, 86, 163, 108, 131,
    161, 163, 240, 32, 111, 120, 192, 178, 39, 133, 141, 236,
];

#[test]
fn test_hello_world_reference_symbol() {
    let encoded = encode("HELLO WORLD", ECLevel::M).unwrap();

    assert_eq!(encoded.mode, EncodingMode::Alphanumeric);
    assert_eq!(encoded.version, Version::MIN);
    assert_eq!(encoded.data_codewords, HELLO_WORLD_DATA);

    let mut expected = HELLO_WORLD_DATA.to_vec();
    expected.extend_from_slice(&HELLO_WORLD_ECC);
    assert_eq!(encoded.codewords, expected);
    assert_eq!(encoded.bits(), codewords_to_bits(&expected));
}

#[test]
fn test_hello_world_data_bits_layout() {
    let encoder = select_encoder("HELLO WORLD", "m").unwrap();
    let prefix = encoder.get_prefix();
    let payload = encoder.encode();
    assert_eq!(prefix, "0010000001011");
    assert_eq!(payload.len(), 61);

    let suffix = encoder.get_suffix(prefix.len() + payload.len());
    // 4-bit terminator, 2 alignment zeros, then 6 pad codewords
    assert_eq!(suffix.len(), 128 - 74);
    assert!(suffix.starts_with("00000011101100"));
    assert_eq!(
        &suffix[6..],
        "111011000001000111101100000100011110110000010001"
    );

    let bits = format!("{prefix}{payload}{suffix}");
    assert_eq!(bits_to_codewords(&bits), HELLO_WORLD_DATA);
}

#[test]
fn test_two_group_interleaving() {
    let info = block_info(Version::new(5).unwrap(), ECLevel::Q);
    assert_eq!(info, BlockInfo::new(18, 2, 15, Some((2, 16))));

    let corrector = ErrorCorrector::new(info);
    let data: Vec<u8> = BLOCKS_5Q.concat();
    let blocks = corrector.split_blocks(&data).unwrap();
    assert_eq!(blocks, BLOCKS_5Q.to_vec());

    let out = corrector.interleave(&data).unwrap();
    assert_eq!(out.len(), 62 + 72);
    assert_eq!(&out[..62], &INTERLEAVED_DATA_5Q);
    assert_eq!(&out[62..], &INTERLEAVED_ECC_5Q);
}

#[test]
fn test_correction_byte_counts() {
    let single = ErrorCorrector::new(BlockInfo::new(26, 17, 42, None));
    assert_eq!(
        (single.num_correction_bytes(), single.num_message_bytes()),
        (442, 714)
    );
    let double = ErrorCorrector::new(BlockInfo::new(30, 7, 24, Some((22, 25))));
    assert_eq!(
        (double.num_correction_bytes(), double.num_message_bytes()),
        (870, 718)
    );
}

#[test]
fn test_mode_selection_properties() {
    assert_eq!(select_encoding("0123456789"), Ok(EncodingMode::Numeric));
    assert_eq!(
        select_encoding("GOOD AFTERNOON AGENT 47."),
        Ok(EncodingMode::Alphanumeric)
    );
    assert_eq!(
        select_encoding("Good afternoon Agent 47."),
        Ok(EncodingMode::Byte)
    );
    for content in ["0", "A", "a"] {
        assert_eq!(
            select_encoding(&content.repeat(7090)),
            Err(QrError::InputTooLarge { length: 7090 })
        );
    }
}

#[test]
fn test_capacity_boundaries() {
    let at_cap = QrEncoder::new(EncodingMode::Numeric, &"1".repeat(41), ECLevel::L).unwrap();
    assert_eq!((at_cap.version().number(), at_cap.bit_cap()), (1, 41));

    let over = QrEncoder::new(EncodingMode::Numeric, &"1".repeat(42), ECLevel::L).unwrap();
    assert_eq!(over.version().number(), 2);

    let err = select_encoder(&"4".repeat(3599), "H").unwrap_err();
    assert_eq!(err.to_string(), "Message too long for correction level H.");
}

#[test]
fn test_largest_symbols() {
    let numeric = encode(&"9".repeat(7089), ECLevel::L).unwrap();
    assert_eq!(numeric.version, Version::MAX);
    assert_eq!(numeric.data_codewords.len(), 2956);
    assert_eq!(numeric.codewords.len(), 3706);

    let bytes = encode(&"b".repeat(1273), ECLevel::H).unwrap();
    assert_eq!(bytes.version, Version::MAX);
    assert_eq!(bytes.codewords.len(), 3706);
}

#[test]
fn test_every_payload_fills_its_symbol() {
    for level in [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H] {
        for length in [0, 1, 7, 40, 77, 300, 1000] {
            for message in ["8".repeat(length), "Z".repeat(length), "z".repeat(length)] {
                let Ok(encoder) = select_encoder(&message, level.as_str()) else {
                    continue;
                };
                let bits = encoder.data_bits();
                assert_eq!(bits.len(), encoder.get_num_bits());
                assert_eq!(encoder.get_suffix(bits.len()), "");
            }
        }
    }
}

#[test]
fn test_utf8_byte_mode() {
    let encoded = encode("Kerim Büyükakyüz", ECLevel::L).unwrap();
    assert_eq!(encoded.mode, EncodingMode::Byte);
    // Three two-byte characters
    assert_eq!(encoded.char_count, 19);
    assert!(encoded.data_bits.starts_with("010000010011"));

    let latin1 = Encoder::with_config(EncoderConfig {
        default_level: ECLevel::L,
        byte_charset: ByteCharset::Latin1,
    });
    let encoded = latin1.encode("Kerim Büyükakyüz").unwrap();
    assert_eq!(encoded.char_count, 16);
}

#[test]
fn test_batch_encoding_matches_single() {
    let encoder = Encoder::with_config(EncoderConfig::default());
    let messages = vec!["HELLO WORLD".to_string(), "31415926".to_string()];
    let batch = encoder.encode_batch(&messages);
    for (message, result) in messages.iter().zip(batch) {
        assert_eq!(result.unwrap(), encoder.encode(message).unwrap());
    }
}
