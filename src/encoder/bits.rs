//! Bit-string helpers shared by the mode encoders and the codeword packer
//!
//! Bit strings are plain `String`s of '0' and '1'.

/// Side on which zero padding is added
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadSide {
    /// Zeros before the bits
    Left,
    /// Zeros after the bits
    Right,
}

/// Zero-pad `bits` to `length` characters. Longer input is returned unchanged.
pub fn pad_bits(bits: &str, length: usize, side: PadSide) -> String {
    let fill = length.saturating_sub(bits.len());
    let mut out = String::with_capacity(bits.len() + fill);
    if side == PadSide::Right {
        out.push_str(bits);
    }
    out.extend(std::iter::repeat_n('0', fill));
    if side == PadSide::Left {
        out.push_str(bits);
    }
    out
}

/// Binary representation of `value`, left-padded with zeros to `width`
pub fn to_binary(value: usize, width: usize) -> String {
    pad_bits(&format!("{:b}", value), width, PadSide::Left)
}

/// Pack a bit string into MSB-first bytes
///
/// A trailing partial byte is zero-filled on the right.
pub fn bits_to_codewords(bits: &str) -> Vec<u8> {
    bits.as_bytes()
        .chunks(8)
        .map(|chunk| {
            let byte = chunk
                .iter()
                .fold(0u8, |acc, &b| (acc << 1) | u8::from(b == b'1'));
            byte << (8 - chunk.len())
        })
        .collect()
}

/// Expand bytes into a bit string, MSB first
pub fn codewords_to_bits(codewords: &[u8]) -> String {
    codewords.iter().map(|b| format!("{:08b}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_left_and_right() {
        assert_eq!(pad_bits("101", 6, PadSide::Left), "000101");
        assert_eq!(pad_bits("101", 6, PadSide::Right), "101000");
        assert_eq!(pad_bits("", 3, PadSide::Left), "000");
    }

    #[test]
    fn test_pad_never_truncates() {
        assert_eq!(pad_bits("110011", 4, PadSide::Left), "110011");
        assert_eq!(pad_bits("110011", 6, PadSide::Right), "110011");
    }

    #[test]
    fn test_to_binary() {
        assert_eq!(to_binary(3, 10), "0000000011");
        assert_eq!(to_binary(0, 4), "0000");
        assert_eq!(to_binary(562, 10), "1000110010");
    }

    #[test]
    fn test_codeword_packing() {
        assert_eq!(bits_to_codewords("0010000001011011"), vec![0x20, 0x5B]);
        assert_eq!(bits_to_codewords("1"), vec![0x80]);
        assert_eq!(codewords_to_bits(&[0xEC, 0x11]), "1110110000010001");
        assert!(bits_to_codewords("").is_empty());
    }
}
