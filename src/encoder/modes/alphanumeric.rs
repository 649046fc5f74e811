/// Alphanumeric mode encoder (Mode 0010)
use crate::encoder::bits::to_binary;

/// Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
const ALPHANUMERIC_TABLE: [char; 45] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ', '$',
    '%', '*', '+', '-', '.', '/', ':',
];

/// Encode alphanumeric data
/// Pairs = 11 bits (45 * first + second), trailing single = 6 bits
pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    /// Value of a character in the alphanumeric set
    pub fn char_value(c: char) -> Option<u8> {
        ALPHANUMERIC_TABLE
            .iter()
            .position(|&t| t == c)
            .map(|idx| idx as u8)
    }

    /// Whether `c` is in the 45-character set
    pub fn is_encodable(c: char) -> bool {
        Self::char_value(c).is_some()
    }

    /// Character values of a message; the first character outside the set is the error
    pub fn to_units(message: &str) -> Result<Vec<u8>, char> {
        message
            .chars()
            .map(|c| Self::char_value(c).ok_or(c))
            .collect()
    }

    /// Encode character values (0-44) into the payload bit string
    pub fn encode(values: &[u8]) -> String {
        let mut encoded = String::with_capacity(values.len() / 2 * 11 + 6);

        for group in values.chunks(2) {
            match *group {
                [first, second] => {
                    let value = 45 * first as usize + second as usize;
                    encoded.push_str(&to_binary(value, 11));
                }
                [single] => encoded.push_str(&to_binary(single as usize, 6)),
                _ => {}
            }
        }

        encoded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_str(message: &str) -> String {
        AlphanumericEncoder::encode(&AlphanumericEncoder::to_units(message).unwrap())
    }

    #[test]
    fn test_char_values() {
        assert_eq!(AlphanumericEncoder::char_value('7'), Some(7));
        assert_eq!(AlphanumericEncoder::char_value('A'), Some(10));
        assert_eq!(AlphanumericEncoder::char_value('Z'), Some(35));
        assert_eq!(AlphanumericEncoder::char_value(' '), Some(36));
        assert_eq!(AlphanumericEncoder::char_value(':'), Some(44));
        assert_eq!(AlphanumericEncoder::char_value('a'), None);
        assert_eq!(AlphanumericEncoder::char_value('\n'), None);
    }

    #[test]
    fn test_to_units_rejects_lowercase() {
        assert_eq!(AlphanumericEncoder::to_units("AB1"), Ok(vec![10, 11, 1]));
        assert_eq!(AlphanumericEncoder::to_units("ABc"), Err('c'));
    }

    #[test]
    fn test_alphanumeric_encode_even_length() {
        assert_eq!(encode_str("-./:"), "1110101111111110111011");
        assert_eq!(encode_str("D7D5"), "0100101000001001001110");
    }

    #[test]
    fn test_alphanumeric_encode_odd_length() {
        assert_eq!(encode_str("+-./:"), "1110011000111110001101101100");
        assert_eq!(encode_str("D7-D5"), "0100101000011101000010000101");
    }

    #[test]
    fn test_hello_world() {
        // "HE", "LL", "O ", "WO", "RL", "D"
        assert_eq!(
            encode_str("HELLO WORLD"),
            "0110000101101111000110100010111001011011100010011010100001101"
        );
    }
}
