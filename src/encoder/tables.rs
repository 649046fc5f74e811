use crate::models::{ECLevel, EncodingMode, Version};

/// One group of equally sized blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockGroup {
    /// Number of blocks in the group
    pub blocks: usize,
    /// Data codewords carried by each block of the group
    pub data_codewords: usize,
}

/// Block structure of one version/level pair.
///
/// Group 2 only exists for some symbols; when present its blocks carry one
/// data codeword more than the group 1 blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockInfo {
    /// Error correction codewords appended to every block
    pub ec_per_block: usize,
    /// First block group
    pub group1: BlockGroup,
    /// Optional second block group
    pub group2: Option<BlockGroup>,
}

impl BlockInfo {
    /// Build from the raw table row; `group2` is `(blocks, data_codewords)`
    pub fn new(
        ec_per_block: usize,
        group1_blocks: usize,
        group1_data: usize,
        group2: Option<(usize, usize)>,
    ) -> Self {
        Self {
            ec_per_block,
            group1: BlockGroup {
                blocks: group1_blocks,
                data_codewords: group1_data,
            },
            group2: group2.map(|(blocks, data_codewords)| BlockGroup {
                blocks,
                data_codewords,
            }),
        }
    }

    /// Total number of blocks across both groups
    pub fn num_blocks(&self) -> usize {
        self.group1.blocks + self.group2.map_or(0, |g| g.blocks)
    }

    /// Total data codewords across both groups
    pub fn data_codewords(&self) -> usize {
        let mut total = self.group1.blocks * self.group1.data_codewords;
        if let Some(g2) = self.group2 {
            total += g2.blocks * g2.data_codewords;
        }
        total
    }

    /// Total error correction codewords across both groups
    pub fn ec_codewords(&self) -> usize {
        self.ec_per_block * self.num_blocks()
    }
}

/// Absolute ceiling on message length: numeric capacity of 40-L.
pub const MAX_MESSAGE_LENGTH: usize = 7089;

// Character capacities from ISO/IEC 18004 Table 7.
// Index: [ec_level][version - 1]
const NUMERIC_CAPACITY: [[u16; 40]; 4] = [
    [
        41, 77, 127, 187, 255, 322, 370, 461, 552, 652, 772, 883, 1022, 1101, 1250, 1408, 1548,
        1725, 1903, 2061, 2232, 2409, 2620, 2812, 3057, 3283, 3517, 3669, 3909, 4158, 4417, 4686,
        4965, 5253, 5529, 5836, 6153, 6479, 6743, 7089,
    ], // Low
    [
        34, 63, 101, 149, 202, 255, 293, 365, 432, 513, 604, 691, 796, 871, 991, 1082, 1212, 1346,
        1500, 1600, 1708, 1872, 2059, 2188, 2395, 2544, 2701, 2857, 3035, 3289, 3486, 3693, 3909,
        4134, 4343, 4588, 4775, 5039, 5313, 5596,
    ], // Medium
    [
        27, 48, 77, 111, 144, 178, 207, 259, 312, 364, 427, 489, 580, 621, 703, 775, 876, 948,
        1063, 1159, 1224, 1358, 1468, 1588, 1718, 1804, 1933, 2085, 2181, 2358, 2473, 2670, 2805,
        2949, 3081, 3244, 3417, 3599, 3791, 3993,
    ], // Quartile
    [
        17, 34, 58, 82, 106, 139, 154, 202, 235, 288, 331, 374, 427, 468, 530, 602, 674, 746, 813,
        919, 969, 1056, 1108, 1228, 1286, 1425, 1501, 1581, 1677, 1782, 1897, 2022, 2157, 2301,
        2361, 2524, 2625, 2735, 2927, 3057,
    ], // High
];

const ALPHANUMERIC_CAPACITY: [[u16; 40]; 4] = [
    [
        25, 47, 77, 114, 154, 195, 224, 279, 335, 395, 468, 535, 619, 667, 758, 854, 938, 1046,
        1153, 1249, 1352, 1460, 1588, 1704, 1853, 1990, 2132, 2223, 2369, 2520, 2677, 2840, 3009,
        3183, 3351, 3537, 3729, 3927, 4087, 4296,
    ], // Low
    [
        20, 38, 61, 90, 122, 154, 178, 221, 262, 311, 366, 419, 483, 528, 600, 656, 734, 816, 909,
        970, 1035, 1134, 1248, 1326, 1451, 1542, 1637, 1732, 1839, 1994, 2113, 2238, 2369, 2506,
        2632, 2780, 2894, 3054, 3220, 3391,
    ], // Medium
    [
        16, 29, 47, 67, 87, 108, 125, 157, 189, 221, 259, 296, 352, 376, 426, 470, 531, 574, 644,
        702, 742, 823, 890, 963, 1041, 1094, 1172, 1263, 1322, 1429, 1499, 1618, 1700, 1787, 1867,
        1966, 2071, 2181, 2298, 2420,
    ], // Quartile
    [
        10, 20, 35, 50, 64, 84, 93, 122, 143, 174, 200, 227, 259, 283, 321, 365, 408, 452, 493,
        557, 587, 640, 672, 744, 779, 864, 910, 958, 1016, 1080, 1150, 1226, 1307, 1394, 1431,
        1530, 1591, 1658, 1774, 1852,
    ], // High
];

const BYTE_CAPACITY: [[u16; 40]; 4] = [
    [
        17, 32, 53, 78, 106, 134, 154, 192, 230, 271, 321, 367, 425, 458, 520, 586, 644, 718, 792,
        858, 929, 1003, 1091, 1171, 1273, 1367, 1465, 1528, 1628, 1732, 1840, 1952, 2068, 2188,
        2303, 2431, 2563, 2699, 2809, 2953,
    ], // Low
    [
        14, 26, 42, 62, 84, 106, 122, 152, 180, 213, 251, 287, 331, 362, 412, 450, 504, 560, 624,
        666, 711, 779, 857, 911, 997, 1059, 1125, 1190, 1264, 1370, 1452, 1538, 1628, 1722, 1809,
        1911, 1989, 2099, 2213, 2331,
    ], // Medium
    [
        11, 20, 32, 46, 60, 74, 86, 108, 130, 151, 177, 203, 241, 258, 292, 322, 364, 394, 442,
        482, 509, 565, 611, 661, 715, 751, 805, 868, 908, 982, 1030, 1112, 1168, 1228, 1283, 1351,
        1423, 1499, 1579, 1663,
    ], // Quartile
    [
        7, 14, 24, 34, 44, 58, 64, 84, 98, 119, 137, 155, 177, 194, 220, 250, 280, 310, 338, 382,
        403, 439, 461, 511, 535, 593, 625, 658, 698, 742, 790, 842, 898, 958, 983, 1051, 1093,
        1139, 1219, 1273,
    ], // High
];

// (ec codewords per block, group 1 blocks, group 1 data codewords,
//  group 2 blocks, group 2 data codewords); zero marks an absent group 2.
// ISO/IEC 18004 Table 9. Index: [version - 1][ec_level]
const BLOCK_INFORMATION: [[(u8, u8, u8, u8, u8); 4]; 40] = [
    [(7, 1, 19, 0, 0), (10, 1, 16, 0, 0), (13, 1, 13, 0, 0), (17, 1, 9, 0, 0)],
    [(10, 1, 34, 0, 0), (16, 1, 28, 0, 0), (22, 1, 22, 0, 0), (28, 1, 16, 0, 0)],
    [(15, 1, 55, 0, 0), (26, 1, 44, 0, 0), (18, 2, 17, 0, 0), (22, 2, 13, 0, 0)],
    [(20, 1, 80, 0, 0), (18, 2, 32, 0, 0), (26, 2, 24, 0, 0), (16, 4, 9, 0, 0)],
    [(26, 1, 108, 0, 0), (24, 2, 43, 0, 0), (18, 2, 15, 2, 16), (22, 2, 11, 2, 12)],
    [(18, 2, 68, 0, 0), (16, 4, 27, 0, 0), (24, 4, 19, 0, 0), (28, 4, 15, 0, 0)],
    [(20, 2, 78, 0, 0), (18, 4, 31, 0, 0), (18, 2, 14, 4, 15), (26, 4, 13, 1, 14)],
    [(24, 2, 97, 0, 0), (22, 2, 38, 2, 39), (22, 4, 18, 2, 19), (26, 4, 14, 2, 15)],
    [(30, 2, 116, 0, 0), (22, 3, 36, 2, 37), (20, 4, 16, 4, 17), (24, 4, 12, 4, 13)],
    [(18, 2, 68, 2, 69), (26, 4, 43, 1, 44), (24, 6, 19, 2, 20), (28, 6, 15, 2, 16)],
    [(20, 4, 81, 0, 0), (30, 1, 50, 4, 51), (28, 4, 22, 4, 23), (24, 3, 12, 8, 13)],
    [(24, 2, 92, 2, 93), (22, 6, 36, 2, 37), (26, 4, 20, 6, 21), (28, 7, 14, 4, 15)],
    [(26, 4, 107, 0, 0), (22, 8, 37, 1, 38), (24, 8, 20, 4, 21), (22, 12, 11, 4, 12)],
    [(30, 3, 115, 1, 116), (24, 4, 40, 5, 41), (20, 11, 16, 5, 17), (24, 11, 12, 5, 13)],
    [(22, 5, 87, 1, 88), (24, 5, 41, 5, 42), (30, 5, 24, 7, 25), (24, 11, 12, 7, 13)],
    [(24, 5, 98, 1, 99), (28, 7, 45, 3, 46), (24, 15, 19, 2, 20), (30, 3, 15, 13, 16)],
    [(28, 1, 107, 5, 108), (28, 10, 46, 1, 47), (28, 1, 22, 15, 23), (28, 2, 14, 17, 15)],
    [(30, 5, 120, 1, 121), (26, 9, 43, 4, 44), (28, 17, 22, 1, 23), (28, 2, 14, 19, 15)],
    [(28, 3, 113, 4, 114), (26, 3, 44, 11, 45), (26, 17, 21, 4, 22), (26, 9, 13, 16, 14)],
    [(28, 3, 107, 5, 108), (26, 3, 41, 13, 42), (30, 15, 24, 5, 25), (28, 15, 15, 10, 16)],
    [(28, 4, 116, 4, 117), (26, 17, 42, 0, 0), (28, 17, 22, 6, 23), (30, 19, 16, 6, 17)],
    [(28, 2, 111, 7, 112), (28, 17, 46, 0, 0), (30, 7, 24, 16, 25), (24, 34, 13, 0, 0)],
    [(30, 4, 121, 5, 122), (28, 4, 47, 14, 48), (30, 11, 24, 14, 25), (30, 16, 15, 14, 16)],
    [(30, 6, 117, 4, 118), (28, 6, 45, 14, 46), (30, 11, 24, 16, 25), (30, 30, 16, 2, 17)],
    [(26, 8, 106, 4, 107), (28, 8, 47, 13, 48), (30, 7, 24, 22, 25), (30, 22, 15, 13, 16)],
    [(28, 10, 114, 2, 115), (28, 19, 46, 4, 47), (28, 28, 22, 6, 23), (30, 33, 16, 4, 17)],
    [(30, 8, 122, 4, 123), (28, 22, 45, 3, 46), (30, 8, 23, 26, 24), (30, 12, 15, 28, 16)],
    [(30, 3, 117, 10, 118), (28, 3, 45, 23, 46), (30, 4, 24, 31, 25), (30, 11, 15, 31, 16)],
    [(30, 7, 116, 7, 117), (28, 21, 45, 7, 46), (30, 1, 23, 37, 24), (30, 19, 15, 26, 16)],
    [(30, 5, 115, 10, 116), (28, 19, 47, 10, 48), (30, 15, 24, 25, 25), (30, 23, 15, 25, 16)],
    [(30, 13, 115, 3, 116), (28, 2, 46, 29, 47), (30, 42, 24, 1, 25), (30, 23, 15, 28, 16)],
    [(30, 17, 115, 0, 0), (28, 10, 46, 23, 47), (30, 10, 24, 35, 25), (30, 19, 15, 35, 16)],
    [(30, 17, 115, 1, 116), (28, 14, 46, 21, 47), (30, 29, 24, 19, 25), (30, 11, 15, 46, 16)],
    [(30, 13, 115, 6, 116), (28, 14, 46, 23, 47), (30, 44, 24, 7, 25), (30, 59, 16, 1, 17)],
    [(30, 12, 121, 7, 122), (28, 12, 47, 26, 48), (30, 39, 24, 14, 25), (30, 22, 15, 41, 16)],
    [(30, 6, 121, 14, 122), (28, 6, 47, 34, 48), (30, 46, 24, 10, 25), (30, 2, 15, 64, 16)],
    [(30, 17, 122, 4, 123), (28, 29, 46, 14, 47), (30, 49, 24, 10, 25), (30, 24, 15, 46, 16)],
    [(30, 4, 122, 18, 123), (28, 13, 46, 32, 47), (30, 48, 24, 14, 25), (30, 42, 15, 32, 16)],
    [(30, 20, 117, 4, 118), (28, 40, 47, 7, 48), (30, 43, 24, 22, 25), (30, 10, 15, 67, 16)],
    [(30, 19, 118, 6, 119), (28, 18, 47, 31, 48), (30, 34, 24, 34, 25), (30, 20, 15, 61, 16)],
];

/// Cumulative character capacities for versions 1-40 of a mode/level pair.
///
/// Kanji has no table since the mode is not encodable here.
pub fn char_capacities(mode: EncodingMode, ec_level: ECLevel) -> Option<&'static [u16; 40]> {
    let idx = ec_level_index(ec_level);
    match mode {
        EncodingMode::Numeric => Some(&NUMERIC_CAPACITY[idx]),
        EncodingMode::Alphanumeric => Some(&ALPHANUMERIC_CAPACITY[idx]),
        EncodingMode::Byte => Some(&BYTE_CAPACITY[idx]),
        EncodingMode::Kanji => None,
    }
}

/// Block structure for a version and correction level
pub fn block_info(version: Version, ec_level: ECLevel) -> BlockInfo {
    let (ec, b1, d1, b2, d2) =
        BLOCK_INFORMATION[version.number() as usize - 1][ec_level_index(ec_level)];
    let group2 = if b2 > 0 {
        Some((b2 as usize, d2 as usize))
    } else {
        None
    };
    BlockInfo::new(ec as usize, b1 as usize, d1 as usize, group2)
}

fn ec_level_index(ec_level: ECLevel) -> usize {
    match ec_level {
        ECLevel::L => 0,
        ECLevel::M => 1,
        ECLevel::Q => 2,
        ECLevel::H => 3,
    }
}
