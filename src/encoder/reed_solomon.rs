/// Reed-Solomon error correction for QR codes
/// QR codes use RS over GF(256) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
use tracing::{debug, trace};

use super::tables::BlockInfo;
use crate::error::{QrError, Result};

/// Reduction constant for the field polynomial (0x11D)
const FIELD_POLYNOMIAL: u16 = 285;

/// GF(256) exponent/log tables for generator 2
#[derive(Debug, Clone)]
pub struct GfTables {
    exp: [u8; 256],
    log: [u8; 256],
}

impl GfTables {
    /// Walk the powers of 2, reducing by the field polynomial on overflow
    pub fn build() -> Self {
        let mut exp = [0u8; 256];
        let mut log = [0u8; 256];

        let mut value: u16 = 1;
        for k in 0..255 {
            log[value as usize] = k as u8;
            exp[k] = value as u8;
            value <<= 1;
            if value > 255 {
                value ^= FIELD_POLYNOMIAL;
            }
        }
        // Multiplicative group has order 255
        exp[255] = 1;

        Self { exp, log }
    }

    /// 2^power in the field, periodic with period 255
    pub fn exp(&self, power: usize) -> u8 {
        self.exp[power % 255]
    }

    /// Raw exponent table over 0..=255
    pub fn exp_table(&self) -> &[u8; 256] {
        &self.exp
    }

    /// Discrete log base 2; zero has none
    pub fn log(&self, value: u8) -> Option<u8> {
        (value != 0).then(|| self.log[value as usize])
    }

    /// Field multiplication through the log tables
    pub fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_a = self.log[a as usize] as usize;
        let log_b = self.log[b as usize] as usize;
        self.exp[(log_a + log_b) % 255]
    }
}

/// Computes error correction codewords and the interleaved codeword stream
/// for one version/level block structure.
pub struct ErrorCorrector {
    block_info: BlockInfo,
    tables: GfTables,
    generator: Vec<u8>,
}

impl ErrorCorrector {
    /// Build the field tables and the generator for `block_info.ec_per_block`
    pub fn new(block_info: BlockInfo) -> Self {
        let tables = GfTables::build();
        let generator = Self::build_generator(&tables, block_info.ec_per_block);
        debug!(
            blocks = block_info.num_blocks(),
            ec_per_block = block_info.ec_per_block,
            data_codewords = block_info.data_codewords(),
            "error corrector ready"
        );
        Self {
            block_info,
            tables,
            generator,
        }
    }

    /// Block structure this corrector was built for
    pub fn block_info(&self) -> &BlockInfo {
        &self.block_info
    }

    /// Field tables in use
    pub fn tables(&self) -> &GfTables {
        &self.tables
    }

    /// EC codewords per block times the number of blocks in both groups
    pub fn num_correction_bytes(&self) -> usize {
        self.block_info.ec_codewords()
    }

    /// Data codewords across both groups
    pub fn num_message_bytes(&self) -> usize {
        self.block_info.data_codewords()
    }

    /// Coefficients of g(x) = (x - 2^0)(x - 2^1)...(x - 2^(n-1)),
    /// highest degree first. The leading coefficient is always 1.
    pub fn generator(&self, n: usize) -> Vec<u8> {
        if n == self.generator.len() - 1 {
            return self.generator.clone();
        }
        Self::build_generator(&self.tables, n)
    }

    fn build_generator(tables: &GfTables, n: usize) -> Vec<u8> {
        let mut poly = Vec::with_capacity(n + 1);
        poly.push(1u8);
        for i in 0..n {
            let root = tables.exp(i);
            // Multiply by (x + root); subtraction is XOR
            poly.push(0);
            for j in (1..poly.len()).rev() {
                poly[j] ^= tables.mul(poly[j - 1], root);
            }
        }
        poly
    }

    /// Remainder of block(x) * x^n divided by the generator, n = EC codewords per block
    pub fn correction_bytes(&self, block: &[u8]) -> Vec<u8> {
        let n = self.generator.len() - 1;
        let mut remainder = block.to_vec();
        remainder.resize(block.len() + n, 0);

        for i in 0..block.len() {
            let coef = remainder[i];
            if coef == 0 {
                continue;
            }
            for (j, &g) in self.generator.iter().enumerate() {
                remainder[i + j] ^= self.tables.mul(coef, g);
            }
        }

        remainder.split_off(block.len())
    }

    /// Split a data stream into blocks: group 1 blocks first, then group 2
    pub fn split_blocks<'a>(&self, data: &'a [u8]) -> Result<Vec<&'a [u8]>> {
        let expected = self.num_message_bytes();
        if data.len() != expected {
            return Err(QrError::CodewordCount {
                expected,
                actual: data.len(),
            });
        }

        let mut blocks = Vec::with_capacity(self.block_info.num_blocks());
        let mut rest = data;
        let groups = std::iter::once(self.block_info.group1).chain(self.block_info.group2);
        for group in groups {
            for _ in 0..group.blocks {
                let (block, tail) = rest.split_at(group.data_codewords);
                blocks.push(block);
                rest = tail;
            }
        }
        Ok(blocks)
    }

    /// Final codeword sequence: data codewords column by column across blocks,
    /// then EC codewords column by column. Shorter group 1 blocks drop out of
    /// the last data column.
    pub fn interleave(&self, data: &[u8]) -> Result<Vec<u8>> {
        let blocks = self.split_blocks(data)?;
        let ecc: Vec<Vec<u8>> = blocks.iter().map(|b| self.correction_bytes(b)).collect();
        trace!(blocks = blocks.len(), "computed correction bytes");

        let mut out = Vec::with_capacity(data.len() + self.num_correction_bytes());
        let longest = blocks.iter().map(|b| b.len()).max().unwrap_or(0);
        for column in 0..longest {
            out.extend(blocks.iter().filter_map(|b| b.get(column)));
        }
        for column in 0..self.block_info.ec_per_block {
            out.extend(ecc.iter().filter_map(|b| b.get(column)));
        }

        Ok(out)
    }
}
