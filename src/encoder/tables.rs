use crate::models::EcLevel;

/// Reed-Solomon block geometry for one version/level combination
pub struct EcBlockInfo {
    /// Number of Reed-Solomon blocks the data is split into
    pub num_blocks: usize,
    /// Total ECC codewords across all blocks
    pub total_ecc: usize,
    /// ECC codewords appended to each block (total_ecc / num_blocks, exact)
    pub ecc_per_block: usize,
}

// Tables from the QR Code specification (Model 2).
// Index: [ec_level][version], version 0 unused.
const TOTAL_ECC_CODEWORDS: [[u16; 41]; 4] = [
    [
        0, 7, 10, 15, 20, 26, 36, 40, 48, 60, 72, 80, 96, 104, 120, 132, 144, 168, 180, 196, 224,
        224, 252, 270, 300, 312, 336, 360, 390, 420, 450, 480, 510, 540, 570, 570, 600, 630, 660,
        720, 750,
    ], // Low
    [
        0, 10, 16, 26, 36, 48, 64, 72, 88, 110, 130, 150, 176, 198, 216, 240, 280, 308, 338, 364,
        416, 442, 476, 504, 560, 588, 644, 700, 728, 784, 812, 868, 924, 980, 1036, 1064, 1120,
        1204, 1260, 1316, 1372,
    ], // Medium
    [
        0, 13, 22, 36, 52, 72, 96, 108, 132, 160, 192, 224, 260, 288, 320, 360, 408, 448, 504, 546,
        600, 644, 690, 750, 810, 870, 952, 1020, 1050, 1140, 1200, 1290, 1350, 1440, 1530, 1590,
        1680, 1770, 1860, 1950, 2040,
    ], // Quartile
    [
        0, 17, 28, 44, 64, 88, 112, 130, 156, 192, 224, 264, 308, 352, 384, 432, 480, 532, 588,
        650, 700, 750, 816, 900, 960, 1050, 1110, 1200, 1260, 1350, 1440, 1530, 1620, 1710, 1800,
        1890, 1980, 2100, 2220, 2310, 2430,
    ], // High
];

const NUM_ERROR_CORRECTION_BLOCKS: [[u8; 41]; 4] = [
    [
        0, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12, 13,
        14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        0, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        0, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27, 29,
        34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        0, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

/// Minimum supported QR version
pub const MIN_VERSION: u8 = 1;
/// Maximum supported QR version
pub const MAX_VERSION: u8 = 40;

/// Block geometry for a version/level combination.
///
/// Returns `None` outside versions 1-40. The per-block division is exact
/// for every table entry.
pub fn ec_block_info(version: u8, ec_level: EcLevel) -> Option<EcBlockInfo> {
    if !(MIN_VERSION..=MAX_VERSION).contains(&version) {
        return None;
    }
    let idx = ec_level.index();
    let total_ecc = TOTAL_ECC_CODEWORDS[idx][version as usize] as usize;
    let num_blocks = NUM_ERROR_CORRECTION_BLOCKS[idx][version as usize] as usize;
    Some(EcBlockInfo {
        num_blocks,
        total_ecc,
        ecc_per_block: total_ecc / num_blocks,
    })
}
