//! QR symbol encoding pipeline
//!
//! Byte-mode subset of ISO/IEC 18004 (versions 1-40, no alphanumeric or
//! kanji compaction, no ECI):
//! - Bit-stream assembly and minimal version selection
//! - Reed-Solomon error correction over GF(256) and block interleaving
//! - Function pattern template (finder/timing/alignment/version info)
//! - Zig-zag codeword placement
//! - Mask trials with penalty scoring and format information

/// Bit-stream assembly (mode/length/payload/terminator/padding)
pub mod bitstream;
/// Format and version information (BCH protected)
pub mod format;
/// Function pattern template builder
pub mod function_pattern;
/// Block splitting, per-block ECC and codeword interleaving
pub mod interleave;
/// Mask application, penalty scoring and selection
pub mod mask;
/// Zig-zag codeword placement
pub mod placement;
pub mod reed_solomon;
/// QR specification tables (ECC codewords/blocks)
pub mod tables;

use crate::error::{Error, Result};
use crate::models::{EcLevel, QrCode};
use self::bitstream::BitBuffer;
use self::function_pattern::FunctionTemplate;
use self::interleave::add_ecc_and_interleave;
use self::mask::select_mask;
use self::placement::place_codewords;
use self::tables::{ec_block_info, MAX_VERSION, MIN_VERSION};

/// Encode payload bytes into a QR symbol at the given level.
///
/// Picks the minimal version that fits, assembles the byte-mode bit
/// stream, adds Reed-Solomon ECC, places the codewords and selects the
/// lowest-penalty mask.
pub fn encode(data: &[u8], ec_level: EcLevel) -> Result<QrCode> {
    let version = choose_version(data.len(), ec_level)?;
    let capacity_bits = data_capacity_bits(version, ec_level);

    let mut buffer = BitBuffer::new();
    buffer.append_bits(0b0100, 4);
    buffer.append_bits(data.len() as u32, char_count_bits(version));
    for &byte in data {
        buffer.append_bits(byte as u32, 8);
    }
    buffer.append_terminator(capacity_bits);
    let mut codewords = buffer.to_codewords();
    let pad = capacity_bits / 8 - codewords.len();
    codewords.extend(BitBuffer::pad_codewords(pad));

    let full_codewords = add_ecc_and_interleave(&codewords, version, ec_level);

    let template = FunctionTemplate::new(version);
    let mut base = template.modules().clone();
    place_codewords(&mut base, template.function(), &full_codewords);

    let (mask, grid, _penalty) = select_mask(&base, template.function(), ec_level);

    Ok(QrCode::from_parts(
        version,
        ec_level,
        mask,
        grid,
        template.function().clone(),
    ))
}

/// The smallest version whose data capacity fits `data_len` payload bytes
pub fn choose_version(data_len: usize, ec_level: EcLevel) -> Result<u8> {
    for version in MIN_VERSION..=MAX_VERSION {
        let total_bits = 4 + char_count_bits(version) + data_len * 8;
        if total_bits <= data_capacity_bits(version, ec_level) {
            return Ok(version);
        }
    }
    Err(Error::EncodingTooLarge)
}

/// Data capacity in bits for a version/level combination, derived from
/// the function template's free module count and the ECC tables
pub fn data_capacity_bits(version: u8, ec_level: EcLevel) -> usize {
    let template = FunctionTemplate::new(version);
    let total_codewords = template.data_module_count() / 8;
    let info = ec_block_info(version, ec_level).expect("version in supported range");
    (total_codewords - info.total_ecc) * 8
}

/// Width of the byte-mode character count field (8 bits through version
/// 9, 16 bits above)
fn char_count_bits(version: u8) -> usize {
    if version <= 9 { 8 } else { 16 }
}
