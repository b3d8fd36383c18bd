/// Format and version information encoding (BCH protected)
use crate::models::{EcLevel, MaskPattern, ModuleGrid};

/// BCH(15,5) generator polynomial for the format information
const FORMAT_GENERATOR: u32 = 0x537;
/// Mask constant XORed over the 15 format bits
const FORMAT_MASK: u32 = 0x5412;
/// BCH(18,6) generator polynomial for the version information
const VERSION_GENERATOR: u32 = 0x1F25;

/// The 15 BCH-protected format bits for a level/mask combination
pub fn format_bits(ec_level: EcLevel, mask: MaskPattern) -> u16 {
    let data = ((ec_level.format_bits() as u32) << 3) | mask.index() as u32;
    let mut rem = data;
    for _ in 0..10 {
        rem = (rem << 1) ^ (((rem >> 9) & 1) * FORMAT_GENERATOR);
    }
    (((data << 10) | rem) ^ FORMAT_MASK) as u16
}

/// The 18 BCH-protected version bits (versions 7-40)
pub fn version_bits(version: u8) -> u32 {
    let mut rem = version as u32;
    for _ in 0..12 {
        rem = (rem << 1) ^ (((rem >> 11) & 1) * VERSION_GENERATOR);
    }
    ((version as u32) << 12) | rem
}

/// Write both copies of the format information into the grid.
///
/// Copy 1 wraps around the top-left finder pattern, skipping the timing
/// row/column; copy 2 is split between below the top-right finder and
/// right of the bottom-left finder. The fixed dark module at
/// (8, size-8) belongs to the function template and is not touched here.
pub fn draw_format_bits(grid: &mut ModuleGrid, ec_level: EcLevel, mask: MaskPattern) {
    let size = grid.size();
    let bits = format_bits(ec_level, mask);
    let bit = |i: usize| (bits >> i) & 1 != 0;

    // First copy, around the top-left finder
    for i in 0..6 {
        grid.set(8, i, bit(i));
    }
    grid.set(8, 7, bit(6));
    grid.set(8, 8, bit(7));
    grid.set(7, 8, bit(8));
    for i in 9..15 {
        grid.set(14 - i, 8, bit(i));
    }

    // Second copy, split across the other two finders
    for i in 0..8 {
        grid.set(size - 1 - i, 8, bit(i));
    }
    for i in 8..15 {
        grid.set(8, size - 15 + i, bit(i));
    }
}
