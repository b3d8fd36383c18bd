/// Codeword placement into the module grid
use crate::models::ModuleGrid;

/// Write the interleaved codewords into every non-function cell.
///
/// Column pairs are walked right to left, skipping the timing column at
/// x = 6, with the vertical direction alternating per pair (the rightmost
/// pair runs upward). Bits are taken most-significant first from each
/// codeword. The caller guarantees `codewords.len() * 8` equals the
/// symbol's data-module count rounded down to whole codewords, so the bit
/// supply is exhausted exactly at the end of the walk.
pub fn place_codewords(grid: &mut ModuleGrid, function: &ModuleGrid, codewords: &[u8]) {
    let size = grid.size();
    let total_bits = codewords.len() * 8;
    let mut i = 0usize;

    let mut upward = true;
    let mut col = size as i32 - 1;
    while col > 0 {
        if col == 6 {
            col -= 1;
            continue;
        }
        for step in 0..size {
            let y = if upward { size - 1 - step } else { step };
            for dx in 0..2 {
                let x = (col - dx) as usize;
                if !function.get(x, y) && i < total_bits {
                    let bit = (codewords[i / 8] >> (7 - i % 8)) & 1;
                    grid.set(x, y, bit != 0);
                    i += 1;
                }
            }
        }
        upward = !upward;
        col -= 2;
    }

    debug_assert_eq!(i, total_bits, "codeword bits must fill the grid exactly");
}
