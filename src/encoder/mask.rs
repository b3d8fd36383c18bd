/// Mask application, penalty scoring and mask selection
use rayon::prelude::*;

use super::format::draw_format_bits;
use crate::models::{EcLevel, MaskPattern, ModuleGrid};

/// XOR the mask pattern over every non-function cell
pub fn apply_mask(grid: &mut ModuleGrid, function: &ModuleGrid, mask: MaskPattern) {
    let size = grid.size();
    for y in 0..size {
        for x in 0..size {
            if !function.get(x, y) && mask.is_masked(y, x) {
                grid.toggle(x, y);
            }
        }
    }
}

/// Build the complete symbol for one mask candidate and score it.
///
/// Pure function of its inputs: the base grid already carries the placed
/// codewords, so each candidate is mask XOR + format bits + scoring with
/// no shared mutable state.
pub fn masked_symbol(
    base: &ModuleGrid,
    function: &ModuleGrid,
    ec_level: EcLevel,
    mask: MaskPattern,
) -> (ModuleGrid, u32) {
    let mut grid = base.clone();
    apply_mask(&mut grid, function, mask);
    draw_format_bits(&mut grid, ec_level, mask);
    let penalty = penalty_score(&grid);
    (grid, penalty)
}

/// Try all 8 masks in parallel and keep the lowest-penalty symbol.
///
/// Ties break toward the lowest mask index: the reduction key is
/// (penalty, index), so the result is deterministic regardless of how the
/// trials are scheduled.
pub fn select_mask(
    base: &ModuleGrid,
    function: &ModuleGrid,
    ec_level: EcLevel,
) -> (MaskPattern, ModuleGrid, u32) {
    let (penalty, mask, grid) = (0u8..8)
        .into_par_iter()
        .map(|index| {
            let mask = MaskPattern::from_index(index).unwrap();
            let (grid, penalty) = masked_symbol(base, function, ec_level, mask);
            (penalty, index, grid)
        })
        .min_by_key(|(penalty, index, _)| (*penalty, *index))
        .expect("eight mask candidates");
    (MaskPattern::from_index(mask).unwrap(), grid, penalty)
}

/// Total penalty score of a finished symbol
pub fn penalty_score(grid: &ModuleGrid) -> u32 {
    let size = grid.size();
    let mut score = 0u32;

    let mut row = vec![false; size];
    let mut column = vec![false; size];
    for i in 0..size {
        for j in 0..size {
            row[j] = grid.get(j, i);
            column[j] = grid.get(i, j);
        }
        score += penalty_runs(&row) + penalty_patterns(&row);
        score += penalty_runs(&column) + penalty_patterns(&column);
    }

    // 2x2 blocks of one color, overlapping blocks all counted
    for y in 0..size - 1 {
        for x in 0..size - 1 {
            let c = grid.get(x, y);
            if c == grid.get(x + 1, y) && c == grid.get(x, y + 1) && c == grid.get(x + 1, y + 1) {
                score += 3;
            }
        }
    }

    // Dark-module balance: 10 points per 5% deviation from 50%
    let dark = grid.dark_count() as u64;
    let total = (size * size) as u64;
    let k = (dark * 20).abs_diff(total * 10) / total;
    score += k as u32 * 10;

    score
}

// Runs of 5+ same-color modules: 3 points at length 5, 1 per extra module
fn penalty_runs(line: &[bool]) -> u32 {
    let mut score = 0;
    let mut run_color = false;
    let mut run_length = 0u32;
    for &color in line {
        if color == run_color {
            run_length += 1;
            if run_length == 5 {
                score += 3;
            } else if run_length > 5 {
                score += 1;
            }
        } else {
            run_color = color;
            run_length = 1;
        }
    }
    score
}

// Finder-like 1:1:3:1:1 sequences with a light flank, both orientations
fn penalty_patterns(line: &[bool]) -> u32 {
    const PATTERN1: [bool; 11] = [
        true, false, true, true, true, false, true, false, false, false, false,
    ];
    const PATTERN2: [bool; 11] = [
        false, false, false, false, true, false, true, true, true, false, true,
    ];
    let mut score = 0;
    for window in line.windows(11) {
        if window == PATTERN1 || window == PATTERN2 {
            score += 40;
        }
    }
    score
}
