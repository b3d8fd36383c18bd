/// Function pattern template builder
///
/// Builds the payload-independent part of a QR symbol for a given version:
/// finder patterns with separators, timing strips, alignment patterns, the
/// fixed dark module and the version information blocks, together with the
/// function-module mask that protects all of them (and the reserved
/// format-information cells) from data placement and masking.
use super::format::version_bits;
use crate::models::ModuleGrid;

/// Immutable structural template for one QR version
pub struct FunctionTemplate {
    version: u8,
    modules: ModuleGrid,
    function: ModuleGrid,
}

impl FunctionTemplate {
    /// Build the template for `version` (1-40)
    pub fn new(version: u8) -> Self {
        let size = version as usize * 4 + 17;
        let mut modules = ModuleGrid::new(size);
        let mut function = ModuleGrid::new(size);

        // Finder patterns + light separator rings, clipped at the borders
        Self::place_finder(&mut modules, &mut function, 3, 3);
        Self::place_finder(&mut modules, &mut function, size - 4, 3);
        Self::place_finder(&mut modules, &mut function, 3, size - 4);

        // Timing strips along row 6 and column 6
        for i in 8..size - 8 {
            let dark = i % 2 == 0;
            modules.set(i, 6, dark);
            modules.set(6, i, dark);
            function.set(i, 6, true);
            function.set(6, i, true);
        }

        // Fixed dark module
        modules.set(8, size - 8, true);
        function.set(8, size - 8, true);

        // Alignment patterns, skipping the three finder corners
        let positions = alignment_pattern_positions(version);
        for &cy in &positions {
            for &cx in &positions {
                let at_finder = (cx == 6 && cy == 6)
                    || (cx == size - 7 && cy == 6)
                    || (cx == 6 && cy == size - 7);
                if at_finder {
                    continue;
                }
                for dy in -2i32..=2 {
                    for dx in -2i32..=2 {
                        let x = (cx as i32 + dx) as usize;
                        let y = (cy as i32 + dy) as usize;
                        modules.set(x, y, dx.abs().max(dy.abs()) != 1);
                        function.set(x, y, true);
                    }
                }
            }
        }

        // Reserve the format information cells
        for i in 0..9 {
            if i == 6 {
                continue;
            }
            function.set(i, 8, true);
            function.set(8, i, true);
        }
        for i in 0..8 {
            function.set(size - 1 - i, 8, true);
            function.set(8, size - 1 - i, true);
        }

        // Version information blocks (versions 7+)
        if version >= 7 {
            let bits = version_bits(version);
            for i in 0..18 {
                let bit = (bits >> i) & 1 != 0;
                let a = size - 11 + i % 3;
                let b = i / 3;
                modules.set(a, b, bit);
                function.set(a, b, true);
                modules.set(b, a, bit);
                function.set(b, a, true);
            }
        }

        Self {
            version,
            modules,
            function,
        }
    }

    /// QR version the template was built for
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.modules.size()
    }

    /// The pre-filled structural pixels
    pub fn modules(&self) -> &ModuleGrid {
        &self.modules
    }

    /// The function-module mask (true = owned by a structural pattern)
    pub fn function(&self) -> &ModuleGrid {
        &self.function
    }

    /// Number of modules available to data and ECC codewords
    pub fn data_module_count(&self) -> usize {
        let size = self.size();
        let mut count = 0;
        for y in 0..size {
            for x in 0..size {
                if !self.function.get(x, y) {
                    count += 1;
                }
            }
        }
        count
    }

    // 7x7 concentric rings centered at (cx, cy) plus the one-module light
    // separator ring around them; both clipped to the grid.
    fn place_finder(modules: &mut ModuleGrid, function: &mut ModuleGrid, cx: usize, cy: usize) {
        let size = modules.size();
        for dy in -4i32..=4 {
            for dx in -4i32..=4 {
                let x = cx as i32 + dx;
                let y = cy as i32 + dy;
                if x < 0 || y < 0 || x >= size as i32 || y >= size as i32 {
                    continue;
                }
                let dist = dx.abs().max(dy.abs());
                // Dark on the outer ring and the center 3x3, light on the
                // ring between them and on the separator
                modules.set(x as usize, y as usize, dist != 2 && dist != 4);
                function.set(x as usize, y as usize, true);
            }
        }
    }
}

/// Alignment pattern center positions for a version.
///
/// The first position is fixed at 6 and the last at `version*4 + 10`;
/// intermediate positions advance by a constant even step.
pub fn alignment_pattern_positions(version: u8) -> Vec<usize> {
    if version == 1 {
        return Vec::new();
    }
    let num_align = version as usize / 7 + 2;
    let step = if version == 32 {
        26
    } else {
        (version as usize * 4 + num_align * 2 + 1) / (2 * num_align - 2) * 2
    };
    let mut positions = vec![6usize];
    for _ in 0..num_align - 2 {
        positions.push(positions.last().unwrap() + step);
    }
    positions.push(version as usize * 4 + 10);
    positions
}
