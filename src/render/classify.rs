/// Module classification into eye / frame / body regions
use crate::models::{ModuleGrid, Region};

/// Per-cell classification of a module grid.
///
/// Labels live in one flat row-major buffer; `None` marks light modules.
pub struct ClassifiedGrid {
    size: usize,
    labels: Vec<Option<Region>>,
}

impl ClassifiedGrid {
    /// Side length of the classified grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Classification of the module at (x, y); `None` for light modules
    /// and out-of-bounds reads
    pub fn region(&self, x: usize, y: usize) -> Option<Region> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.labels[y * self.size + x]
    }
}

/// Width of the quiet zone around the symbol, inferred as the smallest
/// row/column index holding a dark module. Grids with no dark modules
/// report 0.
pub fn detect_quiet_zone(grid: &ModuleGrid) -> usize {
    let size = grid.size();
    let mut min_x = size;
    let mut min_y = size;
    for y in 0..size {
        for x in 0..size {
            if grid.get(x, y) {
                min_x = min_x.min(x);
                min_y = min_y.min(y);
            }
        }
    }
    if min_x == size || min_y == size {
        return 0;
    }
    min_x.min(min_y)
}

/// Classify every dark module of `grid`.
///
/// The three finder origins are derived from the inferred quiet zone at
/// the top-left, top-right and bottom-left corners; inside each in-bounds
/// 7x7 area the center 3x3 dark cells become `Eye` and the rest of the
/// dark cells `Frame`. Every other dark module is `Body`. Grids smaller
/// than 7 modules get no finder classification at all.
pub fn classify(grid: &ModuleGrid) -> ClassifiedGrid {
    let size = grid.size();
    let mut labels = vec![None; size * size];

    for y in 0..size {
        for x in 0..size {
            if grid.get(x, y) {
                labels[y * size + x] = Some(Region::Body);
            }
        }
    }

    if size >= 7 {
        let quiet_zone = detect_quiet_zone(grid);
        let origins = [
            (quiet_zone as i64, quiet_zone as i64),
            (size as i64 - quiet_zone as i64 - 7, quiet_zone as i64),
            (quiet_zone as i64, size as i64 - quiet_zone as i64 - 7),
        ];
        for (origin_x, origin_y) in origins {
            if origin_x < 0 || origin_y < 0 {
                continue;
            }
            let (origin_x, origin_y) = (origin_x as usize, origin_y as usize);
            if origin_x + 7 > size || origin_y + 7 > size {
                continue;
            }
            for dy in 0..7 {
                for dx in 0..7 {
                    let x = origin_x + dx;
                    let y = origin_y + dy;
                    if !grid.get(x, y) {
                        continue;
                    }
                    let eye = (2..=4).contains(&dx) && (2..=4).contains(&dy);
                    labels[y * size + x] = Some(if eye { Region::Eye } else { Region::Frame });
                }
            }
        }
    }

    ClassifiedGrid { size, labels }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder;
    use crate::models::EcLevel;

    #[test]
    fn test_quiet_zone_detection() {
        let mut grid = ModuleGrid::new(10);
        assert_eq!(detect_quiet_zone(&grid), 0);

        grid.set(3, 5, true);
        assert_eq!(detect_quiet_zone(&grid), 3);

        grid.set(7, 2, true);
        assert_eq!(detect_quiet_zone(&grid), 2);
    }

    #[test]
    fn test_classify_symbol_with_border() {
        let qr = encoder::encode(b"A", EcLevel::Low).unwrap();
        let matrix = qr.to_matrix(4).unwrap();
        let classified = classify(&matrix);
        assert_eq!(classified.size(), 29);

        // Top-left finder sits at origin (4,4): its corner is frame, the
        // center eye module is eye
        assert_eq!(classified.region(4, 4), Some(Region::Frame));
        assert_eq!(classified.region(7, 7), Some(Region::Eye));
        // Separator ring is light
        assert_eq!(classified.region(11, 4), None);
        // Timing strip belongs to the body
        assert_eq!(classified.region(12, 10), Some(Region::Body));
        // Quiet zone is unclassified
        assert_eq!(classified.region(0, 0), None);
    }

    #[test]
    fn test_eye_counts() {
        let qr = encoder::encode(b"region count", EcLevel::Medium).unwrap();
        let matrix = qr.to_matrix(2).unwrap();
        let classified = classify(&matrix);

        let mut eyes = 0;
        let mut frames = 0;
        for y in 0..classified.size() {
            for x in 0..classified.size() {
                match classified.region(x, y) {
                    Some(Region::Eye) => eyes += 1,
                    Some(Region::Frame) => frames += 1,
                    _ => {}
                }
            }
        }
        // Three 3x3 eyes and three 24-module dark rings
        assert_eq!(eyes, 27);
        assert_eq!(frames, 72);
    }

    #[test]
    fn test_small_grid_is_all_body() {
        let mut grid = ModuleGrid::new(5);
        grid.set(1, 1, true);
        grid.set(2, 2, true);
        let classified = classify(&grid);
        assert_eq!(classified.region(1, 1), Some(Region::Body));
        assert_eq!(classified.region(2, 2), Some(Region::Body));
        assert_eq!(classified.region(0, 0), None);
    }
}
