/// 2D point in drawing coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// True when both coordinates agree within `tol`
    pub fn close_to(&self, other: &Point, tol: f64) -> bool {
        (self.x - other.x).abs() <= tol && (self.y - other.y).abs() <= tol
    }
}

/// Integer point addressing module-grid corners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CornerPoint {
    /// X coordinate
    pub x: i64,
    /// Y coordinate
    pub y: i64,
}

impl CornerPoint {
    /// Create a new corner point
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}
