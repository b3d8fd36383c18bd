/// Vector geometry produced by the renderer
use super::Point;

/// Module classification within the symbol.
///
/// The three finder patterns are split into their inner 3x3 `Eye` and the
/// surrounding dark `Frame` ring; every other dark module is `Body`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Inner 3x3 of a finder pattern
    Eye,
    /// Remaining dark ring of a finder pattern
    Frame,
    /// Any other dark module
    Body,
}

/// A polyline vertex with an optional arc to the next vertex.
///
/// `bulge` is the signed tangent of a quarter of the arc's included angle
/// (the LWPOLYLINE convention); 0 means a straight edge. The sign follows
/// the arc's turn direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in drawing coordinates
    pub point: Point,
    /// Arc bulge toward the next vertex (0 = straight)
    pub bulge: f64,
}

impl Vertex {
    /// Create a vertex with a straight outgoing edge
    pub fn sharp(point: Point) -> Self {
        Self { point, bulge: 0.0 }
    }
}

/// A closed polygon loop; the edge from the last vertex back to the first
/// is implicit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolygonLoop {
    /// Loop vertices in boundary order
    pub vertices: Vec<Vertex>,
}

impl PolygonLoop {
    /// Signed area by the shoelace formula over the straight vertex
    /// polygon (arc bulges are not included). Outer loops are positive,
    /// hole loops negative.
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        let mut area = 0.0;
        for i in 0..n {
            let a = self.vertices[i].point;
            let b = self.vertices[(i + 1) % n].point;
            area += a.x * b.y - b.x * a.y;
        }
        area / 2.0
    }
}

/// All polygon loops extracted for one module classification
#[derive(Debug, Clone)]
pub struct RegionGeometry {
    /// Which classification the loops belong to
    pub region: Region,
    /// One or more closed loops per connected component (holes included)
    pub loops: Vec<PolygonLoop>,
}
