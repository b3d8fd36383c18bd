pub mod geometry;
pub mod matrix;
pub mod point;
pub mod qr;

pub use geometry::{PolygonLoop, Region, RegionGeometry, Vertex};
pub use matrix::ModuleGrid;
pub use point::{CornerPoint, Point};
pub use qr::{EcLevel, MaskPattern, QrCode};
