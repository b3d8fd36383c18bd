//! qr_dxf - QR codes as vector CAD geometry
//!
//! A pure Rust QR code generator (ISO/IEC 18004 byte-mode subset, versions
//! 1-40) paired with a geometry renderer that turns the module grid into
//! closed polygon loops with arc bulges, ready for DXF output.
//!
//! # Example
//! ```
//! use qr_dxf::{encode_text, EcLevel, RenderOptions};
//!
//! let qr = encode_text("https://example.com", EcLevel::Medium).unwrap();
//! let matrix = qr.to_matrix(4).unwrap();
//! let dxf = qr_dxf::matrix_to_dxf(&matrix, &RenderOptions::default()).unwrap();
//! assert!(dxf.contains("LWPOLYLINE"));
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// DXF serialization of rendered geometry
pub mod dxf;
/// QR encoding pipeline (bitstream, ECC, masking)
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (ModuleGrid, QrCode, polygon loops)
pub mod models;
/// Payload builders (Wi-Fi)
pub mod payload;
/// Geometry rendering pipeline (classification, contours, rounding)
pub mod render;

pub use dxf::matrix_to_dxf;
pub use error::{Error, Result};
pub use models::{
    EcLevel, MaskPattern, ModuleGrid, Point, PolygonLoop, QrCode, Region, RegionGeometry, Vertex,
};
pub use payload::{wifi_payload, WifiAuth};
pub use render::{render, RenderOptions};

/// Encode UTF-8 text into a QR symbol
pub fn encode_text(text: &str, ec_level: EcLevel) -> Result<QrCode> {
    encoder::encode(text.as_bytes(), ec_level)
}

/// Encode raw bytes into a QR symbol
pub fn encode_bytes(data: &[u8], ec_level: EcLevel) -> Result<QrCode> {
    encoder::encode(data, ec_level)
}

/// Encode text and return the module grid with a quiet-zone border
pub fn matrix_from_text(text: &str, ec_level: EcLevel, border: i32) -> Result<ModuleGrid> {
    encode_text(text, ec_level)?.to_matrix(border)
}

/// Encode bytes and return the module grid with a quiet-zone border
pub fn matrix_from_bytes(data: &[u8], ec_level: EcLevel, border: i32) -> Result<ModuleGrid> {
    encode_bytes(data, ec_level)?.to_matrix(border)
}
