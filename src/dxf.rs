//! Minimal DXF text output for rendered QR geometry
//!
//! Serializes the renderer's polygon loops as closed LWPOLYLINE entities,
//! one per loop, wrapped in the fixed HEADER / TABLES / ENTITIES skeleton.
//! Vertices carry their coordinates as group codes 10/20 and, for arc
//! edges, the bulge as group code 42.

use crate::error::Result;
use crate::models::{ModuleGrid, RegionGeometry};
use crate::render::{render, RenderOptions};

const BULGE_EPSILON: f64 = 1e-9;

/// Render a module grid and serialize the geometry as a DXF document
pub fn matrix_to_dxf(matrix: &ModuleGrid, options: &RenderOptions) -> Result<String> {
    let geometry = render(matrix, options)?;
    Ok(document(&geometry, &options.layer))
}

/// Serialize already-rendered geometry as a DXF document
pub fn document(geometry: &[RegionGeometry], layer: &str) -> String {
    let mut values = header(layer);
    for region in geometry {
        for polygon in &region.loops {
            if polygon.vertices.len() < 2 {
                continue;
            }
            lwpolyline(&mut values, polygon, layer);
        }
    }
    values.extend(footer());
    let mut text = values.join("\n");
    text.push('\n');
    text
}

fn lwpolyline(values: &mut Vec<String>, polygon: &crate::models::PolygonLoop, layer: &str) {
    values.extend([
        "0".to_string(),
        "LWPOLYLINE".to_string(),
        "8".to_string(),
        layer.to_string(),
        "90".to_string(),
        polygon.vertices.len().to_string(),
        "70".to_string(),
        "1".to_string(),
    ]);
    for vertex in &polygon.vertices {
        values.push("10".to_string());
        values.push(format!("{:.6}", vertex.point.x));
        values.push("20".to_string());
        values.push(format!("{:.6}", vertex.point.y));
        if vertex.bulge.abs() > BULGE_EPSILON {
            values.push("42".to_string());
            values.push(format!("{:.6}", vertex.bulge));
        }
    }
}

fn header(layer: &str) -> Vec<String> {
    [
        "0", "SECTION", "2", "HEADER", "0", "ENDSEC",
        "0", "SECTION", "2", "TABLES",
        "0", "TABLE", "2", "LAYER", "70", "1",
        "0", "LAYER", "2", layer, "70", "0", "62", "7", "6", "CONTINUOUS",
        "0", "ENDTAB", "0", "ENDSEC",
        "0", "SECTION", "2", "ENTITIES",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn footer() -> Vec<String> {
    ["0", "ENDSEC", "0", "EOF"].iter().map(|s| s.to_string()).collect()
}
