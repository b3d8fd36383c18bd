//! Module-grid to vector geometry pipeline
//!
//! Turns a boolean module grid into closed polygon loops suitable for CAD
//! output:
//! - Classification of dark modules into eye / frame / body regions
//! - 4-connected component extraction per region
//! - Boundary contour tracing (outer loops and holes)
//! - Convexity-aware corner rounding with arc bulges

/// Module classification (quiet zone, finder eyes and frames)
pub mod classify;
/// Connected component extraction
pub mod components;
/// Boundary contour tracing
pub mod contour;
/// Corner rounding and bulge assignment
pub mod rounding;

use crate::error::{Error, Result};
use crate::models::{ModuleGrid, PolygonLoop, Region, RegionGeometry};

/// Geometry rendering parameters
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Side length of one module in drawing units (must be positive)
    pub module_size: f64,
    /// Corner radius for the finder eyes; clamped per component to half
    /// the shorter side of the component's bounding box
    pub eye_radius: f64,
    /// Corner radius for the finder frames; clamped to half a module
    pub frame_radius: f64,
    /// Corner radius for body modules; clamped to half a module
    pub body_radius: f64,
    /// Layer name passed through to the output serializer
    pub layer: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            module_size: 1.0,
            eye_radius: 0.0,
            frame_radius: 0.0,
            body_radius: 0.0,
            layer: "QR".to_string(),
        }
    }
}

impl RenderOptions {
    /// Options with the given module size and no rounding
    pub fn with_module_size(module_size: f64) -> Self {
        Self {
            module_size,
            ..Self::default()
        }
    }
}

/// Render a module grid into polygon loops grouped by region.
///
/// Regions are processed eye, frame, body, so finder geometry never leaks
/// into the body output; regions without any modules are omitted.
pub fn render(matrix: &ModuleGrid, options: &RenderOptions) -> Result<Vec<RegionGeometry>> {
    if options.module_size <= 0.0 {
        return Err(Error::InvalidConfiguration("module size must be positive"));
    }
    if matrix.size() == 0 {
        return Err(Error::EmptyInput);
    }

    let classified = classify::classify(matrix);
    let module_size = options.module_size;
    let mut output = Vec::new();

    for (region, requested) in [
        (Region::Eye, options.eye_radius),
        (Region::Frame, options.frame_radius),
        (Region::Body, options.body_radius),
    ] {
        let mut loops: Vec<PolygonLoop> = Vec::new();
        for component in components::find_components(&classified, region) {
            let radius = match region {
                // An eye may round up to half its own bounding box, which
                // allows fully circular eyes; everything else stops at
                // half a module
                Region::Eye => clamp_radius(requested, component_box_limit(&component, module_size)),
                _ => clamp_radius(requested, module_size / 2.0),
            };
            for traced in contour::component_loops(&component, matrix.size()) {
                let rounded = rounding::rounded_loop(&traced, module_size, radius);
                if rounded.vertices.len() >= 2 {
                    loops.push(rounded);
                }
            }
        }
        if !loops.is_empty() {
            output.push(RegionGeometry { region, loops });
        }
    }

    Ok(output)
}

fn clamp_radius(radius: f64, limit: f64) -> f64 {
    radius.clamp(0.0, limit)
}

// Half the shorter bounding-box side of a component, in drawing units
fn component_box_limit(component: &[(usize, usize)], module_size: f64) -> f64 {
    let min_x = component.iter().map(|&(x, _)| x).min().unwrap_or(0);
    let max_x = component.iter().map(|&(x, _)| x).max().unwrap_or(0);
    let min_y = component.iter().map(|&(_, y)| y).min().unwrap_or(0);
    let max_y = component.iter().map(|&(_, y)| y).max().unwrap_or(0);
    let short_side = (max_x - min_x + 1).min(max_y - min_y + 1);
    short_side as f64 * module_size / 2.0
}
