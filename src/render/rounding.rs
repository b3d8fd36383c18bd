/// Convexity-aware corner rounding with arc bulges
use crate::models::{CornerPoint, Point, PolygonLoop, Vertex};

// Tolerances: degenerate-area cutoff and coincident-point merge distance
const AREA_EPSILON: f64 = 1e-12;
const POINT_EPSILON: f64 = 1e-9;

/// Bulge magnitude of a quarter-circle arc: tan(pi/8)
pub fn quarter_arc_bulge() -> f64 {
    (std::f64::consts::PI / 8.0).tan()
}

/// Scale a traced corner loop by `module_size` and round its convex
/// corners with the given radius.
///
/// A corner is eligible only when the cross product of its adjacent edge
/// vectors matches the loop's own orientation sign (from the signed
/// area); reflex and straight corners stay sharp. The effective radius is
/// clamped to half of each adjacent edge. Rounded corners become two
/// vertices joined by a single arc of bulge magnitude tan(pi/8), signed
/// by the turn direction. Coincident neighbors merge (the later bulge
/// wins), and a duplicated closing vertex is dropped.
pub fn rounded_loop(contour: &[CornerPoint], module_size: f64, radius: f64) -> PolygonLoop {
    if contour.len() < 2 {
        return PolygonLoop::default();
    }
    let scaled: Vec<Point> = contour
        .iter()
        .map(|c| Point::new(c.x as f64 * module_size, c.y as f64 * module_size))
        .collect();

    let area = polygon_area(&scaled);
    if area.abs() <= AREA_EPSILON {
        return PolygonLoop {
            vertices: scaled.into_iter().map(Vertex::sharp).collect(),
        };
    }
    let orientation_sign = if area > 0.0 { 1.0 } else { -1.0 };

    let n = scaled.len();
    let k = quarter_arc_bulge();
    let mut vertices: Vec<Vertex> = Vec::with_capacity(n);

    for i in 0..n {
        let prev = scaled[(i + n - 1) % n];
        let curr = scaled[i];
        let next = scaled[(i + 1) % n];
        let dx1 = curr.x - prev.x;
        let dy1 = curr.y - prev.y;
        let dx2 = next.x - curr.x;
        let dy2 = next.y - curr.y;
        let len1 = (dx1 * dx1 + dy1 * dy1).sqrt();
        let len2 = (dx2 * dx2 + dy2 * dy2).sqrt();

        let (r, cross) = if len1 <= POINT_EPSILON || len2 <= POINT_EPSILON {
            (0.0, 0.0)
        } else {
            let cross = dx1 * dy2 - dy1 * dx2;
            let is_convex = orientation_sign * cross > POINT_EPSILON;
            if is_convex && radius > POINT_EPSILON {
                (radius.min(len1 / 2.0).min(len2 / 2.0), cross)
            } else {
                (0.0, cross)
            }
        };

        if r <= POINT_EPSILON {
            match vertices.last_mut() {
                Some(last) if last.point.close_to(&curr, POINT_EPSILON) => last.bulge = 0.0,
                _ => vertices.push(Vertex::sharp(curr)),
            }
            continue;
        }

        let (ux1, uy1) = (dx1 / len1, dy1 / len1);
        let (ux2, uy2) = (dx2 / len2, dy2 / len2);
        let arc_start = Point::new(curr.x - ux1 * r, curr.y - uy1 * r);
        let arc_end = Point::new(curr.x + ux2 * r, curr.y + uy2 * r);
        let bulge = k.copysign(cross);

        match vertices.last_mut() {
            Some(last) if last.point.close_to(&arc_start, POINT_EPSILON) => last.bulge = bulge,
            _ => vertices.push(Vertex { point: arc_start, bulge }),
        }
        match vertices.last_mut() {
            Some(last) if last.point.close_to(&arc_end, POINT_EPSILON) => last.bulge = 0.0,
            _ => vertices.push(Vertex::sharp(arc_end)),
        }
    }

    if vertices.len() >= 2 {
        let first = vertices[0].point;
        if vertices.last().unwrap().point.close_to(&first, POINT_EPSILON) {
            vertices.pop();
        }
    }

    PolygonLoop { vertices }
}

fn polygon_area(points: &[Point]) -> f64 {
    let n = points.len();
    let mut area = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        area += a.x * b.y - b.x * a.y;
    }
    area / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<CornerPoint> {
        vec![
            CornerPoint::new(1, 1),
            CornerPoint::new(2, 1),
            CornerPoint::new(2, 2),
            CornerPoint::new(1, 2),
        ]
    }

    #[test]
    fn test_zero_radius_keeps_corners_sharp() {
        let result = rounded_loop(&unit_square(), 1.0, 0.0);
        assert_eq!(result.vertices.len(), 4);
        assert!(result.vertices.iter().all(|v| v.bulge == 0.0));
    }

    #[test]
    fn test_quarter_radius_gives_octagon() {
        let result = rounded_loop(&unit_square(), 1.0, 0.25);
        assert_eq!(result.vertices.len(), 8);
        let bulged = result.vertices.iter().filter(|v| v.bulge != 0.0).count();
        assert_eq!(bulged, 4);
        for v in &result.vertices {
            if v.bulge != 0.0 {
                assert!((v.bulge.abs() - quarter_arc_bulge()).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_half_radius_collapses_to_full_rounded_square() {
        // At r = s/2 each arc ends where the next begins; the coincident
        // vertices merge, leaving four arcs forming a circle
        let result = rounded_loop(&unit_square(), 1.0, 0.5);
        assert_eq!(result.vertices.len(), 4);
        for v in &result.vertices {
            assert!((v.bulge.abs() - quarter_arc_bulge()).abs() < 1e-12);
        }
        // All arcs turn the same way on a convex loop
        let signs: Vec<bool> = result.vertices.iter().map(|v| v.bulge > 0.0).collect();
        assert!(signs.iter().all(|&s| s == signs[0]));
    }

    #[test]
    fn test_radius_clamped_by_edge_length() {
        // Requesting more than half an edge behaves exactly like r = s/2
        let clamped = rounded_loop(&unit_square(), 1.0, 10.0);
        let half = rounded_loop(&unit_square(), 1.0, 0.5);
        assert_eq!(clamped, half);
    }

    #[test]
    fn test_hole_loop_rounds_its_own_convex_corners() {
        // Clockwise (negative-area) unit square: a hole. Its corners are
        // convex with respect to its own orientation, so they round with
        // negative bulges.
        let hole: Vec<CornerPoint> = unit_square().into_iter().rev().collect();
        let result = rounded_loop(&hole, 1.0, 0.25);
        assert_eq!(result.vertices.len(), 8);
        for v in &result.vertices {
            if v.bulge != 0.0 {
                assert!(v.bulge < 0.0);
            }
        }
    }

    #[test]
    fn test_reflex_corner_stays_sharp() {
        // L-shape: five convex corners and one reflex corner at (2,2)
        let contour = vec![
            CornerPoint::new(0, 0),
            CornerPoint::new(4, 0),
            CornerPoint::new(4, 2),
            CornerPoint::new(2, 2),
            CornerPoint::new(2, 4),
            CornerPoint::new(0, 4),
        ];
        let result = rounded_loop(&contour, 1.0, 0.5);
        let reflex = result
            .vertices
            .iter()
            .find(|v| v.point.close_to(&Point::new(2.0, 2.0), 1e-9))
            .expect("reflex corner is kept as-is");
        assert_eq!(reflex.bulge, 0.0);
        // 5 rounded corners -> 10 arc vertices, plus the sharp reflex one
        assert_eq!(result.vertices.len(), 11);
    }

    #[test]
    fn test_scaling_by_module_size() {
        let result = rounded_loop(&unit_square(), 2.5, 0.0);
        assert!(result.vertices[0].point.close_to(&Point::new(2.5, 2.5), 1e-12));
        assert!((result.signed_area() - 6.25).abs() < 1e-9);
    }
}
