/// Boundary contour tracing for module components
use std::collections::{BTreeMap, HashSet};

use crate::models::CornerPoint;

/// Trace the closed boundary loops of a 4-connected component.
///
/// Coordinates are grid-corner coordinates with the y axis flipped so the
/// drawing origin sits at the bottom-left corner (CAD convention); `size`
/// is the grid side length used for the flip. Every module side not
/// shared with the component contributes one directed unit edge, oriented
/// with the filled region on its left; walking the edge map
/// endpoint-to-start yields the loops. Outer loops come out
/// counter-clockwise (positive area), hole loops clockwise (negative).
/// Collinear corners along straight boundary stretches are collapsed, so
/// each emitted vertex is an actual convex or reflex corner.
///
/// The edge map is keyed by integer corner coordinates and consumed
/// destructively; a component with enclosed light modules yields its outer
/// loop plus one loop per hole.
pub fn component_loops(component: &[(usize, usize)], size: usize) -> Vec<Vec<CornerPoint>> {
    let cells: HashSet<(i64, i64)> = component
        .iter()
        .map(|&(x, y)| (x as i64, y as i64))
        .collect();

    // Directed boundary edges: start corner -> end corners
    let mut edges: BTreeMap<(i64, i64), Vec<(i64, i64)>> = BTreeMap::new();
    let mut add_edge = |from: (i64, i64), to: (i64, i64)| {
        edges.entry(from).or_default().push(to);
    };

    // Iterate the component in its (deterministic) discovery order, with
    // the hash set only answering membership queries, so the loop
    // decomposition is reproducible between calls.
    for &(x, y) in component {
        let (x, y) = (x as i64, y as i64);
        let x0 = x;
        let x1 = x + 1;
        let y0 = size as i64 - y - 1;
        let y1 = y0 + 1;
        if !cells.contains(&(x, y + 1)) {
            add_edge((x0, y0), (x1, y0));
        }
        if !cells.contains(&(x, y - 1)) {
            add_edge((x1, y1), (x0, y1));
        }
        if !cells.contains(&(x + 1, y)) {
            add_edge((x1, y0), (x1, y1));
        }
        if !cells.contains(&(x - 1, y)) {
            add_edge((x0, y1), (x0, y0));
        }
    }

    let mut loops = Vec::new();
    loop {
        let start = match edges.keys().next() {
            Some(&corner) => corner,
            None => break,
        };
        let mut contour = Vec::new();
        let mut current = start;
        loop {
            contour.push(CornerPoint::new(current.0, current.1));
            let targets = edges.get_mut(&current).expect("walk stays on recorded edges");
            let next = targets.pop().expect("every corner keeps an outgoing edge");
            if targets.is_empty() {
                edges.remove(&current);
            }
            current = next;
            if current == start {
                break;
            }
        }
        loops.push(collapse_collinear(contour));
    }
    loops
}

// Drop corners whose incoming and outgoing directions are equal, leaving
// only true direction changes (the wrap-around neighbor counts too).
fn collapse_collinear(contour: Vec<CornerPoint>) -> Vec<CornerPoint> {
    let n = contour.len();
    let mut collapsed = Vec::with_capacity(n);
    for i in 0..n {
        let prev = contour[(i + n - 1) % n];
        let curr = contour[i];
        let next = contour[(i + 1) % n];
        let incoming = (curr.x - prev.x, curr.y - prev.y);
        let outgoing = (next.x - curr.x, next.y - curr.y);
        if incoming != outgoing {
            collapsed.push(curr);
        }
    }
    collapsed
}
