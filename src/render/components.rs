/// Connected component extraction within a classification region
use super::classify::ClassifiedGrid;
use crate::models::Region;

/// Group all modules labeled `region` into 4-connected components.
///
/// Iterative flood fill with an explicit stack; components come out in
/// row-major order of their first-seen module, and each component's cell
/// list is in discovery order.
pub fn find_components(classified: &ClassifiedGrid, region: Region) -> Vec<Vec<(usize, usize)>> {
    let size = classified.size();
    let mut visited = vec![false; size * size];
    let mut components = Vec::new();

    for y in 0..size {
        for x in 0..size {
            if visited[y * size + x] || classified.region(x, y) != Some(region) {
                continue;
            }

            let mut component = Vec::new();
            let mut stack = vec![(x, y)];
            visited[y * size + x] = true;
            while let Some((cx, cy)) = stack.pop() {
                component.push((cx, cy));
                let neighbors = [
                    (cx as i64 + 1, cy as i64),
                    (cx as i64 - 1, cy as i64),
                    (cx as i64, cy as i64 + 1),
                    (cx as i64, cy as i64 - 1),
                ];
                for (nx, ny) in neighbors {
                    if nx < 0 || ny < 0 || nx >= size as i64 || ny >= size as i64 {
                        continue;
                    }
                    let (nx, ny) = (nx as usize, ny as usize);
                    if !visited[ny * size + nx] && classified.region(nx, ny) == Some(region) {
                        visited[ny * size + nx] = true;
                        stack.push((nx, ny));
                    }
                }
            }
            components.push(component);
        }
    }

    components
}
