//! Connected components by explicit worklist traversal.

/// Split `vertices` into connected components of the undirected graph
/// given by `linked`.
///
/// Only vertices listed in `vertices` are visited, and `linked` is only
/// consulted between them. Traversal starts from the vertices in the order
/// given, so with ascending input the components come out ordered by their
/// smallest vertex. Each component is sorted ascending.
#[must_use]
pub fn connected_components(
    vertices: &[usize],
    mut linked: impl FnMut(usize, usize) -> bool,
) -> Vec<Vec<usize>> {
    let mut visited = vec![false; vertices.len()];
    let mut components = Vec::new();

    for start in 0..vertices.len() {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        let mut component = Vec::new();
        let mut stack = vec![start];

        while let Some(slot) = stack.pop() {
            let v = vertices[slot];
            component.push(v);
            for (next, seen) in visited.iter_mut().enumerate() {
                if !*seen && linked(v, vertices[next]) {
                    *seen = true;
                    stack.push(next);
                }
            }
        }

        component.sort_unstable();
        components.push(component);
    }

    components
}
