//! Synthetic graph builders for tests and benchmarks

use rand::Rng;

use crate::graph::Graph;
use crate::Result;

/// Generates a random directed graph with `node_count` nodes labeled `v0..vN`
/// and up to `edge_count` edges.
///
/// Weights are whole numbers drawn from `0..=max_weight`, so path sums stay
/// exact. Self-loops are skipped; a repeated pair keeps the last weight drawn.
pub fn generate_random<R>(
    node_count: usize,
    edge_count: usize,
    max_weight: u32,
    rng: &mut R,
) -> Result<Graph>
where
    R: Rng,
{
    let mut graph = Graph::new();
    let ids: Vec<_> = (0..node_count)
        .map(|i| graph.get_node(&format!("v{}", i)))
        .collect();

    if node_count < 2 {
        return Ok(graph);
    }

    for _ in 0..edge_count {
        let u = rng.gen_range(0..node_count);
        let v = rng.gen_range(0..node_count);
        if u != v {
            let weight = f64::from(rng.gen_range(0..=max_weight));
            graph.add_edge(ids[u], ids[v], weight)?;
        }
    }

    Ok(graph)
}

/// Generates a `width` x `height` grid with 8-way movement.
///
/// Cardinal steps cost 1.0 and diagonal steps 1.4. Nodes are labeled `x,y`.
pub fn generate_grid(width: usize, height: usize) -> Result<Graph> {
    let mut graph = Graph::new();
    let mut ids = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            ids.push(graph.get_node(&format!("{},{}", x, y)));
        }
    }

    let directions = [
        // Cardinal directions (N, E, S, W)
        (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
        // Diagonal directions (NE, SE, SW, NW)
        (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            let current = ids[y * width + x];
            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = ids[ny as usize * width + nx as usize];
                    graph.add_edge(current, neighbor, cost)?;
                }
            }
        }
    }

    Ok(graph)
}

/// Generates a random geometric graph in the unit square.
///
/// Points closer than `radius` are joined in both directions with their
/// Euclidean distance as weight.
pub fn generate_geometric<R>(node_count: usize, radius: f64, rng: &mut R) -> Result<Graph>
where
    R: Rng,
{
    let mut graph = Graph::new();
    let mut points = Vec::with_capacity(node_count);
    for i in 0..node_count {
        let id = graph.get_node(&format!("p{}", i));
        points.push((id, rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)));
    }

    for (i, &(a, x1, y1)) in points.iter().enumerate() {
        for &(b, x2, y2) in &points[i + 1..] {
            let dist = f64::hypot(x1 - x2, y1 - y2);
            if dist <= radius {
                graph.add_edge(a, b, dist)?;
                graph.add_edge(b, a, dist)?;
            }
        }
    }

    Ok(graph)
}
