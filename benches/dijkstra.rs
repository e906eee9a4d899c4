use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dijkstra_paths::graph::generators::{generate_grid, generate_random};
use dijkstra_paths::{Dijkstra, NodeId};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_random");
    let mut rng = StdRng::seed_from_u64(7);
    let dijkstra = Dijkstra::new();

    // Edge factor: average number of edges per node
    let edge_factor = 4;

    for &size in &[1_000usize, 10_000, 50_000] {
        let graph = generate_random(size, size * edge_factor, 100, &mut rng)
            .expect("generated weights are valid");
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| dijkstra.compute(graph, black_box(NodeId::from(0))))
        });
    }

    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_grid");
    let dijkstra = Dijkstra::new();

    for &side in &[32usize, 128, 256] {
        let graph = generate_grid(side, side).expect("grid weights are valid");
        group.bench_with_input(BenchmarkId::from_parameter(side), &graph, |b, graph| {
            b.iter(|| dijkstra.compute(graph, black_box(NodeId::from(0))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_random, bench_grid);
criterion_main!(benches);
