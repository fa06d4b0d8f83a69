use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use labeled_graph::graph::{AdjacencyMapGraph, EditableGraph, LabeledGraph, VertexId};

/// Build a ring where every vertex also links to the next `fanout` vertices
fn build_graph(size: usize, fanout: usize) -> (AdjacencyMapGraph<usize, f64>, Vec<VertexId>) {
    let mut graph = AdjacencyMapGraph::new();
    let ids: Vec<VertexId> = (0..size).map(|i| graph.add_vertex(i)).collect();
    for i in 0..size {
        for k in 1..=fanout {
            let j = (i + k) % size;
            graph.add_edge(ids[i], ids[j], (i * k) as f64).unwrap();
        }
    }
    (graph, ids)
}

/// Benchmark vertex and edge insertion throughput
fn bench_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion");

    for size in [100, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| build_graph(size, 4));
        });
    }
    group.finish();
}

/// Benchmark edge lookup latency
fn bench_edge_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_lookup");

    for size in [100, 1000, 10_000].iter() {
        let (graph, ids) = build_graph(*size, 4);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut hits = 0;
                for i in 0..size {
                    if let Ok(Some(_)) = graph.get_edge(ids[i], ids[(i + 2) % size]) {
                        hits += 1;
                    }
                }
                criterion::black_box(hits);
            });
        });
    }
    group.finish();
}

/// Benchmark vertex removal, which scans every adjacency entry
fn bench_removal(c: &mut Criterion) {
    let mut group = c.benchmark_group("vertex_removal");

    for size in [100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter_batched(
                || build_graph(size, 4),
                |(mut graph, ids)| {
                    for id in ids.iter().step_by(10) {
                        graph.remove_vertex(*id);
                    }
                    criterion::black_box(graph.edge_count());
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insertion, bench_edge_lookup, bench_removal);
criterion_main!(benches);
