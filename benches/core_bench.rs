use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use graph_sketch_editor::{GraphLayout, SelectionState, SketchGraph};
use std::hint::black_box;

fn build_synthetic_graph(node_count: usize) -> SketchGraph {
    let mut graph = SketchGraph::new();
    let mut ids = Vec::with_capacity(node_count);
    for _ in 0..node_count {
        ids.push(graph.add_node());
    }
    // Kette plus Querkanten, damit mehrere Ebenen und breite Ränge entstehen
    for window in ids.windows(2) {
        graph.add_edge(window[0], window[1]);
    }
    for i in (0..node_count).step_by(7) {
        graph.add_edge(ids[i], ids[(i * 3 + 1) % node_count]);
    }
    graph
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");

    for &node_count in &[100usize, 1_000usize] {
        let graph = build_synthetic_graph(node_count);

        group.bench_with_input(
            BenchmarkId::new("layered_build", node_count),
            &graph,
            |b, g| {
                b.iter(|| {
                    let layout = GraphLayout::build(black_box(g));
                    black_box(layout.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_selection_churn(c: &mut Criterion) {
    c.bench_function("selection_toggle_churn", |b| {
        b.iter(|| {
            let mut selection = SelectionState::new();
            for id in 1..=1_000u64 {
                selection.toggle(black_box(id));
                if selection.is_complete() {
                    black_box(selection.take_pair());
                }
            }
            black_box(selection.start)
        })
    });
}

criterion_group!(benches, bench_layout, bench_selection_churn);
criterion_main!(benches);
