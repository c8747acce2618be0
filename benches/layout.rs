// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lineascope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lineascope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use lineascope::layout::{ContextWindow, LineageTreeLayout};
use lineascope::model::{LineageGraph, Selection, TimepointSpatialIndex};
use lineascope::screen::snapshot::crop_and_scale;
use lineascope::screen::{ScreenEntities, ScreenTransform};

// Benchmark identity (keep stable):
// - Group names in this file: `layout.pass`, `layout.context`, `screen.crop`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time (e.g. `sparse`, `dividing`).
// - If implementations move/deduplicate, update the wiring but do not rename
//   group or case IDs.

/// A forest of lineages dividing every `division_period` timepoints, capped
/// so the frontier stays tractable.
fn forest(trees: usize, timepoints: i32, division_period: i32) -> LineageGraph {
    let mut graph = LineageGraph::new();
    for t in 0..trees {
        let root = graph.add_vertex(format!("track{t}").as_str(), 0);
        let mut frontier = vec![root];
        for tp in 1..timepoints {
            let divide = tp % division_period == 0 && frontier.len() < 128;
            let mut next = Vec::with_capacity(frontier.len() * 2);
            for (i, &parent) in frontier.iter().enumerate() {
                let child = graph.add_vertex(format!("track{t}.{tp}.{i}").as_str(), tp);
                graph.add_edge(parent, child);
                next.push(child);
                if divide {
                    let sibling =
                        graph.add_vertex(format!("track{t}.{tp}.{i}b").as_str(), tp);
                    graph.add_edge(parent, sibling);
                    next.push(sibling);
                }
            }
            frontier = next;
        }
    }
    graph
}

fn benches_layout(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("layout.pass");

        for (case_id, mut graph) in [
            ("sparse", forest(20, 50, 1000)),
            ("dividing", forest(5, 60, 8)),
        ] {
            group.throughput(Throughput::Elements(graph.vertex_count() as u64));
            let mut layout = LineageTreeLayout::new();
            group.bench_function(case_id, move |b| {
                b.iter(|| {
                    layout.layout_all(black_box(&mut graph));
                    black_box(layout.current_max_x())
                })
            });
        }

        group.finish();
    }

    {
        let mut group = c.benchmark_group("layout.context");

        for (case_id, mut graph) in [
            ("sparse", forest(20, 50, 1000)),
            ("dividing", forest(5, 60, 8)),
        ] {
            group.throughput(Throughput::Elements(graph.vertex_count() as u64));
            let index = TimepointSpatialIndex::from_graph(&graph);
            let mut layout = LineageTreeLayout::new();
            let mut context = ContextWindow::new();
            let viewport = ScreenTransform::new(0.0, 40.0, 10.0, 40.0, 1280, 720);
            group.bench_function(case_id, move |b| {
                b.iter(|| {
                    black_box(context.build_context(
                        black_box(&mut graph),
                        &mut layout,
                        &index,
                        &viewport,
                        true,
                    ))
                })
            });
        }

        group.finish();
    }

    {
        let mut group = c.benchmark_group("screen.crop");

        for (case_id, mut graph) in [
            ("sparse", forest(20, 50, 1000)),
            ("dividing", forest(5, 60, 8)),
        ] {
            group.throughput(Throughput::Elements(graph.vertex_count() as u64));
            let mut layout = LineageTreeLayout::new();
            layout.layout_all(&mut graph);
            let transform = ScreenTransform::new(
                0.0,
                layout.current_max_x().max(1.0),
                0.0,
                50.0,
                1280,
                720,
            );
            let selection = Selection::new();
            let mut entities = ScreenEntities::new();
            group.bench_function(case_id, move |b| {
                b.iter(|| {
                    crop_and_scale(
                        &layout,
                        black_box(&mut graph),
                        &selection,
                        &transform,
                        &mut entities,
                    );
                    black_box(entities.vertices().len())
                })
            });
        }

        group.finish();
    }
}

criterion_group!(benches, benches_layout);
criterion_main!(benches);
