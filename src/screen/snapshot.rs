// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lineascope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lineascope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::layout::tree::LineageTreeLayout;
use crate::model::graph::{LineageGraph, VertexId};
use crate::model::selection::Selection;
use crate::screen::entities::{ScreenColumn, ScreenEdge, ScreenEntities, ScreenRange, ScreenVertex};
use crate::screen::transform::ScreenTransform;

/// Columns narrower than this many pixels get no header.
const MIN_COLUMN_WIDTH: f64 = 30.0;

/// Crop the current layout to the window of `transform` and scale it into
/// `entities`.
///
/// Rows one timepoint above and below the window still contribute, so edges
/// crossing the window edge keep both endpoints. Within a row, one vertex of
/// margin is kept on each side of the X window for the same reason. Runs of
/// vertices packed tighter than two pixels collapse into [`ScreenRange`]
/// blocks instead of individual vertices.
///
/// Edges are emitted for every added vertex's incoming edges whose source is
/// part of the current layout; a source that was cropped away is appended as
/// an off-window screen vertex so the edge can still be drawn.
pub fn crop_and_scale(
    layout: &LineageTreeLayout,
    graph: &mut LineageGraph,
    selection: &Selection,
    transform: &ScreenTransform,
    entities: &mut ScreenEntities,
) {
    let min_x = transform.min_x();
    let max_x = transform.max_x();
    let min_y = transform.min_y();
    let max_y = transform.max_y();
    let y_scale = transform.scale_y();
    let allowed_min_d = 2.0 / transform.scale_x();
    let timestamp = layout.current_timestamp();

    entities.clear();
    entities.set_transform(transform.clone());

    for (timepoint, row) in layout.rows() {
        if ((timepoint + 1) as f64) < min_y || ((timepoint - 1) as f64) > max_y {
            continue;
        }
        if row.is_empty() {
            continue;
        }

        let row_start = entities.vertices().len();
        let screen_y = transform.layout_to_screen_y(timepoint as f64);
        let prev_screen_y = transform.layout_to_screen_y((timepoint - 1) as f64);
        let (min_index, max_index) = row.x_window(graph, min_x, max_x);
        let dense = row.dense_ranges(graph, min_index, max_index, allowed_min_d);
        let mut dense_iter = dense.iter().peekable();

        let mut min_vertex_screen_dist = y_scale;
        let mut prev_x = f64::NEG_INFINITY;

        let mut i = min_index;
        while i <= max_index {
            if let Some(&&[from, to]) = dense_iter.peek() {
                if from == i {
                    dense_iter.next();
                    let range = ScreenRange {
                        min_x: transform.layout_to_screen_x(graph.vertex(row.get(from)).layout_x()),
                        max_x: transform.layout_to_screen_x(graph.vertex(row.get(to)).layout_x()),
                        min_y: prev_screen_y,
                        max_y: screen_y,
                    };
                    prev_x = range.max_x;
                    entities.ranges_mut().push(range);
                    min_vertex_screen_dist = 0.0;
                    i = to + 1;
                    continue;
                }
            }

            let vertex_id = row.get(i);
            let index = add_screen_vertex(graph, selection, transform, entities, vertex_id, screen_y);
            let x = entities.vertices()[index].x();
            if prev_x > f64::NEG_INFINITY {
                min_vertex_screen_dist = min_vertex_screen_dist.min(x - prev_x);
            }
            prev_x = x;

            for k in 0..graph.vertex(vertex_id).incoming().len() {
                let edge_id = graph.vertex(vertex_id).incoming()[k];
                let source = graph.edge(edge_id).source();
                if graph.vertex(source).layout_timestamp() != timestamp {
                    continue;
                }
                let source_index =
                    screen_vertex_index_of(graph, selection, transform, entities, source);
                let selected = selection.is_edge_selected(edge_id);
                entities
                    .edges_mut()
                    .push(ScreenEdge::new(Some(edge_id), source_index, index, selected));
            }
            i += 1;
        }

        for vertex in &mut entities.vertices_mut()[row_start..] {
            vertex.set_vertex_dist(min_vertex_screen_dist);
        }
    }

    build_screen_columns(layout, transform, entities);
}

/// Append `id` as a screen vertex and remember its index on the vertex, so
/// edges can find it without searching.
fn add_screen_vertex(
    graph: &mut LineageGraph,
    selection: &Selection,
    transform: &ScreenTransform,
    entities: &mut ScreenEntities,
    id: VertexId,
    screen_y: f64,
) -> usize {
    let index = entities.vertices().len();
    let vertex = graph.vertex(id);
    let screen_vertex = ScreenVertex::new(
        Some(id),
        vertex.label().clone(),
        transform.layout_to_screen_x(vertex.layout_x()),
        screen_y,
        selection.is_vertex_selected(id),
        vertex.is_ghost(),
    );
    entities.vertices_mut().push(screen_vertex);
    graph.vertex_mut(id).set_screen_vertex_index(index);
    index
}

/// Screen-vertex index of `id`, appending an off-window vertex if the crop
/// dropped it. The index cached on the vertex is scratch data from an
/// arbitrary earlier pass, so it only counts when the entry it points at is
/// actually `id`.
fn screen_vertex_index_of(
    graph: &mut LineageGraph,
    selection: &Selection,
    transform: &ScreenTransform,
    entities: &mut ScreenEntities,
    id: VertexId,
) -> usize {
    let cached = graph.vertex(id).screen_vertex_index();
    if let Some(vertex) = entities.vertices().get(cached) {
        if vertex.id() == Some(id) {
            return cached;
        }
    }
    let screen_y = transform.layout_to_screen_y(graph.vertex(id).timepoint() as f64);
    add_screen_vertex(graph, selection, transform, entities, id, screen_y)
}

/// Emit a header for every lineage column that is wide enough to label and
/// overlaps the window. Column dividers sit half a layout unit left of the
/// boundary, midway between neighboring trees.
fn build_screen_columns(
    layout: &LineageTreeLayout,
    transform: &ScreenTransform,
    entities: &mut ScreenEntities,
) {
    let min_x = transform.min_x();
    let max_x = transform.max_x();
    let x_scale = transform.scale_x();
    let scaled_min_width = MIN_COLUMN_WIDTH / x_scale;

    let boundaries = layout.column_boundaries();
    for (i, label) in layout.column_labels().iter().enumerate() {
        let left = boundaries[i];
        let right = boundaries[i + 1];
        if right - left < scaled_min_width {
            continue;
        }
        if left > max_x || right < min_x {
            continue;
        }
        let x_left = (left - min_x - 0.5) * x_scale;
        let x_right = (right - min_x - 0.5) * x_scale;
        entities.columns_mut().push(ScreenColumn {
            label: label.clone(),
            x_left,
            width: x_right - x_left,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::crop_and_scale;
    use crate::layout::tree::LineageTreeLayout;
    use crate::model::graph::{LineageGraph, VertexId};
    use crate::model::selection::Selection;
    use crate::screen::entities::ScreenEntities;
    use crate::screen::transform::ScreenTransform;

    fn find(entities: &ScreenEntities, id: VertexId) -> usize {
        entities
            .vertices()
            .iter()
            .position(|v| v.id() == Some(id))
            .expect("vertex present in snapshot (by construction)")
    }

    /// A: single vertex. B: root with children B1, B2.
    fn two_tree_graph(graph: &mut LineageGraph) -> (VertexId, VertexId, VertexId, VertexId) {
        let a = graph.add_vertex("A", 0);
        let b = graph.add_vertex("B", 0);
        let b1 = graph.add_vertex("B1", 1);
        let b2 = graph.add_vertex("B2", 1);
        graph.add_edge(b, b1);
        graph.add_edge(b, b2);
        (a, b, b1, b2)
    }

    #[test]
    fn vertices_and_edges_are_scaled_into_the_window() {
        let mut graph = LineageGraph::new();
        let (a, b, b1, b2) = two_tree_graph(&mut graph);
        let mut layout = LineageTreeLayout::new();
        layout.layout_all(&mut graph);

        let transform = ScreenTransform::new(0.0, 2.0, 0.0, 1.0, 201, 101);
        let mut selection = Selection::new();
        selection.select_vertex(b1);
        let mut entities = ScreenEntities::new();
        crop_and_scale(&layout, &mut graph, &selection, &transform, &mut entities);

        assert_eq!(entities.vertices().len(), 4);
        let sv_a = &entities.vertices()[find(&entities, a)];
        assert_eq!(sv_a.x(), 0.0);
        assert_eq!(sv_a.y(), 0.0);
        // B sits at the midpoint of its children, X = 1.5.
        let sv_b = &entities.vertices()[find(&entities, b)];
        assert_eq!(sv_b.x(), 150.0);
        let sv_b1 = &entities.vertices()[find(&entities, b1)];
        assert!(sv_b1.is_selected());
        assert_eq!(sv_b1.y(), 100.0);

        assert_eq!(entities.edges().len(), 2);
        for edge in entities.edges() {
            assert_eq!(entities.vertices()[edge.source_index()].id(), Some(b));
        }
        let targets: Vec<_> = entities
            .edges()
            .iter()
            .map(|e| entities.vertices()[e.target_index()].id())
            .collect();
        assert!(targets.contains(&Some(b1)));
        assert!(targets.contains(&Some(b2)));
    }

    #[test]
    fn rows_outside_the_time_window_are_dropped() {
        let mut graph = LineageGraph::new();
        let mut prev = graph.add_vertex("c0", 0);
        for t in 1..6 {
            let v = graph.add_vertex(format!("c{t}").as_str(), t);
            graph.add_edge(prev, v);
            prev = v;
        }
        let mut layout = LineageTreeLayout::new();
        layout.layout_all(&mut graph);

        // Window over timepoints [2.5, 3.5]: rows 2, 3 and 4 contribute
        // (one row of margin on each side), 0, 1 and 5 do not.
        let transform = ScreenTransform::new(-1.0, 1.0, 2.5, 3.5, 101, 101);
        let mut entities = ScreenEntities::new();
        crop_and_scale(
            &layout,
            &mut graph,
            &Selection::new(),
            &transform,
            &mut entities,
        );

        // Rows 2, 3 and 4 are cropped in; the edge into row 2 pulls its
        // source at timepoint 1 back in as an off-window vertex.
        let mut timepoints: Vec<i32> = entities
            .vertices()
            .iter()
            .map(|v| {
                let id = v.id().expect("real vertex (no interpolation here)");
                graph.vertex(id).timepoint()
            })
            .collect();
        timepoints.sort_unstable();
        assert_eq!(timepoints, vec![1, 2, 3, 4]);
        assert_eq!(entities.edges().len(), 3);
    }

    #[test]
    fn cropped_edge_sources_are_appended_off_window() {
        let mut graph = LineageGraph::new();
        let parent = graph.add_vertex("p", 0);
        let child = graph.add_vertex("c", 1);
        graph.add_edge(parent, child);
        let mut layout = LineageTreeLayout::new();
        layout.layout_all(&mut graph);

        // Only the child's row is inside the window.
        let transform = ScreenTransform::new(-1.0, 1.0, 2.0, 3.0, 101, 101);
        let mut entities = ScreenEntities::new();
        crop_and_scale(
            &layout,
            &mut graph,
            &Selection::new(),
            &transform,
            &mut entities,
        );

        assert_eq!(entities.vertices().len(), 2);
        assert_eq!(entities.edges().len(), 1);
        let edge = &entities.edges()[0];
        let source = &entities.vertices()[edge.source_index()];
        assert_eq!(source.id(), Some(parent));
        // The synthesized source keeps its real position, above the window.
        assert!(source.y() < 0.0);
    }

    #[test]
    fn dense_rows_collapse_into_ranges() {
        let mut graph = LineageGraph::new();
        let root = graph.add_vertex("r", 0);
        for i in 0..100 {
            let leaf = graph.add_vertex(format!("l{i}").as_str(), 1);
            graph.add_edge(root, leaf);
        }
        let mut layout = LineageTreeLayout::new();
        layout.layout_all(&mut graph);

        // 100 leaves over 50 pixels: far below two pixels per vertex.
        let transform = ScreenTransform::new(0.0, 99.0, 0.0, 1.0, 51, 101);
        let mut entities = ScreenEntities::new();
        crop_and_scale(
            &layout,
            &mut graph,
            &Selection::new(),
            &transform,
            &mut entities,
        );

        // The whole leaf row collapses into a single range; only the root
        // survives as an individual vertex.
        assert_eq!(entities.ranges().len(), 1);
        assert_eq!(entities.vertices().len(), 1);
        assert_eq!(entities.vertices()[0].id(), Some(root));
        let range = &entities.ranges()[0];
        assert!(range.min_x < range.max_x);
    }

    #[test]
    fn wide_columns_get_headers() {
        let mut graph = LineageGraph::new();
        two_tree_graph(&mut graph);
        let mut layout = LineageTreeLayout::new();
        layout.layout_all(&mut graph);

        let transform = ScreenTransform::new(0.0, 3.0, 0.0, 1.0, 1001, 101);
        let mut entities = ScreenEntities::new();
        crop_and_scale(
            &layout,
            &mut graph,
            &Selection::new(),
            &transform,
            &mut entities,
        );

        let labels: Vec<&str> = entities.columns().iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B"]);
        // Column B spans boundaries [1, 3], twice the width of A's [0, 1].
        assert!(entities.columns()[1].width > entities.columns()[0].width);
    }

    #[test]
    fn narrow_columns_are_suppressed() {
        let mut graph = LineageGraph::new();
        two_tree_graph(&mut graph);
        let mut layout = LineageTreeLayout::new();
        layout.layout_all(&mut graph);

        // 10 pixels across three layout units leaves no column wide enough.
        let transform = ScreenTransform::new(0.0, 3.0, 0.0, 1.0, 11, 101);
        let mut entities = ScreenEntities::new();
        crop_and_scale(
            &layout,
            &mut graph,
            &Selection::new(),
            &transform,
            &mut entities,
        );

        assert!(entities.columns().is_empty());
    }
}
