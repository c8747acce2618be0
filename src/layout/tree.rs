// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lineascope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lineascope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use smol_str::SmolStr;

use crate::layout::clock::LayoutClock;
use crate::layout::order;
use crate::model::graph::{LineageGraph, VertexId};

/// Minimum number of vertices a dense-range subdivision will still split.
const MIN_SUBDIV_SIZE: usize = 3;

/// All vertices of one timepoint laid out in the current pass, ordered by
/// ascending layout X.
///
/// The order is a by-product of the layout DFS: within a timepoint, vertices
/// finish left to right, so plain appends keep the list sorted.
#[derive(Debug)]
pub struct TimepointRow {
    ids: Vec<VertexId>,
    min_x_distance: f64,
}

impl Default for TimepointRow {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            min_x_distance: f64::INFINITY,
        }
    }
}

impl TimepointRow {
    pub fn ids(&self) -> &[VertexId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn get(&self, index: usize) -> VertexId {
        self.ids[index]
    }

    /// Smallest layout-X gap between neighbors in this row, infinite for
    /// rows of fewer than two vertices.
    pub fn min_x_distance(&self) -> f64 {
        self.min_x_distance
    }

    /// Index of the last vertex with layout X <= `value` within
    /// `[from, len)`, or `from - 1` if there is none.
    fn last_at_or_before(&self, graph: &LineageGraph, value: f64, from: usize) -> isize {
        let count = self.ids[from..]
            .partition_point(|&v| graph.vertex(v).layout_x() <= value);
        from as isize + count as isize - 1
    }

    /// Inclusive index range of the vertices intersecting `[min_x, max_x]`,
    /// widened by one vertex on each side: a vertex just outside may appear
    /// partially on screen or anchor an edge into the window.
    pub fn x_window(&self, graph: &LineageGraph, min_x: f64, max_x: f64) -> (usize, usize) {
        debug_assert!(!self.ids.is_empty());
        let mut min_index = self.last_at_or_before(graph, min_x, 0) - 1;
        if min_index < 0 {
            min_index = 0;
        }
        let min_index = min_index as usize;
        let mut max_index = self.last_at_or_before(graph, max_x, min_index);
        if max_index < self.ids.len() as isize - 1 {
            max_index += 1;
        }
        (min_index, max_index.max(min_index as isize) as usize)
    }

    /// Find runs within the inclusive index range `[from, to]` whose average
    /// X spacing falls below `allowed_min_d`, by recursive subdivision
    /// against this row's minimum spacing. Returned pairs are inclusive
    /// index ranges, merged where subdivisions touch.
    pub fn dense_ranges(
        &self,
        graph: &LineageGraph,
        from: usize,
        to: usize,
        allowed_min_d: f64,
    ) -> Vec<[usize; 2]> {
        self.dense_ranges_in(graph, from, to, allowed_min_d)
            .unwrap_or_default()
    }

    fn dense_ranges_in(
        &self,
        graph: &LineageGraph,
        i: usize,
        j: usize,
        allowed_min_d: f64,
    ) -> Option<Vec<[usize; 2]>> {
        let xi = graph.vertex(self.ids[i]).layout_x();
        let xj = graph.vertex(self.ids[j]).layout_x();

        if (xj - xi) - self.min_x_distance * (j as f64 - i as f64 - 1.0) < allowed_min_d {
            return Some(vec![[i, j]]);
        }
        if j + 1 - i < MIN_SUBDIV_SIZE {
            return None;
        }
        let k = (i + j) / 2;
        let left = self.dense_ranges_in(graph, i, k, allowed_min_d);
        let right = self.dense_ranges_in(graph, k, j, allowed_min_d);
        match (left, right) {
            (None, right) => right,
            (left, None) => left,
            (Some(mut left), Some(right)) => {
                let mut rest = right.as_slice();
                if let (Some(last), Some(first)) = (left.last_mut(), right.first()) {
                    if last[1] == first[0] {
                        last[1] = first[1];
                        rest = &right[1..];
                    }
                }
                left.extend_from_slice(rest);
                Some(left)
            }
        }
    }

    fn push(&mut self, id: VertexId) {
        self.ids.push(id);
    }

    fn finalize(&mut self, graph: &LineageGraph) {
        let mut min = f64::INFINITY;
        for pair in self.ids.windows(2) {
            let d = graph.vertex(pair[1]).layout_x() - graph.vertex(pair[0]).layout_x();
            min = min.min(d);
        }
        self.min_x_distance = min;
    }
}

#[derive(Debug)]
struct LayoutFrame {
    vertex: VertexId,
    edge_cursor: usize,
    num_laid_out_children: u32,
    first_child_x: f64,
    last_child_x: f64,
    visited: bool,
    descend: bool,
}

impl LayoutFrame {
    fn new(vertex: VertexId) -> Self {
        Self {
            vertex,
            edge_cursor: 0,
            num_laid_out_children: 0,
            first_child_x: 0.0,
            last_child_x: 0.0,
            visited: false,
            descend: false,
        }
    }
}

/// The tree layout engine.
///
/// Starting from a list of roots, descend to leaf nodes along outgoing edges
/// and assign X coordinates such that
///
/// - leaves get layout X = 0, 1, 2, … in discovery order,
/// - non-leaves are centered between their first and last laid-out child,
/// - for vertices with more than one parent only the first visiting edge
///   counts as the layout parent,
/// - vertices whose timestamp is below the current mark become ghosts and
///   are laid out as leaves.
///
/// We call vertices contained in the current layout *active*. The descent
/// runs on an explicit work-stack, so arbitrarily deep lineages cannot
/// overflow the call stack.
///
/// Precondition (unenforced): the first-incoming-edge spanning structure
/// must be acyclic.
#[derive(Debug, Default)]
pub struct LineageTreeLayout {
    clock: LayoutClock,
    mark: i64,
    rightmost: f64,
    current_min_x: f64,
    current_max_x: f64,
    rows: BTreeMap<i32, TimepointRow>,
    column_boundaries: Vec<f64>,
    column_labels: Vec<SmolStr>,
    stack: Vec<LayoutFrame>,
}

impl LineageTreeLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay out the whole graph from its true roots in lexicographic order,
    /// with ghosting disabled.
    pub fn layout_all(&mut self, graph: &mut LineageGraph) {
        let roots = order::sort_roots(graph, &graph.roots());
        self.layout(graph, &roots, -1);
    }

    /// Lay out the subtrees reachable from `roots`.
    ///
    /// `mark` is the timestamp value the context window stamped onto the
    /// vertices that should be laid out as live; vertices below it become
    /// ghosts. `mark = -1` disables ghosting entirely.
    pub fn layout(&mut self, graph: &mut LineageGraph, roots: &[VertexId], mark: i64) {
        let timestamp = self.clock.begin_layout();
        self.mark = mark;
        self.rightmost = 0.0;
        self.rows.clear();
        self.column_boundaries.clear();
        self.column_labels.clear();
        self.column_boundaries.push(self.rightmost);

        let mut previous_graph_root = None;
        for &root in roots {
            self.layout_subtree(graph, root, timestamp);
            let graph_root = graph.graph_root(root);
            if previous_graph_root != Some(graph_root) {
                self.column_labels.push(graph.vertex(graph_root).label().clone());
                self.column_boundaries.push(self.rightmost);
                previous_graph_root = Some(graph_root);
            }
        }

        self.current_min_x = 0.0;
        self.current_max_x = self.rightmost - 1.0;
        for row in self.rows.values_mut() {
            row.finalize(graph);
        }
    }

    /// Reserve a timestamp for external use as a mark value; the next layout
    /// pass will use the timestamp after that.
    pub fn reserve_timestamp(&mut self) -> i64 {
        self.clock.reserve()
    }

    /// The generation timestamp stamped onto every vertex of the last pass.
    pub fn current_timestamp(&self) -> i64 {
        self.clock.current()
    }

    /// Minimum layout X assigned in the current layout.
    pub fn current_min_x(&self) -> f64 {
        self.current_min_x
    }

    /// Maximum layout X assigned in the current layout.
    pub fn current_max_x(&self) -> f64 {
        self.current_max_x
    }

    /// Timepoints that received at least one vertex, ascending.
    pub fn timepoints(&self) -> impl Iterator<Item = i32> + '_ {
        self.rows.keys().copied()
    }

    pub fn row(&self, timepoint: i32) -> Option<&TimepointRow> {
        self.rows.get(&timepoint)
    }

    pub fn rows(&self) -> impl Iterator<Item = (i32, &TimepointRow)> {
        self.rows.iter().map(|(&t, row)| (t, row))
    }

    /// Layout-X boundaries between lineage columns; `column_labels()[i]`
    /// names the column spanning `column_boundaries()[i..=i+1]`.
    pub fn column_boundaries(&self) -> &[f64] {
        &self.column_boundaries
    }

    pub fn column_labels(&self) -> &[SmolStr] {
        &self.column_labels
    }

    /// The active vertex closest to layout coordinates `(x, y)`, with the
    /// Euclidean distance distorted by `aspect_ratio_x_to_y` (the X/Y ratio
    /// of a unit screen vector mapped into layout space).
    pub fn closest_active_vertex(
        &self,
        graph: &LineageGraph,
        x: f64,
        y: f64,
        aspect_ratio_x_to_y: f64,
    ) -> Option<VertexId> {
        let mut best = None;
        let mut best_square_dist = f64::INFINITY;
        for (&timepoint, row) in &self.rows {
            let diff_y = (y - timepoint as f64) * aspect_ratio_x_to_y;
            if row.is_empty() || diff_y * diff_y >= best_square_dist {
                continue;
            }
            let left = row.last_at_or_before(graph, x, 0);
            let begin = left.max(0) as usize;
            let end = (begin + 2).min(row.len());
            for &candidate in &row.ids()[begin..end] {
                let diff_x = x - graph.vertex(candidate).layout_x();
                let d2 = diff_x * diff_x + diff_y * diff_y;
                if d2 < best_square_dist {
                    best_square_dist = d2;
                    best = Some(candidate);
                }
            }
        }
        best
    }

    /// The active vertex laid out immediately left of `vertex` in its row.
    pub fn left_sibling(&self, graph: &LineageGraph, vertex: VertexId) -> Option<VertexId> {
        let row = self.rows.get(&graph.vertex(vertex).timepoint())?;
        let index = row.last_at_or_before(graph, graph.vertex(vertex).layout_x(), 0);
        (index > 0).then(|| row.get(index as usize - 1))
    }

    /// The active vertex laid out immediately right of `vertex` in its row.
    pub fn right_sibling(&self, graph: &LineageGraph, vertex: VertexId) -> Option<VertexId> {
        let row = self.rows.get(&graph.vertex(vertex).timepoint())?;
        let index = row.last_at_or_before(graph, graph.vertex(vertex).layout_x(), 0);
        (index >= 0 && (index as usize) < row.len() - 1).then(|| row.get(index as usize + 1))
    }

    /// The first child of `vertex` contained in the current layout.
    pub fn first_active_child(&self, graph: &LineageGraph, vertex: VertexId) -> Option<VertexId> {
        let timestamp = self.clock.current();
        graph
            .vertex(vertex)
            .outgoing()
            .iter()
            .map(|&e| graph.edge(e).target())
            .find(|&child| graph.vertex(child).layout_timestamp() == timestamp)
    }

    /// The first parent of `vertex` contained in the current layout.
    pub fn first_active_parent(&self, graph: &LineageGraph, vertex: VertexId) -> Option<VertexId> {
        let timestamp = self.clock.current();
        graph
            .vertex(vertex)
            .incoming()
            .iter()
            .map(|&e| graph.edge(e).source())
            .find(|&parent| graph.vertex(parent).layout_timestamp() == timestamp)
    }

    /// Work-stack rendition of the recursive descent. Each frame tracks how
    /// far the vertex's outgoing-edge iteration has advanced and the first
    /// and last child X seen so far; completing a frame assigns the X and
    /// reports it to the parent frame.
    fn layout_subtree(&mut self, graph: &mut LineageGraph, root: VertexId, timestamp: i64) {
        let mut stack = std::mem::take(&mut self.stack);
        stack.clear();
        stack.push(LayoutFrame::new(root));

        while let Some(frame) = stack.last_mut() {
            if !frame.visited {
                frame.visited = true;
                let vertex = graph.vertex_mut(frame.vertex);
                let ghost = vertex.layout_timestamp() < self.mark;
                vertex.set_ghost(ghost);
                vertex.set_layout_timestamp(timestamp);
                // Ghosts are placeholders for ancestors above the window;
                // their subtrees stay out of the layout.
                frame.descend = !ghost;
            }

            if frame.descend {
                let mut descended = false;
                while let Some(&edge) = graph.vertex(frame.vertex).outgoing().get(frame.edge_cursor)
                {
                    frame.edge_cursor += 1;
                    let child = graph.edge(edge).target();
                    if graph.vertex(child).layout_timestamp() < timestamp {
                        graph.vertex_mut(child).set_layout_parent_edge(Some(edge));
                        stack.push(LayoutFrame::new(child));
                        descended = true;
                        break;
                    }
                }
                if descended {
                    continue;
                }
            }

            let frame = stack.pop().expect("frame currently being finalized");
            let x = match frame.num_laid_out_children {
                0 => {
                    let x = self.rightmost;
                    self.rightmost += 1.0;
                    x
                }
                1 => frame.first_child_x,
                _ => (frame.first_child_x + frame.last_child_x) / 2.0,
            };
            graph.vertex_mut(frame.vertex).set_layout_x(x);
            self.rows
                .entry(graph.vertex(frame.vertex).timepoint())
                .or_default()
                .push(frame.vertex);

            if let Some(parent) = stack.last_mut() {
                parent.num_laid_out_children += 1;
                if parent.num_laid_out_children == 1 {
                    parent.first_child_x = x;
                } else {
                    parent.last_child_x = x;
                }
            }
        }

        self.stack = stack;
    }
}
