// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lineascope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lineascope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use smol_str::SmolStr;

/// Index of a vertex in the graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(u32);

impl VertexId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Index of an edge in the graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(u32);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A vertex of the temporal lineage graph.
///
/// Structure (label, timepoint, edge lists) belongs to the owning
/// application. The layout fields (`layout_x`, `ghost`, `layout_timestamp`,
/// `layout_parent_edge`) are undefined before the first layout pass and are
/// written only by the layout engine; `screen_vertex_index` is scratch used
/// by the snapshot pass and validated against the produced entities before
/// every read, so it never needs clearing between frames.
#[derive(Debug, Clone)]
pub struct LineageVertex {
    label: SmolStr,
    timepoint: i32,
    incoming: SmallVec<[EdgeId; 2]>,
    outgoing: SmallVec<[EdgeId; 2]>,
    layout_x: f64,
    ghost: bool,
    layout_timestamp: i64,
    layout_parent_edge: Option<EdgeId>,
    screen_vertex_index: usize,
}

impl LineageVertex {
    fn new(label: SmolStr, timepoint: i32) -> Self {
        Self {
            label,
            timepoint,
            incoming: SmallVec::new(),
            outgoing: SmallVec::new(),
            layout_x: 0.0,
            ghost: false,
            layout_timestamp: 0,
            layout_parent_edge: None,
            screen_vertex_index: usize::MAX,
        }
    }

    pub fn label(&self) -> &SmolStr {
        &self.label
    }

    pub fn timepoint(&self) -> i32 {
        self.timepoint
    }

    pub fn incoming(&self) -> &[EdgeId] {
        &self.incoming
    }

    pub fn outgoing(&self) -> &[EdgeId] {
        &self.outgoing
    }

    pub fn layout_x(&self) -> f64 {
        self.layout_x
    }

    pub fn is_ghost(&self) -> bool {
        self.ghost
    }

    pub fn layout_timestamp(&self) -> i64 {
        self.layout_timestamp
    }

    /// The first-incoming edge that claimed this vertex during the last
    /// layout descent. Alternate parents never contribute to placement.
    pub fn layout_parent_edge(&self) -> Option<EdgeId> {
        self.layout_parent_edge
    }

    pub(crate) fn set_layout_x(&mut self, x: f64) {
        self.layout_x = x;
    }

    pub(crate) fn set_ghost(&mut self, ghost: bool) {
        self.ghost = ghost;
    }

    pub(crate) fn set_layout_timestamp(&mut self, timestamp: i64) {
        self.layout_timestamp = timestamp;
    }

    pub(crate) fn set_layout_parent_edge(&mut self, edge: Option<EdgeId>) {
        self.layout_parent_edge = edge;
    }

    pub(crate) fn screen_vertex_index(&self) -> usize {
        self.screen_vertex_index
    }

    pub(crate) fn set_screen_vertex_index(&mut self, index: usize) {
        self.screen_vertex_index = index;
    }
}

/// A directed edge from a vertex to one of its children in time.
#[derive(Debug, Clone, Copy)]
pub struct LineageEdge {
    source: VertexId,
    target: VertexId,
}

impl LineageEdge {
    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn target(&self) -> VertexId {
        self.target
    }
}

/// Arena-backed temporal lineage graph.
///
/// Vertices and edges are value structs addressed by [`VertexId`] /
/// [`EdgeId`]; handles are plain copyable indices, so traversals allocate
/// nothing per step.
#[derive(Debug, Default)]
pub struct LineageGraph {
    vertices: Vec<LineageVertex>,
    edges: Vec<LineageEdge>,
}

impl LineageGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, label: impl Into<SmolStr>, timepoint: i32) -> VertexId {
        let id = VertexId(self.vertices.len() as u32);
        self.vertices.push(LineageVertex::new(label.into(), timepoint));
        id
    }

    pub fn add_edge(&mut self, source: VertexId, target: VertexId) -> EdgeId {
        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(LineageEdge { source, target });
        self.vertices[source.index()].outgoing.push(id);
        self.vertices[target.index()].incoming.push(id);
        id
    }

    pub fn vertex(&self, id: VertexId) -> &LineageVertex {
        &self.vertices[id.index()]
    }

    pub(crate) fn vertex_mut(&mut self, id: VertexId) -> &mut LineageVertex {
        &mut self.vertices[id.index()]
    }

    pub fn edge(&self, id: EdgeId) -> &LineageEdge {
        &self.edges[id.index()]
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len() as u32).map(VertexId)
    }

    /// All true graph roots, i.e. vertices without incoming edges.
    pub fn roots(&self) -> Vec<VertexId> {
        self.vertex_ids()
            .filter(|&v| self.vertex(v).incoming.is_empty())
            .collect()
    }

    /// The edge deciding a vertex's single layout parent among multiple
    /// parents, or `None` for a true root.
    pub fn first_incoming_edge(&self, id: VertexId) -> Option<EdgeId> {
        self.vertex(id).incoming.first().copied()
    }

    /// Parent via the first-incoming edge together with the 0-based position
    /// of that edge among the parent's outgoing edges.
    pub fn layout_parent(&self, id: VertexId) -> Option<(VertexId, u32)> {
        let edge = self.first_incoming_edge(id)?;
        let parent = self.edge(edge).source();
        let child_index = self
            .vertex(parent)
            .outgoing
            .iter()
            .position(|&e| e == edge)
            .expect("incoming edge listed among parent's outgoing edges") as u32;
        Some((parent, child_index))
    }

    /// Ascend the first-incoming-edge chain to the true graph root.
    pub fn graph_root(&self, id: VertexId) -> VertexId {
        let mut current = id;
        while let Some(edge) = self.first_incoming_edge(current) {
            current = self.edge(edge).source();
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::LineageGraph;

    #[test]
    fn vertex_can_be_constructed_and_queried() {
        let mut graph = LineageGraph::new();
        let a = graph.add_vertex("A", 0);

        assert_eq!(graph.vertex(a).label(), "A");
        assert_eq!(graph.vertex(a).timepoint(), 0);
        assert!(graph.vertex(a).incoming().is_empty());
        assert!(graph.vertex(a).outgoing().is_empty());
        assert_eq!(graph.vertex(a).layout_timestamp(), 0);
        assert_eq!(graph.vertex(a).layout_parent_edge(), None);
    }

    #[test]
    fn edges_are_listed_on_both_endpoints() {
        let mut graph = LineageGraph::new();
        let a = graph.add_vertex("A", 0);
        let b = graph.add_vertex("B", 1);
        let e = graph.add_edge(a, b);

        assert_eq!(graph.vertex(a).outgoing(), &[e]);
        assert_eq!(graph.vertex(b).incoming(), &[e]);
        assert_eq!(graph.edge(e).source(), a);
        assert_eq!(graph.edge(e).target(), b);
    }

    #[test]
    fn layout_parent_reports_first_incoming_edge_and_child_index() {
        let mut graph = LineageGraph::new();
        let p = graph.add_vertex("P", 0);
        let c1 = graph.add_vertex("C1", 1);
        let c2 = graph.add_vertex("C2", 1);
        graph.add_edge(p, c1);
        graph.add_edge(p, c2);

        assert_eq!(graph.layout_parent(p), None);
        assert_eq!(graph.layout_parent(c1), Some((p, 0)));
        assert_eq!(graph.layout_parent(c2), Some((p, 1)));
    }

    #[test]
    fn layout_parent_of_multi_parent_vertex_is_the_first_incoming_edge() {
        let mut graph = LineageGraph::new();
        let p1 = graph.add_vertex("P1", 0);
        let p2 = graph.add_vertex("P2", 0);
        let c = graph.add_vertex("C", 1);
        graph.add_edge(p1, c);
        graph.add_edge(p2, c);

        assert_eq!(graph.layout_parent(c), Some((p1, 0)));
        assert_eq!(graph.graph_root(c), p1);
    }

    #[test]
    fn roots_are_vertices_without_incoming_edges() {
        let mut graph = LineageGraph::new();
        let a = graph.add_vertex("A", 0);
        let b = graph.add_vertex("B", 0);
        let b1 = graph.add_vertex("B1", 1);
        graph.add_edge(b, b1);

        assert_eq!(graph.roots(), vec![a, b]);
        assert_eq!(graph.graph_root(b1), b);
    }
}
