// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lineascope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lineascope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use crate::model::graph::{EdgeId, VertexId};

/// Selection state over graph vertices and edges.
///
/// Owned by the application; the snapshot pass only reads it to stamp the
/// `selected` flag onto screen entities.
#[derive(Debug, Default, Clone)]
pub struct Selection {
    vertices: BTreeSet<VertexId>,
    edges: BTreeSet<EdgeId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_vertex(&mut self, id: VertexId) {
        self.vertices.insert(id);
    }

    pub fn deselect_vertex(&mut self, id: VertexId) {
        self.vertices.remove(&id);
    }

    pub fn is_vertex_selected(&self, id: VertexId) -> bool {
        self.vertices.contains(&id)
    }

    pub fn select_edge(&mut self, id: EdgeId) {
        self.edges.insert(id);
    }

    pub fn deselect_edge(&mut self, id: EdgeId) {
        self.edges.remove(&id);
    }

    pub fn is_edge_selected(&self, id: EdgeId) -> bool {
        self.edges.contains(&id)
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }
}
