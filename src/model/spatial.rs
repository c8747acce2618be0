// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lineascope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lineascope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The spatial-index seam toward the owning application.
//!
//! The context window never inspects image data itself; it asks an external
//! index which vertices are "inside" the view at a given timepoint. Index
//! mutation runs concurrently to redrawing in the host application, so the
//! enumeration happens under a shared read guard.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard};

use crate::model::graph::VertexId;

/// A held read guard over the spatial index.
///
/// Dropping the value releases the guard; the context window holds it only
/// while enumerating inside vertices.
pub trait SpatialIndexRead {
    /// Append every vertex "inside" the view at `timepoint` to `out`.
    fn inside_vertices(&self, timepoint: i32, out: &mut Vec<VertexId>);
}

/// Provider of read-locked access to a spatial index.
pub trait SpatialIndexProvider {
    fn read_lock(&self) -> Box<dyn SpatialIndexRead + '_>;
}

/// A plain timepoint-keyed index, usable when the application has no
/// geometric index: every registered vertex counts as inside at its
/// timepoint.
#[derive(Debug, Default)]
pub struct TimepointSpatialIndex {
    inner: RwLock<BTreeMap<i32, Vec<VertexId>>>,
}

impl TimepointSpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, timepoint: i32, id: VertexId) {
        self.inner
            .write()
            .expect("spatial index lock poisoned")
            .entry(timepoint)
            .or_default()
            .push(id);
    }

    pub fn remove(&self, timepoint: i32, id: VertexId) {
        let mut map = self.inner.write().expect("spatial index lock poisoned");
        if let Some(ids) = map.get_mut(&timepoint) {
            ids.retain(|&v| v != id);
            if ids.is_empty() {
                map.remove(&timepoint);
            }
        }
    }

    /// Index the whole graph: every vertex inside at its own timepoint.
    pub fn from_graph(graph: &crate::model::graph::LineageGraph) -> Self {
        let index = Self::new();
        for v in graph.vertex_ids() {
            index.insert(graph.vertex(v).timepoint(), v);
        }
        index
    }
}

struct TimepointIndexRead<'a> {
    guard: RwLockReadGuard<'a, BTreeMap<i32, Vec<VertexId>>>,
}

impl SpatialIndexRead for TimepointIndexRead<'_> {
    fn inside_vertices(&self, timepoint: i32, out: &mut Vec<VertexId>) {
        if let Some(ids) = self.guard.get(&timepoint) {
            out.extend_from_slice(ids);
        }
    }
}

impl SpatialIndexProvider for TimepointSpatialIndex {
    fn read_lock(&self) -> Box<dyn SpatialIndexRead + '_> {
        Box::new(TimepointIndexRead {
            guard: self.inner.read().expect("spatial index lock poisoned"),
        })
    }
}
