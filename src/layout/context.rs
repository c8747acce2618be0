// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lineascope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lineascope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::layout::order;
use crate::layout::tree::LineageTreeLayout;
use crate::model::graph::{LineageGraph, VertexId};
use crate::model::spatial::SpatialIndexProvider;
use crate::screen::transform::ScreenTransform;

/// Restricts layout to the subgraph relevant for the visible time-window.
///
/// For every vertex inside the window the context also retains its chain of
/// ancestors: they are laid out as ghosts so truncated lineages keep their
/// anchor points. The window only depends on the viewport's timepoint range,
/// so pans and zooms that stay within the same timepoints skip layout
/// entirely.
#[derive(Debug, Default)]
pub struct ContextWindow {
    previous_range: Option<(i32, i32)>,
}

impl ContextWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the context for `viewport` and lay it out, unless the
    /// timepoint range is unchanged and `force_update` is false.
    ///
    /// Returns whether a new layout was computed.
    pub fn build_context(
        &mut self,
        graph: &mut LineageGraph,
        layout: &mut LineageTreeLayout,
        index: &dyn SpatialIndexProvider,
        viewport: &ScreenTransform,
        force_update: bool,
    ) -> bool {
        let min_timepoint = viewport.min_y().floor() as i32;
        let max_timepoint = viewport.max_y().floor() as i32 + 1;
        if self.previous_range == Some((min_timepoint, max_timepoint)) && !force_update {
            return false;
        }
        self.previous_range = Some((min_timepoint, max_timepoint));

        let ghostmark = layout.reserve_timestamp();
        let mark = layout.reserve_timestamp();

        let mut roots = Vec::new();
        {
            let read = index.read_lock();
            let mut inside = Vec::new();
            for timepoint in min_timepoint..=max_timepoint {
                inside.clear();
                read.inside_vertices(timepoint, &mut inside);
                for &vertex in &inside {
                    graph.vertex_mut(vertex).set_layout_timestamp(mark);
                    if timepoint == min_timepoint || graph.vertex(vertex).incoming().is_empty() {
                        roots.push(vertex);
                    }
                    trace_ancestors(graph, vertex, ghostmark, min_timepoint, &mut roots);
                }
            }
        }

        let roots = order::sort_roots(graph, &roots);
        layout.layout(graph, &roots, mark);
        true
    }

    /// Forget the cached timepoint range, forcing the next build.
    pub fn invalidate(&mut self) {
        self.previous_range = None;
    }
}

/// Walk up from `vertex`, marking every not-yet-seen ancestor with
/// `ghostmark`. An ancestor at or above the window's first timepoint, or one
/// without incoming edges, anchors its lineage as a root. The walk continues
/// to the very top so the whole ancestor chain carries the ghost mark.
fn trace_ancestors(
    graph: &mut LineageGraph,
    vertex: VertexId,
    ghostmark: i64,
    min_timepoint: i32,
    roots: &mut Vec<VertexId>,
) {
    let mut pending = vec![vertex];
    while let Some(current) = pending.pop() {
        for i in 0..graph.vertex(current).incoming().len() {
            let edge = graph.vertex(current).incoming()[i];
            let parent = graph.edge(edge).source();
            if graph.vertex(parent).layout_timestamp() >= ghostmark {
                continue;
            }
            graph.vertex_mut(parent).set_layout_timestamp(ghostmark);
            if graph.vertex(parent).timepoint() <= min_timepoint
                || graph.vertex(parent).incoming().is_empty()
            {
                roots.push(parent);
            }
            if !graph.vertex(parent).incoming().is_empty() {
                pending.push(parent);
            }
        }
    }
}
