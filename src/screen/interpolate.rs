// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lineascope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lineascope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;
use std::f64::consts::PI;

use crate::model::graph::{EdgeId, VertexId};
use crate::screen::entities::{ScreenEntities, ScreenVertex, Transition};
use crate::screen::transform::ScreenTransform;

/// Blends two snapshots for animated transitions between views.
///
/// Built once per animation from the previous snapshot (`start`) and the
/// freshly computed one (`end`); [`interpolate`](Self::interpolate) is then
/// called once per frame with a ratio running from 0 to 1. A vertex present
/// in both snapshots glides between its positions; one present only at the
/// start fades out in place, one present only at the end fades in at its
/// final position.
#[derive(Debug)]
pub struct ScreenEntitiesInterpolator {
    start: ScreenEntities,
    end: ScreenEntities,
    start_vertex_index: HashMap<VertexId, usize>,
    end_vertex_index: HashMap<VertexId, usize>,
    start_edge_index: HashMap<EdgeId, usize>,
}

impl ScreenEntitiesInterpolator {
    pub fn new(start: ScreenEntities, end: ScreenEntities) -> Self {
        let start_vertex_index = vertex_index(&start);
        let end_vertex_index = vertex_index(&end);
        let start_edge_index = start
            .edges()
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.id().map(|id| (id, i)))
            .collect();
        Self {
            start,
            end,
            start_vertex_index,
            end_vertex_index,
            start_edge_index,
        }
    }

    pub fn start(&self) -> &ScreenEntities {
        &self.start
    }

    pub fn end(&self) -> &ScreenEntities {
        &self.end
    }

    /// Eases `ratio` so the animation accelerates in and out instead of
    /// moving linearly.
    fn accel(ratio: f64) -> f64 {
        (PI * (PI * ratio / 2.0).sin() / 2.0).sin()
    }

    /// Fill `current` with the blend of the two snapshots at `ratio` in
    /// `[0, 1]`.
    pub fn interpolate(&self, ratio: f64, current: &mut ScreenEntities) {
        let accel = Self::accel(ratio);
        current.clear();
        current.set_transform(ScreenTransform::interpolate(
            self.start.transform(),
            self.end.transform(),
            accel,
        ));

        // End vertices first, so edge endpoints can be re-pointed from the
        // end snapshot's indices.
        let mut end_to_current = vec![0usize; self.end.vertices().len()];
        for (end_index, end_vertex) in self.end.vertices().iter().enumerate() {
            let blended = match end_vertex
                .id()
                .and_then(|id| self.start_vertex_index.get(&id))
            {
                Some(&start_index) => {
                    let start_vertex = &self.start.vertices()[start_index];
                    let mut vertex = end_vertex.clone();
                    vertex.set_position(
                        (1.0 - accel) * start_vertex.x() + accel * end_vertex.x(),
                        (1.0 - accel) * start_vertex.y() + accel * end_vertex.y(),
                    );
                    let transition =
                        match (start_vertex.is_selected(), end_vertex.is_selected()) {
                            (false, true) => Transition::Selecting,
                            (true, false) => Transition::Deselecting,
                            _ => Transition::None,
                        };
                    vertex.set_transition(transition, accel);
                    vertex
                }
                None => {
                    let mut vertex = end_vertex.clone();
                    vertex.set_transition(Transition::Appear, accel);
                    vertex
                }
            };
            end_to_current[end_index] = current.vertices().len();
            current.vertices_mut().push(blended);
        }

        // Start-only vertices fade out in place. They carry no id: nothing
        // in the end snapshot corresponds to them.
        for start_vertex in self.start.vertices() {
            let gone = start_vertex
                .id()
                .map_or(true, |id| !self.end_vertex_index.contains_key(&id));
            if gone && start_vertex.id().is_some() {
                let mut vertex = ScreenVertex::new(
                    None,
                    start_vertex.label().into(),
                    start_vertex.x(),
                    start_vertex.y(),
                    start_vertex.is_selected(),
                    start_vertex.is_ghost(),
                );
                vertex.set_vertex_dist(start_vertex.vertex_dist());
                vertex.set_transition(Transition::Disappear, accel);
                current.vertices_mut().push(vertex);
            }
        }

        for end_edge in self.end.edges() {
            let mut edge = end_edge.clone();
            edge.set_source_index(end_to_current[end_edge.source_index()]);
            edge.set_target_index(end_to_current[end_edge.target_index()]);
            if let Some(&start_index) = end_edge
                .id()
                .and_then(|id| self.start_edge_index.get(&id))
            {
                let start_edge = &self.start.edges()[start_index];
                let transition = match (start_edge.is_selected(), end_edge.is_selected()) {
                    (false, true) => Transition::Selecting,
                    (true, false) => Transition::Deselecting,
                    _ => Transition::None,
                };
                edge.set_transition(transition, accel);
            }
            current.edges_mut().push(edge);
        }

        current.ranges_mut().extend_from_slice(self.end.ranges());
        current.columns_mut().extend_from_slice(self.end.columns());
    }
}

fn vertex_index(entities: &ScreenEntities) -> HashMap<VertexId, usize> {
    entities
        .vertices()
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.id().map(|id| (id, i)))
        .collect()
}
