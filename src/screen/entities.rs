// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lineascope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lineascope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::model::graph::{EdgeId, VertexId};
use crate::screen::transform::ScreenTransform;

/// Animation state of a screen entity while blending between two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Transition {
    #[default]
    None,
    /// Present only in the end snapshot, fading in.
    Appear,
    /// Present only in the start snapshot, fading out.
    Disappear,
    /// Became selected between the snapshots.
    Selecting,
    /// Became deselected between the snapshots.
    Deselecting,
}

/// A vertex placed in pixel coordinates, ready to paint.
///
/// `id` is `None` for synthetic vertices that exist only for animation, such
/// as a disappearing vertex held over from a previous snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenVertex {
    id: Option<VertexId>,
    label: SmolStr,
    x: f64,
    y: f64,
    selected: bool,
    ghost: bool,
    vertex_dist: f64,
    transition: Transition,
    interpolation_ratio: f64,
}

impl ScreenVertex {
    pub(crate) fn new(
        id: Option<VertexId>,
        label: SmolStr,
        x: f64,
        y: f64,
        selected: bool,
        ghost: bool,
    ) -> Self {
        Self {
            id,
            label,
            x,
            y,
            selected,
            ghost,
            vertex_dist: f64::INFINITY,
            transition: Transition::None,
            interpolation_ratio: 0.0,
        }
    }

    pub fn id(&self) -> Option<VertexId> {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_ghost(&self) -> bool {
        self.ghost
    }

    /// Pixel distance to the closest other vertex on the same row, used to
    /// decide whether a label still fits.
    pub fn vertex_dist(&self) -> f64 {
        self.vertex_dist
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    pub fn interpolation_ratio(&self) -> f64 {
        self.interpolation_ratio
    }

    pub(crate) fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub(crate) fn set_vertex_dist(&mut self, dist: f64) {
        self.vertex_dist = dist;
    }

    pub(crate) fn set_transition(&mut self, transition: Transition, ratio: f64) {
        self.transition = transition;
        self.interpolation_ratio = ratio;
    }
}

/// An edge between two vertices of the same snapshot, by index into the
/// snapshot's vertex list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenEdge {
    id: Option<EdgeId>,
    source_index: usize,
    target_index: usize,
    selected: bool,
    transition: Transition,
    interpolation_ratio: f64,
}

impl ScreenEdge {
    pub(crate) fn new(
        id: Option<EdgeId>,
        source_index: usize,
        target_index: usize,
        selected: bool,
    ) -> Self {
        Self {
            id,
            source_index,
            target_index,
            selected,
            transition: Transition::None,
            interpolation_ratio: 0.0,
        }
    }

    pub fn id(&self) -> Option<EdgeId> {
        self.id
    }

    pub fn source_index(&self) -> usize {
        self.source_index
    }

    pub fn target_index(&self) -> usize {
        self.target_index
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    pub fn interpolation_ratio(&self) -> f64 {
        self.interpolation_ratio
    }

    pub(crate) fn set_source_index(&mut self, index: usize) {
        self.source_index = index;
    }

    pub(crate) fn set_target_index(&mut self, index: usize) {
        self.target_index = index;
    }

    pub(crate) fn set_transition(&mut self, transition: Transition, ratio: f64) {
        self.transition = transition;
        self.interpolation_ratio = ratio;
    }
}

/// A stretch of a row too dense to draw individual vertices, in pixel
/// coordinates. Painted as a filled block instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenRange {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

/// A labelled column header spanning one lineage on screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenColumn {
    pub label: SmolStr,
    pub x_left: f64,
    pub width: f64,
}

/// One renderable snapshot: everything visible under a given transform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenEntities {
    vertices: Vec<ScreenVertex>,
    edges: Vec<ScreenEdge>,
    ranges: Vec<ScreenRange>,
    columns: Vec<ScreenColumn>,
    transform: ScreenTransform,
}

impl ScreenEntities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[ScreenVertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[ScreenEdge] {
        &self.edges
    }

    pub fn ranges(&self) -> &[ScreenRange] {
        &self.ranges
    }

    pub fn columns(&self) -> &[ScreenColumn] {
        &self.columns
    }

    pub fn transform(&self) -> &ScreenTransform {
        &self.transform
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.ranges.clear();
        self.columns.clear();
    }

    pub(crate) fn vertices_mut(&mut self) -> &mut Vec<ScreenVertex> {
        &mut self.vertices
    }

    pub(crate) fn edges_mut(&mut self) -> &mut Vec<ScreenEdge> {
        &mut self.edges
    }

    pub(crate) fn ranges_mut(&mut self) -> &mut Vec<ScreenRange> {
        &mut self.ranges
    }

    pub(crate) fn columns_mut(&mut self) -> &mut Vec<ScreenColumn> {
        &mut self.columns
    }

    pub(crate) fn set_transform(&mut self, transform: ScreenTransform) {
        self.transform = transform;
    }
}
