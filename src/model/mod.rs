// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lineascope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lineascope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The lineage graph model and the seams toward the owning application.
//!
//! The graph here is the long-lived temporal model: the application mutates
//! its structure, the layout engine mutates only the per-vertex layout fields.

pub mod graph;
pub mod selection;
pub mod spatial;

pub use graph::{EdgeId, LineageEdge, LineageGraph, LineageVertex, VertexId};
pub use selection::Selection;
pub use spatial::{SpatialIndexProvider, SpatialIndexRead, TimepointSpatialIndex};
