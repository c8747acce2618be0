// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lineascope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lineascope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Lineascope: lineage-tree layout and live-view windowing engine.
//!
//! Converts an unbounded temporal lineage graph into positioned, screen-ready
//! visual elements incrementally, as the visible time-window and zoom change:
//!
//! - [`model`]: the arena-backed lineage graph, selection state, and the
//!   spatial-index seam toward the owning application.
//! - [`layout`]: the tree layout engine, layout clock, lexicographic root
//!   ordering, and the context window that restricts layout to the viewport.
//! - [`screen`]: the screen transform, transient per-frame screen entities,
//!   the crop-and-scale snapshot pass, and the transition interpolator.
//!
//! Rendering itself (pixels, widgets) is a downstream collaborator; this
//! crate stops at immutable [`screen::ScreenEntities`] snapshots.

pub mod layout;
pub mod model;
pub mod screen;
