// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lineascope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lineascope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layouting of a lineage graph into layout coordinates.
//!
//! The layout Y coordinate of a vertex is its timepoint; X coordinates are
//! assigned by [`tree::LineageTreeLayout`] starting from a root list that the
//! [`context::ContextWindow`] derives from the visible time-window and
//! [`order`] puts into a stable lexicographic order.

pub mod clock;
pub mod context;
pub mod order;
pub mod tree;

pub use clock::LayoutClock;
pub use context::ContextWindow;
pub use order::sort_roots;
pub use tree::{LineageTreeLayout, TimepointRow};
