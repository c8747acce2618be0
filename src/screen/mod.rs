// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lineascope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lineascope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Screen-space view of a laid-out lineage forest.
//!
//! [`transform`] maps between layout and pixel coordinates, [`snapshot`]
//! crops the layout into renderable [`entities`], and [`interpolate`] blends
//! two snapshots for animated view changes.

pub mod entities;
pub mod interpolate;
pub mod snapshot;
pub mod transform;

pub use entities::{
    ScreenColumn, ScreenEdge, ScreenEntities, ScreenRange, ScreenVertex, Transition,
};
pub use interpolate::ScreenEntitiesInterpolator;
pub use transform::ScreenTransform;
