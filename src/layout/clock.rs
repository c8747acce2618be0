// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lineascope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lineascope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// The single monotonic layout-timestamp counter.
///
/// Mark reservation (context window) and layout-generation advance (tree
/// layout) draw from the same sequence, so any reserved mark strictly
/// precedes the generation timestamp of every later layout pass. Freshness
/// checks are plain integer comparisons against per-vertex watermarks; stale
/// per-vertex state never needs clearing.
#[derive(Debug, Default)]
pub struct LayoutClock {
    timestamp: i64,
}

impl LayoutClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// The timestamp of the current (latest) layout generation.
    pub fn current(&self) -> i64 {
        self.timestamp
    }

    /// Reserve the next timestamp for external use as a mark value. The next
    /// layout pass will use the timestamp after that.
    pub fn reserve(&mut self) -> i64 {
        self.timestamp += 1;
        self.timestamp
    }

    /// Advance to and return the generation timestamp of a starting layout
    /// pass.
    pub fn begin_layout(&mut self) -> i64 {
        self.timestamp += 1;
        self.timestamp
    }
}
