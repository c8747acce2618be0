// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lineascope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lineascope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Lexicographic ordering of layout roots.
//!
//! Each vertex is keyed by its position in the first-incoming-edge spanning
//! forest: the graph root's label followed by the child index taken at every
//! descent step. Sorting roots by these keys keeps sibling branches in the
//! same relative order no matter how the visible window truncates them, so
//! trees do not visually jump when the window moves.

use std::cmp::Ordering;

use smallvec::SmallVec;
use smol_str::SmolStr;

use crate::model::graph::{LineageGraph, VertexId};

#[derive(Debug, Clone, PartialEq, Eq)]
struct OrderKey {
    root_label: SmolStr,
    path: SmallVec<[u32; 8]>,
}

impl OrderKey {
    fn for_vertex(graph: &LineageGraph, vertex: VertexId) -> Self {
        let mut path = SmallVec::<[u32; 8]>::new();
        let mut current = vertex;
        while let Some((parent, child_index)) = graph.layout_parent(current) {
            path.push(child_index);
            current = parent;
        }
        path.reverse();
        Self {
            root_label: graph.vertex(current).label().clone(),
            path,
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        // Slice ordering is element-wise with a strict prefix sorting before
        // its extension, exactly the key contract.
        alphanum_compare(&self.root_label, &other.root_label)
            .then_with(|| self.path.as_slice().cmp(other.path.as_slice()))
    }
}

/// Sort `vertices` into the stable lexicographic root order.
///
/// The result is insensitive to the permutation of the input.
pub fn sort_roots(graph: &LineageGraph, vertices: &[VertexId]) -> Vec<VertexId> {
    let mut keyed: Vec<(OrderKey, VertexId)> = vertices
        .iter()
        .map(|&v| (OrderKey::for_vertex(graph, v), v))
        .collect();
    keyed.sort_by(|a, b| a.0.compare(&b.0).then_with(|| a.1.cmp(&b.1)));
    keyed.into_iter().map(|(_, v)| v).collect()
}

/// Alphanumeric-aware string comparison: maximal embedded digit runs compare
/// by numeric value, everything else by character.
pub fn alphanum_compare(a: &str, b: &str) -> Ordering {
    let mut a = a.as_bytes();
    let mut b = b.as_bytes();
    loop {
        match (a.is_empty(), b.is_empty()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }
        let (chunk_a, rest_a) = take_chunk(a);
        let (chunk_b, rest_b) = take_chunk(b);
        let ord = if chunk_a[0].is_ascii_digit() && chunk_b[0].is_ascii_digit() {
            compare_digit_runs(chunk_a, chunk_b)
        } else {
            chunk_a.cmp(chunk_b)
        };
        if ord != Ordering::Equal {
            return ord;
        }
        a = rest_a;
        b = rest_b;
    }
}

/// Split off the leading maximal run of digits or non-digits.
fn take_chunk(s: &[u8]) -> (&[u8], &[u8]) {
    let digit = s[0].is_ascii_digit();
    let len = s
        .iter()
        .position(|c| c.is_ascii_digit() != digit)
        .unwrap_or(s.len());
    s.split_at(len)
}

fn compare_digit_runs(a: &[u8], b: &[u8]) -> Ordering {
    let trimmed_a = trim_leading_zeros(a);
    let trimmed_b = trim_leading_zeros(b);
    trimmed_a
        .len()
        .cmp(&trimmed_b.len())
        .then_with(|| trimmed_a.cmp(trimmed_b))
        // Equal value: fewer leading zeros first, keeping the order total.
        .then_with(|| a.len().cmp(&b.len()))
}

fn trim_leading_zeros(s: &[u8]) -> &[u8] {
    let start = s.iter().position(|&c| c != b'0').unwrap_or(s.len());
    &s[start..]
}
