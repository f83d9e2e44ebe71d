// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Typed structures rebuilt from the analysis blocks of one reply.
//!
//! One reconstructor per [`StructureKind`]; all of them share the token grammar in
//! [`crate::format::token`] and the root inference in [`root`]. Every reconstructor is total: a
//! block with no usable nodes or edges becomes [`Reconstruction::Empty`].

mod builder;
mod graph;
mod heap;
mod linear;
pub mod root;
mod tree;
mod trie;

pub use graph::reconstruct_graph;
pub use heap::reconstruct_heap;
pub use linear::{decode_cache, decode_stack};
pub use root::{infer_root, infer_root_by_in_degree};
pub use tree::reconstruct_tree;
pub use trie::{reconstruct_trie, TRIE_ROOT};

use crate::model::{AnalysisReport, Reconstruction, StructureKind};

/// Runs the reconstructor for `kind` over already-merged tokens.
pub fn reconstruct_kind<S: AsRef<str>>(kind: StructureKind, tokens: &[S]) -> Reconstruction {
    let built = match kind {
        StructureKind::Tree => reconstruct_tree(tokens).map(Reconstruction::Tree),
        StructureKind::Trie => reconstruct_trie(tokens).map(Reconstruction::Trie),
        StructureKind::Heap => reconstruct_heap(tokens).map(Reconstruction::Heap),
        StructureKind::Graph => reconstruct_graph(tokens).map(Reconstruction::Graph),
        StructureKind::Cache => decode_cache(tokens).map(Reconstruction::Cache),
        StructureKind::Stack => decode_stack(tokens).map(Reconstruction::Stack),
    };
    built.unwrap_or(Reconstruction::Empty(kind))
}

/// Reconstructs `kind` from every block of that kind in `report`; `None` when the report has no
/// such block at all.
pub fn reconstruct(report: &AnalysisReport, kind: StructureKind) -> Option<Reconstruction> {
    if !report.has_kind(kind) {
        return None;
    }
    Some(reconstruct_kind(kind, &report.tokens_for(kind)))
}

/// Reconstructs every kind present in `report`, in [`StructureKind::ALL`] order.
pub fn reconstruct_report(report: &AnalysisReport) -> Vec<Reconstruction> {
    StructureKind::ALL
        .into_iter()
        .filter_map(|kind| reconstruct(report, kind))
        .collect()
}

#[cfg(test)]
mod tests;
