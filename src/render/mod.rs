// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Deterministic text rendering for decoded replies.
//!
//! Every renderer is a pure function of its input and returns plain Unicode text without a
//! trailing newline, ready for a terminal or a snapshot test.

pub mod graph;
pub mod hierarchy;
pub mod linear;
pub mod report;
pub mod table;
mod text;
pub mod trie;

use serde::{Deserialize, Serialize};

pub use graph::render_graph;
pub use hierarchy::{render_heap, render_tree};
pub use linear::{render_cache, render_stack};
pub use report::{empty_message, render_reconstruction, render_report};
pub use table::render_resources;
pub use trie::{render_trie, TrieRenderOptions};

pub(crate) const BRANCH: &str = "├── ";
pub(crate) const BRANCH_LAST: &str = "└── ";
pub(crate) const INDENT: &str = "│   ";
pub(crate) const INDENT_LAST: &str = "    ";
pub(crate) const REVISIT_MARKER: &str = "↺";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub trie: TrieRenderOptions,
}
