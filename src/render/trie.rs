// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::text::{join_trimmed, truncate_front_with_ellipsis};
use super::{BRANCH, BRANCH_LAST, INDENT, INDENT_LAST, REVISIT_MARKER};
use crate::model::{DirectedStructure, NodeId, TrieAttrs};

pub const DEFAULT_TRIE_MAX_DEPTH: usize = 4;
pub const DEFAULT_TRIE_MAX_CHILDREN: usize = 8;

const END_NODE: &str = "●";
const INNER_NODE: &str = "○";
const MAX_PREFIX_LEN: usize = 25;

/// Bounds for the prefix-index traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrieRenderOptions {
    pub max_depth: usize,
    pub max_children: usize,
}

impl Default for TrieRenderOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_TRIE_MAX_DEPTH,
            max_children: DEFAULT_TRIE_MAX_CHILDREN,
        }
    }
}

enum Frame<'a> {
    Node {
        id: &'a NodeId,
        label: Option<&'a str>,
        prefix: String,
        last: bool,
        depth: usize,
    },
    Hidden {
        prefix: String,
        count: usize,
    },
}

/// Renders the trie from its root, at most `max_children` children per node and down to
/// `max_depth` levels below the root. Cut-off children are summarised as
/// `... (N more children)`.
///
/// Children are visited in the order the reconstructor stored them (by edge char, then id), so
/// the output is deterministic. A node reached a second time (a cycle in malformed input) is
/// marked and not expanded again, so every node is expanded at most once.
pub fn render_trie(trie: &DirectedStructure<TrieAttrs>, options: TrieRenderOptions) -> String {
    let root = trie.root();
    let mut lines = vec![describe(trie, root)];
    let mut visited: BTreeSet<&NodeId> = BTreeSet::from([root]);
    let mut stack = Vec::new();
    push_children(trie, root, String::new(), 0, options, &mut stack);

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Hidden { prefix, count } => {
                lines.push(format!("{prefix}... ({count} more children)"));
            }
            Frame::Node {
                id,
                label,
                prefix,
                last,
                depth,
            } => {
                let connector = if last { BRANCH_LAST } else { BRANCH };
                let edge = label.map(|c| format!("'{c}' → ")).unwrap_or_default();
                if !visited.insert(id) {
                    let name = truncate_front_with_ellipsis(id.as_str(), MAX_PREFIX_LEN);
                    lines.push(format!("{prefix}{connector}{edge}{name} {REVISIT_MARKER}"));
                    continue;
                }
                lines.push(format!("{prefix}{connector}{edge}{}", describe(trie, id)));

                let child_prefix = format!("{prefix}{}", if last { INDENT_LAST } else { INDENT });
                push_children(trie, id, child_prefix, depth, options, &mut stack);
            }
        }
    }

    join_trimmed(&lines)
}

fn push_children<'a>(
    trie: &'a DirectedStructure<TrieAttrs>,
    id: &NodeId,
    prefix: String,
    depth: usize,
    options: TrieRenderOptions,
    stack: &mut Vec<Frame<'a>>,
) {
    let count = trie.child_count(id);
    if count == 0 {
        return;
    }

    let shown = if depth >= options.max_depth {
        0
    } else {
        count.min(options.max_children)
    };
    if shown < count {
        stack.push(Frame::Hidden {
            prefix: prefix.clone(),
            count: count - shown,
        });
    }

    let frames: Vec<Frame<'a>> = trie
        .children(id)
        .take(shown)
        .enumerate()
        .map(|(idx, edge)| Frame::Node {
            id: edge.to(),
            label: edge.label(),
            prefix: prefix.clone(),
            last: idx + 1 == shown && shown == count,
            depth: depth + 1,
        })
        .collect();
    stack.extend(frames.into_iter().rev());
}

fn describe(trie: &DirectedStructure<TrieAttrs>, id: &NodeId) -> String {
    let name = truncate_front_with_ellipsis(id.as_str(), MAX_PREFIX_LEN);
    match trie.attrs(id) {
        Some(attrs) if attrs.end_of_word => match attrs.resource_count {
            Some(count) if count > 0 => format!("{END_NODE} {name} [{count} IDs]"),
            _ => format!("{END_NODE} {name} [END]"),
        },
        _ => format!("{INNER_NODE} {name}"),
    }
}
