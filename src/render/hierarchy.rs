// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use super::text::join_trimmed;
use super::{BRANCH, BRANCH_LAST, INDENT, INDENT_LAST, REVISIT_MARKER};
use crate::model::{DirectedStructure, HeapAttrs, NodeId, StructureNode, TreeAttrs};

const IMBALANCE_MARKER: &str = "⚠";

/// Box-drawn hierarchy of the balanced catalogue tree, with `h=`/`b=` per node.
pub fn render_tree(tree: &DirectedStructure<TreeAttrs>) -> String {
    render_hierarchy(tree, |node| {
        let Some(attrs) = node.attrs() else {
            return node.id().to_string();
        };
        let height = attrs.height.map_or_else(|| "?".to_owned(), |h| h.to_string());
        let balance = attrs.balance.map_or_else(|| "?".to_owned(), |b| b.to_string());
        let mut text = format!("{}  h={height} b={balance}", node.id());
        if attrs.is_balanced() == Some(false) {
            text.push(' ');
            text.push_str(IMBALANCE_MARKER);
        }
        text
    })
}

/// Box-drawn hierarchy of the priority queue, with rating and array index per node.
pub fn render_heap(heap: &DirectedStructure<HeapAttrs>) -> String {
    render_hierarchy(heap, |node| match node.attrs() {
        Some(attrs) => {
            let index = attrs.index.map_or_else(|| "?".to_owned(), |i| i.to_string());
            format!("{}  rating={} [{index}]", node.id(), attrs.rating)
        }
        None => node.id().to_string(),
    })
}

struct Frame<'a> {
    id: &'a NodeId,
    label: Option<&'a str>,
    prefix: String,
    last: bool,
}

/// Preorder walk from the root. Nodes reached twice are marked instead of expanded; nodes the
/// walk never reaches are listed at the end.
pub(crate) fn render_hierarchy<A>(
    structure: &DirectedStructure<A>,
    describe: impl Fn(&StructureNode<A>) -> String,
) -> String {
    let describe_id = |id: &NodeId| {
        structure
            .node(id)
            .map_or_else(|| id.to_string(), |node| describe(node))
    };

    let root = structure.root();
    let mut lines = vec![describe_id(root)];
    let mut visited: BTreeSet<&NodeId> = BTreeSet::from([root]);
    let mut stack: Vec<Frame<'_>> = Vec::new();
    push_children(structure, root, "", &mut stack);

    while let Some(frame) = stack.pop() {
        let connector = if frame.last { BRANCH_LAST } else { BRANCH };
        let label = frame.label.map(|l| format!("{l}: ")).unwrap_or_default();
        if !visited.insert(frame.id) {
            lines.push(format!("{}{connector}{label}{} {REVISIT_MARKER}", frame.prefix, frame.id));
            continue;
        }
        lines.push(format!("{}{connector}{label}{}", frame.prefix, describe_id(frame.id)));

        let child_prefix = format!("{}{}", frame.prefix, if frame.last { INDENT_LAST } else { INDENT });
        push_children(structure, frame.id, &child_prefix, &mut stack);
    }

    let detached: Vec<&str> = structure
        .nodes()
        .iter()
        .map(StructureNode::id)
        .filter(|id| !visited.contains(id))
        .map(NodeId::as_str)
        .collect();
    if !detached.is_empty() {
        lines.push(format!("detached: {}", detached.join(", ")));
    }

    join_trimmed(&lines)
}

fn push_children<'a, A>(
    structure: &'a DirectedStructure<A>,
    id: &NodeId,
    prefix: &str,
    stack: &mut Vec<Frame<'a>>,
) {
    let count = structure.child_count(id);
    let frames: Vec<Frame<'a>> = structure
        .children(id)
        .enumerate()
        .map(|(idx, edge)| Frame {
            id: edge.to(),
            label: edge.label(),
            prefix: prefix.to_owned(),
            last: idx + 1 == count,
        })
        .collect();
    stack.extend(frames.into_iter().rev());
}
