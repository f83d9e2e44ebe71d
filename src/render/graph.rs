// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use crate::model::{DirectedStructure, NodeId, StructureNode};

/// Roots line followed by one adjacency line per node with outgoing edges.
///
/// Roots are the nodes nothing points at; a fully cyclic graph has none.
pub fn render_graph(graph: &DirectedStructure<()>) -> String {
    let targets: BTreeSet<&NodeId> = graph.edges().iter().map(|edge| edge.to()).collect();
    let roots: Vec<&str> = graph
        .nodes()
        .iter()
        .map(StructureNode::id)
        .filter(|id| !targets.contains(id))
        .map(NodeId::as_str)
        .collect();

    let mut lines = Vec::with_capacity(graph.len() + 2);
    lines.push(format!("{} nodes, {} edges", graph.len(), graph.edges().len()));
    if roots.is_empty() {
        lines.push("roots: (none, every node has a prerequisite)".to_owned());
    } else {
        lines.push(format!("roots: {}", roots.join(", ")));
    }

    for node in graph.nodes() {
        if graph.child_count(node.id()) == 0 {
            continue;
        }
        let unlocks: Vec<&str> = graph.children(node.id()).map(|edge| edge.to().as_str()).collect();
        lines.push(format!("{} → {}", node.id(), unlocks.join(", ")));
    }

    lines.join("\n")
}
