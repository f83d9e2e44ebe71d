// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{NodeId, StructureEdge};

/// Picks a display root: the single edge source that is never an edge target.
///
/// Zero or several candidates (cycles, forests, malformed input) fall back to the first node in
/// `node_order`. Returns `None` only when there are no nodes at all.
pub fn infer_root<'a>(
    node_order: impl IntoIterator<Item = &'a NodeId>,
    edges: &[StructureEdge],
) -> Option<NodeId> {
    let targets: BTreeSet<&NodeId> = edges.iter().map(StructureEdge::to).collect();
    let mut candidates = edges
        .iter()
        .map(StructureEdge::from)
        .filter(|from| !targets.contains(from))
        .collect::<BTreeSet<_>>()
        .into_iter();

    match (candidates.next(), candidates.next()) {
        (Some(root), None) => Some(root.clone()),
        _ => node_order.into_iter().next().cloned(),
    }
}

/// Picks the single node with no incoming edge, falling back like [`infer_root`].
///
/// Unlike [`infer_root`], isolated nodes count as candidates: a heap with a detached node is not
/// single-rooted.
pub fn infer_root_by_in_degree<'a>(
    node_order: impl IntoIterator<Item = &'a NodeId>,
    edges: &[StructureEdge],
) -> Option<NodeId> {
    let mut in_degree: BTreeMap<&NodeId, usize> = BTreeMap::new();
    let mut order = Vec::new();
    for id in node_order {
        in_degree.entry(id).or_insert(0);
        order.push(id);
    }
    for edge in edges {
        *in_degree.entry(edge.to()).or_insert(0) += 1;
        in_degree.entry(edge.from()).or_insert(0);
    }

    let mut zero = in_degree.iter().filter(|(_, degree)| **degree == 0).map(|(id, _)| *id);
    match (zero.next(), zero.next()) {
        (Some(root), None) => Some(root.clone()),
        _ => order.first().map(|id| (*id).clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::{infer_root, infer_root_by_in_degree};
    use crate::model::{NodeId, StructureEdge};

    fn n(id: &str) -> NodeId {
        NodeId::new(id)
    }

    fn e(from: &str, to: &str) -> StructureEdge {
        StructureEdge::new(n(from), n(to), None)
    }

    #[test]
    fn single_source_is_the_root() {
        let nodes = [n("A"), n("R"), n("B")];
        let edges = [e("R", "A"), e("R", "B")];
        assert_eq!(infer_root(&nodes, &edges), Some(n("R")));
    }

    #[test]
    fn cycles_fall_back_to_the_first_node() {
        let nodes = [n("B"), n("A")];
        let edges = [e("A", "B"), e("B", "A")];
        assert_eq!(infer_root(&nodes, &edges), Some(n("B")));
    }

    #[test]
    fn forests_fall_back_to_the_first_node() {
        let nodes = [n("C"), n("A"), n("B"), n("D")];
        let edges = [e("A", "B"), e("C", "D")];
        assert_eq!(infer_root(&nodes, &edges), Some(n("C")));
    }

    #[test]
    fn no_nodes_and_no_edges_has_no_root() {
        let nodes: [NodeId; 0] = [];
        assert_eq!(infer_root(&nodes, &[]), None);
    }

    #[test]
    fn in_degree_root_counts_isolated_nodes() {
        let nodes = [n("x"), n("7"), n("3")];
        let edges = [e("7", "3")];
        assert_eq!(infer_root(&nodes, &edges), Some(n("7")));
        assert_eq!(infer_root_by_in_degree(&nodes, &edges), Some(n("x")));

        let nodes = [n("3"), n("7")];
        assert_eq!(infer_root_by_in_degree(&nodes, &edges), Some(n("7")));
    }
}
