// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use tracing::debug;

use crate::format::token::{split_edge, EdgeToken};
use crate::model::{DirectedStructure, NodeId, StructureEdge, StructureKind, StructureNode};

/// Accumulates node and edge tokens for one directed structure.
pub(crate) struct StructureBuilder<A> {
    kind: StructureKind,
    nodes: Vec<StructureNode<A>>,
    seen: BTreeMap<NodeId, usize>,
    edges: Vec<StructureEdge>,
}

impl<A> StructureBuilder<A> {
    pub(crate) fn new(kind: StructureKind) -> Self {
        Self {
            kind,
            nodes: Vec::new(),
            seen: BTreeMap::new(),
            edges: Vec::new(),
        }
    }

    /// Redeclaring a node replaces its attributes but keeps its first position.
    pub(crate) fn declare(&mut self, id: NodeId, attrs: A) {
        if let Some(idx) = self.seen.get(&id) {
            debug!(kind = %self.kind, node = %id, "node declared twice, keeping the later attributes");
            self.nodes[*idx] = StructureNode::new(id, Some(attrs));
            return;
        }
        self.seen.insert(id.clone(), self.nodes.len());
        self.nodes.push(StructureNode::new(id, Some(attrs)));
    }

    /// Records an edge token; returns `false` when the token is not a well-formed edge.
    pub(crate) fn connect_token(&mut self, token: &str, labeled: bool) -> bool {
        let Some(EdgeToken { from, to, label }) = split_edge(token, labeled) else {
            debug!(kind = %self.kind, token, "skipping malformed edge token");
            return false;
        };
        self.edges.push(StructureEdge::new(
            NodeId::new(from),
            NodeId::new(to),
            label.map(str::to_owned),
        ));
        true
    }

    pub(crate) fn skip(&self, token: &str) {
        debug!(kind = %self.kind, token, "skipping malformed node token");
    }

    /// Finishes the structure, or `None` when it has no declared nodes or no edges.
    ///
    /// Edge endpoints that were never declared are appended as attribute-less nodes so every
    /// edge resolves. `pick_root` sees the completed node list.
    pub(crate) fn finish(
        mut self,
        pick_root: impl FnOnce(&[StructureNode<A>], &[StructureEdge]) -> Option<NodeId>,
    ) -> Option<DirectedStructure<A>> {
        if self.nodes.is_empty() || self.edges.is_empty() {
            return None;
        }

        let declared = self.nodes.len();
        for edge in &self.edges {
            for endpoint in [edge.from(), edge.to()] {
                if !self.seen.contains_key(endpoint) {
                    self.seen.insert(endpoint.clone(), self.nodes.len());
                    self.nodes.push(StructureNode::new(endpoint.clone(), None));
                }
            }
        }
        if self.nodes.len() > declared {
            debug!(
                kind = %self.kind,
                undeclared = self.nodes.len() - declared,
                "edges reference undeclared nodes"
            );
        }

        let root = pick_root(&self.nodes, &self.edges)?;
        Some(DirectedStructure::assemble(self.nodes, self.edges, root))
    }
}
