// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::builder::StructureBuilder;
use super::root::infer_root;
use crate::format::token::{is_edge, strip_record_prefix};
use crate::model::{DirectedStructure, NodeId, StructureKind, StructureNode};

/// Rebuilds the prerequisite graph. Nodes are bare ids, edges are unlabeled; cycles are kept.
pub fn reconstruct_graph<S: AsRef<str>>(tokens: &[S]) -> Option<DirectedStructure<()>> {
    let mut builder = StructureBuilder::new(StructureKind::Graph);
    for token in tokens {
        let token = token.as_ref();
        if is_edge(token) {
            builder.connect_token(token, false);
            continue;
        }
        let id = strip_record_prefix(token);
        if id.is_empty() {
            builder.skip(token);
            continue;
        }
        builder.declare(NodeId::new(id), ());
    }
    builder.finish(|nodes, edges| infer_root(nodes.iter().map(StructureNode::id), edges))
}
