// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::builder::StructureBuilder;
use super::root::infer_root;
use crate::format::token::{is_edge, split_node_fields};
use crate::model::{DirectedStructure, NodeId, StructureKind, StructureNode, TreeAttrs};

/// Rebuilds the balanced catalogue tree from `id:height:balance` nodes and `parent->child:L|R`
/// edges.
pub fn reconstruct_tree<S: AsRef<str>>(tokens: &[S]) -> Option<DirectedStructure<TreeAttrs>> {
    let mut builder = StructureBuilder::new(StructureKind::Tree);
    for token in tokens {
        let token = token.as_ref();
        if is_edge(token) {
            builder.connect_token(token, true);
            continue;
        }
        match split_node_fields(token, 3) {
            Some(fields) => builder.declare(
                NodeId::new(fields[0]),
                TreeAttrs {
                    height: fields[1].parse().ok(),
                    balance: fields[2].parse().ok(),
                },
            ),
            None => builder.skip(token),
        }
    }
    builder.finish(|nodes, edges| infer_root(nodes.iter().map(StructureNode::id), edges))
}
