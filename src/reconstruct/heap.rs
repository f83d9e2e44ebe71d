// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::builder::StructureBuilder;
use super::root::infer_root_by_in_degree;
use crate::format::token::{is_edge, split_meta, split_node_fields};
use crate::model::{DirectedStructure, HeapAttrs, NodeId, StructureKind, StructureNode};

pub const HEAP_SIZE: &str = "HEAP_SIZE";

/// Rebuilds the priority queue from `NODE:id:rating:index` nodes and `EDGE:parent->child:L|R`
/// edges. The `HEAP_SIZE` line is informational only.
pub fn reconstruct_heap<S: AsRef<str>>(tokens: &[S]) -> Option<DirectedStructure<HeapAttrs>> {
    let mut builder = StructureBuilder::new(StructureKind::Heap);
    for token in tokens {
        let token = token.as_ref();
        if is_edge(token) {
            builder.connect_token(token, true);
            continue;
        }
        if split_meta(token).is_some_and(|(key, _)| key == HEAP_SIZE) {
            continue;
        }
        match split_node_fields(token, 3) {
            Some(fields) => builder.declare(
                NodeId::new(fields[0]),
                HeapAttrs {
                    rating: fields[1].to_owned(),
                    index: fields[2].parse().ok(),
                },
            ),
            None => builder.skip(token),
        }
    }
    builder.finish(|nodes, edges| infer_root_by_in_degree(nodes.iter().map(StructureNode::id), edges))
}
