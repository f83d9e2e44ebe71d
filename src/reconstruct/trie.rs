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
use crate::model::{DirectedStructure, NodeId, StructureKind, StructureNode, TrieAttrs};

/// Id the prefix index uses for its root node.
pub const TRIE_ROOT: &str = "ROOT";

const END_OF_WORD: &str = "1";

/// Rebuilds the prefix index from `id:end_flag:count` nodes and `parent->child:char` edges.
///
/// Children come out sorted by `(char, child id)`.
pub fn reconstruct_trie<S: AsRef<str>>(tokens: &[S]) -> Option<DirectedStructure<TrieAttrs>> {
    let mut builder = StructureBuilder::new(StructureKind::Trie);
    for token in tokens {
        let token = token.as_ref();
        if is_edge(token) {
            builder.connect_token(token, true);
            continue;
        }
        match split_node_fields(token, 3) {
            Some(fields) => builder.declare(
                NodeId::new(fields[0]),
                TrieAttrs {
                    end_of_word: fields[1] == END_OF_WORD,
                    resource_count: fields[2].parse().ok(),
                },
            ),
            None => builder.skip(token),
        }
    }

    let mut trie = builder.finish(|nodes, edges| {
        nodes
            .iter()
            .map(StructureNode::id)
            .find(|id| id.as_str() == TRIE_ROOT)
            .cloned()
            .or_else(|| infer_root(nodes.iter().map(StructureNode::id), edges))
    })?;
    trie.sort_children_by(|a, b| a.label().cmp(&b.label()).then_with(|| a.to().cmp(b.to())));
    Some(trie)
}
