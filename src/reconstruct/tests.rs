// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::rstest;

use super::{reconstruct, reconstruct_kind, reconstruct_report};
use crate::format::decode_analysis;
use crate::model::{AnalysisReport, NodeId, Reconstruction, StructureBlock, StructureKind};

fn block(name: &str, tokens: &[&str]) -> StructureBlock {
    StructureBlock::new(name, tokens.iter().map(|t| (*t).to_owned()).collect())
}

#[test]
fn search_reply_reconstructs_trie_and_cache() {
    let lines = [
        "ID,Title,URL,Topic,Difficulty,Rating",
        "1,Heaps,https://x.test,Heaps,40,4.5",
        "---ANALYSIS---",
        "OPERATION: SEARCH",
        "TRIE_NODES_START",
        "ROOT:0:0",
        "h:0:0",
        "he:1:1",
        "TRIE_NODES_END",
        "TRIE_EDGES_START",
        "ROOT->h:h",
        "h->he:e",
        "TRIE_EDGES_END",
        "CACHE_STRUCTURE_START",
        "CAPACITY:5",
        "SIZE:1",
        "NODE:1:Heaps:0",
        "CACHE_STRUCTURE_END",
        "---END_ANALYSIS---",
    ];
    let report = decode_analysis(&lines);
    let structures = reconstruct_report(&report);

    let kinds: Vec<StructureKind> = structures.iter().map(Reconstruction::kind).collect();
    assert_eq!(kinds, vec![StructureKind::Trie, StructureKind::Cache]);

    let Reconstruction::Trie(trie) = &structures[0] else {
        panic!("expected a trie, got {:?}", structures[0]);
    };
    assert_eq!(trie.root(), &NodeId::new("ROOT"));
    assert_eq!(trie.len(), 3);
}

#[test]
fn empty_trie_block_is_empty_not_missing() {
    let report = AnalysisReport::new().with_block(block("TRIE", &[]));
    assert_eq!(
        reconstruct(&report, StructureKind::Trie),
        Some(Reconstruction::Empty(StructureKind::Trie))
    );
    assert_eq!(reconstruct(&report, StructureKind::Tree), None);
}

#[test]
fn bare_tree_block_mixes_nodes_and_edges() {
    let report = AnalysisReport::new().with_block(block(
        "TREE",
        &["R:2:0", "A:1:0", "B:1:0", "R->A:L", "R->B:R"],
    ));
    let Some(Reconstruction::Tree(tree)) = reconstruct(&report, StructureKind::Tree) else {
        panic!("expected a tree");
    };
    assert_eq!(tree.root(), &NodeId::new("R"));
    assert!(tree
        .nodes()
        .iter()
        .filter_map(|node| node.attrs())
        .all(|attrs| attrs.is_balanced() == Some(true)));
}

#[rstest]
#[case::tree(StructureKind::Tree)]
#[case::trie(StructureKind::Trie)]
#[case::heap(StructureKind::Heap)]
#[case::graph(StructureKind::Graph)]
#[case::cache(StructureKind::Cache)]
#[case::stack(StructureKind::Stack)]
fn no_tokens_is_empty_for_every_kind(#[case] kind: StructureKind) {
    let tokens: [&str; 0] = [];
    assert_eq!(reconstruct_kind(kind, &tokens), Reconstruction::Empty(kind));
}

#[rstest]
#[case::tree(StructureKind::Tree, &["R:1:0"])]
#[case::trie(StructureKind::Trie, &["ROOT->a:a"])]
#[case::heap(StructureKind::Heap, &["HEAP_SIZE:1", "NODE:1:4.0:0"])]
#[case::graph(StructureKind::Graph, &["A", "B"])]
fn zero_nodes_or_zero_edges_is_empty(#[case] kind: StructureKind, #[case] tokens: &[&str]) {
    assert!(reconstruct_kind(kind, tokens).is_empty());
}

#[test]
fn garbage_tokens_never_panic() {
    let tokens = ["->", ":::", "", "a->", "->b", "NODE:", "EDGE:->", "ITEM::", "SIZE:"];
    for kind in StructureKind::ALL {
        let _ = reconstruct_kind(kind, &tokens);
    }
}
