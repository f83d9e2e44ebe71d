// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Synthetic engine replies shared by the benches.

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    Medium,
    Large,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Small, Case::Medium, Case::Large];

    pub fn id(self) -> &'static str {
        match self {
            Case::Small => "small",
            Case::Medium => "medium",
            Case::Large => "large",
        }
    }

    pub fn rows(self) -> usize {
        match self {
            Case::Small => 16,
            Case::Medium => 256,
            Case::Large => 4096,
        }
    }
}

/// A SEARCH-shaped reply: table, timing fields, a split trie and a cache block.
pub fn search_reply(case: Case) -> Vec<String> {
    let rows = case.rows();
    let mut lines = Vec::with_capacity(rows * 4 + 16);
    lines.push("ID,Title,URL,Topic,Difficulty,Rating,Duration".to_owned());
    for i in 0..rows {
        lines.push(format!(
            "{i},Resource number {i},https://x.test/{i},Topic {},{},{}.{},{}",
            i % 12,
            i % 101,
            i % 5,
            i % 10,
            15 + i % 60
        ));
    }

    lines.push("---ANALYSIS---".to_owned());
    lines.push("OPERATION: SEARCH".to_owned());
    lines.push("TOTAL_TIME_US: 812.25".to_owned());
    lines.push("TRIE_SEARCH_TIME_US: 14.5".to_owned());
    lines.push(format!("RESULT_COUNT: {rows}"));

    // One trie path per row, sharing the "r" prefix.
    lines.push("TRIE_NODES_START".to_owned());
    lines.push("ROOT:0:0".to_owned());
    for i in 0..rows {
        lines.push(format!("r{i}:1:1"));
    }
    lines.push("TRIE_NODES_END".to_owned());
    lines.push("TRIE_EDGES_START".to_owned());
    for i in 0..rows {
        let label = char::from(b'a' + (i % 26) as u8);
        lines.push(format!("ROOT->r{i}:{label}"));
    }
    lines.push("TRIE_EDGES_END".to_owned());

    let cached = rows.min(64);
    lines.push("CACHE_STRUCTURE_START".to_owned());
    lines.push("CAPACITY:64".to_owned());
    lines.push(format!("SIZE:{cached}"));
    for i in 0..cached {
        lines.push(format!("NODE:{i}:Resource number {i}:{i}"));
    }
    lines.push("CACHE_STRUCTURE_END".to_owned());
    lines.push("---END_ANALYSIS---".to_owned());
    lines
}

/// A PLAN-shaped analysis block: a layered prerequisite graph.
pub fn plan_reply(case: Case) -> Vec<String> {
    let nodes = case.rows();
    let mut lines = vec!["---ANALYSIS---".to_owned(), "OPERATION: PLAN".to_owned()];
    lines.push("GRAPH_NODES_START".to_owned());
    for i in 0..nodes {
        lines.push(format!("T{i}"));
    }
    lines.push("GRAPH_NODES_END".to_owned());
    lines.push("GRAPH_EDGES_START".to_owned());
    for i in 1..nodes {
        lines.push(format!("T{}->T{i}", i / 2));
        if i >= 3 {
            lines.push(format!("T{}->T{i}", i - 3));
        }
    }
    lines.push("GRAPH_EDGES_END".to_owned());
    lines.push("---END_ANALYSIS---".to_owned());
    lines
}
