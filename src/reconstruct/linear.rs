// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use tracing::debug;

use crate::format::token::{split_entry, split_meta, ITEM_PREFIX, NODE_PREFIX};
use crate::model::{LinearEntry, LinearStructure, ResourceId, StructureKind};

pub const CAPACITY: &str = "CAPACITY";
pub const SIZE: &str = "SIZE";

/// Decodes the LRU cache block: `CAPACITY:n`, `SIZE:n` and `NODE:id:label:position` entries,
/// most recently used first.
pub fn decode_cache<S: AsRef<str>>(tokens: &[S]) -> Option<LinearStructure> {
    decode_linear(StructureKind::Cache, NODE_PREFIX, tokens)
}

/// Decodes the browsing-history stack block: `SIZE:n` and `ITEM:id:label:position` entries,
/// top first.
pub fn decode_stack<S: AsRef<str>>(tokens: &[S]) -> Option<LinearStructure> {
    decode_linear(StructureKind::Stack, ITEM_PREFIX, tokens)
}

fn decode_linear<S: AsRef<str>>(
    kind: StructureKind,
    entry_prefix: &str,
    tokens: &[S],
) -> Option<LinearStructure> {
    if tokens.is_empty() {
        return None;
    }

    let mut entries = Vec::new();
    let mut size = None;
    let mut capacity = None;

    for token in tokens {
        let token = token.as_ref().trim();
        if token.starts_with(entry_prefix) {
            match split_entry(token) {
                Some((id, label, position)) => {
                    entries.push(LinearEntry::new(ResourceId::new(id), label, position));
                }
                None => debug!(%kind, token, "skipping malformed entry"),
            }
            continue;
        }

        match split_meta(token) {
            Some((SIZE, value)) => size = parse_count(kind, token, value),
            Some((CAPACITY, value)) if kind == StructureKind::Cache => {
                capacity = parse_count(kind, token, value);
            }
            _ => debug!(%kind, token, "skipping unrecognised token"),
        }
    }

    Some(LinearStructure::new(entries, size, capacity))
}

fn parse_count(kind: StructureKind, token: &str, value: &str) -> Option<usize> {
    let parsed = value.parse().ok();
    if parsed.is_none() {
        debug!(%kind, token, "ignoring unparseable count");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::{decode_cache, decode_stack};

    #[test]
    fn cache_keeps_token_order_with_interleaved_metadata() {
        let cache = decode_cache(&[
            "NODE:4:Graphs: a primer:0",
            "CAPACITY:5",
            "NODE:2:Heaps:1",
            "SIZE:2",
        ])
        .expect("cache");

        let ids: Vec<&str> = cache.entries().iter().map(|e| e.id().as_str()).collect();
        assert_eq!(ids, vec!["4", "2"]);
        assert_eq!(cache.entries()[0].label(), "Graphs: a primer");
        assert_eq!(cache.entries()[1].position_value(), Some(1));
        assert_eq!(cache.capacity(), Some(5));
        assert_eq!(cache.size(), 2);
    }

    #[test]
    fn stack_is_top_first_and_has_no_capacity() {
        let stack = decode_stack(&["SIZE:2", "ITEM:9:Tries:0", "ITEM:8:AVL:1", "CAPACITY:3"])
            .expect("stack");
        let ids: Vec<&str> = stack.entries().iter().map(|e| e.id().as_str()).collect();
        assert_eq!(ids, vec!["9", "8"]);
        assert_eq!(stack.capacity(), None);
        assert_eq!(stack.declared_size(), Some(2));
    }

    #[test]
    fn metadata_only_is_built_but_has_no_entries() {
        let cache = decode_cache(&["CAPACITY:5", "SIZE:0"]).expect("cache");
        assert!(cache.is_empty());
        assert_eq!(cache.size(), 0);
    }

    #[test]
    fn no_tokens_is_empty() {
        assert!(decode_cache::<&str>(&[]).is_none());
        assert!(decode_stack::<&str>(&[]).is_none());
    }

    #[test]
    fn size_falls_back_to_entry_count() {
        let stack = decode_stack(&["ITEM:1:A:0", "SIZE:lots"]).expect("stack");
        assert_eq!(stack.declared_size(), None);
        assert_eq!(stack.size(), 1);
    }
}
