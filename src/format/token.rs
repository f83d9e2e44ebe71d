// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Token grammar shared by the structure blocks.
//!
//! - edges: `parent->child` or `parent->child:label`, optionally prefixed with `EDGE:`
//! - nodes: colon-separated positional fields, optionally prefixed with `NODE:`; the id is the
//!   leading field and may itself contain `:`
//! - metadata: `KEY:value`

use memchr::memmem;
use smallvec::SmallVec;

pub const EDGE_ARROW: &str = "->";
pub const NODE_PREFIX: &str = "NODE:";
pub const EDGE_PREFIX: &str = "EDGE:";
pub const ITEM_PREFIX: &str = "ITEM:";

const FIELD_SEPARATOR: char = ':';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeToken<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub label: Option<&'a str>,
}

fn find_arrow(token: &str) -> Option<usize> {
    memmem::find(token.as_bytes(), EDGE_ARROW.as_bytes())
}

pub fn is_edge(token: &str) -> bool {
    find_arrow(token).is_some()
}

/// Strips one leading `NODE:` / `EDGE:` / `ITEM:` record prefix.
pub fn strip_record_prefix(token: &str) -> &str {
    let token = token.trim();
    [NODE_PREFIX, EDGE_PREFIX, ITEM_PREFIX]
        .iter()
        .find_map(|prefix| token.strip_prefix(prefix))
        .unwrap_or(token)
}

/// Splits an edge token. With `labeled == false` the whole right-hand side is the target.
pub fn split_edge(token: &str, labeled: bool) -> Option<EdgeToken<'_>> {
    let token = strip_record_prefix(token);
    let arrow = find_arrow(token)?;
    let from = token[..arrow].trim();
    let rhs = token[arrow + EDGE_ARROW.len()..].trim();

    let (to, label) = match rhs.rsplit_once(FIELD_SEPARATOR) {
        Some((to, label)) if labeled => {
            let label = label.trim();
            (to.trim(), (!label.is_empty()).then_some(label))
        }
        _ => (rhs, None),
    };

    if from.is_empty() || to.is_empty() {
        return None;
    }
    Some(EdgeToken { from, to, label })
}

/// Splits a node descriptor into exactly `count` fields, splitting from the right so the id
/// keeps any separators it contains. `None` when there are fewer than `count` fields.
pub fn split_node_fields(token: &str, count: usize) -> Option<SmallVec<[&str; 4]>> {
    if count == 0 {
        return None;
    }
    let token = strip_record_prefix(token);
    let mut fields: SmallVec<[&str; 4]> = token.rsplitn(count, FIELD_SEPARATOR).map(str::trim).collect();
    if fields.len() < count || fields.last().is_some_and(|id| id.is_empty()) {
        return None;
    }
    fields.reverse();
    Some(fields)
}

/// Splits a linear entry `id:label:position`; the label may contain separators.
pub fn split_entry(token: &str) -> Option<(&str, &str, &str)> {
    let token = strip_record_prefix(token);
    let (id, rest) = token.split_once(FIELD_SEPARATOR)?;
    let (label, position) = rest.rsplit_once(FIELD_SEPARATOR)?;
    let id = id.trim();
    if id.is_empty() {
        return None;
    }
    Some((id, label.trim(), position.trim()))
}

/// Splits a `KEY:value` metadata token.
pub fn split_meta(token: &str) -> Option<(&str, &str)> {
    let (key, value) = token.trim().split_once(FIELD_SEPARATOR)?;
    Some((key.trim(), value.trim()))
}
