// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::text::truncate_with_ellipsis;
use crate::model::LinearStructure;

const MAX_LABEL_LEN: usize = 50;

/// `size/capacity (MRU → LRU)` followed by entries, most recently used first.
pub fn render_cache(cache: &LinearStructure) -> String {
    let capacity = cache
        .capacity()
        .map_or_else(|| "?".to_owned(), |capacity| capacity.to_string());
    let header = format!("cache {}/{capacity} (MRU → LRU)", cache.size());
    render_entries(header, cache, "MRU", "cache is empty")
}

/// `size (Top → Bottom)` followed by entries, top first.
pub fn render_stack(stack: &LinearStructure) -> String {
    let header = format!("stack {} (Top → Bottom)", stack.size());
    render_entries(header, stack, "TOP", "stack is empty")
}

fn render_entries(header: String, structure: &LinearStructure, head_tag: &str, empty: &str) -> String {
    let mut lines = vec![header];
    if structure.is_empty() {
        lines.push(empty.to_owned());
    }
    for (idx, entry) in structure.entries().iter().enumerate() {
        let tag = if idx == 0 {
            head_tag.to_owned()
        } else {
            format!("#{}", idx + 1)
        };
        lines.push(format!(
            "[{tag}] {} {}",
            entry.id(),
            truncate_with_ellipsis(entry.label(), MAX_LABEL_LEN)
        ));
    }
    lines.join("\n")
}
