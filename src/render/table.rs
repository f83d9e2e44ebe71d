// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::text::{join_trimmed, pad_end, text_len, truncate_with_ellipsis};
use crate::model::Resource;

const COLUMN_GAP: &str = "  ";
const MAX_TITLE_LEN: usize = 48;
const MAX_TOPIC_LEN: usize = 20;

fn id_cell(resource: &Resource) -> &str {
    resource.id().as_str()
}

fn duration_cell(resource: &Resource) -> &str {
    resource.duration().unwrap_or("")
}

struct Column {
    name: &'static str,
    max_len: usize,
    cell: fn(&Resource) -> &str,
}

const COLUMNS: [Column; 6] = [
    Column {
        name: "ID",
        max_len: 8,
        cell: id_cell,
    },
    Column {
        name: "Title",
        max_len: MAX_TITLE_LEN,
        cell: Resource::title,
    },
    Column {
        name: "Topic",
        max_len: MAX_TOPIC_LEN,
        cell: Resource::topic,
    },
    Column {
        name: "Diff",
        max_len: 4,
        cell: Resource::difficulty,
    },
    Column {
        name: "Rating",
        max_len: 6,
        cell: Resource::rating,
    },
    Column {
        name: "Min",
        max_len: 5,
        cell: duration_cell,
    },
];

/// Column-aligned resource listing. Long cells are cut with `…`.
pub fn render_resources(resources: &[Resource]) -> String {
    if resources.is_empty() {
        return "no resources".to_owned();
    }

    let with_duration = resources.iter().any(|r| r.duration().is_some());
    let columns: Vec<&Column> = COLUMNS
        .iter()
        .filter(|column| with_duration || column.name != "Min")
        .collect();

    let cells: Vec<Vec<String>> = resources
        .iter()
        .map(|resource| {
            columns
                .iter()
                .map(|column| truncate_with_ellipsis((column.cell)(resource), column.max_len))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            cells
                .iter()
                .map(|row| text_len(&row[idx]))
                .chain(std::iter::once(text_len(column.name)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let row_line = |row: Vec<String>| {
        row.iter()
            .zip(&widths)
            .map(|(cell, width)| pad_end(cell, *width))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP)
    };

    let mut lines = Vec::with_capacity(resources.len() + 2);
    lines.push(row_line(columns.iter().map(|c| c.name.to_owned()).collect()));
    let total = widths.iter().sum::<usize>() + COLUMN_GAP.len() * (widths.len() - 1);
    lines.push("─".repeat(total));
    lines.extend(cells.into_iter().map(row_line));
    join_trimmed(&lines)
}
