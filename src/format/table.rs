// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tabular section of an engine reply.
//!
//! The engine prints a header line naming its columns (`ID,Title,...`) followed by one
//! comma-separated row per resource. There is no quoting: a cell can never contain a comma.

use smallvec::SmallVec;
use tracing::debug;

use super::protocol::ANALYSIS_START;
use crate::model::resource::{Resource, CANONICAL_COLUMNS};
use crate::model::table::ResourceTable;

/// The first two column names; a line starting with this is the header.
pub const HEADER_PREFIX: &str = "ID,Title";

const IGNORED_PREFIXES: [&str; 2] = ["---", "[CPP]"];

fn is_ignorable(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || IGNORED_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
}

/// Decodes the resource table of a reply.
///
/// Lines before the header are skipped. After it, blank and marker lines are skipped, rows with
/// fewer fields than the header are skipped (and counted), extra fields are ignored, and decoding
/// stops at the analysis section. Never fails: a reply without a header yields
/// [`ResourceTable::missing`].
pub fn decode_table<S: AsRef<str>>(lines: &[S]) -> ResourceTable {
    let Some(header_idx) = lines
        .iter()
        .position(|line| line.as_ref().trim().starts_with(HEADER_PREFIX))
    else {
        debug!(lines = lines.len(), "reply has no resource table header");
        return ResourceTable::missing();
    };

    let columns = lines[header_idx]
        .as_ref()
        .split(',')
        .map(|column| column.trim().to_owned())
        .collect::<Vec<_>>();
    let mut table = ResourceTable::new(columns);

    for (offset, line) in lines[header_idx + 1..].iter().enumerate() {
        let line = line.as_ref();
        if line.trim() == ANALYSIS_START {
            break;
        }
        if is_ignorable(line) {
            continue;
        }

        let fields: SmallVec<[&str; 8]> = line.split(',').collect();
        if fields.len() < table.columns().len() {
            debug!(
                line_no = header_idx + offset + 2,
                fields = fields.len(),
                expected = table.columns().len(),
                "skipping short resource row"
            );
            table.note_skipped();
            continue;
        }

        let row = Resource::from_columns(
            table
                .columns()
                .iter()
                .map(String::as_str)
                .zip(fields.iter().copied()),
        );
        table.push_row(row);
    }

    table
}

/// [`decode_table`] without the bookkeeping.
pub fn decode_resources<S: AsRef<str>>(lines: &[S]) -> Vec<Resource> {
    decode_table(lines).into_rows()
}

/// Decodes a `TITLES` reply: one title per line, no header.
pub fn decode_titles<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.as_ref().trim())
        .take_while(|line| *line != ANALYSIS_START)
        .filter(|line| !is_ignorable(line))
        .map(str::to_owned)
        .collect()
}

/// Prints resources the way the engine's list command does.
///
/// Commas inside a cell are replaced by spaces since the format cannot quote them. A missing
/// duration is printed as an empty cell.
pub fn export_table(resources: &[Resource]) -> Vec<String> {
    let mut lines = Vec::with_capacity(resources.len() + 1);
    lines.push(CANONICAL_COLUMNS.join(","));

    for resource in resources {
        let row = CANONICAL_COLUMNS
            .iter()
            .map(|column| resource.column(column).unwrap_or("").replace(',', " "))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(row);
    }

    lines
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{decode_resources, decode_table, decode_titles, export_table};
    use crate::model::Resource;

    #[test]
    fn decodes_the_documented_example() {
        let lines = ["ID,Title,URL,Topic,Difficulty,Rating", "1,A,u,T,10,4.5"];
        let rows = decode_resources(&lines);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id().as_str(), "1");
        assert_eq!(rows[0].title(), "A");
        assert_eq!(rows[0].difficulty(), "10");
        assert_eq!(rows[0].rating(), "4.5");
        assert_eq!(rows[0].duration(), None);
    }

    #[test]
    fn header_only_reply_is_empty_but_valid() {
        let table = decode_table(&["ID,Title,URL,Topic,Difficulty,Rating,Duration"]);
        assert!(table.header_found());
        assert!(table.is_empty());
    }

    #[rstest]
    #[case::no_lines(&[])]
    #[case::no_header(&["1,A,u,T,10,4.5", "TOTAL_TIME_US: 3"])]
    fn missing_header_yields_missing_table(#[case] lines: &[&str]) {
        let table = decode_table(lines);
        assert!(!table.header_found());
        assert!(table.is_empty());
    }

    #[test]
    fn short_rows_are_skipped_without_stopping() {
        let lines = [
            "[CPP] loading data",
            "ID,Title,URL,Topic,Difficulty,Rating,Duration",
            "1,A,u,T,10,4.5,30",
            "2,B,u",
            "",
            "--- separator ---",
            "3,C,u,T,20,3.5,15,unexpected-extra",
        ];
        let table = decode_table(&lines);
        assert_eq!(table.skipped_rows(), 1);
        let ids: Vec<&str> = table.rows().iter().map(|r| r.id().as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(table.rows()[1].duration(), Some("15"));
    }

    #[test]
    fn column_order_follows_the_header() {
        let lines = ["  ID,Title,Rating,Topic ", " 007 , Graphs 101 , 4.9 , Graphs "];
        let rows = decode_resources(&lines);
        assert_eq!(rows[0].id().as_str(), "007");
        assert_eq!(rows[0].title(), "Graphs 101");
        assert_eq!(rows[0].rating(), "4.9");
        assert_eq!(rows[0].topic(), "Graphs");
        assert_eq!(rows[0].difficulty(), "");
    }

    #[test]
    fn analysis_section_ends_the_table() {
        let lines = [
            "ID,Title,URL,Topic,Difficulty,Rating,Duration",
            "1,A,u,T,10,4.5,30",
            "---ANALYSIS---",
            "A,B,C,D,E,F,G",
            "---END_ANALYSIS---",
        ];
        assert_eq!(decode_resources(&lines).len(), 1);
    }

    #[test]
    fn titles_skip_markers_and_blanks() {
        let lines = ["Intro to Heaps", "", "[CPP] debug", "  Graph Basics  ", "---ANALYSIS---", "X"];
        assert_eq!(decode_titles(&lines), vec!["Intro to Heaps", "Graph Basics"]);
    }

    #[test]
    fn exported_tables_decode_back_to_the_same_resources() {
        let mut resource = Resource::new("12", "Tries");
        resource.set_url("https://example.test/tries");
        resource.set_topic("Strings");
        resource.set_difficulty("55");
        resource.set_rating("4.1");
        resource.set_duration(Some("40"));

        let lines = export_table(std::slice::from_ref(&resource));
        assert_eq!(lines[0], "ID,Title,URL,Topic,Difficulty,Rating,Duration");
        assert_eq!(lines[1], "12,Tries,https://example.test/tries,Strings,55,4.1,40");
        assert_eq!(decode_resources(&lines), vec![resource]);
    }

    #[test]
    fn export_keeps_rows_aligned_when_cells_contain_commas() {
        let resource = Resource::new("1", "Sorting, Searching");
        let lines = export_table(&[resource]);
        assert_eq!(lines[1], "1,Sorting  Searching,,,,,");
        let decoded = decode_resources(&lines);
        assert_eq!(decoded[0].title(), "Sorting  Searching");
        assert_eq!(decoded[0].duration(), Some(""));
    }
}
