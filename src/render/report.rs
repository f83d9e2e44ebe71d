// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::graph::render_graph;
use super::hierarchy::{render_heap, render_tree};
use super::linear::{render_cache, render_stack};
use super::trie::render_trie;
use super::RenderOptions;
use crate::model::report::{FIELD_OPERATION, TIMING_SUFFIX};
use crate::model::{AnalysisReport, Reconstruction, StructureKind};
use crate::reconstruct::reconstruct_report;

/// Human-readable message for a structure block that decoded to nothing.
pub fn empty_message(kind: StructureKind) -> &'static str {
    match kind {
        StructureKind::Tree => "tree structure is empty",
        StructureKind::Trie => "trie is empty",
        StructureKind::Heap => "heap is empty",
        StructureKind::Graph => "graph is empty",
        StructureKind::Cache => "cache is empty",
        StructureKind::Stack => "stack is empty",
    }
}

pub fn render_reconstruction(structure: &Reconstruction, options: &RenderOptions) -> String {
    match structure {
        Reconstruction::Empty(kind) => empty_message(*kind).to_owned(),
        Reconstruction::Tree(tree) => render_tree(tree),
        Reconstruction::Trie(trie) => render_trie(trie, options.trie),
        Reconstruction::Heap(heap) => render_heap(heap),
        Reconstruction::Graph(graph) => render_graph(graph),
        Reconstruction::Cache(cache) => render_cache(cache),
        Reconstruction::Stack(stack) => render_stack(stack),
    }
}

/// Operation, metrics, then every structure the report carries.
pub fn render_report(report: &AnalysisReport, options: &RenderOptions) -> String {
    let mut sections = Vec::new();

    let mut header = vec![format!("operation: {}", report.operation().unwrap_or("?"))];
    let metrics: Vec<(&str, String)> = report
        .fields()
        .iter()
        .filter(|(key, _)| key.as_str() != FIELD_OPERATION)
        .map(|(key, value)| (key.as_str(), format_metric(key, value)))
        .collect();
    let key_width = metrics.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    header.extend(
        metrics
            .into_iter()
            .map(|(key, value)| format!("  {key:<key_width$}  {value}")),
    );
    sections.push(header.join("\n"));

    for structure in reconstruct_report(report) {
        sections.push(format!(
            "{}:\n{}",
            structure.kind(),
            render_reconstruction(&structure, options)
        ));
    }

    sections.join("\n\n")
}

fn format_metric(key: &str, value: &str) -> String {
    if !key.ends_with(TIMING_SUFFIX) {
        return value.to_owned();
    }
    match value.trim().parse::<f64>() {
        Ok(micros) if micros.is_finite() => format!("{micros:.2} μs"),
        _ => value.to_owned(),
    }
}
