// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Line protocol of the analysis section.
//!
//! ```text
//! ---ANALYSIS---
//! OPERATION: SEARCH
//! TOTAL_TIME_US: 41.5
//! TRIE_START
//! ROOT->a:a
//! TRIE_END
//! ---END_ANALYSIS---
//! ```
//!
//! Block sentinels close only when their name matches the open block. A mismatched `_END` line
//! is dropped and the open block keeps consuming lines until a matching `_END` shows up, the
//! analysis section ends, or another block starts. Existing engine output relies on this.

use std::fmt;

use tracing::debug;

use crate::model::report::{AnalysisReport, StructureBlock};

pub const ANALYSIS_START: &str = "---ANALYSIS---";
pub const ANALYSIS_END: &str = "---END_ANALYSIS---";
pub const BLOCK_START_SUFFIX: &str = "_START";
pub const BLOCK_END_SUFFIX: &str = "_END";
const FIELD_SEPARATOR: char = ':';

struct OpenBlock {
    name: String,
    tokens: Vec<String>,
}

/// Decodes the analysis section of a raw reply. Total: malformed input yields a partial report.
pub fn decode_analysis<S: AsRef<str>>(lines: &[S]) -> AnalysisReport {
    let mut report = AnalysisReport::new();
    let mut in_analysis = false;
    let mut open: Option<OpenBlock> = None;

    for (idx, line) in lines.iter().enumerate() {
        let line = line.as_ref().trim();
        let line_no = idx + 1;

        if line == ANALYSIS_START {
            in_analysis = true;
            continue;
        }
        if line == ANALYSIS_END {
            if let Some(block) = open.take() {
                debug!(line_no, block = %block.name, "analysis ended inside an open block; dropping it");
            }
            return report;
        }

        if let Some(name) = line.strip_suffix(BLOCK_START_SUFFIX) {
            if let Some(previous) = open.replace(OpenBlock {
                name: name.to_owned(),
                tokens: Vec::new(),
            }) {
                debug!(line_no, block = %previous.name, "block reopened before it was closed; dropping it");
            }
            continue;
        }
        if let Some(name) = line.strip_suffix(BLOCK_END_SUFFIX) {
            match open.take() {
                Some(block) if block.name == name => {
                    report.insert_block(StructureBlock::new(block.name, block.tokens));
                }
                Some(block) => {
                    debug!(line_no, open = %block.name, found = name, "mismatched block end; block stays open");
                    open = Some(block);
                }
                None => debug!(line_no, found = name, "block end without an open block"),
            }
            continue;
        }

        if let Some(block) = open.as_mut() {
            block.tokens.push(line.to_owned());
        } else if in_analysis {
            if let Some((key, value)) = line.split_once(FIELD_SEPARATOR) {
                report.insert_field(key.trim().to_owned(), value.trim().to_owned());
            }
        }
    }

    if let Some(block) = open {
        debug!(block = %block.name, "input ended inside an open block; dropping it");
    }

    report
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisExportError {
    InvalidKey { key: String },
    InvalidValue { key: String, value: String },
    InvalidBlockName { name: String },
    InvalidToken { block: String, token: String },
}

impl fmt::Display for AnalysisExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey { key } => write!(
                f,
                "cannot export field key {key:?}: keys must be non-empty, trimmed, single-line and contain no ':'"
            ),
            Self::InvalidValue { key, value } => write!(
                f,
                "cannot export value for {key}: {value:?} is not a trimmed single line"
            ),
            Self::InvalidBlockName { name } => write!(
                f,
                "cannot export block name {name:?}: names must be non-empty, trimmed and single-line"
            ),
            Self::InvalidToken { block, token } => write!(
                f,
                "cannot export token {token:?} in block {block}: it would be read back as a sentinel or is not a trimmed single line"
            ),
        }
    }
}

impl std::error::Error for AnalysisExportError {}

fn is_single_trimmed_line(text: &str) -> bool {
    !text.contains(['\n', '\r']) && text.trim() == text
}

fn is_sentinel(line: &str) -> bool {
    line == ANALYSIS_START
        || line == ANALYSIS_END
        || line.ends_with(BLOCK_START_SUFFIX)
        || line.ends_with(BLOCK_END_SUFFIX)
}

fn validate_field(key: &str, value: &str) -> Result<(), AnalysisExportError> {
    if key.is_empty() || key.contains(FIELD_SEPARATOR) || !is_single_trimmed_line(key) {
        return Err(AnalysisExportError::InvalidKey {
            key: key.to_owned(),
        });
    }
    let line = format!("{key}: {value}");
    if !is_single_trimmed_line(value) || is_sentinel(line.trim_end()) {
        return Err(AnalysisExportError::InvalidValue {
            key: key.to_owned(),
            value: value.to_owned(),
        });
    }
    Ok(())
}

fn validate_block(block: &StructureBlock) -> Result<(), AnalysisExportError> {
    let name = block.name();
    if name.is_empty() || !is_single_trimmed_line(name) {
        return Err(AnalysisExportError::InvalidBlockName {
            name: name.to_owned(),
        });
    }
    for token in block.tokens() {
        if !is_single_trimmed_line(token) || is_sentinel(token) {
            return Err(AnalysisExportError::InvalidToken {
                block: name.to_owned(),
                token: token.clone(),
            });
        }
    }
    Ok(())
}

/// Serializes a report back into the analysis section wire form.
///
/// Decoding the output with [`decode_analysis`] reproduces the same fields and blocks. Reports
/// that could not survive that round trip are rejected.
pub fn export_analysis(report: &AnalysisReport) -> Result<String, AnalysisExportError> {
    let mut out = String::new();
    out.push_str(ANALYSIS_START);
    out.push('\n');

    for (key, value) in report.fields() {
        validate_field(key, value)?;
        out.push_str(key);
        out.push_str(": ");
        out.push_str(value);
        out.push('\n');
    }

    for block in report.blocks().values() {
        validate_block(block)?;
        out.push_str(block.name());
        out.push_str(BLOCK_START_SUFFIX);
        out.push('\n');
        for token in block.tokens() {
            out.push_str(token);
            out.push('\n');
        }
        out.push_str(block.name());
        out.push_str(BLOCK_END_SUFFIX);
        out.push('\n');
    }

    out.push_str(ANALYSIS_END);
    out.push('\n');
    Ok(out)
}
