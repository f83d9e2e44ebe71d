// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::structure::{BlockRole, StructureKind};

pub const FIELD_OPERATION: &str = "OPERATION";
pub const FIELD_TOTAL_TIME_US: &str = "TOTAL_TIME_US";
pub const FIELD_RESULT_COUNT: &str = "RESULT_COUNT";
pub const FIELD_SORT_ALGORITHM: &str = "SORT_ALGORITHM";
pub const FIELD_DATA_STRUCTURE: &str = "DATA_STRUCTURE";

pub const TIMING_SUFFIX: &str = "_TIME_US";

/// Raw tokens captured between `<NAME>_START` and `<NAME>_END`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureBlock {
    name: String,
    tokens: Vec<String>,
}

impl StructureBlock {
    pub fn new(name: impl Into<String>, tokens: Vec<String>) -> Self {
        Self {
            name: name.into(),
            tokens,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The structure kind this block feeds, if its name is one the client understands.
    pub fn kind(&self) -> Option<StructureKind> {
        StructureKind::from_block_name(&self.name).map(|(kind, _)| kind)
    }
}

/// One decoded analysis section. Built once per reply and then only read.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalysisReport {
    fields: BTreeMap<String, String>,
    blocks: BTreeMap<String, StructureBlock>,
}

impl AnalysisReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert_field(key.into(), value.into());
        self
    }

    pub fn with_block(mut self, block: StructureBlock) -> Self {
        self.insert_block(block);
        self
    }

    pub(crate) fn insert_field(&mut self, key: String, value: String) {
        self.fields.insert(key, value);
    }

    pub(crate) fn insert_block(&mut self, block: StructureBlock) {
        self.blocks.insert(block.name.clone(), block);
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn blocks(&self) -> &BTreeMap<String, StructureBlock> {
        &self.blocks
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn block(&self, name: &str) -> Option<&StructureBlock> {
        self.blocks.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.blocks.is_empty()
    }

    /// The free-text operation tag (`SEARCH`, `PLAN`, ...).
    pub fn operation(&self) -> Option<&str> {
        self.field(FIELD_OPERATION)
    }

    /// `true` when the operation tag mentions `verb` (tags like `SEARCH+CACHE` count).
    pub fn operation_mentions(&self, verb: &str) -> bool {
        self.operation().is_some_and(|op| op.contains(verb))
    }

    pub fn metric_f64(&self, key: &str) -> Option<f64> {
        self.field(key)?.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }

    pub fn metric_u64(&self, key: &str) -> Option<u64> {
        self.field(key)?.trim().parse::<u64>().ok()
    }

    /// Every `*_TIME_US` field that parses, in key order.
    pub fn timings_us(&self) -> Vec<(&str, f64)> {
        self.fields
            .iter()
            .filter(|(key, _)| key.ends_with(TIMING_SUFFIX))
            .filter_map(|(key, value)| {
                let micros = value.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
                Some((key.as_str(), micros))
            })
            .collect()
    }

    /// Structure kinds with at least one block present.
    pub fn kinds(&self) -> BTreeSet<StructureKind> {
        self.blocks.values().filter_map(StructureBlock::kind).collect()
    }

    /// All tokens feeding `kind`, node blocks first, then combined blocks, then edge blocks.
    pub fn tokens_for(&self, kind: StructureKind) -> Vec<&str> {
        let mut parts: Vec<(BlockRole, &StructureBlock)> = self
            .blocks
            .values()
            .filter_map(|block| match StructureKind::from_block_name(block.name()) {
                Some((found, role)) if found == kind => Some((role, block)),
                _ => None,
            })
            .collect();
        parts.sort_by_key(|(role, _)| *role);

        parts
            .into_iter()
            .flat_map(|(_, block)| block.tokens().iter().map(String::as_str))
            .collect()
    }

    /// `true` when a block for `kind` exists, even an empty one.
    pub fn has_kind(&self, kind: StructureKind) -> bool {
        self.blocks
            .values()
            .any(|block| block.kind() == Some(kind))
    }
}
