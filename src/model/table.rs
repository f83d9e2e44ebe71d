// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::ids::ResourceId;
use super::resource::Resource;

/// The tabular section of one engine reply.
///
/// `header_found == false` means the reply carried no table at all (or a malformed one), which
/// callers treat differently from a well-formed header followed by zero rows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceTable {
    columns: Vec<String>,
    rows: Vec<Resource>,
    skipped_rows: usize,
    header_found: bool,
}

impl ResourceTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            skipped_rows: 0,
            header_found: true,
        }
    }

    /// A table for a reply that had no header line.
    pub fn missing() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Resource] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Resource> {
        self.rows
    }

    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    pub fn header_found(&self) -> bool {
        self.header_found
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn find(&self, id: &ResourceId) -> Option<&Resource> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub(crate) fn push_row(&mut self, row: Resource) {
        self.rows.push(row);
    }

    pub(crate) fn note_skipped(&mut self) {
        self.skipped_rows = self.skipped_rows.saturating_add(1);
    }
}
