// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use crate::model::Resource;

/// Resources the user committed to studying, in the order they were added.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StudySession {
    items: Vec<Resource>,
}

impl StudySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `resource` unless one with the same title is already in the session.
    pub fn add(&mut self, resource: Resource) -> bool {
        if self.contains_title(resource.title()) {
            return false;
        }
        self.items.push(resource);
        true
    }

    /// Adds every new resource; returns how many were added.
    pub fn add_all(&mut self, resources: impl IntoIterator<Item = Resource>) -> usize {
        resources.into_iter().map(|resource| self.add(resource)).filter(|added| *added).count()
    }

    pub fn remove(&mut self, index: usize) -> Option<Resource> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.items.iter().any(|item| item.title() == title)
    }

    pub fn items(&self) -> &[Resource] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of every parseable duration; items without one count as zero.
    pub fn total_minutes(&self) -> u32 {
        self.items
            .iter()
            .filter_map(Resource::duration_minutes)
            .fold(0, u32::saturating_add)
    }
}
