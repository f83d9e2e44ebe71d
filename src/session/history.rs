// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use crate::format::export_table;
use crate::model::Resource;

/// Where a resource was opened from: the command whose reply listed it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewContext {
    command: String,
}

impl ViewContext {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    resource: Resource,
    context: ViewContext,
}

impl HistoryEntry {
    pub fn new(resource: Resource, context: ViewContext) -> Self {
        Self { resource, context }
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    pub fn context(&self) -> &ViewContext {
        &self.context
    }
}

/// Client-side LIFO of displayed resources, giving the stateless engine a `BACK` command.
///
/// The top entry is the resource currently on screen. [`NavigationHistory::back`] drops it and
/// re-displays the one underneath.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NavigationHistory {
    entries: Vec<HistoryEntry>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Pops the current entry and returns a one-row table reply for the new top.
    ///
    /// `None` when there is nothing to go back to: the history was already empty, or the popped
    /// entry was the last one. Never fails.
    pub fn back(&mut self) -> Option<Vec<String>> {
        self.entries.pop()?;
        let top = self.entries.last()?;
        Some(export_table(std::slice::from_ref(top.resource())))
    }

    pub fn top(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{HistoryEntry, NavigationHistory, ViewContext};
    use crate::format::decode_resources;
    use crate::model::Resource;

    fn entry(id: &str, title: &str) -> HistoryEntry {
        let mut resource = Resource::new(id, title);
        resource.set_url(format!("https://example.test/{id}"));
        resource.set_topic("Graphs");
        resource.set_difficulty("30");
        resource.set_rating("4.0");
        resource.set_duration(Some("15"));
        HistoryEntry::new(resource, ViewContext::new("LIST"))
    }

    #[test]
    fn back_walks_down_the_stack_then_stays_empty() {
        let mut history = NavigationHistory::new();
        for (id, title) in [("1", "e1"), ("2", "e2"), ("3", "e3")] {
            history.push(entry(id, title));
        }

        let reply = history.back().expect("e2 is shown");
        assert_eq!(decode_resources(&reply)[0].title(), "e2");

        let reply = history.back().expect("e1 is shown");
        assert_eq!(decode_resources(&reply)[0].title(), "e1");
        assert_eq!(history.len(), 1);
        assert_eq!(history.top().map(|e| e.resource().title()), Some("e1"));

        assert_eq!(history.back(), None);
        assert!(history.is_empty());

        assert_eq!(history.back(), None);
        assert!(history.is_empty());
    }

    #[test]
    fn synthesised_reply_decodes_like_an_engine_row() {
        let mut history = NavigationHistory::new();
        history.push(entry("7", "Heaps, gently"));
        history.push(entry("8", "Tries"));

        let reply = history.back().expect("reply");
        assert_eq!(reply.len(), 2);
        assert_eq!(reply[0], "ID,Title,URL,Topic,Difficulty,Rating,Duration");

        let rows = decode_resources(&reply);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id().as_str(), "7");
        assert_eq!(rows[0].difficulty(), "30");
        assert_eq!(rows[0].duration_minutes(), Some(15));
    }
}
