// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ids::ResourceId;

pub const COLUMN_ID: &str = "ID";
pub const COLUMN_TITLE: &str = "Title";
pub const COLUMN_URL: &str = "URL";
pub const COLUMN_TOPIC: &str = "Topic";
pub const COLUMN_DIFFICULTY: &str = "Difficulty";
pub const COLUMN_RATING: &str = "Rating";
pub const COLUMN_DURATION: &str = "Duration";

/// Column order the engine uses for every tabular reply.
pub const CANONICAL_COLUMNS: [&str; 7] = [
    COLUMN_ID,
    COLUMN_TITLE,
    COLUMN_URL,
    COLUMN_TOPIC,
    COLUMN_DIFFICULTY,
    COLUMN_RATING,
    COLUMN_DURATION,
];

/// A catalogued learning item as decoded from one table row.
///
/// Numeric columns are kept as the engine printed them; use the `*_value` accessors to parse.
/// An empty or malformed numeric cell parses to `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Resource {
    id: ResourceId,
    title: String,
    url: String,
    topic: String,
    difficulty: String,
    rating: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    extra: BTreeMap<String, String>,
}

impl Resource {
    pub fn new(id: impl Into<ResourceId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Builds a resource from `(column, value)` pairs. Unknown columns land in [`Resource::extra`].
    pub fn from_columns<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut resource = Self::default();
        for (column, value) in pairs {
            resource.set_column(column, value);
        }
        resource
    }

    pub fn set_column(&mut self, column: &str, value: &str) {
        let value = value.trim();
        match column.trim() {
            COLUMN_ID => self.id = ResourceId::new(value),
            COLUMN_TITLE => self.title = value.to_owned(),
            COLUMN_URL => self.url = value.to_owned(),
            COLUMN_TOPIC => self.topic = value.to_owned(),
            COLUMN_DIFFICULTY => self.difficulty = value.to_owned(),
            COLUMN_RATING => self.rating = value.to_owned(),
            COLUMN_DURATION => self.duration = Some(value.to_owned()),
            other => {
                self.extra.insert(other.to_owned(), value.to_owned());
            }
        }
    }

    /// Raw cell text for a column name, as it would appear in a table row.
    pub fn column(&self, column: &str) -> Option<&str> {
        match column {
            COLUMN_ID => Some(self.id.as_str()),
            COLUMN_TITLE => Some(&self.title),
            COLUMN_URL => Some(&self.url),
            COLUMN_TOPIC => Some(&self.topic),
            COLUMN_DIFFICULTY => Some(&self.difficulty),
            COLUMN_RATING => Some(&self.rating),
            COLUMN_DURATION => self.duration.as_deref(),
            other => self.extra.get(other).map(String::as_str),
        }
    }

    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    pub fn rating(&self) -> &str {
        &self.rating
    }

    pub fn duration(&self) -> Option<&str> {
        self.duration.as_deref()
    }

    pub fn extra(&self) -> &BTreeMap<String, String> {
        &self.extra
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.topic = topic.into();
    }

    pub fn set_difficulty(&mut self, difficulty: impl Into<String>) {
        self.difficulty = difficulty.into();
    }

    pub fn set_rating(&mut self, rating: impl Into<String>) {
        self.rating = rating.into();
    }

    pub fn set_duration<T: Into<String>>(&mut self, duration: Option<T>) {
        self.duration = duration.map(Into::into);
    }

    /// Difficulty on the engine's 0..=100 scale.
    pub fn difficulty_value(&self) -> Option<u8> {
        self.difficulty.trim().parse::<u8>().ok().filter(|d| *d <= 100)
    }

    /// Rating on the engine's 0.0..=5.0 scale.
    pub fn rating_value(&self) -> Option<f64> {
        self.rating
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|r| r.is_finite() && (0.0..=5.0).contains(r))
    }

    pub fn duration_minutes(&self) -> Option<u32> {
        self.duration.as_deref()?.trim().parse::<u32>().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::Resource;

    fn sample() -> Resource {
        Resource::from_columns([
            ("ID", " 012 "),
            ("Title", "Intro to Heaps"),
            ("URL", "https://example.test/heaps"),
            ("Topic", "Heaps"),
            ("Difficulty", "40"),
            ("Rating", "4.5"),
            ("Duration", "25"),
            ("Level", "core"),
        ])
    }

    #[test]
    fn columns_map_to_fields_and_unknown_columns_are_kept() {
        let resource = sample();
        assert_eq!(resource.id().as_str(), "012");
        assert_eq!(resource.title(), "Intro to Heaps");
        assert_eq!(resource.topic(), "Heaps");
        assert_eq!(resource.duration(), Some("25"));
        assert_eq!(resource.column("Level"), Some("core"));
        assert_eq!(resource.column("Nope"), None);
    }

    #[test]
    fn typed_accessors_parse_lazily() {
        let resource = sample();
        assert_eq!(resource.difficulty_value(), Some(40));
        assert_eq!(resource.rating_value(), Some(4.5));
        assert_eq!(resource.duration_minutes(), Some(25));
    }

    #[test]
    fn empty_or_out_of_range_numerics_are_none() {
        let mut resource = Resource::new("1", "Broken");
        assert_eq!(resource.difficulty_value(), None);
        assert_eq!(resource.rating_value(), None);
        assert_eq!(resource.duration_minutes(), None);

        resource.set_difficulty("101");
        resource.set_rating("5.5");
        resource.set_duration(Some(""));
        assert_eq!(resource.difficulty_value(), None);
        assert_eq!(resource.rating_value(), None);
        assert_eq!(resource.duration_minutes(), None);
    }

    #[test]
    fn duration_column_is_absent_for_older_engines() {
        let resource = Resource::from_columns([("ID", "1"), ("Title", "A")]);
        assert_eq!(resource.duration(), None);
        assert_eq!(resource.column("Duration"), None);
    }
}
