// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use regex::RegexBuilder;

use crate::model::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceSearchMode {
    #[default]
    Substring,
    Regex,
}

/// Narrows a listing client-side by title or topic, without another engine round trip.
pub fn filter_resources<'a>(
    resources: &'a [Resource],
    needle: &str,
    mode: ResourceSearchMode,
    case_insensitive: bool,
) -> Result<Vec<&'a Resource>, regex::Error> {
    match mode {
        ResourceSearchMode::Substring => {
            if case_insensitive {
                let needle_lower = needle.to_lowercase();
                Ok(resources
                    .iter()
                    .filter(|r| {
                        r.title().to_lowercase().contains(&needle_lower)
                            || r.topic().to_lowercase().contains(&needle_lower)
                    })
                    .collect())
            } else {
                Ok(resources
                    .iter()
                    .filter(|r| r.title().contains(needle) || r.topic().contains(needle))
                    .collect())
            }
        }
        ResourceSearchMode::Regex => {
            let regex = RegexBuilder::new(needle)
                .case_insensitive(case_insensitive)
                .build()?;
            Ok(resources
                .iter()
                .filter(|r| regex.is_match(r.title()) || regex.is_match(r.topic()))
                .collect())
        }
    }
}
