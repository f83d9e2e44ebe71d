// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Minimum `rapidfuzz` ratio (0..=1) for a fuzzy title match.
pub const MIN_TITLE_SCORE: f64 = 0.6;

/// Maps user input to one of the engine's exact titles.
///
/// The engine only plans for an exact title, so a case-insensitive exact match wins outright;
/// otherwise the closest title by edit ratio is taken if it clears [`MIN_TITLE_SCORE`]. Ties
/// keep the earlier title.
pub fn resolve_title<'a, S: AsRef<str>>(titles: &'a [S], input: &str) -> Option<&'a str> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Some(exact) = titles
        .iter()
        .map(AsRef::as_ref)
        .find(|title| title.trim().eq_ignore_ascii_case(input))
    {
        return Some(exact);
    }

    let needle = input.to_lowercase();
    let mut best: Option<(&str, f64)> = None;
    for title in titles.iter().map(AsRef::as_ref) {
        let score = rapidfuzz::fuzz::ratio(needle.chars(), title.to_lowercase().chars());
        if score < MIN_TITLE_SCORE {
            continue;
        }
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((title, score));
        }
    }
    best.map(|(title, _)| title)
}

#[cfg(test)]
mod tests {
    use super::resolve_title;

    const TITLES: [&str; 4] = [
        "Intro to Graphs",
        "Dijkstra's Algorithm",
        "Topological Sort",
        "Graph Traversal",
    ];

    #[test]
    fn exact_match_ignores_case() {
        assert_eq!(resolve_title(&TITLES, "topological sort"), Some("Topological Sort"));
    }

    #[test]
    fn typos_resolve_to_the_closest_title() {
        assert_eq!(resolve_title(&TITLES, "Dijkstra Algorithm"), Some("Dijkstra's Algorithm"));
        assert_eq!(resolve_title(&TITLES, "graph traversl"), Some("Graph Traversal"));
    }

    #[test]
    fn unrelated_input_resolves_to_nothing() {
        assert_eq!(resolve_title(&TITLES, "quantum chromodynamics"), None);
        assert_eq!(resolve_title(&TITLES, "   "), None);
    }
}
