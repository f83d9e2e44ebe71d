// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    let len = text_len(text);
    if len <= max_len {
        return text.to_owned();
    }

    if max_len == 1 {
        return "…".to_owned();
    }

    let mut out: String = text.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

/// Keeps the last `max_len` chars, marking the cut at the front.
pub(crate) fn truncate_front_with_ellipsis(text: &str, max_len: usize) -> String {
    let len = text_len(text);
    if len <= max_len {
        return text.to_owned();
    }
    if max_len == 0 {
        return String::new();
    }

    let mut out = String::from("…");
    out.extend(text.chars().skip(len - (max_len - 1)));
    out
}

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Pads `text` with trailing spaces to `width` chars.
pub(crate) fn pad_end(text: &str, width: usize) -> String {
    let mut out = text.to_owned();
    let len = text_len(text);
    if len < width {
        out.extend(std::iter::repeat(' ').take(width - len));
    }
    out
}

/// Joins lines and drops trailing spaces on each.
pub(crate) fn join_trimmed(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| line.trim_end_matches(' '))
        .collect::<Vec<_>>()
        .join("\n")
}
