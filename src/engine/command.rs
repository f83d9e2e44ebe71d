// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The engine's command grammar: `VERB` or `VERB|arg|arg`, one command per invocation.

use std::fmt;

use serde::Serialize;

const SEPARATOR: char = '|';

pub const DEFAULT_SUGGEST_COUNT: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortKey {
    Difficulty,
    Topic,
    Title,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Difficulty => "DIFFICULTY",
            Self::Topic => "TOPIC",
            Self::Title => "TITLE",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "DIFFICULTY" => Some(Self::Difficulty),
            "TOPIC" => Some(Self::Topic),
            "TITLE" => Some(Self::Title),
            _ => None,
        }
    }
}

/// Difficulty bands used by recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Level {
    #[default]
    All,
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 4] = [Self::All, Self::Beginner, Self::Intermediate, Self::Advanced];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Beginner => "BEGINNER",
            Self::Intermediate => "INTERMEDIATE",
            Self::Advanced => "ADVANCED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(value))
    }

    /// Whether a difficulty on the 0..=100 scale falls in this band.
    pub fn contains(self, difficulty: u8) -> bool {
        match self {
            Self::All => true,
            Self::Beginner => difficulty <= 35,
            Self::Intermediate => (36..=70).contains(&difficulty),
            Self::Advanced => difficulty > 70,
        }
    }
}

/// One request to the engine.
///
/// [`Command::parse`] accepts any text: input that does not match a known shape is kept verbatim
/// as [`Command::Raw`] and forwarded, so the engine stays the judge of what it understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    List { sort: Option<SortKey> },
    Search { term: String },
    Plan { title: String },
    Cram { topic: String, minutes: u32 },
    Suggest { count: u32, level: Level },
    Titles,
    Back,
    Raw { text: String },
}

impl Command {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let (verb, rest) = match input.split_once(SEPARATOR) {
            Some((verb, rest)) => (verb.trim(), Some(rest)),
            None => (input, None),
        };
        let raw = || Self::Raw {
            text: input.to_owned(),
        };

        match (verb.to_ascii_uppercase().as_str(), rest) {
            ("LIST", None) => Self::List { sort: None },
            ("LIST", Some(mode)) => SortKey::parse(mode).map_or_else(raw, |sort| Self::List { sort: Some(sort) }),
            ("SEARCH", Some(term)) => Self::Search {
                term: term.trim().to_owned(),
            },
            ("PLAN", Some(title)) => Self::Plan {
                title: title.trim().to_owned(),
            },
            ("CRAM", Some(args)) => parse_cram(args).unwrap_or_else(raw),
            ("SUGGEST", None) => Self::Suggest {
                count: DEFAULT_SUGGEST_COUNT,
                level: Level::All,
            },
            ("SUGGEST", Some(args)) => parse_suggest(args).unwrap_or_else(raw),
            ("TITLES", None) => Self::Titles,
            ("BACK", None) => Self::Back,
            _ => raw(),
        }
    }

    pub fn is_back(&self) -> bool {
        matches!(self, Self::Back)
    }

    /// `true` for commands whose reply is a resource table.
    pub fn lists_resources(&self) -> bool {
        !matches!(self, Self::Titles | Self::Back)
    }
}

fn parse_cram(args: &str) -> Option<Command> {
    let (topic, minutes) = args.rsplit_once(SEPARATOR)?;
    Some(Command::Cram {
        topic: topic.trim().to_owned(),
        minutes: minutes.trim().parse().ok()?,
    })
}

fn parse_suggest(args: &str) -> Option<Command> {
    let (count, level) = match args.split_once(SEPARATOR) {
        Some((count, level)) => (count, Level::parse(level)?),
        None => (args, Level::All),
    };
    Some(Command::Suggest {
        count: count.trim().parse().ok()?,
        level,
    })
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List { sort: None } => f.write_str("LIST"),
            Self::List { sort: Some(sort) } => write!(f, "LIST|{}", sort.as_str()),
            Self::Search { term } => write!(f, "SEARCH|{term}"),
            Self::Plan { title } => write!(f, "PLAN|{title}"),
            Self::Cram { topic, minutes } => write!(f, "CRAM|{topic}|{minutes}"),
            Self::Suggest { count, level } => write!(f, "SUGGEST|{count}|{}", level.as_str()),
            Self::Titles => f.write_str("TITLES"),
            Self::Back => f.write_str("BACK"),
            Self::Raw { text } => f.write_str(text),
        }
    }
}
