// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Client configuration: an optional JSON file, then environment overrides, then CLI flags.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::{default_search_paths, ProcessEngine};
use crate::render::RenderOptions;

pub const ENV_ENGINE: &str = "COMPASS_ENGINE";
pub const ENV_TRIE_DEPTH: &str = "COMPASS_TRIE_DEPTH";
pub const ENV_TRIE_CHILDREN: &str = "COMPASS_TRIE_CHILDREN";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Explicit engine executable; disables the search list.
    pub engine: Option<PathBuf>,
    pub search_paths: Vec<PathBuf>,
    /// Directory the engine runs in.
    pub working_dir: Option<PathBuf>,
    pub render: RenderOptions,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            engine: None,
            search_paths: default_search_paths(),
            working_dir: None,
            render: RenderOptions::default(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidEnv {
        name: &'static str,
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read config {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "invalid config {path:?}: {source}"),
            Self::InvalidEnv { name, value } => {
                write!(f, "invalid value for {name}: {value:?} (expected a whole number)")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidEnv { .. } => None,
        }
    }
}

impl ClientConfig {
    pub fn from_json_str(path: &Path, text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(path, &text)
    }

    /// Applies overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|name| std::env::var(name).ok())
    }

    /// Applies overrides read through `lookup`; unset and blank values are ignored.
    pub fn apply_env_with(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(engine) = get(ENV_ENGINE) {
            self.engine = Some(PathBuf::from(engine.trim()));
        }
        if let Some(value) = get(ENV_TRIE_DEPTH) {
            self.render.trie.max_depth = parse_env(ENV_TRIE_DEPTH, value)?;
        }
        if let Some(value) = get(ENV_TRIE_CHILDREN) {
            self.render.trie.max_children = parse_env(ENV_TRIE_CHILDREN, value)?;
        }
        Ok(())
    }

    pub fn process_engine(&self) -> ProcessEngine {
        let engine = ProcessEngine::new(self.engine.clone(), self.search_paths.clone());
        match &self.working_dir {
            Some(dir) => engine.with_working_dir(dir),
            None => engine,
        }
    }
}

fn parse_env(name: &'static str, value: String) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { name, value })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::path::{Path, PathBuf};

    use super::{ClientConfig, ConfigError, ENV_ENGINE, ENV_TRIE_CHILDREN, ENV_TRIE_DEPTH};

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ClientConfig::from_json_str(
            Path::new("compass.json"),
            r#"{ "engine": "bin/engine", "render": { "trie": { "max_children": 3 } } }"#,
        )
        .expect("config");

        assert_eq!(config.engine, Some(PathBuf::from("bin/engine")));
        assert_eq!(config.search_paths.len(), 3);
        assert_eq!(config.render.trie.max_children, 3);
        assert_eq!(config.render.trie.max_depth, 4);
    }

    #[test]
    fn env_overrides_file_values() {
        let mut config = ClientConfig::default();
        config
            .apply_env_with(env(&[
                (ENV_ENGINE, " /opt/engine "),
                (ENV_TRIE_DEPTH, "6"),
                (ENV_TRIE_CHILDREN, ""),
            ]))
            .expect("env");

        assert_eq!(config.engine, Some(PathBuf::from("/opt/engine")));
        assert_eq!(config.render.trie.max_depth, 6);
        assert_eq!(config.render.trie.max_children, 8);
    }

    #[test]
    fn bad_env_numbers_are_errors() {
        let mut config = ClientConfig::default();
        let err = config
            .apply_env_with(env(&[(ENV_TRIE_DEPTH, "deep")]))
            .expect_err("invalid");
        assert!(matches!(err, ConfigError::InvalidEnv { name: ENV_TRIE_DEPTH, .. }));
        assert!(err.to_string().contains("deep"));
    }

    #[test]
    fn malformed_json_names_the_file() {
        let err = ClientConfig::from_json_str(Path::new("broken.json"), "{").expect_err("invalid");
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ClientConfig::load(Path::new("no/such/compass.json")).expect_err("missing");
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
