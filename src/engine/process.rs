// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::{Path, PathBuf};
use std::process::Command as ProcessCommand;

use tracing::debug;

use super::{Engine, EngineError};

/// File name of the engine executable on this platform.
pub const ENGINE_EXECUTABLE: &str = if cfg!(windows) {
    "codecompass_engine.exe"
} else {
    "codecompass_engine"
};

/// Where the engine is looked for when no explicit path is configured, relative to the current
/// directory: next to the client, then in the usual debug build directories.
pub fn default_search_paths() -> Vec<PathBuf> {
    vec![
        PathBuf::from(ENGINE_EXECUTABLE),
        Path::new("cmake-build-debug").join(ENGINE_EXECUTABLE),
        Path::new("..").join("cmake-build-debug").join(ENGINE_EXECUTABLE),
    ]
}

/// Runs the engine as a child process, one process per command.
///
/// The command text is passed as the single argument and stdout is the reply; stderr only
/// carries diagnostics and is logged.
#[derive(Debug, Clone)]
pub struct ProcessEngine {
    explicit: Option<PathBuf>,
    search_paths: Vec<PathBuf>,
    working_dir: Option<PathBuf>,
    resolved: Option<PathBuf>,
}

impl Default for ProcessEngine {
    fn default() -> Self {
        Self::new(None, default_search_paths())
    }
}

impl ProcessEngine {
    /// `explicit` wins over `search_paths` when given; it is never searched for.
    pub fn new(explicit: Option<PathBuf>, search_paths: Vec<PathBuf>) -> Self {
        Self {
            explicit,
            search_paths,
            working_dir: None,
            resolved: None,
        }
    }

    /// Directory the engine runs in; it loads its catalogue relative to it.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn resolved_path(&self) -> Option<&Path> {
        self.resolved.as_deref()
    }

    fn candidates(&self) -> Vec<PathBuf> {
        match &self.explicit {
            Some(path) => vec![path.clone()],
            None => self.search_paths.clone(),
        }
    }

    fn resolve(&mut self) -> Result<PathBuf, EngineError> {
        if let Some(path) = &self.resolved {
            if path.is_file() {
                return Ok(path.clone());
            }
            self.resolved = None;
        }

        let searched = self.candidates();
        let found = searched.iter().find(|path| path.is_file()).cloned();
        let Some(found) = found else {
            return Err(EngineError::NotFound { searched });
        };
        let found = std::fs::canonicalize(&found).unwrap_or(found);
        debug!(path = ?found, "engine executable resolved");
        self.resolved = Some(found.clone());
        Ok(found)
    }
}

impl Engine for ProcessEngine {
    fn ensure_available(&mut self) -> bool {
        self.resolve().is_ok()
    }

    fn invoke(&mut self, command: &str) -> Result<Vec<String>, EngineError> {
        let path = self.resolve()?;

        let mut process = ProcessCommand::new(&path);
        process.arg(command);
        if let Some(dir) = &self.working_dir {
            process.current_dir(dir);
        }

        let output = process.output().map_err(|source| EngineError::Spawn {
            path: path.clone(),
            source,
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        for line in stderr.lines().filter(|line| !line.trim().is_empty()) {
            debug!(command, line, "engine stderr");
        }
        if !output.status.success() {
            return Err(EngineError::ExitStatus {
                command: command.to_owned(),
                code: output.status.code(),
                stderr: stderr.trim().to_owned(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let lines: Vec<String> = stdout.trim().lines().map(str::to_owned).collect();
        debug!(command, lines = lines.len(), "engine replied");
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{default_search_paths, ProcessEngine, ENGINE_EXECUTABLE};
    use crate::engine::{Engine, EngineError};

    #[test]
    fn default_search_list_covers_build_dirs() {
        let paths = default_search_paths();
        assert_eq!(paths.len(), 3);
        assert!(paths.iter().all(|p| p.ends_with(ENGINE_EXECUTABLE)));
        assert!(paths[1].starts_with("cmake-build-debug"));
    }

    #[test]
    fn missing_executable_is_not_found() {
        let missing = PathBuf::from("definitely/not/here/engine");
        let mut engine = ProcessEngine::new(Some(missing.clone()), Vec::new());
        assert!(!engine.ensure_available());

        match engine.invoke("LIST") {
            Err(EngineError::NotFound { searched }) => assert_eq!(searched, vec![missing]),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[cfg(unix)]
    mod unix {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use std::path::PathBuf;

        use super::super::ProcessEngine;
        use crate::engine::{Engine, EngineError};

        fn script(name: &str, body: &str) -> PathBuf {
            let dir = std::env::temp_dir().join(format!("compass-engine-{}-{name}", std::process::id()));
            fs::create_dir_all(&dir).expect("temp dir");
            let path = dir.join("engine.sh");
            fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write script");
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod");
            path
        }

        #[test]
        fn command_is_the_single_argument_and_stdout_the_reply() {
            let path = script("echo", "echo \"ID,Title\"\necho \"1,$1\"\necho '[CPP] noise' >&2");
            let mut engine = ProcessEngine::new(None, vec![PathBuf::from("missing"), path]);

            let lines = engine.invoke("SEARCH|Tr ees").expect("reply");
            assert_eq!(lines, vec!["ID,Title".to_owned(), "1,SEARCH|Tr ees".to_owned()]);
            assert!(engine.resolved_path().is_some());
        }

        #[test]
        fn non_zero_exit_is_an_error() {
            let path = script("fail", "echo boom >&2\nexit 3");
            let mut engine = ProcessEngine::new(Some(path), Vec::new());

            match engine.invoke("LIST") {
                Err(EngineError::ExitStatus { code, stderr, .. }) => {
                    assert_eq!(code, Some(3));
                    assert_eq!(stderr, "boom");
                }
                other => panic!("expected ExitStatus, got {other:?}"),
            }
        }
    }
}
