// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The boundary to the external engine: command grammar, transport and reply handling.

mod client;
pub mod command;
mod process;

use std::fmt;
use std::io;
use std::path::PathBuf;

pub use client::{Client, Reply, ReplyStatus};
pub use command::{Command, Level, SortKey};
pub use process::{default_search_paths, ProcessEngine, ENGINE_EXECUTABLE};

/// Something that answers one command with the raw lines of its reply.
pub trait Engine {
    /// Whether [`Engine::invoke`] can reach the engine at all.
    fn ensure_available(&mut self) -> bool;

    fn invoke(&mut self, command: &str) -> Result<Vec<String>, EngineError>;
}

impl<E: Engine + ?Sized> Engine for Box<E> {
    fn ensure_available(&mut self) -> bool {
        (**self).ensure_available()
    }

    fn invoke(&mut self, command: &str) -> Result<Vec<String>, EngineError> {
        (**self).invoke(command)
    }
}

#[derive(Debug)]
pub enum EngineError {
    NotFound {
        searched: Vec<PathBuf>,
    },
    Spawn {
        path: PathBuf,
        source: io::Error,
    },
    ExitStatus {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { searched } => {
                write!(f, "engine executable not found (searched {searched:?})")
            }
            Self::Spawn { path, source } => write!(f, "cannot start engine {path:?}: {source}"),
            Self::ExitStatus {
                command,
                code: Some(code),
                stderr,
            } => write!(f, "engine exited with status {code} for {command:?}: {stderr}"),
            Self::ExitStatus {
                command, stderr, ..
            } => write!(f, "engine was terminated by a signal for {command:?}: {stderr}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn { source, .. } => Some(source),
            Self::NotFound { .. } | Self::ExitStatus { .. } => None,
        }
    }
}
