// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Compass: client for the CodeCompass study engine.
//!
//! The engine is an external, stateless process that answers one text command per run. This
//! crate decodes its replies (a resource table plus an analysis section of named structure
//! blocks), rebuilds the structures the engine describes, renders them as text, and keeps the
//! little session state the engine does not: a navigation history that answers `BACK` locally
//! and a study list.

pub mod config;
pub mod engine;
pub mod format;
pub mod model;
pub mod query;
pub mod reconstruct;
pub mod render;
pub mod session;

pub use config::{ClientConfig, ConfigError};
pub use engine::{Client, Command, Engine, EngineError, ProcessEngine, Reply, ReplyStatus};
pub use session::AppState;
