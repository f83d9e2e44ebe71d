// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;
use tracing::{debug, warn};

use super::{Command, Engine};
use crate::format::{decode_analysis, decode_table, decode_titles};
use crate::model::{AnalysisReport, Reconstruction, ResourceTable};
use crate::reconstruct::reconstruct_report;
use crate::session::{AppState, View};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReplyStatus {
    Data,
    /// A well-formed reply with nothing in it: no output, or a header without rows.
    NoResults,
    /// Output that carried neither a table header nor an analysis section.
    Malformed,
    Unavailable { reason: String },
}

/// One decoded reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    pub command: Command,
    pub status: ReplyStatus,
    pub table: ResourceTable,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub titles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<AnalysisReport>,
}

impl Reply {
    fn new(command: &Command, status: ReplyStatus) -> Self {
        Self {
            command: command.clone(),
            status,
            table: ResourceTable::missing(),
            titles: Vec::new(),
            report: None,
        }
    }

    pub fn is_data(&self) -> bool {
        self.status == ReplyStatus::Data
    }

    /// Every structure in the analysis section, rebuilt on demand.
    pub fn reconstructions(&self) -> Vec<Reconstruction> {
        self.report.as_ref().map(reconstruct_report).unwrap_or_default()
    }
}

/// Drives one engine on behalf of an [`AppState`].
///
/// `BACK` is answered from the navigation history and never reaches the engine. Every other
/// command costs exactly one [`Engine::invoke`]; transport failures become
/// [`ReplyStatus::Unavailable`] rather than errors.
#[derive(Debug)]
pub struct Client<E> {
    engine: E,
}

impl<E: Engine> Client<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Loads the full catalogue into the state's master library.
    pub fn load_library(&mut self, state: &mut AppState) -> Reply {
        let command = Command::List { sort: None };
        let reply = self.request(&command);
        if reply.is_data() {
            state.set_master_library(reply.table.rows().to_vec());
        }
        reply
    }

    pub fn execute(&mut self, state: &mut AppState, command: &Command) -> Reply {
        if command.is_back() {
            return Self::go_back(state, command);
        }

        let reply = self.request(command);
        if matches!(reply.status, ReplyStatus::Unavailable { .. }) {
            return reply;
        }
        if command.lists_resources() {
            state.set_view(View::new(command.to_string(), reply.table.rows().to_vec()));
        }
        state.set_report(reply.report.clone());
        reply
    }

    fn request(&mut self, command: &Command) -> Reply {
        let wire = command.to_string();
        let lines = match self.engine.invoke(&wire) {
            Ok(lines) => lines,
            Err(err) => {
                warn!(command = %wire, error = %err, "engine unavailable");
                return Reply::new(
                    command,
                    ReplyStatus::Unavailable {
                        reason: err.to_string(),
                    },
                );
            }
        };

        if lines.iter().all(|line| line.trim().is_empty()) {
            debug!(command = %wire, "engine returned no output");
            return Reply::new(command, ReplyStatus::NoResults);
        }

        let mut reply = Reply::new(command, ReplyStatus::NoResults);
        let report = decode_analysis(&lines);
        if !report.is_empty() {
            reply.report = Some(report);
        }

        if matches!(command, Command::Titles) {
            reply.titles = decode_titles(&lines);
            if !reply.titles.is_empty() {
                reply.status = ReplyStatus::Data;
            }
        } else {
            reply.table = decode_table(&lines);
            if reply.table.skipped_rows() > 0 {
                debug!(command = %wire, skipped = reply.table.skipped_rows(), "short rows skipped");
            }
            if !reply.table.is_empty() {
                reply.status = ReplyStatus::Data;
            } else if !reply.table.header_found() && reply.report.is_none() {
                debug!(command = %wire, lines = lines.len(), "reply has no table header");
                reply.status = ReplyStatus::Malformed;
            }
        }
        reply
    }

    fn go_back(state: &mut AppState, command: &Command) -> Reply {
        let mut reply = Reply::new(command, ReplyStatus::NoResults);
        state.set_report(None);
        let Some(lines) = state.history_mut().back() else {
            debug!("history exhausted, nothing to go back to");
            return reply;
        };

        reply.table = decode_table(&lines);
        if !reply.table.is_empty() {
            reply.status = ReplyStatus::Data;
        }
        let context = state
            .history()
            .top()
            .map(|entry| entry.context().command().to_owned())
            .unwrap_or_default();
        state.set_view(View::new(context, reply.table.rows().to_vec()));
        reply
    }
}
