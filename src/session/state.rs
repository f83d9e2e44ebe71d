// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;
use tracing::debug;

use super::history::{HistoryEntry, NavigationHistory, ViewContext};
use super::study::StudySession;
use crate::model::{AnalysisReport, Resource, ResourceId};

/// The resources currently listed and the command that produced them.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct View {
    command: String,
    resources: Vec<Resource>,
}

impl View {
    pub fn new(command: impl Into<String>, resources: Vec<Resource>) -> Self {
        Self {
            command: command.into(),
            resources,
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

/// Everything the client remembers between engine round trips.
///
/// Owned by the front end and lent to [`crate::engine::Client::execute`] for each command. The
/// navigation history is the only part the engine protocol depends on.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AppState {
    master_library: Vec<Resource>,
    view: View,
    report: Option<AnalysisReport>,
    history: NavigationHistory,
    study: StudySession,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn master_library(&self) -> &[Resource] {
        &self.master_library
    }

    pub fn set_master_library(&mut self, resources: Vec<Resource>) {
        self.master_library = resources;
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    /// The current view, or the whole library when nothing has been listed yet.
    pub fn visible_resources(&self) -> &[Resource] {
        if self.view.is_empty() {
            &self.master_library
        } else {
            self.view.resources()
        }
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    /// Replaces the last report wholesale; reports are never merged.
    pub fn set_report(&mut self, report: Option<AnalysisReport>) {
        self.report = report;
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut NavigationHistory {
        &mut self.history
    }

    pub fn study(&self) -> &StudySession {
        &self.study
    }

    pub fn study_mut(&mut self) -> &mut StudySession {
        &mut self.study
    }

    /// Looks `id` up in the current view first, then in the library.
    pub fn find(&self, id: &ResourceId) -> Option<&Resource> {
        self.view
            .resources()
            .iter()
            .chain(&self.master_library)
            .find(|resource| resource.id() == id)
    }

    /// Displays a resource: records it in the navigation history and returns it.
    pub fn open(&mut self, id: &ResourceId) -> Option<Resource> {
        let Some(resource) = self.find(id).cloned() else {
            debug!(%id, "cannot open unknown resource");
            return None;
        };
        let context = ViewContext::new(self.view.command());
        self.history.push(HistoryEntry::new(resource.clone(), context));
        Some(resource)
    }

    /// Adds a resource from the view or library to the study session.
    pub fn add_to_study(&mut self, id: &ResourceId) -> Option<bool> {
        let resource = self.find(id)?.clone();
        Some(self.study.add(resource))
    }
}
