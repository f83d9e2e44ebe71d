// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! State the client carries across engine round trips.

pub mod history;
pub mod state;
pub mod study;

pub use history::{HistoryEntry, NavigationHistory, ViewContext};
pub use state::{AppState, View};
pub use study::StudySession;
