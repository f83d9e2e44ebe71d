// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wire formats spoken by the engine.
//!
//! A reply is a flat sequence of lines: an optional resource table followed by an optional
//! analysis section with `KEY: value` fields and named structure blocks.

pub mod protocol;
pub mod table;
pub mod token;

pub use protocol::{decode_analysis, export_analysis, AnalysisExportError};
pub use table::{decode_resources, decode_table, decode_titles, export_table};
