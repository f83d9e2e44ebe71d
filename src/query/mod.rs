// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Client-side lookups over decoded listings.

pub mod filter;
pub mod title;

pub use filter::{filter_resources, ResourceSearchMode};
pub use title::{resolve_title, MIN_TITLE_SCORE};
