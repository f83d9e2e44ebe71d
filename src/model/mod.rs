// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Decoded engine replies (resource tables and analysis reports) plus the typed structures the
//! reconstructors build from analysis blocks.

pub mod ids;
pub mod report;
pub mod resource;
pub mod structure;
pub mod table;

pub use ids::{Id, NodeId, ResourceId};
pub use report::{AnalysisReport, StructureBlock};
pub use resource::{Resource, CANONICAL_COLUMNS};
pub use structure::{
    BlockRole, DirectedStructure, HeapAttrs, LinearEntry, LinearStructure, Reconstruction,
    StructureEdge, StructureKind, StructureNode, TreeAttrs, TrieAttrs,
};
pub use table::ResourceTable;
