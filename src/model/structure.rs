// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Compass-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Compass and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

use super::ids::{NodeId, ResourceId};

/// The closed set of structures the engine can describe in an analysis section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureKind {
    Tree,
    Trie,
    Heap,
    Graph,
    Cache,
    Stack,
}

/// Which part of a structure a block carries when the engine splits nodes and edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockRole {
    Nodes,
    Combined,
    Edges,
}

impl StructureKind {
    pub const ALL: [StructureKind; 6] = [
        Self::Tree,
        Self::Trie,
        Self::Heap,
        Self::Graph,
        Self::Cache,
        Self::Stack,
    ];

    pub fn block_name(self) -> &'static str {
        match self {
            Self::Tree => "TREE",
            Self::Trie => "TRIE",
            Self::Heap => "HEAP",
            Self::Graph => "GRAPH",
            Self::Cache => "CACHE",
            Self::Stack => "STACK",
        }
    }

    /// Resolves `TREE`, `TREE_NODES`, `TREE_EDGES`, `HEAP_STRUCTURE`, ... to a kind.
    pub fn from_block_name(name: &str) -> Option<(Self, BlockRole)> {
        let (base, role) = if let Some(base) = name.strip_suffix("_NODES") {
            (base, BlockRole::Nodes)
        } else if let Some(base) = name.strip_suffix("_EDGES") {
            (base, BlockRole::Edges)
        } else if let Some(base) = name.strip_suffix("_STRUCTURE") {
            (base, BlockRole::Combined)
        } else {
            (name, BlockRole::Combined)
        };

        let kind = Self::ALL.into_iter().find(|kind| kind.block_name() == base)?;
        Some((kind, role))
    }

    pub fn is_linear(self) -> bool {
        matches!(self, Self::Cache | Self::Stack)
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Tree => "tree",
            Self::Trie => "trie",
            Self::Heap => "heap",
            Self::Graph => "graph",
            Self::Cache => "cache",
            Self::Stack => "stack",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TreeAttrs {
    pub height: Option<i64>,
    pub balance: Option<i64>,
}

impl TreeAttrs {
    /// `|balance| <= 1`; `None` when the engine sent no usable balance factor.
    pub fn is_balanced(&self) -> Option<bool> {
        self.balance.map(|balance| balance.unsigned_abs() <= 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TrieAttrs {
    pub end_of_word: bool,
    pub resource_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct HeapAttrs {
    pub rating: String,
    pub index: Option<usize>,
}

impl HeapAttrs {
    pub fn rating_value(&self) -> Option<f64> {
        self.rating.trim().parse::<f64>().ok().filter(|r| r.is_finite())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureNode<A> {
    id: NodeId,
    attrs: Option<A>,
}

impl<A> StructureNode<A> {
    pub fn new(id: NodeId, attrs: Option<A>) -> Self {
        Self { id, attrs }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// `None` when the node was only referenced by an edge and never declared.
    pub fn attrs(&self) -> Option<&A> {
        self.attrs.as_ref()
    }

    pub fn is_declared(&self) -> bool {
        self.attrs.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureEdge {
    from: NodeId,
    to: NodeId,
    label: Option<String>,
}

impl StructureEdge {
    pub fn new(from: NodeId, to: NodeId, label: Option<String>) -> Self {
        Self { from, to, label }
    }

    pub fn from(&self) -> &NodeId {
        &self.from
    }

    pub fn to(&self) -> &NodeId {
        &self.to
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

type ChildList = SmallVec<[usize; 2]>;

/// A reconstructed directed structure: nodes in first-seen order, labelled edges and a root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectedStructure<A> {
    nodes: Vec<StructureNode<A>>,
    edges: Vec<StructureEdge>,
    root: NodeId,
    #[serde(skip)]
    index: BTreeMap<NodeId, usize>,
    #[serde(skip)]
    children: BTreeMap<NodeId, ChildList>,
}

impl<A> DirectedStructure<A> {
    /// Assembles a structure. Every edge endpoint must already be present in `nodes`.
    pub(crate) fn assemble(nodes: Vec<StructureNode<A>>, edges: Vec<StructureEdge>, root: NodeId) -> Self {
        let index = nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (node.id.clone(), idx))
            .collect();

        let mut children: BTreeMap<NodeId, ChildList> = BTreeMap::new();
        for (idx, edge) in edges.iter().enumerate() {
            children.entry(edge.from.clone()).or_default().push(idx);
        }

        Self {
            nodes,
            edges,
            root,
            index,
            children,
        }
    }

    /// Reorders every child list; the edge list itself keeps token order.
    pub(crate) fn sort_children_by(
        &mut self,
        mut compare: impl FnMut(&StructureEdge, &StructureEdge) -> Ordering,
    ) {
        let edges = &self.edges;
        for list in self.children.values_mut() {
            list.sort_by(|a, b| compare(&edges[*a], &edges[*b]));
        }
    }

    pub fn nodes(&self) -> &[StructureNode<A>] {
        &self.nodes
    }

    pub fn edges(&self) -> &[StructureEdge] {
        &self.edges
    }

    pub fn root(&self) -> &NodeId {
        &self.root
    }

    pub fn node(&self, id: &NodeId) -> Option<&StructureNode<A>> {
        self.index.get(id).map(|idx| &self.nodes[*idx])
    }

    pub fn attrs(&self, id: &NodeId) -> Option<&A> {
        self.node(id).and_then(StructureNode::attrs)
    }

    pub fn children<'a>(&'a self, id: &NodeId) -> impl Iterator<Item = &'a StructureEdge> + 'a {
        self.children
            .get(id)
            .into_iter()
            .flat_map(move |list| list.iter().map(move |idx| &self.edges[*idx]))
    }

    pub fn child_count(&self, id: &NodeId) -> usize {
        self.children.get(id).map_or(0, |list| list.len())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinearEntry {
    id: ResourceId,
    label: String,
    position: String,
}

impl LinearEntry {
    pub fn new(id: ResourceId, label: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            position: position.into(),
        }
    }

    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn position_value(&self) -> Option<usize> {
        self.position.trim().parse::<usize>().ok()
    }
}

/// An ordered sequence where index 0 is the most recently used (cache) or the top (stack).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LinearStructure {
    entries: Vec<LinearEntry>,
    size: Option<usize>,
    capacity: Option<usize>,
}

impl LinearStructure {
    pub fn new(entries: Vec<LinearEntry>, size: Option<usize>, capacity: Option<usize>) -> Self {
        Self {
            entries,
            size,
            capacity,
        }
    }

    pub fn entries(&self) -> &[LinearEntry] {
        &self.entries
    }

    /// The size the engine declared, or the decoded entry count when it declared none.
    pub fn size(&self) -> usize {
        self.size.unwrap_or(self.entries.len())
    }

    pub fn declared_size(&self) -> Option<usize> {
        self.size
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The outcome of reconstructing one structure kind from a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "structure", rename_all = "snake_case")]
pub enum Reconstruction {
    Empty(StructureKind),
    Tree(DirectedStructure<TreeAttrs>),
    Trie(DirectedStructure<TrieAttrs>),
    Heap(DirectedStructure<HeapAttrs>),
    Graph(DirectedStructure<()>),
    Cache(LinearStructure),
    Stack(LinearStructure),
}

impl Reconstruction {
    pub fn kind(&self) -> StructureKind {
        match self {
            Self::Empty(kind) => *kind,
            Self::Tree(_) => StructureKind::Tree,
            Self::Trie(_) => StructureKind::Trie,
            Self::Heap(_) => StructureKind::Heap,
            Self::Graph(_) => StructureKind::Graph,
            Self::Cache(_) => StructureKind::Cache,
            Self::Stack(_) => StructureKind::Stack,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }
}
