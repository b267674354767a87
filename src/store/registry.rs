//! registry.rs
//! Columnar storage of the fixed computation DAG, indexed by `NodeKey`.

use super::error::TopologyError;
use super::types::{NodeKey, NodeMetadata};
use smallvec::SmallVec;

pub type Edges = SmallVec<[NodeKey; 3]>;

/// An immutable-once-built adjacency structure over a subset of `NodeKey`.
///
/// Nodes must be registered after all of their parents, which makes the
/// registration order a valid topological order. That order doubles as the
/// display order.
#[derive(Debug, Clone)]
pub struct Dag {
    pub(crate) parents: Vec<Edges>,
    pub(crate) children: Vec<Edges>,
    pub(crate) meta: Vec<Option<NodeMetadata>>,
    pub(crate) order: Vec<NodeKey>,
    /// Position of each member in `order`; `usize::MAX` for non-members.
    pub(crate) rank: Vec<usize>,
}

impl Default for Dag {
    fn default() -> Self {
        Self {
            parents: vec![Edges::new(); NodeKey::COUNT],
            children: vec![Edges::new(); NodeKey::COUNT],
            meta: vec![None; NodeKey::COUNT],
            order: Vec::with_capacity(NodeKey::COUNT),
            rank: vec![usize::MAX; NodeKey::COUNT],
        }
    }
}

impl Dag {
    pub fn new() -> Self { Self::default() }
    pub fn count(&self) -> usize { self.order.len() }

    pub fn add_node(&mut self, node: NodeKey, parents: &[NodeKey], meta: NodeMetadata) -> Result<(), TopologyError> {
        if self.contains(node) {
            return Err(TopologyError::DuplicateNode(node));
        }
        if let Some(&parent) = parents.iter().find(|p| !self.contains(**p)) {
            return Err(TopologyError::UnknownParent { node, parent });
        }

        // 1. Children (each parent learns about its new dependent)
        for &parent in parents {
            self.children[parent.index()].push(node);
        }

        // 2. Parents
        self.parents[node.index()] = parents.iter().copied().collect();

        // 3. Metadata and ordering
        self.meta[node.index()] = Some(meta);
        self.rank[node.index()] = self.order.len();
        self.order.push(node);
        Ok(())
    }

    #[inline(always)]
    pub fn contains(&self, node: NodeKey) -> bool {
        self.rank[node.index()] != usize::MAX
    }

    #[inline(always)]
    pub fn parents(&self, node: NodeKey) -> &[NodeKey] {
        &self.parents[node.index()]
    }

    #[inline(always)]
    pub fn children(&self, node: NodeKey) -> &[NodeKey] {
        &self.children[node.index()]
    }

    pub fn meta(&self, node: NodeKey) -> Option<&NodeMetadata> {
        self.meta[node.index()].as_ref()
    }

    /// The fixed rendering order; every node appears after all of its ancestors.
    pub fn display_order(&self) -> &[NodeKey] {
        &self.order
    }

    /// Position of `node` in the display order, if it belongs to this graph.
    pub fn rank(&self, node: NodeKey) -> Option<usize> {
        self.contains(node).then(|| self.rank[node.index()])
    }
}
