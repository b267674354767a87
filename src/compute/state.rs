//! state.rs
//! Dense boolean storage of which nodes are currently revealed.

use crate::store::{Dag, NodeKey};
use serde::{Deserialize, Serialize};

/// The reveal flag of every node, indexed by `NodeKey`.
///
/// Total over the node set: keys outside the diagram's topology simply read
/// as inactive. The engine keeps the flags consistent with the DAG, but
/// `set` allows arbitrary states to be built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationState {
    flags: [bool; NodeKey::COUNT],
}

impl ActivationState {
    /// All nodes inactive.
    pub fn new() -> Self { Self::default() }

    #[inline(always)]
    pub fn is_active(&self, node: NodeKey) -> bool {
        self.flags[node.index()]
    }

    /// Sets one flag, returning whether it changed.
    #[inline(always)]
    pub fn set(&mut self, node: NodeKey, active: bool) -> bool {
        let slot = &mut self.flags[node.index()];
        let changed = *slot != active;
        *slot = active;
        changed
    }

    /// Active members of `dag`, in display order.
    pub fn active_nodes<'a>(&'a self, dag: &'a Dag) -> impl Iterator<Item = NodeKey> + 'a {
        dag.display_order().iter().copied().filter(move |&n| self.is_active(n))
    }

    pub fn any_active(&self) -> bool {
        self.flags.iter().any(|&f| f)
    }
}
