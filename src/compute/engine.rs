//! The cascade rules that move an `ActivationState` between consistent states.
use crate::compute::state::ActivationState;
use crate::store::{Dag, NodeKey};
use log::{debug, trace, warn};

/// A synchronous, single-threaded reveal engine over a fixed DAG.
pub struct Engine<'a> {
    dag: &'a Dag,
}

impl<'a> Engine<'a> {
    pub fn new(dag: &'a Dag) -> Self {
        Self { dag }
    }

    /// Reveals `node` together with everything it depends on.
    ///
    /// Returns the nodes whose flag flipped; empty when the call was a no-op.
    pub fn activate_with_ancestors(&self, state: &mut ActivationState, node: NodeKey) -> Vec<NodeKey> {
        if !self.dag.contains(node) {
            warn!("Ignoring reveal of '{}': not part of this topology", node);
            return Vec::new();
        }
        let mut flipped = Vec::new();
        self.activate(state, node, &mut flipped);
        debug!("Revealed '{}' (changed: {:?})", node, flipped);
        flipped
    }

    /// Hides `node` together with everything that depends on it.
    ///
    /// Returns the nodes whose flag flipped; empty when the call was a no-op.
    pub fn deactivate_with_descendants(&self, state: &mut ActivationState, node: NodeKey) -> Vec<NodeKey> {
        if !self.dag.contains(node) {
            warn!("Ignoring hide of '{}': not part of this topology", node);
            return Vec::new();
        }
        let mut flipped = Vec::new();
        self.deactivate(state, node, &mut flipped);
        debug!("Hid '{}' (changed: {:?})", node, flipped);
        flipped
    }

    /// Reveals every node. Equivalent to revealing each sink.
    pub fn activate_all(&self, state: &mut ActivationState) -> Vec<NodeKey> {
        let mut flipped = Vec::new();
        for &node in self.dag.display_order() {
            if self.dag.children(node).is_empty() {
                self.activate(state, node, &mut flipped);
            }
        }
        flipped
    }

    /// Hides every node. Equivalent to hiding each source.
    pub fn deactivate_all(&self, state: &mut ActivationState) -> Vec<NodeKey> {
        let mut flipped = Vec::new();
        for &node in self.dag.display_order() {
            if self.dag.parents(node).is_empty() {
                self.deactivate(state, node, &mut flipped);
            }
        }
        flipped
    }

    // Shared ancestors (the diamond case) are visited once per path; `set`
    // turns the revisit into a no-op.
    fn activate(&self, state: &mut ActivationState, node: NodeKey, flipped: &mut Vec<NodeKey>) {
        for &parent in self.dag.parents(node) {
            self.activate(state, parent, flipped);
        }
        if state.set(node, true) {
            trace!("  activate '{}'", node);
            flipped.push(node);
        }
    }

    fn deactivate(&self, state: &mut ActivationState, node: NodeKey, flipped: &mut Vec<NodeKey>) {
        if state.set(node, false) {
            trace!("  deactivate '{}'", node);
            flipped.push(node);
        }
        for &child in self.dag.children(node) {
            self.deactivate(state, child, flipped);
        }
    }
}
