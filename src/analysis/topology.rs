use crate::compute::ActivationState;
use crate::store::{Dag, NodeKey};
use std::collections::{BTreeSet, VecDeque};

/// Every node reachable from `start` through `parents`, excluding `start` itself.
pub fn ancestors(dag: &Dag, start: NodeKey) -> BTreeSet<NodeKey> {
    walk(start, move |n| dag.parents(n))
}

/// Every node reachable from `start` through `children`, excluding `start` itself.
pub fn descendants(dag: &Dag, start: NodeKey) -> BTreeSet<NodeKey> {
    walk(start, move |n| dag.children(n))
}

fn walk<'a>(start: NodeKey, next: impl Fn(NodeKey) -> &'a [NodeKey]) -> BTreeSet<NodeKey> {
    let mut visited = BTreeSet::new();
    let mut queue: VecDeque<NodeKey> = next(start).iter().copied().collect();

    while let Some(node) = queue.pop_front() {
        if visited.insert(node) {
            queue.extend(next(node).iter().copied());
        }
    }
    visited
}

/// Checks the reveal invariant: an active node never has an inactive parent.
///
/// Checking direct parents is sufficient; transitivity follows by induction
/// along the display order.
pub fn is_consistent(dag: &Dag, state: &ActivationState) -> bool {
    dag.display_order().iter()
        .filter(|&&n| state.is_active(n))
        .all(|&n| dag.parents(n).iter().all(|&p| state.is_active(p)))
}

/// Confirms that `order` lists every member of `dag` after all of its parents.
pub fn is_topological(dag: &Dag, order: &[NodeKey]) -> bool {
    if order.len() != dag.count() {
        return false;
    }
    let mut seen = BTreeSet::new();
    for &node in order {
        if !dag.contains(node) || !dag.parents(node).iter().all(|p| seen.contains(p)) {
            return false;
        }
        seen.insert(node);
    }
    true
}
