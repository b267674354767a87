//! focus.rs
//! Keeps the explanation panel scrolled to the most recently revealed stage.
//!
//! Scrolling depends on layout, which is only known after the host has
//! rendered the new state. `observe` therefore only records a request; the
//! host calls `settle` once its layout pass has committed.

use crate::compute::ActivationState;
use crate::config::ScrollConfig;
use crate::store::{Dag, NodeKey};
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerMetrics {
    pub client_height: f64,
    /// Total height of the scrollable content.
    pub scroll_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockMetrics {
    /// Offset of the block's top edge from the top of the scrollable content.
    pub offset_top: f64,
    pub height: f64,
}

/// The host's layout service for the explanation panel.
pub trait LayoutProbe {
    /// `None` while the panel is not mounted.
    fn container(&self) -> Option<ContainerMetrics>;
    /// `None` while the block for `node` has not been laid out.
    fn block(&self, node: NodeKey) -> Option<BlockMetrics>;
    fn scroll_to(&mut self, top: f64);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollOutcome {
    /// No request was pending.
    Idle,
    /// The container or block was not available; the request was dropped.
    Skipped,
    Scrolled(f64),
}

#[derive(Debug, Clone, Default)]
pub struct FocusTracker {
    latest_active: Option<NodeKey>,
    pending: Option<NodeKey>,
}

impl FocusTracker {
    pub fn new() -> Self { Self::default() }

    pub fn latest_active(&self) -> Option<NodeKey> {
        self.latest_active
    }

    pub fn pending(&self) -> Option<NodeKey> {
        self.pending
    }

    /// Recomputes the latest active node after a state change.
    ///
    /// Returns `true` if it changed. A change to a node schedules a scroll,
    /// replacing any request still pending; a change to `None` cancels it.
    pub fn observe(&mut self, dag: &Dag, state: &ActivationState) -> bool {
        let latest = state.active_nodes(dag).last();
        if latest == self.latest_active {
            return false;
        }
        debug!("Latest active stage: {:?} -> {:?}", self.latest_active, latest);
        self.latest_active = latest;
        self.pending = latest;
        true
    }

    /// Runs the pending scroll, if any. Single-shot: the request is consumed
    /// whatever the outcome.
    pub fn settle(&mut self, probe: &mut impl LayoutProbe, config: &ScrollConfig) -> ScrollOutcome {
        let Some(node) = self.pending.take() else {
            return ScrollOutcome::Idle;
        };
        let (Some(container), Some(block)) = (probe.container(), probe.block(node)) else {
            debug!("Skipping scroll to '{}': panel not laid out", node);
            return ScrollOutcome::Skipped;
        };
        let top = scroll_target(container, block, config.anchor);
        debug!("Scrolling explanation panel to '{}' (top = {:.1})", node, top);
        probe.scroll_to(top);
        ScrollOutcome::Scrolled(top)
    }
}

/// The scroll offset placing the block's center at `anchor` of the container
/// height, clamped to the scrollable range.
pub fn scroll_target(container: ContainerMetrics, block: BlockMetrics, anchor: f64) -> f64 {
    let raw = block.offset_top + block.height / 2.0 - container.client_height * anchor;
    let max = (container.scroll_height - container.client_height).max(0.0);
    raw.clamp(0.0, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::Engine;
    use crate::store::Topology;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakePanel {
        container: Option<ContainerMetrics>,
        blocks: HashMap<NodeKey, BlockMetrics>,
        scrolls: Vec<f64>,
    }

    impl LayoutProbe for FakePanel {
        fn container(&self) -> Option<ContainerMetrics> { self.container }
        fn block(&self, node: NodeKey) -> Option<BlockMetrics> { self.blocks.get(&node).copied() }
        fn scroll_to(&mut self, top: f64) { self.scrolls.push(top); }
    }

    fn panel() -> FakePanel {
        FakePanel {
            container: Some(ContainerMetrics { client_height: 400.0, scroll_height: 2000.0 }),
            ..Default::default()
        }
    }

    #[test]
    fn test_latest_follows_display_order() {
        let dag = Topology::LeftmostHardAttention.dag();
        let engine = Engine::new(&dag);
        let mut state = ActivationState::new();
        let mut focus = FocusTracker::new();

        engine.activate_with_ancestors(&mut state, NodeKey::Value);
        assert!(focus.observe(&dag, &state));
        assert_eq!(focus.latest_active(), Some(NodeKey::Value));

        // Revealing Key after Value leaves Value as the latest by display order.
        engine.activate_with_ancestors(&mut state, NodeKey::Key);
        assert!(!focus.observe(&dag, &state));
        assert_eq!(focus.latest_active(), Some(NodeKey::Value));

        engine.activate_with_ancestors(&mut state, NodeKey::Argmax);
        assert!(focus.observe(&dag, &state));
        assert_eq!(focus.latest_active(), Some(NodeKey::Argmax));

        engine.deactivate_with_descendants(&mut state, NodeKey::Embedding);
        assert!(focus.observe(&dag, &state));
        assert_eq!(focus.latest_active(), None);
        assert_eq!(focus.pending(), None);
    }

    #[test]
    fn test_scroll_centers_block() {
        let dag = Topology::Direct.dag();
        let mut state = ActivationState::new();
        Engine::new(&dag).activate_with_ancestors(&mut state, NodeKey::Query);

        let mut focus = FocusTracker::new();
        focus.observe(&dag, &state);

        let mut probe = panel();
        probe.blocks.insert(NodeKey::Query, BlockMetrics { offset_top: 600.0, height: 100.0 });

        let outcome = focus.settle(&mut probe, &ScrollConfig::default());
        // 600 + 50 - 200
        assert_eq!(outcome, ScrollOutcome::Scrolled(450.0));
        assert_eq!(probe.scrolls, vec![450.0]);

        assert_eq!(focus.settle(&mut probe, &ScrollConfig::default()), ScrollOutcome::Idle);
        assert_eq!(probe.scrolls.len(), 1);
    }

    #[test]
    fn test_unmeasured_block_is_skipped() {
        let dag = Topology::Direct.dag();
        let mut state = ActivationState::new();
        Engine::new(&dag).activate_with_ancestors(&mut state, NodeKey::Embedding);
        let mut focus = FocusTracker::new();
        focus.observe(&dag, &state);

        let mut probe = panel();
        assert_eq!(focus.settle(&mut probe, &ScrollConfig::default()), ScrollOutcome::Skipped);
        assert!(probe.scrolls.is_empty());

        let mut unmounted = FakePanel::default();
        focus.observe(&dag, &ActivationState::new());
        Engine::new(&dag).activate_with_ancestors(&mut state, NodeKey::Key);
        focus.observe(&dag, &state);
        assert_eq!(focus.settle(&mut unmounted, &ScrollConfig::default()), ScrollOutcome::Skipped);
    }

    #[test]
    fn test_target_respects_anchor_and_bounds() {
        let container = ContainerMetrics { client_height: 400.0, scroll_height: 1000.0 };
        let block = BlockMetrics { offset_top: 500.0, height: 40.0 };
        assert_eq!(scroll_target(container, block, 0.5), 320.0);
        assert_eq!(scroll_target(container, block, 0.25), 420.0);

        let near_top = BlockMetrics { offset_top: 10.0, height: 20.0 };
        assert_eq!(scroll_target(container, near_top, 0.5), 0.0);

        let near_bottom = BlockMetrics { offset_top: 990.0, height: 10.0 };
        assert_eq!(scroll_target(container, near_bottom, 0.5), 600.0);
    }
}
