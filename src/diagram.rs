//! The reveal widget: one diagram instance over injected example data.

use crate::analysis::validate_example;
use crate::compute::{projection, ActivationState, Engine};
use crate::config::{ConfigError, DiagramConfig, ScrollConfig};
use crate::data::ExampleData;
use crate::display::compose::{self, Action, Control, PanelEntry};
use crate::display::focus::{FocusTracker, LayoutProbe, ScrollOutcome};
use crate::store::{Dag, Matrix, NodeKey};
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct TransformerDiagram {
    dag: Arc<Dag>,
    data: ExampleData,
    state: ActivationState,
    focus: FocusTracker,
    scroll: ScrollConfig,
}

impl TransformerDiagram {
    /// Builds a diagram with every stage hidden. Refuses a scroll anchor
    /// outside `[0, 1]` and data that does not match the configured topology.
    pub fn new(config: DiagramConfig, data: ExampleData) -> Result<Self, ConfigError> {
        Self::with_dag(Arc::new(config.topology.dag()), data, config.scroll)
    }

    /// Like `new`, but shares an already-built DAG, e.g. across several
    /// examples on one page. Applies the same checks.
    pub fn with_dag(dag: Arc<Dag>, data: ExampleData, scroll: ScrollConfig) -> Result<Self, ConfigError> {
        scroll.validate()?;
        validate_example(&dag, &data).map_err(ConfigError::Invalid)?;
        Ok(Self {
            dag,
            data,
            state: ActivationState::new(),
            focus: FocusTracker::new(),
            scroll,
        })
    }

    pub fn dag(&self) -> &Dag { &self.dag }
    pub fn data(&self) -> &ExampleData { &self.data }
    pub fn activation_state(&self) -> &ActivationState { &self.state }

    pub fn is_active(&self, node: NodeKey) -> bool {
        self.state.is_active(node)
    }

    pub fn latest_active(&self) -> Option<NodeKey> {
        self.focus.latest_active()
    }

    /// Returns the nodes that changed.
    pub fn reveal(&mut self, node: NodeKey) -> Vec<NodeKey> {
        let changed = Engine::new(&self.dag).activate_with_ancestors(&mut self.state, node);
        self.after_change(changed)
    }

    /// Returns the nodes that changed.
    pub fn hide(&mut self, node: NodeKey) -> Vec<NodeKey> {
        let changed = Engine::new(&self.dag).deactivate_with_descendants(&mut self.state, node);
        self.after_change(changed)
    }

    pub fn dispatch(&mut self, action: Action) -> Vec<NodeKey> {
        match action {
            Action::Reveal(node) => self.reveal(node),
            Action::Hide(node) => self.hide(node),
        }
    }

    pub fn reveal_all(&mut self) -> Vec<NodeKey> {
        let changed = Engine::new(&self.dag).activate_all(&mut self.state);
        self.after_change(changed)
    }

    pub fn reset(&mut self) -> Vec<NodeKey> {
        let changed = Engine::new(&self.dag).deactivate_all(&mut self.state);
        self.after_change(changed)
    }

    fn after_change(&mut self, changed: Vec<NodeKey>) -> Vec<NodeKey> {
        if !changed.is_empty() {
            self.focus.observe(&self.dag, &self.state);
        }
        changed
    }

    pub fn display_matrices(&self) -> BTreeMap<NodeKey, Matrix> {
        projection::project(&self.state, &self.data.outputs)
    }

    pub fn display_matrix(&self, node: NodeKey) -> Option<Matrix> {
        let output = self.data.outputs.get(&node)?;
        Some(projection::display_matrix(&self.state, node, output))
    }

    pub fn panel(&self) -> Vec<PanelEntry> {
        compose::compose(&self.dag, &self.state, self.latest_active(), &self.data)
    }

    pub fn controls(&self) -> Vec<Control> {
        compose::controls(&self.dag)
    }

    /// Call after the host has laid out the latest render.
    pub fn settle(&mut self, probe: &mut impl LayoutProbe) -> ScrollOutcome {
        self.focus.settle(probe, &self.scroll)
    }

    pub fn format_diagram(&self) -> String {
        compose::format_diagram(&self.dag, &self.data, &self.state, self.latest_active())
    }

    pub fn format_walkthrough(&self) -> String {
        compose::format_walkthrough(&self.panel())
    }
}
