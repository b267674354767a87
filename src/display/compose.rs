//! Lays out revealed stages in display order and renders both columns of the
//! diagram as text.

use crate::compute::projection::display_matrix;
use crate::compute::ActivationState;
use crate::data::ExampleData;
use crate::store::{Dag, Layer, Matrix, NodeKey};
use std::fmt::Write;

/// One block of the explanation column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelEntry {
    pub node: NodeKey,
    pub label: String,
    pub explanation: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Reveal the node and everything it depends on.
    Reveal(NodeKey),
    /// Hide the node and everything that depends on it.
    Hide(NodeKey),
}

impl Action {
    pub fn node(&self) -> NodeKey {
        match self {
            Action::Reveal(n) | Action::Hide(n) => *n,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub action: Action,
    pub aria_label: &'static str,
}

pub fn compose(
    dag: &Dag,
    state: &ActivationState,
    latest: Option<NodeKey>,
    data: &ExampleData,
) -> Vec<PanelEntry> {
    state.active_nodes(dag)
        .map(|node| PanelEntry {
            node,
            label: label_of(dag, node),
            explanation: data.node_logics.get(&node).cloned().unwrap_or_default(),
            highlighted: latest == Some(node),
        })
        .collect()
}

/// The hide/reveal pair every node exposes, in display order.
pub fn controls(dag: &Dag) -> Vec<Control> {
    dag.display_order().iter()
        .flat_map(|&node| {
            [
                Control { action: Action::Hide(node), aria_label: "Deactivate and hide this layer" },
                Control { action: Action::Reveal(node), aria_label: "Activate and show this layer" },
            ]
        })
        .collect()
}

pub fn format_walkthrough(entries: &[PanelEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "LOGIC WALKTHROUGH:");
    let _ = writeln!(out, "--------------------------------------------------");
    if entries.is_empty() {
        let _ = writeln!(out, "(nothing revealed)");
    }
    for entry in entries {
        let marker = if entry.highlighted { ">>" } else { "  " };
        let _ = writeln!(out, "{} {} ({})", marker, entry.label, entry.node);
        for line in entry.explanation.lines() {
            let _ = writeln!(out, "{}     {}", marker, line);
        }
    }
    out
}

pub fn format_diagram(
    dag: &Dag,
    data: &ExampleData,
    state: &ActivationState,
    latest: Option<NodeKey>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "TRANSFORMER DIAGRAM:");
    let _ = writeln!(out, "--------------------------------------------------");
    let tokens: Vec<String> = data.input_tokens.iter().map(|t| format!("[{}]", t)).collect();
    let _ = writeln!(out, "Input: {}", tokens.join(" "));

    let mut current_layer: Option<Layer> = None;
    for &node in dag.display_order() {
        let Some(meta) = dag.meta(node) else { continue };

        if current_layer != Some(meta.layer) {
            let was_in_decoder = current_layer.map_or(false, |l| l.in_decoder());
            if meta.layer.in_decoder() && !was_in_decoder {
                let _ = writeln!(out, "Decoder Layer");
            }
            if matches!(meta.layer, Layer::SelfAttention | Layer::FeedForward) {
                let _ = writeln!(out, "  {}", meta.layer.title());
            }
            current_layer = Some(meta.layer);
        }

        let indent = match meta.layer {
            Layer::Input | Layer::Output => "",
            Layer::Residual => "  ",
            Layer::SelfAttention | Layer::FeedForward => "    ",
        };
        let status = if latest == Some(node) {
            "*"
        } else if state.is_active(node) {
            "+"
        } else {
            "-"
        };
        let _ = writeln!(out, "{}[{}] {}", indent, status, meta.label);

        if node == NodeKey::Embedding {
            for token in data.distinct_tokens() {
                let value = data.vocabulary.get(token).map_or("?".to_string(), |e| e.to_string());
                let _ = writeln!(out, "{}|  {} -> {}", indent, token, value);
            }
        }
        if let Some(output) = data.outputs.get(&node) {
            let shown = display_matrix(state, node, output);
            write_matrix(&mut out, indent, output, &shown);
        }
    }
    out
}

/// Cells are padded to the widest ground-truth value so hidden and revealed
/// matrices occupy the same space.
fn write_matrix(out: &mut String, indent: &str, output: &Matrix, shown: &Matrix) {
    let width = output.iter().flatten().map(|c| c.chars().count()).max().unwrap_or(0);
    for (i, row) in shown.iter().enumerate() {
        let connector = if i == shown.len() - 1 { "`--" } else { "|--" };
        let cells: String = row.iter().map(|c| format!("[{:>w$}]", c, w = width)).collect();
        let _ = writeln!(out, "{}{} {}", indent, connector, cells);
    }
}

fn label_of(dag: &Dag, node: NodeKey) -> String {
    dag.meta(node).map_or_else(|| node.to_string(), |m| m.label.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::Engine;
    use crate::store::Topology;

    fn revealed(dag: &Dag, node: NodeKey) -> ActivationState {
        let mut state = ActivationState::new();
        Engine::new(dag).activate_with_ancestors(&mut state, node);
        state
    }

    #[test]
    fn test_compose_lists_active_nodes_in_order() {
        let dag = Topology::LeftmostHardAttention.dag();
        let data = ExampleData::example_1();
        let state = revealed(&dag, NodeKey::Dot);

        let entries = compose(&dag, &state, Some(NodeKey::Dot), &data);
        let nodes: Vec<NodeKey> = entries.iter().map(|e| e.node).collect();
        assert_eq!(nodes, vec![NodeKey::Embedding, NodeKey::Query, NodeKey::Key, NodeKey::Dot]);

        let highlighted: Vec<NodeKey> = entries.iter().filter(|e| e.highlighted).map(|e| e.node).collect();
        assert_eq!(highlighted, vec![NodeKey::Dot]);
        assert_eq!(entries[3].label, "Scaled Dot-Product");
        assert_eq!(entries[3].explanation, data.node_logics[&NodeKey::Dot]);
    }

    #[test]
    fn test_controls_pair_per_node() {
        let dag = Topology::Direct.dag();
        let controls = controls(&dag);
        assert_eq!(controls.len(), 2 * dag.count());
        assert_eq!(controls[0].action, Action::Hide(NodeKey::Embedding));
        assert_eq!(controls[1].action, Action::Reveal(NodeKey::Embedding));
        assert!(controls.iter().all(|c| dag.contains(c.action.node())));
    }

    #[test]
    fn test_walkthrough_marks_latest() {
        let entries = vec![
            PanelEntry { node: NodeKey::Embedding, label: "Embedding".into(), explanation: "E(x)".into(), highlighted: false },
            PanelEntry { node: NodeKey::Query, label: "Query projection".into(), explanation: "Q(x)\n= E(x)".into(), highlighted: true },
        ];
        let text = format_walkthrough(&entries);
        assert!(text.contains("   Embedding (embedding)\n"));
        assert!(text.contains(">> Query projection (query)\n>>     Q(x)\n>>     = E(x)\n"));
        assert!(format_walkthrough(&[]).contains("(nothing revealed)"));
    }

    #[test]
    fn test_diagram_hides_unrevealed_values() {
        let dag = Topology::LeftmostHardAttention.dag();
        let data = ExampleData::example_1();
        let state = revealed(&dag, NodeKey::Embedding);
        let text = format_diagram(&dag, &data, &state, Some(NodeKey::Embedding));

        assert!(text.contains("Input: [b] [a] [c] [a] [c]"));
        assert!(text.contains("[*] Embedding"));
        assert!(text.contains("|  a -> -11.5"));
        assert!(text.contains("`-- [  0.7][-11.5][    0][-11.5][    0]"));
        assert!(text.contains("    [-] Query projection\n    `-- [    ][    ][    ][    ][    ]"));
        assert!(text.contains("Decoder Layer\n  Masked Self-Attention\n"));
        assert!(text.contains("  Feed Forward\n"));
    }
}
