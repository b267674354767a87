//! Derives the matrices the reader actually sees from the ground-truth outputs.
use crate::compute::state::ActivationState;
use crate::store::{Matrix, NodeKey};
use std::collections::BTreeMap;

/// Same shape as `matrix`, every cell empty, so the layout does not shift.
pub fn blank(matrix: &Matrix) -> Matrix {
    matrix.iter().map(|row| vec![String::new(); row.len()]).collect()
}

/// The matrix shown for one node: the real values when revealed, blanks otherwise.
pub fn display_matrix(state: &ActivationState, node: NodeKey, output: &Matrix) -> Matrix {
    if state.is_active(node) {
        output.clone()
    } else {
        blank(output)
    }
}

/// Projects every output through the activation state.
pub fn project(state: &ActivationState, outputs: &BTreeMap<NodeKey, Matrix>) -> BTreeMap<NodeKey, Matrix> {
    outputs.iter()
        .map(|(&node, output)| (node, display_matrix(state, node, output)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::Engine;
    use crate::store::{Layer, Dag, NodeMetadata};

    fn m(rows: &[&[&str]]) -> Matrix {
        rows.iter().map(|r| r.iter().map(|c| c.to_string()).collect()).collect()
    }

    fn shape(matrix: &Matrix) -> Vec<usize> {
        matrix.iter().map(Vec::len).collect()
    }

    #[test]
    fn test_blank_preserves_ragged_shape() {
        let ragged = m(&[&["1", "0"], &["0.5"], &[]]);
        let blanked = blank(&ragged);
        assert_eq!(shape(&blanked), vec![2, 1, 0]);
        assert!(blanked.iter().flatten().all(String::is_empty));
    }

    #[test]
    fn test_partial_chain_reveal_blanks_the_tail() {
        const A: NodeKey = NodeKey::Embedding;
        const B: NodeKey = NodeKey::Query;
        const C: NodeKey = NodeKey::Key;
        let meta = |name: &str| NodeMetadata::new(name, "bg-slate-600", Layer::Residual);
        let mut dag = Dag::new();
        dag.add_node(A, &[], meta("A")).unwrap();
        dag.add_node(B, &[A], meta("B")).unwrap();
        dag.add_node(C, &[B], meta("C")).unwrap();

        let outputs = BTreeMap::from([
            (A, m(&[&["0.7", "-11.5"]])),
            (B, m(&[&["-1.1", "-1.5"]])),
            (C, m(&[&["1", "0"], &["0", "1"]])),
        ]);

        let mut state = ActivationState::new();
        Engine::new(&dag).activate_with_ancestors(&mut state, B);
        let shown = project(&state, &outputs);

        assert_eq!(shown[&A], outputs[&A]);
        assert_eq!(shown[&B], outputs[&B]);
        assert_eq!(shape(&shown[&C]), shape(&outputs[&C]));
        assert!(shown[&C].iter().flatten().all(String::is_empty));
    }

    #[test]
    fn test_every_state_preserves_shape() {
        let output = m(&[&["1", "0", "0"], &["0", "1"]]);
        let mut state = ActivationState::new();
        for active in [false, true] {
            state.set(NodeKey::Dot, active);
            let shown = display_matrix(&state, NodeKey::Dot, &output);
            assert_eq!(shape(&shown), shape(&output));
            if active {
                assert_eq!(shown, output);
            } else {
                assert!(shown.iter().flatten().all(String::is_empty));
            }
        }
    }
}
