//! Static checks that example data fits the topology it is shown with.
use crate::data::ExampleData;
use crate::store::{Dag, NodeKey};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataIssue {
    #[error("No output matrix for stage '{0}'")]
    MissingOutput(NodeKey),
    #[error("No explanation for stage '{0}'")]
    MissingLogic(NodeKey),
    #[error("Output supplied for stage '{0}', which this topology does not contain")]
    UnexpectedOutput(NodeKey),
    #[error("Explanation supplied for stage '{0}', which this topology does not contain")]
    UnexpectedLogic(NodeKey),
    #[error("Input token '{0}' has no vocabulary entry")]
    UnknownToken(String),
    #[error("Input sequence is empty")]
    EmptyInput,
}

/// Collects every problem rather than stopping at the first.
pub fn validate_example(dag: &Dag, data: &ExampleData) -> Result<(), Vec<DataIssue>> {
    let mut issues = Vec::new();

    for &node in dag.display_order() {
        if !data.outputs.contains_key(&node) {
            issues.push(DataIssue::MissingOutput(node));
        }
        if !data.node_logics.contains_key(&node) {
            issues.push(DataIssue::MissingLogic(node));
        }
    }
    issues.extend(data.outputs.keys().filter(|n| !dag.contains(**n)).map(|&n| DataIssue::UnexpectedOutput(n)));
    issues.extend(data.node_logics.keys().filter(|n| !dag.contains(**n)).map(|&n| DataIssue::UnexpectedLogic(n)));

    if data.input_tokens.is_empty() {
        issues.push(DataIssue::EmptyInput);
    }
    for token in data.distinct_tokens() {
        if !data.vocabulary.contains_key(token) {
            issues.push(DataIssue::UnknownToken(token.to_string()));
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}
