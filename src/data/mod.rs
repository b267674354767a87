//! Per-example content injected into a diagram: the input sentence, its
//! vocabulary, the logical explanation of each stage and each stage's output.

use crate::config::ConfigError;
use crate::store::{Matrix, NodeKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// A vocabulary entry. One-dimensional models embed to a single number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Embedding {
    Scalar(f64),
    Vector(Vec<f64>),
}

impl fmt::Display for Embedding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Embedding::Scalar(v) => write!(f, "{}", v),
            Embedding::Vector(vs) => {
                let parts: Vec<String> = vs.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleData {
    pub input_tokens: Vec<String>,
    pub vocabulary: BTreeMap<String, Embedding>,
    /// Explanation shown beside each revealed stage (LaTeX source).
    pub node_logics: BTreeMap<NodeKey, String>,
    pub outputs: BTreeMap<NodeKey, Matrix>,
}

impl ExampleData {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// A one-layer, one-dimensional transformer trained on `Σ*aΣ*`.
    pub fn example_1() -> Self {
        Self::builtin(include_str!("transformer1.json"))
    }

    /// The same model at an earlier checkpoint, before it reaches perfect accuracy.
    pub fn example_2() -> Self {
        Self::builtin(include_str!("transformer2.json"))
    }

    fn builtin(json: &str) -> Self {
        serde_json::from_str(json).expect("BUG: bundled example data must deserialize")
    }

    /// The distinct input tokens, sorted, as listed in the embedding table.
    pub fn distinct_tokens(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = self.input_tokens.iter().map(String::as_str).collect();
        tokens.sort_unstable();
        tokens.dedup();
        tokens
    }
}
