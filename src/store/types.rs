use serde::{Deserialize, Serialize};
use std::fmt;

/// One stage of the decoder's computation, as shown in the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKey {
    Embedding,
    Query,
    Key,
    Value,
    Dot,
    Argmax,
    Leftmost,
    Wsum,
    Proj,
    Addnorm1,
    FfLinear1,
    FfGelu,
    FfLinear2,
    Addnorm2,
    Linear,
}

impl NodeKey {
    pub const COUNT: usize = 15;

    pub const ALL: [NodeKey; NodeKey::COUNT] = [
        NodeKey::Embedding,
        NodeKey::Query,
        NodeKey::Key,
        NodeKey::Value,
        NodeKey::Dot,
        NodeKey::Argmax,
        NodeKey::Leftmost,
        NodeKey::Wsum,
        NodeKey::Proj,
        NodeKey::Addnorm1,
        NodeKey::FfLinear1,
        NodeKey::FfGelu,
        NodeKey::FfLinear2,
        NodeKey::Addnorm2,
        NodeKey::Linear,
    ];

    #[inline(always)]
    pub fn index(&self) -> usize { *self as usize }

    /// The snake_case identifier used in example data and at the Python boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKey::Embedding => "embedding",
            NodeKey::Query => "query",
            NodeKey::Key => "key",
            NodeKey::Value => "value",
            NodeKey::Dot => "dot",
            NodeKey::Argmax => "argmax",
            NodeKey::Leftmost => "leftmost",
            NodeKey::Wsum => "wsum",
            NodeKey::Proj => "proj",
            NodeKey::Addnorm1 => "addnorm1",
            NodeKey::FfLinear1 => "ff_linear1",
            NodeKey::FfGelu => "ff_gelu",
            NodeKey::FfLinear2 => "ff_linear2",
            NodeKey::Addnorm2 => "addnorm2",
            NodeKey::Linear => "linear",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == s)
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The block of the decoder a node is drawn inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    Input,
    SelfAttention,
    Residual,
    FeedForward,
    Output,
}

impl Layer {
    pub fn title(&self) -> &'static str {
        match self {
            Layer::Input => "Input",
            Layer::SelfAttention => "Masked Self-Attention",
            Layer::Residual => "Residual",
            Layer::FeedForward => "Feed Forward",
            Layer::Output => "Output",
        }
    }

    /// Whether the layer sits inside the decoder box.
    pub fn in_decoder(&self) -> bool {
        matches!(self, Layer::SelfAttention | Layer::Residual | Layer::FeedForward)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeMetadata {
    pub label: String,
    pub color: String,
    pub layer: Layer,
}

impl NodeMetadata {
    pub fn new(label: &str, color: &str, layer: Layer) -> Self {
        Self { label: label.into(), color: color.into(), layer }
    }
}

/// A stage's output as display strings, rows by columns. Rows may be ragged.
pub type Matrix = Vec<Vec<String>>;
