//! The two hand-authored decoder topologies.

use super::registry::Dag;
use super::types::{Layer, NodeKey, NodeMetadata};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    /// Argmax feeds an explicit leftmost-selection stage before the weighted sum.
    #[default]
    LeftmostHardAttention,
    /// Argmax feeds the weighted sum directly.
    Direct,
}

impl Topology {
    pub fn dag(&self) -> Dag {
        use NodeKey::*;

        let residual = match self {
            Topology::LeftmostHardAttention => "Add",
            Topology::Direct => "Add & Norm",
        };
        let attn = |label: &str| NodeMetadata::new(label, "bg-amber-600", Layer::SelfAttention);
        let ff = |label: &str| NodeMetadata::new(label, "bg-lime-600", Layer::FeedForward);
        let add_norm = || NodeMetadata::new(residual, "bg-slate-600", Layer::Residual);

        let mut dag = Dag::new();
        let mut add = |node: NodeKey, parents: &[NodeKey], meta: NodeMetadata| {
            dag.add_node(node, parents, meta)
                .expect("BUG: preset topologies list every parent before its children");
        };

        add(Embedding, &[], NodeMetadata::new("Embedding", "bg-blue-700", Layer::Input));
        add(Query, &[Embedding], attn("Query projection"));
        add(Key, &[Embedding], attn("Key projection"));
        add(Value, &[Embedding], attn("Value projection"));
        add(Dot, &[Query, Key], attn("Scaled Dot-Product"));
        add(Argmax, &[Dot], attn("Argmax"));
        match self {
            Topology::LeftmostHardAttention => {
                add(Leftmost, &[Argmax], attn("Leftmost"));
                add(Wsum, &[Leftmost, Value], attn("Weighted sum"));
            }
            Topology::Direct => add(Wsum, &[Argmax, Value], attn("Weighted sum")),
        }
        add(Proj, &[Wsum], attn("Projection"));
        add(Addnorm1, &[Proj], add_norm());
        add(FfLinear1, &[Addnorm1], ff("Linear"));
        add(FfGelu, &[FfLinear1], ff("GELU"));
        add(FfLinear2, &[FfGelu], ff("Linear"));
        add(Addnorm2, &[FfLinear2], add_norm());
        add(Linear, &[Addnorm2], NodeMetadata::new("Linear", "bg-rose-600", Layer::Output));

        dag
    }
}
