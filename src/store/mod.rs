//! The static description of a diagram: node keys, metadata and the DAG.
pub mod error;
pub mod registry;
pub mod topology;
pub mod types;

pub use error::TopologyError;
pub use registry::Dag;
pub use topology::Topology;
pub use types::{Layer, Matrix, NodeKey, NodeMetadata};
