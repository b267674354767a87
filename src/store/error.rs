//! Defines the error types for registering nodes in a `Dag`.
use super::types::NodeKey;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    #[error("Node '{node}' lists parent '{parent}', which has not been registered yet")]
    UnknownParent { node: NodeKey, parent: NodeKey },
    #[error("Node '{0}' is registered twice")]
    DuplicateNode(NodeKey),
}
