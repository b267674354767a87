//! Graph algorithms over the DAG and static checks on example data.
pub mod topology;
pub mod validation;

pub use validation::{validate_example, DataIssue};
