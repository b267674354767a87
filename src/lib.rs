//! Progressive reveal of a transformer's computation, stage by stage, next to
//! the logical formula each stage computes.
//!
//! The core is host-agnostic: `TransformerDiagram` owns the reveal state and
//! exposes what a renderer needs. The optional `python` feature wraps it in
//! the `_core` extension module.

pub mod analysis;
pub mod compute;
pub mod config;
pub mod data;
pub mod diagram;
pub mod display;
pub mod store;

#[cfg(feature = "python")]
pub mod bindings;

pub use config::{ConfigError, DiagramConfig, ScrollConfig};
pub use data::{Embedding, ExampleData};
pub use diagram::TransformerDiagram;
pub use store::{NodeKey, Topology};

#[cfg(feature = "python")]
use pyo3::prelude::*;

// --- Module Definition ---
/// Defines the `_core` Python module.
/// The name `_core` is chosen to indicate it's an internal, compiled component.
#[cfg(feature = "python")]
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<bindings::python::PyTransformerDiagram>()?;
    Ok(())
}
