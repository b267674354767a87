//! Host bindings for the diagram.
pub mod python;
