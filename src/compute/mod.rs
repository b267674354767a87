//! Mutates the reveal state and derives what is shown from it.
pub mod engine;
pub mod projection;
pub mod state;

pub use engine::Engine;
pub use state::ActivationState;
