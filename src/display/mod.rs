//! Presentation of the reveal state: text rendering and scroll synchronization.
pub mod compose;
pub mod focus;

pub use compose::{Action, Control, PanelEntry};
pub use focus::{FocusTracker, LayoutProbe, ScrollOutcome};
