//! Conversation scoping and goal derivation.
//!
//! - [`scope`] - where the exported conversation starts
//! - [`goal`] - the one-line goal used for naming and titles

pub mod goal;
pub mod scope;

pub use goal::{goal_text, FALLBACK_GOAL};
pub use scope::resolve_start;
