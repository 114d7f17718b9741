//! Domain layer: property classes, automaton states and the transition rules
//!
//! Everything here is pure and allocation-free. The iterator and the
//! streaming functions are thin drivers over [`transition::resolve`].

pub mod property;
pub mod state;
pub mod transition;

pub use property::{GraphemeProperty, PropertyClassifier, UnicodeClassifier};
pub use state::ClusterState;
pub use transition::{lookup, resolve, step, tie_break, Rule, Transition};
