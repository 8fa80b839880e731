//! Client-side interaction state.
//!
//! DESIGN
//! ======
//! `disclosure` is the pure open/closed state machine; `disclosure_controller`
//! pairs it with scoped ownership of the dismissal listeners.

pub mod disclosure;
pub mod disclosure_controller;
