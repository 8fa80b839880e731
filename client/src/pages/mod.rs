//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The site is a single page; `portfolio` composes the shell and delegates
//! each section to `components`.

pub mod portfolio;
