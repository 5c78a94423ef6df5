//! Collaborators with side effects, and the builder that wires them together.

pub mod builder;
pub mod config;
pub mod locator;
pub mod output;
