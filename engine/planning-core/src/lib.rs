//! Core traits and types for model-based planning
//!
//! This crate provides the abstractions every planner crate agrees on:
//! - `Model`: a (possibly learned or sampled) environment simulator
//! - `Transition`: the outcome of one simulated action
//! - `Shared`: the handle type for collaborators held by several planners
//! - `indent`: indentation helper for the `describe` diagnostics

pub mod model;
pub mod shared;

pub use model::{Model, ModelError, Transition};
pub use shared::{shared, Shared};

/// Indentation prefix for `describe` output, two spaces per level.
pub fn indent(level: usize) -> String {
    "  ".repeat(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(1), "  ");
        assert_eq!(indent(3), "      ");
    }
}
