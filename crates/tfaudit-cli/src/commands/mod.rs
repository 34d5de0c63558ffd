//! CLI command implementations.

pub mod view;
