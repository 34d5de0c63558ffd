//! Terminal output helpers.
//!
//! Messages go to standard output. Colour is applied only when stdout
//! supports it, so piped output stays plain.

pub mod output;

pub use output::*;
