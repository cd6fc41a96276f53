//! The MultiviewSession coordinates streams, layout choice, grid overrides, and focus.

mod operations;
mod types;

pub use types::*;
