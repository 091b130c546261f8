//! Shared runtime helpers for the heroes workspace.

pub mod utils;
