//! Command implementations for the `droidwave` binary.

pub mod effects;
pub mod say;
