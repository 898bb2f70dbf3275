//! Droidwave CLI library.
//!
//! This crate provides the command implementations behind the `droidwave`
//! binary: argument handling, settings resolution, and WAV file output.

pub mod cli_args;
pub mod commands;
