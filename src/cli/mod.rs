//! Command-line interface for freezeup.
//!
//! There are no subcommands: one invocation runs the whole bootstrap
//! pipeline for one script.

pub mod args;

pub use args::Cli;
