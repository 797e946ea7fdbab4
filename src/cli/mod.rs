//! CLI module for namesmith - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for name generation,
//! streamed generation, compliance checks, and lookup URLs.

pub mod commands;

pub use commands::Cli;
