//! pdfpick CLI library: configuration, the terminal host, and commands.
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]

/// CLI subcommand implementations.
pub mod commands;
/// CLI configuration: read/write `~/.pdfpick/config.toml`.
pub mod config;
/// Terminal implementation of the picker's host context.
pub mod host;
