//! Subcommands.

pub mod configure;
pub mod picker;
