//! Subcommands of the `jlex` binary that do not tokenize input.
pub mod generate;
