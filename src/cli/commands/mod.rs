//! Subcommand implementations.

/// Login command handler.
pub mod login;

/// Text and document translation command handlers.
pub mod translate;
