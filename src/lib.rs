//! # deeplcmd - DeepL from the command line
//!
//! `deeplcmd` translates a piece of text or a whole document with the DeepL
//! API and prints or saves the result.
//!
//! ## Quick Start
//!
//! ```bash
//! # Save an API key once
//! deeplcmd login --key 0f1e2d3c-...:fx
//!
//! # Translate text
//! deeplcmd text --target-language RU "Hello"
//!
//! # Translate a document
//! deeplcmd file --target-language DE report.docx report.de.docx
//!
//! # Use a different key for one invocation
//! deeplcmd --keyfile ~/work.key text -t FR "Good morning"
//! ```
//!
//! ## Credentials
//!
//! The key is taken from `--key`, then `--keyfile`, then the key saved by
//! `deeplcmd login` in `~/.config/deeplcmd/credentials`:
//!
//! ```text
//! APIKEY=0f1e2d3c-...:fx
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Credential resolution, the credential store and invocation settings.
pub mod config;

/// Error taxonomy and exit codes.
pub mod error;

/// File system utilities.
pub mod fs;

/// Diagnostic logging setup.
pub mod logging;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Language registry and the DeepL translation client.
pub mod translation;

/// Terminal UI components (prompts, spinner, colors).
pub mod ui;
