//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Subcommand implementations.
pub mod commands;

pub use args::{Args, Command, TargetLanguage};

use anyhow::Result;
use std::io::Write;

use crate::config::{CredentialArgs, Settings};
use crate::translation::{Payload, Translator, language_table};
use crate::ui::Prompter;
use commands::login::run_login;
use commands::translate::{TranslateOptions, run_translate};

/// Runs one subcommand.
///
/// `credentials` are the global `--key`/`--keyfile` values. They override the
/// saved login for this invocation only, except that a bare `login` saves them.
pub async fn dispatch<T, P, W>(
    command: Command,
    credentials: CredentialArgs,
    settings: &Settings,
    translator: &T,
    prompter: &mut P,
    out: &mut W,
) -> Result<()>
where
    T: Translator,
    P: Prompter,
    W: Write,
{
    match command {
        Command::Login { key, keyfile } => {
            let own = CredentialArgs { key, keyfile };
            let args = if own.is_empty() { credentials } else { own };
            run_login(&args, &settings.store, prompter)?;
        }
        Command::Text { target, text } => {
            let options = TranslateOptions {
                credentials,
                target_language: target.target_language,
                payload: Payload::Text(text),
            };
            run_translate(options, settings, translator, prompter, out).await?;
        }
        Command::File {
            target,
            input,
            output,
        } => {
            let options = TranslateOptions {
                credentials,
                target_language: target.target_language,
                payload: Payload::File { input, output },
            };
            run_translate(options, settings, translator, prompter, out).await?;
        }
        Command::Languages => {
            write!(out, "{}", language_table())?;
        }
    }

    Ok(())
}
