//! Login command handler for saving the API key.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::{Credential, CredentialArgs, CredentialStore, read_key_file, resolve_credential};
use crate::error::CommandError;
use crate::ui::{Prompter, Style, handle_prompt_cancellation};

/// How many unusable answers the interactive login accepts before giving up.
pub const MAX_LOGIN_ATTEMPTS: usize = 5;

/// Result of a login that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Saved(PathBuf),
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoginChoice {
    KeyFile,
    TypeKey,
    Exit,
}

impl LoginChoice {
    fn parse(answer: &str) -> Option<Self> {
        match answer.trim().to_lowercase().as_str() {
            "f" | "file" => Some(Self::KeyFile),
            "k" | "key" => Some(Self::TypeKey),
            "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Saves an API key to `store`.
///
/// With an explicit key or key file the value is saved directly; otherwise
/// the user is asked for one. Never talks to the API.
pub fn run_login<P: Prompter>(
    args: &CredentialArgs,
    store: &CredentialStore,
    prompter: &mut P,
) -> Result<LoginOutcome> {
    let credential = if args.is_empty() {
        match handle_prompt_cancellation(|| prompt_for_credential(prompter))?.flatten() {
            Some(credential) => credential,
            None => {
                crate::status!("Login cancelled, nothing saved.");
                return Ok(LoginOutcome::Cancelled);
            }
        }
    } else {
        resolve_credential(args, None)?
            .map(|(credential, _)| credential)
            .ok_or(CommandError::MissingCredential)?
    };

    store
        .persist(&credential)
        .map_err(|source| CommandError::CredentialWriteFailed {
            path: store.path().to_path_buf(),
            source,
        })?;

    crate::status!(
        "{} API key saved to {}",
        Style::success("✓"),
        Style::secondary(store.path().display())
    );

    Ok(LoginOutcome::Saved(store.path().to_path_buf()))
}

/// Asks until a usable key is entered, the user types `exit`, or
/// [`MAX_LOGIN_ATTEMPTS`] answers were unusable.
fn prompt_for_credential<P: Prompter>(prompter: &mut P) -> Result<Option<Credential>> {
    for attempt in 1..=MAX_LOGIN_ATTEMPTS {
        let answer =
            prompter.ask("Load the API key from a [f]ile or type the [k]ey? ('exit' to cancel)")?;

        match LoginChoice::parse(&answer) {
            Some(LoginChoice::Exit) => return Ok(None),
            Some(LoginChoice::KeyFile) => {
                let path = prompter.ask("Path to key file:")?;
                let path = Path::new(path.trim());
                match read_key_file(path) {
                    Ok(Some(credential)) => return Ok(Some(credential)),
                    Ok(None) => crate::warn!(
                        "{} {} does not contain a key",
                        Style::warning("Warning:"),
                        path.display()
                    ),
                    Err(e) => crate::warn!("{} {e}", Style::warning("Warning:")),
                }
            }
            Some(LoginChoice::TypeKey) => {
                let key = prompter.ask_secret("API key:")?;
                if let Some(credential) = Credential::new(&key) {
                    return Ok(Some(credential));
                }
                crate::warn!("{} API key must not be empty", Style::warning("Warning:"));
            }
            None => crate::warn!(
                "{} Unrecognised option '{}'. Answer 'f', 'k' or 'exit'.",
                Style::warning("Warning:"),
                answer.trim()
            ),
        }

        tracing::debug!(attempt, "login answer not usable");
    }

    Err(CommandError::LoginAttemptsExhausted {
        attempts: MAX_LOGIN_ATTEMPTS,
    }
    .into())
}
