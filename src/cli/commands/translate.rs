//! `text` and `file` command handlers.

use anyhow::Result;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{CredentialArgs, Settings, resolve_credential};
use crate::error::CommandError;
use crate::translation::{LanguageCode, Payload, TranslationRequest, TranslationResult, Translator};
use crate::ui::{Prompter, Spinner, Style};

/// Progress of a translate command, logged at debug level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Init,
    CredentialResolved,
    Validated,
    Dispatched,
    Reported,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Init => "init",
            Self::CredentialResolved => "credential-resolved",
            Self::Validated => "validated",
            Self::Dispatched => "dispatched",
            Self::Reported => "reported",
        };
        f.write_str(name)
    }
}

fn enter(stage: Stage) {
    tracing::debug!(stage = %stage, "translate");
}

pub struct TranslateOptions {
    pub credentials: CredentialArgs,
    pub target_language: Option<String>,
    pub payload: Payload,
}

/// Resolves the key, validates the request, calls the translator and prints
/// the outcome to `out`.
///
/// Every precondition is checked before the translator is touched, so an
/// aborted command never reaches the network.
pub async fn run_translate<T, P, W>(
    options: TranslateOptions,
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
    enter(Stage::Init);
    let (credential, source) =
        resolve_credential(&options.credentials, settings.persisted_credential.as_ref())?
            .ok_or(CommandError::MissingCredential)?;
    tracing::debug!(source = %source, "using API key");

    enter(Stage::CredentialResolved);
    let code = match options.target_language {
        Some(code) => code,
        None => prompter.ask("Language of translation:")?,
    };
    let target = LanguageCode::parse(&code)?;

    if let Payload::File { input, .. } = &options.payload
        && !input.is_file()
    {
        return Err(CommandError::FileNotFound {
            path: input.clone(),
        }
        .into());
    }

    enter(Stage::Validated);
    if let Payload::File { output, .. } = &options.payload
        && output.exists()
    {
        confirm_overwrite(prompter, output)?;
    }

    let request = TranslationRequest {
        payload: options.payload,
        target,
        credential,
    };

    enter(Stage::Dispatched);
    let spinner = Spinner::new("Translating...");
    let result = request.send(translator).await;
    spinner.stop();
    let result = result.map_err(CommandError::from)?;

    report(out, &result)?;

    enter(Stage::Reported);
    Ok(())
}

/// Asks before replacing `path`. Anything but an answer starting with `y`
/// declines, including a cancelled or unavailable prompt.
fn confirm_overwrite<P: Prompter>(prompter: &mut P, path: &Path) -> Result<()> {
    let question = format!("File {} already exists. Overwrite? [y/n]", path.display());

    let answer = prompter.ask(&question).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "no answer to overwrite prompt");
        String::new()
    });

    if accepts_overwrite(&answer) {
        Ok(())
    } else {
        Err(CommandError::OverwriteDeclined {
            path: PathBuf::from(path),
        }
        .into())
    }
}

/// Returns `true` for answers that start with `y` or `Y`.
pub fn accepts_overwrite(answer: &str) -> bool {
    answer.trim_start().starts_with(['y', 'Y'])
}

fn report<W: Write>(out: &mut W, result: &TranslationResult) -> Result<()> {
    match result {
        TranslationResult::Text(text) => writeln!(out, "{text}")?,
        TranslationResult::Document { input, output } => writeln!(
            out,
            "{}",
            Style::success(format!(
                "File {} has been successfully translated and saved as {}.",
                input.display(),
                output.display()
            ))
        )?,
    }
    out.flush()?;
    Ok(())
}
