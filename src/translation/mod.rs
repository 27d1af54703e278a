//! Translation requests and the adapter seam to the remote service.

mod client;
mod language;

use std::path::{Path, PathBuf};

use crate::config::Credential;

pub use client::{DeeplClient, base_url_for};
pub use language::{LanguageCode, SUPPORTED_LANGUAGES, describe, is_supported, language_table};

/// Failures reported by a [`Translator`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdapterError {
    #[error("authentication failed")]
    AuthenticationFailed,
    #[error("key must not be empty")]
    EmptyCredential,
    #[error("{0}")]
    Unrecognized(String),
}

/// The two remote operations the CLI needs.
///
/// Callers validate the language code and make sure the credential is
/// present before calling; implementations make exactly one attempt.
#[allow(async_fn_in_trait)]
pub trait Translator {
    async fn translate_text(
        &self,
        text: &str,
        target: &LanguageCode,
        credential: &Credential,
    ) -> Result<String, AdapterError>;

    /// Translates `input` and writes the result to `output`.
    async fn translate_document(
        &self,
        input: &Path,
        output: &Path,
        target: &LanguageCode,
        credential: &Credential,
    ) -> Result<(), AdapterError>;
}

/// What to translate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Text(String),
    File { input: PathBuf, output: PathBuf },
}

/// A fully validated request, consumed by [`TranslationRequest::send`].
#[derive(Debug)]
pub struct TranslationRequest {
    pub payload: Payload,
    pub target: LanguageCode,
    pub credential: Credential,
}

/// The outcome of a successful request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationResult {
    Text(String),
    Document { input: PathBuf, output: PathBuf },
}

impl TranslationRequest {
    pub async fn send<T: Translator>(self, translator: &T) -> Result<TranslationResult, AdapterError> {
        match self.payload {
            Payload::Text(text) => {
                let translated = translator
                    .translate_text(&text, &self.target, &self.credential)
                    .await?;
                Ok(TranslationResult::Text(translated))
            }
            Payload::File { input, output } => {
                translator
                    .translate_document(&input, &output, &self.target, &self.credential)
                    .await?;
                Ok(TranslationResult::Document { input, output })
            }
        }
    }
}
