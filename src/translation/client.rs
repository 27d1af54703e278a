use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::time::Instant;

use super::{AdapterError, LanguageCode, Translator};
use crate::config::Credential;
use crate::fs::atomic_write;

const PRO_API_URL: &str = "https://api.deepl.com";
const FREE_API_URL: &str = "https://api-free.deepl.com";

/// HTTP status DeepL uses for an exhausted character quota.
const QUOTA_EXCEEDED: u16 = 456;

const MAX_POLL_DELAY_SECS: u64 = 30;

/// Document polling may take this many request timeouts in total.
const DOCUMENT_WAIT_FACTOR: u32 = 10;

#[derive(Debug, Serialize)]
struct TextRequest<'a> {
    text: [&'a str; 1],
    target_lang: &'a str,
}

#[derive(Debug, Deserialize)]
struct TextResponse {
    translations: Vec<TextTranslation>,
}

#[derive(Debug, Deserialize)]
struct TextTranslation {
    #[serde(default)]
    detected_source_language: Option<String>,
    text: String,
}

#[derive(Debug, Deserialize)]
struct DocumentHandle {
    document_id: String,
    document_key: String,
}

#[derive(Debug, Serialize)]
struct DocumentKey<'a> {
    document_key: &'a str,
}

#[derive(Debug, Deserialize)]
struct DocumentStatus {
    status: DocumentState,
    #[serde(default)]
    seconds_remaining: Option<u64>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum DocumentState {
    Queued,
    Translating,
    Done,
    Error,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Picks the API base URL: an explicit override, else the free or pro
/// endpoint depending on the key.
pub fn base_url_for(server_url: Option<&str>, credential: &Credential) -> String {
    let url = server_url.unwrap_or(if credential.is_free_tier() {
        FREE_API_URL
    } else {
        PRO_API_URL
    });
    url.trim_end_matches('/').to_string()
}

/// [`Translator`] backed by the DeepL REST API (v2).
pub struct DeeplClient {
    client: Client,
    server_url: Option<String>,
    document_wait: Duration,
}

impl DeeplClient {
    pub fn new(server_url: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("deeplcmd/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            server_url,
            document_wait: timeout.saturating_mul(DOCUMENT_WAIT_FACTOR),
        })
    }

    fn url(&self, credential: &Credential, path: &str) -> String {
        format!(
            "{}{path}",
            base_url_for(self.server_url.as_deref(), credential)
        )
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &str,
        credential: &Credential,
        body: &B,
    ) -> Result<Response, AdapterError> {
        let response = self
            .client
            .post(url)
            .header("Authorization", auth_header(credential)?)
            .json(body)
            .send()
            .await
            .map_err(|e| transport_error(url, &e))?;

        check_status(response).await
    }

    async fn upload_document(
        &self,
        input: &Path,
        target: &LanguageCode,
        credential: &Credential,
    ) -> Result<DocumentHandle, AdapterError> {
        let bytes = tokio::fs::read(input).await.map_err(|e| {
            AdapterError::Unrecognized(format!("Failed to read {}: {e}", input.display()))
        })?;
        let file_name = input
            .file_name()
            .map_or_else(|| "document".to_string(), |n| n.to_string_lossy().into_owned());

        let form = Form::new()
            .text("target_lang", target.to_string())
            .part("file", Part::bytes(bytes).file_name(file_name));

        let url = self.url(credential, "/v2/document");
        let response = self
            .client
            .post(&url)
            .header("Authorization", auth_header(credential)?)
            .multipart(form)
            .send()
            .await
            .map_err(|e| transport_error(&url, &e))?;

        check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| decode_error(&e))
    }

    async fn wait_for_document(
        &self,
        handle: &DocumentHandle,
        credential: &Credential,
    ) -> Result<(), AdapterError> {
        let url = self.url(credential, &format!("/v2/document/{}", handle.document_id));
        let key = DocumentKey {
            document_key: &handle.document_key,
        };
        let started = Instant::now();

        loop {
            let status: DocumentStatus = self
                .post_json(&url, credential, &key)
                .await?
                .json()
                .await
                .map_err(|e| decode_error(&e))?;

            tracing::debug!(
                document_id = %handle.document_id,
                status = ?status.status,
                seconds_remaining = ?status.seconds_remaining,
                "document status"
            );

            match status.status {
                DocumentState::Done => return Ok(()),
                DocumentState::Error => {
                    return Err(AdapterError::Unrecognized(status.error_message.unwrap_or_else(
                        || "Document translation failed".to_string(),
                    )));
                }
                DocumentState::Unknown => {
                    return Err(AdapterError::Unrecognized(format!(
                        "Unexpected status for document {}",
                        handle.document_id
                    )));
                }
                DocumentState::Queued | DocumentState::Translating => {
                    let delay = poll_delay(status.seconds_remaining);
                    if started.elapsed() + delay > self.document_wait {
                        return Err(AdapterError::Unrecognized(format!(
                            "Document translation did not finish within {}s",
                            self.document_wait.as_secs()
                        )));
                    }
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}

impl Translator for DeeplClient {
    async fn translate_text(
        &self,
        text: &str,
        target: &LanguageCode,
        credential: &Credential,
    ) -> Result<String, AdapterError> {
        let url = self.url(credential, "/v2/translate");
        tracing::debug!(%url, target = %target, chars = text.chars().count(), "translating text");

        let request = TextRequest {
            text: [text],
            target_lang: target.as_str(),
        };

        let response: TextResponse = self
            .post_json(&url, credential, &request)
            .await?
            .json()
            .await
            .map_err(|e| decode_error(&e))?;

        let translation = response
            .translations
            .into_iter()
            .next()
            .ok_or_else(|| AdapterError::Unrecognized("API returned no translation".to_string()))?;

        if let Some(source) = &translation.detected_source_language {
            tracing::info!(source = %source, target = %target, "translated text");
        }

        Ok(translation.text)
    }

    async fn translate_document(
        &self,
        input: &Path,
        output: &Path,
        target: &LanguageCode,
        credential: &Credential,
    ) -> Result<(), AdapterError> {
        let handle = self.upload_document(input, target, credential).await?;
        tracing::info!(document_id = %handle.document_id, "document uploaded");

        self.wait_for_document(&handle, credential).await?;

        let url = self.url(
            credential,
            &format!("/v2/document/{}/result", handle.document_id),
        );
        let key = DocumentKey {
            document_key: &handle.document_key,
        };
        let bytes = self
            .post_json(&url, credential, &key)
            .await?
            .bytes()
            .await
            .map_err(|e| transport_error(&url, &e))?;

        atomic_write(output, &bytes)
            .map_err(|e| AdapterError::Unrecognized(format!("{e:#}")))?;

        tracing::info!(output = %output.display(), bytes = bytes.len(), "document saved");
        Ok(())
    }
}

fn auth_header(credential: &Credential) -> Result<String, AdapterError> {
    let key = credential.expose().trim();
    if key.is_empty() {
        return Err(AdapterError::EmptyCredential);
    }
    Ok(format!("DeepL-Auth-Key {key}"))
}

async fn check_status(response: Response) -> Result<Response, AdapterError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::debug!(%status, %body, "API request failed");
    Err(error_for_status(status, &body))
}

fn error_for_status(status: StatusCode, body: &str) -> AdapterError {
    match status {
        StatusCode::FORBIDDEN | StatusCode::UNAUTHORIZED => AdapterError::AuthenticationFailed,
        s if s.as_u16() == QUOTA_EXCEEDED => {
            AdapterError::Unrecognized("Quota exceeded. The character limit has been reached".to_string())
        }
        s => {
            let message = serde_json::from_str::<ErrorBody>(body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| body.trim().to_string());
            if message.is_empty() {
                AdapterError::Unrecognized(format!("API request failed with status {s}"))
            } else {
                AdapterError::Unrecognized(format!(
                    "API request failed with status {s}: {message}"
                ))
            }
        }
    }
}

fn transport_error(url: &str, err: &reqwest::Error) -> AdapterError {
    if err.is_timeout() {
        AdapterError::Unrecognized(format!("Request to {url} timed out"))
    } else {
        AdapterError::Unrecognized(format!("Failed to connect to API endpoint {url}: {err}"))
    }
}

fn decode_error(err: &reqwest::Error) -> AdapterError {
    AdapterError::Unrecognized(format!("Unexpected API response: {err}"))
}

fn poll_delay(seconds_remaining: Option<u64>) -> Duration {
    Duration::from_secs(seconds_remaining.unwrap_or(1).clamp(1, MAX_POLL_DELAY_SECS))
}
