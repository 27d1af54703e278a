use std::time::Duration;

use super::credential::Credential;
use super::store::CredentialStore;

/// Request timeout used when `--timeout` is not given.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything an invocation needs to know before it starts.
///
/// Built once in `main` and only ever borrowed afterwards.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Where `login` saves the credential.
    pub store: CredentialStore,
    /// The credential saved by a previous `login`, if any.
    pub persisted_credential: Option<Credential>,
    /// API base URL override (`--server-url` / `DEEPL_SERVER_URL`).
    pub server_url: Option<String>,
    /// Timeout applied to every HTTP request.
    pub timeout: Duration,
}

impl Settings {
    /// Reads the saved credential from `store`.
    ///
    /// An unreadable credential file counts as no saved credential, so an
    /// explicit key still works and `login` can replace the file.
    pub fn load(store: CredentialStore) -> Self {
        let persisted_credential = store.load().unwrap_or_else(|e| {
            tracing::warn!(error = %format!("{e:#}"), "ignoring unreadable credential file");
            None
        });

        Self {
            store,
            persisted_credential,
            server_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_server_url(mut self, server_url: Option<String>) -> Self {
        self.server_url = server_url.filter(|url| !url.trim().is_empty());
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
