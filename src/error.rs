//! Error taxonomy for a single invocation.
//!
//! Inner components return `anyhow::Result` values that carry a
//! [`CommandError`]; only `main` turns them into a process exit status.

use std::path::PathBuf;

use crate::translation::AdapterError;

/// Exit status used when the user declines or cancels an operation.
pub const ABORTED: exitcode::ExitCode = 1;

/// Terminal failures of a command. None of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("API key not provided. Pass --key or --keyfile, or run 'deeplcmd login'")]
    MissingCredential,

    #[error("Target language {code} is not recognised.")]
    UnsupportedLanguage { code: String },

    #[error("Authentication failure. Check API key")]
    AuthenticationFailed,

    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Not overwriting {}", path.display())]
    OverwriteDeclined { path: PathBuf },

    #[error("Failed to save API key to {}", path.display())]
    CredentialWriteFailed {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to read key file {}", path.display())]
    KeyFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No valid choice after {attempts} attempts, giving up")]
    LoginAttemptsExhausted { attempts: usize },

    #[error("Translation failed: {0}")]
    RemoteOperationFailed(String),
}

impl CommandError {
    /// Process exit status reported for this error.
    pub const fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Self::MissingCredential => exitcode::CONFIG,
            Self::UnsupportedLanguage { .. } => exitcode::USAGE,
            Self::AuthenticationFailed => exitcode::NOPERM,
            Self::FileNotFound { .. } | Self::KeyFileUnreadable { .. } => exitcode::NOINPUT,
            Self::OverwriteDeclined { .. } => ABORTED,
            Self::CredentialWriteFailed { .. } => exitcode::CANTCREAT,
            Self::LoginAttemptsExhausted { .. } => exitcode::DATAERR,
            Self::RemoteOperationFailed(_) => exitcode::UNAVAILABLE,
        }
    }
}

impl From<AdapterError> for CommandError {
    fn from(err: AdapterError) -> Self {
        match err {
            AdapterError::AuthenticationFailed => Self::AuthenticationFailed,
            AdapterError::EmptyCredential => Self::MissingCredential,
            AdapterError::Unrecognized(message) => Self::RemoteOperationFailed(message),
        }
    }
}

/// Exit status for an error that reached the top level.
///
/// Errors that do not carry a [`CommandError`] (broken stdout, prompt I/O)
/// map to `exitcode::SOFTWARE`.
pub fn exit_code_for(err: &anyhow::Error) -> exitcode::ExitCode {
    err.downcast_ref::<CommandError>()
        .map_or(exitcode::SOFTWARE, CommandError::exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_error_exits_non_zero() {
        let errors = [
            CommandError::MissingCredential,
            CommandError::UnsupportedLanguage {
                code: "XX".to_string(),
            },
            CommandError::AuthenticationFailed,
            CommandError::FileNotFound {
                path: PathBuf::from("in.txt"),
            },
            CommandError::OverwriteDeclined {
                path: PathBuf::from("out.txt"),
            },
            CommandError::CredentialWriteFailed {
                path: PathBuf::from("credentials"),
                source: anyhow::anyhow!("read-only file system"),
            },
            CommandError::KeyFileUnreadable {
                path: PathBuf::from("key.txt"),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            },
            CommandError::LoginAttemptsExhausted { attempts: 5 },
            CommandError::RemoteOperationFailed("boom".to_string()),
        ];

        for err in &errors {
            assert_ne!(err.exit_code(), exitcode::OK, "{err}");
        }
    }

    #[test]
    fn test_adapter_errors_convert() {
        assert!(matches!(
            CommandError::from(AdapterError::AuthenticationFailed),
            CommandError::AuthenticationFailed
        ));
        assert!(matches!(
            CommandError::from(AdapterError::EmptyCredential),
            CommandError::MissingCredential
        ));
        assert!(matches!(
            CommandError::from(AdapterError::Unrecognized("quota exceeded".to_string())),
            CommandError::RemoteOperationFailed(msg) if msg == "quota exceeded"
        ));
    }

    #[test]
    fn test_exit_code_for_downcasts() {
        let err = anyhow::Error::new(CommandError::AuthenticationFailed);
        assert_eq!(exit_code_for(&err), exitcode::NOPERM);

        let err = anyhow::anyhow!("stdout closed");
        assert_eq!(exit_code_for(&err), exitcode::SOFTWARE);
    }

    #[test]
    fn test_exit_code_survives_context() {
        let err = anyhow::Error::new(CommandError::MissingCredential).context("while dispatching");
        assert_eq!(exit_code_for(&err), exitcode::CONFIG);
    }
}
