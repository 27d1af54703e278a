use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CommandError;

/// An API key. Never empty, never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Builds a credential from raw input, trimming surrounding whitespace.
    ///
    /// Returns `None` if nothing is left after trimming.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Keys issued for the free API tier end in `:fx`.
    pub fn is_free_tier(&self) -> bool {
        self.0.ends_with(":fx")
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Where a resolved credential came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    Argument,
    KeyFile(PathBuf),
    Store,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Argument => f.write_str("--key"),
            Self::KeyFile(path) => write!(f, "key file {}", path.display()),
            Self::Store => f.write_str("saved login"),
        }
    }
}

/// Explicit credential sources given on the command line.
#[derive(Debug, Clone, Default)]
pub struct CredentialArgs {
    pub key: Option<String>,
    pub keyfile: Option<PathBuf>,
}

impl CredentialArgs {
    pub const fn is_empty(&self) -> bool {
        self.key.is_none() && self.keyfile.is_none()
    }
}

/// Reads a key file, trimming the trailing newline editors usually add.
pub fn read_key_file(path: &Path) -> Result<Option<Credential>, CommandError> {
    let contents = fs::read_to_string(path).map_err(|source| CommandError::KeyFileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Credential::new(&contents))
}

/// Picks the credential for this invocation.
///
/// Resolution order, first non-blank match wins:
/// 1. `--key`
/// 2. contents of `--keyfile`
/// 3. the credential saved by `login`
///
/// Returns `Ok(None)` when no source yields a key. An explicit key file that
/// cannot be read is an error rather than a fall-through.
pub fn resolve_credential(
    args: &CredentialArgs,
    persisted: Option<&Credential>,
) -> Result<Option<(Credential, CredentialSource)>, CommandError> {
    if let Some(credential) = args.key.as_deref().and_then(Credential::new) {
        return Ok(Some((credential, CredentialSource::Argument)));
    }

    if let Some(path) = &args.keyfile
        && let Some(credential) = read_key_file(path)?
    {
        return Ok(Some((credential, CredentialSource::KeyFile(path.clone()))));
    }

    Ok(persisted.map(|credential| (credential.clone(), CredentialSource::Store)))
}
