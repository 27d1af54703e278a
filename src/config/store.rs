use anyhow::{Context, Result, bail};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::credential::Credential;
use crate::fs::atomic_write;
use crate::paths;

const KEY_NAME: &str = "APIKEY";

/// Loads and saves the credential written by `login`.
///
/// The file holds a single `APIKEY=<value>` line.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Creates a store at the default location.
    ///
    /// The credential is stored at `$XDG_CONFIG_HOME/deeplcmd/credentials`
    /// or `~/.config/deeplcmd/credentials` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self::at(paths::credentials_path()?))
    }

    pub const fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the saved credential.
    ///
    /// A missing file, a file without an `APIKEY` line and a blank value all
    /// mean there is no saved credential.
    pub fn load(&self) -> Result<Option<Credential>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read credential file: {}", self.path.display())
                });
            }
        };

        Ok(parse_credential(&contents))
    }

    /// Replaces the saved credential.
    ///
    /// The write goes through a temp file and a rename, so a failure never
    /// leaves a half-written key behind.
    pub fn persist(&self, credential: &Credential) -> Result<()> {
        if credential.expose().contains(['\n', '\r']) {
            bail!("API key must be a single line");
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        atomic_write(&self.path, format!("{KEY_NAME}={}\n", credential.expose()))?;

        tracing::debug!(path = %self.path.display(), "saved credential");
        Ok(())
    }
}

fn parse_credential(contents: &str) -> Option<Credential> {
    contents.lines().find_map(|line| {
        let (name, value) = line.split_once('=')?;
        if name.trim() == KEY_NAME {
            Credential::new(value)
        } else {
            None
        }
    })
}
