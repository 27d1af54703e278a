//! Credential handling and per-invocation settings.

mod credential;
mod settings;
mod store;

pub use credential::{
    Credential, CredentialArgs, CredentialSource, read_key_file, resolve_credential,
};
pub use settings::{DEFAULT_TIMEOUT, Settings};
pub use store::CredentialStore;
