//! Credential resolution for Pastebin calls.
//!
//! Handlers receive a [`CredentialProvider`] instead of reading the process
//! environment themselves, so tests can inject fixed keys.

use super::error::{Credential, PasteError};

/// Source of the developer and user keys.
///
/// Implementations are consulted on every call; nothing is cached by the
/// handlers.
pub trait CredentialProvider: Send + Sync {
    /// Look up a secret. Empty values count as absent.
    fn get(&self, credential: Credential) -> Option<String>;

    /// Resolve a secret or fail with a missing-credential error.
    fn require(&self, credential: Credential) -> Result<String, PasteError> {
        self.get(credential)
            .ok_or_else(|| PasteError::missing(credential))
    }

    /// Like [`require`](Self::require), naming why the secret is needed.
    fn require_for(&self, credential: Credential, purpose: &'static str) -> Result<String, PasteError> {
        self.get(credential)
            .ok_or_else(|| PasteError::missing_for(credential, purpose))
    }
}

/// Reads `PASTEBIN_API_KEY` / `PASTEBIN_USER_KEY` from the environment at call time.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentials;

impl CredentialProvider for EnvCredentials {
    fn get(&self, credential: Credential) -> Option<String> {
        std::env::var(credential.env_var())
            .ok()
            .filter(|v| !v.trim().is_empty())
    }
}

/// Fixed credentials, for embedding and tests.
#[derive(Clone, Default)]
pub struct StaticCredentials {
    developer_key: Option<String>,
    user_key: Option<String>,
}

impl StaticCredentials {
    pub fn new(developer_key: Option<&str>, user_key: Option<&str>) -> Self {
        Self {
            developer_key: developer_key.map(str::to_string),
            user_key: user_key.map(str::to_string),
        }
    }
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("developer_key", &self.developer_key.as_ref().map(|_| "[REDACTED]"))
            .field("user_key", &self.user_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl CredentialProvider for StaticCredentials {
    fn get(&self, credential: Credential) -> Option<String> {
        let value = match credential {
            Credential::DeveloperKey => &self.developer_key,
            Credential::UserKey => &self.user_key,
        };
        value.clone().filter(|v| !v.trim().is_empty())
    }
}
