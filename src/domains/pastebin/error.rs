//! Error taxonomy for Pastebin operations.
//!
//! Every failure a paste handler can produce is a [`PasteError`]. Handlers
//! never let a transport failure escape as anything else: the HTTP layer
//! reports an [`HttpError`], which converts into the timeout or network
//! variant here.

use schemars::JsonSchema;
use serde::Serialize;
use thiserror::Error;

/// The two secrets a paste operation may need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credential {
    /// Identifies the calling application.
    DeveloperKey,
    /// Identifies an authenticated Pastebin user.
    UserKey,
}

impl Credential {
    /// Environment variable the secret is read from.
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::DeveloperKey => "PASTEBIN_API_KEY",
            Self::UserKey => "PASTEBIN_USER_KEY",
        }
    }
}

/// Failure reported by the HTTP transport.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HttpError {
    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// Any other connectivity or protocol failure.
    #[error("{message}")]
    Network {
        message: String,
        details: Option<String>,
    },
}

impl HttpError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            details: None,
        }
    }
}

/// Coarse classification of a [`PasteError`], exposed to tool callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    MissingCredential,
    RemoteApi,
    Timeout,
    Network,
    UnexpectedResponse,
}

/// Errors that can occur while serving a paste tool call.
#[derive(Debug, Error)]
pub enum PasteError {
    /// Input violated a domain rule. Raised before any network I/O.
    #[error("{0}")]
    Validation(String),

    /// A required secret is not configured. Raised before any network I/O.
    #[error("{} environment variable is required{}", .credential.env_var(), purpose_suffix(.purpose))]
    MissingCredential {
        credential: Credential,
        purpose: Option<&'static str>,
    },

    /// The remote API answered with its own error string.
    #[error("Pastebin API error: {0}")]
    RemoteApi(String),

    /// The HTTP call timed out.
    #[error("Request timeout - Pastebin API may be rate limiting")]
    Timeout,

    /// Connection, DNS, TLS or HTTP status failure.
    #[error("Network error: {message}")]
    Network {
        message: String,
        details: Option<String>,
    },

    /// The remote body matched neither the success nor the error pattern.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// The raw-content fetch of a read failed after the API probe succeeded.
    #[error("Failed to fetch raw paste content: {source}")]
    RawContent {
        paste_key: String,
        url: String,
        #[source]
        source: Box<PasteError>,
    },
}

fn purpose_suffix(purpose: &Option<&'static str>) -> String {
    purpose.map(|p| format!(" {p}")).unwrap_or_default()
}

impl PasteError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn missing(credential: Credential) -> Self {
        Self::MissingCredential {
            credential,
            purpose: None,
        }
    }

    pub fn missing_for(credential: Credential, purpose: &'static str) -> Self {
        Self::MissingCredential {
            credential,
            purpose: Some(purpose),
        }
    }

    /// Attach read context to a failure of the raw-content fetch.
    pub fn raw_content(paste_key: impl Into<String>, url: impl Into<String>, source: Self) -> Self {
        Self::RawContent {
            paste_key: paste_key.into(),
            url: url.into(),
            source: Box::new(source),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::MissingCredential { .. } => ErrorKind::MissingCredential,
            Self::RemoteApi(_) => ErrorKind::RemoteApi,
            Self::Timeout => ErrorKind::Timeout,
            Self::Network { .. } => ErrorKind::Network,
            Self::UnexpectedResponse(_) => ErrorKind::UnexpectedResponse,
            Self::RawContent { source, .. } => source.kind(),
        }
    }

    /// Flatten into the structured failure returned to the gateway.
    pub fn to_failure(&self) -> PasteFailure {
        let (paste_key, url) = match self {
            Self::RawContent { paste_key, url, .. } => (Some(paste_key.clone()), Some(url.clone())),
            _ => (None, None),
        };

        PasteFailure {
            error: self.to_string(),
            kind: self.kind(),
            details: self.details(),
            paste_key,
            url,
        }
    }

    fn details(&self) -> Option<String> {
        match self {
            Self::Network { message, details } => Some(details.clone().unwrap_or_else(|| message.clone())),
            Self::RawContent { source, .. } => source.details(),
            _ => None,
        }
    }
}

impl From<HttpError> for PasteError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Timeout => Self::Timeout,
            HttpError::Network { message, details } => Self::Network { message, details },
        }
    }
}

/// Structured failure object: `{error, kind, details?, pasteKey?, url?}`.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct PasteFailure {
    pub error: String,
    pub kind: ErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(rename = "pasteKey", skip_serializing_if = "Option::is_none")]
    pub paste_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
