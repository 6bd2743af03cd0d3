//! Pastebin domain module.
//!
//! Everything the paste tools need to talk to the Pastebin API:
//!
//! - `credentials.rs` - Credential providers (environment, static)
//! - `request.rs` - Form bodies for each API operation
//! - `transport.rs` - The HTTP boundary (reqwest) behind a trait
//! - `response.rs` - Prefix classification and list parsing
//! - `error.rs` - The error taxonomy shared by all paste tools
//!
//! [`Pastebin`] bundles a credential provider, a transport and the endpoint
//! URLs. Tools receive it as an `Arc<Pastebin>`; it holds no mutable state.

mod credentials;
mod error;
mod request;
mod response;
mod transport;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

pub use credentials::{CredentialProvider, EnvCredentials, StaticCredentials};
pub use error::{Credential, ErrorKind, HttpError, PasteError, PasteFailure};
pub use request::{
    FormBody, NewPaste, Visibility, create_paste_form, list_pastes_form, show_paste_form,
};
pub use response::{
    EMPTY_LIST_PREFIX, ERROR_PREFIX, PasteSummary, ResponseShape, SECURE_URL_PREFIX, classify,
    parse_paste_list, paste_url, raw_url,
};
pub use transport::{HttpResponse, PasteTransport, ReqwestTransport};

use crate::core::config::PastebinConfig;
use crate::core::{Error, Result};

/// Shared dependencies of the paste tools.
pub struct Pastebin {
    credentials: Arc<dyn CredentialProvider>,
    transport: Arc<dyn PasteTransport>,
    api_url: String,
    base_url: String,
}

impl Pastebin {
    /// Assemble from explicit parts.
    pub fn new(
        credentials: Arc<dyn CredentialProvider>,
        transport: Arc<dyn PasteTransport>,
        api_url: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            credentials,
            transport,
            api_url: api_url.into(),
            base_url: base_url.into(),
        }
    }

    /// Production wiring: environment credentials and a reqwest transport.
    pub fn from_config(config: &PastebinConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout).map_err(Error::HttpClient)?;

        Ok(Self::new(
            Arc::new(EnvCredentials),
            Arc::new(transport),
            config.api_url.clone(),
            config.base_url.clone(),
        ))
    }

    pub fn credentials(&self) -> &dyn CredentialProvider {
        self.credentials.as_ref()
    }

    pub fn transport(&self) -> &dyn PasteTransport {
        self.transport.as_ref()
    }

    /// The form-POST endpoint.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn paste_url(&self, key: &str) -> String {
        paste_url(&self.base_url, key)
    }

    pub fn raw_url(&self, key: &str) -> String {
        raw_url(&self.base_url, key)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for Pastebin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pastebin")
            .field("api_url", &self.api_url)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
