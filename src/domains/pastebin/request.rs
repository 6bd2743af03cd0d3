//! Form bodies for the Pastebin `api_post.php` endpoint.
//!
//! Each builder returns the exact key/value pairs the remote API expects.
//! Field order is stable so request bodies are reproducible in logs and tests.

use std::fmt;
use std::str::FromStr;

use super::error::PasteError;

const OPTION_PASTE: &str = "paste";
const OPTION_SHOW_PASTE: &str = "show_paste";
const OPTION_LIST: &str = "list";

/// Access policy chosen when creating a paste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Unlisted,
    Private,
}

impl Visibility {
    /// Value of the `api_paste_private` field.
    pub const fn api_flag(self) -> &'static str {
        match self {
            Self::Public => "0",
            Self::Unlisted => "1",
            Self::Private => "2",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Unlisted => "unlisted",
            Self::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = PasteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Self::Public),
            "unlisted" => Ok(Self::Unlisted),
            "private" => Ok(Self::Private),
            _ => Err(PasteError::validation(
                "Visibility must be one of: public, unlisted, private",
            )),
        }
    }
}

/// Ordered form fields for one API call.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormBody {
    fields: Vec<(&'static str, String)>,
}

impl FormBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((name, value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Field names only, safe to log.
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(k, _)| *k).collect()
    }

    /// `application/x-www-form-urlencoded` encoding of the fields.
    pub fn encode(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(&self.fields)
    }
}

/// Values are secrets or user content, so Debug lists names only.
impl fmt::Debug for FormBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormBody")
            .field("fields", &self.field_names())
            .finish()
    }
}

/// Validated input for a paste creation.
#[derive(Debug, Clone)]
pub struct NewPaste<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub format: &'a str,
    pub visibility: Visibility,
}

/// Body for `api_option=paste`.
///
/// `user_key` is attached whenever supplied; the handler always supplies it
/// for private pastes.
pub fn create_paste_form(dev_key: &str, paste: &NewPaste<'_>, user_key: Option<&str>) -> FormBody {
    let form = FormBody::new()
        .push("api_dev_key", dev_key)
        .push("api_option", OPTION_PASTE)
        .push("api_paste_code", paste.content)
        .push("api_paste_name", paste.title)
        .push("api_paste_format", paste.format)
        .push("api_paste_private", paste.visibility.api_flag());

    match user_key {
        Some(key) => form.push("api_user_key", key),
        None => form,
    }
}

/// Body for the existence/authorization probe issued before a raw fetch.
pub fn show_paste_form(dev_key: &str, paste_key: &str, user_key: Option<&str>) -> FormBody {
    let form = FormBody::new()
        .push("api_dev_key", dev_key)
        .push("api_option", OPTION_SHOW_PASTE)
        .push("api_paste_key", paste_key);

    match user_key {
        Some(key) => form.push("api_user_key", key),
        None => form,
    }
}

/// Body for `api_option=list`.
pub fn list_pastes_form(dev_key: &str, user_key: &str, limit: u32) -> FormBody {
    FormBody::new()
        .push("api_dev_key", dev_key)
        .push("api_user_key", user_key)
        .push("api_option", OPTION_LIST)
        .push("api_results_limit", limit.to_string())
}
