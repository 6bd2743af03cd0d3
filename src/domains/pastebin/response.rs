//! Response normalization.
//!
//! The Pastebin API answers with plain strings whose meaning is decided by a
//! prefix. [`classify`] turns a body into a [`ResponseShape`] once, so the
//! handlers match on variants instead of inspecting strings inline.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Prefix of every application-level error the API returns.
pub const ERROR_PREFIX: &str = "Bad API request";

/// Prefix of the URL returned for a newly created paste.
pub const SECURE_URL_PREFIX: &str = "https://";

/// Literal answer of the list call for a user without pastes.
pub const EMPTY_LIST_PREFIX: &str = "No pastes found";

/// Lexical shape of a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape<'a> {
    /// Body starts with [`ERROR_PREFIX`].
    RemoteError(&'a str),
    /// Body starts with [`SECURE_URL_PREFIX`].
    SecureUrl(&'a str),
    /// Body starts with [`EMPTY_LIST_PREFIX`].
    EmptyList,
    /// Anything else, including an empty body.
    Other(&'a str),
}

/// Classify a body. Surrounding whitespace is ignored.
pub fn classify(body: &str) -> ResponseShape<'_> {
    let body = body.trim();
    if body.starts_with(ERROR_PREFIX) {
        ResponseShape::RemoteError(body)
    } else if body.starts_with(SECURE_URL_PREFIX) {
        ResponseShape::SecureUrl(body)
    } else if body.starts_with(EMPTY_LIST_PREFIX) {
        ResponseShape::EmptyList
    } else {
        ResponseShape::Other(body)
    }
}

/// One entry of a user's paste list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PasteSummary {
    pub key: String,
    pub title: String,
    pub date: String,
    pub size: String,
    pub url: String,
    pub format: String,
}

const UNTITLED: &str = "Untitled";
const UNKNOWN: &str = "Unknown";
const DEFAULT_FORMAT: &str = "text";

/// Parse a newline-delimited list of tab-delimited records.
///
/// Fields are positional: key, title, date, size, url, format. Present fields
/// are copied as-is, padding included. A missing or empty field gets a
/// placeholder; a short record never fails the batch.
/// At most `limit` entries are returned.
pub fn parse_paste_list(body: &str, limit: usize, paste_base_url: &str) -> Vec<PasteSummary> {
    body.lines()
        .filter(|line| !line.trim().is_empty())
        .take(limit)
        .enumerate()
        .map(|(index, line)| parse_record(index, line, paste_base_url))
        .collect()
}

fn parse_record(index: usize, line: &str, paste_base_url: &str) -> PasteSummary {
    let mut parts = line.trim_end_matches('\r').split('\t');
    let mut next = || parts.next().filter(|s| !s.is_empty()).map(str::to_string);

    let key = next().unwrap_or_else(|| format!("paste_{index}"));
    let title = next().unwrap_or_else(|| UNTITLED.to_string());
    let date = next().unwrap_or_else(|| UNKNOWN.to_string());
    let size = next().unwrap_or_else(|| UNKNOWN.to_string());
    let url = next().unwrap_or_else(|| paste_url(paste_base_url, &key));
    let format = next().unwrap_or_else(|| DEFAULT_FORMAT.to_string());

    PasteSummary {
        key,
        title,
        date,
        size,
        url,
        format,
    }
}

/// Public page URL of a paste.
pub fn paste_url(base_url: &str, key: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), key)
}

/// Raw-content URL of a paste.
pub fn raw_url(base_url: &str, key: &str) -> String {
    format!("{}/raw/{}", base_url.trim_end_matches('/'), key)
}
