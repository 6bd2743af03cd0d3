//! In-memory transport for handler tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{
    FormBody, HttpError, HttpResponse, PasteTransport, Pastebin, StaticCredentials,
};

pub(crate) const API_URL: &str = "https://pastebin.test/api/api_post.php";
pub(crate) const BASE_URL: &str = "https://pastebin.test";

/// A recorded call.
#[derive(Debug, Clone)]
pub(crate) enum Call {
    Post { url: String, form: FormBody },
    Get { url: String },
}

/// Replays scripted results in order and records every call.
#[derive(Default)]
pub(crate) struct FakeTransport {
    replies: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn reply(self: &Arc<Self>, result: Result<HttpResponse, HttpError>) -> Arc<Self> {
        self.replies.lock().unwrap().push_back(result);
        self.clone()
    }

    pub(crate) fn reply_ok(self: &Arc<Self>, body: &str) -> Arc<Self> {
        self.reply(Ok(HttpResponse::ok(body)))
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn next_reply(&self) -> Result<HttpResponse, HttpError> {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(HttpError::network("no scripted reply")))
    }
}

#[async_trait]
impl PasteTransport for FakeTransport {
    async fn post_form(&self, url: &str, form: &FormBody) -> Result<HttpResponse, HttpError> {
        self.calls.lock().unwrap().push(Call::Post {
            url: url.to_string(),
            form: form.clone(),
        });
        self.next_reply()
    }

    async fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        self.calls.lock().unwrap().push(Call::Get {
            url: url.to_string(),
        });
        self.next_reply()
    }
}

/// A backend wired to `transport` with the given keys.
pub(crate) fn pastebin(
    transport: &Arc<FakeTransport>,
    developer_key: Option<&str>,
    user_key: Option<&str>,
) -> Pastebin {
    Pastebin::new(
        Arc::new(StaticCredentials::new(developer_key, user_key)),
        transport.clone(),
        API_URL,
        BASE_URL,
    )
}
