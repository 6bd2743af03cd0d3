//! HTTP transport for Pastebin calls.
//!
//! This is the only I/O boundary of the paste tools. Every reqwest failure is
//! converted into an [`HttpError`] here; nothing above this layer sees a
//! `reqwest::Error`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument};

use super::error::HttpError;
use super::request::FormBody;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs the HTTP calls a paste handler needs.
///
/// A response is returned for any status code; only failures to obtain a
/// response at all are errors.
#[async_trait]
pub trait PasteTransport: Send + Sync {
    /// POST a form-encoded body.
    async fn post_form(&self, url: &str, form: &FormBody) -> Result<HttpResponse, HttpError>;

    /// Plain GET.
    async fn get(&self, url: &str) -> Result<HttpResponse, HttpError>;
}

/// [`PasteTransport`] backed by a shared `reqwest::Client` with a fixed timeout.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    async fn read(response: reqwest::Response) -> Result<HttpResponse, HttpError> {
        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify)?;
        debug!("Response received: HTTP {}, {} bytes", status, body.len());
        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl PasteTransport for ReqwestTransport {
    #[instrument(skip(self, form), fields(fields = ?form.field_names()))]
    async fn post_form(&self, url: &str, form: &FormBody) -> Result<HttpResponse, HttpError> {
        let body = form
            .encode()
            .map_err(|e| HttpError::network(format!("Failed to encode form: {e}")))?;

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(classify)?;

        Self::read(response).await
    }

    #[instrument(skip(self))]
    async fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        let response = self.client.get(url).send().await.map_err(classify)?;
        Self::read(response).await
    }
}

/// Map a reqwest failure onto the timeout/network split.
fn classify(err: reqwest::Error) -> HttpError {
    if err.is_timeout() {
        HttpError::Timeout
    } else if err.is_connect() {
        HttpError::Network {
            message: "Connection failed".to_string(),
            details: Some(err.to_string()),
        }
    } else {
        HttpError::network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[test]
    fn test_http_response_success_range() {
        assert!(HttpResponse::ok("x").is_success());
        assert!(!HttpResponse { status: 404, body: String::new() }.is_success());
        assert!(!HttpResponse { status: 500, body: String::new() }.is_success());
    }

    #[tokio::test]
    async fn test_unresponsive_server_is_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Accept and hold connections without ever answering.
        let server = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((stream, _)) = listener.accept().await {
                held.push(stream);
            }
        });

        let transport = ReqwestTransport::new(Duration::from_millis(200)).unwrap();
        let url = format!("http://{addr}/api/api_post.php");
        let result = transport.post_form(&url, &FormBody::new().push("api_option", "paste")).await;

        assert_eq!(result, Err(HttpError::Timeout));
        server.abort();
    }

    #[tokio::test]
    async fn test_refused_connection_is_network_error() {
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap()
        };

        let transport = ReqwestTransport::new(Duration::from_secs(5)).unwrap();
        let result = transport.get(&format!("http://{addr}/raw/abc")).await;

        assert!(matches!(result, Err(HttpError::Network { .. })));
    }

    #[tokio::test]
    async fn test_post_form_round_trip() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = stream.read(&mut buf).await.unwrap();
                received.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&received);
                if n == 0 || text.contains("api_option=paste") {
                    break;
                }
            }
            let reply = "https://pastebin.com/AbC123";
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                reply.len(),
                reply
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            String::from_utf8_lossy(&received).into_owned()
        });

        let transport = ReqwestTransport::new(Duration::from_secs(5)).unwrap();
        let form = FormBody::new()
            .push("api_dev_key", "dev")
            .push("api_option", "paste");
        let response = transport
            .post_form(&format!("http://{addr}/api/api_post.php"), &form)
            .await
            .unwrap();

        assert_eq!(response, HttpResponse::ok("https://pastebin.com/AbC123"));

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/api_post.php"));
        assert!(request.to_ascii_lowercase().contains("content-type: application/x-www-form-urlencoded"));
        assert!(request.contains("api_dev_key=dev&api_option=paste"));
    }
}
