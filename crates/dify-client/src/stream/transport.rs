//! Transport seam for streaming requests.
//!
//! [`StreamTransport`] issues the HTTP call and hands back the status,
//! headers and a chunked body. Dropping a [`StreamResponse`] closes the
//! underlying connection.

use std::fmt;
use std::pin::Pin;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use futures::{Stream, StreamExt, TryStreamExt};
use reqwest::Method;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::error::{Error, Result};

/// Chunked response body.
pub type ByteStream = Pin<Box<dyn Stream<Item = std::io::Result<Bytes>> + Send>>;

/// A request whose response is expected to be an event stream.
#[derive(Debug, Clone)]
pub struct StreamRequest {
    /// HTTP method.
    pub method: Method,
    /// Fully resolved target URL.
    pub url: Url,
    /// Extra request headers.
    pub headers: HeaderMap,
    /// JSON request body.
    pub body: Option<serde_json::Value>,
    /// Per-request timeout enforced by the transport.
    pub timeout: Option<Duration>,
}

impl StreamRequest {
    /// Create a request without body or extra headers.
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
            timeout: None,
        }
    }

    /// Set the JSON body.
    pub fn with_json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Add a header.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Set the transport timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Response to a [`StreamRequest`]. Owns the connection until dropped.
pub struct StreamResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body chunks.
    pub body: ByteStream,
}

impl StreamResponse {
    /// Create a response.
    pub fn new(status: u16, headers: HeaderMap, body: ByteStream) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Create a response with no body.
    pub fn empty(status: u16) -> Self {
        Self::new(status, HeaderMap::new(), Box::pin(futures::stream::empty()))
    }

    /// Create a response from in-memory chunks.
    pub fn from_chunks<I, B>(status: u16, chunks: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Bytes>,
    {
        let chunks: Vec<Bytes> = chunks.into_iter().map(Into::into).collect();
        let body = futures::stream::iter(chunks.into_iter().map(Ok::<_, std::io::Error>));
        Self::new(status, HeaderMap::new(), Box::pin(body))
    }

    /// `Content-Type` header value, if present and valid.
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }

    /// Read the whole body as text, replacing invalid UTF-8.
    pub async fn text(mut self) -> std::io::Result<String> {
        let mut raw = Vec::new();
        while let Some(chunk) = self.body.next().await {
            raw.extend_from_slice(&chunk?);
        }
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }
}

impl fmt::Debug for StreamResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

/// Opens streaming HTTP calls.
#[async_trait]
pub trait StreamTransport: Send + Sync {
    /// Send the request and return once response headers have arrived.
    ///
    /// Network failures map to [`Error::Transport`].
    async fn open(&self, request: StreamRequest) -> Result<StreamResponse>;
}

/// [`StreamTransport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Wrap an existing client. Default headers on it apply to every stream.
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl StreamTransport for ReqwestTransport {
    async fn open(&self, request: StreamRequest) -> Result<StreamResponse> {
        let StreamRequest {
            method,
            url,
            mut headers,
            body,
            timeout,
        } = request;

        headers
            .entry(ACCEPT)
            .or_insert(HeaderValue::from_static("text/event-stream"));

        let mut builder = self.http.request(method, url).headers(headers);
        if let Some(body) = &body {
            builder = builder.json(body);
        }
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(Error::from)?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes_stream().map_err(std::io::Error::other);

        Ok(StreamResponse::new(status, headers, Box::pin(body)))
    }
}
