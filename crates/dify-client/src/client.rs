//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::{ChatApi, CompletionApi, WorkflowsApi};
use crate::error::{Error, Result};
use crate::stream::{
    DefaultStatusClassifier, EventDecoder, EventStream, JsonDecoder, ReqwestTransport,
    StatusClassifier, StreamRequest, StreamTransport,
};

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.dify.ai/v1";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default timeout for streaming requests.
const DEFAULT_STREAM_TIMEOUT: Duration = Duration::from_secs(300);

/// Dify API client.
///
/// # Example
///
/// ```no_run
/// use dify_client::{ChatMessageRequest, DifyClient};
/// use futures::StreamExt;
///
/// # async fn example() -> dify_client::Result<()> {
/// let client = DifyClient::builder()
///     .base_url("http://localhost/v1")
///     .api_key("app-secret")
///     .build()?;
///
/// let mut stream = client
///     .chat()
///     .stream(ChatMessageRequest::new("Hello", "user-1"))?;
/// while let Some(event) = stream.next().await {
///     if let Some(text) = event?.answer() {
///         print!("{text}");
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DifyClient {
    /// Inner shared state.
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
pub(crate) struct ClientInner {
    /// HTTP client for non-streaming calls.
    pub(crate) http: reqwest::Client,
    /// Transport used by event streams.
    pub(crate) transport: Arc<dyn StreamTransport>,
    /// Status classification for event streams.
    pub(crate) classifier: Arc<dyn StatusClassifier>,
    /// Base URL for API requests.
    pub(crate) base_url: Url,
    /// Request timeout.
    pub(crate) timeout: Duration,
    /// Streaming timeout.
    pub(crate) stream_timeout: Duration,
}

impl DifyClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the chat API.
    pub fn chat(&self) -> ChatApi {
        ChatApi::new(self.clone())
    }

    /// Access the text completion API.
    pub fn completion(&self) -> CompletionApi {
        CompletionApi::new(self.clone())
    }

    /// Access the workflows API.
    pub fn workflows(&self) -> WorkflowsApi {
        WorkflowsApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Streaming
    // ─────────────────────────────────────────────────────────────────────────

    /// Open an event stream decoding each payload as JSON into `T`.
    ///
    /// Only fails if the URL cannot be built; the request itself is sent on
    /// the first poll of the returned stream.
    pub fn open_stream<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<EventStream<T>>
    where
        T: DeserializeOwned + Send + 'static,
        B: Serialize + ?Sized,
    {
        self.open_stream_with(method, path, body, JsonDecoder)
    }

    /// Open an event stream with a custom payload decoder.
    pub fn open_stream_with<T, B, D>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        decoder: D,
    ) -> Result<EventStream<T>>
    where
        T: Send + 'static,
        B: Serialize + ?Sized,
        D: EventDecoder<T> + 'static,
    {
        let mut request =
            StreamRequest::new(method, self.url(path)?).with_timeout(self.inner.stream_timeout);
        if let Some(body) = body {
            request = request.with_json(serde_json::to_value(body)?);
        }

        Ok(EventStream::new(
            self.inner.transport.clone(),
            request,
            Arc::new(decoder),
            self.inner.classifier.clone(),
        ))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL for an API path.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        self.inner.base_url.join(path).map_err(Error::from)
    }

    /// Make a POST request.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        let response = self
            .inner
            .http
            .post(url)
            .json(body)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Handle a response, extracting the body or error.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status().as_u16();
        if self.inner.classifier.is_error(status) {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status, body = %body, "request failed");
            return Err(Error::RequestFailed { status, body });
        }
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl std::fmt::Debug for DifyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DifyClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("timeout", &self.inner.timeout)
            .field("stream_timeout", &self.inner.stream_timeout)
            .finish_non_exhaustive()
    }
}

/// Builder for creating a DifyClient.
pub struct ClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Duration,
    stream_timeout: Duration,
    user_agent: Option<String>,
    transport: Option<Arc<dyn StreamTransport>>,
    classifier: Option<Arc<dyn StatusClassifier>>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            stream_timeout: DEFAULT_STREAM_TIMEOUT,
            user_agent: None,
            transport: None,
            classifier: None,
        }
    }

    /// Set the base URL (defaults to [`DEFAULT_BASE_URL`]).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the application API key, sent as a bearer token.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the streaming request timeout.
    pub fn stream_timeout(mut self, timeout: Duration) -> Self {
        self.stream_timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Use a custom transport for event streams.
    pub fn transport(mut self, transport: Arc<dyn StreamTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use a custom status classifier.
    pub fn status_classifier(mut self, classifier: Arc<dyn StatusClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<DifyClient> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        // Parse and normalize base URL
        let mut base_url = Url::parse(&base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        // Build default headers
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(key) = &self.api_key {
            let value = HeaderValue::from_str(&format!("Bearer {}", key))
                .map_err(|_| Error::Config("Invalid API key".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("dify-client/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .build()?;

        let transport = self
            .transport
            .unwrap_or_else(|| Arc::new(ReqwestTransport::new(http.clone())));
        let classifier = self
            .classifier
            .unwrap_or_else(|| Arc::new(DefaultStatusClassifier));

        Ok(DifyClient {
            inner: Arc::new(ClientInner {
                http,
                transport,
                classifier,
                base_url,
                timeout: self.timeout,
                stream_timeout: self.stream_timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("stream_timeout", &self.stream_timeout)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}
