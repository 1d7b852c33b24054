//! Text completion API.

use reqwest::Method;

use crate::client::DifyClient;
use crate::error::Result;
use crate::stream::EventStream;
use crate::types::{
    ChatStreamEvent, CompletionRequest, CompletionResponse, ResponseMode, StopRequest,
    StopResponse,
};

/// Completion API client.
pub struct CompletionApi {
    client: DifyClient,
}

impl CompletionApi {
    pub(crate) fn new(client: DifyClient) -> Self {
        Self { client }
    }

    /// Generate text and wait for the full answer.
    pub async fn send(&self, mut request: CompletionRequest) -> Result<CompletionResponse> {
        request.response_mode = ResponseMode::Blocking;
        self.client.post("completion-messages", &request).await
    }

    /// Stream generated text. Events share the chat event shape.
    pub fn stream(&self, mut request: CompletionRequest) -> Result<EventStream<ChatStreamEvent>> {
        request.response_mode = ResponseMode::Streaming;
        self.client.open_stream(Method::POST, "completion-messages", Some(&request))
    }

    /// Stop server-side generation.
    pub async fn stop(&self, task_id: &str, user: impl Into<String>) -> Result<StopResponse> {
        let body = StopRequest { user: user.into() };
        self.client
            .post(&format!("completion-messages/{}/stop", task_id), &body)
            .await
    }
}
