//! Chat API.

use reqwest::Method;

use crate::client::DifyClient;
use crate::error::Result;
use crate::stream::EventStream;
use crate::types::{
    ChatMessageRequest, ChatMessageResponse, ChatStreamEvent, ResponseMode, StopRequest,
    StopResponse,
};

/// Chat API client.
pub struct ChatApi {
    client: DifyClient,
}

impl ChatApi {
    pub(crate) fn new(client: DifyClient) -> Self {
        Self { client }
    }

    /// Send a chat message and wait for the full answer.
    pub async fn send(&self, mut request: ChatMessageRequest) -> Result<ChatMessageResponse> {
        request.response_mode = ResponseMode::Blocking;
        self.client.post("chat-messages", &request).await
    }

    /// Send a message with just text (convenience method).
    pub async fn message(
        &self,
        query: impl Into<String>,
        user: impl Into<String>,
    ) -> Result<ChatMessageResponse> {
        self.send(ChatMessageRequest::new(query, user)).await
    }

    /// Stream a chat response.
    ///
    /// The request is sent when the returned stream is first polled.
    pub fn stream(&self, mut request: ChatMessageRequest) -> Result<EventStream<ChatStreamEvent>> {
        request.response_mode = ResponseMode::Streaming;
        self.client.open_stream(Method::POST, "chat-messages", Some(&request))
    }

    /// Stop server-side generation of a streaming task.
    ///
    /// Only the user who started the task can stop it.
    pub async fn stop(&self, task_id: &str, user: impl Into<String>) -> Result<StopResponse> {
        let body = StopRequest { user: user.into() };
        self.client
            .post(&format!("chat-messages/{}/stop", task_id), &body)
            .await
    }
}
