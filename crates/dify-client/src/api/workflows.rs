//! Workflows API.

use reqwest::Method;

use crate::client::DifyClient;
use crate::error::Result;
use crate::stream::EventStream;
use crate::types::{
    ResponseMode, StopRequest, StopResponse, WorkflowRunRequest, WorkflowRunResponse,
    WorkflowStreamEvent,
};

/// Workflows API client.
pub struct WorkflowsApi {
    client: DifyClient,
}

impl WorkflowsApi {
    pub(crate) fn new(client: DifyClient) -> Self {
        Self { client }
    }

    /// Run a workflow and wait for it to finish.
    pub async fn run(&self, mut request: WorkflowRunRequest) -> Result<WorkflowRunResponse> {
        request.response_mode = ResponseMode::Blocking;
        self.client.post("workflows/run", &request).await
    }

    /// Run a workflow, streaming node and text events.
    pub fn stream(
        &self,
        mut request: WorkflowRunRequest,
    ) -> Result<EventStream<WorkflowStreamEvent>> {
        request.response_mode = ResponseMode::Streaming;
        self.client.open_stream(Method::POST, "workflows/run", Some(&request))
    }

    /// Stop a running workflow task.
    pub async fn stop(&self, task_id: &str, user: impl Into<String>) -> Result<StopResponse> {
        let body = StopRequest { user: user.into() };
        self.client
            .post(&format!("workflows/tasks/{}/stop", task_id), &body)
            .await
    }
}
