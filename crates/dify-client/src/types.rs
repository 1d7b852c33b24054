//! Request and response types for the Dify application API.
//!
//! Stream payloads carry their kind in an `event` field; the stream enums
//! below are tagged on it. Event names this crate does not know decode to an
//! `Unknown` variant rather than failing the frame.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ─────────────────────────────────────────────────────────────────────────────
// Common
// ─────────────────────────────────────────────────────────────────────────────

/// How the server should deliver its answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseMode {
    /// One JSON response when generation finishes.
    Blocking,
    /// `text/event-stream` of incremental events.
    #[default]
    Streaming,
}

/// How an attached file reaches the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferMethod {
    /// Fetched by the server from a URL.
    RemoteUrl,
    /// Previously uploaded; referenced by id.
    LocalFile,
}

/// A file attached to a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInput {
    /// File kind: `image`, `document`, `audio`, `video` or `custom`.
    #[serde(rename = "type")]
    pub file_type: String,
    /// Transfer method.
    pub transfer_method: TransferMethod,
    /// Remote URL, for [`TransferMethod::RemoteUrl`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Upload id, for [`TransferMethod::LocalFile`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_file_id: Option<String>,
}

impl FileInput {
    /// Image fetched from a URL.
    pub fn remote_image(url: impl Into<String>) -> Self {
        Self {
            file_type: "image".to_string(),
            transfer_method: TransferMethod::RemoteUrl,
            url: Some(url.into()),
            upload_file_id: None,
        }
    }

    /// Previously uploaded file.
    pub fn uploaded(file_type: impl Into<String>, upload_file_id: impl Into<String>) -> Self {
        Self {
            file_type: file_type.into(),
            transfer_method: TransferMethod::LocalFile,
            url: None,
            upload_file_id: Some(upload_file_id.into()),
        }
    }
}

/// Token usage reported at the end of a message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Usage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
    pub total_price: Option<String>,
    pub currency: Option<String>,
    pub latency: Option<f64>,
}

/// Metadata attached to a finished message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageMetadata {
    pub usage: Option<Usage>,
    pub retriever_resources: Vec<Value>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Chat
// ─────────────────────────────────────────────────────────────────────────────

/// Request to send a chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessageRequest {
    /// User input.
    pub query: String,
    /// App variable values.
    #[serde(default)]
    pub inputs: Map<String, Value>,
    /// Delivery mode; the API methods set this.
    #[serde(default)]
    pub response_mode: ResponseMode,
    /// End-user identifier.
    pub user: String,
    /// Continue an existing conversation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    /// Attached files.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<FileInput>,
    /// Let the server generate a conversation title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_generate_name: Option<bool>,
}

impl ChatMessageRequest {
    /// Create a request for a new conversation.
    pub fn new(query: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            inputs: Map::new(),
            response_mode: ResponseMode::Streaming,
            user: user.into(),
            conversation_id: None,
            files: Vec::new(),
            auto_generate_name: None,
        }
    }

    /// Continue a conversation.
    pub fn with_conversation(mut self, conversation_id: impl Into<String>) -> Self {
        self.conversation_id = Some(conversation_id.into());
        self
    }

    /// Set an app input variable.
    pub fn with_input(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.inputs.insert(name.into(), value.into());
        self
    }

    /// Attach a file.
    pub fn with_file(mut self, file: FileInput) -> Self {
        self.files.push(file);
        self
    }
}

/// Blocking-mode chat response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessageResponse {
    #[serde(default)]
    pub task_id: Option<String>,
    pub message_id: String,
    pub conversation_id: String,
    #[serde(default)]
    pub mode: Option<String>,
    pub answer: String,
    #[serde(default)]
    pub metadata: MessageMetadata,
    #[serde(default)]
    pub created_at: Option<i64>,
}

/// Event of a streamed chat (or agent / chatflow) response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ChatStreamEvent {
    /// Chunk of answer text.
    Message {
        task_id: String,
        message_id: String,
        #[serde(default)]
        conversation_id: Option<String>,
        answer: String,
        #[serde(default)]
        created_at: Option<i64>,
    },
    /// Chunk of answer text from an agent app.
    AgentMessage {
        task_id: String,
        message_id: String,
        #[serde(default)]
        conversation_id: Option<String>,
        answer: String,
        #[serde(default)]
        created_at: Option<i64>,
    },
    /// Agent reasoning step.
    AgentThought {
        id: String,
        task_id: String,
        message_id: String,
        #[serde(default)]
        position: u32,
        #[serde(default)]
        thought: String,
        #[serde(default)]
        observation: String,
        #[serde(default)]
        tool: String,
        #[serde(default)]
        tool_input: String,
        #[serde(default)]
        message_files: Vec<String>,
        #[serde(default)]
        conversation_id: Option<String>,
        #[serde(default)]
        created_at: Option<i64>,
    },
    /// File produced by a tool.
    MessageFile {
        id: String,
        #[serde(rename = "type")]
        file_type: String,
        #[serde(default)]
        belongs_to: Option<String>,
        url: String,
        #[serde(default)]
        conversation_id: Option<String>,
    },
    /// Message finished.
    MessageEnd {
        task_id: String,
        message_id: String,
        #[serde(default)]
        conversation_id: Option<String>,
        #[serde(default)]
        metadata: MessageMetadata,
    },
    /// Moderation replaced the answer so far.
    MessageReplace {
        task_id: String,
        message_id: String,
        #[serde(default)]
        conversation_id: Option<String>,
        answer: String,
        #[serde(default)]
        created_at: Option<i64>,
    },
    /// Base64 audio chunk.
    TtsMessage {
        task_id: String,
        message_id: String,
        #[serde(default)]
        audio: String,
        #[serde(default)]
        created_at: Option<i64>,
    },
    /// End of audio.
    TtsMessageEnd {
        task_id: String,
        message_id: String,
        #[serde(default)]
        audio: String,
        #[serde(default)]
        created_at: Option<i64>,
    },
    /// Chatflow run started.
    WorkflowStarted {
        task_id: String,
        workflow_run_id: String,
        data: WorkflowStartedData,
    },
    /// Chatflow node started.
    NodeStarted {
        task_id: String,
        workflow_run_id: String,
        data: NodeStartedData,
    },
    /// Chatflow node finished.
    NodeFinished {
        task_id: String,
        workflow_run_id: String,
        data: NodeFinishedData,
    },
    /// Chatflow run finished.
    WorkflowFinished {
        task_id: String,
        workflow_run_id: String,
        data: WorkflowFinishedData,
    },
    /// Server-side failure reported in-band.
    Error {
        #[serde(default)]
        task_id: Option<String>,
        #[serde(default)]
        message_id: Option<String>,
        #[serde(default)]
        status: Option<u16>,
        #[serde(default)]
        code: String,
        #[serde(default)]
        message: String,
    },
    /// Keep-alive.
    Ping,
    /// Event kind not modelled here.
    #[serde(other)]
    Unknown,
}

impl ChatStreamEvent {
    /// Answer text carried by this event, if any.
    pub fn answer(&self) -> Option<&str> {
        match self {
            ChatStreamEvent::Message { answer, .. }
            | ChatStreamEvent::AgentMessage { answer, .. } => Some(answer),
            _ => None,
        }
    }

    /// Task id, usable with [`ChatApi::stop`](crate::api::ChatApi::stop).
    pub fn task_id(&self) -> Option<&str> {
        match self {
            ChatStreamEvent::Message { task_id, .. }
            | ChatStreamEvent::AgentMessage { task_id, .. }
            | ChatStreamEvent::AgentThought { task_id, .. }
            | ChatStreamEvent::MessageEnd { task_id, .. }
            | ChatStreamEvent::MessageReplace { task_id, .. }
            | ChatStreamEvent::TtsMessage { task_id, .. }
            | ChatStreamEvent::TtsMessageEnd { task_id, .. }
            | ChatStreamEvent::WorkflowStarted { task_id, .. }
            | ChatStreamEvent::NodeStarted { task_id, .. }
            | ChatStreamEvent::NodeFinished { task_id, .. }
            | ChatStreamEvent::WorkflowFinished { task_id, .. } => Some(task_id),
            ChatStreamEvent::Error { task_id, .. } => task_id.as_deref(),
            _ => None,
        }
    }

    /// Conversation id, once the server has assigned one.
    pub fn conversation_id(&self) -> Option<&str> {
        match self {
            ChatStreamEvent::Message {
                conversation_id, ..
            }
            | ChatStreamEvent::AgentMessage {
                conversation_id, ..
            }
            | ChatStreamEvent::AgentThought {
                conversation_id, ..
            }
            | ChatStreamEvent::MessageFile {
                conversation_id, ..
            }
            | ChatStreamEvent::MessageEnd {
                conversation_id, ..
            }
            | ChatStreamEvent::MessageReplace {
                conversation_id, ..
            } => conversation_id.as_deref(),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Completion
// ─────────────────────────────────────────────────────────────────────────────

/// Request for a text-generation app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// App variable values; text generation apps usually take a `query` input.
    #[serde(default)]
    pub inputs: Map<String, Value>,
    /// Delivery mode; the API methods set this.
    #[serde(default)]
    pub response_mode: ResponseMode,
    /// End-user identifier.
    pub user: String,
    /// Attached files.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<FileInput>,
}

impl CompletionRequest {
    /// Create a request with a `query` input.
    pub fn new(query: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            inputs: Map::new(),
            response_mode: ResponseMode::Streaming,
            user: user.into(),
            files: Vec::new(),
        }
        .with_input("query", query.into())
    }

    /// Set an app input variable.
    pub fn with_input(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.inputs.insert(name.into(), value.into());
        self
    }
}

/// Blocking-mode completion response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub task_id: Option<String>,
    pub message_id: String,
    #[serde(default)]
    pub mode: Option<String>,
    pub answer: String,
    #[serde(default)]
    pub metadata: MessageMetadata,
    #[serde(default)]
    pub created_at: Option<i64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Workflows
// ─────────────────────────────────────────────────────────────────────────────

/// Request to run a workflow app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowRunRequest {
    /// Workflow input variables.
    #[serde(default)]
    pub inputs: Map<String, Value>,
    /// Delivery mode; the API methods set this.
    #[serde(default)]
    pub response_mode: ResponseMode,
    /// End-user identifier.
    pub user: String,
    /// Attached files.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<FileInput>,
}

impl WorkflowRunRequest {
    /// Create a request with no inputs.
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            inputs: Map::new(),
            response_mode: ResponseMode::Streaming,
            user: user.into(),
            files: Vec::new(),
        }
    }

    /// Set an input variable.
    pub fn with_input(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.inputs.insert(name.into(), value.into());
        self
    }
}

/// `workflow_started` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStartedData {
    pub id: String,
    pub workflow_id: String,
    #[serde(default)]
    pub sequence_number: Option<u64>,
    #[serde(default)]
    pub created_at: Option<i64>,
}

/// `node_started` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStartedData {
    pub id: String,
    pub node_id: String,
    pub node_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub predecessor_node_id: Option<String>,
    #[serde(default)]
    pub inputs: Option<Value>,
    #[serde(default)]
    pub created_at: Option<i64>,
}

/// Execution cost of a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionMetadata {
    pub total_tokens: Option<u64>,
    pub total_price: Option<Value>,
    pub currency: Option<String>,
}

/// `node_finished` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeFinishedData {
    pub id: String,
    pub node_id: String,
    pub node_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub predecessor_node_id: Option<String>,
    #[serde(default)]
    pub inputs: Option<Value>,
    #[serde(default)]
    pub process_data: Option<Value>,
    #[serde(default)]
    pub outputs: Option<Value>,
    pub status: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub elapsed_time: Option<f64>,
    #[serde(default)]
    pub execution_metadata: Option<ExecutionMetadata>,
    #[serde(default)]
    pub created_at: Option<i64>,
}

/// `workflow_finished` payload, also the blocking run result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowFinishedData {
    pub id: String,
    pub workflow_id: String,
    /// `running`, `succeeded`, `failed` or `stopped`.
    pub status: String,
    #[serde(default)]
    pub outputs: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub elapsed_time: Option<f64>,
    #[serde(default)]
    pub total_tokens: Option<u64>,
    #[serde(default)]
    pub total_steps: Option<u64>,
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub finished_at: Option<i64>,
}

/// `text_chunk` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextChunkData {
    pub text: String,
    #[serde(default)]
    pub from_variable_selector: Vec<String>,
}

/// Event of a streamed workflow run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WorkflowStreamEvent {
    /// Run started.
    WorkflowStarted {
        task_id: String,
        workflow_run_id: String,
        data: WorkflowStartedData,
    },
    /// A node began executing.
    NodeStarted {
        task_id: String,
        workflow_run_id: String,
        data: NodeStartedData,
    },
    /// A node finished, successfully or not.
    NodeFinished {
        task_id: String,
        workflow_run_id: String,
        data: NodeFinishedData,
    },
    /// Run finished; terminal for the run.
    WorkflowFinished {
        task_id: String,
        workflow_run_id: String,
        data: WorkflowFinishedData,
    },
    /// Text output chunk.
    TextChunk {
        task_id: String,
        workflow_run_id: String,
        data: TextChunkData,
    },
    /// Text output replaced.
    TextReplace {
        task_id: String,
        workflow_run_id: String,
        data: TextChunkData,
    },
    /// Base64 audio chunk from text-to-speech.
    TtsMessage {
        task_id: String,
        #[serde(default)]
        message_id: Option<String>,
        #[serde(default)]
        audio: String,
    },
    /// End of the text-to-speech audio.
    TtsMessageEnd {
        task_id: String,
        #[serde(default)]
        message_id: Option<String>,
        #[serde(default)]
        audio: String,
    },
    /// Server-side failure reported inside the stream.
    Error {
        #[serde(default)]
        task_id: Option<String>,
        #[serde(default)]
        status: Option<u16>,
        #[serde(default)]
        code: String,
        #[serde(default)]
        message: String,
    },
    /// Keep-alive.
    Ping,
    /// Any event name this crate does not model.
    #[serde(other)]
    Unknown,
}

impl WorkflowStreamEvent {
    /// Task id, usable with [`WorkflowsApi::stop`](crate::api::WorkflowsApi::stop).
    pub fn task_id(&self) -> Option<&str> {
        match self {
            WorkflowStreamEvent::WorkflowStarted { task_id, .. }
            | WorkflowStreamEvent::NodeStarted { task_id, .. }
            | WorkflowStreamEvent::NodeFinished { task_id, .. }
            | WorkflowStreamEvent::WorkflowFinished { task_id, .. }
            | WorkflowStreamEvent::TextChunk { task_id, .. }
            | WorkflowStreamEvent::TextReplace { task_id, .. }
            | WorkflowStreamEvent::TtsMessage { task_id, .. }
            | WorkflowStreamEvent::TtsMessageEnd { task_id, .. } => Some(task_id),
            WorkflowStreamEvent::Error { task_id, .. } => task_id.as_deref(),
            _ => None,
        }
    }

    /// Text carried by a `text_chunk` event.
    pub fn text(&self) -> Option<&str> {
        match self {
            WorkflowStreamEvent::TextChunk { data, .. } => Some(&data.text),
            _ => None,
        }
    }
}

/// Blocking-mode workflow response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowRunResponse {
    pub task_id: String,
    pub workflow_run_id: String,
    pub data: WorkflowFinishedData,
}

// ─────────────────────────────────────────────────────────────────────────────
// Stop
// ─────────────────────────────────────────────────────────────────────────────

/// Body of a stop request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopRequest {
    pub user: String,
}

/// Response to a stop request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopResponse {
    /// Always `success` when the server accepted the stop.
    pub result: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_request_serialization() {
        let request = ChatMessageRequest::new("Hi", "user-1")
            .with_conversation("conv-1")
            .with_input("lang", "en");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "query": "Hi",
                "inputs": {"lang": "en"},
                "response_mode": "streaming",
                "user": "user-1",
                "conversation_id": "conv-1"
            })
        );
    }

    #[test]
    fn test_file_input_serialization() {
        let file = FileInput::remote_image("https://example.com/a.png");
        let value = serde_json::to_value(&file).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "image",
                "transfer_method": "remote_url",
                "url": "https://example.com/a.png"
            })
        );
    }

    #[test]
    fn test_completion_request_has_query_input() {
        let request = CompletionRequest::new("Write a haiku", "u");
        assert_eq!(request.inputs["query"], json!("Write a haiku"));
    }

    #[test]
    fn test_chat_message_event() {
        let event: ChatStreamEvent = serde_json::from_value(json!({
            "event": "message",
            "task_id": "t1",
            "message_id": "m1",
            "conversation_id": "c1",
            "answer": "Hello",
            "created_at": 1705395332
        }))
        .unwrap();
        assert_eq!(event.answer(), Some("Hello"));
        assert_eq!(event.task_id(), Some("t1"));
        assert_eq!(event.conversation_id(), Some("c1"));
    }

    #[test]
    fn test_chat_message_end_event() {
        let event: ChatStreamEvent = serde_json::from_value(json!({
            "event": "message_end",
            "task_id": "t1",
            "message_id": "m1",
            "conversation_id": "c1",
            "metadata": {
                "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15},
                "retriever_resources": []
            }
        }))
        .unwrap();
        match event {
            ChatStreamEvent::MessageEnd { metadata, .. } => {
                assert_eq!(metadata.usage.unwrap().total_tokens, 15);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_ping_and_unknown_events() {
        let ping: ChatStreamEvent = serde_json::from_value(json!({"event": "ping"})).unwrap();
        assert_eq!(ping, ChatStreamEvent::Ping);

        let unknown: ChatStreamEvent =
            serde_json::from_value(json!({"event": "iteration_started", "task_id": "t"})).unwrap();
        assert_eq!(unknown, ChatStreamEvent::Unknown);
        assert_eq!(unknown.task_id(), None);
    }

    #[test]
    fn test_in_band_error_event() {
        let event: ChatStreamEvent = serde_json::from_value(json!({
            "event": "error",
            "task_id": "t1",
            "message_id": "m1",
            "status": 400,
            "code": "invalid_param",
            "message": "bad"
        }))
        .unwrap();
        assert!(matches!(
            event,
            ChatStreamEvent::Error { status: Some(400), ref code, .. } if code == "invalid_param"
        ));
    }

    #[test]
    fn test_workflow_events() {
        let started: WorkflowStreamEvent = serde_json::from_value(json!({
            "event": "workflow_started",
            "task_id": "t1",
            "workflow_run_id": "r1",
            "data": {"id": "r1", "workflow_id": "w1", "sequence_number": 3, "created_at": 1}
        }))
        .unwrap();
        assert_eq!(started.task_id(), Some("t1"));

        let chunk: WorkflowStreamEvent = serde_json::from_value(json!({
            "event": "text_chunk",
            "task_id": "t1",
            "workflow_run_id": "r1",
            "data": {"text": "partial", "from_variable_selector": ["llm", "text"]}
        }))
        .unwrap();
        assert_eq!(chunk.text(), Some("partial"));

        let finished: WorkflowStreamEvent = serde_json::from_value(json!({
            "event": "workflow_finished",
            "task_id": "t1",
            "workflow_run_id": "r1",
            "data": {
                "id": "r1",
                "workflow_id": "w1",
                "status": "succeeded",
                "outputs": {"answer": "42"},
                "elapsed_time": 1.5,
                "total_tokens": 20,
                "total_steps": 3
            }
        }))
        .unwrap();
        match finished {
            WorkflowStreamEvent::WorkflowFinished { data, .. } => {
                assert_eq!(data.status, "succeeded");
                assert_eq!(data.outputs, Some(json!({"answer": "42"})));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_workflow_auxiliary_events() {
        let tts: WorkflowStreamEvent = serde_json::from_value(json!({
            "event": "tts_message",
            "task_id": "t1",
            "message_id": "m1",
            "audio": "UklGRg=="
        }))
        .unwrap();
        assert_eq!(tts.task_id(), Some("t1"));

        let tts_end: WorkflowStreamEvent =
            serde_json::from_value(json!({"event": "tts_message_end", "task_id": "t1"})).unwrap();
        assert!(matches!(
            tts_end,
            WorkflowStreamEvent::TtsMessageEnd { ref audio, .. } if audio.is_empty()
        ));

        let error: WorkflowStreamEvent = serde_json::from_value(json!({
            "event": "error",
            "status": 500,
            "code": "internal_server_error",
            "message": "boom"
        }))
        .unwrap();
        assert_eq!(error.task_id(), None);
        assert!(matches!(error, WorkflowStreamEvent::Error { status: Some(500), .. }));

        let ping: WorkflowStreamEvent = serde_json::from_value(json!({"event": "ping"})).unwrap();
        assert_eq!(ping, WorkflowStreamEvent::Ping);
        assert_eq!(ping.task_id(), None);

        let unknown: WorkflowStreamEvent =
            serde_json::from_value(json!({"event": "iteration_started", "task_id": "t1"})).unwrap();
        assert_eq!(unknown, WorkflowStreamEvent::Unknown);
    }
}
