//! HTTP client SDK for Dify applications.
//!
//! This crate provides a typed client for the Dify application API, with
//! streaming responses delivered as cancellable [`EventStream`]s.
//!
//! # Example
//!
//! ```no_run
//! use dify_client::{ChatMessageRequest, ChatStreamEvent, DifyClient, Result};
//! use futures::StreamExt;
//!
//! # async fn example() -> Result<()> {
//! let client = DifyClient::builder()
//!     .base_url("https://api.dify.ai/v1")
//!     .api_key("app-secret")
//!     .build()?;
//!
//! // Blocking answer
//! let response = client.chat().message("Hello!", "user-1").await?;
//! println!("Response: {}", response.answer);
//!
//! // Streamed answer, cancelled from elsewhere via the handle
//! let mut stream = client
//!     .chat()
//!     .stream(ChatMessageRequest::new("Tell me a story", "user-1"))?;
//! let handle = stream.cancel_handle();
//! while let Some(event) = stream.next().await {
//!     match event? {
//!         ChatStreamEvent::Message { answer, .. } => print!("{}", answer),
//!         ChatStreamEvent::MessageEnd { .. } => println!("\n[Done]"),
//!         _ => {}
//!     }
//! }
//! println!("outcome: {:?}", handle.outcome());
//! # Ok(())
//! # }
//! ```
//!
//! # Layers
//!
//! - [`sse`]: incremental line decoding and frame accumulation
//! - [`stream`]: the transport seam and the cancellable [`EventStream`]
//! - [`api`]: chat, completion and workflow endpoints

pub mod api;
pub mod client;
pub mod error;
pub mod sse;
pub mod stream;
pub mod types;

pub use client::{ClientBuilder, DEFAULT_BASE_URL, DifyClient};
pub use error::{ApiErrorBody, DecodeError, Error, Result};
pub use stream::{
    CancelHandle, DefaultStatusClassifier, EventDecoder, EventStream, FnDecoder, JsonDecoder,
    ReqwestTransport, StatusClassifier, StreamOutcome, StreamRequest, StreamResponse,
    StreamTransport,
};
pub use types::*;
