//! API endpoint implementations.

mod chat;
mod completion;
mod workflows;

pub use chat::ChatApi;
pub use completion::CompletionApi;
pub use workflows::WorkflowsApi;
