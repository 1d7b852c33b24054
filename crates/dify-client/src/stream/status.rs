//! HTTP status classification.

/// Decides which response statuses fail a request.
pub trait StatusClassifier: Send + Sync {
    /// Whether `status` should be reported as [`Error::RequestFailed`](crate::Error::RequestFailed).
    fn is_error(&self, status: u16) -> bool;
}

/// 4xx and 5xx are errors. Everything else, including codes outside
/// `100..=599`, is not.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStatusClassifier;

impl StatusClassifier for DefaultStatusClassifier {
    fn is_error(&self, status: u16) -> bool {
        (400..=599).contains(&status)
    }
}
