//! Payload decoders.

use serde::de::DeserializeOwned;

use crate::error::DecodeError;

/// Turns one event payload into a typed value.
pub trait EventDecoder<T>: Send + Sync {
    /// Decode a payload. Failures skip the frame; they never end the stream.
    fn decode(&self, payload: &str) -> Result<T, DecodeError>;
}

/// Decodes payloads as JSON with `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl<T: DeserializeOwned> EventDecoder<T> for JsonDecoder {
    fn decode(&self, payload: &str) -> Result<T, DecodeError> {
        serde_json::from_str(payload).map_err(DecodeError::from)
    }
}

/// Adapts a closure into an [`EventDecoder`].
#[derive(Debug, Clone, Copy)]
pub struct FnDecoder<F>(F);

impl<F> FnDecoder<F> {
    /// Wrap a decode function.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<T, F> EventDecoder<T> for FnDecoder<F>
where
    F: Fn(&str) -> Result<T, DecodeError> + Send + Sync,
{
    fn decode(&self, payload: &str) -> Result<T, DecodeError> {
        (self.0)(payload)
    }
}
