//! CLI command handlers.

pub mod chat;
pub mod complete;
pub mod config;
pub mod stop;
pub mod workflow;

use std::time::Duration;

use anyhow::{Context as _, Result};
use dify_client::{DifyClient, EventStream, StreamOutcome};
use dify_config::{DifyConfig, SecretSource};
use futures::StreamExt;
use serde_json::{Map, Value};

/// End-user identifier used when neither a flag nor the config sets one.
const FALLBACK_USER: &str = "dify-cli";

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Base URL from `--base-url` / `DIFY_BASE_URL`.
    pub base_url: Option<String>,
    /// API key from `--api-key` / `DIFY_API_KEY`.
    pub api_key: Option<String>,
    /// Merged file configuration.
    pub config: DifyConfig,
    /// Output as JSON for scripting.
    pub json_output: bool,
    /// Verbose output enabled.
    pub verbose: bool,
}

impl Context {
    /// Build a client from flags, then config, then defaults.
    pub fn client(&self) -> Result<DifyClient> {
        let mut builder = DifyClient::builder();

        if let Some(url) = self.base_url.as_deref().or(self.config.base_url()) {
            builder = builder.base_url(url);
        }

        let secret = match &self.api_key {
            Some(key) if !key.is_empty() => Some((key.clone(), SecretSource::Explicit)),
            _ => dify_config::resolve_api_key(self.config.api_key()).map(|s| (s.value, s.source)),
        };
        match secret {
            Some((key, source)) => {
                tracing::debug!(source = %source, "using API key");
                builder = builder.api_key(key);
            }
            None => tracing::warn!("no API key configured; set DIFY_API_KEY or --api-key"),
        }

        if let Some(secs) = self.config.timeout_secs() {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = self.config.stream_timeout_secs() {
            builder = builder.stream_timeout(Duration::from_secs(secs));
        }

        builder.build().context("failed to build client")
    }

    /// End-user identifier: flag, then `[defaults] user`, then a fixed fallback.
    pub fn user(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.config.default_user().map(str::to_string))
            .unwrap_or_else(|| FALLBACK_USER.to_string())
    }
}

/// Parse `name=value` pairs into app inputs. Values that parse as JSON keep
/// their JSON type; anything else is a string.
pub fn parse_inputs(pairs: &[String]) -> Result<Map<String, Value>> {
    let mut inputs = Map::new();
    for pair in pairs {
        let (name, raw) = pair
            .split_once('=')
            .with_context(|| format!("invalid input '{}', expected name=value", pair))?;
        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        inputs.insert(name.to_string(), value);
    }
    Ok(inputs)
}

/// Feed every event to `on_event` until the stream ends or Ctrl-C cancels it.
///
/// Returns the stream's terminal outcome.
pub async fn consume<T, F>(
    mut stream: EventStream<T>,
    mut on_event: F,
) -> Result<Option<StreamOutcome>>
where
    T: Send + 'static,
    F: FnMut(T) -> Result<()>,
{
    let handle = stream.cancel_handle();
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                handle.cancel();
                break;
            }
            item = stream.next() => match item {
                Some(Ok(event)) => on_event(event)?,
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
        }
    }

    Ok(handle.outcome())
}
