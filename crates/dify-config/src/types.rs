//! Configuration types.
//!
//! ```toml
//! [server]
//! base_url = "https://api.dify.ai/v1"
//! api_key = "app-..."          # prefer DIFY_API_KEY
//! timeout_secs = 30
//! stream_timeout_secs = 300
//!
//! [defaults]
//! user = "cli-user"
//! ```

use serde::{Deserialize, Serialize};

use crate::{ConfigError, Result};

/// Keys accepted by [`DifyConfig::get`] and [`DifyConfig::set`].
pub const CONFIG_KEYS: &[&str] = &[
    "server.base_url",
    "server.api_key",
    "server.timeout_secs",
    "server.stream_timeout_secs",
    "defaults.user",
];

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifyConfig {
    /// Server connection settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
    /// Request defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

/// `[server]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// API base URL, including the `/v1` prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Application API key. Plaintext; triggers a warning when loaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Timeout for blocking requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Timeout for streaming requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_timeout_secs: Option<u64>,
}

impl ServerConfig {
    /// Whether an API key is stored in the file.
    pub fn has_plaintext_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    fn merge(&mut self, other: ServerConfig) {
        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.timeout_secs.is_some() {
            self.timeout_secs = other.timeout_secs;
        }
        if other.stream_timeout_secs.is_some() {
            self.stream_timeout_secs = other.stream_timeout_secs;
        }
    }
}

/// `[defaults]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// End-user identifier sent with every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl DifyConfig {
    /// Create an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize to a TOML string.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Merge another config on top of this one (other takes priority).
    ///
    /// Merging is per field: a layer that sets only `server.base_url` keeps
    /// the API key from the layer below.
    pub fn merge(&mut self, other: DifyConfig) {
        if let Some(server) = other.server {
            self.server.get_or_insert_with(Default::default).merge(server);
        }
        if let Some(defaults) = other.defaults
            && defaults.user.is_some()
        {
            self.defaults.get_or_insert_with(Default::default).user = defaults.user;
        }
    }

    /// Configured base URL.
    pub fn base_url(&self) -> Option<&str> {
        self.server.as_ref()?.base_url.as_deref()
    }

    /// API key stored in the config file.
    pub fn api_key(&self) -> Option<&str> {
        self.server.as_ref()?.api_key.as_deref()
    }

    /// Blocking request timeout in seconds.
    pub fn timeout_secs(&self) -> Option<u64> {
        self.server.as_ref()?.timeout_secs
    }

    /// Streaming request timeout in seconds.
    pub fn stream_timeout_secs(&self) -> Option<u64> {
        self.server.as_ref()?.stream_timeout_secs
    }

    /// Default end-user identifier.
    pub fn default_user(&self) -> Option<&str> {
        self.defaults.as_ref()?.user.as_deref()
    }

    /// Read a value by dotted key, e.g. `server.base_url`.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = match key {
            "server.base_url" => self.base_url().map(str::to_string),
            "server.api_key" => self.api_key().map(str::to_string),
            "server.timeout_secs" => self.timeout_secs().map(|v| v.to_string()),
            "server.stream_timeout_secs" => self.stream_timeout_secs().map(|v| v.to_string()),
            "defaults.user" => self.default_user().map(str::to_string),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        };
        Ok(value)
    }

    /// Set a value by dotted key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "server.base_url" => self.server_mut().base_url = Some(value.to_string()),
            "server.api_key" => self.server_mut().api_key = Some(value.to_string()),
            "server.timeout_secs" => self.server_mut().timeout_secs = Some(parse_secs(key, value)?),
            "server.stream_timeout_secs" => {
                self.server_mut().stream_timeout_secs = Some(parse_secs(key, value)?)
            }
            "defaults.user" => {
                self.defaults.get_or_insert_with(Default::default).user = Some(value.to_string())
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Remove a value by dotted key.
    pub fn unset(&mut self, key: &str) -> Result<()> {
        match key {
            "server.base_url" => self.server_mut().base_url = None,
            "server.api_key" => self.server_mut().api_key = None,
            "server.timeout_secs" => self.server_mut().timeout_secs = None,
            "server.stream_timeout_secs" => self.server_mut().stream_timeout_secs = None,
            "defaults.user" => {
                if let Some(defaults) = &mut self.defaults {
                    defaults.user = None;
                }
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    fn server_mut(&mut self) -> &mut ServerConfig {
        self.server.get_or_insert_with(Default::default)
    }
}

fn parse_secs(key: &str, value: &str) -> Result<u64> {
    value.parse::<u64>().map_err(|e| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = DifyConfig::from_toml(
            r#"
[server]
base_url = "http://localhost/v1"
api_key = "app-123"
timeout_secs = 10
stream_timeout_secs = 600

[defaults]
user = "alice"
"#,
        )
        .unwrap();

        assert_eq!(config.base_url(), Some("http://localhost/v1"));
        assert_eq!(config.api_key(), Some("app-123"));
        assert_eq!(config.timeout_secs(), Some(10));
        assert_eq!(config.stream_timeout_secs(), Some(600));
        assert_eq!(config.default_user(), Some("alice"));
    }

    #[test]
    fn test_parse_empty_config() {
        let config = DifyConfig::from_toml("").unwrap();
        assert_eq!(config, DifyConfig::new());
        assert!(config.base_url().is_none());
    }

    #[test]
    fn test_wrong_value_type_is_parse_error() {
        let err = DifyConfig::from_toml("[server]\ntimeout_secs = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_merge_is_per_field() {
        let mut base = DifyConfig::from_toml(
            r#"
[server]
base_url = "https://api.dify.ai/v1"
api_key = "app-base"

[defaults]
user = "base-user"
"#,
        )
        .unwrap();
        let layer = DifyConfig::from_toml(
            r#"
[server]
base_url = "http://localhost/v1"
"#,
        )
        .unwrap();

        base.merge(layer);
        assert_eq!(base.base_url(), Some("http://localhost/v1"));
        assert_eq!(base.api_key(), Some("app-base"));
        assert_eq!(base.default_user(), Some("base-user"));
    }

    #[test]
    fn test_toml_roundtrip_skips_empty_fields() {
        let mut config = DifyConfig::new();
        config.set("server.base_url", "http://localhost/v1").unwrap();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("base_url"));
        assert!(!toml.contains("api_key"));
        assert!(!toml.contains("[defaults]"));
        assert_eq!(DifyConfig::from_toml(&toml).unwrap(), config);
    }

    #[test]
    fn test_get_set_unset() {
        let mut config = DifyConfig::new();
        config.set("server.timeout_secs", "45").unwrap();
        config.set("defaults.user", "bob").unwrap();
        assert_eq!(config.get("server.timeout_secs").unwrap().as_deref(), Some("45"));
        assert_eq!(config.get("defaults.user").unwrap().as_deref(), Some("bob"));

        config.unset("defaults.user").unwrap();
        assert_eq!(config.get("defaults.user").unwrap(), None);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = DifyConfig::new();
        assert!(matches!(
            config.set("server.timeout_secs", "ten"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("server.port", "80"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(config.get("nope"), Err(ConfigError::UnknownKey(_))));
    }

    #[test]
    fn test_plaintext_key_detection() {
        let mut server = ServerConfig::default();
        assert!(!server.has_plaintext_api_key());
        server.api_key = Some(String::new());
        assert!(!server.has_plaintext_api_key());
        server.api_key = Some("app-1".to_string());
        assert!(server.has_plaintext_api_key());
    }
}
