//! Configuration for the Dify client and CLI.
//!
//! Provides TOML-based configuration with:
//! - Server connection settings (`[server]`: base URL, API key, timeouts)
//! - Request defaults (`[defaults]`: end-user identifier)
//! - Config file layering (user config dir + project-local `dify.toml`)
//! - API key resolution (env var → config file)

pub mod discovery;
pub mod error;
pub mod secrets;
pub mod types;

pub use discovery::{
    ConfigSource, LoadedConfig, load_config, load_config_file, load_config_with_options,
    save_config, xdg_config_dir, xdg_config_path,
};
pub use error::{ConfigError, Result};
pub use secrets::{API_KEY_ENV, ResolvedSecret, SecretSource, resolve_api_key};
pub use types::*;
