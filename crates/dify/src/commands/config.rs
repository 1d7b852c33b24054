//! Config command - configuration management.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use dify_config::{CONFIG_KEYS, DifyConfig};

use super::Context;

/// Project-local config file name.
const LOCAL_CONFIG_FILE: &str = "dify.toml";

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the resolved configuration
    Show,

    /// Show which config files are loaded and their precedence
    Which,

    /// Show the user configuration file path
    Path,

    /// Initialize a config file with defaults
    Init {
        /// Create project-local config (./dify.toml) instead of user config
        #[arg(long)]
        local: bool,
    },

    /// Print one value, e.g. `server.base_url`
    Get {
        /// Dotted key
        key: String,
    },

    /// Set one value
    Set {
        /// Dotted key
        key: String,
        /// New value
        value: String,
        /// Write ./dify.toml instead of the user config
        #[arg(long)]
        local: bool,
    },

    /// Remove one value
    Unset {
        /// Dotted key
        key: String,
        /// Write ./dify.toml instead of the user config
        #[arg(long)]
        local: bool,
    },
}

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => cmd_show(ctx),
        ConfigCommand::Which => cmd_which(),
        ConfigCommand::Path => cmd_path(),
        ConfigCommand::Init { local } => cmd_init(local),
        ConfigCommand::Get { key } => cmd_get(ctx, &key),
        ConfigCommand::Set { key, value, local } => {
            edit_file(local, |config| config.set(&key, &value))?;
            println!("Set {}", key);
            Ok(())
        }
        ConfigCommand::Unset { key, local } => {
            edit_file(local, |config| config.unset(&key))?;
            println!("Unset {}", key);
            Ok(())
        }
    }
}

fn cmd_show(ctx: &Context) -> Result<()> {
    let config = &ctx.config;

    if ctx.json_output {
        let mut values = serde_json::Map::new();
        for key in CONFIG_KEYS {
            let value = display_value(key, config.get(key)?);
            values.insert(key.to_string(), value.map_or(serde_json::Value::Null, Into::into));
        }
        println!("{}", serde_json::to_string_pretty(&values)?);
        return Ok(());
    }

    println!("# Dify Configuration\n");
    for key in CONFIG_KEYS {
        let value = display_value(key, config.get(key)?).unwrap_or_else(|| "(unset)".to_string());
        println!("  {:<28} {}", key, value);
    }

    match dify_config::resolve_api_key(config.api_key()) {
        Some(secret) => println!("\nAPI key from {}", secret.source),
        None => println!("\nNo API key configured"),
    }

    if ctx.verbose {
        println!("---\nRaw config:\n");
        println!("{}", config.to_toml()?);
    }
    Ok(())
}

/// Mask secrets for display.
fn display_value(key: &str, value: Option<String>) -> Option<String> {
    if key == "server.api_key" {
        value.map(|v| mask(&v))
    } else {
        value
    }
}

fn mask(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    format!("{}…", visible)
}

fn cmd_which() -> Result<()> {
    let loaded = dify_config::load_config(None)?;

    println!("Config file search order (later overrides earlier):\n");
    for source in &loaded.sources {
        let status = if source.loaded {
            "✓ loaded"
        } else {
            "· not found"
        };
        println!("  {} {}", status, source.path.display());
    }

    println!();
    let loaded_count = loaded.loaded_from().len();
    if loaded_count == 0 {
        println!("No config files found. Run 'dify config init' to create one.");
    } else {
        println!("{} config file(s) loaded.", loaded_count);
    }

    for warning in &loaded.warnings {
        println!("  ⚠ {}", warning);
    }
    Ok(())
}

fn cmd_path() -> Result<()> {
    let path = dify_config::xdg_config_path().context("could not determine config directory")?;
    println!("{}", path.display());
    Ok(())
}

fn cmd_init(local: bool) -> Result<()> {
    let path = target_path(local)?;
    if path.exists() {
        println!("Config file already exists: {}", path.display());
        println!("Use 'dify config set' to modify it.");
        return Ok(());
    }

    let template = r#"# Dify CLI configuration

[server]
base_url = "https://api.dify.ai/v1"
# Prefer the DIFY_API_KEY environment variable over storing the key here.
# api_key = "app-..."
timeout_secs = 30
stream_timeout_secs = 300

[defaults]
user = "dify-cli"
"#;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, template)?;
    println!("Created {}", path.display());
    Ok(())
}

fn cmd_get(ctx: &Context, key: &str) -> Result<()> {
    match ctx.config.get(key)? {
        Some(value) => println!("{}", value),
        None => anyhow::bail!("{} is not set", key),
    }
    Ok(())
}

/// Load the target file (or start empty), apply `f`, save.
fn edit_file(
    local: bool,
    f: impl FnOnce(&mut DifyConfig) -> dify_config::Result<()>,
) -> Result<()> {
    let path = target_path(local)?;
    let mut config = if path.is_file() {
        dify_config::load_config_file(&path)?
    } else {
        DifyConfig::new()
    };
    f(&mut config)?;
    dify_config::save_config(&config, &path)?;
    Ok(())
}

fn target_path(local: bool) -> Result<PathBuf> {
    if local {
        Ok(PathBuf::from(LOCAL_CONFIG_FILE))
    } else {
        dify_config::xdg_config_path().context("could not determine config directory")
    }
}
