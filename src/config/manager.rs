use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::paths;
use crate::translation::{DEFAULT_URL, RU};

/// Environment variable consulted for the API key when `--key` is absent.
pub const KEY_ENV: &str = "YANDEXTRANSLATEAPIKEY";

/// Default settings in the `[ytr]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct YtrConfig {
    /// API key stored directly in the config file.
    pub key: Option<String>,
    /// Endpoint root of the translation API.
    pub url: Option<String>,
    /// Default target language.
    pub to: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/ytr/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub ytr: YtrConfig,
}

/// Resolved configuration after merging CLI arguments, environment and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_key: String,
    pub base_url: String,
    pub target_language: String,
}

/// Options for resolving configuration.
///
/// `key` already folds in the environment variable (clap reads it).
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub key: Option<String>,
    pub url: Option<String>,
    pub to: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values, which take
/// precedence over built-in defaults.
///
/// # Errors
///
/// Returns an error if no API key is available from any source.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let api_key = non_empty(options.key.as_ref())
        .or_else(|| non_empty(config_file.ytr.key.as_ref()))
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing API key\n\n\
                 Please provide it via:\n  \
                 - CLI option: ytr --key <key> <text>\n  \
                 - Environment: export {KEY_ENV}=\"your-api-key\"\n  \
                 - Config file: key = \"...\" under [ytr] in ~/.config/ytr/config.toml"
            )
        })?;

    let base_url = non_empty(options.url.as_ref())
        .or_else(|| non_empty(config_file.ytr.url.as_ref()))
        .cloned()
        .unwrap_or_else(|| DEFAULT_URL.to_string());

    let target_language = non_empty(options.to.as_ref())
        .or_else(|| non_empty(config_file.ytr.to.as_ref()))
        .cloned()
        .unwrap_or_else(|| RU.to_string());

    Ok(ResolvedConfig {
        api_key,
        base_url,
        target_language,
    })
}

fn non_empty(value: Option<&String>) -> Option<&String> {
    value.filter(|v| !v.is_empty())
}

/// Locates and loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/ytr/config.toml`
    /// or `~/.config/ytr/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }

    /// Loads the config file, treating a missing file as empty.
    ///
    /// Any other failure is logged as a warning and the defaults are used.
    pub fn load_or_default(&self) -> ConfigFile {
        if !self.config_path.exists() {
            return ConfigFile::default();
        }

        self.load().unwrap_or_else(|err| {
            tracing::warn!("{err:#}; ignoring config file");
            ConfigFile::default()
        })
    }
}
