//! Configuration file management and settings resolution.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, KEY_ENV, ResolveOptions, ResolvedConfig, YtrConfig, resolve_config,
};
