//! # ytr - Yandex.Translate client
//!
//! A small client library for the Yandex.Translate JSON API plus the `ytr`
//! command-line front end. Each operation is one form-encoded POST and one
//! JSON decode.
//!
//! ## Library
//!
//! ```no_run
//! use ytr_cli::translation::{Client, ClientConfig, TranslateOptions};
//!
//! # async fn demo() -> Result<(), ytr_cli::translation::TranslateError> {
//! let client = Client::new(ClientConfig::new("trnsl.1.1.your-key"))?;
//!
//! let lang = client.detect_language("Guten Tag", &["de", "nl"]).await?;
//! let text = client
//!     .translate("Guten Tag", "ru", TranslateOptions::new().from(lang))
//!     .await?;
//! # let _ = text;
//! # Ok(())
//! # }
//! ```
//!
//! ## CLI
//!
//! ```bash
//! # Translate to Russian (the default target)
//! ytr hello world
//!
//! # Pick the direction explicitly
//! ytr --from en --to de good morning
//!
//! # Detect the language of a phrase
//! ytr --lang bonjour tout le monde
//!
//! # List supported directions
//! ytr --ls
//! ```
//!
//! ## Configuration
//!
//! The API key comes from `--key`, then `$YANDEXTRANSLATEAPIKEY`, then
//! `~/.config/ytr/config.toml`:
//!
//! ```toml
//! [ytr]
//! key = "trnsl.1.1..."
//! to = "ru"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and settings resolution.
pub mod config;

/// Output routing, color settings and logging setup.
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Client for the Yandex.Translate API.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
