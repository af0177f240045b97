//! Mode implementations and dispatch.

/// Language detection.
pub mod detect;

/// Translation direction listing.
pub mod languages;

/// Text translation.
pub mod translate;

#[cfg(test)]
mod test_support;

use anyhow::Result;

use crate::cli::Args;
use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::output;
use crate::translation::{Client, ClientConfig, validate_language};
use crate::ui::Spinner;

/// The single operation one invocation performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    ListDirections,
    Detect,
    Translate,
}

impl Mode {
    /// `--ls` beats `--lang`, which beats the default translate mode.
    pub const fn select(args: &Args) -> Self {
        if args.list_directions {
            Self::ListDirections
        } else if args.detect {
            Self::Detect
        } else {
            Self::Translate
        }
    }

    /// Whether this mode needs input text.
    pub const fn needs_text(self) -> bool {
        !matches!(self, Self::ListDirections)
    }
}

/// Resolves settings, performs the one selected call and prints the result.
///
/// Callers must have rejected blank text (see [`Args::has_text`]) for modes
/// that need it.
pub async fn run(args: &Args) -> Result<()> {
    let mode = Mode::select(args);

    let file_config = ConfigManager::new()
        .map(|manager| manager.load_or_default())
        .unwrap_or_default();
    let options = ResolveOptions {
        key: args.key.clone(),
        url: args.url.clone(),
        to: args.to.clone(),
    };
    let config = resolve_config(&options, &file_config)?;

    let from = args.from.as_deref().filter(|f| !f.is_empty());
    if mode == Mode::Translate {
        validate_language(&config.target_language)?;
    }
    if let (true, Some(from)) = (mode.needs_text(), from) {
        validate_language(from)?;
    }

    let client = Client::new(ClientConfig::new(config.api_key).with_base_url(config.base_url))?;
    tracing::debug!(?mode, url = client.base_url(), "client ready");

    let text = args.joined_text();
    let spinner = Spinner::new(match mode {
        Mode::ListDirections => "Fetching directions...",
        Mode::Detect => "Detecting...",
        Mode::Translate => "Translating...",
    });

    let lines = match mode {
        Mode::ListDirections => languages::run(&client).await,
        Mode::Detect => detect::run(&client, &text, from)
            .await
            .map(|lang| vec![lang]),
        Mode::Translate => {
            translate::run(&client, &text, &config.target_language, from).await
        }
    };
    spinner.stop();

    output::print_lines(lines?);
    Ok(())
}
