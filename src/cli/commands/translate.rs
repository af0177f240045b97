use anyhow::Result;

use crate::translation::{Client, TranslateOptions, Transport};

/// Translates `text` into `to`; each returned segment becomes one output line.
pub async fn run<T: Transport>(
    client: &Client<T>,
    text: &str,
    to: &str,
    from: Option<&str>,
) -> Result<Vec<String>> {
    let mut options = TranslateOptions::new();
    if let Some(from) = from {
        options = options.from(from);
    }

    let segments = client.translate(text, to, options).await?;
    if segments.is_empty() {
        tracing::warn!("service returned no translated text");
    }
    Ok(segments)
}
