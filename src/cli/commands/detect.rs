use anyhow::Result;

use crate::translation::{Client, Transport};

/// Detects the language of `text`; a `--from` value is sent as the only hint.
pub async fn run<T: Transport>(
    client: &Client<T>,
    text: &str,
    hint: Option<&str>,
) -> Result<String> {
    let hints: Vec<&str> = hint.into_iter().collect();
    Ok(client.detect_language(text, &hints).await?)
}
