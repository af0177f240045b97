use anyhow::Result;

use crate::translation::{Client, Transport};

/// Fetches the supported directions, one `"<from>-<to>"` entry per line.
pub async fn run<T: Transport>(client: &Client<T>) -> Result<Vec<String>> {
    let languages = client.list_languages().await?;
    tracing::debug!(
        directions = languages.directions.len(),
        languages = languages.names.len(),
        "directions listed"
    );
    Ok(languages.directions)
}
