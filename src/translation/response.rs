use std::collections::BTreeMap;

use serde::Deserialize;

use super::error::TranslateError;

const CODE_OK: i64 = 200;

/// The JSON shape shared by every endpoint. Which fields are filled depends
/// on the endpoint that produced it, so it never leaves this module.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct Envelope {
    code: Option<i64>,
    message: String,
    dirs: Vec<String>,
    langs: BTreeMap<String, String>,
    lang: String,
    text: Vec<String>,
}

/// Decodes a response body, turning failure envelopes into errors.
pub(super) fn unmarshal(body: &[u8]) -> Result<Envelope, TranslateError> {
    let envelope: Envelope =
        serde_json::from_slice(body).map_err(|source| TranslateError::MalformedResponse {
            source,
            body: String::from_utf8_lossy(body).into_owned(),
        })?;

    match envelope.code {
        Some(code) if code != CODE_OK => Err(TranslateError::Api {
            code,
            message: envelope.message,
        }),
        _ => Ok(envelope),
    }
}

/// Result of [`Client::list_languages`](super::Client::list_languages).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Languages {
    /// Supported directions as `"<from>-<to>"`, in service order.
    pub directions: Vec<String>,
    /// Language code to display name.
    pub names: BTreeMap<String, String>,
}

impl Envelope {
    pub(super) fn into_languages(self) -> Languages {
        Languages {
            directions: self.dirs,
            names: self.langs,
        }
    }

    pub(super) fn into_detected(self) -> String {
        self.lang
    }

    pub(super) fn into_segments(self) -> Vec<String> {
        self.text
    }
}
