use super::error::TranslateError;
use super::request::{TranslateOptions, TranslateRequest, detect_form};
use super::response::{Envelope, Languages, unmarshal};
use super::transport::{Field, HttpTransport, Transport};

/// Endpoint root of the Yandex.Translate JSON API.
pub const DEFAULT_URL: &str = "https://translate.yandex.net/api/v1.5/tr.json";

/// Settings for [`Client::new`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// API key; must not be empty.
    pub api_key: String,
    /// Endpoint root; [`DEFAULT_URL`] when `None` or empty.
    pub base_url: Option<String>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }
}

/// Client for the `getLangs`, `detect` and `translate` endpoints.
///
/// Holds no mutable state; every call is one form POST and one JSON decode.
pub struct Client<T = HttpTransport> {
    transport: T,
    base_url: String,
    api_key: String,
}

impl Client<HttpTransport> {
    pub fn new(config: ClientConfig) -> Result<Self, TranslateError> {
        Self::with_transport(config, HttpTransport::new())
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self, TranslateError> {
        if config.api_key.is_empty() {
            return Err(TranslateError::MissingKey);
        }

        let base_url = config
            .base_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_URL.to_string());

        Ok(Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lists supported directions and language names.
    ///
    /// Names are always requested unlocalized.
    pub async fn list_languages(&self) -> Result<Languages, TranslateError> {
        let envelope = self.call("/getLangs", Vec::new()).await?;
        Ok(envelope.into_languages())
    }

    /// Detects the language of `text`, optionally narrowed by candidate `hints`.
    pub async fn detect_language(
        &self,
        text: &str,
        hints: &[&str],
    ) -> Result<String, TranslateError> {
        let envelope = self.call("/detect", detect_form(text, hints)).await?;
        Ok(envelope.into_detected())
    }

    /// Translates `text` into `to`, one output entry per input segment.
    pub async fn translate(
        &self,
        text: &str,
        to: &str,
        options: TranslateOptions,
    ) -> Result<Vec<String>, TranslateError> {
        let request = TranslateRequest::new(text, to, options);
        let envelope = self.call("/translate", request.form()).await?;
        Ok(envelope.into_segments())
    }

    async fn call(&self, path: &str, mut form: Vec<Field>) -> Result<Envelope, TranslateError> {
        form.push(("key", self.api_key.clone()));
        let url = format!("{}{path}", self.base_url);

        tracing::debug!(%url, "sending request");

        let body = self
            .transport
            .post_form(&url, &form)
            .await
            .map_err(TranslateError::Transport)?;

        unmarshal(&body).inspect_err(|err| {
            if let TranslateError::Api { code, message } = err {
                tracing::warn!(code, %message, path, "service rejected request");
            }
        })
    }
}
