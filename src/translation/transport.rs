use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use super::error::BoxError;

/// A single form field; forms are sent in field order.
pub type Field = (&'static str, String);

/// Sends a form-encoded POST and hands back the raw response body.
///
/// Implementations must not interpret the HTTP status: the service reports
/// failures inside the JSON body, so the body is returned for any status.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_form(&self, url: &str, form: &[Field]) -> Result<Bytes, BoxError>;
}

/// Default transport backed by a shared `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_form(&self, url: &str, form: &[Field]) -> Result<Bytes, BoxError> {
        let response = self.client.post(url).form(form).send().await?;

        tracing::debug!(status = %response.status(), url, "response received");

        Ok(response.bytes().await?)
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn post_form(&self, url: &str, form: &[Field]) -> Result<Bytes, BoxError> {
        (**self).post_form(url, form).await
    }
}
