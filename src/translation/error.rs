//! Error taxonomy for the translation client.

/// Boxed error produced by a [`Transport`](super::Transport).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(thiserror::Error, Debug)]
pub enum TranslateError {
    /// The client was configured without an API key.
    #[error("translate: empty API key")]
    MissingKey,

    /// The request never produced a response body (DNS, connect, TLS, IO).
    #[error(transparent)]
    Transport(BoxError),

    /// The body could not be decoded as the response envelope.
    #[error("translate: malformed response: {source}: {body:?}")]
    MalformedResponse {
        source: serde_json::Error,
        body: String,
    },

    /// The service answered with a non-success status code.
    #[error("translate: {code}: {message}")]
    Api { code: i64, message: String },
}
