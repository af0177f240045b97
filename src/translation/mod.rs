mod client;
mod error;
mod language;
mod request;
mod response;
mod transport;

pub use client::{Client, ClientConfig, DEFAULT_URL};
pub use error::{BoxError, TranslateError};
pub use language::{RU, lang_param, validate_language};
pub use request::{TranslateOptions, TranslateRequest, detect_form};
pub use response::Languages;
pub use transport::{Field, HttpTransport, Transport};
