use super::language::lang_param;
use super::transport::Field;

/// Optional modifiers for [`Client::translate`](super::Client::translate).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Source language; `None` (or empty) lets the service auto-detect it.
    pub from: Option<String>,
}

impl TranslateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the source language of the text.
    #[must_use]
    pub fn from(mut self, lang: impl Into<String>) -> Self {
        self.from = Some(lang.into());
        self
    }
}

/// A single `/translate` call before serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateRequest {
    pub text: String,
    pub to: String,
    pub from: Option<String>,
}

impl TranslateRequest {
    pub fn new(text: impl Into<String>, to: impl Into<String>, options: TranslateOptions) -> Self {
        Self {
            text: text.into(),
            to: to.into(),
            from: options.from,
        }
    }

    pub fn form(&self) -> Vec<Field> {
        vec![
            ("text", self.text.clone()),
            ("lang", lang_param(self.from.as_deref(), &self.to)),
        ]
    }
}

/// Builds the `/detect` form; `hint` is only sent when hints are given.
pub fn detect_form(text: &str, hints: &[&str]) -> Vec<Field> {
    let mut form = vec![("text", text.to_string())];
    let hint = hints.join(",");
    if !hint.is_empty() {
        form.push(("hint", hint));
    }
    form
}
