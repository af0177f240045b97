//! Language codes.

use anyhow::Result;

/// Russian, the default target language.
pub const RU: &str = "ru";

/// Builds the `lang` form value: the bare target, or `"<from>-<to>"`.
pub fn lang_param(from: Option<&str>, to: &str) -> String {
    match from {
        Some(from) if !from.is_empty() => format!("{from}-{to}"),
        _ => to.to_string(),
    }
}

/// Validates a two- or three-letter language code as typed by the user.
///
/// # Errors
///
/// Returns an error if the code is empty, too long, or not lowercase ASCII.
pub fn validate_language(lang: &str) -> Result<()> {
    if is_code(lang) {
        Ok(())
    } else {
        anyhow::bail!(
            "Invalid language code: '{lang}' (rejected locally, nothing was sent)\n\n\
             Use a two- or three-letter code such as ru, en, de, uk.\n\
             Run 'ytr --ls' to see the directions the service supports."
        )
    }
}

fn is_code(s: &str) -> bool {
    (2..=3).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_lowercase())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_param_target_only() {
        assert_eq!(lang_param(None, RU), "ru");
        assert_eq!(lang_param(Some(""), RU), "ru");
    }

    #[test]
    fn test_lang_param_with_source() {
        assert_eq!(lang_param(Some("en"), RU), "en-ru");
    }

    #[test]
    fn test_validate_language() {
        assert!(validate_language("ru").is_ok());
        assert!(validate_language("sah").is_ok());
        assert!(validate_language("").is_err());
        assert!(validate_language("RU").is_err()); // Case sensitive
        assert!(validate_language("russian").is_err());
    }

    #[test]
    fn test_validate_language_error_is_marked_local() {
        let err = validate_language("Russian").unwrap_err().to_string();
        assert!(err.contains("'Russian'"));
        assert!(err.contains("rejected locally"));
    }
}
