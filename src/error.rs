//! Error types for locale handling.

use thiserror::Error;

/// Errors raised by the i18n subsystem and the prompt template loader.
#[derive(Debug, Error)]
pub enum I18nError {
    /// A locale outside the supported set was requested
    #[error("Unsupported locale: '{0}'")]
    UnsupportedLocale(String),

    /// No template file exists for the requested locale or the default one
    #[error("Template {name} not found for locale {locale}")]
    TemplateNotFound { name: String, locale: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = I18nError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_locale_message() {
        let err = I18nError::UnsupportedLocale("fr-FR".to_string());
        assert_eq!(err.to_string(), "Unsupported locale: 'fr-FR'");
    }

    #[test]
    fn test_template_not_found_message() {
        let err = I18nError::TemplateNotFound {
            name: "outline_prompt.txt".to_string(),
            locale: "en-US".to_string(),
        };
        assert!(err.to_string().contains("outline_prompt.txt"));
        assert!(err.to_string().contains("en-US"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: I18nError = io.into();
        assert!(matches!(err, I18nError::Io(_)));
    }
}
