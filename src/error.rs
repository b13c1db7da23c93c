// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Project(String),
    Translator(TranslatorError),
}

/// Specific error types for machine-translation requests.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslatorError {
    /// The service could not be reached (DNS, connection refused, TLS)
    ServiceUnreachable(String),

    /// The request timed out
    Timeout,

    /// The service answered with a non-success status
    Rejected { status: u16, message: String },

    /// The service does not support the requested target language
    UnsupportedLanguage(String),

    /// The response body could not be decoded
    MalformedResponse(String),

    /// Generic error with raw message
    Other(String),
}

impl TranslatorError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            TranslatorError::ServiceUnreachable(_) => "error-translate-unreachable",
            TranslatorError::Timeout => "error-translate-timeout",
            TranslatorError::Rejected { .. } => "error-translate-rejected",
            TranslatorError::UnsupportedLanguage(_) => "error-translate-unsupported-language",
            TranslatorError::MalformedResponse(_) => "error-translate-malformed-response",
            TranslatorError::Other(_) => "error-translate-general",
        }
    }

    /// Attempts to parse a raw transport error message into a specific
    /// TranslatorError type. This is used to categorize errors coming out
    /// of the HTTP client, whose error strings are the only signal we get.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("timed out") || msg_lower.contains("timeout") {
            return TranslatorError::Timeout;
        }

        if msg_lower.contains("dns")
            || msg_lower.contains("connect")
            || msg_lower.contains("unreachable")
            || msg_lower.contains("refused")
        {
            return TranslatorError::ServiceUnreachable(msg.to_string());
        }

        if msg_lower.contains("json")
            || msg_lower.contains("decode")
            || msg_lower.contains("expected value")
            || msg_lower.contains("missing field")
        {
            return TranslatorError::MalformedResponse(msg.to_string());
        }

        TranslatorError::Other(msg.to_string())
    }
}

impl fmt::Display for TranslatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslatorError::ServiceUnreachable(msg) => {
                write!(f, "Translation service unreachable: {}", msg)
            }
            TranslatorError::Timeout => write!(f, "Translation request timed out"),
            TranslatorError::Rejected { status, message } => {
                write!(f, "Translation service rejected the request ({}): {}", status, message)
            }
            TranslatorError::UnsupportedLanguage(tag) => {
                write!(f, "Unsupported target language: {}", tag)
            }
            TranslatorError::MalformedResponse(msg) => {
                write!(f, "Malformed service response: {}", msg)
            }
            TranslatorError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Project(e) => write!(f, "Project Error: {}", e),
            Error::Translator(e) => write!(f, "Translator Error: {}", e),
        }
    }
}

impl From<TranslatorError> for Error {
    fn from(err: TranslatorError) -> Self {
        Error::Translator(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Project(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn from_json_error_produces_project_variant() {
        let json_error = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: Error = json_error.into();
        assert!(matches!(err, Error::Project(_)));
    }

    #[test]
    fn translator_error_from_message_timeout() {
        let err = TranslatorError::from_message("operation timed out");
        assert!(matches!(err, TranslatorError::Timeout));
    }

    #[test]
    fn translator_error_from_message_unreachable() {
        let err = TranslatorError::from_message("error trying to connect: dns error");
        assert!(matches!(err, TranslatorError::ServiceUnreachable(_)));
    }

    #[test]
    fn translator_error_from_message_malformed() {
        let err = TranslatorError::from_message("error decoding response body: expected value");
        assert!(matches!(err, TranslatorError::MalformedResponse(_)));
    }

    #[test]
    fn translator_error_from_message_other() {
        let err = TranslatorError::from_message("something odd happened");
        assert!(matches!(err, TranslatorError::Other(_)));
    }

    #[test]
    fn translator_error_i18n_keys() {
        assert_eq!(
            TranslatorError::Timeout.i18n_key(),
            "error-translate-timeout"
        );
        assert_eq!(
            TranslatorError::UnsupportedLanguage("xx".into()).i18n_key(),
            "error-translate-unsupported-language"
        );
        assert_eq!(
            TranslatorError::Rejected {
                status: 400,
                message: "bad request".into()
            }
            .i18n_key(),
            "error-translate-rejected"
        );
    }

    #[test]
    fn translator_error_display() {
        let err = TranslatorError::Rejected {
            status: 403,
            message: "missing key".to_string(),
        };
        let text = format!("{}", err);
        assert!(text.contains("403"));
        assert!(text.contains("missing key"));
    }
}
