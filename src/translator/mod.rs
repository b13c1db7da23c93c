// SPDX-License-Identifier: MPL-2.0
//! Machine-translation provider port.
//!
//! This module defines the [`TranslationProvider`] trait the workspace
//! uses to request automatic translations of the transcript.
//!
//! # Design Notes
//!
//! - Requests run as async tasks; completion re-enters the update loop as
//!   a message carrying the request id handed out by the content store
//! - Failures are categorized into [`TranslatorError`] so notifications
//!   can localize them
//! - The trait is `Send + Sync` and its futures are `Send` so tasks can
//!   run on the multi-threaded runtime

use crate::domain::LanguageTag;
use crate::error::TranslatorError;
use std::future::Future;

pub mod http;

pub use http::HttpTranslator;

/// One translation request: the transcript text and where it should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    /// Text to translate.
    pub text: String,
    /// Source language; `None` lets the service detect it.
    pub source: Option<LanguageTag>,
    /// Target language or regional variant.
    pub target: LanguageTag,
}

/// Port for automatic translation services.
///
/// The HTTP adapter implements this against a LibreTranslate-style
/// endpoint; tests substitute a canned provider.
pub trait TranslationProvider: Send + Sync {
    /// Translates the request text into the target language.
    ///
    /// # Errors
    ///
    /// Returns a [`TranslatorError`] when the service cannot be reached,
    /// rejects the request, or answers with something unusable.
    fn translate(
        &self,
        request: TranslationRequest,
    ) -> impl Future<Output = Result<String, TranslatorError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Canned provider for exercising the port without a network.
    struct MockProvider {
        response: Result<String, TranslatorError>,
    }

    impl TranslationProvider for MockProvider {
        async fn translate(
            &self,
            _request: TranslationRequest,
        ) -> Result<String, TranslatorError> {
            self.response.clone()
        }
    }

    fn request(target: &str) -> TranslationRequest {
        TranslationRequest {
            text: "hello".to_string(),
            source: Some(LanguageTag::parse("en").unwrap()),
            target: LanguageTag::parse(target).unwrap(),
        }
    }

    #[tokio::test]
    async fn mock_provider_returns_translation() {
        let provider = MockProvider {
            response: Ok("bonjour".to_string()),
        };
        let result = provider.translate(request("fr")).await;
        assert_eq!(result.unwrap(), "bonjour");
    }

    #[tokio::test]
    async fn mock_provider_propagates_failure() {
        let provider = MockProvider {
            response: Err(TranslatorError::Timeout),
        };
        let result = provider.translate(request("fr")).await;
        assert!(matches!(result, Err(TranslatorError::Timeout)));
    }
}
