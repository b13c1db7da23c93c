// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for LibreTranslate-style translation services.
//!
//! Speaks `POST {service_url}/translate` with a JSON body of
//! `{q, source, target, format}` and expects `{"translatedText": ...}`
//! back. Error responses carry `{"error": ...}`.

use super::{TranslationProvider, TranslationRequest};
use crate::domain::LanguageTag;
use crate::error::TranslatorError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Translation client for a configured service endpoint.
#[derive(Debug, Clone)]
pub struct HttpTranslator {
    service_url: String,
    timeout: Duration,
}

#[derive(Serialize)]
struct TranslateBody<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Deserialize)]
struct TranslateReply {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

#[derive(Deserialize)]
struct ServiceError {
    error: String,
}

impl HttpTranslator {
    #[must_use]
    pub fn new(service_url: String, timeout_secs: u64) -> Self {
        Self {
            service_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/translate", self.service_url.trim_end_matches('/'))
    }
}

impl TranslationProvider for HttpTranslator {
    async fn translate(&self, request: TranslationRequest) -> Result<String, TranslatorError> {
        // Build client per request so endpoint/timeout changes in the
        // settings take effect without plumbing a shared client around
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("Scribe/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| TranslatorError::Other(err.to_string()))?;

        let source = request.source.as_ref().map_or("auto", LanguageTag::as_str);
        let body = TranslateBody {
            q: &request.text,
            source,
            target: request.target.as_str(),
            format: "text",
        };

        let response = client
            .post(self.endpoint())
            .json(&body)
            .send()
            .await
            .map_err(|err| transport_error(&err))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ServiceError>()
                .await
                .map_or_else(|_| status.to_string(), |body| body.error);
            if status == reqwest::StatusCode::BAD_REQUEST
                && message.to_lowercase().contains("language")
            {
                return Err(TranslatorError::UnsupportedLanguage(
                    request.target.to_string(),
                ));
            }
            return Err(TranslatorError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let reply: TranslateReply = response
            .json()
            .await
            .map_err(|err| TranslatorError::MalformedResponse(err.to_string()))?;
        Ok(reply.translated_text)
    }
}

fn transport_error(err: &reqwest::Error) -> TranslatorError {
    if err.is_timeout() {
        TranslatorError::Timeout
    } else if err.is_connect() {
        TranslatorError::ServiceUnreachable(err.to_string())
    } else {
        TranslatorError::from_message(&err.to_string())
    }
}
