// SPDX-License-Identifier: MPL-2.0
//! The source transcript a project's translations are derived from.

use super::language::LanguageTag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The transcribed source text of a recording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub language: LanguageTag,
    pub value: String,
    pub date_created: DateTime<Utc>,
    pub date_modified: DateTime<Utc>,
}

impl Transcript {
    /// Creates a transcript stamped with the current time.
    #[must_use]
    pub fn new(language: LanguageTag, value: String) -> Self {
        let now = Utc::now();
        Self {
            language,
            value,
            date_created: now,
            date_modified: now,
        }
    }

    /// Returns `true` once the transcript has been edited after creation.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.date_modified != self.date_created
    }
}
