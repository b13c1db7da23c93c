// SPDX-License-Identifier: MPL-2.0
//! On-disk project document format.
//!
//! A project file is a pretty-printed JSON document holding the source
//! transcript and the saved translations. Drafts are deliberately not part
//! of the format.

use crate::domain::{Transcript, Translation};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Current document format version, written into every saved file.
pub const FORMAT_VERSION: u32 = 1;

fn default_version() -> u32 {
    FORMAT_VERSION
}

/// The serialized shape of a project file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDocument {
    #[serde(default = "default_version")]
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub transcript: Option<Transcript>,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

impl ProjectDocument {
    /// Creates an empty document with the given project name.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            version: FORMAT_VERSION,
            name,
            transcript: None,
            translations: Vec::new(),
        }
    }

    /// Parses a document from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Project`] when the text is not a
    /// valid document.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serializes the document as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Project`] when serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
