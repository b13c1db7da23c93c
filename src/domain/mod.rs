// SPDX-License-Identifier: MPL-2.0
//! Domain layer - core project content types.
//!
//! This module contains the data the rest of the application presents and
//! mutates. It has no UI or I/O dependencies so the business rules stay
//! testable in isolation.
//!
//! # Modules
//!
//! - [`language`]: validated language tags and the built-in catalog
//! - [`transcript`]: the transcribed source text
//! - [`translation`]: saved translations and the in-progress draft

pub mod language;
pub mod transcript;
pub mod translation;

pub use language::LanguageTag;
pub use transcript::Transcript;
pub use translation::{RegionChoice, Translation, TranslationDraft};
