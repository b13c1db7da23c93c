// SPDX-License-Identifier: MPL-2.0
//! Project documents, the in-memory content store, and file I/O.

pub mod document;
pub mod file;
pub mod store;

pub use document::ProjectDocument;
pub use store::{AutoTranslationOutcome, ContentStore};
