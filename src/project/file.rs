// SPDX-License-Identifier: MPL-2.0
//! Async project file I/O.
//!
//! Load and save run on the tokio pool via `Task::perform`, keeping the UI
//! thread free while a document is read or written.

use crate::app::config::UNTITLED_PROJECT_NAME;
use crate::error::{Error, Result};
use crate::project::document::ProjectDocument;
use std::path::{Path, PathBuf};

/// Reads and parses a project document.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read and
/// [`Error::Project`] when it does not parse as a project document.
pub async fn load(path: PathBuf) -> Result<ProjectDocument> {
    let text = tokio::fs::read_to_string(&path)
        .await
        .map_err(|err| Error::Io(format!("{}: {}", path.display(), err)))?;
    ProjectDocument::from_json(&text)
}

/// Serializes and writes a project document, creating parent directories
/// as needed.
///
/// # Errors
///
/// Returns [`Error::Project`] when serialization fails and [`Error::Io`]
/// when the file cannot be written.
pub async fn save(path: PathBuf, document: ProjectDocument) -> Result<()> {
    let text = document.to_json()?;

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|err| Error::Io(format!("{}: {}", parent.display(), err)))?;
    }

    tokio::fs::write(&path, text)
        .await
        .map_err(|err| Error::Io(format!("{}: {}", path.display(), err)))
}

/// Derives a project name from a file path (the file stem).
#[must_use]
pub fn project_name_from_path(path: &Path) -> String {
    path.file_stem().map_or_else(
        || UNTITLED_PROJECT_NAME.to_string(),
        |stem| stem.to_string_lossy().into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LanguageTag, Transcript};
    use tempfile::tempdir;

    #[tokio::test]
    async fn save_and_load_round_trip() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join("nested").join("interview.scribe.json");

        let mut document = ProjectDocument::new("interview".to_string());
        document.transcript = Some(Transcript::new(
            LanguageTag::parse("en").unwrap(),
            "hello".to_string(),
        ));

        save(path.clone(), document.clone()).await.expect("save");
        let loaded = load(path).await.expect("load");
        assert_eq!(loaded, document);
    }

    #[tokio::test]
    async fn load_missing_file_is_io_error() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let result = load(dir.path().join("absent.json")).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn load_garbage_is_project_error() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join("garbage.json");
        tokio::fs::write(&path, "{ nope").await.expect("write");

        let result = load(path).await;
        assert!(matches!(result, Err(Error::Project(_))));
    }

    #[test]
    fn project_name_from_path_uses_stem() {
        assert_eq!(
            project_name_from_path(Path::new("/tmp/interview-04.json")),
            "interview-04"
        );
        assert_eq!(project_name_from_path(Path::new("/")), "untitled");
    }
}
