// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.

// ==========================================================================
// Translation Service Defaults
// ==========================================================================

/// Default base URL of the machine translation service.
///
/// Points at a locally hosted LibreTranslate-compatible endpoint so the
/// application works out of the box with a self-hosted service.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:5000";

/// Default timeout for a single translation request (in seconds).
pub const DEFAULT_TRANSLATE_TIMEOUT_SECS: u64 = 30;

/// Minimum allowed translation request timeout (in seconds).
pub const MIN_TRANSLATE_TIMEOUT_SECS: u64 = 5;

/// Maximum allowed translation request timeout (in seconds).
pub const MAX_TRANSLATE_TIMEOUT_SECS: u64 = 300;

/// Timeout adjustment step used by the settings screen (in seconds).
pub const TRANSLATE_TIMEOUT_STEP_SECS: u64 = 5;

// ==========================================================================
// Project Defaults
// ==========================================================================

/// Name given to a project that has never been saved.
pub const UNTITLED_PROJECT_NAME: &str = "untitled";

/// File extension for project documents.
pub const PROJECT_FILE_EXTENSION: &str = "scribe";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Timeout validation
    assert!(MIN_TRANSLATE_TIMEOUT_SECS > 0);
    assert!(MAX_TRANSLATE_TIMEOUT_SECS >= MIN_TRANSLATE_TIMEOUT_SECS);
    assert!(DEFAULT_TRANSLATE_TIMEOUT_SECS >= MIN_TRANSLATE_TIMEOUT_SECS);
    assert!(DEFAULT_TRANSLATE_TIMEOUT_SECS <= MAX_TRANSLATE_TIMEOUT_SECS);
    assert!(TRANSLATE_TIMEOUT_STEP_SECS > 0);

    // Naming validation
    assert!(!DEFAULT_SERVICE_URL.is_empty());
    assert!(!UNTITLED_PROJECT_NAME.is_empty());
    assert!(!PROJECT_FILE_EXTENSION.is_empty());
};
