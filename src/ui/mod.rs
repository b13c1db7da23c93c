// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`workspace`] - Tabbed workspace for the transcript and its translations
//! - [`translations`] - Step-driven translation workflow (the Translations tab)
//! - [`settings`] - Application preferences and configuration
//! - [`about`] - Application version and credits
//!
//! # Shared Infrastructure
//!
//! - [`confirm`] - Modal confirmation prompt for destructive actions
//! - [`navbar`] - Navigation bar with project actions and hamburger menu
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod about;
pub mod confirm;
pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod settings;
pub mod styles;
pub mod theming;
pub mod translations;
pub mod workspace;
