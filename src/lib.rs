// SPDX-License-Identifier: MPL-2.0
//! `iced_scribe` is a translation drafting tool built with the Iced GUI
//! framework.
//!
//! It guides one translation edit at a time through a small workflow over
//! transcribed content, and demonstrates internationalization with Fluent,
//! user preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_scribe/0.1.0")]

pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod project;
pub mod translator;
pub mod ui;
