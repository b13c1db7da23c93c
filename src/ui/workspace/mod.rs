// SPDX-License-Identifier: MPL-2.0
//! Tabbed workspace shell.
//!
//! The workspace is the main screen of the application. It presents the
//! project content behind three tabs: the read-only source transcript,
//! the translation workflow, and a placeholder for analysis tooling.
//! A tab switch while unsaved draft work exists is not applied here;
//! the update step reports it so the parent can ask for confirmation.

mod view;

pub use view::{tab_strip, transcript_pane, TabStripContext, TranscriptContext};

/// The content panes of the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Read-only view of the source transcript.
    #[default]
    Transcript,
    /// The translation workflow.
    Translations,
    /// Reserved for analysis tooling.
    Analysis,
}

/// Tab strip state.
#[derive(Debug, Clone, Default)]
pub struct State {
    active: Tab,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently visible tab.
    #[must_use]
    pub fn active(&self) -> Tab {
        self.active
    }

    /// Switches to the given tab without any guard. Callers must have
    /// resolved unsaved draft work first.
    pub fn activate(&mut self, tab: Tab) {
        self.active = tab;
    }
}

/// Messages emitted by the tab strip.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    TabSelected(Tab),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The requested switch would throw away unsaved draft work. The
    /// parent should confirm before calling [`State::activate`].
    SwitchBlocked(Tab),
}

/// Processes a tab selection.
///
/// The switch is applied immediately unless unsaved draft work exists,
/// in which case the caller is asked to confirm first.
pub fn update(state: &mut State, message: Message, has_unsaved_work: bool) -> Event {
    match message {
        Message::TabSelected(tab) => {
            if tab == state.active {
                return Event::None;
            }
            if has_unsaved_work {
                return Event::SwitchBlocked(tab);
            }
            state.active = tab;
            Event::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_the_transcript_tab() {
        assert_eq!(State::new().active(), Tab::Transcript);
    }

    #[test]
    fn switch_applies_without_unsaved_work() {
        let mut state = State::new();

        let event = update(&mut state, Message::TabSelected(Tab::Translations), false);

        assert_eq!(event, Event::None);
        assert_eq!(state.active(), Tab::Translations);
    }

    #[test]
    fn switch_is_blocked_by_unsaved_work() {
        let mut state = State::new();
        state.activate(Tab::Translations);

        let event = update(&mut state, Message::TabSelected(Tab::Transcript), true);

        assert_eq!(event, Event::SwitchBlocked(Tab::Transcript));
        assert_eq!(state.active(), Tab::Translations);
    }

    #[test]
    fn selecting_the_active_tab_is_ignored() {
        let mut state = State::new();

        // Even with unsaved work, re-selecting the current tab asks nothing.
        let event = update(&mut state, Message::TabSelected(Tab::Transcript), true);

        assert_eq!(event, Event::None);
        assert_eq!(state.active(), Tab::Transcript);
    }
}
