//! Event entry points
//!
//! The host platform routes its keyboard and pointer events here. Up/Down
//! drive the navigation state machine, Enter commits, every other key
//! schedules a debounced lookup.

use crate::dom::DomAdapter;
use crate::navigation::NavMove;
use crate::transport::Transport;

use super::state::{Suggest, Visual};

/// Keyboard input, already classified by the host.
///
/// Down moves the highlight toward higher indices (wrapping from the last
/// result to the first); Up is the inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    /// Any key that edits the input text
    Other,
}

impl<D: DomAdapter, T: Transport> Suggest<D, T> {
    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::Down => {
                if let Some(step) = self.session.nav.move_down() {
                    self.apply_move(step);
                }
            }
            Key::Up => {
                if let Some(step) = self.session.nav.move_up() {
                    self.apply_move(step);
                }
            }
            Key::Enter => self.handle_enter(),
            Key::Other => {
                self.session.nav.result_selected = false;
                self.debouncer.trigger();
            }
        }
    }

    fn handle_enter(&mut self) {
        // A sole result is selected automatically
        if self.session.nav.match_count == 1 {
            self.session.nav.select(0);
        }

        if self.session.nav.has_pending_selection() {
            self.commit_selection(None);
        } else {
            self.set_visual(Visual::Error);
        }
    }

    /// Pointer entered a result line: highlight it and arm it for commit.
    pub fn handle_hover(&mut self, index: usize) {
        if index >= self.session.nav.match_count {
            return;
        }
        let step = self.session.nav.select(index);
        self.apply_move(step);
    }

    /// Pointer left the results: drop the highlight and disarm, but keep
    /// the index for keyboard re-entry.
    pub fn handle_hover_leave(&mut self) {
        if let Some(old) = self.session.nav.leave() {
            let class = self.styling.result_line_class.clone();
            self.dom.set_line_class(old, &class);
        }
    }

    /// Pointer clicked a result line: select it and commit.
    pub fn handle_line_click(&mut self, index: usize) {
        if index >= self.session.nav.match_count {
            return;
        }
        let step = self.session.nav.select(index);
        self.apply_move(step);
        self.commit_selection(None);
    }

    /// Click on the input box itself.
    pub fn handle_input_click(&mut self) {
        if self.input_reset {
            self.dom.set_input_value("");
        }
    }

    /// First focus clears the instruction text and resets the visual state;
    /// later focuses do nothing.
    pub fn handle_focus(&mut self) {
        if self.session.focused_once {
            return;
        }
        self.session.focused_once = true;
        self.dom.set_input_value("");
        self.set_visual(Visual::Normal);
    }

    /// Focus left the input: commit a pending selection, then clear the
    /// results box regardless of the outcome.
    pub fn handle_blur(&mut self) {
        if self.session.nav.has_pending_selection() {
            self.commit_selection(None);
        }
        self.clear_suggestions();
    }

    fn apply_move(&mut self, step: NavMove) {
        if let Some(old) = step.cleared {
            let class = self.styling.result_line_class.clone();
            self.dom.set_line_class(old, &class);
        }
        let class = self.styling.result_highlight_class.clone();
        self.dom.set_line_class(step.selected, &class);
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
