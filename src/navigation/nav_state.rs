//! Result navigation state machine
//!
//! Tracks which result line is highlighted and moves the highlight in
//! response to arrow keys and pointer hover. Movement is cyclic: Down from
//! the last result wraps to the first, Up from the first wraps to the last.
//! With zero results every move is a no-op.

/// A highlight transition produced by a navigation step.
///
/// The controller applies it to the rendered lines: clear the class on
/// `cleared` (when present), apply the highlight class to `selected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavMove {
    /// Line whose highlight must be removed
    pub cleared: Option<usize>,
    /// Line that is now highlighted
    pub selected: usize,
}

/// Navigation state for the current result set.
#[derive(Debug, Clone, Default)]
pub struct NavState {
    /// Number of result lines currently rendered
    pub match_count: usize,
    /// Currently selected line, if any
    pub selected: Option<usize>,
    /// Last line that carried the highlight. Survives pointer-leave so a
    /// later Enter, click, or blur can still commit it.
    pub last_index: Option<usize>,
    /// Whether a selection is currently active (armed for commit)
    pub result_selected: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the current result set entirely.
    pub fn reset(&mut self) {
        self.match_count = 0;
        self.selected = None;
        self.last_index = None;
        self.result_selected = false;
    }

    /// Record the size of a freshly rendered result set.
    pub fn set_match_count(&mut self, count: usize) {
        self.match_count = count;
    }

    /// Drop the remembered highlight position (the results box was cleared).
    pub fn forget_last(&mut self) {
        self.last_index = None;
    }

    /// Move the highlight to the next result, wrapping from the last to the
    /// first. With no selection, starts at the first result.
    pub fn move_down(&mut self) -> Option<NavMove> {
        if self.match_count == 0 {
            return None;
        }
        let next = match self.selected {
            Some(current) => (current + 1) % self.match_count,
            None => 0,
        };
        Some(self.select(next))
    }

    /// Move the highlight to the previous result, wrapping from the first to
    /// the last. With no selection, starts at the last result.
    pub fn move_up(&mut self) -> Option<NavMove> {
        if self.match_count == 0 {
            return None;
        }
        let previous = match self.selected {
            Some(0) | None => self.match_count - 1,
            Some(current) => current - 1,
        };
        Some(self.select(previous))
    }

    /// Select a specific line directly (pointer hover or sole-result Enter).
    pub fn select(&mut self, index: usize) -> NavMove {
        let cleared = self.last_index.filter(|last| *last != index);
        self.selected = Some(index);
        self.last_index = Some(index);
        self.result_selected = true;
        NavMove {
            cleared,
            selected: index,
        }
    }

    /// Pointer left the results. Disarms the selection and returns the line
    /// whose highlight should be cleared, but remembers the index so
    /// keyboard navigation and commits can pick it back up.
    pub fn leave(&mut self) -> Option<usize> {
        self.result_selected = false;
        self.last_index
    }

    /// Whether a commit would currently have a line to read.
    pub fn has_pending_selection(&self) -> bool {
        self.result_selected && self.last_index.is_some()
    }
}

#[cfg(test)]
#[path = "nav_state_tests.rs"]
mod nav_state_tests;
