//! Selection state for the two media lists.
//!
//! Every operation returns the index the viewer should load, or `None` when
//! the request was a no-op. The current index is always either unset or a
//! valid position in its list.

use std::sync::Arc;

use crate::domain::{Library, MediaKind};

/// Highlighted position within one list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    current: Option<usize>,
}

impl SelectionState {
    /// Current index, `None` when nothing is selected
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    fn set(&mut self, index: usize) -> Option<usize> {
        self.current = Some(index);
        self.current
    }
}

/// Owns the session's lists and one [`SelectionState`] per kind
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    library: Arc<Library>,
    document: SelectionState,
    stream: SelectionState,
}

impl SelectionController {
    pub fn new(library: Arc<Library>) -> Self {
        Self {
            library,
            document: SelectionState::default(),
            stream: SelectionState::default(),
        }
    }

    pub fn library(&self) -> &Arc<Library> {
        &self.library
    }

    /// Swap in new lists; both selections reset
    pub fn set_library(&mut self, library: Arc<Library>) {
        self.library = library;
        self.document = SelectionState::default();
        self.stream = SelectionState::default();
    }

    fn state(&self, kind: MediaKind) -> &SelectionState {
        match kind {
            MediaKind::Document => &self.document,
            MediaKind::Stream => &self.stream,
        }
    }

    fn state_mut(&mut self, kind: MediaKind) -> &mut SelectionState {
        match kind {
            MediaKind::Document => &mut self.document,
            MediaKind::Stream => &mut self.stream,
        }
    }

    pub fn current(&self, kind: MediaKind) -> Option<usize> {
        self.state(kind).current()
    }

    /// Select `index` if it lies within the list; out of range is ignored
    pub fn select_index(&mut self, kind: MediaKind, index: usize) -> Option<usize> {
        if index >= self.library.len(kind) {
            return None;
        }
        self.state_mut(kind).set(index)
    }

    /// Select from raw user input; anything but a non-negative integer is ignored
    pub fn select_input(&mut self, kind: MediaKind, raw: &str) -> Option<usize> {
        let index = raw.trim().parse::<usize>().ok()?;
        self.select_index(kind, index)
    }

    /// Advance by one, stopping at the last entry.
    ///
    /// With nothing selected this moves to the first entry.
    pub fn next(&mut self, kind: MediaKind) -> Option<usize> {
        let target = match self.current(kind) {
            Some(index) => index + 1,
            None => 0,
        };
        self.select_index(kind, target)
    }

    /// Retreat by one, stopping at the first entry
    pub fn previous(&mut self, kind: MediaKind) -> Option<usize> {
        let index = self.current(kind)?.checked_sub(1)?;
        self.select_index(kind, index)
    }

    pub fn has_next(&self, kind: MediaKind) -> bool {
        match self.current(kind) {
            Some(index) => index + 1 < self.library.len(kind),
            None => self.library.len(kind) > 0,
        }
    }

    pub fn has_previous(&self, kind: MediaKind) -> bool {
        matches!(self.current(kind), Some(index) if index > 0)
    }
}
