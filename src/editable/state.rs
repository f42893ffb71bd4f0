//! EditState - the selection/cursor engine over the line buffer.
//!
//! Every public intent keeps both selection indices inside `[0, len]`;
//! operating on an empty buffer is always a safe no-op.

use super::buffer::LineBuffer;
use super::constraints::EntryConstraints;
use super::selection::{Selection, SelectionDir};

/// Word separators are whitespace; a word boundary is the transition
/// between a separator run and a non-separator run.
fn is_separator(ch: char) -> bool {
    ch.is_whitespace()
}

/// Buffer plus selection, mutated only through the intents below.
#[derive(Debug, Clone)]
pub struct EditState {
    pub buffer: LineBuffer,
    pub selection: Selection,
    pub constraints: EntryConstraints,
}

impl EditState {
    pub fn new(constraints: EntryConstraints) -> Self {
        Self {
            buffer: LineBuffer::new(),
            selection: Selection::caret(0),
            constraints,
        }
    }

    /// Create a state with initial text; the caret starts at the end.
    pub fn with_text(text: &str, constraints: EntryConstraints) -> Self {
        let mut buffer = LineBuffer::new();
        buffer.insert(0, text, &constraints);
        let end = buffer.len();
        Self {
            buffer,
            selection: Selection::caret(end),
            constraints,
        }
    }

    /// The caret position (the selection's live end)
    pub fn cursor(&self) -> usize {
        self.selection.head
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Current contents as a String
    pub fn text(&self) -> String {
        self.buffer.as_str().to_string()
    }

    /// Selection contents (empty string when collapsed)
    pub fn selected_text(&self) -> String {
        self.buffer
            .slice(self.selection.start()..self.selection.end())
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Empty the buffer and collapse the selection to 0
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.selection.collapse_to(0);
    }
}

// =============================================================================
// Movement and selection
// =============================================================================

impl EditState {
    /// Move the caret one step left. With an active selection this
    /// collapses to the selection's left bound instead of moving.
    pub fn move_left(&mut self) {
        if self.has_selection() {
            self.selection.collapse_to_start();
            return;
        }
        let pos = self.selection.head.saturating_sub(1);
        self.selection.collapse_to(pos);
    }

    /// Move the caret one step right. With an active selection this
    /// collapses to the selection's right bound instead of moving.
    pub fn move_right(&mut self) {
        if self.has_selection() {
            self.selection.collapse_to_end();
            return;
        }
        let pos = (self.selection.head + 1).min(self.buffer.len());
        self.selection.collapse_to(pos);
    }

    /// Extend or shrink the selection one step left.
    ///
    /// When the current direction is RIGHT the head moves back toward
    /// the anchor (shrinks); otherwise the selection grows leftward.
    /// Either way the head moves one step left, and the direction tag is
    /// recomputed from the net anchor/head relationship, so shrinking
    /// past the anchor flips the direction rather than clamping.
    pub fn select_left(&mut self) {
        let pos = self.selection.head.saturating_sub(1);
        self.selection.set_head(pos);
    }

    /// Extend or shrink the selection one step right; mirror of
    /// [`EditState::select_left`].
    pub fn select_right(&mut self) {
        let pos = (self.selection.head + 1).min(self.buffer.len());
        self.selection.set_head(pos);
    }

    /// Jump the caret to the previous word boundary. Without `extend`, an
    /// active selection collapses to its left bound instead.
    pub fn move_word_left(&mut self, extend: bool) {
        if !extend && self.has_selection() {
            self.selection.collapse_to_start();
            return;
        }
        let target = self.word_boundary_backward(self.selection.head);
        if extend {
            self.selection.set_head(target);
        } else {
            self.selection.collapse_to(target);
        }
    }

    /// Jump the caret to the next word boundary. Without `extend`, an
    /// active selection collapses to its right bound instead.
    pub fn move_word_right(&mut self, extend: bool) {
        if !extend && self.has_selection() {
            self.selection.collapse_to_end();
            return;
        }
        let target = self.word_boundary_forward(self.selection.head);
        if extend {
            self.selection.set_head(target);
        } else {
            self.selection.collapse_to(target);
        }
    }

    /// Move the caret to index 0, optionally selecting to it
    pub fn move_line_start(&mut self, extend: bool) {
        if extend {
            self.selection.set_head(0);
        } else {
            self.selection.collapse_to(0);
        }
    }

    /// Move the caret to the end of the buffer, optionally selecting to it
    pub fn move_line_end(&mut self, extend: bool) {
        let len = self.buffer.len();
        if extend {
            self.selection.set_head(len);
        } else {
            self.selection.collapse_to(len);
        }
    }

    /// Select the whole buffer (anchor 0, head at the end)
    pub fn select_all(&mut self) {
        self.selection = Selection::caret(0);
        self.selection.set_head(self.buffer.len());
    }

    /// Collapse the selection to the current head
    pub fn unselect_all(&mut self) {
        let head = self.selection.head;
        self.selection.collapse_to(head);
        debug_assert_eq!(self.selection.dir, SelectionDir::Neutral);
    }

    /// Scan backward from `from`: skip a separator run, then the
    /// non-separator run before it. Result is clamped to `[0, len]`.
    pub fn word_boundary_backward(&self, from: usize) -> usize {
        let mut pos = from.min(self.buffer.len());
        while pos > 0 && self.buffer.char_at(pos - 1).is_some_and(is_separator) {
            pos -= 1;
        }
        while pos > 0 && self.buffer.char_at(pos - 1).is_some_and(|c| !is_separator(c)) {
            pos -= 1;
        }
        pos
    }

    /// Scan forward from `from`: skip a separator run, then the
    /// non-separator run after it. Result is clamped to `[0, len]`.
    pub fn word_boundary_forward(&self, from: usize) -> usize {
        let len = self.buffer.len();
        let mut pos = from.min(len);
        while pos < len && self.buffer.char_at(pos).is_some_and(is_separator) {
            pos += 1;
        }
        while pos < len && self.buffer.char_at(pos).is_some_and(|c| !is_separator(c)) {
            pos += 1;
        }
        pos
    }
}

// =============================================================================
// Editing
// =============================================================================

impl EditState {
    /// Delete the selection contents, collapsing both indices to the
    /// boundary point. Returns whether anything was deleted; callers use
    /// this to decide whether a bare Backspace should instead delete the
    /// single preceding character.
    pub fn delete_selection(&mut self) -> bool {
        if !self.has_selection() {
            return false;
        }
        let start = self.selection.start();
        let end = self.selection.end();
        self.buffer.delete_range(start..end);
        self.selection.collapse_to(start);
        true
    }

    /// Insert text at the caret, replacing the selection if one exists.
    /// Returns the number of characters actually inserted after
    /// filtering and max-length truncation.
    pub fn insert_text(&mut self, text: &str) -> usize {
        self.delete_selection();
        let at = self.selection.head;
        let inserted = self.buffer.insert(at, text, &self.constraints);
        self.selection.collapse_to(at + inserted);
        inserted
    }

    /// Insert a single character at the caret; returns whether it was
    /// admitted.
    pub fn insert_char(&mut self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.insert_text(ch.encode_utf8(&mut buf)) == 1
    }

    /// Delete the selection, or the single character before the caret.
    /// No-op at position 0.
    pub fn backspace(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let head = self.selection.head;
        if head == 0 {
            return false;
        }
        self.buffer.delete_range(head - 1..head);
        self.selection.collapse_to(head - 1);
        true
    }

    /// Delete the selection, or the single character at the caret.
    /// No-op at the end of the buffer.
    pub fn delete_forward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let head = self.selection.head;
        if head >= self.buffer.len() {
            return false;
        }
        self.buffer.delete_range(head..head + 1);
        self.selection.collapse_to(head);
        true
    }

    /// Delete the selection, or back to the previous word boundary
    pub fn delete_word_backward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let head = self.selection.head;
        let target = self.word_boundary_backward(head);
        if target >= head {
            return false;
        }
        self.buffer.delete_range(target..head);
        self.selection.collapse_to(target);
        true
    }

    /// Delete the selection, or forward to the next word boundary
    pub fn delete_word_forward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let head = self.selection.head;
        let target = self.word_boundary_forward(head);
        if target <= head {
            return false;
        }
        self.buffer.delete_range(head..target);
        self.selection.collapse_to(head);
        true
    }
}
