//! Single-line character buffer.
//!
//! Wraps a `String` and exposes char-indexed queries and mutations.
//! Indices passed in by the engine are valid by construction; bounds are
//! checked with `debug_assert!` only.

use std::ops::Range;

use super::constraints::EntryConstraints;

/// The mutable sequence of characters currently entered.
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    text: String,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Create a buffer from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            text: s.to_string(),
        }
    }

    /// Access the underlying string
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Character at char index, None if out of bounds
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.text.chars().nth(index)
    }

    /// Get slice of text as String (by char indices, clamped)
    pub fn slice(&self, range: Range<usize>) -> String {
        let len = self.len();
        let start = range.start.min(len);
        let end = range.end.min(len);
        self.text
            .chars()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect()
    }

    /// Insert text at char index `at`, subject to `constraints`.
    ///
    /// Characters rejected by the codepoint filter are silently dropped,
    /// and the remainder is truncated so the buffer never exceeds the
    /// max length. Returns the number of characters actually inserted.
    pub fn insert(&mut self, at: usize, text: &str, constraints: &EntryConstraints) -> usize {
        debug_assert!(at <= self.len(), "insert index out of range");

        let room = constraints.remaining(self.len());
        let accepted: String = text
            .chars()
            .filter(|&ch| constraints.is_char_allowed(ch))
            .take(room)
            .collect();

        if accepted.is_empty() {
            if !text.is_empty() {
                tracing::trace!(rejected = text.chars().count(), "insertion dropped");
            }
            return 0;
        }

        let byte_offset = self.char_to_byte(at);
        self.text.insert_str(byte_offset, &accepted);
        accepted.chars().count()
    }

    /// Remove characters in `[range.start, range.end)`. No-op when empty.
    pub fn delete_range(&mut self, range: Range<usize>) {
        debug_assert!(range.start <= range.end, "inverted delete range");
        debug_assert!(range.end <= self.len(), "delete range out of range");

        if range.start >= range.end {
            return;
        }
        let start_byte = self.char_to_byte(range.start);
        let end_byte = self.char_to_byte(range.end);
        self.text.replace_range(start_byte..end_byte, "");
    }

    /// Empty the buffer
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Convert char offset to byte offset
    fn char_to_byte(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unbounded() -> EntryConstraints {
        EntryConstraints::default()
    }

    #[test]
    fn test_basic() {
        let buf = LineBuffer::from_text("hello");
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.as_str(), "hello");
        assert!(!buf.is_empty());
    }

    #[test]
    fn test_non_ascii_char_indices() {
        let mut buf = LineBuffer::from_text("héllo");
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.char_at(1), Some('é'));

        buf.insert(2, "X", &unbounded());
        assert_eq!(buf.as_str(), "héXllo");
    }

    #[test]
    fn test_insert_truncates_at_max_chars() {
        let mut buf = LineBuffer::from_text("abc");
        let constraints = EntryConstraints::with_max_chars(5);

        let inserted = buf.insert(3, "XYZZZ", &constraints);
        assert_eq!(inserted, 2);
        assert_eq!(buf.as_str(), "abcXY");
    }

    #[test]
    fn test_insert_filters_unprintable() {
        let mut buf = LineBuffer::new();
        let inserted = buf.insert(0, "a\nb\tc\u{1F600}", &unbounded());
        assert_eq!(inserted, 3);
        assert_eq!(buf.as_str(), "abc");
    }

    #[test]
    fn test_insert_accepts_extended_latin() {
        let mut buf = LineBuffer::new();
        // ÿ is codepoint 255, the top of the accepted range
        buf.insert(0, "ÿ", &unbounded());
        assert_eq!(buf.as_str(), "ÿ");
    }

    #[test]
    fn test_delete_range() {
        let mut buf = LineBuffer::from_text("hello world");
        buf.delete_range(5..11);
        assert_eq!(buf.as_str(), "hello");

        // empty range is a no-op
        buf.delete_range(2..2);
        assert_eq!(buf.as_str(), "hello");
    }

    #[test]
    fn test_slice_clamps() {
        let buf = LineBuffer::from_text("hello world");
        assert_eq!(buf.slice(0..5), "hello");
        assert_eq!(buf.slice(6..11), "world");
        assert_eq!(buf.slice(6..99), "world");
        assert_eq!(buf.slice(99..120), "");
    }

    #[test]
    fn test_clear() {
        let mut buf = LineBuffer::from_text("hello");
        buf.clear();
        assert!(buf.is_empty());
    }
}
