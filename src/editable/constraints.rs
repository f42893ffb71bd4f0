//! Insertion rules for the entry buffer.

/// Character filter function type
pub type CharFilter = fn(char) -> bool;

/// Default filter: printable ASCII and extended Latin-1, codepoints 32-255
/// inclusive. Control characters (including newline and tab) are rejected.
fn printable(ch: char) -> bool {
    matches!(ch as u32, 32..=255)
}

/// Rules applied to every buffer insertion.
#[derive(Debug, Clone)]
pub struct EntryConstraints {
    /// Maximum length in characters (None = unlimited)
    pub max_chars: Option<usize>,
    /// Accepted-codepoint filter; non-conforming characters are silently
    /// dropped, never an error
    pub char_filter: CharFilter,
}

impl Default for EntryConstraints {
    fn default() -> Self {
        Self {
            max_chars: None,
            char_filter: printable,
        }
    }
}

impl EntryConstraints {
    /// Constraints with a character limit and the default printable filter
    pub fn with_max_chars(max: usize) -> Self {
        Self {
            max_chars: Some(max),
            ..Self::default()
        }
    }

    /// Check if a character passes the filter
    pub fn is_char_allowed(&self, ch: char) -> bool {
        (self.char_filter)(ch)
    }

    /// How many more characters fit given the current length
    pub fn remaining(&self, current_len: usize) -> usize {
        match self.max_chars {
            Some(max) => max.saturating_sub(current_len),
            None => usize::MAX,
        }
    }
}
