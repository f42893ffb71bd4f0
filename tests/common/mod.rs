//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use entrybox::{
    EntrySettings, FixedAdvance, KeyCode, Keystroke, MemoryClipboard, Modifiers, TextEntryBox,
};

/// Pixels per character in test boxes; keeps expected offsets easy to
/// compute by hand
pub const ADVANCE: f32 = 10.0;

/// Create an active entry box with the given text and width, backed by a
/// fixed-advance measure and an in-memory clipboard. The caret starts at
/// the end of the text.
pub fn test_entry_with_width(text: &str, width: f32) -> TextEntryBox {
    let settings = EntrySettings {
        width,
        text: text.to_string(),
        ..EntrySettings::default()
    };
    let mut entry = TextEntryBox::new(settings, Box::new(FixedAdvance::new(ADVANCE)))
        .with_clipboard(Box::new(MemoryClipboard::new()));
    entry.set_active(true);
    entry
}

/// Create a test entry wide enough that nothing scrolls
pub fn test_entry(text: &str) -> TextEntryBox {
    test_entry_with_width(text, 2000.0)
}

/// Press a key with no modifiers
pub fn press(entry: &mut TextEntryBox, key: KeyCode) {
    entry.handle_keystroke(Keystroke::key(key));
}

/// Press a key with modifiers
pub fn press_mods(entry: &mut TextEntryBox, key: KeyCode, mods: Modifiers) {
    entry.handle_keystroke(Keystroke::new(key, mods));
}

/// Feed a string through codepoint events, one char at a time
pub fn type_str(entry: &mut TextEntryBox, text: &str) {
    for ch in text.chars() {
        entry.handle_char(ch);
    }
}

/// Put the caret at char index `pos` (Home, then Right `pos` times)
pub fn caret_to(entry: &mut TextEntryBox, pos: usize) {
    press(entry, KeyCode::Home);
    for _ in 0..pos {
        press(entry, KeyCode::Right);
    }
}
