//! Clipboard collaborator for the cut/copy/paste intents.
//!
//! The editing core never touches the OS clipboard directly; it goes
//! through this trait. Absence or failure of the platform clipboard
//! degrades copy/paste to no-ops without affecting editing.

/// Logical clipboard: read and write a single string.
pub trait Clipboard {
    /// Current clipboard contents, None when unavailable or empty
    fn read(&mut self) -> Option<String>;

    /// Replace the clipboard contents
    fn write(&mut self, text: &str);
}

/// OS clipboard backed by arboard.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn read(&mut self) -> Option<String> {
        let mut clipboard = arboard::Clipboard::new().ok()?;
        clipboard.get_text().ok()
    }

    fn write(&mut self, text: &str) {
        if let Ok(mut clipboard) = arboard::Clipboard::new() {
            if let Err(e) = clipboard.set_text(text) {
                tracing::debug!("clipboard write failed: {e}");
            }
        }
    }
}

/// In-memory clipboard for tests and headless hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn read(&mut self) -> Option<String> {
        self.contents.clone()
    }

    fn write(&mut self, text: &str) {
        self.contents = Some(text.to_string());
    }
}
