//! entrybox - single-line text entry core
//!
//! This crate provides the behavioral state machine behind a text entry
//! box: a character buffer, a selection with a live direction tag, and a
//! horizontal viewport that keeps the caret visible inside a fixed-width
//! box. Rendering is deliberately out of scope: the core consumes a width
//! measurement collaborator ([`TextMeasure`]) and exposes plain data
//! ([`RenderState`]) for a host renderer to draw.

pub mod clipboard;
pub mod editable;
pub mod entry;
pub mod keys;
pub mod measure;
pub mod settings;
pub mod tracing;
pub mod viewport;

// Re-export commonly used types
pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use editable::{
    EditState, EntryConstraints, EntryMsg, LineBuffer, MoveTarget, Selection, SelectionDir,
};
pub use entry::{RenderState, TextEntryBox};
pub use keys::{KeyCode, Keystroke, Modifiers};
pub use measure::{FixedAdvance, FontMeasure, TextMeasure};
pub use settings::EntrySettings;
pub use viewport::Viewport;
