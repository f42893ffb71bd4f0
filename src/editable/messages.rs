//! Editing intents produced by the input dispatcher.

/// Target for caret movement operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    /// One character left
    Left,
    /// One character right
    Right,
    /// Previous word boundary
    WordLeft,
    /// Next word boundary
    WordRight,
    /// Start of the line (index 0)
    LineStart,
    /// End of the line (index len)
    LineEnd,
}

/// The intent vocabulary consumed by the entry box.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryMsg {
    /// Move the caret, collapsing any selection
    Move(MoveTarget),
    /// Move the caret and extend (or shrink) the selection
    MoveWithSelection(MoveTarget),

    /// Insert a single character at the caret
    InsertChar(char),
    /// Insert a string at the caret (paste, programmatic input)
    InsertText(String),

    /// Delete the selection, or the character before the caret
    DeleteBackward,
    /// Delete the selection, or the character at the caret
    DeleteForward,
    /// Delete the selection, or back to the previous word boundary
    DeleteWordBackward,
    /// Delete the selection, or forward to the next word boundary
    DeleteWordForward,

    /// Select the whole buffer
    SelectAll,

    /// Copy the selection contents to the clipboard collaborator
    Copy,
    /// Copy the selection contents, then delete the selection
    Cut,
    /// Insert the clipboard contents at the caret
    Paste,

    /// Finalize the buffer contents (Enter)
    Submit,
    /// Clear the buffer and deactivate (Escape)
    Cancel,
}

impl EntryMsg {
    /// Check if this message can modify the buffer
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            EntryMsg::InsertChar(_)
                | EntryMsg::InsertText(_)
                | EntryMsg::DeleteBackward
                | EntryMsg::DeleteForward
                | EntryMsg::DeleteWordBackward
                | EntryMsg::DeleteWordForward
                | EntryMsg::Cut
                | EntryMsg::Paste
                | EntryMsg::Submit
                | EntryMsg::Cancel
        )
    }

    /// Check if this message is a movement operation
    pub fn is_movement(&self) -> bool {
        matches!(self, EntryMsg::Move(_) | EntryMsg::MoveWithSelection(_))
    }
}
