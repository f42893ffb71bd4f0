//! TextEntryBox - the widget core.
//!
//! Ties the editing engine, viewport, and collaborators together and
//! maps keystrokes to editing intents. Everything renderer-facing is a
//! plain read accessor recomputed on demand; the box holds no cached
//! presentation state.

use std::time::Duration;

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::editable::{EditState, EntryConstraints, EntryMsg, MoveTarget};
use crate::keys::{KeyCode, Keystroke};
use crate::measure::TextMeasure;
use crate::settings::EntrySettings;
use crate::viewport::Viewport;

/// Caret blink half-period. Purely cosmetic; skipping or delaying blink
/// queries has no effect on editing state.
pub const CARET_BLINK: Duration = Duration::from_millis(500);

/// Per-frame render data, all in pixels relative to the box's left edge.
///
/// Glyphs outside `[0, width]` are the renderer's to clip or fade; the
/// core only guarantees the caret lands inside that range.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    /// Current buffer contents
    pub text: String,
    /// Pixel translation to apply when drawing `text`
    pub visible_offset: f32,
    /// Caret position after the offset is applied
    pub cursor_px: f32,
    /// Highlight bounds after the offset is applied, None when collapsed
    pub selection_px: Option<(f32, f32)>,
}

/// A single-line text entry box.
pub struct TextEntryBox {
    state: EditState,
    viewport: Viewport,
    measure: Box<dyn TextMeasure>,
    clipboard: Box<dyn Clipboard>,
    active: bool,
    always_visible: bool,
    always_active: bool,
    submitted: bool,
    last_submitted: String,
}

impl TextEntryBox {
    /// Create a box from settings and a width measurement collaborator.
    /// The caret starts at the end of the initial text. The clipboard
    /// defaults to the OS clipboard; see [`TextEntryBox::with_clipboard`].
    pub fn new(settings: EntrySettings, measure: Box<dyn TextMeasure>) -> Self {
        let constraints = EntryConstraints {
            max_chars: settings.max_chars,
            ..EntryConstraints::default()
        };
        let mut entry = Self {
            state: EditState::with_text(&settings.text, constraints),
            viewport: Viewport::new(settings.width),
            measure,
            clipboard: Box::new(SystemClipboard::new()),
            active: settings.always_active,
            always_visible: settings.always_visible,
            always_active: settings.always_active,
            submitted: false,
            last_submitted: String::new(),
        };
        entry.refresh_viewport();
        entry
    }

    /// Replace the clipboard collaborator (tests, headless hosts)
    pub fn with_clipboard(mut self, clipboard: Box<dyn Clipboard>) -> Self {
        self.clipboard = clipboard;
        self
    }

    // =========================================================================
    // Activation and visibility
    // =========================================================================

    /// Is the box accepting input?
    pub fn is_active(&self) -> bool {
        self.active || self.always_active
    }

    /// Toggle whether the box accepts input. Ignored while pinned by
    /// `always_active`.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Should the box be drawn? Visibility and activeness are
    /// independent: `always_visible` keeps an inactive box on screen but
    /// does not make it accept input.
    pub fn is_visible(&self) -> bool {
        self.is_active() || self.always_visible
    }

    // =========================================================================
    // Input dispatch
    // =========================================================================

    /// Process one key-down event. Returns whether the event was
    /// consumed; an inactive box consumes nothing.
    pub fn handle_keystroke(&mut self, stroke: Keystroke) -> bool {
        if !self.is_active() {
            return false;
        }
        match self.translate(stroke) {
            Some(msg) => {
                self.apply(msg);
                true
            }
            None => {
                tracing::trace!(%stroke, "unhandled keystroke");
                false
            }
        }
    }

    /// Process one text-entry event (a Unicode codepoint). Returns
    /// whether the event was consumed; codepoints outside the accepted
    /// range are consumed but dropped.
    pub fn handle_char(&mut self, ch: char) -> bool {
        if !self.is_active() {
            return false;
        }
        self.apply(EntryMsg::InsertChar(ch));
        true
    }

    /// Map a keystroke to an editing intent, or None when the box has no
    /// binding for it. Modifier combinations compose: Ctrl switches
    /// horizontal movement and deletion to word granularity, Shift turns
    /// movement into selection.
    pub fn translate(&self, stroke: Keystroke) -> Option<EntryMsg> {
        let mods = stroke.mods;
        let word = mods.ctrl();
        let select = mods.shift();

        let msg = match stroke.key {
            KeyCode::Left | KeyCode::Right => {
                let target = match (stroke.key, word) {
                    (KeyCode::Left, false) => MoveTarget::Left,
                    (KeyCode::Left, true) => MoveTarget::WordLeft,
                    (KeyCode::Right, false) => MoveTarget::Right,
                    _ => MoveTarget::WordRight,
                };
                if select {
                    EntryMsg::MoveWithSelection(target)
                } else {
                    EntryMsg::Move(target)
                }
            }
            KeyCode::Home if select => EntryMsg::MoveWithSelection(MoveTarget::LineStart),
            KeyCode::Home => EntryMsg::Move(MoveTarget::LineStart),
            KeyCode::End if select => EntryMsg::MoveWithSelection(MoveTarget::LineEnd),
            KeyCode::End => EntryMsg::Move(MoveTarget::LineEnd),

            KeyCode::Backspace if word => EntryMsg::DeleteWordBackward,
            KeyCode::Backspace => EntryMsg::DeleteBackward,
            KeyCode::Delete if word => EntryMsg::DeleteWordForward,
            KeyCode::Delete => EntryMsg::DeleteForward,

            KeyCode::Char('a') if mods.has_cmd() => EntryMsg::SelectAll,
            KeyCode::Char('c') if mods.has_cmd() => EntryMsg::Copy,
            KeyCode::Char('x') if mods.has_cmd() => EntryMsg::Cut,
            KeyCode::Char('v') if mods.has_cmd() => EntryMsg::Paste,

            KeyCode::Enter => EntryMsg::Submit,
            KeyCode::Escape => EntryMsg::Cancel,

            _ => return None,
        };
        Some(msg)
    }

    /// Apply one editing intent and bring the viewport up to date.
    pub fn apply(&mut self, msg: EntryMsg) {
        if msg.is_editing() || msg.is_movement() {
            tracing::trace!(?msg, "apply");
        }
        match msg {
            EntryMsg::Move(target) => self.move_caret(target, false),
            EntryMsg::MoveWithSelection(target) => self.move_caret(target, true),

            EntryMsg::InsertChar(ch) => {
                self.state.insert_char(ch);
            }
            EntryMsg::InsertText(text) => {
                self.state.insert_text(&text);
            }

            EntryMsg::DeleteBackward => {
                self.state.backspace();
            }
            EntryMsg::DeleteForward => {
                self.state.delete_forward();
            }
            EntryMsg::DeleteWordBackward => {
                self.state.delete_word_backward();
            }
            EntryMsg::DeleteWordForward => {
                self.state.delete_word_forward();
            }

            EntryMsg::SelectAll => self.state.select_all(),

            EntryMsg::Copy => self.copy_selection(),
            EntryMsg::Cut => {
                self.copy_selection();
                self.state.delete_selection();
            }
            EntryMsg::Paste => {
                if let Some(text) = self.clipboard.read() {
                    self.state.insert_text(&text);
                }
            }

            EntryMsg::Submit => self.submit(),
            EntryMsg::Cancel => self.cancel(),
        }
        self.refresh_viewport();
    }

    fn move_caret(&mut self, target: MoveTarget, extend: bool) {
        match (target, extend) {
            (MoveTarget::Left, false) => self.state.move_left(),
            (MoveTarget::Left, true) => self.state.select_left(),
            (MoveTarget::Right, false) => self.state.move_right(),
            (MoveTarget::Right, true) => self.state.select_right(),
            (MoveTarget::WordLeft, extend) => self.state.move_word_left(extend),
            (MoveTarget::WordRight, extend) => self.state.move_word_right(extend),
            (MoveTarget::LineStart, extend) => self.state.move_line_start(extend),
            (MoveTarget::LineEnd, extend) => self.state.move_line_end(extend),
        }
    }

    fn copy_selection(&mut self) {
        let text = self.state.selected_text();
        if !text.is_empty() {
            self.clipboard.write(&text);
        }
    }

    /// Enter: capture the buffer into `last_submitted` and flag it, then
    /// clear and deactivate unless the box is pinned active.
    fn submit(&mut self) {
        self.last_submitted = self.state.text();
        self.submitted = true;
        tracing::debug!(chars = self.last_submitted.chars().count(), "submitted");
        if !self.always_active {
            self.state.clear();
            self.viewport.reset();
            self.active = false;
        }
    }

    /// Escape: drop the buffer and selection without submitting.
    fn cancel(&mut self) {
        self.state.clear();
        self.viewport.reset();
        if !self.always_active {
            self.active = false;
        }
        tracing::debug!("cancelled");
    }

    // =========================================================================
    // Contents
    // =========================================================================

    /// Current buffer contents
    pub fn text(&self) -> String {
        self.state.text()
    }

    /// Current selection contents (empty when collapsed)
    pub fn selected_text(&self) -> String {
        self.state.selected_text()
    }

    /// The underlying editing state, for hosts that drive intents
    /// directly
    pub fn state(&self) -> &EditState {
        &self.state
    }

    /// Empty the buffer, selection, and viewport atomically
    pub fn clear(&mut self) {
        self.state.clear();
        self.viewport.reset();
    }

    /// Did a submit happen since the last [`TextEntryBox::take_submitted`]?
    pub fn submitted(&self) -> bool {
        self.submitted
    }

    /// The string captured by the most recent submit
    pub fn last_submitted(&self) -> &str {
        &self.last_submitted
    }

    /// Consume the submitted flag, yielding the captured string
    pub fn take_submitted(&mut self) -> Option<String> {
        if self.submitted {
            self.submitted = false;
            Some(self.last_submitted.clone())
        } else {
            None
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Visible box width in pixels
    pub fn width(&self) -> f32 {
        self.viewport.width()
    }

    /// Resize the box, keeping the caret visible
    pub fn set_width(&mut self, width: f32) {
        self.viewport.set_width(width);
        self.refresh_viewport();
    }

    /// Adjust the character limit. Existing contents are not truncated.
    pub fn set_max_chars(&mut self, max_chars: Option<usize>) {
        self.state.constraints.max_chars = max_chars;
    }

    /// Current horizontal scroll offset in pixels
    pub fn x_offset(&self) -> f32 {
        self.viewport.x_offset()
    }

    /// Render data for the current frame, recomputed on demand
    pub fn render_state(&self) -> RenderState {
        let offset = self.viewport.x_offset();
        let selection_px = if self.state.has_selection() {
            let start = self.caret_px(self.state.selection.start());
            let end = self.caret_px(self.state.selection.end());
            Some((start - offset, end - offset))
        } else {
            None
        };
        RenderState {
            text: self.state.text(),
            visible_offset: offset,
            cursor_px: self.caret_px(self.state.cursor()) - offset,
            selection_px,
        }
    }

    /// Caret blink phase: a pure function of elapsed time since the box
    /// gained focus (or any epoch the host picks)
    pub fn caret_visible(&self, elapsed: Duration) -> bool {
        (elapsed.as_millis() / CARET_BLINK.as_millis()) % 2 == 0
    }

    /// Unshifted pixel position of the caret at char index `pos`
    fn caret_px(&self, pos: usize) -> f32 {
        self.measure.measure(&self.state.buffer.slice(0..pos))
    }

    /// Re-run the viewport policy against the current caret and text
    /// widths
    fn refresh_viewport(&mut self) {
        let caret = self.caret_px(self.state.cursor());
        let total = self.measure.measure(self.state.buffer.as_str());
        self.viewport.refresh(caret, total);
    }
}
