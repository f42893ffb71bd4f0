//! Selection range with anchor, head, and a live direction tag.

use std::cmp::Ordering;

/// Direction the user is currently extending the selection in.
///
/// This is deliberately an explicit tag rather than something derived
/// from the anchor/head ordering at query time: extension intents that
/// arrive while a selection exists consult it to decide whether to grow
/// or shrink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionDir {
    Left,
    #[default]
    Neutral,
    Right,
}

/// A selection over char indices. `anchor` is where the selection
/// started and stays fixed; `head` is the caret's live position.
/// `anchor == head` means no selection, caret only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
    pub dir: SelectionDir,
}

impl Selection {
    /// A collapsed selection (caret with no selection)
    pub fn caret(pos: usize) -> Self {
        Self {
            anchor: pos,
            head: pos,
            dir: SelectionDir::Neutral,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// Left bound (minimum of anchor and head)
    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    /// Right bound (maximum of anchor and head)
    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    /// Collapse to the given position, clearing the direction
    pub fn collapse_to(&mut self, pos: usize) {
        self.anchor = pos;
        self.head = pos;
        self.dir = SelectionDir::Neutral;
    }

    /// Collapse to the left bound
    pub fn collapse_to_start(&mut self) {
        self.collapse_to(self.start());
    }

    /// Collapse to the right bound
    pub fn collapse_to_end(&mut self) {
        self.collapse_to(self.end());
    }

    /// Move the head and retag the direction from the net relationship
    pub fn set_head(&mut self, pos: usize) {
        self.head = pos;
        self.retag();
    }

    /// Derive the direction tag from the anchor/head relationship:
    /// Left if head < anchor, Right if head > anchor, Neutral if equal.
    fn retag(&mut self) {
        self.dir = match self.head.cmp(&self.anchor) {
            Ordering::Less => SelectionDir::Left,
            Ordering::Equal => SelectionDir::Neutral,
            Ordering::Greater => SelectionDir::Right,
        };
    }
}
