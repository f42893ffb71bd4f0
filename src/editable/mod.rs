//! The editing core of the text entry box.
//!
//! Three layers, bottom-up:
//!
//! - [`LineBuffer`]: owns the character sequence; all indices are char
//!   indices, never bytes.
//! - [`EntryConstraints`]: the insertion rules (max length, accepted
//!   codepoints) applied by buffer mutations.
//! - [`EditState`]: the selection/cursor engine. Translates editing
//!   intents ([`EntryMsg`]) into buffer mutations and selection updates
//!   while keeping both indices inside `[0, len]`.

mod buffer;
mod constraints;
mod messages;
mod selection;
mod state;

// Re-export main types
pub use buffer::LineBuffer;
pub use constraints::{CharFilter, EntryConstraints};
pub use messages::{EntryMsg, MoveTarget};
pub use selection::{Selection, SelectionDir};
pub use state::EditState;
