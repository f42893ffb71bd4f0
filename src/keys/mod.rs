//! Key event vocabulary consumed by the input dispatcher, plus the winit
//! host adapter.

mod types;
pub mod winit_adapter;

pub use types::{KeyCode, Keystroke, Modifiers};
