//! Construction-time settings for a text entry box.

use serde::{Deserialize, Serialize};

/// Configuration a host hands to [`crate::TextEntryBox::new`].
///
/// Serde-derived so hosts can persist it alongside their own config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntrySettings {
    /// Visible box width in pixels
    #[serde(default = "default_width")]
    pub width: f32,

    /// Character size in pixels, for hosts building a font-backed
    /// measure; the core itself never interprets it
    #[serde(default = "default_char_size")]
    pub char_size: u32,

    /// Maximum number of characters (None = unbounded)
    #[serde(default)]
    pub max_chars: Option<usize>,

    /// Draw the box even while it is not accepting input
    #[serde(default)]
    pub always_visible: bool,

    /// Pin the box active and keep the buffer on submit
    #[serde(default)]
    pub always_active: bool,

    /// Initial buffer contents
    #[serde(default)]
    pub text: String,
}

fn default_width() -> f32 {
    200.0
}

fn default_char_size() -> u32 {
    20
}

impl Default for EntrySettings {
    fn default() -> Self {
        Self {
            width: default_width(),
            char_size: default_char_size(),
            max_chars: None,
            always_visible: false,
            always_active: false,
            text: String::new(),
        }
    }
}

impl EntrySettings {
    pub fn with_width(width: f32) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }
}
