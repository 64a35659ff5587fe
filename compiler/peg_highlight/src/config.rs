//! Highlighter configuration.

use crate::Palette;

/// Settings for a [`Highlighter`](crate::Highlighter).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighlightConfig {
    pub palette: Palette,
}

impl HighlightConfig {
    pub fn new(palette: Palette) -> Self {
        HighlightConfig { palette }
    }
}
