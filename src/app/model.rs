//! Application model: the preset browser.
//!
//! Playback state lives behind the player facade; the `App` only tracks
//! which catalog entry the cursor is on.

use crate::catalog::StylePreset;

/// The main application model.
pub struct App {
    pub presets: &'static [StylePreset],
    pub selected: usize,
}

impl App {
    /// Create a new `App` browsing the given presets.
    pub fn new(presets: &'static [StylePreset]) -> Self {
        Self {
            presets,
            selected: 0,
        }
    }

    /// The preset under the cursor, if the catalog is non-empty.
    pub fn selected_preset(&self) -> Option<&StylePreset> {
        self.presets.get(self.selected)
    }

    /// Move the cursor to the next preset, wrapping at the end.
    pub fn select_next(&mut self) {
        if !self.presets.is_empty() {
            self.selected = (self.selected + 1) % self.presets.len();
        }
    }

    /// Move the cursor to the previous preset, wrapping at the start.
    pub fn select_prev(&mut self) {
        if self.presets.is_empty() {
            return;
        }
        self.selected = if self.selected == 0 {
            self.presets.len() - 1
        } else {
            self.selected - 1
        };
    }
}
