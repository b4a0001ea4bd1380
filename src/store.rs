//! Persistence for user playback preferences.
//!
//! Volume, mute flag and the last played track survive restarts through a
//! small TOML state file. Storage failures never affect playback.

mod prefs;

pub use prefs::*;
