//! The built-in style preset catalog.
//!
//! A static, read-only set of records served to the browser UI. The playback
//! engine only ever sees the `Track` projection of a preset the user chose
//! to audition.

mod presets;

pub use presets::*;
