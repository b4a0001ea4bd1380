//! Configuration schema and loader.
//!
//! Settings are layered: struct defaults, then an optional TOML file, then
//! `VIVACE__`-prefixed environment variables. Loading never fails the app;
//! the runtime falls back to defaults.

mod load;
mod schema;

pub use schema::*;
