use std::env;
use std::fs;
use std::path::PathBuf;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::player::{DEFAULT_VOLUME, Track};

/// Preference values read back at engine startup.
#[derive(Debug, Clone)]
pub struct Prefs {
    pub volume: f32,
    pub muted: bool,
    /// Restored for display only; playback never resumes on its own.
    pub last_track: Option<Track>,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            volume: DEFAULT_VOLUME,
            muted: false,
            last_track: None,
        }
    }
}

/// On-disk representation. Every key is optional so partial or stale files
/// still load; anything missing or malformed falls back to defaults.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct PrefsFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    volume: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    muted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_track: Option<Track>,
}

/// TOML-backed key/value store for playback preferences.
///
/// Reads happen once at startup; each write is a read-modify-write of the
/// whole file. A store without a resolvable path silently drops writes.
#[derive(Debug, Clone)]
pub struct PrefsStore {
    path: Option<PathBuf>,
}

impl PrefsStore {
    pub fn at(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// A store that never persists anything.
    pub fn disabled() -> Self {
        Self { path: None }
    }

    /// Resolve the state file under `$XDG_STATE_HOME/vivace/state.toml` or
    /// `~/.local/state/vivace/state.toml` when `XDG_STATE_HOME` is not set.
    pub fn at_default_path() -> Self {
        let state_home = if let Some(xdg) = env::var_os("XDG_STATE_HOME") {
            Some(PathBuf::from(xdg))
        } else if let Some(home) = env::var_os("HOME") {
            Some(PathBuf::from(home).join(".local").join("state"))
        } else {
            None
        };

        if state_home.is_none() {
            warn!("no state directory available; preferences will not persist");
        }

        Self {
            path: state_home.map(|d| d.join("vivace").join("state.toml")),
        }
    }

    pub fn load(&self) -> Prefs {
        let file = self.read_file();
        let defaults = Prefs::default();
        Prefs {
            volume: file
                .volume
                .map(|v| v.clamp(0.0, 1.0))
                .unwrap_or(defaults.volume),
            muted: file.muted.unwrap_or(defaults.muted),
            last_track: file.last_track,
        }
    }

    pub fn save_volume(&self, volume: f32) {
        self.update(|f| f.volume = Some(volume));
    }

    pub fn save_muted(&self, muted: bool) {
        self.update(|f| f.muted = Some(muted));
    }

    pub fn save_last_track(&self, track: &Track) {
        let track = track.clone();
        self.update(move |f| f.last_track = Some(track));
    }

    fn read_file(&self) -> PrefsFile {
        let Some(path) = self.path.as_deref() else {
            return PrefsFile::default();
        };
        // A missing file is the normal first-run case; not worth a log line.
        let Ok(text) = fs::read_to_string(path) else {
            return PrefsFile::default();
        };
        match toml::from_str(&text) {
            Ok(file) => file,
            Err(e) => {
                warn!("ignoring malformed state file {}: {e}", path.display());
                PrefsFile::default()
            }
        }
    }

    fn update(&self, apply: impl FnOnce(&mut PrefsFile)) {
        let Some(path) = self.path.as_deref() else {
            return;
        };
        let mut file = self.read_file();
        apply(&mut file);

        let text = match toml::to_string_pretty(&file) {
            Ok(t) => t,
            Err(e) => {
                warn!("could not serialize preferences: {e}");
                return;
            }
        };

        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!("could not create state directory {}: {e}", parent.display());
                return;
            }
        }
        if let Err(e) = fs::write(path, text) {
            warn!("could not write state file {}: {e}", path.display());
        }
    }
}
