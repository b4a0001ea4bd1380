//! Player-related small types and handles.
//!
//! This module defines the track value type, the playback status enum,
//! the published state snapshot and the commands accepted by the engine.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Volume used when no persisted value exists.
pub const DEFAULT_VOLUME: f32 = 0.7;

/// An identified playable audio item. Immutable once constructed;
/// identity is the `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    /// Locator of the audio resource.
    pub source: PathBuf,
    /// Optional cover image locator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<PathBuf>,
}

/// Lifecycle of the engine's single media resource.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    /// No track has been prepared yet.
    #[default]
    Idle,
    /// A resource is being fetched and decoded.
    Loading,
    Playing,
    Paused,
    /// The resource played to its natural end and nothing follows it.
    Ended,
    /// The last load or start attempt failed.
    Error,
}

/// Snapshot of playback state published for the UI.
///
/// Mutated only by the engine thread; everyone else reads clones.
#[derive(Debug, Clone)]
pub struct PlayerState {
    pub current: Option<Track>,
    pub status: PlaybackStatus,
    /// Last known playback offset. Never exceeds `duration` once known.
    pub position: Duration,
    /// Zero until the resource reports it.
    pub duration: Duration,
    pub volume: f32,
    pub muted: bool,
    /// First-play order, deduplicated by id.
    pub queue: Vec<Track>,
    /// Restored from storage for display only; never auto-played.
    pub last_track: Option<Track>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            current: None,
            status: PlaybackStatus::Idle,
            position: Duration::ZERO,
            duration: Duration::ZERO,
            volume: DEFAULT_VOLUME,
            muted: false,
            queue: Vec::new(),
            last_track: None,
        }
    }
}

pub type StateHandle = Arc<Mutex<PlayerState>>;

/// Transport commands sent to the engine thread.
#[derive(Debug)]
pub(crate) enum PlayerCmd {
    /// Release whatever is loaded and start loading this track.
    Play(Track),
    /// Pause if playing, resume if paused.
    TogglePlay,
    /// Seek to an absolute offset in seconds; clamped to `[0, duration]`.
    Seek(f64),
    /// Set the volume; clamped to `[0, 1]` and persisted.
    SetVolume(f32),
    ToggleMute,
    /// Play the queue neighbor after the current track, if any.
    Next,
    /// Play the queue neighbor before the current track, if any.
    Prev,
    /// Release the resource and stop the engine thread.
    Shutdown,
}

/// Failures of the underlying media resource. None of these reach the
/// caller; they surface through `PlaybackStatus::Error` and the log.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("failed to load {path:?}: {reason}")]
    Load { path: PathBuf, reason: String },
    #[error("playback could not start: {0}")]
    Start(String),
    #[error("seek rejected: {0}")]
    Seek(String),
}
