//! The ordered, deduplicated play history used for sequencing.
//!
//! A track joins the queue the first time it is played and keeps that
//! position forever; replaying it neither reorders nor duplicates it.

use super::types::Track;

/// Direction of a neighbor lookup.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Back,
}

/// Tracks in first-play order, at most one entry per id.
#[derive(Debug, Default)]
pub struct TrackQueue {
    tracks: Vec<Track>,
}

impl TrackQueue {
    pub fn new() -> Self {
        Self { tracks: Vec::new() }
    }

    /// Append `track` iff no entry shares its id. Returns whether it was added.
    pub fn append(&mut self, track: Track) -> bool {
        if self.tracks.iter().any(|t| t.id == track.id) {
            return false;
        }
        self.tracks.push(track);
        true
    }

    /// The track immediately before/after the entry with `id`.
    ///
    /// `None` at the boundaries and when `id` is not queued. No wraparound.
    pub fn neighbor(&self, id: &str, direction: Direction) -> Option<&Track> {
        let pos = self.tracks.iter().position(|t| t.id == id)?;
        match direction {
            Direction::Forward => self.tracks.get(pos + 1),
            Direction::Back => pos.checked_sub(1).and_then(|p| self.tracks.get(p)),
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}
