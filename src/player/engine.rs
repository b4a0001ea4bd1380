//! The playback state machine.
//!
//! `EngineCore` owns the single live media handle and is the only writer of
//! the published `PlayerState`. Commands, load outcomes and ticks are all
//! handled on one thread, in call order; there is nothing to lock against.

use std::time::Duration;

use log::{debug, error, warn};

use super::backend::{LoadEvent, MediaBackend, MediaHandle};
use super::queue::{Direction, TrackQueue};
use super::types::{PlaybackStatus, PlayerCmd, PlayerState, StateHandle, Track};
use crate::store::PrefsStore;

pub(crate) struct EngineCore<B: MediaBackend> {
    backend: B,
    prefs: PrefsStore,
    shared: StateHandle,
    queue: TrackQueue,
    /// The live resource. At most one exists; `play` releases it before
    /// acquiring the next.
    handle: Option<B::Handle>,
    /// Bumped on every `play`. Load outcomes carrying an older value belong
    /// to a superseded resource and are discarded.
    generation: u64,
    current: Option<Track>,
    status: PlaybackStatus,
    position: Duration,
    duration: Duration,
    volume: f32,
    muted: bool,
    last_track: Option<Track>,
}

impl<B: MediaBackend> EngineCore<B> {
    pub(crate) fn new(backend: B, prefs: PrefsStore, shared: StateHandle) -> Self {
        let saved = prefs.load();
        let core = Self {
            backend,
            prefs,
            shared,
            queue: TrackQueue::new(),
            handle: None,
            generation: 0,
            current: None,
            status: PlaybackStatus::Idle,
            position: Duration::ZERO,
            duration: Duration::ZERO,
            volume: saved.volume,
            muted: saved.muted,
            last_track: saved.last_track,
        };
        core.publish();
        core
    }

    pub(crate) fn handle_cmd(&mut self, cmd: PlayerCmd) {
        match cmd {
            PlayerCmd::Play(track) => self.play(track),
            PlayerCmd::TogglePlay => self.toggle_play(),
            PlayerCmd::Seek(seconds) => self.seek(seconds),
            PlayerCmd::SetVolume(volume) => self.set_volume(volume),
            PlayerCmd::ToggleMute => self.toggle_mute(),
            PlayerCmd::Next => self.step(Direction::Forward),
            PlayerCmd::Prev => self.step(Direction::Back),
            PlayerCmd::Shutdown => self.teardown(),
        }
    }

    /// Drain pending load outcomes from the backend.
    pub(crate) fn pump_media(&mut self) {
        while let Some(event) = self.backend.poll() {
            self.on_media(event);
        }
    }

    /// Periodic position refresh and end-of-stream detection. Does work only
    /// while a track is audibly advancing.
    pub(crate) fn tick(&mut self) {
        if self.status != PlaybackStatus::Playing {
            return;
        }
        let Some(handle) = self.handle.as_ref() else {
            return;
        };
        if handle.finished() {
            self.on_ended();
        } else {
            self.position = self.clamp_position(handle.position());
            self.publish_position();
        }
    }

    /// Release the resource. Safe to call repeatedly.
    pub(crate) fn teardown(&mut self) {
        self.release_handle();
        if self.status == PlaybackStatus::Playing {
            self.status = PlaybackStatus::Paused;
            self.publish();
        }
    }

    fn play(&mut self, track: Track) {
        self.release_handle();
        self.generation += 1;
        self.queue.append(track.clone());
        self.prefs.save_last_track(&track);
        self.last_track = Some(track.clone());
        self.position = Duration::ZERO;
        self.duration = Duration::ZERO;
        self.status = PlaybackStatus::Loading;
        self.backend.begin_load(&track, self.generation);
        self.current = Some(track);
        self.publish();
    }

    fn on_media(&mut self, event: LoadEvent<B::Asset>) {
        match event {
            LoadEvent::Ready {
                generation,
                asset,
                duration,
            } => {
                if generation != self.generation {
                    debug!("discarding stale load result (generation {generation})");
                    return;
                }
                match self.backend.attach(asset, self.gain()) {
                    Ok(handle) => {
                        self.handle = Some(handle);
                        self.duration = duration;
                        self.status = PlaybackStatus::Playing;
                    }
                    Err(e) => {
                        error!("unable to start playback: {e}");
                        self.status = PlaybackStatus::Error;
                    }
                }
                self.publish();
            }
            LoadEvent::Failed { generation, error } => {
                if generation != self.generation {
                    debug!("discarding stale load failure (generation {generation})");
                    return;
                }
                error!("unable to load track: {error}");
                self.status = PlaybackStatus::Error;
                self.publish();
            }
        }
    }

    fn toggle_play(&mut self) {
        let Some(handle) = self.handle.as_mut() else {
            return;
        };
        match self.status {
            PlaybackStatus::Playing => {
                handle.pause();
                self.status = PlaybackStatus::Paused;
            }
            PlaybackStatus::Paused => {
                handle.resume();
                self.status = PlaybackStatus::Playing;
            }
            _ => return,
        }
        self.publish();
    }

    fn seek(&mut self, seconds: f64) {
        if !seconds.is_finite() {
            return;
        }
        let Some(handle) = self.handle.as_mut() else {
            return;
        };
        let target = seconds.clamp(0.0, self.duration.as_secs_f64());
        match handle.seek(Duration::from_secs_f64(target)) {
            Ok(landed) => {
                // Trust where the resource says it landed, not what we asked for.
                self.position = self.clamp_position(landed);
            }
            Err(e) => warn!("seek failed: {e}"),
        }
        self.publish();
    }

    fn set_volume(&mut self, volume: f32) {
        if !volume.is_finite() {
            return;
        }
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(handle) = self.handle.as_mut() {
            handle.set_gain(if self.muted { 0.0 } else { self.volume });
        }
        self.prefs.save_volume(self.volume);
        self.publish();
    }

    fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        if let Some(handle) = self.handle.as_mut() {
            handle.set_gain(if self.muted { 0.0 } else { self.volume });
        }
        self.prefs.save_muted(self.muted);
        self.publish();
    }

    fn step(&mut self, direction: Direction) {
        let Some(current) = self.current.as_ref() else {
            return;
        };
        if let Some(next) = self.queue.neighbor(&current.id, direction).cloned() {
            self.play(next);
        }
    }

    fn on_ended(&mut self) {
        let next = self
            .current
            .as_ref()
            .and_then(|t| self.queue.neighbor(&t.id, Direction::Forward))
            .cloned();
        match next {
            Some(track) => self.play(track),
            None => {
                self.position = self.duration;
                self.status = PlaybackStatus::Ended;
                self.publish();
            }
        }
    }

    fn gain(&self) -> f32 {
        if self.muted { 0.0 } else { self.volume }
    }

    fn clamp_position(&self, position: Duration) -> Duration {
        if self.duration > Duration::ZERO {
            position.min(self.duration)
        } else {
            position
        }
    }

    fn release_handle(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.stop();
        }
    }

    fn publish(&self) {
        if let Ok(mut state) = self.shared.lock() {
            state.current = self.current.clone();
            state.status = self.status;
            state.position = self.position;
            state.duration = self.duration;
            state.volume = self.volume;
            state.muted = self.muted;
            state.queue = self.queue.tracks().to_vec();
            state.last_track = self.last_track.clone();
        }
    }

    fn publish_position(&self) {
        if let Ok(mut state) = self.shared.lock() {
            state.position = self.position;
        }
    }
}
