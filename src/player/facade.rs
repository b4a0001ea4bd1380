//! `Player` is the single surface the rest of the application touches.
//!
//! It owns the command channel into the engine thread and the shared state
//! handle the engine publishes through. All control methods return
//! immediately; outcomes are observed through the published state, never
//! through return values.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use log::warn;

use super::backend::RodioBackend;
use super::engine::EngineCore;
use super::types::{PlayerCmd, PlayerState, StateHandle, Track};
use crate::store::PrefsStore;

pub struct Player {
    tx: Sender<PlayerCmd>,
    state: StateHandle,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl Player {
    /// Spawn the engine thread. `tick` is the position refresh cadence while
    /// a track is playing.
    pub fn new(prefs: PrefsStore, tick: Duration) -> Self {
        let (tx, rx) = mpsc::channel::<PlayerCmd>();
        let state: StateHandle = Arc::new(Mutex::new(PlayerState::default()));

        let join = spawn_engine_thread(rx, prefs, state.clone(), tick);

        Self {
            tx,
            state,
            join: Mutex::new(Some(join)),
        }
    }

    /// Clone of the current published state. Safe to call at any time,
    /// including before any track has ever played.
    pub fn snapshot(&self) -> PlayerState {
        self.state.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn play(&self, track: Track) {
        self.send(PlayerCmd::Play(track));
    }

    pub fn toggle_play(&self) {
        self.send(PlayerCmd::TogglePlay);
    }

    pub fn seek_to(&self, seconds: f64) {
        self.send(PlayerCmd::Seek(seconds));
    }

    pub fn set_volume(&self, volume: f32) {
        self.send(PlayerCmd::SetVolume(volume));
    }

    pub fn toggle_mute(&self) {
        self.send(PlayerCmd::ToggleMute);
    }

    pub fn next_track(&self) {
        self.send(PlayerCmd::Next);
    }

    pub fn prev_track(&self) {
        self.send(PlayerCmd::Prev);
    }

    /// Release the audio resource and join the engine thread. Safe to call
    /// more than once.
    pub fn shutdown(&self) {
        let _ = self.tx.send(PlayerCmd::Shutdown);
        if let Ok(mut join) = self.join.lock() {
            if let Some(handle) = join.take() {
                let _ = handle.join();
            }
        }
    }

    fn send(&self, cmd: PlayerCmd) {
        if self.tx.send(cmd).is_err() {
            warn!("player command dropped: engine thread is gone");
        }
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn spawn_engine_thread(
    rx: Receiver<PlayerCmd>,
    prefs: PrefsStore,
    state: StateHandle,
    tick: Duration,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut core = EngineCore::new(RodioBackend::new(), prefs, state);
        loop {
            match rx.recv_timeout(tick) {
                Ok(PlayerCmd::Shutdown) => break,
                Ok(cmd) => core.handle_cmd(cmd),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
            core.pump_media();
            core.tick();
        }
        core.teardown();
    })
}
