//! Media resource backends: how a `Track` becomes sound.
//!
//! The engine drives an abstract resource through `MediaBackend` and
//! `MediaHandle`. Loading is asynchronous: `begin_load` returns immediately
//! and the outcome arrives later as a generation-tagged `LoadEvent`, so the
//! engine can discard results from loads it has already superseded.
//!
//! `RodioBackend` is the production implementation: a loader thread opens
//! and decodes the file, and `attach` binds the decoded source to a sink on
//! the (lazily opened) default output stream.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use lofty::file::AudioFile;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

use super::types::{PlayerError, Track};

/// Outcome of an asynchronous load, tagged with the generation that
/// requested it.
pub(crate) enum LoadEvent<A> {
    Ready {
        generation: u64,
        asset: A,
        duration: Duration,
    },
    Failed {
        generation: u64,
        error: PlayerError,
    },
}

pub(crate) trait MediaBackend {
    /// Decoded-but-unattached media produced by a finished load.
    type Asset;
    type Handle: MediaHandle;

    /// Start loading `track` off-thread; the outcome arrives through `poll`.
    fn begin_load(&mut self, track: &Track, generation: u64);

    /// Next pending load outcome, if any.
    fn poll(&mut self) -> Option<LoadEvent<Self::Asset>>;

    /// Bind a loaded asset to the audio output and start it at `gain`.
    fn attach(&mut self, asset: Self::Asset, gain: f32) -> Result<Self::Handle, PlayerError>;
}

/// The single live playback resource. Owned exclusively by the engine.
pub(crate) trait MediaHandle {
    fn pause(&mut self);
    fn resume(&mut self);
    /// Ask the resource to move to `to`; returns the offset it actually
    /// landed on.
    fn seek(&mut self, to: Duration) -> Result<Duration, PlayerError>;
    fn set_gain(&mut self, gain: f32);
    /// Offset the resource reports right now.
    fn position(&self) -> Duration;
    /// True once the stream has played to its natural end.
    fn finished(&self) -> bool;
    fn stop(&mut self);
}

pub(crate) struct RodioAsset {
    decoder: Decoder<BufReader<File>>,
}

pub(crate) struct RodioBackend {
    stream: Option<OutputStream>,
    events_tx: Sender<LoadEvent<RodioAsset>>,
    events_rx: Receiver<LoadEvent<RodioAsset>>,
}

impl RodioBackend {
    pub(crate) fn new() -> Self {
        let (events_tx, events_rx) = mpsc::channel();
        Self {
            stream: None,
            events_tx,
            events_rx,
        }
    }
}

impl MediaBackend for RodioBackend {
    type Asset = RodioAsset;
    type Handle = RodioHandle;

    fn begin_load(&mut self, track: &Track, generation: u64) {
        let path = track.source.clone();
        let tx = self.events_tx.clone();
        thread::spawn(move || {
            let _ = tx.send(load_media(&path, generation));
        });
    }

    fn poll(&mut self) -> Option<LoadEvent<RodioAsset>> {
        self.events_rx.try_recv().ok()
    }

    fn attach(&mut self, asset: RodioAsset, gain: f32) -> Result<RodioHandle, PlayerError> {
        if self.stream.is_none() {
            let mut stream = OutputStreamBuilder::open_default_stream()
                .map_err(|e| PlayerError::Start(e.to_string()))?;
            // rodio logs to stderr when OutputStream is dropped. That's useful in
            // debugging, but noisy for a TUI app.
            stream.log_on_drop(false);
            self.stream = Some(stream);
        }
        let stream = self
            .stream
            .as_ref()
            .ok_or_else(|| PlayerError::Start("audio output unavailable".to_string()))?;

        let sink = Sink::connect_new(stream.mixer());
        sink.append(asset.decoder);
        sink.set_volume(gain);
        sink.play();
        Ok(RodioHandle { sink })
    }
}

fn load_media(path: &Path, generation: u64) -> LoadEvent<RodioAsset> {
    match open_decoder(path) {
        Ok((decoder, duration)) => LoadEvent::Ready {
            generation,
            asset: RodioAsset { decoder },
            duration,
        },
        Err(error) => LoadEvent::Failed { generation, error },
    }
}

fn open_decoder(path: &Path) -> Result<(Decoder<BufReader<File>>, Duration), PlayerError> {
    let file = File::open(path).map_err(|e| PlayerError::Load {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let decoder = Decoder::new(BufReader::new(file)).map_err(|e| PlayerError::Load {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    // Prefer the container's reported duration; many decoders cannot tell.
    let duration = probe_duration(path)
        .or_else(|| decoder.total_duration())
        .unwrap_or(Duration::ZERO);
    Ok((decoder, duration))
}

fn probe_duration(path: &Path) -> Option<Duration> {
    lofty::read_from_path(path)
        .ok()
        .map(|tagged| tagged.properties().duration())
}

pub(crate) struct RodioHandle {
    sink: Sink,
}

impl MediaHandle for RodioHandle {
    fn pause(&mut self) {
        self.sink.pause();
    }

    fn resume(&mut self) {
        self.sink.play();
    }

    fn seek(&mut self, to: Duration) -> Result<Duration, PlayerError> {
        self.sink
            .try_seek(to)
            .map_err(|e| PlayerError::Seek(e.to_string()))?;
        Ok(self.sink.get_pos())
    }

    fn set_gain(&mut self, gain: f32) {
        self.sink.set_volume(gain);
    }

    fn position(&self) -> Duration {
        self.sink.get_pos()
    }

    fn finished(&self) -> bool {
        self.sink.empty()
    }

    fn stop(&mut self) {
        self.sink.stop();
    }
}
