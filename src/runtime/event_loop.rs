use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::config::Settings;
use crate::player::{Player, PlayerState};
use crate::ui;

/// Main terminal event loop: draws from player snapshots and maps key
/// presses to transport operations. Returns `Ok(())` when shutdown is
/// requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &Settings,
    app: &mut App,
    player: &Player,
    media_root: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let snapshot = player.snapshot();
        terminal.draw(|f| ui::draw(f, app, &snapshot, &settings.ui, &settings.controls))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key(key, settings, app, player, &snapshot, media_root) {
                    return Ok(());
                }
            }
        }
    }
}

/// Dispatch one key press. Returns true when the app should quit.
///
/// Transport bindings mirror the player contract exactly: space/k toggle,
/// arrows seek and change volume, m mutes, n/p step through the queue.
/// Everything else belongs to the browser shell.
fn handle_key(
    key: KeyEvent,
    settings: &Settings,
    app: &mut App,
    player: &Player,
    snapshot: &PlayerState,
    media_root: &Path,
) -> bool {
    let seek_step = settings.controls.seek_seconds;
    let volume_step = settings.controls.volume_step;

    match key.code {
        KeyCode::Char('q') => return true,

        KeyCode::Tab => app.select_next(),
        KeyCode::BackTab => app.select_prev(),
        KeyCode::Enter => {
            if let Some(preset) = app.selected_preset() {
                player.play(preset.to_track(media_root));
            }
        }

        KeyCode::Char(' ') | KeyCode::Char('k') => player.toggle_play(),
        KeyCode::Left => player.seek_to(snapshot.position.as_secs_f64() - seek_step),
        KeyCode::Right => player.seek_to(snapshot.position.as_secs_f64() + seek_step),
        KeyCode::Up => player.set_volume(snapshot.volume + volume_step),
        KeyCode::Down => player.set_volume(snapshot.volume - volume_step),
        KeyCode::Char('m') | KeyCode::Char('M') => player.toggle_mute(),
        KeyCode::Char('n') | KeyCode::Char('N') => player.next_track(),
        KeyCode::Char('p') | KeyCode::Char('P') => player.prev_track(),

        _ => {}
    }
    false
}
