//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`. All
//! drawing works off a `PlayerState` snapshot; nothing here mutates
//! playback state.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Gauge, List, ListItem, Padding, Paragraph, Wrap},
};
use std::time::Duration;

use crate::app::App;
use crate::catalog::Category;
use crate::config::{ControlsSettings, UiSettings};
use crate::player::{PlaybackStatus, PlayerState};

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn status_word(status: PlaybackStatus) -> &'static str {
    match status {
        PlaybackStatus::Idle => "Idle",
        PlaybackStatus::Loading => "Loading...",
        PlaybackStatus::Playing => "Playing",
        PlaybackStatus::Paused => "Paused",
        PlaybackStatus::Ended => "Ended",
        PlaybackStatus::Error => "Can't play this track",
    }
}

fn volume_text(state: &PlayerState) -> String {
    if state.muted {
        "Muted".to_string()
    } else {
        format!("Vol {:.0}%", state.volume * 100.0)
    }
}

/// One status line for the transport box.
fn transport_text(state: &PlayerState) -> String {
    match &state.current {
        Some(track) => format!(
            "{}  |  {} - {}  |  {}",
            status_word(state.status),
            track.artist,
            track.title,
            volume_text(state)
        ),
        None => {
            let hint = match &state.last_track {
                Some(track) => format!("last played: {} - {}", track.artist, track.title),
                None => "nothing played yet".to_string(),
            };
            format!("Idle  |  {hint}  |  {}", volume_text(state))
        }
    }
}

/// Render the key legend, incorporating the configured seek/volume steps.
fn legend_text(controls: &ControlsSettings) -> String {
    format!(
        "[tab] browse | [enter] audition | [space/k] play/pause | [</>] seek -/+{}s | [^/v] vol +/-{:.0}% | [m] mute | [n/p] next/prev | [q] quit",
        controls.seek_seconds,
        controls.volume_step * 100.0
    )
}

/// Render the entire UI into the provided `frame`.
pub fn draw(
    frame: &mut Frame,
    app: &App,
    state: &PlayerState,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
) {
    let mut constraints = vec![
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(3),
        Constraint::Length(4),
    ];
    if ui_settings.show_legend {
        constraints.push(Constraint::Length(3));
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" vivace ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Preset browser
    {
        let items: Vec<ListItem> = app
            .presets
            .iter()
            .map(|preset| {
                let category = match preset.category {
                    Category::Core => "core",
                    Category::Signature => "signature",
                };
                ListItem::new(format!(
                    "{}  ·  {}  [{}]",
                    preset.title, preset.description, category
                ))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" styles "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut list_state = ratatui::widgets::ListState::default();
        if !app.presets.is_empty() {
            list_state.select(Some(app.selected));
        }
        frame.render_stateful_widget(list, chunks[1], &mut list_state);
    }

    // Selected preset details, mirroring what the catalog card carries.
    {
        let detail = match app.selected_preset() {
            Some(preset) => format!(
                "{}  ·  tags: {}  ·  accent {}",
                preset.mood,
                preset.tags.join(", "),
                preset.accent
            ),
            None => "catalog is empty".to_string(),
        };
        let detail_par = Paragraph::new(detail)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" preset ")
                    .padding(Padding {
                        left: 1,
                        right: 0,
                        top: 0,
                        bottom: 0,
                    }),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(detail_par, chunks[2]);
    }

    // Transport: status line plus a progress gauge.
    {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" transport ")
            .padding(Padding {
                left: 1,
                right: 1,
                top: 0,
                bottom: 0,
            });
        let inner = block.inner(chunks[3]);
        frame.render_widget(block, chunks[3]);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        frame.render_widget(Paragraph::new(transport_text(state)), rows[0]);

        let ratio = if state.duration > Duration::ZERO {
            (state.position.as_secs_f64() / state.duration.as_secs_f64()).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let gauge = Gauge::default().ratio(ratio).label(format!(
            "{} / {}",
            format_mmss(state.position),
            format_mmss(state.duration)
        ));
        frame.render_widget(gauge, rows[1]);
    }

    // Key legend
    if ui_settings.show_legend {
        let footer = Paragraph::new(legend_text(controls_settings))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" keys ")
                    .padding(Padding {
                        left: 1,
                        right: 0,
                        top: 0,
                        bottom: 0,
                    }),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(footer, chunks[4]);
    }
}
