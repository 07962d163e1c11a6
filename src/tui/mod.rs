//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop Shape
//!
//! Fetches never block the loop: an `Effect` from `update()` spawns a tokio
//! task that performs one GET and posts a completion `Action` back over an
//! std mpsc channel, which the loop drains between redraws. Redraws are
//! conditional — the loop sleeps up to 250ms and only draws after an input
//! event or a channel action.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during redraws.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::api::client::{QuranApiClient, QuranSource};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::search::filter_members;
use crate::core::state::App;
use crate::tui::components::{
    ChapterListEvent, ChapterListState, ReaderViewState, SearchEvent, SearchPanelState,
    TafsirViewState, ThemeBrowserEvent, ThemeBrowserState,
    theme_browser::{entry_count, selected_ordinals},
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub home_list: ChapterListState,
    pub tafsir_list: ChapterListState,
    pub search_panel: SearchPanelState,
    pub theme_browser: ThemeBrowserState,
    pub reader_view: ReaderViewState,
    pub tafsir_view: TafsirViewState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            home_list: ChapterListState::new(),
            tafsir_list: ChapterListState::new(),
            search_panel: SearchPanelState::new(),
            theme_browser: ThemeBrowserState::new(),
            reader_view: ReaderViewState::new(),
            tafsir_view: TafsirViewState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            Show,                        // Cursor visible for the search input
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from redraws
        )?;
        info!("Terminal modes enabled (mouse capture, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Build the data source from the resolved config.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn QuranSource> {
    Arc::new(QuranApiClient::new(
        Some(config.surah_base_url.clone()),
        Some(config.tafsir_base_url.clone()),
    ))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(&config);
    let mut app = App::new(source, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background fetch tasks
    let (tx, rx) = mpsc::channel();

    // Kick off the initial chapter-list load
    let effect = update(&mut app, Action::Refresh);
    let mut should_quit = apply_effect(effect, &app, &tx);

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));
        if first_event.is_some() {
            needs_redraw = true;
        }

        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of what is focused
            if matches!(event, TuiEvent::ForceQuit) {
                should_quit |= apply_effect(update(&mut app, Action::Quit), &app, &tx);
                continue;
            }

            // Ctrl+R re-fetches the chapter list
            if matches!(event, TuiEvent::Refresh) {
                should_quit |= apply_effect(update(&mut app, Action::Refresh), &app, &tx);
                continue;
            }

            // Tab cycling closes any stacked view via the reducer
            if matches!(event, TuiEvent::NextTab | TuiEvent::PrevTab) {
                let tab = if matches!(event, TuiEvent::NextTab) {
                    app.active_tab.next()
                } else {
                    app.active_tab.previous()
                };
                should_quit |= apply_effect(update(&mut app, Action::SwitchTab(tab)), &app, &tx);
                continue;
            }

            // Stacked views consume events before the tabs do
            if app.tafsir.is_some() {
                if matches!(event, TuiEvent::Escape) {
                    should_quit |= apply_effect(update(&mut app, Action::CloseView), &app, &tx);
                } else {
                    tui.tafsir_view.handle_event(&event);
                }
                continue;
            }
            if app.reader.is_some() {
                if matches!(event, TuiEvent::Escape) {
                    should_quit |= apply_effect(update(&mut app, Action::CloseView), &app, &tx);
                } else {
                    tui.reader_view.handle_event(&event);
                }
                continue;
            }

            // Esc at top level quits
            if matches!(event, TuiEvent::Escape) {
                should_quit |= apply_effect(update(&mut app, Action::Quit), &app, &tx);
                continue;
            }

            // Per-tab dispatch
            let action = route_tab_event(&event, &app, &mut tui);
            if let Some(action) = action {
                should_quit |= apply_effect(update(&mut app, action), &app, &tx);
            }
        }

        // Handle background task actions (fetch completions)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            should_quit |= apply_effect(update(&mut app, action), &app, &tx);
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Routes an input event to the component owning the active tab, translating
/// its high-level event into a core action.
fn route_tab_event(event: &TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    match app.active_tab {
        crate::Tab::Home => match tui.home_list.handle_event(event, &app.chapters) {
            Some(ChapterListEvent::Open(number)) => {
                tui.reader_view.reset();
                Some(Action::OpenChapter {
                    number,
                    focus_verse: None,
                })
            }
            None => None,
        },
        crate::Tab::Search => {
            let result_count = app.search.results.len();
            match tui.search_panel.handle_event(event, result_count) {
                Some(SearchEvent::QueryChanged(query)) => Some(Action::QueryChanged(query)),
                Some(SearchEvent::Open(index)) => {
                    tui.reader_view.reset();
                    Some(Action::OpenSearchResult(index))
                }
                None => None,
            }
        }
        crate::Tab::Themes => {
            let entries = entry_count(&app.themes);
            let ordinals = selected_ordinals(tui.theme_browser.entry_selected, &app.themes);
            let members = filter_members(&app.chapters, &ordinals);
            match tui.theme_browser.handle_event(event, entries, members.len()) {
                Some(ThemeBrowserEvent::Open(index)) => members.get(index).map(|member| {
                    tui.reader_view.reset();
                    Action::OpenChapter {
                        number: member.chapter.number,
                        focus_verse: None,
                    }
                }),
                None => None,
            }
        }
        crate::Tab::Tafsir => match tui.tafsir_list.handle_event(event, &app.chapters) {
            Some(ChapterListEvent::Open(number)) => {
                tui.tafsir_view.reset();
                Some(Action::OpenTafsir(number))
            }
            None => None,
        },
        crate::Tab::Qibla => None,
    }
}

/// Performs whatever I/O an effect asks for. Returns true when the loop
/// should exit.
fn apply_effect(effect: Effect, app: &App, tx: &mpsc::Sender<Action>) -> bool {
    match effect {
        Effect::Quit => true,
        Effect::FetchChapters => {
            spawn_fetch_chapters(app.source.clone(), tx.clone());
            false
        }
        Effect::FetchSurah(number) => {
            spawn_fetch_surah(app.source.clone(), number, tx.clone());
            false
        }
        Effect::FetchTafsir(number) => {
            spawn_fetch_tafsir(app.source.clone(), number, tx.clone());
            false
        }
        Effect::None => false,
    }
}

fn spawn_fetch_chapters(source: Arc<dyn QuranSource>, tx: mpsc::Sender<Action>) {
    info!("Spawning chapter list fetch");
    tokio::spawn(async move {
        let result = source.chapters().await.map_err(|e| e.to_string());
        if tx.send(Action::ChaptersLoaded(result)).is_err() {
            warn!("Failed to send ChaptersLoaded: receiver dropped");
        }
    });
}

fn spawn_fetch_surah(source: Arc<dyn QuranSource>, number: u32, tx: mpsc::Sender<Action>) {
    info!("Spawning surah fetch for {number}");
    tokio::spawn(async move {
        let result = source
            .surah(number)
            .await
            .map_err(|e| e.to_string());
        if tx.send(Action::SurahLoaded { number, result }).is_err() {
            warn!("Failed to send SurahLoaded for {number}: receiver dropped");
        }
    });
}

fn spawn_fetch_tafsir(source: Arc<dyn QuranSource>, number: u32, tx: mpsc::Sender<Action>) {
    info!("Spawning tafsir fetch for {number}");
    tokio::spawn(async move {
        let result = source
            .tafsir(number)
            .await
            .map_err(|e| e.to_string());
        if tx.send(Action::TafsirLoaded { number, result }).is_err() {
            warn!("Failed to send TafsirLoaded for {number}: receiver dropped");
        }
    });
}
