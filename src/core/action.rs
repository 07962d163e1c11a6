//! # Actions
//!
//! Everything that can happen in Mushaf becomes an `Action`.
//! User opens a surah? That's `Action::OpenChapter(n)`.
//! A fetch finishes? That's `Action::ChaptersLoaded(result)`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state. No side effects here. I/O happens elsewhere: `update`
//! returns an `Effect` telling the event loop what to spawn.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: feed actions, assert on state and effect.

use log::{info, warn};

use crate::Tab;
use crate::api::types::{Chapter, SurahDetail, Tafsir};
use crate::core::state::{App, ReaderState, TafsirState};

/// Fetch errors cross the channel as strings; the reducer only needs
/// something to show the user.
type FetchResult<T> = Result<T, String>;

#[derive(Debug)]
pub enum Action {
    /// Switch to a navbar tab.
    SwitchTab(Tab),
    /// Re-fetch the chapter list.
    Refresh,
    /// Background chapter-list fetch finished.
    ChaptersLoaded(FetchResult<Vec<Chapter>>),
    /// Open the reading view for a surah, optionally focused on a verse.
    OpenChapter { number: u32, focus_verse: Option<u32> },
    /// Background surah fetch finished.
    SurahLoaded { number: u32, result: FetchResult<SurahDetail> },
    /// Open the tafsir detail view for a surah.
    OpenTafsir(u32),
    /// Background tafsir fetch finished.
    TafsirLoaded { number: u32, result: FetchResult<Tafsir> },
    /// Search input changed; re-rank immediately (pure and cheap).
    QueryChanged(String),
    /// Open the search result at the given index.
    OpenSearchResult(usize),
    /// Close the reader/tafsir overlay.
    CloseView,
    Quit,
}

/// What the event loop must do after an update.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    FetchChapters,
    FetchSurah(u32),
    FetchTafsir(u32),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SwitchTab(tab) => {
            app.active_tab = tab;
            app.reader = None;
            app.tafsir = None;
            Effect::None
        }

        Action::Refresh => {
            app.chapters_loading = true;
            app.error = None;
            app.status_message = String::from("Memuat daftar surah...");
            Effect::FetchChapters
        }

        Action::ChaptersLoaded(Ok(chapters)) => {
            info!("Chapter list loaded: {} entries", chapters.len());
            app.chapters = chapters;
            app.chapters_loading = false;
            app.error = None;
            app.status_message = format!("{} surah dimuat", app.chapters.len());
            // Results computed against the old snapshot are stale now
            app.search.run(&app.chapters);
            Effect::None
        }

        Action::ChaptersLoaded(Err(message)) => {
            warn!("Chapter list fetch failed: {message}");
            app.chapters_loading = false;
            app.error = Some(message);
            app.status_message = String::from("Gagal memuat daftar surah");
            Effect::None
        }

        Action::OpenChapter { number, focus_verse } => match app.chapter(number).cloned() {
            Some(chapter) => {
                app.reader = Some(ReaderState {
                    chapter,
                    verses: Vec::new(),
                    loading: true,
                    focus_verse,
                });
                Effect::FetchSurah(number)
            }
            None => {
                warn!("OpenChapter for unknown surah {number}");
                Effect::None
            }
        },

        Action::SurahLoaded { number, result } => {
            // Ignore completions for a reader that was closed or replaced
            // (last-write-wins at the presentation boundary).
            let Some(reader) = app.reader.as_mut() else {
                return Effect::None;
            };
            if reader.chapter.number != number {
                info!("Dropping stale surah fetch for {number}");
                return Effect::None;
            }
            match result {
                Ok(detail) => {
                    reader.verses = detail.verses;
                    reader.loading = false;
                    let status =
                        format!("{} · {} ayat", reader.chapter.latin_name, reader.verses.len());
                    app.status_message = status;
                }
                Err(message) => {
                    warn!("Surah fetch failed for {number}: {message}");
                    reader.loading = false;
                    app.status_message = format!("Gagal memuat surah: {message}");
                }
            }
            Effect::None
        }

        Action::OpenTafsir(number) => match app.chapter(number).cloned() {
            Some(chapter) => {
                app.tafsir = Some(TafsirState {
                    chapter,
                    tafsir: None,
                    loading: true,
                });
                Effect::FetchTafsir(number)
            }
            None => {
                warn!("OpenTafsir for unknown surah {number}");
                Effect::None
            }
        },

        Action::TafsirLoaded { number, result } => {
            let Some(view) = app.tafsir.as_mut() else {
                return Effect::None;
            };
            if view.chapter.number != number {
                info!("Dropping stale tafsir fetch for {number}");
                return Effect::None;
            }
            match result {
                Ok(tafsir) => {
                    view.tafsir = Some(tafsir);
                    view.loading = false;
                    let status = format!("Tafsir {}", view.chapter.latin_name);
                    app.status_message = status;
                }
                Err(message) => {
                    warn!("Tafsir fetch failed for {number}: {message}");
                    view.loading = false;
                    app.status_message = format!("Gagal memuat tafsir: {message}");
                }
            }
            Effect::None
        }

        Action::QueryChanged(query) => {
            app.search.query = query;
            app.search.run(&app.chapters);
            app.status_message = if app.search.query.is_empty() {
                String::from("Ketik nama surah atau arti")
            } else if app.search.results.is_empty() {
                String::from("Tidak ada hasil")
            } else {
                format!("{} hasil", app.search.results.len())
            };
            Effect::None
        }

        Action::OpenSearchResult(index) => {
            let Some(hit) = app.search.results.get(index) else {
                return Effect::None;
            };
            let number = hit.chapter.number;
            let focus_verse = hit.verse;
            update(app, Action::OpenChapter { number, focus_verse })
        }

        Action::CloseView => {
            if app.tafsir.take().is_none() {
                app.reader = None;
            }
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}
