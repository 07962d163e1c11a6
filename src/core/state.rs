//! # Application State
//!
//! Core business state for Mushaf. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn QuranSource>   // remote data source
//! ├── chapters: Vec<Chapter>         // immutable snapshot once loaded
//! ├── chapters_loading: bool         // waiting for the chapter list
//! ├── active_tab: Tab                // which screen is showing
//! ├── status_message: String         // status bar text
//! ├── error: Option<String>          // fatal fetch error
//! ├── reader: Option<ReaderState>    // open surah, overlays any tab
//! ├── tafsir: Option<TafsirState>    // open tafsir detail
//! ├── search: SearchState            // query + ranked results + engine
//! ├── themes: Vec<Theme>             // browse tables from config
//! └── qibla: QiblaInfo               // computed bearing for the qibla tab
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::Tab;
use crate::api::client::QuranSource;
use crate::api::types::{Chapter, Tafsir, Verse};
use crate::core::config::ResolvedConfig;
use crate::core::qibla::qibla_bearing;
use crate::core::search::{ScoredResult, SearchEngine};
use crate::core::themes::Theme;

pub struct App {
    pub source: Arc<dyn QuranSource>,
    pub chapters: Vec<Chapter>,
    pub chapters_loading: bool,
    pub active_tab: Tab,
    pub status_message: String,
    pub error: Option<String>,
    pub reader: Option<ReaderState>,
    pub tafsir: Option<TafsirState>,
    pub search: SearchState,
    pub themes: Vec<Theme>,
    pub audio_base_url: String,
    pub qibla: QiblaInfo,
}

/// An open surah reading view.
pub struct ReaderState {
    pub chapter: Chapter,
    pub verses: Vec<Verse>,
    pub loading: bool,
    /// Verse to scroll to once loaded (from a search hit's trailing numeral).
    pub focus_verse: Option<u32>,
}

/// An open tafsir detail view.
pub struct TafsirState {
    pub chapter: Chapter,
    pub tafsir: Option<Tafsir>,
    pub loading: bool,
}

/// Search screen state: the live query and its ranked results. The engine
/// rides along so its DP scratch rows survive between keystrokes.
#[derive(Default)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<ScoredResult>,
    engine: SearchEngine,
}

impl SearchState {
    /// Re-ranks `chapters` against the current query.
    pub fn run(&mut self, chapters: &[Chapter]) {
        self.results = self.engine.search(chapters, &self.query);
    }
}

/// Everything the qibla tab renders. Computed once from config; the
/// coordinates never change at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct QiblaInfo {
    pub latitude: f64,
    pub longitude: f64,
    pub location_name: String,
    pub bearing: f64,
}

impl App {
    pub fn new(source: Arc<dyn QuranSource>, config: &ResolvedConfig) -> Self {
        Self {
            source,
            chapters: Vec::new(),
            chapters_loading: false,
            active_tab: config.start_tab,
            status_message: String::from("Al-Qur'an Digital"),
            error: None,
            reader: None,
            tafsir: None,
            search: SearchState::default(),
            themes: config.themes.clone(),
            audio_base_url: config.audio_base_url.clone(),
            qibla: QiblaInfo {
                latitude: config.latitude,
                longitude: config.longitude,
                location_name: config.location_name.clone(),
                bearing: qibla_bearing(config.latitude, config.longitude),
            },
        }
    }

    /// The chapter with the given ordinal, if the snapshot holds it.
    pub fn chapter(&self, number: u32) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.number == number)
    }
}
