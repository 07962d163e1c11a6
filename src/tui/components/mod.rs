//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Two patterns are in use:
//!
//! - **Stateless (props-based)**: `Navbar` and `QiblaView` receive all data
//!   as parameters and render it.
//! - **Stateful (event-driven)**: the lists and reading views keep a
//!   persistent state struct in `TuiState` (selection, scroll offset) and a
//!   transient wrapper is built each frame with borrowed state plus props.
//!
//! Each component file co-locates its state type, event type, rendering,
//! event handling, and tests.

pub mod chapter_list;
pub mod navbar;
pub mod qibla_view;
pub mod reader;
pub mod search_panel;
pub mod tafsir_view;
pub mod theme_browser;

pub use chapter_list::{ChapterList, ChapterListEvent, ChapterListState};
pub use navbar::Navbar;
pub use qibla_view::QiblaView;
pub use reader::{ReaderView, ReaderViewState};
pub use search_panel::{SearchEvent, SearchPanel, SearchPanelState};
pub use tafsir_view::{TafsirView, TafsirViewState};
pub use theme_browser::{ThemeBrowser, ThemeBrowserEvent, ThemeBrowserState};
