//! # Chapter List Component
//!
//! Scrollable surah index used by both the Home and Tafsir tabs.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ChapterListState` lives in `TuiState`
//! - `ChapterList` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::api::types::Chapter;
use crate::tui::event::TuiEvent;

const PAGE_JUMP: usize = 10;

/// Persistent state for a chapter list.
pub struct ChapterListState {
    pub selected: usize,
    pub list_state: ListState,
}

impl ChapterListState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected: 0,
            list_state,
        }
    }

    fn select(&mut self, index: usize) {
        self.selected = index;
        self.list_state.select(Some(index));
    }

    /// Handle a key event, returning an event when a surah should open.
    pub fn handle_event(
        &mut self,
        event: &TuiEvent,
        chapters: &[Chapter],
    ) -> Option<ChapterListEvent> {
        if chapters.is_empty() {
            return None;
        }
        let last = chapters.len() - 1;
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.select(self.selected.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.select((self.selected + 1).min(last));
                None
            }
            TuiEvent::ScrollPageUp => {
                self.select(self.selected.saturating_sub(PAGE_JUMP));
                None
            }
            TuiEvent::ScrollPageDown => {
                self.select((self.selected + PAGE_JUMP).min(last));
                None
            }
            TuiEvent::Submit => chapters
                .get(self.selected)
                .map(|chapter| ChapterListEvent::Open(chapter.number)),
            _ => None,
        }
    }
}

impl Default for ChapterListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Events emitted by the chapter list.
#[derive(Debug, PartialEq, Eq)]
pub enum ChapterListEvent {
    Open(u32),
}

/// Transient render wrapper.
pub struct ChapterList<'a> {
    state: &'a mut ChapterListState,
    chapters: &'a [Chapter],
    title: &'a str,
}

impl<'a> ChapterList<'a> {
    pub fn new(state: &'a mut ChapterListState, chapters: &'a [Chapter], title: &'a str) -> Self {
        Self {
            state,
            chapters,
            title,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(self.title.to_string())
            .padding(Padding::horizontal(1));

        if self.chapters.is_empty() {
            let empty = Paragraph::new("Daftar surah belum dimuat.\nCtrl+R untuk memuat ulang")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .chapters
            .iter()
            .map(|chapter| {
                let meta = format!(
                    "{} Ayat · {}",
                    chapter.verse_count, chapter.revealed_in
                );
                let line = Line::from(vec![
                    Span::styled(
                        format!("{:>3}  ", chapter.number),
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(
                        format!("{:<16}", chapter.latin_name),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("  {:<12}  ", chapter.name)),
                    Span::styled(meta, Style::default().fg(Color::DarkGray)),
                ]);
                ListItem::new(line)
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
