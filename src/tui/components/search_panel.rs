//! # Search Panel Component
//!
//! Input line plus the ranked result list. The panel owns the raw query
//! buffer (presentation state); each edit is reported upward so the reducer
//! can re-rank against the chapter snapshot.
//!
//! ## Responsibilities
//!
//! - Capture query text (append/backspace — queries are short)
//! - Report every edit as `SearchEvent::QueryChanged`
//! - Navigate the result list and open a hit on Enter
//! - Render the explicit "no results" state

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::search::ScoredResult;
use crate::tui::event::TuiEvent;

/// High-level events emitted by the search panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The query text changed; the reducer should re-rank.
    QueryChanged(String),
    /// Open the result at this index.
    Open(usize),
}

/// Persistent state for the search screen.
pub struct SearchPanelState {
    pub buffer: String,
    pub selected: usize,
    pub list_state: ListState,
}

impl SearchPanelState {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            selected: 0,
            list_state: ListState::default(),
        }
    }

    fn select(&mut self, index: usize) {
        self.selected = index;
        self.list_state.select(Some(index));
    }

    /// Handle a key event. `result_count` bounds result navigation.
    pub fn handle_event(&mut self, event: &TuiEvent, result_count: usize) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                self.select(0);
                Some(SearchEvent::QueryChanged(self.buffer.clone()))
            }
            TuiEvent::Backspace => {
                self.buffer.pop()?;
                self.select(0);
                Some(SearchEvent::QueryChanged(self.buffer.clone()))
            }
            TuiEvent::CursorUp => {
                if result_count > 0 {
                    self.select(self.selected.saturating_sub(1));
                }
                None
            }
            TuiEvent::CursorDown => {
                if result_count > 0 {
                    self.select((self.selected + 1).min(result_count - 1));
                }
                None
            }
            TuiEvent::Submit => {
                if result_count > 0 && self.selected < result_count {
                    Some(SearchEvent::Open(self.selected))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

impl Default for SearchPanelState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient render wrapper.
pub struct SearchPanel<'a> {
    state: &'a mut SearchPanelState,
    results: &'a [ScoredResult],
}

impl<'a> SearchPanel<'a> {
    pub fn new(state: &'a mut SearchPanelState, results: &'a [ScoredResult]) -> Self {
        Self { state, results }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [input_area, results_area] = Layout::vertical([Length(3), Min(0)]).areas(area);

        let input_block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .title(" Cari Surah ");
        let input = Paragraph::new(self.state.buffer.as_str())
            .block(input_block)
            .style(Style::default().fg(Color::Green));
        frame.render_widget(input, input_area);

        // Steady cursor right after the typed text
        let cursor_x = input_area.x + 1 + self.state.buffer.width() as u16;
        frame.set_cursor_position((cursor_x.min(input_area.right().saturating_sub(2)), input_area.y + 1));

        self.render_results(frame, results_area);
    }

    fn render_results(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Hasil ")
            .padding(Padding::horizontal(1));

        if self.state.buffer.trim().is_empty() {
            let hint = Paragraph::new(
                "Ketik nama surah, nama Arab, atau artinya.\n\
                 Angka di akhir menjadi petunjuk ayat, mis. \"al baqara 255\".",
            )
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
            frame.render_widget(hint, area);
            return;
        }

        if self.results.is_empty() {
            let empty = Paragraph::new("Tidak ada hasil")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .results
            .iter()
            .map(|result| {
                let mut spans = vec![
                    Span::styled(
                        format!("{:>3}  ", result.chapter.number),
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(
                        format!("{:<16}", result.chapter.latin_name),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("  {}  ", result.chapter.meaning)),
                    Span::styled(
                        format!("skor {:.2}", result.score),
                        Style::default().fg(Color::DarkGray),
                    ),
                ];
                if let Some(verse) = result.verse {
                    spans.push(Span::styled(
                        format!(" · ayat {verse}"),
                        Style::default().fg(Color::Cyan),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
