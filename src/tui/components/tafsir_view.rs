//! # Tafsir Detail Component
//!
//! Commentary reading view: the surah introduction ("Pendahuluan") followed
//! by one card per ayah. The API serves the bodies with embedded HTML, so
//! every block goes through `clean_html` and is pre-wrapped with `textwrap`
//! to get exact card heights for the scroll view.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::types::clean_html;
use crate::core::state::TafsirState;
use crate::tui::event::TuiEvent;

/// Persistent scroll state for the tafsir view.
pub struct TafsirViewState {
    pub scroll_state: ScrollViewState,
}

impl TafsirViewState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
        }
    }

    pub fn reset(&mut self) {
        self.scroll_state = ScrollViewState::default();
    }

    pub fn handle_event(&mut self, event: &TuiEvent) {
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::CursorDown | TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => {}
        }
    }
}

impl Default for TafsirViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient render wrapper.
pub struct TafsirView<'a> {
    state: &'a mut TafsirViewState,
    view: &'a TafsirState,
}

impl<'a> TafsirView<'a> {
    pub fn new(state: &'a mut TafsirViewState, view: &'a TafsirState) -> Self {
        Self { state, view }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        use ratatui::layout::Constraint::{Length, Min};
        let [header_area, body_area] =
            ratatui::layout::Layout::vertical([Length(4), Min(0)]).areas(area);

        self.render_header(frame, header_area);

        if self.view.loading {
            let loading = Paragraph::new("Memuat tafsir...")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::bordered());
            frame.render_widget(loading, body_area);
            return;
        }

        let Some(tafsir) = &self.view.tafsir else {
            let missing = Paragraph::new("Tafsir tidak tersedia")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::bordered());
            frame.render_widget(missing, body_area);
            return;
        };

        let content_width = body_area.width.saturating_sub(1);
        let inner_width = content_width.saturating_sub(2).max(1) as usize;

        // (title, pre-wrapped body lines) per card
        let mut cards: Vec<(String, Vec<String>)> = Vec::with_capacity(tafsir.entries.len() + 1);
        let introduction = clean_html(&tafsir.description);
        if !introduction.trim().is_empty() {
            cards.push((" Pendahuluan ".to_string(), wrap_body(&introduction, inner_width)));
        }
        for entry in &tafsir.entries {
            let body = clean_html(&entry.text);
            cards.push((format!(" Ayat {} ", entry.verse), wrap_body(&body, inner_width)));
        }

        let total_height: u16 = cards.iter().map(|(_, lines)| lines.len() as u16 + 2).sum();
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (title, lines) in cards {
            let height = lines.len() as u16 + 2;
            let text = Text::from(lines.into_iter().map(Line::from).collect::<Vec<_>>());
            let paragraph = Paragraph::new(text).block(
                Block::bordered()
                    .title(title)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
            scroll_view.render_widget(paragraph, Rect::new(0, y_offset, content_width, height));
            y_offset += height;
        }

        frame.render_stateful_widget(scroll_view, body_area, &mut self.state.scroll_state);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let chapter = &self.view.chapter;
        let header = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    format!("Tafsir {}", chapter.latin_name),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::raw(chapter.name.clone()),
            ]),
            Line::from(Span::styled(
                format!("{} Ayat · {} · Tafsir Tahlili", chapter.verse_count, chapter.revealed_in),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));
        frame.render_widget(header, area);
    }
}

/// Wraps a cleaned body into display lines, preserving the paragraph breaks
/// that `<br>` conversion produced.
fn wrap_body(body: &str, width: usize) -> Vec<String> {
    let options = textwrap::Options::new(width.max(1));
    body.lines()
        .flat_map(|line| {
            if line.is_empty() {
                vec![String::new()]
            } else {
                textwrap::wrap(line, &options)
                    .into_iter()
                    .map(|cow| cow.into_owned())
                    .collect()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{Tafsir, TafsirEntry};
    use crate::test_support::chapter;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn open_tafsir() -> TafsirState {
        TafsirState {
            chapter: chapter(67, "الملك", "Al-Mulk", "Kerajaan", 30),
            tafsir: Some(Tafsir {
                name: "الملك".to_string(),
                latin_name: "Al-Mulk".to_string(),
                verse_count: 30,
                revealed_in: Default::default(),
                description: "Surah <i>Al-Mulk</i> terdiri dari 30 ayat.".to_string(),
                entries: vec![TafsirEntry {
                    verse: 1,
                    text: "Maha Berkah Allah<br>yang menguasai segala kerajaan.".to_string(),
                }],
            }),
            loading: false,
        }
    }

    #[test]
    fn test_wrap_body_preserves_breaks_and_width() {
        let lines = wrap_body("satu dua tiga empat lima", 9);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.chars().count() <= 9));

        let lines = wrap_body("atas\nbawah", 20);
        assert_eq!(lines, vec!["atas".to_string(), "bawah".to_string()]);
    }

    #[test]
    fn test_render_shows_cleaned_commentary() {
        let view = open_tafsir();
        let mut state = TafsirViewState::new();

        let backend = TestBackend::new(70, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| TafsirView::new(&mut state, &view).render(f, f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Tafsir Al-Mulk"));
        assert!(text.contains("Pendahuluan"));
        assert!(text.contains("Ayat 1"));
        assert!(!text.contains("<i>"), "markup must be stripped");
    }

    #[test]
    fn test_render_loading_state() {
        let mut view = open_tafsir();
        view.loading = true;
        view.tafsir = None;
        let mut state = TafsirViewState::new();

        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| TafsirView::new(&mut state, &view).render(f, f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Memuat tafsir"));
    }
}
