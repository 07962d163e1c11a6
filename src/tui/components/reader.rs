//! # Reader Component
//!
//! The surah reading view: one bordered card per ayah (Arabic text,
//! transliteration, translation, recitation URL) inside a scroll view, with
//! an introduction card built from the chapter description.
//!
//! Card heights are computed with `Paragraph::line_count` and cached per
//! frame; a search hit's verse hint is honored once by scrolling the target
//! card into view after the verses arrive.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::client::verse_audio_url;
use crate::api::types::{Verse, clean_html};
use crate::core::state::ReaderState;
use crate::tui::event::TuiEvent;

/// Persistent scroll state for the reader.
pub struct ReaderViewState {
    pub scroll_state: ScrollViewState,
    /// True until a freshly opened surah has applied its verse focus.
    focus_pending: bool,
}

impl ReaderViewState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            focus_pending: false,
        }
    }

    /// Called when a surah is opened: back to the top, focus not yet applied.
    pub fn reset(&mut self) {
        self.scroll_state.set_offset(Position { x: 0, y: 0 });
        self.focus_pending = true;
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

impl Default for ReaderViewState {
    fn default() -> Self {
        Self::new()
    }
}

struct RenderedCard<'a> {
    paragraph: Paragraph<'a>,
    height: u16,
    /// Verse number, None for the introduction card.
    verse: Option<u32>,
}

/// Transient render wrapper.
pub struct ReaderView<'a> {
    state: &'a mut ReaderViewState,
    reader: &'a ReaderState,
    audio_base_url: &'a str,
}

impl<'a> ReaderView<'a> {
    pub fn new(
        state: &'a mut ReaderViewState,
        reader: &'a ReaderState,
        audio_base_url: &'a str,
    ) -> Self {
        Self {
            state,
            reader,
            audio_base_url,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        use ratatui::layout::Constraint::{Length, Min};
        let [header_area, body_area] =
            ratatui::layout::Layout::vertical([Length(4), Min(0)]).areas(area);

        self.render_header(frame, header_area);

        if self.reader.loading {
            let loading = Paragraph::new("Memuat ayat...")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::bordered());
            frame.render_widget(loading, body_area);
            return;
        }

        let content_width = body_area.width.saturating_sub(1);
        let cards = self.build_cards(content_width);
        let total_height: u16 = cards.iter().map(|c| c.height).sum();

        // Apply the verse hint exactly once, after the verses are in.
        if self.state.focus_pending {
            if let Some(target) = self.reader.focus_verse {
                let mut y_offset: u16 = 0;
                for card in &cards {
                    if card.verse == Some(target) {
                        self.state.scroll_state.set_offset(Position { x: 0, y: y_offset });
                        break;
                    }
                    y_offset += card.height;
                }
            }
            self.state.focus_pending = false;
        }

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for card in &cards {
            let rect = Rect::new(0, y_offset, content_width, card.height);
            scroll_view.render_widget(card.paragraph.clone(), rect);
            y_offset += card.height;
        }

        frame.render_stateful_widget(scroll_view, body_area, &mut self.state.scroll_state);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let chapter = &self.reader.chapter;
        let header = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    chapter.latin_name.clone(),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::raw(chapter.name.clone()),
            ]),
            Line::from(Span::styled(
                format!(
                    "{} · {} Ayat · {}",
                    chapter.meaning, chapter.verse_count, chapter.revealed_in
                ),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));
        frame.render_widget(header, area);
    }

    fn build_cards(&self, width: u16) -> Vec<RenderedCard<'a>> {
        let inner_width = width.saturating_sub(2);
        let mut cards = Vec::with_capacity(self.reader.verses.len() + 1);

        let description = clean_html(&self.reader.chapter.description);
        if !description.trim().is_empty() {
            let paragraph = Paragraph::new(description)
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true })
                .block(Block::bordered().title(" Tentang Surah "));
            let height = paragraph.line_count(inner_width) as u16;
            cards.push(RenderedCard {
                paragraph,
                height,
                verse: None,
            });
        }

        for verse in &self.reader.verses {
            let card = self.verse_card(verse);
            let height = card.line_count(inner_width) as u16;
            cards.push(RenderedCard {
                paragraph: card,
                height,
                verse: Some(verse.number),
            });
        }

        cards
    }

    fn verse_card(&self, verse: &Verse) -> Paragraph<'a> {
        let audio = verse_audio_url(self.audio_base_url, self.reader.chapter.number, verse.number);
        let text = Text::from(vec![
            Line::from(verse.arabic.clone()).alignment(Alignment::Right),
            Line::from(Span::styled(
                clean_html(&verse.transliteration),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )),
            Line::from(verse.translation.clone()),
            Line::from(Span::styled(
                format!("♪ {audio}"),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            )),
        ]);

        Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .block(
                Block::bordered()
                    .title(format!(" Ayat {} ", verse.number))
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
    }
}
