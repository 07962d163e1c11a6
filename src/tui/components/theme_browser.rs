//! # Theme Browser Component
//!
//! Two-pane browse screen: themes and ajza on the left, member surahs on the
//! right. The member list is recomputed by the caller from the selected
//! entry's ordinal set (exact membership, score 1.0), so the panes stay in
//! sync without duplicated state.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::core::search::ScoredResult;
use crate::core::themes::{JUZ_TABLE, Theme};
use crate::tui::event::TuiEvent;

/// Which pane has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pane {
    Entries,
    Members,
}

/// Events emitted by the browser.
#[derive(Debug, PartialEq, Eq)]
pub enum ThemeBrowserEvent {
    /// Open the member chapter at this index of the current member list.
    Open(usize),
}

/// Persistent state for the theme browser.
pub struct ThemeBrowserState {
    pub entry_selected: usize,
    pub member_selected: usize,
    pub entry_list_state: ListState,
    pub member_list_state: ListState,
    focus: Pane,
}

impl ThemeBrowserState {
    pub fn new() -> Self {
        let mut entry_list_state = ListState::default();
        entry_list_state.select(Some(0));
        let mut member_list_state = ListState::default();
        member_list_state.select(Some(0));
        Self {
            entry_selected: 0,
            member_selected: 0,
            entry_list_state,
            member_list_state,
            focus: Pane::Entries,
        }
    }

    /// Handle a key event. `entry_count`/`member_count` bound navigation.
    pub fn handle_event(
        &mut self,
        event: &TuiEvent,
        entry_count: usize,
        member_count: usize,
    ) -> Option<ThemeBrowserEvent> {
        match event {
            TuiEvent::CursorLeft => {
                self.focus = Pane::Entries;
                None
            }
            TuiEvent::CursorRight => {
                self.focus = Pane::Members;
                None
            }
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.move_selection(-1, entry_count, member_count);
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.move_selection(1, entry_count, member_count);
                None
            }
            TuiEvent::Submit => match self.focus {
                Pane::Entries => {
                    // Enter on a theme jumps into its member list
                    self.focus = Pane::Members;
                    None
                }
                Pane::Members => {
                    (member_count > 0 && self.member_selected < member_count)
                        .then_some(ThemeBrowserEvent::Open(self.member_selected))
                }
            },
            _ => None,
        }
    }

    fn move_selection(&mut self, delta: i32, entry_count: usize, member_count: usize) {
        match self.focus {
            Pane::Entries => {
                if entry_count == 0 {
                    return;
                }
                self.entry_selected = step(self.entry_selected, delta, entry_count);
                self.entry_list_state.select(Some(self.entry_selected));
                // New entry, new member list
                self.member_selected = 0;
                self.member_list_state.select(Some(0));
            }
            Pane::Members => {
                if member_count == 0 {
                    return;
                }
                self.member_selected = step(self.member_selected, delta, member_count);
                self.member_list_state.select(Some(self.member_selected));
            }
        }
    }
}

impl Default for ThemeBrowserState {
    fn default() -> Self {
        Self::new()
    }
}

fn step(current: usize, delta: i32, count: usize) -> usize {
    if delta < 0 {
        current.saturating_sub(1)
    } else {
        (current + 1).min(count - 1)
    }
}

/// Total number of left-pane entries for a theme table.
pub fn entry_count(themes: &[Theme]) -> usize {
    themes.len() + JUZ_TABLE.len()
}

/// The ordinal set of the left-pane entry at `index`: themes first, then the
/// 30 ajza.
pub fn selected_ordinals(index: usize, themes: &[Theme]) -> Vec<u32> {
    if index < themes.len() {
        themes[index].chapters.clone()
    } else {
        JUZ_TABLE
            .get(index - themes.len())
            .map(|juz| juz.chapters())
            .unwrap_or_default()
    }
}

/// Transient render wrapper.
pub struct ThemeBrowser<'a> {
    state: &'a mut ThemeBrowserState,
    themes: &'a [Theme],
    members: &'a [ScoredResult],
}

impl<'a> ThemeBrowser<'a> {
    pub fn new(
        state: &'a mut ThemeBrowserState,
        themes: &'a [Theme],
        members: &'a [ScoredResult],
    ) -> Self {
        Self {
            state,
            themes,
            members,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::Percentage;
        let [left, right] = Layout::horizontal([Percentage(40), Percentage(60)]).areas(area);

        self.render_entries(frame, left);
        self.render_members(frame, right);
    }

    fn pane_border(&self, pane: Pane) -> Style {
        if self.state.focus == pane {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    fn render_entries(&mut self, frame: &mut Frame, area: Rect) {
        let mut items: Vec<ListItem> = self
            .themes
            .iter()
            .map(|theme| {
                ListItem::new(Line::from(vec![
                    Span::styled(theme.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(
                        format!("  {} surah", theme.chapters.len()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();
        for juz in &JUZ_TABLE {
            items.push(ListItem::new(Line::from(vec![
                Span::raw(format!("Juz {}", juz.number)),
                Span::styled(
                    format!("  surah {}–{}", juz.first_chapter, juz.last_chapter),
                    Style::default().fg(Color::DarkGray),
                ),
            ])));
        }

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.pane_border(Pane::Entries))
                    .title(" Tema & Juz ")
                    .padding(Padding::horizontal(1)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, area, &mut self.state.entry_list_state);
    }

    fn render_members(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.pane_border(Pane::Members))
            .title(" Surah ")
            .padding(Padding::horizontal(1));

        if self.members.is_empty() {
            let empty = Paragraph::new("Tidak ada surah untuk pilihan ini")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .members
            .iter()
            .map(|member| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:>3}  ", member.chapter.number),
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(
                        format!("{:<16}", member.chapter.latin_name),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {} Ayat", member.chapter.verse_count),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, area, &mut self.state.member_list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::search::filter_members;
    use crate::core::themes::default_themes;
    use crate::test_support::sample_chapters;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_entry_count_includes_themes_and_ajza() {
        let themes = default_themes();
        assert_eq!(entry_count(&themes), themes.len() + 30);
    }

    #[test]
    fn test_selected_ordinals_for_theme_and_juz() {
        let themes = default_themes();
        assert_eq!(selected_ordinals(0, &themes), themes[0].chapters);

        // First entry past the themes is juz 1
        let juz1 = selected_ordinals(themes.len(), &themes);
        assert_eq!(juz1, vec![1, 2]);

        // Out of range is empty, not a panic
        assert!(selected_ordinals(entry_count(&themes) + 5, &themes).is_empty());
    }

    #[test]
    fn test_entry_navigation_resets_member_selection() {
        let themes = default_themes();
        let mut state = ThemeBrowserState::new();

        state.handle_event(&TuiEvent::CursorRight, entry_count(&themes), 4);
        state.handle_event(&TuiEvent::CursorDown, entry_count(&themes), 4);
        assert_eq!(state.member_selected, 1);

        state.handle_event(&TuiEvent::CursorLeft, entry_count(&themes), 4);
        state.handle_event(&TuiEvent::CursorDown, entry_count(&themes), 4);
        assert_eq!(state.entry_selected, 1);
        assert_eq!(state.member_selected, 0, "changing entry restarts members");
    }

    #[test]
    fn test_submit_on_entries_moves_focus_then_opens_member() {
        let themes = default_themes();
        let mut state = ThemeBrowserState::new();

        let first = state.handle_event(&TuiEvent::Submit, entry_count(&themes), 3);
        assert_eq!(first, None, "first Enter only moves focus to the members");

        let second = state.handle_event(&TuiEvent::Submit, entry_count(&themes), 3);
        assert_eq!(second, Some(ThemeBrowserEvent::Open(0)));
    }

    #[test]
    fn test_submit_with_no_members_is_silent() {
        let themes = default_themes();
        let mut state = ThemeBrowserState::new();
        state.handle_event(&TuiEvent::CursorRight, entry_count(&themes), 0);
        assert_eq!(state.handle_event(&TuiEvent::Submit, entry_count(&themes), 0), None);
    }

    #[test]
    fn test_render_shows_both_panes() {
        let themes = default_themes();
        let chapters = sample_chapters();
        let members = filter_members(&chapters, &selected_ordinals(0, &themes));
        let mut state = ThemeBrowserState::new();

        let backend = TestBackend::new(90, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| ThemeBrowser::new(&mut state, &themes, &members).render(f, f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Tema & Juz"));
        assert!(text.contains(&themes[0].name));
        assert!(text.contains("Al-Fatihah"), "theme member should render");
    }
}
