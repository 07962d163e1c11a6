//! # Navbar Component
//!
//! Bottom tab bar mirroring the mobile app's navigation: Surah, Cari, Tema,
//! Tafsir, Kiblat. Stateless — the active tab is a prop.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::Tab;
use crate::tui::component::Component;

pub struct Navbar {
    active: Tab,
}

impl Navbar {
    pub fn new(active: Tab) -> Self {
        Self { active }
    }
}

impl Component for Navbar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans: Vec<Span> = Vec::new();
        for tab in Tab::all() {
            let label = format!("  {}  ", tab.label());
            let style = if tab == self.active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(label, style));
        }
        spans.push(Span::styled(
            "   Tab pindah · Enter buka · Esc tutup",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        ));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_navbar_shows_all_tabs() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut navbar = Navbar::new(Tab::Search);

        terminal.draw(|f| navbar.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        for tab in Tab::all() {
            assert!(text.contains(tab.label()), "missing {}", tab.label());
        }
    }
}
