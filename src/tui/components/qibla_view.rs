//! # Qibla Component
//!
//! Static bearing panel. There is no magnetometer in a terminal, so instead
//! of the mobile app's animated needle this shows the computed great-circle
//! bearing for the configured coordinates, with a compass-point label and an
//! alignment hint.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::core::qibla::compass_point;
use crate::core::state::QiblaInfo;
use crate::tui::component::Component;

pub struct QiblaView<'a> {
    info: &'a QiblaInfo,
}

impl<'a> QiblaView<'a> {
    pub fn new(info: &'a QiblaInfo) -> Self {
        Self { info }
    }
}

impl Component for QiblaView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 12, area);

        let lines = vec![
            Line::from(Span::styled(
                format!("{:.0}°", self.info.bearing),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                compass_point(self.info.bearing),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(format!("Lokasi: {}", self.info.location_name)),
            Line::from(Span::styled(
                format!("Koordinat: {:.6}°, {:.6}°", self.info.latitude, self.info.longitude),
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
            Line::from(Span::styled(
                format!(
                    "Ukur {:.0}° searah jarum jam dari utara sejati",
                    self.info.bearing
                ),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let panel = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .title(" Arah Kiblat ")
                    .border_style(Style::default().fg(Color::DarkGray))
                    .padding(Padding::uniform(1)),
            );
        frame.render_widget(panel, overlay);
    }
}

/// A rect of at most `width`×`height`, centered in `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [_, vertical, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, rect, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(area.width)),
        Constraint::Fill(1),
    ])
    .areas(vertical);
    rect
}
