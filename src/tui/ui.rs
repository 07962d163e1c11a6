//! Top-level frame layout: title line, active screen, navbar.
//!
//! The reader and tafsir views overlay whatever tab they were opened from,
//! mirroring the mobile app's stacked navigation.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};

use crate::Tab;
use crate::core::search::filter_members;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    ChapterList, Navbar, QiblaView, ReaderView, SearchPanel, TafsirView, ThemeBrowser,
    theme_browser::selected_ordinals,
};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, main_area, navbar_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    let title_text = if app.status_message.is_empty() {
        String::from("Mushaf")
    } else {
        format!("Mushaf | {}", app.status_message)
    };
    frame.render_widget(Span::raw(title_text), title_area);

    draw_main(frame, main_area, app, tui);

    Navbar::new(app.active_tab).render(frame, navbar_area);
}

fn draw_main(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    // Stacked views first: tafsir detail over reader over tabs
    if let Some(view) = &app.tafsir {
        TafsirView::new(&mut tui.tafsir_view, view).render(frame, area);
        return;
    }
    if let Some(reader) = &app.reader {
        ReaderView::new(&mut tui.reader_view, reader, &app.audio_base_url).render(frame, area);
        return;
    }

    // A failed chapter-list fetch leaves nothing to browse
    if let Some(error_msg) = &app.error {
        if app.chapters.is_empty() {
            draw_error_view(frame, area, error_msg);
            return;
        }
    }

    match app.active_tab {
        Tab::Home => {
            if app.chapters_loading && app.chapters.is_empty() {
                draw_loading_view(frame, area);
            } else {
                ChapterList::new(&mut tui.home_list, &app.chapters, " Surah ").render(frame, area);
            }
        }
        Tab::Search => {
            SearchPanel::new(&mut tui.search_panel, &app.search.results).render(frame, area);
        }
        Tab::Themes => {
            let ordinals = selected_ordinals(tui.theme_browser.entry_selected, &app.themes);
            let members = filter_members(&app.chapters, &ordinals);
            ThemeBrowser::new(&mut tui.theme_browser, &app.themes, &members).render(frame, area);
        }
        Tab::Tafsir => {
            ChapterList::new(&mut tui.tafsir_list, &app.chapters, " Tafsir Al-Qur'an ")
                .render(frame, area);
        }
        Tab::Qibla => {
            QiblaView::new(&app.qibla).render(frame, area);
        }
    }
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str) {
    let error_paragraph = Paragraph::new(format!("{error_msg}\n\nCtrl+R untuk mencoba lagi"))
        .block(Block::bordered().title(" KESALAHAN "))
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center);
    frame.render_widget(error_paragraph, area);
}

fn draw_loading_view(frame: &mut Frame, area: Rect) {
    let loading = Paragraph::new("Memuat daftar surah...")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::bordered());
    frame.render_widget(loading, area);
}
