//! Mushaf library exports for the binary and tests.

use clap::ValueEnum;

pub mod api;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// The navbar tabs, mirroring the mobile app's bottom navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Tab {
    #[default]
    Home,
    Search,
    Themes,
    Tafsir,
    Qibla,
}

impl Tab {
    /// Cycles to the next tab (wraps around).
    pub fn next(self) -> Tab {
        match self {
            Tab::Home => Tab::Search,
            Tab::Search => Tab::Themes,
            Tab::Themes => Tab::Tafsir,
            Tab::Tafsir => Tab::Qibla,
            Tab::Qibla => Tab::Home,
        }
    }

    /// Cycles to the previous tab (wraps around).
    pub fn previous(self) -> Tab {
        match self {
            Tab::Home => Tab::Qibla,
            Tab::Search => Tab::Home,
            Tab::Themes => Tab::Search,
            Tab::Tafsir => Tab::Themes,
            Tab::Qibla => Tab::Tafsir,
        }
    }

    /// Returns the navbar label for display.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Surah",
            Tab::Search => "Cari",
            Tab::Themes => "Tema",
            Tab::Tafsir => "Tafsir",
            Tab::Qibla => "Kiblat",
        }
    }

    pub fn all() -> [Tab; 5] {
        [Tab::Home, Tab::Search, Tab::Themes, Tab::Tafsir, Tab::Qibla]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle_is_a_loop() {
        let mut tab = Tab::Home;
        for _ in 0..Tab::all().len() {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::Home);
    }

    #[test]
    fn test_tab_next_and_previous_are_inverse() {
        for tab in Tab::all() {
            assert_eq!(tab.next().previous(), tab);
        }
    }
}
