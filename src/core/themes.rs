//! Theme and juz lookup tables.
//!
//! Plain immutable data, loaded once at startup. Themes map a display name
//! to the surah ordinals it covers and can be overridden from the config
//! file; the juz table is fixed by the mushaf itself.

/// A thematic grouping of surahs for the browse screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub chapters: Vec<u32>,
}

impl Theme {
    pub fn new(id: &str, name: &str, chapters: &[u32]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            chapters: chapters.to_vec(),
        }
    }
}

/// Built-in themes, used when the config file defines none.
pub fn default_themes() -> Vec<Theme> {
    vec![
        Theme::new("perlindungan", "Perlindungan", &[1, 112, 113, 114]),
        Theme::new("kisah-nabi", "Kisah Para Nabi", &[10, 11, 12, 14, 19, 21, 71]),
        Theme::new("penciptaan", "Penciptaan", &[13, 16, 22, 23, 32]),
        Theme::new("hari-akhir", "Hari Akhir", &[56, 69, 75, 78, 81, 82, 84, 99, 101]),
        Theme::new("keluarga", "Wanita & Keluarga", &[4, 58, 60, 65, 66]),
        Theme::new("jumat", "Amalan Hari Jumat", &[18, 32, 62, 76]),
        Theme::new("malam", "Bacaan Malam", &[36, 44, 55, 56, 67]),
    ]
}

/// One juz: a contiguous run of surah ordinals. Surahs that straddle a juz
/// boundary appear in both neighbors, matching how a printed mushaf labels
/// its margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Juz {
    pub number: u8,
    pub first_chapter: u32,
    pub last_chapter: u32,
}

impl Juz {
    /// Member surah ordinals, in mushaf order.
    pub fn chapters(&self) -> Vec<u32> {
        (self.first_chapter..=self.last_chapter).collect()
    }
}

const fn juz(number: u8, first_chapter: u32, last_chapter: u32) -> Juz {
    Juz {
        number,
        first_chapter,
        last_chapter,
    }
}

/// All 30 ajza of the standard mushaf.
pub const JUZ_TABLE: [Juz; 30] = [
    juz(1, 1, 2),
    juz(2, 2, 2),
    juz(3, 2, 3),
    juz(4, 3, 4),
    juz(5, 4, 4),
    juz(6, 4, 5),
    juz(7, 5, 6),
    juz(8, 6, 7),
    juz(9, 7, 8),
    juz(10, 8, 9),
    juz(11, 9, 11),
    juz(12, 11, 12),
    juz(13, 12, 14),
    juz(14, 15, 16),
    juz(15, 17, 18),
    juz(16, 18, 20),
    juz(17, 21, 22),
    juz(18, 23, 25),
    juz(19, 25, 27),
    juz(20, 27, 29),
    juz(21, 29, 33),
    juz(22, 33, 36),
    juz(23, 36, 39),
    juz(24, 39, 41),
    juz(25, 41, 45),
    juz(26, 46, 51),
    juz(27, 51, 57),
    juz(28, 58, 66),
    juz(29, 67, 77),
    juz(30, 78, 114),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_juz_table_has_thirty_well_formed_entries() {
        assert_eq!(JUZ_TABLE.len(), 30);
        for (index, juz) in JUZ_TABLE.iter().enumerate() {
            assert_eq!(juz.number as usize, index + 1);
            assert!(juz.first_chapter <= juz.last_chapter);
            assert!(juz.last_chapter <= 114);
        }
    }

    #[test]
    fn test_juz_table_covers_every_chapter() {
        let mut covered = [false; 115];
        for juz in &JUZ_TABLE {
            for n in juz.chapters() {
                covered[n as usize] = true;
            }
        }
        for n in 1..=114 {
            assert!(covered[n], "surah {n} missing from juz table");
        }
    }

    #[test]
    fn test_juz_table_is_contiguous() {
        // Each juz starts inside or directly after its predecessor.
        for window in JUZ_TABLE.windows(2) {
            assert!(
                window[1].first_chapter <= window[0].last_chapter + 1,
                "gap between juz {} and {}",
                window[0].number,
                window[1].number
            );
        }
    }

    #[test]
    fn test_juz_amma_spans_the_short_surahs() {
        let amma = JUZ_TABLE[29];
        assert_eq!(amma.first_chapter, 78);
        assert_eq!(amma.last_chapter, 114);
        assert_eq!(amma.chapters().len(), 37);
    }

    #[test]
    fn test_default_themes_reference_valid_ordinals() {
        let themes = default_themes();
        assert!(!themes.is_empty());
        for theme in &themes {
            assert!(!theme.chapters.is_empty(), "theme {} is empty", theme.id);
            for &n in &theme.chapters {
                assert!((1..=114).contains(&n), "theme {} has ordinal {n}", theme.id);
            }
        }
    }
}
