//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::client::{ApiError, QuranSource};
use crate::api::types::{Chapter, RevelationPlace, SurahDetail, Tafsir};
use crate::core::config::{MushafConfig, resolve};
use crate::core::state::App;

/// A no-op source for tests that don't need real API calls.
pub struct NoopSource;

#[async_trait]
impl QuranSource for NoopSource {
    fn name(&self) -> &str {
        "noop"
    }

    async fn chapters(&self) -> Result<Vec<Chapter>, ApiError> {
        Ok(Vec::new())
    }

    async fn surah(&self, _number: u32) -> Result<SurahDetail, ApiError> {
        Err(ApiError::Network("noop source".to_string()))
    }

    async fn tafsir(&self, _number: u32) -> Result<Tafsir, ApiError> {
        Err(ApiError::Network("noop source".to_string()))
    }
}

/// Creates a test App with a NoopSource and default config.
pub fn test_app() -> App {
    let resolved = resolve(&MushafConfig::default(), None, None);
    App::new(Arc::new(NoopSource), &resolved)
}

/// Builds a chapter record the way the list endpoint would serve it.
pub fn chapter(number: u32, name: &str, latin_name: &str, meaning: &str, verse_count: u32) -> Chapter {
    Chapter {
        number,
        name: name.to_string(),
        latin_name: latin_name.to_string(),
        verse_count,
        revealed_in: RevelationPlace::Mekah,
        meaning: meaning.to_string(),
        description: String::new(),
        audio: String::new(),
    }
}

/// A small, realistic chapter snapshot for ranker and reducer tests.
pub fn sample_chapters() -> Vec<Chapter> {
    vec![
        chapter(1, "الفاتحة", "Al-Fatihah", "Pembukaan", 7),
        chapter(2, "البقرة", "Al-Baqarah", "Sapi Betina", 286),
        chapter(10, "يونس", "Yunus", "Nabi Yunus", 109),
        chapter(12, "يوسف", "Yusuf", "Nabi Yusuf", 111),
        chapter(36, "يس", "Yasin", "Yaasiin", 83),
        chapter(67, "الملك", "Al-Mulk", "Kerajaan", 30),
        chapter(112, "الإخلاص", "Al-Ikhlas", "Ikhlas", 4),
        chapter(114, "الناس", "An-Nas", "Manusia", 6),
    ]
}
