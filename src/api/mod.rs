pub mod client;
pub mod types;

pub use client::{ApiError, QuranApiClient, QuranSource, verse_audio_url};
pub use types::{Chapter, RevelationPlace, SurahDetail, Tafsir, TafsirEntry, Verse, clean_html};
