//! HTTP client for the public Qur'an endpoints.
//!
//! Two hosts are involved, mirroring what the app actually consumes:
//! the chapter/verse API (`{surah_base}/surah`, `{surah_base}/surah/{n}`)
//! and the tafsir/audio host (`{tafsir_base}/tafsir/{n}`, audio files under
//! `{audio_base}/audio/ayat/`). Base URLs are injectable so integration
//! tests can point the client at a mock server.
//!
//! The [`QuranSource`] trait is the seam between the TUI and the network:
//! the event loop only ever holds an `Arc<dyn QuranSource>`, so tests can
//! substitute a fake without touching reqwest.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use std::fmt;

use super::types::{Chapter, SurahDetail, Tafsir, TafsirResponse};

pub const DEFAULT_SURAH_BASE_URL: &str = "https://quran-api.santrikoding.com/api";
pub const DEFAULT_TAFSIR_BASE_URL: &str = "https://equran.id/api/v2";
pub const DEFAULT_AUDIO_BASE_URL: &str = "https://equran.id";

/// Errors that can occur while talking to the endpoints.
/// Variants carry enough info to determine retryability (future use).
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (timeout, DNS, connection refused). Retryable.
    Network(String),
    /// Endpoint returned an error response. Retryable if status >= 500 or 429.
    Api { status: u16, message: String },
    /// Failed to parse the response body. Not retryable.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Everything the app needs from the remote APIs.
#[async_trait]
pub trait QuranSource: Send + Sync {
    /// Returns the name of the source.
    fn name(&self) -> &str;

    /// Fetches the full 114-chapter list.
    async fn chapters(&self) -> Result<Vec<Chapter>, ApiError>;

    /// Fetches one chapter with its verses.
    async fn surah(&self, number: u32) -> Result<SurahDetail, ApiError>;

    /// Fetches the tahlili commentary for one chapter.
    async fn tafsir(&self, number: u32) -> Result<Tafsir, ApiError>;
}

/// Per-verse recitation URL: both numbers zero-padded to three digits,
/// e.g. `.../audio/ayat/arabic-002-255.mp3`.
pub fn verse_audio_url(audio_base: &str, surah: u32, ayah: u32) -> String {
    format!("{audio_base}/audio/ayat/arabic-{surah:03}-{ayah:03}.mp3")
}

/// Client for the production endpoints.
pub struct QuranApiClient {
    surah_base_url: String,
    tafsir_base_url: String,
    client: reqwest::Client,
}

impl QuranApiClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// * `surah_base_url` - Optional chapter/verse API base (defaults to the public host)
    /// * `tafsir_base_url` - Optional tafsir API base (defaults to the public host)
    pub fn new(surah_base_url: Option<String>, tafsir_base_url: Option<String>) -> Self {
        Self {
            surah_base_url: surah_base_url.unwrap_or_else(|| DEFAULT_SURAH_BASE_URL.to_string()),
            tafsir_base_url: tafsir_base_url.unwrap_or_else(|| DEFAULT_TAFSIR_BASE_URL.to_string()),
            client: reqwest::Client::new(),
        }
    }

    /// GETs `url` and deserializes the JSON body, mapping transport, status,
    /// and decode failures onto [`ApiError`].
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        info!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        debug!("Response status for {url}: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("API error: {} - {}", status, err_body);
            return Err(ApiError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(format!("{url}: {e}")))
    }
}

#[async_trait]
impl QuranSource for QuranApiClient {
    fn name(&self) -> &str {
        "equran"
    }

    async fn chapters(&self) -> Result<Vec<Chapter>, ApiError> {
        let url = format!("{}/surah", self.surah_base_url);
        let chapters: Vec<Chapter> = self.get_json(&url).await?;
        info!("Fetched {} chapters", chapters.len());
        Ok(chapters)
    }

    async fn surah(&self, number: u32) -> Result<SurahDetail, ApiError> {
        let url = format!("{}/surah/{number}", self.surah_base_url);
        let detail: SurahDetail = self.get_json(&url).await?;
        info!(
            "Fetched surah {} with {} verses",
            detail.chapter.number,
            detail.verses.len()
        );
        Ok(detail)
    }

    async fn tafsir(&self, number: u32) -> Result<Tafsir, ApiError> {
        let url = format!("{}/tafsir/{number}", self.tafsir_base_url);
        let response: TafsirResponse = self.get_json(&url).await?;
        debug!("Tafsir envelope: code={} message={}", response.code, response.message);
        Ok(response.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verse_audio_url_pads_to_three_digits() {
        assert_eq!(
            verse_audio_url("https://equran.id", 1, 1),
            "https://equran.id/audio/ayat/arabic-001-001.mp3"
        );
        assert_eq!(
            verse_audio_url("https://equran.id", 2, 255),
            "https://equran.id/audio/ayat/arabic-002-255.mp3"
        );
        assert_eq!(
            verse_audio_url("https://equran.id", 114, 6),
            "https://equran.id/audio/ayat/arabic-114-006.mp3"
        );
    }

    #[test]
    fn test_client_defaults_to_public_hosts() {
        let client = QuranApiClient::new(None, None);
        assert_eq!(client.surah_base_url, DEFAULT_SURAH_BASE_URL);
        assert_eq!(client.tafsir_base_url, DEFAULT_TAFSIR_BASE_URL);
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Api {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 404): not found");

        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "network error: connection refused");
    }
}
