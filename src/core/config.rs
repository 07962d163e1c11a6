//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.mushaf/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::Tab;
use crate::api::client::{DEFAULT_AUDIO_BASE_URL, DEFAULT_SURAH_BASE_URL, DEFAULT_TAFSIR_BASE_URL};
use crate::core::themes::{Theme, default_themes};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MushafConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub qibla: QiblaConfig,
    #[serde(default)]
    pub themes: Vec<ThemeEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_tab: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub surah_base_url: Option<String>,
    pub tafsir_base_url: Option<String>,
    pub audio_base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QiblaConfig {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub location_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeEntry {
    pub id: String,
    pub name: String,
    pub chapters: Vec<u32>,
}

// ============================================================================
// Defaults
// ============================================================================

// Bandung, West Java — the region the mobile source was written for.
pub const DEFAULT_LATITUDE: f64 = -6.9175;
pub const DEFAULT_LONGITUDE: f64 = 107.6191;
pub const DEFAULT_LOCATION_NAME: &str = "Bandung, Jawa Barat";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_tab: Tab,
    pub surah_base_url: String,
    pub tafsir_base_url: String,
    pub audio_base_url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub location_name: String,
    pub themes: Vec<Theme>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.mushaf/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".mushaf").join("config.toml"))
}

/// Load config from `~/.mushaf/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MushafConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MushafConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MushafConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MushafConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: MushafConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Mushaf Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_tab = "home"                  # "home", "search", "themes", "tafsir", "qibla"

# [api]
# surah_base_url = "https://quran-api.santrikoding.com/api"
# tafsir_base_url = "https://equran.id/api/v2"
# audio_base_url = "https://equran.id"

# [qibla]
# latitude = -6.9175                  # Observer coordinates for the qibla bearing
# longitude = 107.6191
# location_name = "Bandung, Jawa Barat"

# Themes replace the built-in list when any are defined.
# [[themes]]
# id = "perlindungan"
# name = "Perlindungan"
# chapters = [1, 112, 113, 114]
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_tab` and `cli_surah_api` are from CLI flags (None = not specified).
pub fn resolve(
    config: &MushafConfig,
    cli_tab: Option<Tab>,
    cli_surah_api: Option<&str>,
) -> ResolvedConfig {
    // Start tab: CLI → env → config → default
    let start_tab = cli_tab
        .or_else(|| std::env::var("MUSHAF_START_TAB").ok().and_then(|s| parse_tab(&s)))
        .or_else(|| config.general.start_tab.as_deref().and_then(parse_tab))
        .unwrap_or_default();

    // Surah API base URL: CLI → env → config → default
    let surah_base_url = cli_surah_api
        .map(|s| s.to_string())
        .or_else(|| std::env::var("MUSHAF_SURAH_API").ok())
        .or_else(|| config.api.surah_base_url.clone())
        .unwrap_or_else(|| DEFAULT_SURAH_BASE_URL.to_string());

    // Tafsir API base URL: env → config → default
    let tafsir_base_url = std::env::var("MUSHAF_TAFSIR_API")
        .ok()
        .or_else(|| config.api.tafsir_base_url.clone())
        .unwrap_or_else(|| DEFAULT_TAFSIR_BASE_URL.to_string());

    // Audio base URL: env → config → default
    let audio_base_url = std::env::var("MUSHAF_AUDIO_BASE")
        .ok()
        .or_else(|| config.api.audio_base_url.clone())
        .unwrap_or_else(|| DEFAULT_AUDIO_BASE_URL.to_string());

    // Themes: config file entries replace the built-ins entirely when present
    let themes = if config.themes.is_empty() {
        default_themes()
    } else {
        config
            .themes
            .iter()
            .map(|entry| Theme {
                id: entry.id.clone(),
                name: entry.name.clone(),
                chapters: entry.chapters.clone(),
            })
            .collect()
    };

    ResolvedConfig {
        start_tab,
        surah_base_url,
        tafsir_base_url,
        audio_base_url,
        latitude: config.qibla.latitude.unwrap_or(DEFAULT_LATITUDE),
        longitude: config.qibla.longitude.unwrap_or(DEFAULT_LONGITUDE),
        location_name: config
            .qibla
            .location_name
            .clone()
            .unwrap_or_else(|| DEFAULT_LOCATION_NAME.to_string()),
        themes,
    }
}

/// Parses a tab name the way clap would ("home", "search", ...), ignoring case.
fn parse_tab(value: &str) -> Option<Tab> {
    Tab::from_str(value, true).ok()
}
