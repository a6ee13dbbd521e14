use crate::language::Language;
use serde::Deserialize;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default = "crate::config::defaults::default_header_offset")]
    pub header_offset: f32,
    #[serde(default = "crate::config::defaults::default_scroll_margin")]
    pub scroll_margin: f32,
    #[serde(default = "crate::config::defaults::default_navbar_scrolled_threshold")]
    pub navbar_scrolled_threshold: f32,
    #[serde(default = "crate::config::defaults::default_throttle_to_frame")]
    pub throttle_to_frame: bool,
    #[serde(default)]
    pub default_language: Language,
    #[serde(default = "crate::config::defaults::default_cache_dir")]
    pub cache_dir: String,
    #[serde(default = "crate::config::defaults::default_site_origin")]
    pub site_origin: String,
    #[serde(default = "crate::config::defaults::default_analytics_enabled")]
    pub analytics_enabled: bool,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            header_offset: crate::config::defaults::default_header_offset(),
            scroll_margin: crate::config::defaults::default_scroll_margin(),
            navbar_scrolled_threshold:
                crate::config::defaults::default_navbar_scrolled_threshold(),
            throttle_to_frame: crate::config::defaults::default_throttle_to_frame(),
            default_language: Language::default(),
            cache_dir: crate::config::defaults::default_cache_dir(),
            site_origin: crate::config::defaults::default_site_origin(),
            analytics_enabled: crate::config::defaults::default_analytics_enabled(),
            log_level: crate::config::defaults::default_log_level(),
        }
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Debug
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
