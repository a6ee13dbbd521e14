use super::defaults;
use super::models::{AppConfig, LogLevel};
use crate::language::Language;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    navigation: NavigationConfig,
    #[serde(default)]
    language: LanguageConfig,
    #[serde(default)]
    storage: StorageConfig,
    #[serde(default)]
    analytics: AnalyticsConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            header_offset: tables.navigation.header_offset,
            scroll_margin: tables.navigation.scroll_margin,
            navbar_scrolled_threshold: tables.navigation.navbar_scrolled_threshold,
            throttle_to_frame: tables.navigation.throttle_to_frame,
            default_language: tables.language.default_language,
            cache_dir: tables.storage.cache_dir,
            site_origin: tables.storage.site_origin,
            analytics_enabled: tables.analytics.enabled,
            log_level: tables.logging.log_level,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            navigation: NavigationConfig {
                header_offset: config.header_offset,
                scroll_margin: config.scroll_margin,
                navbar_scrolled_threshold: config.navbar_scrolled_threshold,
                throttle_to_frame: config.throttle_to_frame,
            },
            language: LanguageConfig {
                default_language: config.default_language,
            },
            storage: StorageConfig {
                cache_dir: config.cache_dir.clone(),
                site_origin: config.site_origin.clone(),
            },
            analytics: AnalyticsConfig {
                enabled: config.analytics_enabled,
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct NavigationConfig {
    #[serde(default = "defaults::default_header_offset")]
    header_offset: f32,
    #[serde(default = "defaults::default_scroll_margin")]
    scroll_margin: f32,
    #[serde(default = "defaults::default_navbar_scrolled_threshold")]
    navbar_scrolled_threshold: f32,
    #[serde(default = "defaults::default_throttle_to_frame")]
    throttle_to_frame: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        NavigationConfig {
            header_offset: defaults::default_header_offset(),
            scroll_margin: defaults::default_scroll_margin(),
            navbar_scrolled_threshold: defaults::default_navbar_scrolled_threshold(),
            throttle_to_frame: defaults::default_throttle_to_frame(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
struct LanguageConfig {
    #[serde(default)]
    default_language: Language,
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct StorageConfig {
    #[serde(default = "defaults::default_cache_dir")]
    cache_dir: String,
    #[serde(default = "defaults::default_site_origin")]
    site_origin: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            cache_dir: defaults::default_cache_dir(),
            site_origin: defaults::default_site_origin(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct AnalyticsConfig {
    #[serde(default = "defaults::default_analytics_enabled")]
    enabled: bool,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        AnalyticsConfig {
            enabled: defaults::default_analytics_enabled(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
