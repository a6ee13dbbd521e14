use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Read the reconciler settings from `path`. A missing or malformed file is
/// not fatal: the page is still reconciled with the built-in geometry and
/// language defaults.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            warn!(
                path = %path.display(),
                "No site config readable ({err}); reconciling with built-in defaults"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            info!(
                path = %path.display(),
                header_offset = cfg.header_offset,
                default_language = %cfg.default_language,
                "Loaded site config"
            );
            cfg
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Site config rejected, reconciling with built-in defaults: {err:#}"
            );
            AppConfig::default()
        }
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let tables: ConfigTables = toml::from_str(contents).context("parsing config tables")?;
    Ok(tables.into())
}

pub fn serialize_config(config: &AppConfig) -> Result<String> {
    toml::to_string(&ConfigTables::from(config)).context("serializing config tables")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;
    use crate::language::Language;

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("").expect("empty config parses");
        assert_eq!(config.header_offset, 100.0);
        assert_eq!(config.scroll_margin, 80.0);
        assert!(config.throttle_to_frame);
        assert_eq!(config.default_language, Language::En);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn tables_override_individual_fields() {
        let config = parse_config(
            r#"
[navigation]
header_offset = 80.0
throttle_to_frame = false

[language]
default_language = "fa"

[logging]
log_level = "warn"
"#,
        )
        .expect("config parses");

        assert_eq!(config.header_offset, 80.0);
        assert_eq!(config.scroll_margin, 80.0);
        assert!(!config.throttle_to_frame);
        assert_eq!(config.default_language, Language::Fa);
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn unsupported_language_is_rejected() {
        assert!(parse_config("[language]\ndefault_language = \"de\"\n").is_err());
    }

    #[test]
    fn serialized_config_parses_back() {
        let mut config = AppConfig::default();
        config.site_origin = "https://example.test".to_string();
        config.analytics_enabled = false;

        let text = serialize_config(&config).expect("serialize");
        let parsed = parse_config(&text).expect("parse");

        assert_eq!(parsed.site_origin, "https://example.test");
        assert!(!parsed.analytics_enabled);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config(Path::new("/nonexistent/ista/config.toml"));
        assert_eq!(config.header_offset, 100.0);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[navigation\nheader_offset = 40.0\n").expect("write config");

        let config = load_config(&path);
        assert_eq!(config.header_offset, 100.0);
        assert_eq!(config.default_language, Language::En);
    }

    #[test]
    fn file_on_disk_is_loaded() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[navigation]\nheader_offset = 64.0\n").expect("write config");

        assert_eq!(load_config(&path).header_offset, 64.0);
    }
}
