pub(crate) fn default_header_offset() -> f32 {
    100.0
}

pub(crate) fn default_scroll_margin() -> f32 {
    80.0
}

pub(crate) fn default_navbar_scrolled_threshold() -> f32 {
    100.0
}

pub(crate) fn default_throttle_to_frame() -> bool {
    true
}

pub(crate) fn default_cache_dir() -> String {
    ".cache".to_string()
}

pub(crate) fn default_site_origin() -> String {
    "https://ista.local".to_string()
}

pub(crate) fn default_analytics_enabled() -> bool {
    true
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}
