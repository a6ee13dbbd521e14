mod analytics;
mod language;
mod navigation;

use crate::config::AppConfig;
use crate::host::PageHost;
use crate::language::{Direction, Language};
use tracing::{info, warn};

pub(crate) use analytics::SCROLL_DEPTH_MILESTONES;
pub(in crate::app) use analytics::AnalyticsState;
pub(in crate::app) use language::LanguageState;
pub(in crate::app) use navigation::NavigationState;

/// Application context for one page session, composed of sub-models.
///
/// Built once by [`App::bootstrap`] and dropped on page unload; every
/// notification goes through [`App::update`].
pub struct App {
    pub(super) config: AppConfig,
    pub(super) nav: NavigationState,
    pub(super) language: LanguageState,
    pub(super) analytics: AnalyticsState,
}

impl App {
    /// Capture the page structure, restore the persisted language and bring
    /// the document in line with it.
    pub fn bootstrap(mut config: AppConfig, host: &mut dyn PageHost) -> App {
        clamp_config(&mut config);
        let persisted = host.persisted_language();
        let current = Self::load_language(persisted.as_deref(), config.default_language);

        let app = App {
            nav: NavigationState::new(host.sections(), host.links()),
            language: LanguageState {
                current,
                elements: host.translatable_elements(),
            },
            analytics: AnalyticsState::default(),
            config,
        };
        info!(
            sections = app.nav.sections.len(),
            links = app.nav.links.len(),
            elements = app.language.elements.len(),
            language = %current,
            "Bootstrapped view state"
        );

        let effects = app.startup_effects();
        app.run_effects(effects, host);
        app
    }

    /// Resolve a persisted language code. A first visit gets the configured
    /// `default`; an unsupported entry always degrades to English.
    pub fn load_language(persisted: Option<&str>, default: Language) -> Language {
        match persisted {
            None => default,
            Some(code) => code.parse().unwrap_or_else(|_| {
                warn!(%code, fallback = %Language::En, "Ignoring unsupported persisted language");
                Language::En
            }),
        }
    }

    pub fn language(&self) -> Language {
        self.language.current
    }

    pub fn direction(&self) -> Direction {
        self.language.current.direction()
    }

    pub fn active_link(&self) -> Option<&str> {
        self.nav.active_link.as_deref()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

fn clamp_config(config: &mut AppConfig) {
    let sanitize = |value: f32, fallback: f32| {
        if value.is_finite() && value >= 0.0 {
            value
        } else {
            fallback
        }
    };
    let defaults = AppConfig::default();
    config.header_offset = sanitize(config.header_offset, defaults.header_offset);
    config.scroll_margin = sanitize(config.scroll_margin, defaults.scroll_margin);
    config.navbar_scrolled_threshold = sanitize(
        config.navbar_scrolled_threshold,
        defaults.navbar_scrolled_threshold,
    );
}
