use super::super::state::App;
use super::Effect;
use crate::language::Language;
use serde::Serialize;

/// Interaction events; only ever logged, never sent anywhere.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    PageView { language: Language },
    LanguageSwitch { language: Language },
    NavigationClick { section: String },
    ScrollDepth { percent: u8 },
}

impl App {
    pub(super) fn track(&self, event: AnalyticsEvent, effects: &mut Vec<Effect>) {
        if self.config.analytics_enabled {
            effects.push(Effect::Track(event));
        }
    }

    pub(super) fn push_page_view(&self, effects: &mut Vec<Effect>) {
        self.track(
            AnalyticsEvent::PageView {
                language: self.language.current,
            },
            effects,
        );
    }
}
