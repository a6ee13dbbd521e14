use super::super::super::state::App;
use super::super::Effect;
use crate::host::PageHost;
use tracing::{debug, info, warn};

impl App {
    pub(in crate::app) fn run_effects(&self, effects: Vec<Effect>, host: &mut dyn PageHost) {
        for effect in effects {
            self.run_effect(effect, host);
        }
    }

    fn run_effect(&self, effect: Effect, host: &mut dyn PageHost) {
        match effect {
            Effect::ActivateLink(link_id) => {
                debug!(link = %link_id, "Activating navigation link");
                host.set_active_link(&link_id);
            }
            Effect::PersistLanguage(lang) => {
                // The in-memory selection stands even if the write fails.
                if let Err(err) = host.set_persisted_language(lang) {
                    warn!(%lang, "Failed to persist language: {err:#}");
                }
            }
            Effect::SetText { element, text } => host.apply_text_variant(&element, &text),
            Effect::SetDirection(dir) => host.set_document_direction(dir),
            Effect::SetDocumentLanguage(lang) => host.set_document_language(lang),
            Effect::HighlightLanguageButton(lang) => host.set_active_language_button(lang),
            Effect::SetNavbarScrolled(scrolled) => host.set_navbar_scrolled(scrolled),
            Effect::ScrollTo(offset) => host.scroll_to(offset),
            Effect::Track(event) => match serde_json::to_string(&event) {
                Ok(payload) => info!(target: "analytics", %payload, "Analytics event"),
                Err(err) => warn!("Failed to encode analytics event: {err}"),
            },
        }
    }
}
