use super::super::messages::Message;
use super::super::state::App;
use super::{AnalyticsEvent, Effect};
use crate::host::PageHost;
use crate::language::{Language, ViewStateError};
use tracing::{info, warn};

impl App {
    /// Validate, persist and apply a language picked by the user.
    pub fn select_language(
        &mut self,
        code: &str,
        host: &mut dyn PageHost,
    ) -> Result<(), ViewStateError> {
        self.update(Message::LanguageSelected(code.to_string()), host)
    }

    /// Swap every translatable element to its `lang` variant. Elements with
    /// no usable variant keep whatever they currently show.
    pub fn apply_language(&self, lang: Language, host: &mut dyn PageHost) {
        let mut effects = Vec::new();
        self.push_text_variants(lang, &mut effects);
        self.run_effects(effects, host);
    }

    pub(super) fn handle_language_selected(
        &mut self,
        code: &str,
        effects: &mut Vec<Effect>,
    ) -> Result<(), ViewStateError> {
        let lang: Language = code.parse().inspect_err(|err| {
            warn!(%code, "Rejected language selection: {err}");
        })?;
        info!(from = %self.language.current, to = %lang, "Switching language");
        self.language.current = lang;
        effects.push(Effect::PersistLanguage(lang));
        self.push_language_refresh(lang, effects);
        self.track(AnalyticsEvent::LanguageSwitch { language: lang }, effects);
        Ok(())
    }

    pub(super) fn push_language_refresh(&self, lang: Language, effects: &mut Vec<Effect>) {
        effects.push(Effect::HighlightLanguageButton(lang));
        self.push_text_variants(lang, effects);
        effects.push(Effect::SetDirection(lang.direction()));
        effects.push(Effect::SetDocumentLanguage(lang));
    }

    fn push_text_variants(&self, lang: Language, effects: &mut Vec<Effect>) {
        for element in &self.language.elements {
            if let Some(text) = element.variant(lang) {
                effects.push(Effect::SetText {
                    element: element.id.clone(),
                    text: text.to_string(),
                });
            }
        }
    }
}
