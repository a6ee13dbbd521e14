use crate::language::{Direction, Language};

mod analytics;
mod core;
mod language;
mod scroll;

pub use analytics::AnalyticsEvent;
pub use scroll::resolve_active_section;

/// Decisions computed by the reducer, applied to the host by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Effect {
    ActivateLink(String),
    PersistLanguage(Language),
    SetText { element: String, text: String },
    SetDirection(Direction),
    SetDocumentLanguage(Language),
    HighlightLanguageButton(Language),
    SetNavbarScrolled(bool),
    ScrollTo(f32),
    Track(AnalyticsEvent),
}
