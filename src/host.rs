//! Capability surface between the reconciler and whatever renders the page.
//!
//! `PageHost` is everything the core may read from or do to the document.
//! `HeadlessHost` implements it over a static `PageLayout`, keeps the
//! resulting visible state in memory and streams each instruction as a JSON
//! line to its writer.

use crate::language::{Direction, Language};
use crate::page::{NavLink, PageLayout, Section, TranslatableElement};
use crate::store::{KeyValueStore, LANGUAGE_KEY};
use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use tracing::warn;

pub trait PageHost {
    fn sections(&self) -> Vec<Section>;
    fn links(&self) -> Vec<NavLink>;
    fn translatable_elements(&self) -> Vec<TranslatableElement>;
    fn persisted_language(&self) -> Option<String>;
    fn set_persisted_language(&mut self, lang: Language) -> Result<()>;
    /// Activate `link_id` and deactivate every other link in one step.
    fn set_active_link(&mut self, link_id: &str);
    fn apply_text_variant(&mut self, element_id: &str, text: &str);
    fn set_document_direction(&mut self, dir: Direction);
    fn set_document_language(&mut self, lang: Language);
    fn set_active_language_button(&mut self, lang: Language);
    fn set_navbar_scrolled(&mut self, scrolled: bool);
    fn scroll_to(&mut self, offset: f32);
}

/// One presentation-layer instruction, as written to the output stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Instruction {
    SetActiveLink { id: String },
    SetText { element: String, text: String },
    SetDirection { dir: Direction },
    SetLanguage { lang: Language },
    SetLanguageButton { lang: Language },
    SetNavbarScrolled { scrolled: bool },
    ScrollTo { offset: f32 },
}

/// Visible state after all instructions so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedPage {
    pub active_link: Option<String>,
    pub texts: BTreeMap<String, String>,
    pub direction: Option<Direction>,
    pub language: Option<Language>,
    pub language_button: Option<Language>,
    pub navbar_scrolled: bool,
    pub scroll_target: Option<f32>,
}

pub struct HeadlessHost<S, W> {
    layout: PageLayout,
    store: S,
    out: W,
    rendered: RenderedPage,
    history: Vec<Instruction>,
}

impl<S: KeyValueStore, W: Write> HeadlessHost<S, W> {
    pub fn new(layout: PageLayout, store: S, out: W) -> Self {
        HeadlessHost {
            layout,
            store,
            out,
            rendered: RenderedPage::default(),
            history: Vec::new(),
        }
    }

    pub fn rendered(&self) -> &RenderedPage {
        &self.rendered
    }

    pub fn history(&self) -> &[Instruction] {
        &self.history
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn emit(&mut self, instruction: Instruction) {
        match serde_json::to_string(&instruction) {
            Ok(line) => {
                if let Err(err) = writeln!(self.out, "{line}") {
                    warn!("Failed to write instruction: {err}");
                }
            }
            Err(err) => warn!("Failed to encode instruction: {err}"),
        }
        self.history.push(instruction);
    }
}

impl<S: KeyValueStore, W: Write> PageHost for HeadlessHost<S, W> {
    fn sections(&self) -> Vec<Section> {
        self.layout.sections.clone()
    }

    fn links(&self) -> Vec<NavLink> {
        self.layout.links.clone()
    }

    fn translatable_elements(&self) -> Vec<TranslatableElement> {
        self.layout.elements.clone()
    }

    fn persisted_language(&self) -> Option<String> {
        self.store.get(LANGUAGE_KEY)
    }

    fn set_persisted_language(&mut self, lang: Language) -> Result<()> {
        self.store.set(LANGUAGE_KEY, lang.code())
    }

    fn set_active_link(&mut self, link_id: &str) {
        self.rendered.active_link = Some(link_id.to_string());
        self.emit(Instruction::SetActiveLink {
            id: link_id.to_string(),
        });
    }

    fn apply_text_variant(&mut self, element_id: &str, text: &str) {
        self.rendered
            .texts
            .insert(element_id.to_string(), text.to_string());
        self.emit(Instruction::SetText {
            element: element_id.to_string(),
            text: text.to_string(),
        });
    }

    fn set_document_direction(&mut self, dir: Direction) {
        self.rendered.direction = Some(dir);
        self.emit(Instruction::SetDirection { dir });
    }

    fn set_document_language(&mut self, lang: Language) {
        self.rendered.language = Some(lang);
        self.emit(Instruction::SetLanguage { lang });
    }

    fn set_active_language_button(&mut self, lang: Language) {
        self.rendered.language_button = Some(lang);
        self.emit(Instruction::SetLanguageButton { lang });
    }

    fn set_navbar_scrolled(&mut self, scrolled: bool) {
        self.rendered.navbar_scrolled = scrolled;
        self.emit(Instruction::SetNavbarScrolled { scrolled });
    }

    fn scroll_to(&mut self, offset: f32) {
        self.rendered.scroll_target = Some(offset);
        self.emit(Instruction::ScrollTo { offset });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn instructions_are_written_as_json_lines() {
        let mut host = HeadlessHost::new(PageLayout::default(), MemoryStore::default(), Vec::new());
        host.set_active_link("nav-hero");
        host.set_document_direction(Direction::Rtl);

        let HeadlessHost { out, .. } = host;
        let text = String::from_utf8(out).expect("utf8 output");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], r#"{"op":"set_active_link","id":"nav-hero"}"#);
        assert_eq!(lines[1], r#"{"op":"set_direction","dir":"rtl"}"#);
    }

    #[test]
    fn language_round_trips_through_the_store() {
        let mut host = HeadlessHost::new(PageLayout::default(), MemoryStore::default(), Vec::new());
        assert_eq!(host.persisted_language(), None);
        host.set_persisted_language(Language::Fa).expect("persist");
        assert_eq!(host.persisted_language().as_deref(), Some("fa"));
    }
}
