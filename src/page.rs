//! Static page structure: sections, navigation links and translatable text.
//!
//! The layout is captured once at startup; the page never reflows, so these
//! descriptors are treated as immutable afterwards.

use crate::language::Language;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// A vertically positioned content region.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Section {
    pub id: String,
    pub offset: f32,
    pub height: f32,
}

impl Section {
    /// Half-open containment: `[offset, offset + height)`.
    pub fn contains(&self, point: f32) -> bool {
        point >= self.offset && point < self.offset + self.height
    }
}

/// Navigation indicator bound to a section by id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NavLink {
    pub id: String,
    pub target: String,
}

/// Element carrying one text variant per language code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TranslatableElement {
    pub id: String,
    #[serde(default)]
    pub variants: BTreeMap<String, String>,
}

impl TranslatableElement {
    /// Empty variants count as missing so the element keeps its text.
    pub fn variant(&self, lang: Language) -> Option<&str> {
        self.variants
            .get(lang.code())
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PageLayout {
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub links: Vec<NavLink>,
    #[serde(default)]
    pub elements: Vec<TranslatableElement>,
}

impl PageLayout {
    pub fn parse(contents: &str) -> Result<Self> {
        let layout: PageLayout = toml::from_str(contents).context("parsing page layout")?;
        layout.warn_on_dangling_links();
        Ok(layout)
    }

    /// Dangling links are tolerated; they simply never become active.
    fn warn_on_dangling_links(&self) {
        for link in &self.links {
            if !self.sections.iter().any(|section| section.id == link.target) {
                warn!(link = %link.id, target = %link.target, "Link targets no known section");
            }
        }
    }
}

pub fn load_page_layout(path: &Path) -> Result<PageLayout> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading page layout {}", path.display()))?;
    let layout = PageLayout::parse(&contents)?;
    info!(
        path = %path.display(),
        sections = layout.sections.len(),
        links = layout.links.len(),
        elements = layout.elements.len(),
        "Loaded page layout"
    );
    Ok(layout)
}
