use crate::page::{NavLink, Section};

/// Section geometry, link bindings and the scroll-derived view state.
pub struct NavigationState {
    pub(in crate::app) sections: Vec<Section>,
    pub(in crate::app) links: Vec<NavLink>,
    pub(in crate::app) active_link: Option<String>,
    pub(in crate::app) pending_offset: Option<f32>,
    pub(in crate::app) navbar_scrolled: bool,
    pub(in crate::app) viewport_height: f32,
    pub(in crate::app) content_height: f32,
}

impl NavigationState {
    pub(in crate::app) fn new(sections: Vec<Section>, links: Vec<NavLink>) -> Self {
        NavigationState {
            sections,
            links,
            active_link: None,
            pending_offset: None,
            navbar_scrolled: false,
            viewport_height: 0.0,
            content_height: 0.0,
        }
    }

    /// First link bound to `section_id`, in document order.
    pub(in crate::app) fn link_for_section(&self, section_id: &str) -> Option<&NavLink> {
        self.links.iter().find(|link| link.target == section_id)
    }

    pub(in crate::app) fn link(&self, link_id: &str) -> Option<&NavLink> {
        self.links.iter().find(|link| link.id == link_id)
    }

    pub(in crate::app) fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == section_id)
    }
}
