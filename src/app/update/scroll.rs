use super::super::state::{App, SCROLL_DEPTH_MILESTONES};
use super::{AnalyticsEvent, Effect};
use crate::page::Section;
use tracing::{debug, trace, warn};

/// First section, in document order, whose `[offset, offset + height)` range
/// contains `scroll_offset + header_offset`.
pub fn resolve_active_section(
    scroll_offset: f32,
    header_offset: f32,
    sections: &[Section],
) -> Option<&Section> {
    let point = sanitize_offset(scroll_offset) + header_offset;
    sections.iter().find(|section| section.contains(point))
}

fn sanitize_offset(offset: f32) -> f32 {
    if offset.is_finite() { offset.max(0.0) } else { 0.0 }
}

impl App {
    /// Section under the fixed header at `scroll_offset`.
    pub fn resolve(&self, scroll_offset: f32) -> Option<&Section> {
        resolve_active_section(scroll_offset, self.config.header_offset, &self.nav.sections)
    }

    pub(super) fn handle_scrolled(&mut self, offset: f32, effects: &mut Vec<Effect>) {
        let offset = sanitize_offset(offset);

        let scrolled = offset > self.config.navbar_scrolled_threshold;
        if scrolled != self.nav.navbar_scrolled {
            self.nav.navbar_scrolled = scrolled;
            effects.push(Effect::SetNavbarScrolled(scrolled));
        }

        self.track_scroll_depth(offset, effects);

        if self.config.throttle_to_frame {
            self.nav.pending_offset = Some(offset);
        } else {
            self.reconcile_active_link(offset, effects);
        }
    }

    pub(super) fn handle_animation_frame(&mut self, effects: &mut Vec<Effect>) {
        if let Some(offset) = self.nav.pending_offset.take() {
            self.reconcile_active_link(offset, effects);
        }
    }

    pub(super) fn handle_viewport_changed(&mut self, viewport_height: f32, content_height: f32) {
        let clamp = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        self.nav.viewport_height = clamp(viewport_height);
        self.nav.content_height = clamp(content_height);
    }

    pub(super) fn handle_nav_link_clicked(&mut self, link_id: &str, effects: &mut Vec<Effect>) {
        let Some(link) = self.nav.link(link_id) else {
            warn!(link = %link_id, "Ignoring click on unknown navigation link");
            return;
        };
        let Some(section) = self.nav.section(&link.target) else {
            warn!(link = %link_id, target = %link.target, "Navigation link targets no section");
            return;
        };
        let target = (section.offset - self.config.scroll_margin).max(0.0);
        let section_id = section.id.clone();
        effects.push(Effect::ScrollTo(target));
        self.track(
            AnalyticsEvent::NavigationClick {
                section: section_id,
            },
            effects,
        );
    }

    /// Leaves the current link alone when nothing matches, so the indicator
    /// does not flicker between sections.
    fn reconcile_active_link(&mut self, offset: f32, effects: &mut Vec<Effect>) {
        let Some(section) = self.resolve(offset) else {
            trace!(offset, "No section under header; keeping active link");
            return;
        };
        let section_id = section.id.clone();
        let Some(link) = self.nav.link_for_section(&section_id) else {
            trace!(section = %section_id, "Resolved section has no navigation link");
            return;
        };
        if self.nav.active_link.as_deref() == Some(link.id.as_str()) {
            return;
        }
        let link_id = link.id.clone();
        debug!(offset, section = %section_id, link = %link_id, "Active section changed");
        self.nav.active_link = Some(link_id.clone());
        effects.push(Effect::ActivateLink(link_id));
    }

    fn track_scroll_depth(&mut self, offset: f32, effects: &mut Vec<Effect>) {
        let scrollable = self.nav.content_height - self.nav.viewport_height;
        if scrollable <= 0.0 {
            return;
        }
        let percent = ((offset / scrollable) * 100.0).round().clamp(0.0, 100.0) as u8;
        for milestone in SCROLL_DEPTH_MILESTONES {
            if milestone > self.analytics.deepest_milestone && percent >= milestone {
                self.analytics.deepest_milestone = milestone;
                self.track(AnalyticsEvent::ScrollDepth { percent: milestone }, effects);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Message;
    use crate::config::AppConfig;
    use crate::host::HeadlessHost;
    use crate::page::{NavLink, PageLayout};
    use crate::store::MemoryStore;
    use std::io::Sink;

    type TestHost = HeadlessHost<MemoryStore, Sink>;

    fn section(id: &str, offset: f32, height: f32) -> Section {
        Section {
            id: id.to_string(),
            offset,
            height,
        }
    }

    fn sample_sections() -> Vec<Section> {
        vec![
            section("hero", 0.0, 800.0),
            section("features", 800.0, 600.0),
            section("contact", 1400.0, 400.0),
        ]
    }

    fn build_test_app(throttle: bool) -> (App, TestHost) {
        let layout = PageLayout {
            sections: sample_sections(),
            links: ["hero", "features", "contact"]
                .iter()
                .map(|id| NavLink {
                    id: format!("nav-{id}"),
                    target: id.to_string(),
                })
                .collect(),
            elements: Vec::new(),
        };
        let mut host = HeadlessHost::new(layout, MemoryStore::default(), std::io::sink());
        let mut config = AppConfig::default();
        config.throttle_to_frame = throttle;
        let app = App::bootstrap(config, &mut host);
        (app, host)
    }

    fn scroll(app: &mut App, host: &mut TestHost, offset: f32) {
        app.update(Message::Scrolled { offset }, host)
            .expect("scroll is never rejected");
    }

    #[test]
    fn resolves_through_the_fixed_header() {
        let sections = sample_sections();
        let hit = resolve_active_section(750.0, 100.0, &sections).map(|s| s.id.as_str());
        assert_eq!(hit, Some("features"));
        let hit = resolve_active_section(50.0, 100.0, &sections).map(|s| s.id.as_str());
        assert_eq!(hit, Some("hero"));
    }

    #[test]
    fn section_end_belongs_to_the_next_section() {
        let sections = sample_sections();
        let hit = resolve_active_section(700.0, 100.0, &sections).map(|s| s.id.as_str());
        assert_eq!(hit, Some("features"));
        let hit = resolve_active_section(699.9, 100.0, &sections).map(|s| s.id.as_str());
        assert_eq!(hit, Some("hero"));
    }

    #[test]
    fn nothing_resolves_past_the_last_section() {
        let sections = sample_sections();
        assert!(resolve_active_section(1800.0, 100.0, &sections).is_none());
    }

    #[test]
    fn nothing_resolves_above_the_first_section() {
        let sections = vec![section("intro", 300.0, 500.0)];
        assert!(resolve_active_section(0.0, 100.0, &sections).is_none());
    }

    #[test]
    fn overlapping_ranges_pick_the_first_in_document_order() {
        let sections = vec![section("a", 0.0, 1000.0), section("b", 500.0, 1000.0)];
        let hit = resolve_active_section(600.0, 100.0, &sections).map(|s| s.id.as_str());
        assert_eq!(hit, Some("a"));
    }

    #[test]
    fn non_finite_offsets_resolve_as_top_of_page() {
        let sections = sample_sections();
        let hit = resolve_active_section(f32::NAN, 100.0, &sections).map(|s| s.id.as_str());
        assert_eq!(hit, Some("hero"));
        let hit = resolve_active_section(-400.0, 100.0, &sections).map(|s| s.id.as_str());
        assert_eq!(hit, Some("hero"));
    }

    #[test]
    fn every_offset_inside_a_section_activates_exactly_its_link() {
        let (mut app, mut host) = build_test_app(false);
        for offset in (0..1300).step_by(37) {
            let offset = offset as f32;
            scroll(&mut app, &mut host, offset);
            let expected = app.resolve(offset).map(|s| format!("nav-{}", s.id));
            assert_eq!(app.active_link().map(str::to_string), expected);
            assert_eq!(host.rendered().active_link.as_deref(), app.active_link());
        }
    }

    #[test]
    fn unmatched_offset_keeps_previous_link() {
        let (mut app, mut host) = build_test_app(false);
        scroll(&mut app, &mut host, 1500.0);
        assert_eq!(app.active_link(), Some("nav-contact"));

        scroll(&mut app, &mut host, 5000.0);
        assert_eq!(app.active_link(), Some("nav-contact"));
        assert_eq!(host.rendered().active_link.as_deref(), Some("nav-contact"));
    }

    #[test]
    fn repeated_scrolls_in_one_section_emit_once() {
        let (mut app, mut host) = build_test_app(false);
        scroll(&mut app, &mut host, 10.0);
        scroll(&mut app, &mut host, 20.0);
        scroll(&mut app, &mut host, 30.0);

        let activations = host
            .history()
            .iter()
            .filter(|i| matches!(i, crate::host::Instruction::SetActiveLink { .. }))
            .count();
        assert_eq!(activations, 1);
    }

    #[test]
    fn throttled_scrolls_resolve_on_the_next_frame() {
        let (mut app, mut host) = build_test_app(true);
        scroll(&mut app, &mut host, 10.0);
        scroll(&mut app, &mut host, 900.0);
        assert_eq!(app.active_link(), None);

        app.update(Message::AnimationFrame, &mut host)
            .expect("frame is never rejected");
        assert_eq!(app.active_link(), Some("nav-features"));

        let effects = app.reduce(Message::AnimationFrame).expect("frame");
        assert!(effects.is_empty());
    }

    #[test]
    fn section_without_link_leaves_indicator_alone() {
        let layout = PageLayout {
            sections: sample_sections(),
            links: vec![NavLink {
                id: "nav-hero".to_string(),
                target: "hero".to_string(),
            }],
            elements: Vec::new(),
        };
        let mut host = HeadlessHost::new(layout, MemoryStore::default(), std::io::sink());
        let mut config = AppConfig::default();
        config.throttle_to_frame = false;
        let mut app = App::bootstrap(config, &mut host);

        scroll(&mut app, &mut host, 0.0);
        scroll(&mut app, &mut host, 900.0);
        assert_eq!(app.active_link(), Some("nav-hero"));
    }

    #[test]
    fn navbar_styling_toggles_only_on_threshold_crossings() {
        let (mut app, _host) = build_test_app(true);
        let effects = app.reduce(Message::Scrolled { offset: 150.0 }).expect("scroll");
        assert!(effects.contains(&Effect::SetNavbarScrolled(true)));

        let effects = app.reduce(Message::Scrolled { offset: 200.0 }).expect("scroll");
        assert!(!effects.iter().any(|e| matches!(e, Effect::SetNavbarScrolled(_))));

        let effects = app.reduce(Message::Scrolled { offset: 40.0 }).expect("scroll");
        assert!(effects.contains(&Effect::SetNavbarScrolled(false)));
    }

    #[test]
    fn nav_click_scrolls_below_the_header() {
        let (mut app, mut host) = build_test_app(true);
        app.update(Message::NavLinkClicked("nav-features".to_string()), &mut host)
            .expect("click");
        assert_eq!(host.rendered().scroll_target, Some(720.0));

        app.update(Message::NavLinkClicked("nav-hero".to_string()), &mut host)
            .expect("click");
        assert_eq!(host.rendered().scroll_target, Some(0.0));
    }

    #[test]
    fn unknown_nav_click_does_nothing() {
        let (mut app, _host) = build_test_app(true);
        let effects = app
            .reduce(Message::NavLinkClicked("nav-pricing".to_string()))
            .expect("click");
        assert!(effects.is_empty());
    }

    #[test]
    fn scroll_depth_milestones_are_reported_once() {
        let (mut app, _host) = build_test_app(true);
        app.reduce(Message::ViewportChanged {
            viewport_height: 800.0,
            content_height: 1800.0,
        })
        .expect("viewport");

        let depth = |effects: &[Effect]| -> Vec<u8> {
            effects
                .iter()
                .filter_map(|e| match e {
                    Effect::Track(AnalyticsEvent::ScrollDepth { percent }) => Some(*percent),
                    _ => None,
                })
                .collect()
        };

        let effects = app.reduce(Message::Scrolled { offset: 600.0 }).expect("scroll");
        assert_eq!(depth(&effects), vec![25, 50]);

        let effects = app.reduce(Message::Scrolled { offset: 300.0 }).expect("scroll");
        assert!(depth(&effects).is_empty());

        let effects = app.reduce(Message::Scrolled { offset: 1000.0 }).expect("scroll");
        assert_eq!(depth(&effects), vec![75, 100]);
    }
}
