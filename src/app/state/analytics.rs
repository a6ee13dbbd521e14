/// Scroll-depth milestones reported once per page view, in percent.
pub(crate) const SCROLL_DEPTH_MILESTONES: [u8; 4] = [25, 50, 75, 100];

#[derive(Default)]
pub struct AnalyticsState {
    pub(in crate::app) deepest_milestone: u8,
}
