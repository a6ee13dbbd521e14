/// Notifications fed to the reconciler by the adapter layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Vertical scroll position changed, in px from the document top.
    Scrolled { offset: f32 },
    /// The host is about to paint; flushes a throttled scroll.
    AnimationFrame,
    ViewportChanged {
        viewport_height: f32,
        content_height: f32,
    },
    /// Raw code from a language button; validated by the reducer.
    LanguageSelected(String),
    NavLinkClicked(String),
}
