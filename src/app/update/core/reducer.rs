use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use crate::language::ViewStateError;

impl App {
    pub(in crate::app) fn reduce(
        &mut self,
        message: Message,
    ) -> Result<Vec<Effect>, ViewStateError> {
        let mut effects = Vec::new();

        match message {
            Message::Scrolled { offset } => self.handle_scrolled(offset, &mut effects),
            Message::AnimationFrame => self.handle_animation_frame(&mut effects),
            Message::ViewportChanged {
                viewport_height,
                content_height,
            } => self.handle_viewport_changed(viewport_height, content_height),
            Message::LanguageSelected(code) => {
                self.handle_language_selected(&code, &mut effects)?;
            }
            Message::NavLinkClicked(link_id) => {
                self.handle_nav_link_clicked(&link_id, &mut effects);
            }
        }

        Ok(effects)
    }

    pub(in crate::app) fn startup_effects(&self) -> Vec<Effect> {
        let mut effects = Vec::new();
        let current = self.language.current;
        self.push_language_refresh(current, &mut effects);
        self.push_page_view(&mut effects);
        effects
    }
}
