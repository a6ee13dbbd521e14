mod reducer;
mod runtime;

use super::super::messages::Message;
use super::super::state::App;
use crate::host::PageHost;
use crate::language::ViewStateError;

impl App {
    /// Run one notification to completion. A rejected message leaves both the
    /// state and the host untouched.
    pub fn update(
        &mut self,
        message: Message,
        host: &mut dyn PageHost,
    ) -> Result<(), ViewStateError> {
        let effects = self.reduce(message)?;
        self.run_effects(effects, host);
        Ok(())
    }
}
