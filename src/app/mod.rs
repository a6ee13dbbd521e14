//! View-state reconciliation for the site.
//!
//! `App` owns the captured page structure and the current language. Messages
//! go through a reducer that only decides; the resulting effects are applied
//! to a [`crate::host::PageHost`] afterwards.

mod messages;
mod state;
mod update;

pub use messages::Message;
pub use state::App;
pub use update::{AnalyticsEvent, resolve_active_section};
