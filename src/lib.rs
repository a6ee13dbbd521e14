//! View-state reconciliation for the ISTA marketing site.
//!
//! The core decides which navigation link is active for a scroll position
//! and which text and reading direction the page shows for a language. All
//! reads and writes of the document go through [`host::PageHost`].

pub mod app;
pub mod config;
pub mod driver;
pub mod host;
pub mod language;
pub mod page;
pub mod store;
