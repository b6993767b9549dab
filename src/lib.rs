//! Portfolio Site
//!
//! Server-rendered personal portfolio: a navigation shell around four static
//! sections (landing, biography, project gallery, contact form) with a
//! persisted light/dark theme.
//!
//! - `section`: the four-way section selector and its arrow cycle
//! - `theme`: theme preference, its stored form and visual mapping
//! - `shell`: navigation state (section, theme, mobile menu, project modal)
//! - `content`: profile, biography, projects and contact channels
//! - `contact_form`: contact draft and required-field check
//! - `web`: Axum router, handlers and Askama templates (feature `web`)

pub mod config;
pub mod contact_form;
pub mod content;
pub mod error;
pub mod section;
pub mod shell;
pub mod theme;

#[cfg(feature = "web")]
pub mod web;

// Re-export commonly used types
pub use config::SiteConfig;
pub use contact_form::{ContactDraft, ContactField, ContactFormError, ContactSubmission};
pub use error::SiteError;
pub use section::Section;
pub use shell::ShellState;
pub use theme::Theme;

#[cfg(feature = "web")]
pub use web::{create_router, AppState};
