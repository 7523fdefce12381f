// ABOUTME: Template module for the cookie-consent fragments
// ABOUTME: Provides template loading, page rendering, and the Handlebars fragment helpers

pub mod engine;
pub mod error;
pub mod helpers;
pub mod loader;

pub use engine::TemplateEngine;
pub use error::{Result, TemplateError};
pub use helpers::{register_fragment_helpers, FragmentHelper};
pub use loader::{LoadedTemplate, TemplateLoader, TemplateOrigin};
