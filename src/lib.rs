// ABOUTME: Main library module for the cookie-consent template helpers
// ABOUTME: Exports the fragment renderer, page template engine, static assets, and CLI

pub mod assets;
pub mod cli;
pub mod fragments;
pub mod template;

// Re-export commonly used types
pub use cli::{App, Args, Config};
pub use fragments::{FragmentKind, FragmentRenderer, FragmentRequest, Settings};
pub use template::{register_fragment_helpers, TemplateEngine, TemplateError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
