// ABOUTME: Fragment rendering module for GTM snippets and cookie-consent markup
// ABOUTME: Provides the fragment kinds, per-call requests, injected settings, and the renderer

pub mod kind;
pub mod renderer;
pub mod request;
pub mod settings;

pub use kind::{FragmentKind, ParseFragmentKindError};
pub use renderer::FragmentRenderer;
pub use request::FragmentRequest;
pub use settings::Settings;
