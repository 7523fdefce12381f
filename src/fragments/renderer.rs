// ABOUTME: Fragment renderer compiling the four fragment templates once
// ABOUTME: Renders GTM snippets and consent markup from injected settings and optional per-call ids

use handlebars::Handlebars;
use tracing::debug;

use super::kind::FragmentKind;
use super::request::FragmentRequest;
use super::settings::Settings;
use crate::template::loader::TemplateLoader;
use crate::template::{Result, TemplateError};

/// Renders fragments from a fixed settings snapshot.
///
/// Templates are resolved and compiled when the renderer is built, so every
/// render call afterwards is a pure function of its arguments.
pub struct FragmentRenderer {
    registry: Handlebars<'static>,
    settings: Settings,
}

impl FragmentRenderer {
    pub fn new(settings: Settings) -> Result<Self> {
        let loader = TemplateLoader::with_dirs(settings.template_dirs.clone());

        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);
        registry.set_dev_mode(false);

        for kind in FragmentKind::ALL {
            let template = loader.load(kind.asset_path())?;
            registry
                .register_template_string(kind.template_name(), template.source.as_ref())
                .map_err(|e| TemplateError::syntax(&template.path, e))?;
            debug!("Registered fragment {} from {:?}", kind, template.origin);
        }

        Ok(Self { registry, settings })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Render any fragment; `gtm_id` is ignored by fragments that take none
    pub fn render(&self, kind: FragmentKind, gtm_id: Option<&str>) -> Result<String> {
        let request = FragmentRequest::resolve(kind, gtm_id, &self.settings);
        self.render_request(&request)
    }

    pub fn render_request(&self, request: &FragmentRequest) -> Result<String> {
        let context = request.to_context()?;
        self.registry
            .render(request.kind.template_name(), &context)
            .map_err(TemplateError::HandlebarsError)
    }

    pub fn render_gtm_script(&self, gtm_id: Option<&str>) -> Result<String> {
        self.render(FragmentKind::GtmScript, gtm_id)
    }

    pub fn render_gtm_noscript(&self, gtm_id: Option<&str>) -> Result<String> {
        self.render(FragmentKind::GtmNoscript, gtm_id)
    }

    pub fn render_cookie_banner(&self) -> Result<String> {
        self.render(FragmentKind::CookieBanner, None)
    }

    pub fn render_cookie_modal(&self) -> Result<String> {
        self.render(FragmentKind::CookieModal, None)
    }
}
