// ABOUTME: Page template engine with the fragment helpers pre-registered
// ABOUTME: Renders page templates that embed GTM snippets and consent markup via helper tags

use handlebars::Handlebars;
use serde_json::Value as JsonValue;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use super::error::{Result, TemplateError};
use super::helpers;
use super::loader::{LoadedTemplate, TemplateLoader, DEMO_PAGE_PATH};
use crate::fragments::{FragmentRenderer, Settings};

const DEFAULT_DEMO_TITLE: &str = "Cookie consent demo";

#[derive(Clone)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
    renderer: Arc<FragmentRenderer>,
}

impl TemplateEngine {
    /// Create an engine whose fragment helpers read `settings`
    pub fn new(settings: Settings) -> Result<Self> {
        let renderer = Arc::new(FragmentRenderer::new(settings)?);
        Ok(Self::with_renderer(renderer))
    }

    /// Create an engine around an existing renderer
    pub fn with_renderer(renderer: Arc<FragmentRenderer>) -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.set_dev_mode(false);

        helpers::register_fragment_helpers(&mut handlebars, Arc::clone(&renderer));

        Self {
            handlebars,
            renderer,
        }
    }

    pub fn renderer(&self) -> &FragmentRenderer {
        &self.renderer
    }

    /// Render a page template string with the given context
    pub fn render_template(&self, template: &str, context: &JsonValue) -> Result<String> {
        let context = self.page_context(context);
        self.handlebars
            .render_template(template, &context)
            .map_err(TemplateError::HandlebarsError)
    }

    /// Compile and store a named page template
    pub fn register_page(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| TemplateError::syntax(name, e))?;
        debug!("Registered page template: {}", name);
        Ok(())
    }

    /// Read a page template from disk and store it under `name`
    pub fn register_page_file(&mut self, name: &str, path: &Path) -> Result<()> {
        let template = std::fs::read_to_string(path).map_err(|source| TemplateError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        self.register_page(name, &template)
    }

    /// Render a previously registered page template
    pub fn render_page(&self, name: &str, context: &JsonValue) -> Result<String> {
        if !self.handlebars.has_template(name) {
            return Err(TemplateError::NotFound(name.to_string()));
        }

        let context = self.page_context(context);
        self.handlebars
            .render(name, &context)
            .map_err(TemplateError::HandlebarsError)
    }

    /// Load the demo page (override first, then bundled) and check it compiles.
    ///
    /// Only the demo page itself depends on this, so a broken override never
    /// affects other page templates.
    pub fn demo_page(&self) -> Result<LoadedTemplate> {
        let loader = TemplateLoader::with_dirs(self.renderer.settings().template_dirs.clone());
        let demo = loader.load(DEMO_PAGE_PATH)?;
        handlebars::Template::compile(demo.source.as_ref())
            .map_err(|e| TemplateError::syntax(&demo.path, e))?;
        Ok(demo)
    }

    /// Render the bundled demo page with every fragment in place
    pub fn render_demo_page(&self, title: Option<&str>, gtm_id: Option<&str>) -> Result<String> {
        let demo = self.demo_page()?;
        debug!("Rendering demo page from {:?}", demo.origin);

        let context = self.page_context(&serde_json::json!({
            "title": title.unwrap_or(DEFAULT_DEMO_TITLE),
            "gtm_id": gtm_id,
        }));
        self.handlebars
            .render_template(demo.source.as_ref(), &context)
            .map_err(TemplateError::HandlebarsError)
    }

    /// Validate template syntax without rendering
    pub fn validate_template(&self, template: &str) -> Result<()> {
        match handlebars::Template::compile(template) {
            Ok(_) => Ok(()),
            Err(e) => Err(TemplateError::syntax("<inline>", e)),
        }
    }

    /// Add `static_url` to an object context unless the caller set it
    fn page_context(&self, context: &JsonValue) -> JsonValue {
        let mut context = match context {
            JsonValue::Object(_) => context.clone(),
            JsonValue::Null => JsonValue::Object(serde_json::Map::new()),
            other => return other.clone(),
        };

        if let Some(map) = context.as_object_mut() {
            map.entry("static_url")
                .or_insert_with(|| JsonValue::String(self.renderer.settings().static_prefix()));
        }
        context
    }
}
