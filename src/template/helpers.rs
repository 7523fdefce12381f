// ABOUTME: Handlebars helpers exposing the fragments to page templates
// ABOUTME: Registers gtm_script, gtm_noscript, cookie_banner and cookie_modal as page-level tags

use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderError,
};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::debug;

use crate::fragments::{FragmentKind, FragmentRenderer};

/// Helper bound to one fragment kind.
///
/// `{{gtm_script}}` falls back to the configured id, `{{gtm_script "GTM-XXXX"}}`
/// or `{{gtm_script page.gtm_id}}` overrides it. The consent helpers accept and
/// ignore a positional argument.
pub struct FragmentHelper {
    kind: FragmentKind,
    renderer: Arc<FragmentRenderer>,
}

impl FragmentHelper {
    pub fn new(kind: FragmentKind, renderer: Arc<FragmentRenderer>) -> Self {
        Self { kind, renderer }
    }
}

impl HelperDef for FragmentHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let explicit = h.param(0).and_then(|v| param_to_gtm_id(v.value()));

        if !self.kind.accepts_gtm_id() && h.param(0).is_some() {
            debug!("Ignoring argument passed to {} helper", self.kind);
        }

        let rendered = self
            .renderer
            .render(self.kind, explicit.as_deref())
            .map_err(|e| RenderError::new(format!("{} helper failed: {}", self.kind, e)))?;

        // Fragments are markup; write them unescaped
        out.write(&rendered)?;
        Ok(())
    }
}

/// Scalars become the id; null, objects and arrays count as absent
fn param_to_gtm_id(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => None,
    }
}

/// Register one helper per fragment kind, all sharing `renderer`
pub fn register_fragment_helpers(handlebars: &mut Handlebars, renderer: Arc<FragmentRenderer>) {
    for kind in FragmentKind::ALL {
        handlebars.register_helper(
            kind.template_name(),
            Box::new(FragmentHelper::new(kind, Arc::clone(&renderer))),
        );
    }
}
