// ABOUTME: Per-call fragment request and GTM id resolution
// ABOUTME: Coalesces an explicit GTM id with the configured default and builds the template context

use serde::Serialize;
use serde_json::Value as JsonValue;

use super::kind::FragmentKind;
use super::settings::Settings;
use crate::template::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FragmentRequest {
    #[serde(skip)]
    pub kind: FragmentKind,
    pub gtm_id: Option<String>,
}

impl FragmentRequest {
    /// Build a request, picking the explicit id, then the configured one, then none.
    ///
    /// Empty strings count as absent on both sides. Fragments that take no id
    /// always resolve to `None`.
    pub fn resolve(kind: FragmentKind, explicit: Option<&str>, settings: &Settings) -> Self {
        let gtm_id = if kind.accepts_gtm_id() {
            explicit
                .filter(|id| !id.is_empty())
                .or_else(|| settings.configured_gtm_id())
                .map(str::to_string)
        } else {
            None
        };

        Self { kind, gtm_id }
    }

    /// Context handed to the template; empty for fragments without parameters
    pub fn to_context(&self) -> Result<JsonValue> {
        if self.kind.accepts_gtm_id() {
            Ok(serde_json::to_value(self)?)
        } else {
            Ok(JsonValue::Object(serde_json::Map::new()))
        }
    }
}
