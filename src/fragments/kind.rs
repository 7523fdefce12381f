// ABOUTME: The closed set of fragments this crate can render
// ABOUTME: Maps each fragment kind to its helper name and bundled template path

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FragmentKind {
    /// Google Tag Manager `<script>` loader, placed in `<head>`
    GtmScript,
    /// Google Tag Manager `<noscript>` iframe, placed after `<body>`
    GtmNoscript,
    CookieBanner,
    CookieModal,
}

impl FragmentKind {
    pub const ALL: [FragmentKind; 4] = [
        FragmentKind::GtmScript,
        FragmentKind::GtmNoscript,
        FragmentKind::CookieBanner,
        FragmentKind::CookieModal,
    ];

    /// Name used for the compiled template and the page helper
    pub fn template_name(self) -> &'static str {
        match self {
            FragmentKind::GtmScript => "gtm_script",
            FragmentKind::GtmNoscript => "gtm_noscript",
            FragmentKind::CookieBanner => "cookie_banner",
            FragmentKind::CookieModal => "cookie_modal",
        }
    }

    /// Path of the template relative to a template directory
    pub fn asset_path(self) -> &'static str {
        match self {
            FragmentKind::GtmScript => "cookie_consent/gtm_script.html",
            FragmentKind::GtmNoscript => "cookie_consent/gtm_noscript.html",
            FragmentKind::CookieBanner => "cookie_consent/cookie_banner.html",
            FragmentKind::CookieModal => "cookie_consent/cookie_modal.html",
        }
    }

    /// Whether the fragment is parameterized by a GTM container id
    pub fn accepts_gtm_id(self) -> bool {
        matches!(self, FragmentKind::GtmScript | FragmentKind::GtmNoscript)
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.template_name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown fragment '{0}' (expected gtm_script, gtm_noscript, cookie_banner or cookie_modal)")]
pub struct ParseFragmentKindError(pub String);

impl FromStr for FragmentKind {
    type Err = ParseFragmentKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        FragmentKind::ALL
            .into_iter()
            .find(|kind| kind.template_name() == normalized)
            .ok_or_else(|| ParseFragmentKindError(s.to_string()))
    }
}
