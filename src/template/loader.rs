// ABOUTME: Template source resolution for bundled and user-supplied templates
// ABOUTME: Searches override directories first and falls back to templates compiled into the crate

use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use super::error::{Result, TemplateError};

/// A template compiled into the crate.
#[derive(Debug, Clone, Copy)]
pub struct BundledTemplate {
    pub path: &'static str,
    pub source: &'static str,
}

/// Relative path of the demo page shipped alongside the fragments.
pub const DEMO_PAGE_PATH: &str = "cookie_consent/demo_page.html";

pub const BUNDLED_TEMPLATES: &[BundledTemplate] = &[
    BundledTemplate {
        path: "cookie_consent/gtm_script.html",
        source: include_str!("../../templates/cookie_consent/gtm_script.html"),
    },
    BundledTemplate {
        path: "cookie_consent/gtm_noscript.html",
        source: include_str!("../../templates/cookie_consent/gtm_noscript.html"),
    },
    BundledTemplate {
        path: "cookie_consent/cookie_banner.html",
        source: include_str!("../../templates/cookie_consent/cookie_banner.html"),
    },
    BundledTemplate {
        path: "cookie_consent/cookie_modal.html",
        source: include_str!("../../templates/cookie_consent/cookie_modal.html"),
    },
    BundledTemplate {
        path: DEMO_PAGE_PATH,
        source: include_str!("../../templates/cookie_consent/demo_page.html"),
    },
];

/// Where a loaded template came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOrigin {
    Bundled,
    Directory(PathBuf),
}

#[derive(Debug, Clone)]
pub struct LoadedTemplate {
    pub path: String,
    pub source: Cow<'static, str>,
    pub origin: TemplateOrigin,
}

#[derive(Debug, Clone, Default)]
pub struct TemplateLoader {
    dirs: Vec<PathBuf>,
}

impl TemplateLoader {
    /// Loader that only sees the bundled templates
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader that searches `dirs` in order before the bundled templates
    pub fn with_dirs(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn bundled(path: &str) -> Option<&'static BundledTemplate> {
        BUNDLED_TEMPLATES.iter().find(|t| t.path == path)
    }

    /// Resolve a template by its relative path
    pub fn load(&self, path: &str) -> Result<LoadedTemplate> {
        for dir in &self.dirs {
            let candidate = dir.join(path);
            if !candidate.is_file() {
                continue;
            }

            let source = fs::read_to_string(&candidate).map_err(|source| TemplateError::ReadError {
                path: candidate.clone(),
                source,
            })?;
            debug!("Loaded template override: {}", candidate.display());

            return Ok(LoadedTemplate {
                path: path.to_string(),
                source: Cow::Owned(source),
                origin: TemplateOrigin::Directory(dir.clone()),
            });
        }

        let bundled =
            Self::bundled(path).ok_or_else(|| TemplateError::NotFound(path.to_string()))?;

        Ok(LoadedTemplate {
            path: path.to_string(),
            source: Cow::Borrowed(bundled.source),
            origin: TemplateOrigin::Bundled,
        })
    }
}
