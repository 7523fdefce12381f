// ABOUTME: Settings injected into the fragment renderer at construction
// ABOUTME: Carries the default GTM container id, template override directories, and static URL prefix

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Default GTM container id, used when a call does not pass one
    #[serde(default)]
    pub gtm_id: Option<String>,

    /// Directories searched before the bundled templates
    #[serde(default)]
    pub template_dirs: Vec<PathBuf>,

    #[serde(default = "default_static_url")]
    pub static_url: String,
}

fn default_static_url() -> String {
    "/static/".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gtm_id: None,
            template_dirs: Vec::new(),
            static_url: default_static_url(),
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gtm_id(mut self, gtm_id: impl Into<String>) -> Self {
        self.gtm_id = Some(gtm_id.into());
        self
    }

    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dirs.push(dir.into());
        self
    }

    pub fn with_static_url(mut self, static_url: impl Into<String>) -> Self {
        self.static_url = static_url.into();
        self
    }

    /// The configured GTM id, treating an empty string as unset
    pub fn configured_gtm_id(&self) -> Option<&str> {
        self.gtm_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Static URL prefix, always ending in a slash
    pub fn static_prefix(&self) -> String {
        if self.static_url.ends_with('/') {
            self.static_url.clone()
        } else {
            format!("{}/", self.static_url)
        }
    }
}
