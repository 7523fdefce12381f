// ABOUTME: Static assets shipped with the consent fragments
// ABOUTME: Bundles the client-side consent script and stylesheet and exports them to disk

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct StaticAsset {
    /// Path relative to the static root
    pub path: &'static str,
    pub content_type: &'static str,
    pub contents: &'static str,
}

pub const STATIC_ASSETS: &[StaticAsset] = &[
    StaticAsset {
        path: "cookie_consent/cookie_consent.js",
        content_type: "application/javascript",
        contents: include_str!("../static/cookie_consent/cookie_consent.js"),
    },
    StaticAsset {
        path: "cookie_consent/cookie_consent.css",
        content_type: "text/css",
        contents: include_str!("../static/cookie_consent/cookie_consent.css"),
    },
];

pub fn find(path: &str) -> Option<&'static StaticAsset> {
    let path = path.trim_start_matches('/');
    STATIC_ASSETS.iter().find(|asset| asset.path == path)
}

/// Write every bundled asset below `root`, returning the written paths
pub async fn export_static(root: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(STATIC_ASSETS.len());

    for asset in STATIC_ASSETS {
        let target = root.join(asset.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&target, asset.contents).await?;
        debug!("Wrote static asset {}", target.display());
        written.push(target);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_find_asset() {
        let script = find("/cookie_consent/cookie_consent.js").unwrap();
        assert_eq!(script.content_type, "application/javascript");
        assert!(script.contents.contains("lcc-cookie-banner"));

        assert!(find("cookie_consent/missing.js").is_none());
    }

    #[test]
    fn test_script_targets_fragment_ids() {
        let script = find("cookie_consent/cookie_consent.js").unwrap();
        for id in [
            "#lcc-accept-all",
            "#lcc-decline-all",
            "#lcc-show-settings",
            "#lcc-save-settings",
            "#lcc-close-modal",
            "#lcc-analytics-toggle",
        ] {
            assert!(script.contents.contains(id), "script does not reference {}", id);
        }
    }

    #[tokio::test]
    async fn test_export_static() {
        let dir = tempdir().unwrap();
        let written = export_static(dir.path()).await.unwrap();

        assert_eq!(written.len(), STATIC_ASSETS.len());
        let css = fs::read_to_string(dir.path().join("cookie_consent/cookie_consent.css"))
            .await
            .unwrap();
        assert!(css.contains(".lcc-banner.lcc-show"));
    }
}
