// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides temporary template directories, config files, and renderer construction

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use cookie_consent::{FragmentKind, FragmentRenderer, Settings};

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Directory used as a template override root
    pub fn template_dir(&self) -> PathBuf {
        self.path().join("templates")
    }

    /// Write an override for one fragment template
    pub fn override_fragment(&self, kind: FragmentKind, source: &str) -> PathBuf {
        let path = self.template_dir().join(kind.asset_path());
        std::fs::create_dir_all(path.parent().unwrap()).expect("Failed to create template dir");
        std::fs::write(&path, source).expect("Failed to write template override");
        path
    }

    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(&path, contents).expect("Failed to write file");
        path
    }

    pub fn config_file(&self, contents: &str) -> PathBuf {
        self.write_file("cookie-consent.yaml", contents)
    }
}

pub fn renderer(settings: Settings) -> FragmentRenderer {
    FragmentRenderer::new(settings).expect("Failed to build renderer")
}

pub fn renderer_with_gtm_id(gtm_id: &str) -> FragmentRenderer {
    renderer(Settings::new().with_gtm_id(gtm_id))
}

/// Runs the built binary without picking up a user config or GTM_ID from the environment
pub fn cli_command(env: &TestEnvironment) -> std::process::Command {
    let mut command = std::process::Command::new(env!("CARGO_BIN_EXE_cookie-consent"));
    command
        .current_dir(env.path())
        .env("HOME", env.path())
        .env_remove("GTM_ID")
        .env_remove("COOKIE_CONSENT_TEMPLATE_DIR")
        .env_remove("COOKIE_CONSENT_STATIC_URL")
        .env_remove("RUST_LOG");
    command
}
