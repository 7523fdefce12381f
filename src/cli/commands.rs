// ABOUTME: Command implementations for the cookie-consent CLI
// ABOUTME: Handles render, page, list, check, and export-static commands

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tracing::info;

use super::config::Config;
use crate::assets;
use crate::fragments::{FragmentKind, FragmentRenderer};
use crate::template::{TemplateEngine, TemplateLoader, TemplateOrigin};

const PAGE_TEMPLATE: &str = "page";

/// Render one fragment to stdout
pub async fn render_fragment(
    fragment: FragmentKind,
    gtm_id: Option<String>,
    config: &Config,
) -> Result<()> {
    let renderer = FragmentRenderer::new(config.settings.clone())
        .context("Failed to load fragment templates")?;

    if gtm_id.is_some() && !fragment.accepts_gtm_id() {
        info!("{} does not take a GTM id; ignoring --gtm-id", fragment);
    }

    let html = renderer
        .render(fragment, gtm_id.as_deref())
        .with_context(|| format!("Failed to render {}", fragment))?;

    print!("{}", html);
    Ok(())
}

/// Render a page template (or the bundled demo page)
pub async fn render_page(
    template: Option<PathBuf>,
    gtm_id: Option<String>,
    title: Option<String>,
    output: Option<PathBuf>,
    config: &Config,
) -> Result<()> {
    let renderer = Arc::new(
        FragmentRenderer::new(config.settings.clone())
            .context("Failed to load fragment templates")?,
    );
    let mut engine = TemplateEngine::with_renderer(renderer);

    let html = match template {
        Some(path) => {
            info!("Rendering page template: {}", path.display());
            let source = fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read page template '{}'", path.display()))?;
            engine.register_page(PAGE_TEMPLATE, &source)?;

            let context = serde_json::json!({ "title": title, "gtm_id": gtm_id });
            engine.render_page(PAGE_TEMPLATE, &context)?
        }
        None => {
            info!("Rendering bundled demo page");
            engine.render_demo_page(title.as_deref(), gtm_id.as_deref())?
        }
    };

    match output {
        Some(path) => {
            fs::write(&path, html)
                .await
                .with_context(|| format!("Failed to write page to '{}'", path.display()))?;
            info!("Page written to {}", path.display());
        }
        None => print!("{}", html),
    }

    Ok(())
}

/// Print the fragment table
pub async fn list_fragments() -> Result<()> {
    println!("{:<15} {:<10} TEMPLATE", "FRAGMENT", "GTM ID");
    for kind in FragmentKind::ALL {
        let takes_id = if kind.accepts_gtm_id() { "yes" } else { "no" };
        println!("{:<15} {:<10} {}", kind, takes_id, kind.asset_path());
    }
    Ok(())
}

/// Compile every fragment template and report where each one came from
pub async fn check_templates(config: &Config) -> Result<()> {
    let loader = TemplateLoader::with_dirs(config.settings.template_dirs.clone());

    for kind in FragmentKind::ALL {
        let template = loader.load(kind.asset_path())?;
        let origin = match &template.origin {
            TemplateOrigin::Bundled => "bundled".to_string(),
            TemplateOrigin::Directory(dir) => dir.display().to_string(),
        };
        println!("{:<15} {}", kind, origin);
    }

    // Building the renderer compiles the same templates
    let renderer = FragmentRenderer::new(config.settings.clone())
        .map_err(|e| anyhow::anyhow!("Template check failed: {}", e))?;

    let engine = TemplateEngine::with_renderer(Arc::new(renderer));
    let demo = engine
        .demo_page()
        .map_err(|e| anyhow::anyhow!("Template check failed: {}", e))?;
    let origin = match &demo.origin {
        TemplateOrigin::Bundled => "bundled".to_string(),
        TemplateOrigin::Directory(dir) => dir.display().to_string(),
    };
    println!("{:<15} {}", "demo_page", origin);

    match config.settings.configured_gtm_id() {
        Some(gtm_id) => println!("GTM_ID: {}", gtm_id),
        None => println!("GTM_ID: (not set)"),
    }

    info!("All fragment templates compiled");
    Ok(())
}

/// Write the bundled static assets below `out_dir`
pub async fn export_static(out_dir: PathBuf) -> Result<()> {
    let written = assets::export_static(&out_dir)
        .await
        .with_context(|| format!("Failed to export static assets to '{}'", out_dir.display()))?;

    for path in &written {
        println!("{}", path.display());
    }
    info!("Exported {} static assets", written.len());
    Ok(())
}
