// ABOUTME: Integration tests for rendering pages that use the fragment helpers
// ABOUTME: Tests helper tags inside page templates, demo page rendering, and static asset export

use serde_json::json;
use std::sync::Arc;

use cookie_consent::template::TemplateError;
use cookie_consent::{assets, FragmentKind, Settings, TemplateEngine};

mod common;
use common::{renderer, TestEnvironment};

const LAYOUT: &str = r#"<!DOCTYPE html>
<html>
<head>{{gtm_script}}</head>
<body>
{{gtm_noscript}}
<main>{{content}}</main>
{{cookie_banner}}
{{cookie_modal}}
</body>
</html>"#;

#[test]
fn test_layout_with_every_fragment() {
    let engine = TemplateEngine::new(Settings::new().with_gtm_id("GTM-LAYOUT")).unwrap();
    let page = engine
        .render_template(LAYOUT, &json!({ "content": "Hello" }))
        .unwrap();

    assert!(page.contains("<main>Hello</main>"));
    assert!(page.contains("'dataLayer','GTM-LAYOUT'"));
    assert!(page.contains("ns.html?id=GTM-LAYOUT"));
    assert!(page.contains("id=\"lcc-cookie-banner\""));
    assert!(page.contains("id=\"lcc-cookie-modal\""));

    // The head snippet comes before the body snippet
    let script_at = page.find("gtm.js").unwrap();
    let noscript_at = page.find("ns.html").unwrap();
    assert!(script_at < noscript_at);
}

#[test]
fn test_helpers_match_direct_rendering() {
    let settings = Settings::new().with_gtm_id("GTM-DIRECT");
    let direct = Arc::new(renderer(settings));
    let engine = TemplateEngine::with_renderer(Arc::clone(&direct));

    for kind in FragmentKind::ALL {
        let tag = format!("{{{{{}}}}}", kind.template_name());
        let via_helper = engine.render_template(&tag, &json!({})).unwrap();
        assert_eq!(via_helper, direct.render(kind, None).unwrap());
    }
}

#[test]
fn test_literal_helper_argument() {
    let engine = TemplateEngine::new(Settings::new().with_gtm_id("GTM-CONFIG")).unwrap();
    let page = engine
        .render_template("{{gtm_script \"GTM-LITERAL\"}}", &json!({}))
        .unwrap();

    assert!(page.contains("GTM-LITERAL"));
    assert!(!page.contains("GTM-CONFIG"));
}

#[test]
fn test_missing_context_argument_falls_back_to_configuration() {
    let engine = TemplateEngine::new(Settings::new().with_gtm_id("GTM-CONFIG")).unwrap();
    let page = engine
        .render_template("{{gtm_noscript page.gtm_id}}", &json!({ "page": {} }))
        .unwrap();

    assert!(page.contains("id=GTM-CONFIG"));
}

#[test]
fn test_page_file_registration() {
    let env = TestEnvironment::new();
    let path = env.write_file("page.html", "<head>{{gtm_script gtm_id}}</head>");

    let mut engine = TemplateEngine::new(Settings::new()).unwrap();
    engine.register_page_file("page", &path).unwrap();

    let page = engine
        .render_page("page", &json!({ "gtm_id": "GTM-FILE" }))
        .unwrap();
    assert!(page.contains("'dataLayer','GTM-FILE'"));

    let err = engine
        .register_page_file("gone", &env.path().join("missing.html"))
        .unwrap_err();
    assert!(matches!(err, TemplateError::ReadError { .. }));
}

#[test]
fn test_demo_page_respects_overrides() {
    let env = TestEnvironment::new();
    let demo_dir = env.template_dir().join("cookie_consent");
    std::fs::create_dir_all(&demo_dir).unwrap();
    std::fs::write(
        demo_dir.join("demo_page.html"),
        "<title>{{title}}</title>{{cookie_banner}}",
    )
    .unwrap();

    let engine = TemplateEngine::new(Settings::new().with_template_dir(env.template_dir())).unwrap();
    let page = engine.render_demo_page(Some("Custom"), None).unwrap();

    assert!(page.starts_with("<title>Custom</title>"));
    assert!(page.contains("id=\"lcc-cookie-banner\""));
}

#[tokio::test]
async fn test_demo_page_references_exported_assets() {
    let env = TestEnvironment::new();
    let static_root = env.path().join("static");
    assets::export_static(&static_root).await.unwrap();

    let engine = TemplateEngine::new(Settings::new()).unwrap();
    let page = engine.render_demo_page(None, None).unwrap();

    for asset in assets::STATIC_ASSETS {
        assert!(page.contains(&format!("/static/{}", asset.path)));
        assert!(static_root.join(asset.path).is_file());
    }
}
