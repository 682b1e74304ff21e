mod common;

use std::time::Duration;

use common::{SiteProcess, write_fixture};
use reqwest::StatusCode;
use serde_json::{Value, json};

// ============================================================================
// Pages
// ============================================================================

#[tokio::test]
async fn pages_and_fallback() {
    let tmp = tempfile::tempdir().unwrap();
    write_fixture(tmp.path());
    let site = SiteProcess::start(tmp.path(), &[]).await;

    for path in ["/", "/dashboard", "/chapters", "/resources", "/team", "/contact", "/preview"] {
        let response = site.get(path).await;
        assert_eq!(response.status(), StatusCode::OK, "{path}");
    }

    let response = site.get("/healthz").await;
    assert_eq!(response.text().await.unwrap(), "ok");

    let response = site.get("/no/such/page").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn chapter_page_renders_fetched_markdown() {
    let tmp = tempfile::tempdir().unwrap();
    write_fixture(tmp.path());
    let site = SiteProcess::start(tmp.path(), &[]).await;

    let body = site.get("/chapter/01").await.text().await.unwrap();
    assert!(body.contains("Inledning till arkitektur som kod"));
    assert!(body.contains("<h1 class=\"md-h1\">Inledning</h1>"));
    assert!(body.contains("Kapitel 1 av 27"));

    let body = site.get("/chapter/02").await.text().await.unwrap();
    assert!(body.contains("Grundläggande principer"));
    assert!(body.contains("Kunde inte ladda kapitelinnehållet"));

    let response = site.get("/chapter/99").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.text().await.unwrap().contains("Kapitel hittades inte"));
}

#[tokio::test]
async fn raw_docs_passthrough() {
    let tmp = tempfile::tempdir().unwrap();
    write_fixture(tmp.path());
    let site = SiteProcess::start(tmp.path(), &[]).await;

    let response = site.get("/docs/01_inledning.md").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().starts_with("# Inledning"));

    let response = site.get("/docs/saknas.md").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn contact_form_validates_and_thanks() {
    let tmp = tempfile::tempdir().unwrap();
    write_fixture(tmp.path());
    let site = SiteProcess::start(tmp.path(), &[]).await;

    let response = site
        .client
        .post(site.url("/contact"))
        .form(&[("name", "Anna"), ("email", "inte-en-adress")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = site
        .client
        .post(site.url("/contact"))
        .form(&[
            ("name", "Anna Andersson"),
            ("email", "anna@example.se"),
            ("subject", "Workshop"),
            ("message", "Vi vill boka en workshop."),
            ("inquiry_type", "training"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().contains("Vi har mottagit din förfrågan"));
}

// ============================================================================
// Slide canvas
// ============================================================================

#[tokio::test]
async fn slides_json_is_served() {
    let tmp = tempfile::tempdir().unwrap();
    write_fixture(tmp.path());
    let site = SiteProcess::start(tmp.path(), &[]).await;

    let slides: Vec<Value> = site.get("/prezi/slides.json").await.json().await.unwrap();
    assert_eq!(slides.len(), 2);
    assert_eq!(slides[1]["id"], "iac");
}

async fn next_event(response: &mut reqwest::Response, buffer: &mut String) -> String {
    loop {
        if let Some(end) = buffer.find("\n\n") {
            let event = buffer[..end].to_string();
            buffer.drain(..end + 2);
            if event.contains("event: viewport") {
                return event;
            }
            continue;
        }
        let chunk = tokio::time::timeout(Duration::from_secs(5), response.chunk())
            .await
            .expect("timed out waiting for SSE event")
            .unwrap()
            .expect("stream ended");
        buffer.push_str(&String::from_utf8_lossy(&chunk));
    }
}

#[tokio::test]
async fn key_presses_move_open_streams() {
    let tmp = tempfile::tempdir().unwrap();
    write_fixture(tmp.path());
    let site = SiteProcess::start(tmp.path(), &[]).await;

    let mut stream = site.get("/prezi/stream").await;
    assert_eq!(stream.status(), StatusCode::OK);
    let mut buffer = String::new();

    let first = next_event(&mut stream, &mut buffer).await;
    assert!(first.contains("\"slide_id\":\"intro\""), "{first}");

    let accepted: Value = site
        .client
        .post(site.url("/prezi/key"))
        .json(&json!({"key": "ArrowRight"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(accepted["delivered"], 1);

    let moved = next_event(&mut stream, &mut buffer).await;
    assert!(moved.contains("\"slide_id\":\"iac\""), "{moved}");
    assert!(moved.contains("\"zoom\":1.5"), "{moved}");
}

#[tokio::test]
async fn stream_starts_on_requested_slide() {
    let tmp = tempfile::tempdir().unwrap();
    write_fixture(tmp.path());
    let site = SiteProcess::start(tmp.path(), &[]).await;

    let mut stream = site.get("/prezi/stream?id=iac").await;
    let mut buffer = String::new();
    let first = next_event(&mut stream, &mut buffer).await;
    assert!(first.contains("\"index\":1"), "{first}");
}

// ============================================================================
// Shutdown
// ============================================================================

#[tokio::test]
async fn sigterm_shuts_down_with_open_stream() {
    let tmp = tempfile::tempdir().unwrap();
    write_fixture(tmp.path());
    let site = SiteProcess::start(tmp.path(), &[]).await;

    let mut stream = site.get("/prezi/stream").await;
    let mut buffer = String::new();
    next_event(&mut stream, &mut buffer).await;

    assert_eq!(site.terminate().await, Some(143));
}
