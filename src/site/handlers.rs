//! Route handlers.

use std::convert::Infallible;
use std::path::Path as FsPath;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Form, Path, Query, State};
use axum::http::{StatusCode, Uri, header};
use axum::response::sse::{Event as SseEvent, KeepAlive, Sse};
use axum::response::{Html, IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tokio_stream::{Stream, StreamExt};
use tracing::{debug, warn};

use crate::catalog::ALL_AREAS;
use crate::deck::{DeckSession, Key, Slide, ViewportTransition};
use crate::error::ContentError;
use crate::observability::metrics;

use super::contact::{self, ContactForm};
use super::pages;
use super::state::AppState;

type Shared = State<Arc<AppState>>;

// ============================================================================
// Static pages
// ============================================================================

pub async fn home() -> Html<String> {
    Html(pages::home::render())
}

pub async fn dashboard() -> Html<String> {
    Html(pages::dashboard::render())
}

pub async fn team() -> Html<String> {
    Html(pages::team::render())
}

pub async fn resources() -> Html<String> {
    Html(pages::resources::render())
}

pub async fn healthz() -> &'static str {
    "ok"
}

// ============================================================================
// Chapters
// ============================================================================

/// Query string of `/chapters`.
#[derive(Debug, Default, Deserialize)]
pub struct ChapterFilter {
    #[serde(default)]
    pub q: String,
    pub area: Option<String>,
}

pub async fn chapters(Query(filter): Query<ChapterFilter>) -> Html<String> {
    let area = filter
        .area
        .as_deref()
        .filter(|a| !a.is_empty())
        .unwrap_or(ALL_AREAS);
    Html(pages::chapters::render(&filter.q, area))
}

pub async fn chapter(State(state): Shared, Path(chapter_id): Path<String>) -> Response {
    match state.loader.load(&chapter_id).await {
        Some(content) => Html(pages::chapter::render(&content)).into_response(),
        None => {
            debug!(chapter = %chapter_id, "unknown chapter requested");
            (
                StatusCode::NOT_FOUND,
                Html(pages::chapter::render_not_found(&chapter_id)),
            )
                .into_response()
        }
    }
}

/// Query string of `/preview`.
#[derive(Debug, Default, Deserialize)]
pub struct PreviewQuery {
    pub chapter: Option<String>,
}

pub async fn preview(Query(query): Query<PreviewQuery>) -> Html<String> {
    let index = pages::preview::clamp_index(query.chapter.as_deref());
    Html(pages::preview::render(index))
}

// ============================================================================
// Contact
// ============================================================================

pub async fn contact_form() -> Html<String> {
    Html(pages::contact::render_form(&ContactForm::default(), &[]))
}

pub async fn contact_submit(State(state): Shared, Form(form): Form<ContactForm>) -> Response {
    match form.validate() {
        Ok(submission) => {
            contact::submit(&submission, state.submit_delay).await;
            Html(pages::contact::render_thanks(&submission)).into_response()
        }
        Err(errors) => {
            metrics::record_contact_submission(false);
            debug!(fields = errors.len(), "contact form rejected");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(pages::contact::render_form(&form, &errors)),
            )
                .into_response()
        }
    }
}

// ============================================================================
// Slide deck
// ============================================================================

/// Query string of the deck routes.
#[derive(Debug, Default, Deserialize)]
pub struct SlideQuery {
    pub id: Option<String>,
}

pub async fn prezi(State(state): Shared, Query(query): Query<SlideQuery>) -> Html<String> {
    let session = DeckSession::start(Arc::clone(&state.deck), query.id.as_deref());
    Html(pages::prezi::render(&session))
}

pub async fn prezi_slides(State(state): Shared) -> impl IntoResponse {
    let slides: Vec<Slide> = state.deck.to_vec();
    ([(header::CACHE_CONTROL, "no-store")], Json(slides))
}

/// `GET /prezi/stream` handler.
///
/// The stream owns a [`DeckSession`] and a key listener. It sends the
/// starting viewport, then one transition per accepted key press, and
/// unregisters the listener when the client goes away.
pub async fn prezi_stream(
    State(state): Shared,
    Query(query): Query<SlideQuery>,
) -> Sse<impl Stream<Item = Result<SseEvent, Infallible>>> {
    let mut session = DeckSession::start(Arc::clone(&state.deck), query.id.as_deref());
    let listener = state.keys.listen();
    debug!(
        listener = listener.id(),
        start = session.index(),
        "deck stream opened"
    );

    let initial = session.initial_transition();
    let updates = listener.filter_map(move |key| session.handle_key(&key));
    let stream = tokio_stream::iter(initial)
        .chain(updates)
        .map(|transition| Ok(viewport_event(&transition)));

    Sse::new(stream).keep_alive(KeepAlive::default())
}

fn viewport_event(transition: &ViewportTransition) -> SseEvent {
    SseEvent::default()
        .event("viewport")
        .json_data(transition)
        .unwrap_or_else(|e| {
            warn!(error = %e, "failed to encode viewport transition");
            SseEvent::default().comment("encode error")
        })
}

/// Body of `POST /prezi/key`.
#[derive(Debug, Deserialize)]
pub struct KeyPress {
    pub key: Key,
}

/// Response of `POST /prezi/key`.
#[derive(Debug, Serialize)]
pub struct KeyAccepted {
    /// Listeners that received the press.
    pub delivered: usize,
}

pub async fn prezi_key(State(state): Shared, Json(press): Json<KeyPress>) -> Json<KeyAccepted> {
    let delivered = state.keys.publish(press.key);
    Json(KeyAccepted { delivered })
}

// ============================================================================
// Raw documents
// ============================================================================

pub async fn docs(State(state): Shared, Path(file): Path<String>) -> Response {
    match state.loader.source().fetch(&file).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type_for(&file))], bytes).into_response(),
        Err(e) => {
            debug!(file = %file, error = %e, "document request failed");
            (document_status(&e), e.kind()).into_response()
        }
    }
}

/// Response status for a failed document fetch.
///
/// A missing document is 404 whichever source reported it; other
/// upstream failures are 502.
#[must_use]
pub const fn document_status(error: &ContentError) -> StatusCode {
    match error {
        ContentError::NotFound(_) | ContentError::Status { status: 404 } => StatusCode::NOT_FOUND,
        ContentError::InvalidPath(_) => StatusCode::BAD_REQUEST,
        ContentError::Status { .. } | ContentError::Network(_) => StatusCode::BAD_GATEWAY,
        ContentError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Content type for a served document, by extension.
#[must_use]
pub fn content_type_for(file: &str) -> &'static str {
    let ext = FsPath::new(file)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("md") => "text/markdown; charset=utf-8",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("pdf") => "application/pdf",
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

// ============================================================================
// Fallback
// ============================================================================

pub async fn not_found(uri: Uri) -> Response {
    metrics::record_page_view("__unknown__");
    (
        StatusCode::NOT_FOUND,
        Html(pages::not_found::render(uri.path())),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_types() {
        assert_eq!(content_type_for("01_inledning.md"), "text/markdown; charset=utf-8");
        assert_eq!(content_type_for("images/x.PNG"), "image/png");
        assert_eq!(content_type_for("slides.json"), "application/json");
        assert_eq!(content_type_for("noext"), "application/octet-stream");
    }
}
