//! Chapter content loading.
//!
//! Given a chapter, derive its filename, fetch the markdown from the
//! configured [`DocSource`] and render it. Every call fetches again; there
//! is no cache and no retry. A failed fetch never fails the caller: it
//! produces [`LoadState::Failed`] with a reader-facing message and, when
//! enabled, generated placeholder markdown.

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::catalog::chapters::{self, Chapter};
use crate::content::source::DocSource;
use crate::markdown::{self, RenderOptions};
use crate::observability::metrics;

/// Message shown when a chapter's markdown could not be fetched.
pub const LOAD_ERROR_MESSAGE: &str = "Kunde inte ladda kapitelinnehållet. Försök igen senare.";

/// Message shown for an unknown chapter id.
pub const NOT_FOUND_MESSAGE: &str = "Kapitel hittades inte";

/// Outcome of loading one chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// The markdown was fetched and rendered.
    Loaded {
        /// Raw markdown as fetched.
        markdown: String,
        /// Rendered HTML fragment.
        html: String,
    },
    /// The fetch failed.
    Failed {
        /// Reader-facing message.
        message: String,
        /// Underlying error, for logs and the CLI.
        cause: String,
        /// Rendered placeholder, if placeholders are enabled.
        placeholder_html: Option<String>,
    },
}

impl LoadState {
    /// Whether the chapter's own markdown was loaded.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}

/// A chapter together with its loaded content.
#[derive(Debug, Clone)]
pub struct ChapterContent {
    /// Position in the catalogue.
    pub index: usize,
    /// Catalogue entry the content belongs to.
    pub chapter: &'static Chapter,
    /// Outcome of loading the chapter's markdown.
    pub state: LoadState,
}

impl ChapterContent {
    /// "Kapitel i av N" label for this chapter.
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("Kapitel {} av {}", self.index + 1, chapters::all().len())
    }

    /// Route of the previous chapter, if any.
    #[must_use]
    pub fn previous_route(&self) -> Option<String> {
        chapters::previous_route(self.index)
    }

    /// Route of the next chapter, if any.
    #[must_use]
    pub fn next_route(&self) -> Option<String> {
        chapters::next_route(self.index)
    }
}

/// Loads chapter markdown from a [`DocSource`] and renders it.
#[derive(Debug, Clone)]
pub struct ChapterLoader {
    source: Arc<dyn DocSource>,
    render: RenderOptions,
    placeholders: bool,
}

impl ChapterLoader {
    /// Creates a loader over `source`.
    pub fn new(source: Arc<dyn DocSource>, render: RenderOptions, placeholders: bool) -> Self {
        Self {
            source,
            render,
            placeholders,
        }
    }

    /// The underlying document source.
    #[must_use]
    pub fn source(&self) -> &Arc<dyn DocSource> {
        &self.source
    }

    /// Render options used for chapter markdown.
    #[must_use]
    pub const fn render_options(&self) -> &RenderOptions {
        &self.render
    }

    /// Loads the chapter with the given two-digit id.
    ///
    /// Returns `None` if no chapter has that id.
    pub async fn load(&self, chapter_id: &str) -> Option<ChapterContent> {
        let (index, _) = chapters::find(chapter_id)?;
        self.load_index(index).await
    }

    /// Loads the chapter at `index` in the catalogue.
    ///
    /// Returns `None` if `index` is out of range.
    pub async fn load_index(&self, index: usize) -> Option<ChapterContent> {
        let chapter = chapters::get(index)?;
        let started = Instant::now();
        let result = self.source.fetch_text(chapter.filename).await;
        metrics::record_fetch_duration(started.elapsed());

        let state = match result {
            Ok(markdown) => {
                info!(
                    chapter = chapter.id,
                    bytes = markdown.len(),
                    source = %self.source.describe(),
                    "chapter loaded"
                );
                metrics::record_fetch("ok");
                let html = markdown::render(&markdown, &self.render);
                LoadState::Loaded { markdown, html }
            }
            Err(e) => {
                warn!(
                    chapter = chapter.id,
                    filename = chapter.filename,
                    kind = e.kind(),
                    error = %e,
                    "failed to load chapter markdown"
                );
                metrics::record_fetch(e.kind());
                let placeholder_html = self
                    .placeholders
                    .then(|| markdown::render(&placeholder_markdown(chapter), &self.render));
                LoadState::Failed {
                    message: LOAD_ERROR_MESSAGE.to_string(),
                    cause: e.to_string(),
                    placeholder_html,
                }
            }
        };

        Some(ChapterContent {
            index,
            chapter,
            state,
        })
    }
}

/// Fallback markdown shown when a chapter cannot be fetched.
#[must_use]
pub fn placeholder_markdown(chapter: &Chapter) -> String {
    format!(
        "# {title}

*Kapitel {id} - {area}*

![Kapiteldiagram]({diagram})

Det här kapitlet täcker viktiga aspekter av Infrastructure as Code inom området **{area}**.

## Översikt

Detta kapitel ger en djupgående förklaring av koncepten och metoderna inom detta specifika område av Infrastructure as Code.

## Nyckelämnen

- Grundläggande principer och koncept
- Praktiska implementationsstrategier
- Best practices och rekommendationer
- Svenska compliance-krav och anpassningar
- Verktyg och teknologier
- Exempel och fallstudier

## Praktisk tillämpning

Kapitlet innehåller konkreta exempel och kodexempel som kan användas direkt i svenska organisationer.

## Sammanfattning

Detta kapitel ger läsaren de verktyg och kunskaper som behövs för att framgångsrikt implementera dessa aspekter av Infrastructure as Code.

---

*För mer information och praktiska exempel, se de relaterade kapitlen i boken.*
",
        title = chapter.title,
        id = chapter.id,
        area = chapter.area,
        diagram = chapter.diagram_path(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::source::DirDocSource;

    fn loader_for(dir: &std::path::Path, placeholders: bool) -> ChapterLoader {
        ChapterLoader::new(
            Arc::new(DirDocSource::new(dir)),
            RenderOptions::default(),
            placeholders,
        )
    }

    #[tokio::test]
    async fn loads_and_renders_existing_chapter() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("04_adr.md"), "# ADR\n\nBeslut.").unwrap();

        let content = loader_for(tmp.path(), true).load("04").await.unwrap();
        assert_eq!(content.index, 3);
        assert_eq!(content.chapter.id, "04");
        match content.state {
            LoadState::Loaded { markdown, html } => {
                assert_eq!(markdown, "# ADR\n\nBeslut.");
                assert!(html.contains("<h1 class=\"md-h1\">ADR</h1>"));
            }
            LoadState::Failed { .. } => panic!("expected loaded state"),
        }
    }

    #[tokio::test]
    async fn http_origin_errors_fail_the_load() {
        use crate::content::source::HttpDocSource;
        use crate::content::source::tests::local_origin;

        let router = axum::Router::new().route(
            "/docs/04_adr.md",
            axum::routing::get(|| async { (axum::http::StatusCode::BAD_GATEWAY, "") }),
        );
        let origin = local_origin(router).await;
        let source = HttpDocSource::new(&origin, std::time::Duration::from_secs(5)).unwrap();
        let loader = ChapterLoader::new(Arc::new(source), RenderOptions::default(), false);

        let content = loader.load("04").await.unwrap();
        match content.state {
            LoadState::Failed {
                message,
                cause,
                placeholder_html,
            } => {
                assert_eq!(message, LOAD_ERROR_MESSAGE);
                assert_eq!(cause, "HTTP error! status: 502");
                assert!(placeholder_html.is_none());
            }
            LoadState::Loaded { .. } => panic!("expected failed state"),
        }

        let content = loader.load("05").await.unwrap();
        assert!(!content.state.is_loaded());
    }

    #[tokio::test]
    async fn missing_file_fails_with_placeholder() {
        let tmp = tempfile::tempdir().unwrap();
        let content = loader_for(tmp.path(), true).load("06").await.unwrap();
        match content.state {
            LoadState::Failed {
                message,
                placeholder_html,
                ..
            } => {
                assert_eq!(message, LOAD_ERROR_MESSAGE);
                let html = placeholder_html.expect("placeholder enabled");
                assert!(html.contains("Molnarkitektur som kod"));
                assert!(html.contains("diagram_06_molnarkitektur.png"));
            }
            LoadState::Loaded { .. } => panic!("expected failure"),
        }
    }

    #[tokio::test]
    async fn placeholder_can_be_disabled() {
        let tmp = tempfile::tempdir().unwrap();
        let content = loader_for(tmp.path(), false).load("06").await.unwrap();
        assert!(matches!(
            content.state,
            LoadState::Failed {
                placeholder_html: None,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn unknown_chapter_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let loader = loader_for(tmp.path(), true);
        assert!(loader.load("99").await.is_none());
        assert!(loader.load_index(27).await.is_none());
    }

    #[tokio::test]
    async fn reloading_fetches_again() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("01_inledning.md");
        std::fs::write(&path, "första").unwrap();
        let loader = loader_for(tmp.path(), true);
        assert!(loader.load("01").await.unwrap().state.is_loaded());

        std::fs::write(&path, "andra").unwrap();
        match loader.load("01").await.unwrap().state {
            LoadState::Loaded { markdown, .. } => assert_eq!(markdown, "andra"),
            LoadState::Failed { .. } => panic!("expected loaded state"),
        }
    }

    #[test]
    fn placeholder_mentions_chapter_and_area() {
        let (_, chapter) = chapters::find("09").unwrap();
        let md = placeholder_markdown(chapter);
        assert!(md.starts_with("# Säkerhet i Architecture as Code"));
        assert!(md.contains("*Kapitel 09 - Säkerhet*"));
        assert!(md.contains("images/diagram_09_sakerhet.png"));
    }

    #[test]
    fn position_label_and_neighbours() {
        let content = ChapterContent {
            index: 0,
            chapter: &chapters::CHAPTERS[0],
            state: LoadState::Loaded {
                markdown: String::new(),
                html: String::new(),
            },
        };
        assert_eq!(content.position_label(), "Kapitel 1 av 27");
        assert_eq!(content.previous_route(), None);
        assert_eq!(content.next_route().as_deref(), Some("/chapter/02"));
    }
}
