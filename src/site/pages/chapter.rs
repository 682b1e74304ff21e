//! Chapter detail (`/chapter/{chapter_id}`).

use crate::catalog::chapters;
use crate::content::{ChapterContent, LoadState, NOT_FOUND_MESSAGE};
use crate::markdown::escape::{escape_attr, escape_html};

use super::layout::{Nav, link, page};

/// Renders a loaded (or failed) chapter.
#[must_use]
pub fn render(content: &ChapterContent) -> String {
    let chapter = content.chapter;
    let mut body = format!(
        "<p><a href=\"/chapters\">Alla kapitel</a></p>\
<header class=\"card\"><span class=\"badge\">Kapitel {id}</span> <span class=\"badge\">{area}</span> \
<span class=\"badge\">{position}</span><h1>{title}</h1>\
<p class=\"muted\">Källa: <a href=\"/docs/{file}\">docs/{file_text}</a></p></header>",
        id = chapter.id,
        area = escape_html(chapter.area),
        position = content.position_label(),
        title = escape_html(chapter.title),
        file = escape_attr(chapter.filename),
        file_text = escape_html(chapter.filename),
    );

    body.push_str("<article class=\"card\">");
    match &content.state {
        LoadState::Loaded { html, .. } => body.push_str(html),
        LoadState::Failed {
            message,
            placeholder_html,
            ..
        } => {
            body.push_str(&format!(
                "<div class=\"error\" role=\"alert\">{} <a href=\"{}\">Försök igen</a></div>",
                escape_html(message),
                escape_attr(&chapter.route()),
            ));
            if let Some(html) = placeholder_html {
                body.push_str(html);
            }
        }
    }
    body.push_str("</article>");

    body.push_str("<nav class=\"pager\">");
    match content.previous_route() {
        Some(route) => body.push_str(&link(&route, "Föregående kapitel")),
        None => body.push_str("<span class=\"disabled\">Föregående kapitel</span>"),
    }
    body.push_str(&format!("<span class=\"muted\">{}</span>", content.position_label()));
    match content.next_route() {
        Some(route) => body.push_str(&link(&route, "Nästa kapitel")),
        None => body.push_str("<span class=\"disabled\">Nästa kapitel</span>"),
    }
    body.push_str("</nav>");

    let head = "<script type=\"module\">\
if (document.querySelector('pre.mermaid')) {\
const { default: mermaid } = await import('https://cdn.jsdelivr.net/npm/mermaid@10/dist/mermaid.esm.min.mjs');\
mermaid.initialize({ startOnLoad: true });\
}</script>\n";

    super::layout::page_with_head(chapter.title, Nav::Chapters, head, &body)
}

/// Renders the page for an unknown chapter id.
#[must_use]
pub fn render_not_found(requested: &str) -> String {
    let mut body = format!(
        "<section class=\"card\"><h1>{NOT_FOUND_MESSAGE}</h1>\
<p class=\"muted\">Det finns inget kapitel med nummer <code>{}</code>.</p>",
        escape_html(requested)
    );
    if let Some(id) = chapters::suggest(requested) {
        body.push_str(&format!(
            "<p>Menade du {}?</p>",
            link(&format!("/chapter/{id}"), &format!("kapitel {id}"))
        ));
    }
    body.push_str("<p><a href=\"/chapters\">Tillbaka till kapitelöversikten</a></p></section>");
    page(NOT_FOUND_MESSAGE, Nav::Chapters, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::chapters;

    fn content(index: usize, state: LoadState) -> ChapterContent {
        ChapterContent {
            index,
            chapter: chapters::get(index).unwrap(),
            state,
        }
    }

    #[test]
    fn loaded_chapter_shows_html_and_pager() {
        let html = render(&content(
            1,
            LoadState::Loaded {
                markdown: "# X".to_string(),
                html: "<h1 class=\"md-h1\">X</h1>".to_string(),
            },
        ));
        assert!(html.contains("<h1 class=\"md-h1\">X</h1>"));
        assert!(html.contains("Kapitel 2 av 27"));
        assert!(html.contains("href=\"/chapter/01\""));
        assert!(html.contains("href=\"/chapter/03\""));
    }

    #[test]
    fn failed_chapter_shows_message_and_placeholder() {
        let html = render(&content(
            0,
            LoadState::Failed {
                message: "Kunde inte ladda".to_string(),
                cause: "boom".to_string(),
                placeholder_html: Some("<p>platshållare</p>".to_string()),
            },
        ));
        assert!(html.contains("role=\"alert\">Kunde inte ladda"));
        assert!(html.contains("<p>platshållare</p>"));
        assert!(!html.contains("boom"));
        assert!(html.contains("<span class=\"disabled\">Föregående kapitel</span>"));
    }

    #[test]
    fn failed_chapter_links_back_to_itself() {
        let html = render(&content(
            3,
            LoadState::Failed {
                message: "Kunde inte ladda".to_string(),
                cause: "HTTP error! status: 503".to_string(),
                placeholder_html: None,
            },
        ));
        assert!(html.contains("<a href=\"/chapter/04\">Försök igen</a></div>"));
    }

    #[test]
    fn loaded_chapter_has_no_retry_link() {
        let html = render(&content(
            3,
            LoadState::Loaded {
                markdown: String::new(),
                html: String::new(),
            },
        ));
        assert!(!html.contains("Försök igen"));
    }

    #[test]
    fn not_found_suggests() {
        let html = render_not_found("4");
        assert!(html.contains(NOT_FOUND_MESSAGE));
        assert!(html.contains("href=\"/chapter/04\""));
    }
}
