//! Chapter list with search and area filter (`/chapters`).

use crate::catalog::ALL_AREAS;
use crate::catalog::chapters;
use crate::markdown::escape::{escape_attr, escape_html};

use super::layout::{Nav, page};

/// Renders the chapters matching `query` within `area`.
#[must_use]
pub fn render(query: &str, area: &str) -> String {
    let matches = chapters::filter(query, area);

    let mut options = format!(
        "<option value=\"{ALL_AREAS}\"{}>Alla områden</option>",
        selected(area == ALL_AREAS)
    );
    for candidate in chapters::areas() {
        options.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            escape_attr(candidate),
            selected(candidate == area),
            escape_html(candidate)
        ));
    }

    let mut body = format!(
        "<h1>Kapitelöversikt</h1>\
<form method=\"get\" action=\"/chapters\" class=\"card\">\
<label for=\"q\">Sök kapitel</label><input id=\"q\" name=\"q\" value=\"{}\" placeholder=\"Sök i kapitel...\">\
<label for=\"area\">Område</label><select id=\"area\" name=\"area\">{options}</select>\
<button type=\"submit\">Filtrera</button></form>\
<p class=\"muted\">Visar {} av {} kapitel</p><div class=\"grid\">",
        escape_attr(query),
        matches.len(),
        chapters::all().len(),
    );

    if matches.is_empty() {
        body.push_str("<p>Inga kapitel matchar din sökning.</p>");
    }
    for chapter in matches {
        let topics: String = chapter
            .key_topics
            .iter()
            .map(|topic| format!("<span class=\"badge\">{}</span> ", escape_html(topic)))
            .collect();
        body.push_str(&format!(
            "<article class=\"card\"><span class=\"badge\">Kapitel {}</span> \
<span class=\"badge\">{}</span><h3>{}</h3><p class=\"muted\">{}</p>\
<h4>Nyckelämnen:</h4><p>{topics}</p><a href=\"{}\">Läs kapitel</a></article>",
            chapter.id,
            escape_html(chapter.area),
            escape_html(chapter.title),
            escape_html(chapter.summary),
            escape_attr(&chapter.route()),
        ));
    }
    body.push_str("</div>");

    page("Kapitel", Nav::Chapters, &body)
}

const fn selected(yes: bool) -> &'static str {
    if yes { " selected" } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfiltered_lists_all() {
        let html = render("", ALL_AREAS);
        assert!(html.contains("Visar 27 av 27 kapitel"));
        assert!(html.contains("href=\"/chapter/01\""));
    }

    #[test]
    fn search_narrows_and_is_echoed() {
        let html = render("molnarkitektur", ALL_AREAS);
        assert!(html.contains("value=\"molnarkitektur\""));
        assert!(!html.contains("Visar 27 av 27"));
    }

    #[test]
    fn cards_show_summary_and_topics() {
        let html = render("", ALL_AREAS);
        assert!(html.contains("Strukturerad metod för att dokumentera viktiga arkitekturbeslut"));
        assert!(html.contains("Nyckelämnen:"));
        assert!(html.contains("<span class=\"badge\">ADR structure</span>"));
        assert!(html.contains("Läs kapitel"));
    }

    #[test]
    fn summary_search_finds_chapter() {
        let html = render("arkitekturbeslut", ALL_AREAS);
        assert!(html.contains("Visar 1 av 27 kapitel"));
        assert!(html.contains("href=\"/chapter/04\""));
    }

    #[test]
    fn no_matches_message() {
        let html = render("zzzz-inget", ALL_AREAS);
        assert!(html.contains("Inga kapitel matchar"));
    }

    #[test]
    fn query_is_escaped() {
        let html = render("\"><script>", ALL_AREAS);
        assert!(!html.contains("<script>"));
    }
}
