//! Book preview with a table of contents (`/preview?chapter=<i>`).

use crate::catalog::chapters;
use crate::markdown::escape::{escape_attr, escape_html};

use super::layout::{Nav, page};

/// Clamps a requested preview position to the catalogue.
///
/// Missing or unparsable input selects the first chapter.
#[must_use]
pub fn clamp_index(requested: Option<&str>) -> usize {
    let last = chapters::all().len().saturating_sub(1);
    requested
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .map_or(0, |i| i.min(last))
}

/// Renders the preview focused on the chapter at `index`.
#[must_use]
pub fn render(index: usize) -> String {
    let all = chapters::all();
    let index = index.min(all.len().saturating_sub(1));
    let Some(current) = all.get(index) else {
        return page("Bokförhandsvisning", Nav::Preview, "<p>Inga kapitel.</p>");
    };

    let mut toc = String::from("<aside class=\"card\"><h2>Innehållsförteckning</h2><ol>");
    for (i, chapter) in all.iter().enumerate() {
        let class = if i == index { " class=\"current\"" } else { "" };
        toc.push_str(&format!(
            "<li><a href=\"/preview?chapter={i}\"{class}><strong>{}. {}</strong><br><small>{}</small></a></li>",
            chapter.id,
            escape_html(chapter.title),
            escape_html(chapter.area)
        ));
    }
    toc.push_str("</ol></aside>");

    let previous = index.checked_sub(1).map_or_else(
        || "<span class=\"disabled\">Föregående kapitel</span>".to_string(),
        |i| format!("<a href=\"/preview?chapter={i}\">Föregående kapitel</a>"),
    );
    let next = if index + 1 < all.len() {
        format!("<a href=\"/preview?chapter={}\">Nästa kapitel</a>", index + 1)
    } else {
        "<span class=\"disabled\">Nästa kapitel</span>".to_string()
    };

    let body = format!(
        "<h1>Bokförhandsvisning <span class=\"badge\">Kapitel {id} av {total}</span></h1>\
<div class=\"sidebar\">{toc}<div><article class=\"card\">\
<span class=\"badge\">Kapitel {id}</span> <span class=\"badge\">{area}</span><h2>{title}</h2>\
<div class=\"md-quote\"><p><strong>Förhandsvisning:</strong> Detta är kapitel {id} - {title}</p>\
<p>Läs hela kapitlet på <a href=\"{route}\">kapitelsidan</a>.</p></div>\
<h3>Exempel på innehåll</h3><p>Detta kapitel behandlar {title_lower} inom ramen för Infrastructure as Code.</p>\
<h3>Huvudavsnitt</h3><p>Kapitlet fokuserar på {area_lower} och ger läsaren djupgående kunskap inom detta område av Infrastructure as Code.</p>\
</article><nav class=\"pager\">{previous}<span class=\"muted\">{position} av {total} kapitel</span>{next}</nav></div></div>",
        id = current.id,
        total = all.len(),
        area = escape_html(current.area),
        title = escape_html(current.title),
        title_lower = escape_html(&current.title.to_lowercase()),
        area_lower = escape_html(&current.area.to_lowercase()),
        route = escape_attr(&current.route()),
        position = index + 1,
    );

    page("Bokförhandsvisning", Nav::Preview, &body)
}
