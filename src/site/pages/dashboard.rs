//! Project dashboard (`/dashboard`).

use crate::catalog::ChapterStatus;
use crate::catalog::chapters;
use crate::catalog::resources;
use crate::markdown::escape::escape_html;

use super::layout::{Nav, link, page};

/// Renders chapter counts per area and the chapter status table.
#[must_use]
pub fn render() -> String {
    let all = chapters::all();
    let published = all
        .iter()
        .filter(|c| c.status == ChapterStatus::Published)
        .count();
    let areas = chapters::areas();

    let mut body = String::from("<h1>Projektöversikt</h1><div class=\"grid\">");
    body.push_str(&format!(
        "<div class=\"card\"><h3>Totalt kapitel</h3><p>{}</p></div>",
        all.len()
    ));
    body.push_str(&format!(
        "<div class=\"card\"><h3>Fokusområden</h3><p>{}</p></div>",
        areas.len()
    ));
    body.push_str(&format!(
        "<div class=\"card\"><h3>Status</h3><p>{published} av {} klara</p></div>",
        all.len()
    ));
    if let Some(date) = resources::last_updated() {
        body.push_str(&format!(
            "<div class=\"card\"><h3>Senast uppdaterad</h3><p>{}</p></div>",
            date.format("%Y-%m-%d")
        ));
    }
    body.push_str("</div>");

    body.push_str("<section class=\"card\"><h2>Fokusområden</h2><table><tr><th>Område</th><th>Kapitel</th></tr>");
    for area in &areas {
        let count = all.iter().filter(|c| c.area == *area).count();
        body.push_str(&format!(
            "<tr><td>{}</td><td>{count}</td></tr>",
            escape_html(area)
        ));
    }
    body.push_str("</table></section>");

    body.push_str(
        "<section class=\"card\"><h2>Kapitelstruktur</h2><table>\
<tr><th>Nr</th><th>Titel</th><th>Område</th><th>Fil</th><th>Status</th></tr>",
    );
    for chapter in all {
        let class = match chapter.status {
            ChapterStatus::Published => "badge done",
            ChapterStatus::Planned => "badge",
        };
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td><code>docs/{}</code></td><td><span class=\"{class}\">{}</span></td></tr>",
            chapter.id,
            link(&chapter.route(), chapter.title),
            escape_html(chapter.area),
            escape_html(chapter.filename),
            chapter.status.label(),
        ));
    }
    body.push_str("</table></section>");

    page("Projektöversikt", Nav::Dashboard, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_every_chapter() {
        let html = render();
        for chapter in chapters::all() {
            assert!(html.contains(chapter.filename), "{} missing", chapter.filename);
        }
        assert!(html.contains("Kapitelstruktur"));
        assert!(html.contains("Klar"));
    }
}
