//! Book overview (`/`).

use crate::catalog::chapters;
use crate::catalog::overview::{AUTHORS, BOOK_TAGLINE, BOOK_TITLE, TARGET_AUDIENCE, THEMES};
use crate::markdown::escape::escape_html;

use super::layout::{Nav, list, page};

const LEARNING_GOALS: [&str; 5] = [
    "Designa och implementera omfattande IaC-lösningar",
    "Etablera robusta workflows för infrastrukturutveckling",
    "Navigera svenska compliance-krav",
    "Leda organisatorisk transformation",
    "Optimera kostnader och prestanda",
];

const BOOK_PARTS: [(&str, &str, &str); 4] = [
    ("Del 1: Grunder", "Kapitel 1-4", "Grundläggande koncept, principer och dokumentationspraxis"),
    ("Del 2: Teknisk implementation", "Kapitel 5-11", "Automation, molnarkitektur, säkerhet och compliance"),
    ("Del 3: Testning & drift", "Kapitel 12-15", "Teststrategier, praktisk implementation och kostnadsoptimering"),
    ("Del 4: Organisation & framtid", "Kapitel 16-24", "Organisationsförändring, team, digitalisering och framtidsperspektiv"),
];

/// Renders the front page.
#[must_use]
pub fn render() -> String {
    let mut body = format!(
        "<section class=\"card\"><h1>{}</h1><p class=\"muted\">{}</p>\
<p><span class=\"badge\">{} kapitel</span></p>\
<p><a href=\"/chapters\">Utforska kapitlen</a> · <a href=\"/preview\">Förhandsvisa boken</a> · \
<a href=\"/prezi/\">Presentation</a></p></section>",
        escape_html(BOOK_TITLE),
        escape_html(BOOK_TAGLINE),
        chapters::all().len(),
    );

    body.push_str("<div class=\"grid\">");
    body.push_str(&format!(
        "<section class=\"card\"><h2>Vad du kommer att lära dig</h2>{}</section>",
        list(LEARNING_GOALS)
    ));
    body.push_str(&format!(
        "<section class=\"card\"><h2>Bokens huvudteman</h2>{}</section>",
        list(THEMES)
    ));
    body.push_str(&format!(
        "<section class=\"card\"><h2>Målgrupp</h2>{}</section>",
        list(TARGET_AUDIENCE)
    ));
    body.push_str("<section class=\"card\"><h2>Författare</h2>");
    for author in &AUTHORS {
        body.push_str(&format!(
            "<p><strong>{}</strong><br><span class=\"muted\">{}</span></p>",
            escape_html(author.name),
            escape_html(author.title)
        ));
    }
    body.push_str("</section></div>");

    body.push_str("<section class=\"card\"><h2>Bokens struktur och progression</h2><div class=\"grid\">");
    for (part, span, summary) in BOOK_PARTS {
        body.push_str(&format!(
            "<div><h3>{part}</h3><span class=\"badge\">{span}</span><p class=\"muted\">{summary}</p></div>"
        ));
    }
    body.push_str("</div></section>");

    body.push_str(
        "<section class=\"card\"><h2>Redo att börja din IaC-resa?</h2>\
<p><a href=\"/chapter/01\">Börja läsa</a> · <a href=\"/contact\">Kontakta oss</a></p></section>",
    );

    page(BOOK_TITLE, Nav::Home, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_themes_and_author() {
        let html = render();
        assert!(html.contains("Bokens huvudteman"));
        assert!(html.contains("Molnarkitektur som kod"));
        assert!(html.contains("Gunnar Nordqvist"));
        assert!(html.contains("27 kapitel"));
    }
}
