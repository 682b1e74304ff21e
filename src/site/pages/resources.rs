//! Downloadable resources (`/resources`).

use crate::catalog::ResourceKind;
use crate::catalog::resources;
use crate::markdown::escape::{escape_attr, escape_html};

use super::layout::{Nav, page};

const SECTIONS: [ResourceKind; 4] = [
    ResourceKind::BookFormat,
    ResourceKind::Whitepaper,
    ResourceKind::Presentation,
    ResourceKind::CodeExample,
];

/// Renders every resource, grouped by kind, newest first.
#[must_use]
pub fn render() -> String {
    let mut body = String::from("<h1>Resurser</h1>");
    if let Some(date) = resources::last_updated() {
        body.push_str(&format!(
            "<p class=\"muted\">Senast uppdaterad {}</p>",
            date.format("%Y-%m-%d")
        ));
    }

    for kind in SECTIONS {
        body.push_str(&format!("<h2>{}</h2><div class=\"grid\">", kind.heading()));
        for resource in resources::by_kind(kind) {
            let mut meta = vec![resource.format];
            meta.extend(resource.category);
            meta.extend(resource.detail);
            meta.extend(resource.audience);
            let badges: String = meta
                .iter()
                .map(|m| format!("<span class=\"badge\">{}</span> ", escape_html(m)))
                .collect();
            body.push_str(&format!(
                "<div class=\"card\"><h3>{}</h3><p class=\"muted\">{}</p><p>{badges}</p>\
<p><a href=\"{}\">Ladda ner</a> <small class=\"muted\">{}</small></p></div>",
                escape_html(resource.title),
                escape_html(resource.description),
                escape_attr(resource.download_url),
                escape_html(resource.date),
            ));
        }
        body.push_str("</div>");
    }

    page("Resurser", Nav::Resources, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_and_resource_is_listed() {
        let html = render();
        for kind in SECTIONS {
            assert!(html.contains(kind.heading()));
        }
        for resource in &crate::catalog::RESOURCES {
            assert!(html.contains(&escape_html(resource.title)), "{}", resource.title);
        }
    }
}
