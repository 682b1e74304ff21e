//! Catch-all 404 page.

use crate::markdown::escape::escape_html;

use super::layout::{Nav, page};

/// Renders the 404 page for `path`.
#[must_use]
pub fn render(path: &str) -> String {
    let body = format!(
        "<section class=\"card\"><h1>404</h1><p>Sidan hittades inte</p>\
<p class=\"muted\"><code>{}</code></p><p><a href=\"/\">Tillbaka till startsidan</a></p></section>",
        escape_html(path)
    );
    page("Sidan hittades inte", Nav::None, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echoes_escaped_path() {
        let html = render("/<x>");
        assert!(html.contains("&lt;x&gt;"));
        assert!(html.contains("404"));
    }
}
