//! Page chrome shared by every route.

use crate::catalog::overview::BOOK_TITLE;
use crate::markdown::escape::{escape_attr, escape_html};

/// Top navigation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Home,
    Chapters,
    Preview,
    Resources,
    Team,
    Contact,
    Dashboard,
    None,
}

const NAV_LINKS: [(Nav, &str, &str); 7] = [
    (Nav::Home, "/", "Hem"),
    (Nav::Chapters, "/chapters", "Kapitel"),
    (Nav::Preview, "/preview", "Förhandsvisning"),
    (Nav::Resources, "/resources", "Resurser"),
    (Nav::Team, "/team", "Agentteam"),
    (Nav::Contact, "/contact", "Kontakt"),
    (Nav::Dashboard, "/dashboard", "Projektöversikt"),
];

const STYLESHEET: &str = r#"
:root { --fg: #0f172a; --muted: #64748b; --primary: #0b5fff; --border: #d0d0d0; --card: #ffffff; --bg: #f8fafc; }
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; color: var(--fg); background: var(--bg); line-height: 1.6; }
header.site { border-bottom: 1px solid var(--border); background: var(--card); padding: 0.75rem 1.5rem; display: flex; gap: 1.5rem; align-items: center; flex-wrap: wrap; }
header.site .brand { font-weight: 700; color: var(--fg); text-decoration: none; }
header.site nav a { color: var(--muted); text-decoration: none; margin-right: 1rem; }
header.site nav a.active { color: var(--primary); font-weight: 600; }
main { max-width: 72rem; margin: 0 auto; padding: 2rem 1.5rem; }
.card { background: var(--card); border: 1px solid var(--border); border-radius: 10px; padding: 1.25rem; margin-bottom: 1rem; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); gap: 1rem; }
.badge { display: inline-block; border: 1px solid var(--border); border-radius: 999px; padding: 0 0.6rem; font-size: 0.8rem; color: var(--muted); }
.badge.done { border-color: #16a34a; color: #16a34a; }
.muted { color: var(--muted); }
.error { border-left: 4px solid #dc2626; background: #fef2f2; padding: 0.75rem 1rem; border-radius: 6px; }
.field-error { color: #dc2626; font-size: 0.85rem; }
.pager { display: flex; justify-content: space-between; align-items: center; margin-top: 1.5rem; }
.pager .disabled { color: var(--muted); pointer-events: none; }
.sidebar { display: grid; grid-template-columns: 18rem 1fr; gap: 2rem; }
.sidebar ol { list-style: none; padding: 0; margin: 0; }
.sidebar li a { display: block; padding: 0.4rem 0.6rem; border-radius: 6px; text-decoration: none; color: var(--fg); }
.sidebar li a.current { background: var(--primary); color: #fff; }
form label { display: block; font-weight: 500; margin-top: 1rem; }
form input, form textarea, form select { width: 100%; padding: 0.5rem; border: 1px solid var(--border); border-radius: 6px; font: inherit; }
form textarea { min-height: 8rem; }
form button { margin-top: 1.25rem; padding: 0.6rem 1.2rem; border: 0; border-radius: 6px; background: var(--primary); color: #fff; font: inherit; cursor: pointer; }
table { width: 100%; border-collapse: collapse; }
th, td { text-align: left; padding: 0.4rem 0.6rem; border-bottom: 1px solid var(--border); }
.md-img { display: block; margin: 1rem auto; border-radius: 6px; }
.md-h1 { font-size: 2rem; margin: 1.5rem 0 1rem; }
.md-h2 { font-size: 1.5rem; margin: 1.25rem 0 0.75rem; border-bottom: 1px solid var(--border); }
.md-h3 { font-size: 1.2rem; margin: 1rem 0 0.5rem; }
.md-p { margin: 0.75rem 0; }
.md-code { font-family: ui-monospace, monospace; background: #f1f5f9; padding: 0.1rem 0.3rem; border-radius: 4px; font-size: 0.9em; }
.md-pre { background: #0f172a; color: #e2e8f0; padding: 1rem; border-radius: 8px; overflow-x: auto; }
.md-pre .md-code { background: none; color: inherit; padding: 0; }
.md-ul { list-style: disc; padding-left: 1.5rem; }
.md-ol { list-style: decimal; padding-left: 1.5rem; }
.md-quote { border-left: 4px solid var(--primary); margin: 1rem 0; padding: 0.25rem 1rem; color: var(--muted); }
"#;

/// Wraps `body` in the full HTML document.
#[must_use]
pub fn page(title: &str, active: Nav, body: &str) -> String {
    page_with_head(title, active, "", body)
}

/// Like [`page`], with extra markup appended to `<head>`.
#[must_use]
pub fn page_with_head(title: &str, active: Nav, head: &str, body: &str) -> String {
    let mut nav = String::new();
    for (entry, href, label) in NAV_LINKS {
        let class = if entry == active { " class=\"active\"" } else { "" };
        nav.push_str(&format!("<a href=\"{href}\"{class}>{label}</a>"));
    }
    format!(
        "<!DOCTYPE html>\n<html lang=\"sv\">\n<head>\n<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{title} | {book}</title>\n<style>{STYLESHEET}</style>\n{head}</head>\n<body>\n\
<header class=\"site\"><a class=\"brand\" href=\"/\">{book}</a><nav>{nav}</nav></header>\n\
<main>\n{body}\n</main>\n</body>\n</html>\n",
        title = escape_html(title),
        book = escape_html(BOOK_TITLE),
    )
}

/// `<a>` with an escaped target and label.
#[must_use]
pub fn link(href: &str, label: &str) -> String {
    format!("<a href=\"{}\">{}</a>", escape_attr(href), escape_html(label))
}

/// `<ul>` of escaped items.
#[must_use]
pub fn list<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::from("<ul>");
    for item in items {
        out.push_str(&format!("<li>{}</li>", escape_html(item)));
    }
    out.push_str("</ul>");
    out
}
