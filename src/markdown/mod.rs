//! Markdown to styled HTML.
//!
//! Chapter markdown is parsed with `pulldown-cmark`. The renderer rewrites
//! the events for the elements the reader styles (headings up to `h3`,
//! paragraphs, lists, block quotes, code, images) into HTML carrying fixed
//! CSS classes, and lets `pulldown-cmark` emit everything else unchanged.
//!
//! Two further rewrites happen on the way:
//! - fenced `mermaid` blocks become `<pre class="mermaid">` so the browser
//!   side diagram script picks them up;
//! - relative link and image targets are resolved against an asset base
//!   (the `/docs/` directory by default), and links to another chapter's
//!   markdown file are turned into that chapter's route.

pub mod escape;

use pulldown_cmark::{
    CodeBlockKind, CowStr, Event, HeadingLevel, LinkType, Options, Parser, Tag, TagEnd,
};

use crate::catalog::chapters;
pub use escape::{escape_attr, escape_html};

/// CSS classes applied to rendered elements.
pub mod class {
    pub const IMG: &str = "md-img";
    pub const H1: &str = "md-h1";
    pub const H2: &str = "md-h2";
    pub const H3: &str = "md-h3";
    pub const P: &str = "md-p";
    pub const CODE: &str = "md-code";
    pub const PRE: &str = "md-pre";
    pub const UL: &str = "md-ul";
    pub const OL: &str = "md-ol";
    pub const BLOCKQUOTE: &str = "md-quote";
}

/// Inline style added to every image.
pub const IMG_STYLE: &str = "max-height: 500px; object-fit: contain";

/// Rendering options.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Prefix for relative link and image targets. Should end with `/`.
    pub asset_base: String,
    /// Rewrite links to known chapter files into `/chapter/<id>` routes.
    pub link_chapters: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            asset_base: "/docs/".to_string(),
            link_chapters: true,
        }
    }
}

/// Image being collected between its start and end events.
struct PendingImage {
    src: String,
    title: String,
    alt: String,
}

/// Renders markdown to an HTML fragment.
#[must_use]
pub fn render(markdown: &str, options: &RenderOptions) -> String {
    let parser = Parser::new_ext(markdown, parser_options());

    let mut events: Vec<Event<'_>> = Vec::new();
    let mut image: Option<PendingImage> = None;
    let mut in_mermaid = false;

    for event in parser {
        // Image alt text arrives as nested events; flatten it to plain text.
        if image.is_some() {
            match event {
                Event::End(TagEnd::Image) => {
                    if let Some(done) = image.take() {
                        events.push(Event::Html(image_tag(&done).into()));
                    }
                }
                Event::Text(text) | Event::Code(text) => {
                    if let Some(pending) = image.as_mut() {
                        pending.alt.push_str(&text);
                    }
                }
                Event::SoftBreak | Event::HardBreak => {
                    if let Some(pending) = image.as_mut() {
                        pending.alt.push(' ');
                    }
                }
                _ => {}
            }
            continue;
        }

        let rewritten = match event {
            Event::Start(Tag::Image {
                dest_url, title, ..
            }) => {
                image = Some(PendingImage {
                    src: resolve_target(&dest_url, options),
                    title: title.into_string(),
                    alt: String::new(),
                });
                continue;
            }
            // Autolinks already carry a complete target.
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                id,
            }) if !matches!(link_type, LinkType::Email | LinkType::Autolink) => {
                Event::Start(Tag::Link {
                    link_type,
                    dest_url: CowStr::from(resolve_target(&dest_url, options)),
                    title,
                    id,
                })
            }
            Event::Start(Tag::Heading {
                level,
                id,
                classes,
                attrs,
            }) => match heading_class(level) {
                Some(class) => Event::Html(open_heading(level, class, id.as_deref()).into()),
                None => Event::Start(Tag::Heading {
                    level,
                    id,
                    classes,
                    attrs,
                }),
            },
            Event::End(TagEnd::Heading(level)) if heading_class(level).is_some() => {
                Event::Html(format!("</{level}>\n").into())
            }
            Event::Start(Tag::Paragraph) => Event::Html(open_tag("p", class::P).into()),
            Event::End(TagEnd::Paragraph) => Event::Html("</p>\n".into()),
            Event::Start(Tag::List(None)) => {
                Event::Html(format!("{}\n", open_tag("ul", class::UL)).into())
            }
            Event::Start(Tag::List(Some(start))) => {
                let tag = if start == 1 {
                    open_tag("ol", class::OL)
                } else {
                    format!("<ol class=\"{}\" start=\"{start}\">", class::OL)
                };
                Event::Html(format!("{tag}\n").into())
            }
            Event::End(TagEnd::List(ordered)) => {
                Event::Html(if ordered { "</ol>\n" } else { "</ul>\n" }.into())
            }
            Event::Start(Tag::BlockQuote(_)) => {
                Event::Html(format!("{}\n", open_tag("blockquote", class::BLOCKQUOTE)).into())
            }
            Event::End(TagEnd::BlockQuote(_)) => Event::Html("</blockquote>\n".into()),
            Event::Start(Tag::CodeBlock(kind)) => {
                let lang = match &kind {
                    CodeBlockKind::Fenced(info) => info.split_whitespace().next().unwrap_or(""),
                    CodeBlockKind::Indented => "",
                };
                in_mermaid = lang == "mermaid";
                Event::Html(open_code_block(lang).into())
            }
            Event::End(TagEnd::CodeBlock) => {
                let close = if in_mermaid {
                    "</pre>\n"
                } else {
                    "</code></pre>\n"
                };
                in_mermaid = false;
                Event::Html(close.into())
            }
            Event::Code(text) => Event::Html(
                format!(
                    "<code class=\"{}\">{}</code>",
                    class::CODE,
                    escape_html(&text)
                )
                .into(),
            ),
            other => other,
        };
        events.push(rewritten);
    }

    let mut html = String::with_capacity(markdown.len() * 3 / 2);
    pulldown_cmark::html::push_html(&mut html, events.into_iter());
    html
}

fn parser_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

const fn heading_class(level: HeadingLevel) -> Option<&'static str> {
    match level {
        HeadingLevel::H1 => Some(class::H1),
        HeadingLevel::H2 => Some(class::H2),
        HeadingLevel::H3 => Some(class::H3),
        _ => None,
    }
}

fn open_tag(tag: &str, class: &str) -> String {
    format!("<{tag} class=\"{class}\">")
}

fn open_heading(level: HeadingLevel, class: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => format!("<{level} id=\"{}\" class=\"{class}\">", escape_attr(id)),
        None => format!("<{level} class=\"{class}\">"),
    }
}

fn open_code_block(lang: &str) -> String {
    if lang == "mermaid" {
        return "<pre class=\"mermaid\">".to_string();
    }
    if lang.is_empty() {
        format!("<pre class=\"{}\"><code class=\"{}\">", class::PRE, class::CODE)
    } else {
        format!(
            "<pre class=\"{}\"><code class=\"{} language-{}\">",
            class::PRE,
            class::CODE,
            escape_attr(lang)
        )
    }
}

fn image_tag(image: &PendingImage) -> String {
    let mut tag = format!(
        "<img src=\"{}\" alt=\"{}\" class=\"{}\" style=\"{IMG_STYLE}\"",
        escape_attr(&image.src),
        escape_attr(&image.alt),
        class::IMG
    );
    if !image.title.is_empty() {
        tag.push_str(&format!(" title=\"{}\"", escape_attr(&image.title)));
    }
    tag.push_str(" />");
    tag
}

/// Whether a link target points somewhere other than the current document
/// tree (absolute URL, rooted path, fragment, or special scheme).
fn is_absolute(target: &str) -> bool {
    target.is_empty()
        || target.starts_with('/')
        || target.starts_with('#')
        || target.contains("://")
        || target.starts_with("mailto:")
        || target.starts_with("tel:")
        || target.starts_with("data:")
}

/// Resolves a link or image target against the render options.
#[must_use]
pub fn resolve_target(target: &str, options: &RenderOptions) -> String {
    if is_absolute(target) {
        return target.to_string();
    }

    let relative = target.trim_start_matches("./");

    if options.link_chapters {
        let (file, fragment) = relative
            .split_once('#')
            .map_or((relative, None), |(f, frag)| (f, Some(frag)));
        if let Some(chapter) = chapters::all().iter().find(|c| c.filename == file) {
            return match fragment {
                Some(frag) => format!("{}#{frag}", chapter.route()),
                None => chapter.route(),
            };
        }
    }

    format!("{}{relative}", options.asset_base)
}
