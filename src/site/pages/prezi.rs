//! Slide canvas (`/prezi/?id=<slide>`).
//!
//! The canvas is server-rendered at the starting viewport. A small script
//! forwards arrow keys to `/prezi/key` and applies the viewport
//! transitions streamed from `/prezi/stream`.

use crate::deck::{DeckSession, Viewport};
use crate::markdown::escape::{escape_attr, escape_html};

use super::layout::{Nav, page_with_head};

const CANVAS_STYLE: &str = "<style>\
.prezi { position: relative; width: 100%; height: 75vh; overflow: hidden; border: 1px solid var(--border); border-radius: 10px; background: radial-gradient(#e2e8f0 1px, transparent 1px) 0 0 / 20px 20px; }\
.prezi-layer { position: absolute; left: 0; top: 0; transform-origin: 0 0; }\
.slide { position: absolute; max-width: 360px; padding: 12px; border-radius: 10px; border: 1px solid #d0d0d0; background: white; box-shadow: 0 4px 10px rgba(15, 23, 42, 0.08); }\
.slide.active { border: 2px solid #0b5fff; box-shadow: 0 6px 12px rgba(11, 95, 255, 0.2); }\
.slide .title { font-weight: 600; margin-bottom: 6px; }\
.slide img { max-width: 100%; }\
</style>\n";

const CANVAS_SCRIPT: &str = r"<script>
(() => {
  const layer = document.getElementById('prezi-layer');
  const apply = (t) => {
    layer.style.transition = `transform ${t.duration_ms}ms ease`;
    layer.style.transform = `translate(${t.target.x}px, ${t.target.y}px) scale(${t.target.zoom})`;
    document.querySelectorAll('.slide').forEach((node) => {
      node.classList.toggle('active', node.dataset.id === t.slide_id);
    });
  };
  const events = new EventSource('/prezi/stream' + window.location.search);
  events.addEventListener('viewport', (e) => apply(JSON.parse(e.data)));
  window.addEventListener('keydown', (e) => {
    if (e.key !== 'ArrowRight' && e.key !== 'ArrowLeft') return;
    fetch('/prezi/key', {
      method: 'POST',
      headers: { 'content-type': 'application/json' },
      body: JSON.stringify({ key: e.key }),
    });
  });
  window.addEventListener('beforeunload', () => events.close());
})();
</script>
";

/// Renders the canvas for `session`, positioned on its active slide.
#[must_use]
pub fn render(session: &DeckSession) -> String {
    let transform = session
        .current()
        .map_or_else(|| "none".to_string(), |slide| Viewport::focused_on(slide).css_transform());

    let mut nodes = String::new();
    for slide in session.deck().iter() {
        let active = if session.active_id() == Some(slide.id.as_str()) {
            " active"
        } else {
            ""
        };
        let image = slide.image.as_deref().map_or_else(String::new, |src| {
            format!("<img src=\"{}\" alt=\"\">", escape_attr(src))
        });
        nodes.push_str(&format!(
            "<div class=\"slide{active}\" data-id=\"{id}\" style=\"left: {x}px; top: {y}px\">\
<div class=\"title\">{title}</div>{image}<div><a href=\"{href}\">Read</a></div></div>",
            id = escape_attr(&slide.id),
            x = slide.x,
            y = slide.y,
            title = escape_html(&slide.title),
            href = escape_attr(&slide.md_path),
        ));
    }

    let status = if session.deck().is_empty() {
        "<p class=\"muted\">Inga bilder att visa.</p>".to_string()
    } else {
        format!(
            "<p class=\"muted\">{} bilder · använd piltangenterna för att navigera</p>",
            session.deck().len()
        )
    };

    let body = format!(
        "<h1>Presentation</h1>{status}<div class=\"prezi\" tabindex=\"0\">\
<div id=\"prezi-layer\" class=\"prezi-layer\" style=\"transform: {transform}\">{nodes}</div></div>{CANVAS_SCRIPT}"
    );
    page_with_head("Presentation", Nav::None, CANVAS_STYLE, &body)
}
