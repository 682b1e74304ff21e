//! The AI agent team (`/team`).

use crate::catalog::team::{CEREMONIES, CHANNELS, KPIS, REPORTING, ROLES, WORKFLOW_STEPS};
use crate::markdown::escape::escape_html;

use super::layout::{Nav, list, page};

/// Renders roles, workflow and team routines.
#[must_use]
pub fn render() -> String {
    let mut body = String::from(
        "<h1>AI-agentteamet</h1><p class=\"muted\">Boken produceras av ett team av specialiserade \
AI-agenter som samarbetar under en projektledande agent.</p><h2>Roller</h2><div class=\"grid\">",
    );
    for role in &ROLES {
        body.push_str(&format!(
            "<div class=\"card\"><h3>{}</h3><span class=\"badge\">{}</span><p>{}</p>{}</div>",
            escape_html(role.name),
            escape_html(role.focus),
            escape_html(role.description),
            list(role.responsibilities.iter().copied())
        ));
    }
    body.push_str("</div>");

    body.push_str("<section class=\"card\"><h2>Arbetsflöde</h2><ol>");
    for step in &WORKFLOW_STEPS {
        body.push_str(&format!("<li>{}</li>", escape_html(step)));
    }
    body.push_str("</ol></section>");

    body.push_str("<section class=\"card\"><h2>Ceremonier</h2><table><tr><th>Möte</th><th>Deltagare</th><th>Frekvens</th><th>Resultat</th></tr>");
    for c in &CEREMONIES {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(c.name),
            escape_html(c.participants),
            escape_html(c.frequency),
            escape_html(c.outcome)
        ));
    }
    body.push_str("</table></section><div class=\"grid\"><section class=\"card\"><h2>Rapportering</h2>");
    for r in &REPORTING {
        body.push_str(&format!(
            "<p><strong>{}</strong><br><span class=\"muted\">{}</span></p>",
            escape_html(r.title),
            escape_html(r.description)
        ));
    }
    body.push_str("</section><section class=\"card\"><h2>Kommunikation</h2>");
    for ch in &CHANNELS {
        body.push_str(&format!(
            "<p><strong>{}</strong> {}<br><span class=\"muted\">{}</span></p>",
            escape_html(ch.name),
            escape_html(ch.purpose),
            escape_html(ch.tools)
        ));
    }
    body.push_str(&format!(
        "</section><section class=\"card\"><h2>Nyckeltal</h2>{}</section></div>",
        list(KPIS)
    ));

    page("AI-agentteamet", Nav::Team, &body)
}
