//! Contact form and thank-you page (`/contact`).

use crate::catalog::overview::INQUIRY_TYPES;
use crate::markdown::escape::{escape_attr, escape_html};
use crate::site::contact::{ContactForm, FieldError, Submission};

use super::layout::{Nav, page};

const RESPONSE_TIMES: [(&str, &str); 3] = [
    ("Allmänna frågor", "2-3 arbetsdagar"),
    ("Konsulttjänster", "1-2 arbetsdagar"),
    ("Media/Press", "Samma dag"),
];

/// Renders the form, pre-filled with `form` and annotated with `errors`.
#[must_use]
pub fn render_form(form: &ContactForm, errors: &[FieldError]) -> String {
    let error_for = |field: &str| {
        errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| format!("<p class=\"field-error\">{}</p>", escape_html(e.message)))
            .collect::<String>()
    };

    let mut inquiry_options = String::new();
    for inquiry in &INQUIRY_TYPES {
        let selected = if inquiry.value == form.inquiry_type { " selected" } else { "" };
        inquiry_options.push_str(&format!(
            "<option value=\"{}\"{selected}>{}</option>",
            inquiry.value,
            escape_html(inquiry.label)
        ));
    }

    let summary = if errors.is_empty() {
        String::new()
    } else {
        "<div class=\"error\" role=\"alert\">Kontrollera de markerade fälten.</div>".to_string()
    };

    let mut response_times = String::new();
    for (kind, time) in RESPONSE_TIMES {
        response_times.push_str(&format!("<p><span class=\"badge\">{kind}</span> <span class=\"muted\">{time}</span></p>"));
    }

    let body = format!(
        "<h1>Kontakta oss</h1>\
<p class=\"muted\">Har du frågor om boken, vill diskutera konsulttjänster eller är intresserad av \
utbildning inom Infrastructure as Code? Vi hjälper gärna till!</p>\
<div class=\"sidebar\"><div>\
<form method=\"post\" action=\"/contact\" class=\"card\"><h2>Skicka ett meddelande</h2>{summary}\
<label for=\"inquiry_type\">Typ av förfrågan</label><select id=\"inquiry_type\" name=\"inquiry_type\">{inquiry_options}</select>{e_inquiry}\
<label for=\"name\">Namn *</label><input id=\"name\" name=\"name\" required value=\"{name}\" placeholder=\"Ditt fullständiga namn\">{e_name}\
<label for=\"email\">E-post *</label><input id=\"email\" name=\"email\" type=\"email\" required value=\"{email}\" placeholder=\"din.epost@example.com\">{e_email}\
<label for=\"organization\">Organisation</label><input id=\"organization\" name=\"organization\" value=\"{organization}\" placeholder=\"Ditt företag eller organisation\">{e_organization}\
<label for=\"subject\">Ämne *</label><input id=\"subject\" name=\"subject\" required value=\"{subject}\" placeholder=\"Kort beskrivning av din förfrågan\">{e_subject}\
<label for=\"message\">Meddelande *</label><textarea id=\"message\" name=\"message\" required placeholder=\"Beskriv ditt behov eller din fråga i detalj...\">{message}</textarea>{e_message}\
<button type=\"submit\">Skicka meddelande</button></form></div>\
<div><section class=\"card\"><h2>Svarstider</h2>{response_times}</section>\
<section class=\"card\"><h2>Baserad i Sverige</h2><p>Stockholm, Sverige</p>\
<p class=\"muted\">Vi arbetar med organisationer över hela Norden och resten av Europa</p></section>\
<section class=\"card\"><p class=\"muted\"><strong>Integritet:</strong> Vi behandlar dina personuppgifter enligt GDPR och \
använder endast informationen för att svara på din förfrågan. Vi delar aldrig dina uppgifter med tredje part.</p></section>\
</div></div>",
        e_inquiry = error_for("inquiry_type"),
        name = escape_attr(&form.name),
        e_name = error_for("name"),
        email = escape_attr(&form.email),
        e_email = error_for("email"),
        organization = escape_attr(&form.organization),
        e_organization = error_for("organization"),
        subject = escape_attr(&form.subject),
        e_subject = error_for("subject"),
        message = escape_html(&form.message),
        e_message = error_for("message"),
    );

    page("Kontakt", Nav::Contact, &body)
}

/// Renders the confirmation shown after a submission.
#[must_use]
pub fn render_thanks(submission: &Submission) -> String {
    let body = format!(
        "<section class=\"card\"><h1>Tack för ditt meddelande!</h1>\
<p>Vi har mottagit din förfrågan och kommer att återkomma inom 2-3 arbetsdagar.</p>\
<p class=\"muted\">Ärende: {} · Referens: <code>{}</code></p>\
<p><a href=\"/\">Tillbaka till startsidan</a></p></section>",
        escape_html(submission.inquiry.label),
        submission.reference,
    );
    page("Kontakt", Nav::Contact, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_form_defaults_to_general() {
        let html = render_form(&ContactForm::default(), &[]);
        assert!(html.contains("<option value=\"general\" selected>"));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn errors_and_values_are_shown() {
        let form = ContactForm {
            name: "A \"quoted\" name".to_string(),
            ..ContactForm::default()
        };
        let errors = form.validate().unwrap_err();
        let html = render_form(&form, &errors);
        assert!(html.contains("value=\"A &quot;quoted&quot; name\""));
        assert!(html.contains("E-post krävs"));
        assert!(html.contains("role=\"alert\""));
    }

    #[test]
    fn thanks_shows_reference() {
        let form = ContactForm {
            name: "A".to_string(),
            email: "a@b.se".to_string(),
            subject: "S".to_string(),
            message: "M".to_string(),
            ..ContactForm::default()
        };
        let submission = form.validate().unwrap();
        let html = render_thanks(&submission);
        assert!(html.contains("Tack för ditt meddelande!"));
        assert!(html.contains(&submission.reference.to_string()));
    }
}
