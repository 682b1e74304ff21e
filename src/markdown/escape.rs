//! HTML escaping for text and attribute values.

/// Escape text for use between HTML tags.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a value for use inside a double-quoted HTML attribute.
#[must_use]
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_escapes_markup() {
        assert_eq!(escape_html("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
    }

    #[test]
    fn text_keeps_quotes() {
        assert_eq!(escape_html(r#"say "hej""#), r#"say "hej""#);
    }

    #[test]
    fn attr_escapes_quotes() {
        assert_eq!(escape_attr(r#"x" onload="y"#), "x&quot; onload=&quot;y");
        assert_eq!(escape_attr("it's"), "it&#39;s");
    }

    #[test]
    fn non_ascii_passes_through() {
        assert_eq!(escape_html("Säkerhet å ä ö"), "Säkerhet å ä ö");
    }
}
