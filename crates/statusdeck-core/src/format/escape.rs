//! Escaping for text embedded into HTML fragments or written to a terminal.

use url::Url;

/// Escape the five HTML-significant characters (`& < > " '`).
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// [`escape_html`] for optional text; `None` becomes the empty string.
pub fn escape_text(s: Option<&str>) -> String {
    s.map(escape_html).unwrap_or_default()
}

/// Strip control characters so upstream text cannot drive the terminal.
///
/// Newlines are kept and tabs become spaces. Everything else for which
/// [`char::is_control`] holds is dropped, including ESC, BEL and the C1
/// range, so no escape or OSC sequence survives.
pub fn sanitize_terminal(s: &str) -> String {
    s.chars()
        .filter_map(|c| match c {
            '\n' => Some('\n'),
            '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

/// Accept a link only if it is an absolute http(s) URL.
///
/// Returns the normalized URL, or `None` for anything else (`javascript:`,
/// `data:`, relative paths, garbage).
pub fn sanitize_link(raw: &str) -> Option<String> {
    let url = Url::parse(raw.trim()).ok()?;
    match url.scheme() {
        "http" | "https" => Some(url.to_string()),
        _ => None,
    }
}
