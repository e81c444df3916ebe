//! Pure HTML escaping and link-target guarding.
//!
//! Document text is escaped before any rendering rule runs, so raw HTML
//! in a document (script tags included) survives only as literal text.
//! Link URLs additionally pass through a scheme guard and href encoding
//! before being placed in an attribute.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Escape HTML-significant characters in text.
///
/// Escapes the five characters that carry meaning in markup or attribute
/// context: `&`, `<`, `>`, `"`, `'`. The ampersand is handled by the
/// same single pass, so already-escaped text is escaped again rather
/// than double-interpreted.
///
/// # Examples
///
/// ```
/// use vellum::markdown::escape_html;
///
/// assert_eq!(escape_html("<script>"), "&lt;script&gt;");
/// assert_eq!(escape_html("a & b"), "a &amp; b");
/// assert_eq!(escape_html("say \"hi\""), "say &quot;hi&quot;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 10);

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    result
}

/// Characters percent-encoded inside `href` values.
///
/// `<`, `>`, `"` and `'` never reach this set: text is HTML-escaped
/// before link substitution, so they arrive as entities already.
const HREF_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'`')
    .add(b'^')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\');

/// Percent-encode a URL for use in an `href` attribute.
pub fn encode_href(url: &str) -> String {
    utf8_percent_encode(url, HREF_SET).to_string()
}

/// Whether a URL is safe to place in a link.
///
/// Script-bearing schemes are rejected regardless of case or embedded
/// whitespace; everything else (http, https, mailto, relative paths,
/// fragments) is allowed.
///
/// # Examples
///
/// ```
/// use vellum::markdown::is_safe_href;
///
/// assert!(is_safe_href("https://example.com"));
/// assert!(is_safe_href("#section"));
/// assert!(!is_safe_href("javascript:alert(1)"));
/// ```
pub fn is_safe_href(url: &str) -> bool {
    let compact: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();
    let compact = compact.to_ascii_lowercase();

    !(compact.starts_with("javascript:")
        || compact.starts_with("data:")
        || compact.starts_with("vbscript:"))
}
