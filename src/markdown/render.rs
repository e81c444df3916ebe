//! Markdown → HTML rendering via ordered substitution passes.
//!
//! The renderer is a fixed pipeline of whole-text regex substitutions
//! over the document source. The source is HTML-escaped before the first
//! rule runs, so the only markup in the output is what the pipeline
//! itself emits; rules that mention `<` or `>` (blockquotes, the
//! `<color=…>` / `<font=…>` extensions) match the escaped forms.
//!
//! ## Design Notes
//!
//! Pass order is observable behavior that consumers rely on:
//!
//! - **Bold before italic**: `**x**` must be consumed before the
//!   single-asterisk rule can misread it.
//! - **Headers before hashtags**: the full-line header rule claims
//!   `# text` lines; the inline `#tag` rule only sees what remains.
//! - **Checkboxes before bullets**: `- [ ] x` would otherwise be eaten
//!   by the plain `- ` list rule.
//! - Inline rules never cross newlines. Fenced code blocks are
//!   substituted late, after inline and list rules have already run over
//!   their bodies, so markdown syntax inside code is rewritten like
//!   ordinary text. A flat pipeline cannot protect code regions; the
//!   behavior is pinned by tests rather than hidden.
//! - Line-anchored block rules leave their trailing newline in place, so
//!   the next line keeps its `^` anchor for every later pass. The final
//!   break pass spends the newline after each emitted block tag, then
//!   turns whatever newlines remain into `<br />`.
//!
//! Rendering is pure: no I/O, no shared mutable state, identical output
//! for identical input.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::escape::{encode_href, escape_html, is_safe_href};
use super::slugify::slugify;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#{1,3})[ \t]+(.*)").unwrap());
static BOLD_STAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static BOLD_UNDER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__(.+?)__").unwrap());
static ITALIC_STAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static ITALIC_UNDER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(.+?)_").unwrap());
static STRIKE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"~~(.+?)~~").unwrap());
static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`\n]+)`").unwrap());
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]\n]+)\]\(([^)\n]+)\)").unwrap());
static WIKILINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\]\n]+)\]\]").unwrap());
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)(^|\s)#([0-9A-Za-z_]+)").unwrap());
static COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&lt;color=(#[0-9A-Fa-f]{3,8}|[A-Za-z]{1,32})&gt;(.+?)&lt;/color&gt;").unwrap()
});
static FONT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&lt;font=([A-Za-z0-9 _-]{1,64})&gt;(.+?)&lt;/font&gt;").unwrap()
});
static QUOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^&gt;[ \t]?(.*)").unwrap());
static TASK_DONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^- \[[xX]\] (.*)").unwrap());
static TASK_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^- \[ \] (.*)").unwrap());
static UL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^- (.*)").unwrap());
static OL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^(\d+)\. (.*)").unwrap());
static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```([A-Za-z0-9_+#.-]*)\n(.*?)```").unwrap());
static TABLE_ROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\|(.+)\|[ \t]*").unwrap());
static TABLE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?:<tr class="md-tr">.*?</tr>)+"#).unwrap());

/// Render Markdown source to an HTML fragment.
///
/// Pure and infallible; malformed syntax passes through as literal text.
///
/// # Examples
///
/// ```
/// use vellum::render;
///
/// assert_eq!(render("# Hello"), "<h1 id=\"hello\" class=\"md-h1\">Hello</h1>");
/// assert_eq!(
///     render("**bold** and *italic*"),
///     "<strong>bold</strong> and <em>italic</em>"
/// );
/// ```
pub fn render(source: &str) -> String {
    let text = normalize_line_endings(source);
    let text = escape_html(&text);
    let text = replace_headings(&text);
    let text = replace_emphasis(&text);
    let text = replace_inline_code(&text);
    let text = replace_links(&text);
    let text = replace_wikilinks(&text);
    let text = replace_tags(&text);
    let text = replace_color_font(&text);
    let text = replace_blocks(&text);
    let text = replace_fences(&text);
    let text = replace_tables(&text);
    replace_breaks(&text)
}

/// Closing tags of block elements; the newline that ended their source
/// line is already spent on ending the block.
const BLOCK_CLOSERS: [&str; 8] = [
    "</h1>",
    "</h2>",
    "</h3>",
    "</blockquote>",
    "</div>",
    "</li>",
    "</pre>",
    "</table>",
];

/// Spend the newline after each block tag, then break the rest.
///
/// Block rules leave their trailing newline in place so the following
/// line stays anchored for later passes; turning those newlines into
/// `<br />` as well would double every block boundary. Escape-first
/// guarantees these closing tags only occur where the pipeline emitted
/// them.
fn replace_breaks(text: &str) -> String {
    let mut text = text.to_string();
    for tag in BLOCK_CLOSERS {
        text = text.replace(&format!("{tag}\n"), tag);
    }
    text.replace('\n', "<br />")
}

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// `#`/`##`/`###` lines become headings with slug ids.
///
/// Slugs are deduplicated per render in document order (`foo`, `foo-1`,
/// …); the id attribute is omitted when the slug comes out empty.
fn replace_headings(text: &str) -> String {
    let mut seen: HashMap<String, usize> = HashMap::new();

    HEADING_RE
        .replace_all(text, |caps: &Captures| {
            let level = caps[1].len();
            let inner = &caps[2];
            // Slug from the source text, not the escaped form, so entity
            // letters never leak into the id.
            let slug = dedupe(slugify(&unescape_entities(inner)), &mut seen);
            if slug.is_empty() {
                format!("<h{level} class=\"md-h{level}\">{inner}</h{level}>")
            } else {
                format!("<h{level} id=\"{slug}\" class=\"md-h{level}\">{inner}</h{level}>")
            }
        })
        .into_owned()
}

/// Undo the escape pass on heading text before slug generation.
///
/// `&amp;` decodes last: a literal `&lt;` in the source arrives here as
/// `&amp;lt;` and must come back as `&lt;`, not `<`.
fn unescape_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn dedupe(slug: String, seen: &mut HashMap<String, usize>) -> String {
    if slug.is_empty() {
        return slug;
    }
    let count = seen.entry(slug.clone()).or_insert(0);
    let unique = if *count == 0 {
        slug.clone()
    } else {
        format!("{slug}-{count}")
    };
    *count += 1;
    unique
}

fn replace_emphasis(text: &str) -> String {
    let text = BOLD_STAR_RE.replace_all(text, "<strong>$1</strong>");
    let text = BOLD_UNDER_RE.replace_all(&text, "<strong>$1</strong>");
    let text = ITALIC_STAR_RE.replace_all(&text, "<em>$1</em>");
    let text = ITALIC_UNDER_RE.replace_all(&text, "<em>$1</em>");
    STRIKE_RE.replace_all(&text, "<del>$1</del>").into_owned()
}

fn replace_inline_code(text: &str) -> String {
    CODE_RE
        .replace_all(text, "<code class=\"md-code\">$1</code>")
        .into_owned()
}

/// `[text](url)` becomes an anchor opening in a new tab.
///
/// Script-bearing schemes are replaced with an inert `#`; everything
/// else is percent-encoded for attribute context.
fn replace_links(text: &str) -> String {
    LINK_RE
        .replace_all(text, |caps: &Captures| {
            let label = &caps[1];
            let url = caps[2].trim();
            let href = if is_safe_href(url) {
                encode_href(url)
            } else {
                String::from("#")
            };
            format!(
                "<a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"md-link\">{label}</a>"
            )
        })
        .into_owned()
}

fn replace_wikilinks(text: &str) -> String {
    WIKILINK_RE
        .replace_all(text, "<span class=\"md-wikilink\">$1</span>")
        .into_owned()
}

fn replace_tags(text: &str) -> String {
    TAG_RE
        .replace_all(text, "${1}<span class=\"md-tag\">#${2}</span>")
        .into_owned()
}

/// `<color=…>` and `<font=…>` extensions, matched in escaped form.
///
/// Values are charset-restricted (hex or letters for colors, a small
/// family-name alphabet for fonts) so the emitted style attribute cannot
/// be escaped out of.
fn replace_color_font(text: &str) -> String {
    let text = COLOR_RE.replace_all(text, "<span style=\"color:${1}\">${2}</span>");
    FONT_RE
        .replace_all(&text, |caps: &Captures| {
            let family = caps[1].trim();
            format!("<span style=\"font-family:'{family}'\">{}</span>", &caps[2])
        })
        .into_owned()
}

fn replace_blocks(text: &str) -> String {
    let text = QUOTE_RE.replace_all(text, "<blockquote class=\"md-quote\">$1</blockquote>");
    // Checkbox rules run before the bare bullet rule so `- [ ]` is not
    // consumed as a plain list item.
    let text = TASK_DONE_RE.replace_all(
        &text,
        "<div class=\"md-task\"><input type=\"checkbox\" checked disabled /> <span class=\"md-task-done\">$1</span></div>",
    );
    let text = TASK_OPEN_RE.replace_all(
        &text,
        "<div class=\"md-task\"><input type=\"checkbox\" disabled /> <span class=\"md-task-text\">$1</span></div>",
    );
    let text = UL_RE.replace_all(&text, "<li class=\"md-li\">$1</li>");
    OL_RE
        .replace_all(&text, "<li class=\"md-li\" value=\"$1\">$2</li>")
        .into_owned()
}

/// Fenced code blocks, with the language tag carried as `data-lang`.
fn replace_fences(text: &str) -> String {
    FENCE_RE
        .replace_all(text, |caps: &Captures| {
            let lang = &caps[1];
            // Inner newlines become entities so the final break pass
            // leaves code content alone.
            let body = caps[2].trim_end_matches('\n').replace('\n', "&#10;");
            if lang.is_empty() {
                format!("<pre class=\"md-codeblock\"><code>{body}</code></pre>")
            } else {
                format!("<pre class=\"md-codeblock\" data-lang=\"{lang}\"><code>{body}</code></pre>")
            }
        })
        .into_owned()
}

/// `| a | b |` lines become rows; runs of consecutive rows get a table.
fn replace_tables(text: &str) -> String {
    let text = TABLE_ROW_RE.replace_all(text, |caps: &Captures| {
        let cells: String = caps[1]
            .split('|')
            .map(|cell| format!("<td class=\"md-td\">{}</td>", cell.trim()))
            .collect();
        format!("<tr class=\"md-tr\">{cells}</tr>")
    });
    // Rows on consecutive lines form one run; a blank line in between
    // keeps two runs (and so two tables) apart.
    let text = text.replace("</tr>\n<tr class=\"md-tr\">", "</tr><tr class=\"md-tr\">");
    TABLE_RUN_RE
        .replace_all(&text, "<table class=\"md-table\"><tbody>${0}</tbody></table>")
        .into_owned()
}
