//! Rendering pipeline tests.
//!
//! These pin the output shape the editor preview, document viewer, and
//! exporters rely on: the emitted tags and classes, the substitution
//! order, and the escape-first sanitization. Several cases document
//! deliberate flat-pipeline behavior (code spans are not protected from
//! earlier rules, table separator rows are ordinary rows) so a change
//! there fails loudly instead of silently.

use vellum::render;

// ============================================================================
// Headings
// ============================================================================

#[test]
fn test_heading_levels_and_classes() {
    assert_eq!(render("# Hello"), "<h1 id=\"hello\" class=\"md-h1\">Hello</h1>");
    assert_eq!(
        render("## Section Two"),
        "<h2 id=\"section-two\" class=\"md-h2\">Section Two</h2>"
    );
    assert_eq!(render("### Deep"), "<h3 id=\"deep\" class=\"md-h3\">Deep</h3>");
}

#[test]
fn test_heading_requires_line_start() {
    let html = render("not a # heading");
    assert!(!html.contains("<h1"));
}

#[test]
fn test_no_break_after_heading_line() {
    // The newline ending a heading line is spent on ending the block,
    // not turned into a <br />.
    let html = render("# Title\nbody");
    assert_eq!(html, "<h1 id=\"title\" class=\"md-h1\">Title</h1>body");
}

#[test]
fn test_heading_id_ignores_entities() {
    let html = render("# Q & A");
    assert!(html.contains("id=\"q-a\""));
    assert!(html.contains(">Q &amp; A</h1>"));
}

#[test]
fn test_repeated_headings_get_distinct_ids() {
    let html = render("# Setup\ntext\n# Setup");
    assert!(html.contains("id=\"setup\""));
    assert!(html.contains("id=\"setup-1\""));
}

// ============================================================================
// Emphasis ordering
// ============================================================================

#[test]
fn test_bold_and_italic_do_not_cross() {
    assert_eq!(
        render("**bold** and *italic*"),
        "<strong>bold</strong> and <em>italic</em>"
    );
}

#[test]
fn test_bold_is_matched_before_italic() {
    // A single-asterisk rule running first would split `**` in half.
    let html = render("**x**");
    assert_eq!(html, "<strong>x</strong>");
    assert!(!html.contains("<em>"));
}

#[test]
fn test_nested_emphasis_crosses_tags() {
    // The lazy bold rule stops at the first `**` it can close on, which
    // splits the trailing `***`; the italic pass then pairs the leftover
    // asterisks across the closing tag. Flat-pipeline hazard, pinned.
    assert_eq!(
        render("**bold *inner***"),
        "<strong>bold <em>inner</strong></em>"
    );
}

#[test]
fn test_strikethrough() {
    assert_eq!(render("~~old text~~"), "<del>old text</del>");
}

#[test]
fn test_emphasis_does_not_cross_lines() {
    let html = render("*a\nb*");
    assert!(!html.contains("<em>"));
}

// ============================================================================
// Inline code
// ============================================================================

#[test]
fn test_inline_code_span() {
    assert_eq!(
        render("run `cargo doc` locally"),
        "run <code class=\"md-code\">cargo doc</code> locally"
    );
}

#[test]
fn test_code_span_contents_are_not_protected() {
    // The emphasis pass has already run when the code rule fires; a flat
    // substitution pipeline cannot carve out code regions.
    assert_eq!(
        render("`a*b*c`"),
        "<code class=\"md-code\">a<em>b</em>c</code>"
    );
}

// ============================================================================
// Links, wikilinks, hashtags
// ============================================================================

#[test]
fn test_external_link_opens_new_tab() {
    assert_eq!(
        render("[docs](https://example.com/docs)"),
        "<a href=\"https://example.com/docs\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"md-link\">docs</a>"
    );
}

#[test]
fn test_wikilink_renders_as_reference_span() {
    assert_eq!(
        render("see [[Project Plan]]"),
        "see <span class=\"md-wikilink\">Project Plan</span>"
    );
}

#[test]
fn test_wikilink_survives_the_link_pass() {
    let html = render("[[wiki]] beside [ext](https://e.com)");
    assert!(html.contains("<span class=\"md-wikilink\">wiki</span>"));
    assert!(html.contains("class=\"md-link\">ext</a>"));
}

#[test]
fn test_hashtag_span() {
    assert_eq!(
        render("tagged #urgent now"),
        "tagged <span class=\"md-tag\">#urgent</span> now"
    );
}

#[test]
fn test_heading_line_is_not_a_hashtag() {
    // The full-line header rule consumes `# word` lines before the inline
    // tag rule can see them.
    let html = render("# word");
    assert!(html.contains("<h1"));
    assert!(!html.contains("md-tag"));
}

#[test]
fn test_inline_hashtag_next_to_heading() {
    let html = render("# Title\nwork on #title");
    assert!(html.contains("<h1 id=\"title\" class=\"md-h1\">Title</h1>"));
    assert!(html.contains("<span class=\"md-tag\">#title</span>"));
}

// ============================================================================
// Color and font extensions
// ============================================================================

#[test]
fn test_color_extension_hex() {
    assert_eq!(
        render("<color=#ff0000>alert</color>"),
        "<span style=\"color:#ff0000\">alert</span>"
    );
}

#[test]
fn test_color_extension_named() {
    assert_eq!(
        render("<color=steelblue>calm</color>"),
        "<span style=\"color:steelblue\">calm</span>"
    );
}

#[test]
fn test_font_extension() {
    assert_eq!(
        render("<font=Georgia>serif</font>"),
        "<span style=\"font-family:'Georgia'\">serif</span>"
    );
}

#[test]
fn test_extension_value_charset_is_strict() {
    // A value that could escape the style attribute does not match; the
    // escaped literal passes through instead.
    let html = render("<color=red;font-size:99px>big</color>");
    assert!(!html.contains("<span style="));
    assert!(html.contains("&lt;color="));
}

#[test]
fn test_adjacent_extensions_stay_separate() {
    let html = render("<color=#f00>a</color> <color=#0f0>b</color>");
    assert!(html.contains("<span style=\"color:#f00\">a</span>"));
    assert!(html.contains("<span style=\"color:#0f0\">b</span>"));
}

// ============================================================================
// Block elements
// ============================================================================

#[test]
fn test_blockquote() {
    assert_eq!(
        render("> quoted words"),
        "<blockquote class=\"md-quote\">quoted words</blockquote>"
    );
}

#[test]
fn test_task_checkbox_unchecked() {
    assert_eq!(
        render("- [ ] write tests"),
        "<div class=\"md-task\"><input type=\"checkbox\" disabled /> <span class=\"md-task-text\">write tests</span></div>"
    );
}

#[test]
fn test_task_checkbox_checked_and_struck() {
    assert_eq!(
        render("- [x] done"),
        "<div class=\"md-task\"><input type=\"checkbox\" checked disabled /> <span class=\"md-task-done\">done</span></div>"
    );
}

#[test]
fn test_task_rule_wins_over_bullet_rule() {
    // `- [ ]` must not be consumed by the plain list rule as a bullet
    // whose text is "[ ] …".
    let html = render("- [ ] pending\n- plain");
    assert!(html.contains("md-task-text"));
    assert_eq!(html.matches("<li").count(), 1);
}

// ============================================================================
// Adjacent blocks of different kinds
// ============================================================================
//
// Each block rule is its own pass, so a block line must still be at a
// line start when a *later* pass reaches it. These pin that the earlier
// rules leave the anchoring newline in place.

#[test]
fn test_bullet_after_heading() {
    let html = render("# H\n- item");
    assert!(html.contains("<h1 id=\"h\" class=\"md-h1\">H</h1>"));
    assert!(html.contains("<li class=\"md-li\">item</li>"));
}

#[test]
fn test_bullet_after_blockquote() {
    let html = render("> note\n- item");
    assert!(html.contains("<blockquote class=\"md-quote\">note</blockquote>"));
    assert!(html.contains("<li class=\"md-li\">item</li>"));
}

#[test]
fn test_open_task_after_checked_task() {
    let html = render("- [x] done\n- [ ] open");
    assert!(html.contains("<span class=\"md-task-done\">done</span>"));
    assert!(html.contains("<span class=\"md-task-text\">open</span>"));
}

#[test]
fn test_table_row_after_list_item() {
    let html = render("- item\n| a | b |");
    assert!(html.contains("<li class=\"md-li\">item</li>"));
    assert!(html.contains("<table class=\"md-table\">"));
}

#[test]
fn test_block_boundaries_produce_no_breaks() {
    let html = render("# H\n> q\n- a\n1. b");
    assert!(!html.contains("<br />"));
}

#[test]
fn test_unordered_and_ordered_lists() {
    assert_eq!(
        render("- alpha\n- beta"),
        "<li class=\"md-li\">alpha</li><li class=\"md-li\">beta</li>"
    );
    assert_eq!(
        render("3. third\n4. fourth"),
        "<li class=\"md-li\" value=\"3\">third</li><li class=\"md-li\" value=\"4\">fourth</li>"
    );
}

// ============================================================================
// Fenced code and tables
// ============================================================================

#[test]
fn test_fenced_block_with_language() {
    assert_eq!(
        render("```rust\nfn main() {}\n```"),
        "<pre class=\"md-codeblock\" data-lang=\"rust\"><code>fn main() {}</code></pre>"
    );
}

#[test]
fn test_fenced_block_without_language() {
    let html = render("```\nplain\n```");
    assert!(html.starts_with("<pre class=\"md-codeblock\"><code>"));
    assert!(!html.contains("data-lang"));
}

#[test]
fn test_fence_newlines_do_not_become_breaks() {
    let html = render("```\nline one\nline two\n```");
    assert!(html.contains("line one&#10;line two"));
    assert!(!html.contains("<br />"));
}

#[test]
fn test_table_from_consecutive_rows() {
    let html = render("| h1 | h2 |\n| a | b |");
    assert_eq!(html.matches("<table class=\"md-table\">").count(), 1);
    assert_eq!(html.matches("<tr class=\"md-tr\">").count(), 2);
    assert_eq!(html.matches("<td class=\"md-td\">").count(), 4);
}

#[test]
fn test_separator_row_renders_as_cells() {
    // No separator-row grammar: dashes are cell content like anything
    // else.
    let html = render("| a |\n| --- |\n| b |");
    assert!(html.contains("<td class=\"md-td\">---</td>"));
    assert_eq!(html.matches("<table").count(), 1);
}

#[test]
fn test_remaining_newlines_become_breaks() {
    assert_eq!(render("one\ntwo"), "one<br />two");
}

// ============================================================================
// Sanitization
// ============================================================================

#[test]
fn test_script_tag_is_neutralized() {
    let html = render("<script>alert('xss')</script>");
    assert!(!html.contains("<script"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn test_event_handler_markup_is_neutralized() {
    let html = render("<img src=x onerror=alert(1)>");
    assert!(!html.contains("<img"));
}

#[test]
fn test_javascript_url_is_inert() {
    let html = render("[click](javascript:alert(1))");
    assert!(html.contains("href=\"#\""));
    assert!(!html.to_lowercase().contains("javascript"));
}

#[test]
fn test_data_url_is_inert() {
    let html = render("[click](data:text/html;base64,AAAA)");
    assert!(html.contains("href=\"#\""));
}

#[test]
fn test_quote_in_link_label_cannot_break_out() {
    let html = render("[\"quoted\"](https://e.com)");
    assert!(html.contains("&quot;quoted&quot;"));
}

// ============================================================================
// Graceful degradation and purity
// ============================================================================

#[test]
fn test_empty_input_is_empty_output() {
    assert_eq!(render(""), "");
}

#[test]
fn test_unmatched_syntax_passes_through() {
    assert_eq!(render("**unterminated"), "**unterminated");
    assert_eq!(render("[label](unclosed"), "[label](unclosed");
    assert_eq!(render("~~half"), "~~half");
}

#[test]
fn test_render_is_deterministic() {
    let source = "# T\n**b** *i* `c` [l](https://e.com) [[w]] #t\n> q\n- [x] d\n| a |";
    assert_eq!(render(source), render(source));
}

#[test]
fn test_mixed_document_end_to_end() {
    let source = "\
# Release Notes
## Fixes
- [x] crash on empty title
- [ ] slow preview
See [[Roadmap]] and [issues](https://example.com/issues) #release
> ship it
```diff
- old
+ new
```
| area | status |
| core | green |";

    let html = render(source);
    assert!(html.contains("<h1 id=\"release-notes\" class=\"md-h1\">Release Notes</h1>"));
    assert!(html.contains("<h2 id=\"fixes\" class=\"md-h2\">Fixes</h2>"));
    assert!(html.contains("md-task-done"));
    assert!(html.contains("md-task-text"));
    assert!(html.contains("<span class=\"md-wikilink\">Roadmap</span>"));
    assert!(html.contains("class=\"md-link\">issues</a>"));
    assert!(html.contains("<span class=\"md-tag\">#release</span>"));
    assert!(html.contains("<blockquote class=\"md-quote\">ship it</blockquote>"));
    assert!(html.contains("<table class=\"md-table\">"));
}
