//! HTML document synthesis around rendered fragments.
//!
//! The renderer emits bare fragments with a fixed class vocabulary; this
//! module wraps them into complete HTML5 documents with the stylesheet
//! that defines those classes embedded inline, so an exported file is
//! self-contained. The print variant adds print CSS and triggers the
//! platform print dialog on load, which is how the PDF flow works: the
//! browser's print-to-PDF does the actual conversion.

use crate::markdown::{escape_html, render};

/// Stylesheet defining the rendered class vocabulary.
const STYLESHEET: &str = "\
    body { max-width: 46rem; margin: 2rem auto; padding: 0 1rem;
           font-family: -apple-system, 'Segoe UI', Helvetica, Arial, sans-serif;
           line-height: 1.6; color: #1f2430; }
    .md-h1 { font-size: 1.8em; margin: 0.8em 0 0.4em; }
    .md-h2 { font-size: 1.45em; margin: 0.8em 0 0.4em; }
    .md-h3 { font-size: 1.2em; margin: 0.8em 0 0.4em; }
    .md-code { font-family: 'SF Mono', Consolas, monospace; font-size: 0.9em;
               background: #f2f3f5; border-radius: 3px; padding: 0.1em 0.35em; }
    .md-codeblock { font-family: 'SF Mono', Consolas, monospace; font-size: 0.9em;
                    background: #f2f3f5; border-radius: 6px; padding: 0.75em 1em;
                    margin: 0.5em 0; white-space: pre-wrap; overflow-x: auto; }
    .md-link { color: #2563eb; }
    .md-wikilink { color: #7c3aed; background: #f3efff; border-radius: 3px;
                   padding: 0 0.25em; }
    .md-tag { color: #0e7490; background: #e0f2fe; border-radius: 3px;
              padding: 0 0.25em; font-size: 0.92em; }
    .md-quote { border-left: 3px solid #cbd5e1; color: #475569;
                margin: 0.5em 0; padding: 0.25em 0 0.25em 0.75em; }
    .md-li { display: list-item; list-style: disc inside;
             margin: 0.15em 0 0.15em 1.25em; }
    .md-li[value] { list-style: decimal inside; }
    .md-task { margin: 0.15em 0; }
    .md-task-text { vertical-align: middle; }
    .md-task-done { vertical-align: middle; text-decoration: line-through;
                    color: #94a3b8; }
    .md-table { border-collapse: collapse; margin: 0.5em 0; }
    .md-tr:nth-child(even) { background: #f8fafc; }
    .md-td { border: 1px solid #cbd5e1; padding: 0.25em 0.6em; }
";

/// Print CSS appended for the print/PDF view.
const PRINT_STYLESHEET: &str = "\
    @page { margin: 2cm; }
    @media print {
      body { max-width: none; margin: 0; color: #000; }
      .md-link { color: inherit; text-decoration: underline; }
      .md-codeblock { break-inside: avoid; }
    }
";

/// Synthesize a complete HTML5 document around rendered Markdown.
///
/// The title is escaped; the body is the rendered fragment; the
/// stylesheet defining the `md-*` classes is embedded, so the document
/// stands alone as a download.
///
/// # Examples
///
/// ```
/// let doc = vellum::export::html_document("Notes", "# Agenda");
/// assert!(doc.starts_with("<!DOCTYPE html>"));
/// assert!(doc.contains("<title>Notes</title>"));
/// assert!(doc.contains("class=\"md-h1\""));
/// ```
pub fn html_document(title: &str, source: &str) -> String {
    synthesize(title, source, false)
}

/// Synthesize the print-formatted document used for PDF export.
///
/// Same document as [`html_document`] plus print CSS and an on-load
/// `window.print()` call; the platform print dialog produces the PDF.
pub fn print_document(title: &str, source: &str) -> String {
    synthesize(title, source, true)
}

fn synthesize(title: &str, source: &str, print: bool) -> String {
    let body = render(source);

    let mut doc = String::with_capacity(body.len() + STYLESHEET.len() + 512);
    doc.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    doc.push_str("  <meta charset=\"utf-8\"/>\n");
    doc.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\n");
    doc.push_str("  <title>");
    doc.push_str(&escape_html(title));
    doc.push_str("</title>\n");
    doc.push_str("  <style>\n");
    doc.push_str(STYLESHEET);
    if print {
        doc.push_str(PRINT_STYLESHEET);
    }
    doc.push_str("  </style>\n</head>\n");
    if print {
        doc.push_str("<body onload=\"window.print()\">\n");
    } else {
        doc.push_str("<body>\n");
    }
    doc.push_str(&body);
    doc.push_str("\n</body>\n</html>\n");
    doc
}
