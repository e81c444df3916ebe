//! WASM bindings for the browser document workspace.
//!
//! This module exposes rendering, diffing, and export entry points to
//! JavaScript via wasm-bindgen. Only strings cross the boundary: HTML
//! comes back as markup, diff records and statistics as JSON.

use wasm_bindgen::prelude::*;

use crate::diff::{DiffStats, diff};
use crate::export::{format_diff_report, html_document, print_document};
use crate::markdown::render;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render Markdown source to an HTML fragment.
///
/// Called on every keystroke for the live preview and once per view for
/// stored documents; pure and infallible.
#[wasm_bindgen(js_name = renderMarkdown)]
pub fn render_markdown(source: &str) -> String {
    render(source)
}

/// Render a complete, self-contained HTML document.
#[wasm_bindgen(js_name = renderDocument)]
pub fn render_document(title: &str, source: &str) -> String {
    html_document(title, source)
}

/// Render the print-formatted view used for PDF export.
///
/// Opening the returned document triggers the platform print dialog.
#[wasm_bindgen(js_name = printDocument)]
pub fn print_document_view(title: &str, source: &str) -> String {
    print_document(title, source)
}

/// Compare two versions line by line.
///
/// Returns a JSON array of `{kind, content, line_number}` records.
#[wasm_bindgen(js_name = computeDiff)]
pub fn compute_diff(old: &str, new: &str) -> Result<String, JsValue> {
    let lines = diff(old, new);
    serde_json::to_string(&lines).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Per-kind counts for a comparison, as a JSON record.
#[wasm_bindgen(js_name = diffStats)]
pub fn diff_stats(old: &str, new: &str) -> Result<String, JsValue> {
    let stats = DiffStats::from_lines(&diff(old, new));
    serde_json::to_string(&stats).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The annotated diff report used for download.
#[wasm_bindgen(js_name = diffReport)]
pub fn diff_report(old: &str, new: &str) -> String {
    format_diff_report(&diff(old, new))
}
