//! # vellum
//!
//! Markdown rendering, version diffing, and export for document
//! workspaces.
//!
//! ## Features
//!
//! - Render Markdown to HTML fragments via a fixed substitution pipeline
//!   (headers, emphasis, code, links, wikilinks, hashtags, color/font
//!   extensions, blocks, fences, tables)
//! - Escape-first sanitization: raw HTML in a document survives only as
//!   literal text, and link targets are scheme-guarded
//! - Positional line diff with per-kind statistics, plus an LCS-aligned
//!   variant for insert/delete detection
//! - Export to downloadable Markdown/HTML/text blobs, self-contained HTML
//!   documents, and print-formatted views for PDF
//!
//! ## Quick Start
//!
//! ```
//! use vellum::{diff, render, DiffKind};
//!
//! // Render a document for the preview pane or viewer
//! let html = render("# Hello\n**world**");
//! assert!(html.contains("<h1"));
//! assert!(html.contains("<strong>world</strong>"));
//!
//! // Compare two versions line by line
//! let lines = diff("a\nb\nc", "a\nx\nc");
//! assert_eq!(lines[1].kind, DiffKind::Modified);
//! ```
//!
//! ## Exporting
//!
//! Export functions produce [`ExportFile`] blobs (filename, MIME type,
//! bytes) ready to write or hand to a browser download:
//!
//! ```
//! use vellum::export::{html_file, markdown_file};
//!
//! let blob = markdown_file("Meeting Notes", "# Agenda");
//! assert_eq!(blob.filename, "meeting-notes.md");
//!
//! let blob = html_file("Meeting Notes", "# Agenda");
//! assert!(blob.bytes.starts_with(b"<!DOCTYPE html>"));
//! ```

pub mod diff;
pub mod error;
pub mod export;
pub mod markdown;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use diff::{DiffKind, DiffLine, DiffStats, diff, diff_aligned, line_count};
pub use error::{Error, Result};
pub use export::{ExportFile, ExportFormat, format_diff_report};
pub use markdown::render;
