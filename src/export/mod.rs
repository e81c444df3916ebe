//! Export of documents and diff reports to downloadable blobs.
//!
//! Everything here is pure string/byte assembly over the renderer and the
//! diff engine: no I/O. An [`ExportFile`] is the "download" itself,
//! filename plus MIME type plus bytes, which a caller (the CLI, or a
//! browser shell via the WASM bindings) writes or hands to the platform.
//!
//! Formats:
//!
//! - [`ExportFormat::Markdown`]: the raw source, unchanged (`.md`)
//! - [`ExportFormat::Html`]: a complete, self-contained HTML document
//!   ([`html_document`]) with the class stylesheet embedded (`.html`)
//! - [`ExportFormat::Text`]: the raw source as plain text (`.txt`);
//!   diff reports ([`format_diff_report`]) also export as text
//!
//! PDF is not a format here: [`print_document`] produces a print-styled
//! HTML view that invokes the platform print dialog, and print-to-PDF
//! does the rest.

mod html;
mod text;

pub use html::{html_document, print_document};
pub use text::format_diff_report;

use crate::diff::DiffLine;
use crate::error::{Error, Result};
use crate::markdown::slugify;

/// Downloadable export formats, each with a fixed MIME type and filename
/// extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Html,
    Text,
}

impl ExportFormat {
    /// The MIME type string for this format.
    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown",
            ExportFormat::Html => "text/html",
            ExportFormat::Text => "text/plain",
        }
    }

    /// The filename extension for this format, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Html => "html",
            ExportFormat::Text => "txt",
        }
    }

    /// Resolve a format from a filename extension.
    ///
    /// Case-insensitive; a leading dot is tolerated. Anything outside the
    /// known set is an [`Error::UnsupportedFormat`].
    ///
    /// # Examples
    ///
    /// ```
    /// use vellum::ExportFormat;
    ///
    /// assert_eq!(ExportFormat::from_extension("html").unwrap(), ExportFormat::Html);
    /// assert_eq!(ExportFormat::from_extension(".MD").unwrap(), ExportFormat::Markdown);
    /// assert!(ExportFormat::from_extension("pdf").is_err());
    /// ```
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "md" | "markdown" => Ok(ExportFormat::Markdown),
            "html" | "htm" => Ok(ExportFormat::Html),
            "txt" | "text" => Ok(ExportFormat::Text),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// A downloadable export blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    /// Slugified title stem plus the format extension.
    pub filename: String,
    /// Fixed MIME type of the format.
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportFile {
    fn new(title: &str, format: ExportFormat, bytes: Vec<u8>) -> Self {
        let slug = slugify(title);
        let stem = if slug.is_empty() { "document" } else { slug.as_str() };
        Self {
            filename: format!("{stem}.{}", format.extension()),
            mime: format.mime_type(),
            bytes,
        }
    }
}

/// The raw Markdown source as a `.md` download.
pub fn markdown_file(title: &str, source: &str) -> ExportFile {
    ExportFile::new(title, ExportFormat::Markdown, source.as_bytes().to_vec())
}

/// The rendered, self-contained HTML document as a `.html` download.
pub fn html_file(title: &str, source: &str) -> ExportFile {
    ExportFile::new(
        title,
        ExportFormat::Html,
        html_document(title, source).into_bytes(),
    )
}

/// The raw source as a `.txt` download.
pub fn text_file(title: &str, source: &str) -> ExportFile {
    ExportFile::new(title, ExportFormat::Text, source.as_bytes().to_vec())
}

/// An annotated diff report as a `.txt` download.
pub fn diff_report_file(title: &str, lines: &[DiffLine]) -> ExportFile {
    ExportFile::new(
        title,
        ExportFormat::Text,
        format_diff_report(lines).into_bytes(),
    )
}

/// Build the download blob for `format` from one source document.
pub fn export_source(format: ExportFormat, title: &str, source: &str) -> ExportFile {
    match format {
        ExportFormat::Markdown => markdown_file(title, source),
        ExportFormat::Html => html_file(title, source),
        ExportFormat::Text => text_file(title, source),
    }
}
