//! Pure Markdown → HTML rendering.
//!
//! This module turns document source text into styled HTML fragments.
//! The design separates pure string transformation from everything else:
//!
//! - [`escape`]: HTML escaping and link-target guarding
//! - [`slugify`]: GitHub-style slug generation for heading anchors
//! - [`render`]: the ordered substitution pipeline
//!
//! The export layer ([`crate::export`]) wraps rendered fragments into
//! complete documents and downloadable blobs.
//!
//! ## CSS classes
//!
//! Rendered fragments carry a fixed class vocabulary; the stylesheet that
//! defines it is embedded by [`crate::export::html_document`]:
//!
//! | Class | Element |
//! |-------|---------|
//! | `md-h1` `md-h2` `md-h3` | headings (with slug ids) |
//! | `md-code` | inline code |
//! | `md-codeblock` | fenced code blocks (`data-lang` when tagged) |
//! | `md-link` | external links (new tab, `noopener noreferrer`) |
//! | `md-wikilink` | `[[…]]` reference spans |
//! | `md-tag` | `#hashtag` spans |
//! | `md-quote` | blockquotes |
//! | `md-li` | list items (ordered items carry `value`) |
//! | `md-task` `md-task-text` `md-task-done` | checkbox items |
//! | `md-table` `md-tr` `md-td` | tables |
//!
//! Bold/italic/strikethrough render as bare `<strong>`/`<em>`/`<del>`.

mod escape;
mod render;
mod slugify;

pub use escape::{encode_href, escape_html, is_safe_href};
pub use render::render;
pub use slugify::slugify;
