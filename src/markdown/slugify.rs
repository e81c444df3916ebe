//! Pure slug generation for heading anchors and export filenames.
//!
//! Rendered headings carry GitHub-style slug ids so documents can be
//! deep-linked; export blobs use the same slugs as filename stems.

/// Generate a GitHub-style slug from text.
///
/// ASCII alphanumerics are lowercased; whitespace, hyphens, and
/// underscores become single hyphens; everything else is dropped. The
/// result never starts or ends with a hyphen and never contains two in
/// a row.
///
/// # Examples
///
/// ```
/// use vellum::markdown::slugify;
///
/// assert_eq!(slugify("Getting Started"), "getting-started");
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if (c.is_whitespace() || c == '-' || c == '_')
            && !slug.is_empty()
            && !slug.ends_with('-')
        {
            slug.push('-');
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}
