//! Line-level version comparison.
//!
//! The engine compares two document versions position by position: line N
//! of the old text against line N of the new text, the shorter side padded
//! with empty lines. The result is one [`DiffLine`] per position, so the
//! version-compare view can lay old and new out side by side without any
//! realignment.
//!
//! Positional comparison has a documented consequence: a line inserted in
//! the middle of a document shifts everything after it, and the shifted
//! lines classify as modified rather than as one insertion. Consumers that
//! want insertion detection use [`diff_aligned`], which aligns on the
//! longest common subsequence first; the positional result stays the
//! contract for position-indexed views.
//!
//! Both functions are pure: no I/O, no shared state, identical output for
//! identical input.

mod aligned;

pub use aligned::diff_aligned;

use memchr::memchr_iter;
use serde::{Deserialize, Serialize};

/// Classification of one line in a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    Added,
    Removed,
    Modified,
    Unchanged,
}

impl DiffKind {
    /// String representation for display and serialized records.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Modified => "modified",
            Self::Unchanged => "unchanged",
        }
    }

    /// Report marker: `+`, `-`, `~`, or a space.
    ///
    /// Followed by a separator space in [`format_diff_report`], so
    /// unchanged lines are indented by two spaces.
    ///
    /// [`format_diff_report`]: crate::export::format_diff_report
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Added => "+",
            Self::Removed => "-",
            Self::Modified => "~",
            Self::Unchanged => " ",
        }
    }
}

impl std::fmt::Display for DiffKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified line of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    pub kind: DiffKind,
    /// The new-side text for added/modified lines, the old-side text for
    /// removed lines, either for unchanged lines.
    pub content: String,
    /// 1-based position in the longer of the two inputs.
    pub line_number: usize,
}

/// Per-kind counts for a diff result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    pub unchanged: usize,
    /// Sequence length, equal to the longer input's line count.
    pub total: usize,
}

impl DiffStats {
    /// Tally the lines of a diff result.
    pub fn from_lines(lines: &[DiffLine]) -> Self {
        let mut stats = Self::default();
        for line in lines {
            match line.kind {
                DiffKind::Added => stats.added += 1,
                DiffKind::Removed => stats.removed += 1,
                DiffKind::Modified => stats.modified += 1,
                DiffKind::Unchanged => stats.unchanged += 1,
            }
            stats.total += 1;
        }
        stats
    }

    /// Whether any line differs between the two versions.
    pub fn has_changes(self) -> bool {
        self.total != self.unchanged
    }
}

/// Compare two texts line by line at matching positions.
///
/// The shorter input is padded with empty lines, so the result length is
/// always `max(line_count(old), line_count(new))` and `line_number` runs
/// `1..=len`. A position classifies as unchanged when both sides are
/// equal, added when only the new side has text, removed when only the
/// old side has text, and modified otherwise.
///
/// # Examples
///
/// ```
/// use vellum::{diff, DiffKind};
///
/// let lines = diff("a\nb\nc", "a\nx\nc");
/// assert_eq!(lines[1].kind, DiffKind::Modified);
/// assert_eq!(lines[1].content, "x");
///
/// let lines = diff("a\nb", "a\nb\nc");
/// assert_eq!(lines[2].kind, DiffKind::Added);
/// ```
pub fn diff(old: &str, new: &str) -> Vec<DiffLine> {
    let old_lines: Vec<&str> = old.lines().collect();
    let new_lines: Vec<&str> = new.lines().collect();
    let len = old_lines.len().max(new_lines.len());

    let mut result = Vec::with_capacity(len);
    for i in 0..len {
        let a = old_lines.get(i).copied().unwrap_or("");
        let b = new_lines.get(i).copied().unwrap_or("");

        let (kind, content) = if a == b {
            (DiffKind::Unchanged, a)
        } else if a.is_empty() {
            (DiffKind::Added, b)
        } else if b.is_empty() {
            (DiffKind::Removed, a)
        } else {
            (DiffKind::Modified, b)
        };

        result.push(DiffLine {
            kind,
            content: content.to_string(),
            line_number: i + 1,
        });
    }

    result
}

/// Count the lines of a text.
///
/// Matches `str::lines()`: the empty string has zero lines and a trailing
/// newline does not add one. This is the length invariant of [`diff`].
pub fn line_count(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    let newlines = memchr_iter(b'\n', text.as_bytes()).count();
    if text.ends_with('\n') {
        newlines
    } else {
        newlines + 1
    }
}
