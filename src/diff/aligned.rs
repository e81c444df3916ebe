//! LCS-aligned line comparison.
//!
//! The positional engine ([`diff`](super::diff)) classifies strictly by
//! line position, which turns one mid-file insertion into a run of
//! modified lines. This module aligns the two texts on their longest
//! common subsequence first, so insertions and deletions come out as
//! added/removed records with the surrounding lines unchanged. It is
//! offered alongside the positional engine, not in place of it.

use super::{DiffKind, DiffLine};

/// Compare two texts line by line after LCS alignment.
///
/// Produces only `Added`, `Removed`, and `Unchanged` records, in unified
/// order (old-side lines before new-side lines at each divergence).
/// `line_number` is the 1-based position in the output sequence, which is
/// generally longer than either input when both sides changed.
///
/// # Examples
///
/// ```
/// use vellum::{diff_aligned, DiffKind};
///
/// let lines = diff_aligned("a\nb\nc", "a\nx\nb\nc");
/// let kinds: Vec<DiffKind> = lines.iter().map(|l| l.kind).collect();
/// assert_eq!(
///     kinds,
///     [DiffKind::Unchanged, DiffKind::Added, DiffKind::Unchanged, DiffKind::Unchanged]
/// );
/// ```
pub fn diff_aligned(old: &str, new: &str) -> Vec<DiffLine> {
    let old_lines: Vec<&str> = old.lines().collect();
    let new_lines: Vec<&str> = new.lines().collect();
    let m = old_lines.len();
    let n = new_lines.len();

    // LCS length table.
    let mut lcs = vec![vec![0u32; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            lcs[i][j] = if old_lines[i - 1] == new_lines[j - 1] {
                lcs[i - 1][j - 1] + 1
            } else {
                lcs[i - 1][j].max(lcs[i][j - 1])
            };
        }
    }

    // Backtrack from the bottom-right corner; entries come out reversed.
    let mut entries = Vec::new();
    let (mut i, mut j) = (m, n);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && old_lines[i - 1] == new_lines[j - 1] {
            entries.push((DiffKind::Unchanged, old_lines[i - 1]));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || lcs[i][j - 1] >= lcs[i - 1][j]) {
            entries.push((DiffKind::Added, new_lines[j - 1]));
            j -= 1;
        } else {
            entries.push((DiffKind::Removed, old_lines[i - 1]));
            i -= 1;
        }
    }

    entries
        .into_iter()
        .rev()
        .enumerate()
        .map(|(index, (kind, content))| DiffLine {
            kind,
            content: content.to_string(),
            line_number: index + 1,
        })
        .collect()
}
