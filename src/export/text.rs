//! Annotated-text diff reports.

use crate::diff::DiffLine;

/// Format diff records as a flat annotated report.
///
/// One line per record: `+ ` for added, `- ` for removed, `~ ` for
/// modified, two spaces for unchanged, then the line content. This is the
/// downloadable counterpart of the version-compare view.
///
/// # Examples
///
/// ```
/// use vellum::{diff, format_diff_report};
///
/// let report = format_diff_report(&diff("a\nb", "a\nx"));
/// assert_eq!(report, "  a\n~ x\n");
/// ```
pub fn format_diff_report(lines: &[DiffLine]) -> String {
    let mut report = String::with_capacity(lines.iter().map(|l| l.content.len() + 3).sum());
    for line in lines {
        report.push_str(line.kind.symbol());
        report.push(' ');
        report.push_str(&line.content);
        report.push('\n');
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::diff;

    #[test]
    fn test_report_prefixes() {
        let report = format_diff_report(&diff("a\nb\nc", "a\nx\nc\nd"));
        assert_eq!(report, "  a\n~ x\n  c\n+ d\n");
    }

    #[test]
    fn test_removed_prefix() {
        let report = format_diff_report(&diff("a\nb", "a"));
        assert_eq!(report, "  a\n- b\n");
    }

    #[test]
    fn test_one_report_line_per_record() {
        let lines = diff("a\nb\nc", "x\ny");
        let report = format_diff_report(&lines);
        assert_eq!(report.lines().count(), lines.len());
    }

    #[test]
    fn test_empty_diff_is_empty_report() {
        assert_eq!(format_diff_report(&[]), "");
    }
}
