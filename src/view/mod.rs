//! Read-only projection of the registry into display rows.
//!
//! The projection is recomputed in full on every call; the totals are
//! never cached or maintained incrementally.

use crate::scope::ScopedFile;

/// Rule rendered between the file rows and the totals row.
pub const DIVIDER_RULE: &str = "----------------------------";

/// One display row of the scope view.
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    /// A stored scoped-file record.
    File {
        /// Stable index handle of the record.
        index: usize,
        /// Workspace-relative path.
        path: String,
        /// Line count measured at mark time.
        loc: u64,
        /// Estimate in days, when one has been set.
        estimate_days: Option<f64>,
    },
    /// Visual rule separating files from the totals.
    Divider,
    /// Synthetic trailer summing every stored record.
    Totals {
        /// Sum of all line counts.
        total_loc: u64,
        /// Sum of all set estimates.
        total_days: f64,
    },
}

impl Row {
    /// Renders the human-readable label for this row.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Row::File { path, loc, estimate_days: None, .. } => {
                format!("{path} - {loc} lines")
            }
            Row::File { path, loc, estimate_days: Some(days), .. } => {
                format!("{path} - {loc} lines, {days} days")
            }
            Row::Divider => DIVIDER_RULE.to_string(),
            Row::Totals { total_loc, total_days } => {
                format!("{total_loc} lines of code, {total_days} days to audit")
            }
        }
    }
}

/// Projects the registry into display rows: one file row per record in
/// registry order, then the divider, then the recomputed totals.
#[must_use]
pub fn project(files: &[ScopedFile]) -> Vec<Row> {
    let total_loc: u64 = files.iter().map(|f| f.loc).sum();
    let total_days: f64 = files.iter().filter_map(|f| f.estimate_days).sum();

    let mut rows: Vec<Row> = files
        .iter()
        .map(|f| Row::File {
            index: f.index,
            path: f.path.clone(),
            loc: f.loc,
            estimate_days: f.estimate_days,
        })
        .collect();
    rows.push(Row::Divider);
    rows.push(Row::Totals { total_loc, total_days });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str, loc: u64, estimate_days: Option<f64>, index: usize) -> ScopedFile {
        ScopedFile { path: path.into(), loc, estimate_days, index }
    }

    #[test]
    fn empty_registry_projects_divider_and_zero_totals() {
        let rows = project(&[]);
        assert_eq!(rows, vec![Row::Divider, Row::Totals { total_loc: 0, total_days: 0.0 }]);
    }

    #[test]
    fn totals_sum_all_stored_records() {
        let files = vec![
            file("a.txt", 10, Some(1.5), 0),
            file("b.txt", 20, None, 1),
            file("c.txt", 5, Some(2.0), 2),
        ];
        let rows = project(&files);

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[4], Row::Totals { total_loc: 35, total_days: 3.5 });
    }

    #[test]
    fn rows_follow_registry_order() {
        let files = vec![file("b.txt", 20, None, 1), file("a.txt", 10, None, 0)];
        let rows = project(&files);

        assert!(matches!(&rows[0], Row::File { path, .. } if path == "b.txt"));
        assert!(matches!(&rows[1], Row::File { path, .. } if path == "a.txt"));
        assert_eq!(rows[2], Row::Divider);
    }

    #[test]
    fn file_label_without_estimate() {
        let row = Row::File { index: 0, path: "src/lib.rs".into(), loc: 42, estimate_days: None };
        assert_eq!(row.label(), "src/lib.rs - 42 lines");
    }

    #[test]
    fn file_label_with_estimate() {
        let row =
            Row::File { index: 0, path: "src/lib.rs".into(), loc: 42, estimate_days: Some(1.5) };
        assert_eq!(row.label(), "src/lib.rs - 42 lines, 1.5 days");
    }

    #[test]
    fn file_label_with_zero_estimate_still_shows_days() {
        let row =
            Row::File { index: 0, path: "src/lib.rs".into(), loc: 42, estimate_days: Some(0.0) };
        assert_eq!(row.label(), "src/lib.rs - 42 lines, 0 days");
    }

    #[test]
    fn totals_label_phrasing() {
        let row = Row::Totals { total_loc: 30, total_days: 1.5 };
        assert_eq!(row.label(), "30 lines of code, 1.5 days to audit");
    }

    #[test]
    fn divider_label_is_the_rule() {
        assert_eq!(Row::Divider.label(), DIVIDER_RULE);
    }

    // Mirrors a full session: two marks, one good estimate, one ignored.
    #[test]
    fn full_scenario_projection() {
        let files = vec![file("a.txt", 10, Some(1.5), 0), file("b.txt", 20, None, 1)];
        let rows = project(&files);

        assert_eq!(
            rows,
            vec![
                Row::File { index: 0, path: "a.txt".into(), loc: 10, estimate_days: Some(1.5) },
                Row::File { index: 1, path: "b.txt".into(), loc: 20, estimate_days: None },
                Row::Divider,
                Row::Totals { total_loc: 30, total_days: 1.5 },
            ]
        );
        assert_eq!(rows[0].label(), "a.txt - 10 lines, 1.5 days");
        assert_eq!(rows[1].label(), "b.txt - 20 lines");
        assert_eq!(rows[3].label(), "30 lines of code, 1.5 days to audit");
    }
}
