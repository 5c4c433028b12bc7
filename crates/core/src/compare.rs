// Copyright 2026 Benchlab Contributors
// SPDX-License-Identifier: Apache-2.0

//! Positional comparison of two result sets.
//!
//! Pairing is strictly by position, never by name: one [`ComparisonRow`] is
//! produced per record in set A, and set B is consulted only up to A's
//! length. A record with no counterpart keeps `duration_b`/`diff` empty and
//! credits side A — the asymmetric default inherited from the original
//! report tooling, kept on purpose.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write as _;

use crate::record::ResultSet;

/// Which side of a comparison was faster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FasterSide {
    /// The first (baseline) result set.
    A,
    /// The second (candidate) result set.
    B,
}

impl fmt::Display for FasterSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            FasterSide::A => "A",
            FasterSide::B => "B",
        })
    }
}

/// One positional pairing of records from two result sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Name of the record on side A.
    pub name: String,
    /// Duration of the A record, in milliseconds.
    pub duration_a: f64,
    /// Duration of the positional counterpart in B, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_b: Option<f64>,
    /// Faster side. Ties and missing counterparts credit A.
    pub faster: FasterSide,
    /// Absolute duration difference, when a counterpart exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff: Option<f64>,
}

/// Compare two result sets position by position.
///
/// Extra records in `b` beyond `a`'s length are ignored.
pub fn compare(a: &ResultSet, b: &ResultSet) -> Vec<ComparisonRow> {
    a.iter()
        .enumerate()
        .map(|(idx, rec)| match b.get(idx) {
            Some(other) => ComparisonRow {
                name: rec.name.clone(),
                duration_a: rec.duration_ms,
                duration_b: Some(other.duration_ms),
                faster: if rec.duration_ms <= other.duration_ms {
                    FasterSide::A
                } else {
                    FasterSide::B
                },
                diff: Some((rec.duration_ms - other.duration_ms).abs()),
            },
            None => ComparisonRow {
                name: rec.name.clone(),
                duration_a: rec.duration_ms,
                duration_b: None,
                faster: FasterSide::A,
                diff: None,
            },
        })
        .collect()
}

/// Render comparison rows as an aligned text table.
pub fn render_comparison(rows: &[ComparisonRow]) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "{:<24} {:>12} {:>12} {:>8} {:>12}",
        "case", "A (ms)", "B (ms)", "faster", "diff (ms)"
    )
    .unwrap();
    for row in rows {
        let b = row
            .duration_b
            .map_or_else(|| "-".to_string(), |d| format!("{d:.2}"));
        let diff = row
            .diff
            .map_or_else(|| "-".to_string(), |d| format!("{d:.2}"));
        writeln!(
            out,
            "{:<24} {:>12.2} {:>12} {:>8} {:>12}",
            row.name, row.duration_a, b, row.faster, diff
        )
        .unwrap();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::BenchmarkRecord;

    fn set(durations: &[(&str, f64)]) -> ResultSet {
        durations
            .iter()
            .map(|(name, d)| BenchmarkRecord::new(*name, *d))
            .collect()
    }

    #[test]
    fn test_self_comparison_credits_a_with_zero_diff() {
        let a = set(&[("factorial", 10.0), ("prime", 20.0), ("sorting", 30.0)]);
        let rows = compare(&a, &a);

        assert_eq!(rows.len(), 3);
        for row in rows {
            assert_eq!(row.faster, FasterSide::A);
            assert_eq!(row.diff, Some(0.0));
            assert_eq!(row.duration_b, Some(row.duration_a));
        }
    }

    #[test]
    fn test_faster_side_b() {
        let a = set(&[("prime", 25.0)]);
        let b = set(&[("prime", 20.0)]);
        let rows = compare(&a, &b);
        assert_eq!(rows[0].faster, FasterSide::B);
        assert_eq!(rows[0].diff, Some(5.0));
    }

    #[test]
    fn test_faster_side_a() {
        let a = set(&[("prime", 15.0)]);
        let b = set(&[("prime", 20.0)]);
        let rows = compare(&a, &b);
        assert_eq!(rows[0].faster, FasterSide::A);
    }

    #[test]
    fn test_missing_counterpart_defaults_to_a() {
        let a = set(&[("factorial", 10.0), ("prime", 20.0)]);
        let b = set(&[("factorial", 12.0)]);
        let rows = compare(&a, &b);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].duration_b, None);
        assert_eq!(rows[1].diff, None);
        assert_eq!(rows[1].faster, FasterSide::A);
    }

    #[test]
    fn test_extra_b_entries_are_ignored() {
        let a = set(&[("factorial", 10.0)]);
        let b = set(&[("factorial", 12.0), ("prime", 1.0), ("sorting", 2.0)]);
        let rows = compare(&a, &b);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "factorial");
    }

    #[test]
    fn test_empty_a_yields_no_rows() {
        let a = ResultSet::new();
        let b = set(&[("factorial", 1.0)]);
        assert!(compare(&a, &b).is_empty());
    }

    #[test]
    fn test_render_comparison_marks_missing_values() {
        let a = set(&[("factorial", 10.0), ("prime", 20.0)]);
        let b = set(&[("factorial", 12.5)]);
        let table = render_comparison(&compare(&a, &b));

        let mut lines = table.lines();
        assert!(lines.next().unwrap().contains("faster"));
        assert!(table.contains("12.50"));
        assert!(table.lines().nth(2).unwrap().contains('-'));
    }
}
