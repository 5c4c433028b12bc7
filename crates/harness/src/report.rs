//! Text report generation.

use std::fmt::Write as _;

use benchlab_core::ResultSet;

/// Render the stable text report for a result set.
///
/// Exactly a two-line header followed by one `<name>: <duration>ms` line
/// per record, duration formatted to two decimal places. Pure formatting;
/// the caller decides whether to print, log, or persist it.
pub fn generate_report(results: &ResultSet) -> String {
    let mut report = String::from("Benchmark Report\n================\n");
    for record in results.iter() {
        writeln!(report, "{}: {:.2}ms", record.name, record.duration_ms).unwrap();
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchlab_core::BenchmarkRecord;

    #[test]
    fn test_single_record_rendering() {
        let set: ResultSet = vec![BenchmarkRecord::new("x", 12.3456)].into();
        assert_eq!(
            generate_report(&set),
            "Benchmark Report\n================\nx: 12.35ms\n"
        );
    }

    #[test]
    fn test_empty_set_renders_header_only() {
        assert_eq!(
            generate_report(&ResultSet::new()),
            "Benchmark Report\n================\n"
        );
    }

    #[test]
    fn test_one_line_per_record_in_order() {
        let set: ResultSet = vec![
            BenchmarkRecord::new("factorial", 1.0),
            BenchmarkRecord::new("prime", 2.005),
        ]
        .into();
        let report = generate_report(&set);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "Benchmark Report");
        assert_eq!(lines[1], "================");
        assert_eq!(lines[2], "factorial: 1.00ms");
        assert_eq!(lines[3], "prime: 2.00ms");
        assert_eq!(lines.len(), 4);
    }
}
