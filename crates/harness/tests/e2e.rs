//! End-to-end scenarios: full-scale case runs, report rendering, and the
//! run → persist → compare flow.

use benchlab_core::{compare, BenchmarkRecord, FasterSide, ResultSet};
use benchlab_harness::cases::{
    FactorialCase, FactorialPlan, PrimeCase, PrimePlan, SortingCase,
};
use benchlab_harness::report::generate_report;
use benchlab_harness::{io, BenchCase, Strictness, Suite};

#[test]
fn prime_case_finds_6145_primes_at_full_scale() {
    let record = PrimeCase::new().run(Strictness::Advisory).unwrap();
    assert_eq!(record.name, "prime");
    assert_eq!(record.op_count, Some(6145));
}

#[test]
fn sorting_case_sorts_16_million_elements_at_full_scale() {
    let record = SortingCase::new().run(Strictness::Advisory).unwrap();
    assert_eq!(record.name, "sorting");
    assert_eq!(record.op_count, Some(16_000_000));
}

#[test]
fn standalone_and_in_suite_runs_agree() {
    let plan = PrimePlan {
        limit: 1000,
        passes: 3,
        expected_total: 3 * 168, // 168 primes below 1000
        budget: None,
    };

    let standalone = PrimeCase::with_plan(plan.clone())
        .run(Strictness::Advisory)
        .unwrap();
    let report = Suite::new()
        .with_case(Box::new(PrimeCase::with_plan(plan)))
        .run();

    assert!(report.is_pass());
    let in_suite = report.records().get(0).unwrap();
    assert_eq!(in_suite.name, standalone.name);
    assert_eq!(in_suite.op_count, standalone.op_count);
}

#[test]
fn report_renders_the_documented_format() {
    let set: ResultSet = vec![BenchmarkRecord::new("x", 12.3456)].into();
    assert_eq!(
        generate_report(&set),
        "Benchmark Report\n================\nx: 12.35ms\n"
    );
}

#[test]
fn run_persist_compare_flow() {
    let dir = tempfile::tempdir().unwrap();
    let baseline_path = dir.path().join("baseline.json");
    let candidate_path = dir.path().join("candidate.json");

    let suite = || {
        Suite::new()
            .with_case(Box::new(FactorialCase::with_plan(FactorialPlan {
                max_n: 10,
                repeats: 50,
                budget: None,
            })))
            .with_case(Box::new(PrimeCase::with_plan(PrimePlan {
                limit: 500,
                passes: 2,
                expected_total: 2 * 95, // 95 primes below 500
                budget: None,
            })))
    };

    let baseline = suite().run();
    let candidate = suite().run();
    assert!(baseline.is_pass() && candidate.is_pass());

    io::write_result_set(&baseline_path, baseline.records()).unwrap();
    io::write_result_set(&candidate_path, candidate.records()).unwrap();

    let a = io::read_result_set(&baseline_path).unwrap();
    let b = io::read_result_set(&candidate_path).unwrap();
    let rows = compare(&a, &b);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "factorial");
    assert_eq!(rows[1].name, "prime");
    for row in &rows {
        assert!(row.duration_b.is_some());
        assert!(row.diff.is_some());
    }

    // Self-comparison credits A everywhere with zero diff.
    for row in compare(&a, &a) {
        assert_eq!(row.faster, FasterSide::A);
        assert_eq!(row.diff, Some(0.0));
    }
}

#[test]
fn suite_report_feeds_the_report_generator() {
    let report = Suite::new()
        .with_case(Box::new(FactorialCase::with_plan(FactorialPlan {
            max_n: 5,
            repeats: 10,
            budget: None,
        })))
        .run();

    let text = generate_report(report.records());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Benchmark Report");
    assert_eq!(lines[1], "================");
    assert!(lines[2].starts_with("factorial: "));
    assert!(lines[2].ends_with("ms"));
}
