//! Sequential suite execution.

use benchlab_core::{Error, Result, ResultSet, RunMetadata};

use crate::case::{BenchCase, CaseError, Strictness};
use crate::cases::{
    AsyncCase, FactorialCase, FibonacciCase, MathCase, MemoryCase, PrimeCase, SortingCase,
    StringCase,
};

/// A failed case within an otherwise continuing suite run.
#[derive(Debug)]
pub struct CaseFailure {
    /// Name of the failed case.
    pub name: &'static str,
    /// What went wrong.
    pub error: CaseError,
}

/// Outcome of one suite run: successful records in execution order, the
/// failures that were recorded along the way, and run metadata.
#[derive(Debug)]
pub struct SuiteReport {
    metadata: RunMetadata,
    records: ResultSet,
    failures: Vec<CaseFailure>,
}

impl SuiteReport {
    /// Metadata captured at run start.
    pub fn metadata(&self) -> &RunMetadata {
        &self.metadata
    }

    /// Records of the cases that passed, in execution order.
    pub fn records(&self) -> &ResultSet {
        &self.records
    }

    /// Consume the report, keeping only the result set.
    pub fn into_records(self) -> ResultSet {
        self.records
    }

    /// The failures recorded during the run.
    pub fn failures(&self) -> &[CaseFailure] {
        &self.failures
    }

    /// Number of cases that passed.
    pub fn passed(&self) -> usize {
        self.records.len()
    }

    /// Number of cases that failed.
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Whether every case passed.
    pub fn is_pass(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Ordered list of benchmark cases, executed strictly sequentially.
///
/// Cases never run concurrently with each other, even though the async
/// case fans out internally, so measurements never contend for the clock
/// or for CPU cache state. A failed case is recorded and the run continues
/// with the next; there are no retries and no watchdog.
pub struct Suite {
    cases: Vec<Box<dyn BenchCase>>,
    strictness: Strictness,
}

impl std::fmt::Debug for Suite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Suite")
            .field("cases", &self.case_names())
            .field("strictness", &self.strictness)
            .finish()
    }
}

impl Suite {
    /// Empty suite with advisory budget enforcement.
    pub fn new() -> Self {
        Self {
            cases: Vec::new(),
            strictness: Strictness::Advisory,
        }
    }

    /// The fixed eight-case roster with canonical plans, in declared
    /// order: factorial, prime, sorting, fibonacci, async, string,
    /// memory, math.
    pub fn standard() -> Self {
        Self::new()
            .with_case(Box::new(FactorialCase::new()))
            .with_case(Box::new(PrimeCase::new()))
            .with_case(Box::new(SortingCase::new()))
            .with_case(Box::new(FibonacciCase::new()))
            .with_case(Box::new(AsyncCase::new()))
            .with_case(Box::new(StringCase::new()))
            .with_case(Box::new(MemoryCase::new()))
            .with_case(Box::new(MathCase::new()))
    }

    /// Append a case to the roster.
    pub fn with_case(mut self, case: Box<dyn BenchCase>) -> Self {
        self.cases.push(case);
        self
    }

    /// Set budget enforcement for every case in the suite.
    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Restrict the roster to the single case called `name`.
    ///
    /// The retained case runs with assertion semantics identical to its
    /// in-suite execution.
    pub fn only(mut self, name: &str) -> Result<Self> {
        self.cases.retain(|case| case.name() == name);
        if self.cases.is_empty() {
            return Err(Error::invalid_input(format!("unknown case `{name}`")));
        }
        Ok(self)
    }

    /// Case names in execution order.
    pub fn case_names(&self) -> Vec<&'static str> {
        self.cases.iter().map(|case| case.name()).collect()
    }

    /// Execute every case in declared order and collect the outcome.
    pub fn run(&self) -> SuiteReport {
        let metadata = RunMetadata::capture();
        tracing::info!(
            run_id = %metadata.run_id,
            runner = %metadata.runner,
            cases = self.cases.len(),
            "starting suite"
        );

        let mut records = ResultSet::new();
        let mut failures = Vec::new();
        for case in &self.cases {
            match case.run(self.strictness) {
                Ok(record) => {
                    tracing::info!(
                        case = %record.name,
                        duration_ms = record.duration_ms,
                        "case completed"
                    );
                    records.push(record);
                }
                Err(error) => {
                    tracing::error!(case = case.name(), %error, "case failed");
                    failures.push(CaseFailure {
                        name: case.name(),
                        error,
                    });
                }
            }
        }

        SuiteReport {
            metadata,
            records,
            failures,
        }
    }
}

impl Default for Suite {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cases::{FactorialPlan, PrimePlan};

    fn quick_factorial() -> Box<dyn BenchCase> {
        Box::new(FactorialCase::with_plan(FactorialPlan {
            max_n: 5,
            repeats: 2,
            budget: None,
        }))
    }

    fn quick_prime(expected_total: u64) -> Box<dyn BenchCase> {
        Box::new(PrimeCase::with_plan(PrimePlan {
            limit: 100,
            passes: 1,
            expected_total,
            budget: None,
        }))
    }

    #[test]
    fn test_standard_roster_order() {
        let suite = Suite::standard();
        assert_eq!(
            suite.case_names(),
            [
                "factorial",
                "prime",
                "sorting",
                "fibonacci",
                "async",
                "string",
                "memory",
                "math"
            ]
        );
    }

    #[test]
    fn test_run_preserves_execution_order() {
        let report = Suite::new()
            .with_case(quick_prime(25))
            .with_case(quick_factorial())
            .run();

        assert!(report.is_pass());
        let names: Vec<&str> = report.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["prime", "factorial"]);
    }

    #[test]
    fn test_failure_does_not_halt_the_suite() {
        let report = Suite::new()
            .with_case(quick_factorial())
            .with_case(quick_prime(24)) // wrong count, must fail
            .with_case(quick_prime(25))
            .run();

        assert!(!report.is_pass());
        assert_eq!(report.passed(), 2);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.failures()[0].name, "prime");
        // The case after the failure still executed.
        assert_eq!(report.records().get(1).unwrap().name, "prime");
    }

    #[test]
    fn test_only_retains_the_named_case() {
        let suite = Suite::standard().only("prime").unwrap();
        assert_eq!(suite.case_names(), ["prime"]);
    }

    #[test]
    fn test_only_rejects_unknown_names() {
        let err = Suite::standard().only("warp").unwrap_err();
        assert!(err.to_string().contains("warp"));
    }

    #[test]
    fn test_empty_suite_reports_nothing() {
        let report = Suite::new().run();
        assert!(report.is_pass());
        assert_eq!(report.passed(), 0);
        assert!(report.records().is_empty());
    }
}
