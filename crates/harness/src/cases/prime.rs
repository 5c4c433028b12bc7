//! Prime-checking benchmark case.

use std::time::Duration;

use benchlab_core::BenchmarkRecord;

use crate::case::{assertion, check_budget, duration_ms, measure, BenchCase, CaseError, Strictness};
use crate::workloads::is_prime;

/// Iteration plan for [`PrimeCase`].
#[derive(Debug, Clone)]
pub struct PrimePlan {
    /// Upper bound of the sweep; every integer in `2..=limit` is checked.
    pub limit: u64,
    /// Number of full passes over the range.
    pub passes: u32,
    /// Exact number of primes the full run must find.
    pub expected_total: u64,
    /// Advisory duration budget.
    pub budget: Option<Duration>,
}

impl Default for PrimePlan {
    fn default() -> Self {
        // 1229 primes below 10_000, times 5 passes.
        Self {
            limit: 10_000,
            passes: 5,
            expected_total: 6145,
            budget: Some(Duration::from_millis(5000)),
        }
    }
}

/// Counts primes in `2..=limit` across repeated passes.
#[derive(Debug, Default)]
pub struct PrimeCase {
    plan: PrimePlan,
}

impl PrimeCase {
    /// Case with the canonical plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Case with a custom plan.
    pub fn with_plan(plan: PrimePlan) -> Self {
        Self { plan }
    }
}

impl BenchCase for PrimeCase {
    fn name(&self) -> &'static str {
        "prime"
    }

    fn run(&self, strictness: Strictness) -> Result<BenchmarkRecord, CaseError> {
        let plan = &self.plan;
        let (total_primes, elapsed) = measure(|| {
            let mut total = 0u64;
            for _ in 0..plan.passes {
                total += (2..=plan.limit).filter(|&n| is_prime(n)).count() as u64;
            }
            total
        });

        if total_primes != plan.expected_total {
            return Err(assertion(
                self.name(),
                format!(
                    "expected {} total primes across {} passes, found {total_primes}",
                    plan.expected_total, plan.passes
                ),
            ));
        }
        check_budget(self.name(), plan.budget, elapsed, strictness)?;

        Ok(BenchmarkRecord::new(self.name(), duration_ms(elapsed)).with_op_count(total_primes))
    }
}
