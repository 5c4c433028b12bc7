//! Factorial benchmark case.

use std::hint::black_box;
use std::time::Duration;

use benchlab_core::BenchmarkRecord;

use crate::case::{assertion, check_budget, duration_ms, measure, BenchCase, CaseError, Strictness};
use crate::workloads::factorial;

/// Iteration plan for [`FactorialCase`].
#[derive(Debug, Clone)]
pub struct FactorialPlan {
    /// Largest input swept; the sweep runs `1..=max_n`.
    pub max_n: u64,
    /// Repeats per input.
    pub repeats: u32,
    /// Advisory duration budget.
    pub budget: Option<Duration>,
}

impl Default for FactorialPlan {
    fn default() -> Self {
        Self {
            max_n: 15,
            repeats: 100,
            budget: Some(Duration::from_millis(2000)),
        }
    }
}

/// Sweeps [`factorial`] over `1..=max_n`, `repeats` times per input.
#[derive(Debug, Default)]
pub struct FactorialCase {
    plan: FactorialPlan,
}

impl FactorialCase {
    /// Case with the canonical plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Case with a custom plan.
    pub fn with_plan(plan: FactorialPlan) -> Self {
        Self { plan }
    }
}

impl BenchCase for FactorialCase {
    fn name(&self) -> &'static str {
        "factorial"
    }

    fn run(&self, strictness: Strictness) -> Result<BenchmarkRecord, CaseError> {
        let plan = &self.plan;
        let (calls, elapsed) = measure(|| {
            let mut calls = 0u64;
            for n in 1..=plan.max_n {
                for _ in 0..plan.repeats {
                    black_box(factorial(black_box(n)));
                    calls += 1;
                }
            }
            calls
        });

        let expected = plan.max_n * u64::from(plan.repeats);
        if calls != expected {
            return Err(assertion(
                self.name(),
                format!("expected {expected} calls, made {calls}"),
            ));
        }
        if plan.max_n >= 15 && factorial(15) != 1_307_674_368_000 {
            return Err(assertion(
                self.name(),
                "factorial(15) drifted from 1307674368000",
            ));
        }
        check_budget(self.name(), plan.budget, elapsed, strictness)?;

        Ok(BenchmarkRecord::new(self.name(), duration_ms(elapsed)).with_op_count(calls))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_plan_passes() {
        let record = FactorialCase::new().run(Strictness::Advisory).unwrap();
        assert_eq!(record.name, "factorial");
        assert_eq!(record.op_count, Some(1500));
        assert!(record.duration_ms >= 0.0);
    }

    #[test]
    fn test_zero_budget_is_advisory_by_default() {
        let plan = FactorialPlan {
            budget: Some(Duration::ZERO),
            ..FactorialPlan::default()
        };
        let record = FactorialCase::with_plan(plan).run(Strictness::Advisory);
        assert!(record.is_ok());
    }

    #[test]
    fn test_zero_budget_fails_under_strict() {
        let plan = FactorialPlan {
            budget: Some(Duration::ZERO),
            ..FactorialPlan::default()
        };
        let result = FactorialCase::with_plan(plan).run(Strictness::Strict);
        assert!(matches!(result, Err(CaseError::BudgetExceeded { .. })));
    }

    #[test]
    fn test_large_inputs_only_measure_time() {
        // Beyond 20! the product wraps; the case must still complete.
        let plan = FactorialPlan {
            max_n: 40,
            repeats: 10,
            budget: None,
        };
        let record = FactorialCase::with_plan(plan).run(Strictness::Strict).unwrap();
        assert_eq!(record.op_count, Some(400));
    }
}
