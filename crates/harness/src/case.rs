//! Case execution machinery: timing, strictness, and failure types.

use std::time::{Duration, Instant};

use benchlab_core::BenchmarkRecord;
use thiserror::Error;

/// How duration budgets are enforced.
///
/// Correctness assertions are hard failures under either mode; budgets are
/// the separate, host-speed-dependent advisory class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Budget breaches log a warning and the case still passes.
    #[default]
    Advisory,
    /// Budget breaches fail the case.
    Strict,
}

/// A failed benchmark case.
#[derive(Debug, Error)]
pub enum CaseError {
    /// A correctness assertion did not hold.
    #[error("assertion failed in `{case}`: {detail}")]
    Assertion {
        /// Case that failed.
        case: &'static str,
        /// What did not hold.
        detail: String,
    },

    /// A duration budget was exceeded under [`Strictness::Strict`].
    #[error("`{case}` exceeded its {budget_ms}ms budget: took {actual_ms:.2}ms")]
    BudgetExceeded {
        /// Case that overran.
        case: &'static str,
        /// Budget in milliseconds.
        budget_ms: u64,
        /// Measured duration in milliseconds.
        actual_ms: f64,
    },

    /// The case could not set up its execution environment.
    #[error("`{case}` setup failed: {detail}")]
    Setup {
        /// Case that failed to start.
        case: &'static str,
        /// What went wrong.
        detail: String,
    },
}

/// One named, configured workload execution with timing and checks.
///
/// The run contract: start the monotonic timer, execute the full iteration
/// plan while accumulating an operation counter, stop the timer, evaluate
/// assertions outside the timed section, and emit a [`BenchmarkRecord`].
/// Cases are runnable standalone or as part of a suite with identical
/// assertion semantics.
pub trait BenchCase {
    /// Stable case name, used for records and report lines.
    fn name(&self) -> &'static str;

    /// Execute the full iteration plan and produce the measured record.
    fn run(&self, strictness: Strictness) -> Result<BenchmarkRecord, CaseError>;
}

/// Measure wall-clock time of a closure on the monotonic clock.
pub fn measure<F, R>(f: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Duration in fractional milliseconds.
pub fn duration_ms(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1e3
}

/// Enforce an optional duration budget after the timed section.
pub fn check_budget(
    case: &'static str,
    budget: Option<Duration>,
    elapsed: Duration,
    strictness: Strictness,
) -> Result<(), CaseError> {
    let Some(budget) = budget else {
        return Ok(());
    };
    if elapsed <= budget {
        return Ok(());
    }
    let budget_ms = budget.as_millis() as u64;
    let actual_ms = duration_ms(elapsed);
    match strictness {
        Strictness::Advisory => {
            tracing::warn!(case, budget_ms, actual_ms, "duration budget exceeded");
            Ok(())
        }
        Strictness::Strict => Err(CaseError::BudgetExceeded {
            case,
            budget_ms,
            actual_ms,
        }),
    }
}

pub(crate) fn assertion(case: &'static str, detail: impl Into<String>) -> CaseError {
    CaseError::Assertion {
        case,
        detail: detail.into(),
    }
}

pub(crate) fn setup(case: &'static str, detail: impl std::fmt::Display) -> CaseError {
    CaseError::Setup {
        case,
        detail: detail.to_string(),
    }
}
