//! Fibonacci memoization benchmark case.

use std::hint::black_box;
use std::sync::{Arc, Mutex};

use benchlab_core::BenchmarkRecord;

use crate::case::{assertion, duration_ms, measure, BenchCase, CaseError, Strictness};
use crate::workloads::{fibonacci, shared_cache, FibCache};

/// Iteration plan for [`FibonacciCase`].
#[derive(Debug, Clone)]
pub struct FibonacciPlan {
    /// Inputs swept, in order.
    pub inputs: Vec<u32>,
    /// Repeats per input; only the first call per input computes anything.
    pub repeats: u32,
    /// Exact number of calls the full run must make.
    pub expected_calls: u64,
}

impl Default for FibonacciPlan {
    fn default() -> Self {
        Self {
            inputs: vec![
                10, 15, 20, 25, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120, 130, 140, 150,
            ],
            repeats: 5000,
            expected_calls: 85_000,
        }
    }
}

/// Stresses the memo cache: repeated sweeps where everything after the
/// first call per input is a cache hit.
///
/// The default case runs against the process-wide shared cache, so repeat
/// suite runs in one process reuse earlier fills. Tests inject a private
/// cache instead.
pub struct FibonacciCase {
    plan: FibonacciPlan,
    cache: Arc<Mutex<FibCache>>,
}

impl Default for FibonacciCase {
    fn default() -> Self {
        Self::new()
    }
}

impl FibonacciCase {
    /// Case with the canonical plan and the shared process-wide cache.
    pub fn new() -> Self {
        Self::with_plan(FibonacciPlan::default())
    }

    /// Case with a custom plan and the shared process-wide cache.
    pub fn with_plan(plan: FibonacciPlan) -> Self {
        Self {
            plan,
            cache: shared_cache(),
        }
    }

    /// Case with a custom plan and an injected cache.
    pub fn with_cache(plan: FibonacciPlan, cache: Arc<Mutex<FibCache>>) -> Self {
        Self { plan, cache }
    }
}

impl BenchCase for FibonacciCase {
    fn name(&self) -> &'static str {
        "fibonacci"
    }

    fn run(&self, _strictness: Strictness) -> Result<BenchmarkRecord, CaseError> {
        let plan = &self.plan;
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());

        let (calls, elapsed) = measure(|| {
            let mut calls = 0u64;
            for &n in &plan.inputs {
                for _ in 0..plan.repeats {
                    black_box(fibonacci(n, &mut cache));
                    calls += 1;
                }
            }
            calls
        });

        if calls != plan.expected_calls {
            return Err(assertion(
                self.name(),
                format!("expected {} calls, made {calls}", plan.expected_calls),
            ));
        }
        if fibonacci(10, &mut cache) != 55 {
            return Err(assertion(self.name(), "fibonacci(10) drifted from 55"));
        }

        Ok(BenchmarkRecord::new(self.name(), duration_ms(elapsed)).with_op_count(calls))
    }
}
