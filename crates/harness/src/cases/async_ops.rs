//! Concurrent delayed-completion benchmark case.

use futures::future::join_all;

use benchlab_core::BenchmarkRecord;

use crate::case::{assertion, duration_ms, measure, setup, BenchCase, CaseError, Strictness};
use crate::workloads::async_operation;

/// Iteration plan for [`AsyncCase`].
#[derive(Debug, Clone)]
pub struct AsyncPlan {
    /// Batch sizes launched per repeat.
    pub batch_counts: Vec<usize>,
    /// Outer repeats over the full batch list.
    pub repeats: u32,
    /// Minimum delay per task, in milliseconds.
    pub base_delay_ms: u64,
    /// Per-task delay is `base + (index % spread)`.
    pub delay_spread_ms: u64,
}

impl Default for AsyncPlan {
    fn default() -> Self {
        Self {
            batch_counts: vec![500, 750, 1000, 1500, 2000, 4000, 6000, 8000],
            repeats: 10,
            base_delay_ms: 10,
            delay_spread_ms: 20,
        }
    }
}

impl AsyncPlan {
    /// Total number of delayed operations the plan launches.
    pub fn expected_operations(&self) -> u64 {
        u64::from(self.repeats) * self.batch_counts.iter().map(|&c| c as u64).sum::<u64>()
    }
}

/// Fans out batches of delayed completions and awaits the full set.
///
/// The case owns its tokio runtime so the suite runner stays synchronous
/// and cases never overlap; suspension happens only inside the delayed
/// operations and at the all-of-N join.
#[derive(Debug, Default)]
pub struct AsyncCase {
    plan: AsyncPlan,
}

impl AsyncCase {
    /// Case with the canonical plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Case with a custom plan.
    pub fn with_plan(plan: AsyncPlan) -> Self {
        Self { plan }
    }
}

impl BenchCase for AsyncCase {
    fn name(&self) -> &'static str {
        "async"
    }

    fn run(&self, _strictness: Strictness) -> Result<BenchmarkRecord, CaseError> {
        let plan = &self.plan;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| setup(self.name(), e))?;

        let spread = plan.delay_spread_ms.max(1);
        let (results, elapsed) = measure(|| {
            runtime.block_on(async {
                let mut tasks = Vec::new();
                for _ in 0..plan.repeats {
                    for &count in &plan.batch_counts {
                        for i in 0..count {
                            let delay = plan.base_delay_ms + (i as u64 % spread);
                            tasks.push(async_operation(delay));
                        }
                    }
                }
                join_all(tasks).await
            })
        });

        let expected = plan.expected_operations();
        if results.len() as u64 != expected {
            return Err(assertion(
                self.name(),
                format!("expected {expected} completions, saw {}", results.len()),
            ));
        }
        if let Some(idx) = results.iter().position(|&marker| marker != "completed") {
            return Err(assertion(
                self.name(),
                format!("operation {idx} resolved to `{}`", results[idx]),
            ));
        }

        Ok(BenchmarkRecord::new(self.name(), duration_ms(elapsed))
            .with_op_count(results.len() as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_batch_resolves_every_operation() {
        let plan = AsyncPlan {
            batch_counts: vec![10, 20],
            repeats: 2,
            base_delay_ms: 1,
            delay_spread_ms: 3,
        };
        let case = AsyncCase::with_plan(plan);
        let record = case.run(Strictness::Advisory).unwrap();

        assert_eq!(record.op_count, Some(60));
        // Every task sleeps at least the base delay.
        assert!(record.duration_ms >= 1.0);
    }

    #[test]
    fn test_expected_operations_closed_form() {
        assert_eq!(AsyncPlan::default().expected_operations(), 237_500);
    }

    #[test]
    fn test_zero_spread_means_uniform_delay() {
        let plan = AsyncPlan {
            batch_counts: vec![5],
            repeats: 1,
            base_delay_ms: 1,
            delay_spread_ms: 0,
        };
        let record = AsyncCase::with_plan(plan).run(Strictness::Advisory).unwrap();
        assert_eq!(record.op_count, Some(5));
    }
}
