//! Array-sorting benchmark case.

use rand::Rng;

use benchlab_core::BenchmarkRecord;

use crate::case::{assertion, duration_ms, measure, BenchCase, CaseError, Strictness};
use crate::workloads::sort_array;

/// Iteration plan for [`SortingCase`].
#[derive(Debug, Clone)]
pub struct SortingPlan {
    /// Dataset sizes, each swept independently.
    pub sizes: Vec<usize>,
    /// Iterations per size.
    pub iterations: u32,
    /// How many outputs per size are kept for the ordering check.
    pub verified_iterations: u32,
    /// Exact number of elements the full run must sort.
    pub expected_total: u64,
}

impl Default for SortingPlan {
    fn default() -> Self {
        Self {
            sizes: vec![10_000, 25_000, 50_000, 75_000],
            iterations: 100,
            verified_iterations: 3,
            expected_total: 16_000_000,
        }
    }
}

/// Sorts freshly generated random datasets and verifies sampled outputs.
#[derive(Debug, Default)]
pub struct SortingCase {
    plan: SortingPlan,
}

impl SortingCase {
    /// Case with the canonical plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Case with a custom plan.
    pub fn with_plan(plan: SortingPlan) -> Self {
        Self { plan }
    }
}

struct SortOutcome {
    total_sorted: u64,
    // (size, sorted output) for the sampled iterations of each size
    samples: Vec<(usize, Vec<i64>)>,
}

impl BenchCase for SortingCase {
    fn name(&self) -> &'static str {
        "sorting"
    }

    fn run(&self, _strictness: Strictness) -> Result<BenchmarkRecord, CaseError> {
        let plan = &self.plan;
        let (outcome, elapsed) = measure(|| {
            let mut rng = rand::thread_rng();
            let mut total_sorted = 0u64;
            let mut samples = Vec::new();
            for &size in &plan.sizes {
                for iteration in 0..plan.iterations {
                    let data: Vec<i64> =
                        (0..size).map(|_| rng.gen_range(0..size as i64)).collect();
                    let sorted = sort_array(&data);
                    total_sorted += sorted.len() as u64;
                    if iteration < plan.verified_iterations {
                        samples.push((size, sorted));
                    }
                }
            }
            SortOutcome {
                total_sorted,
                samples,
            }
        });

        if outcome.total_sorted != plan.expected_total {
            return Err(assertion(
                self.name(),
                format!(
                    "expected {} total elements sorted, got {}",
                    plan.expected_total, outcome.total_sorted
                ),
            ));
        }
        for (size, sample) in &outcome.samples {
            if sample.len() != *size {
                return Err(assertion(
                    self.name(),
                    format!("sampled output for size {size} has {} elements", sample.len()),
                ));
            }
            if let Some(pair) = sample.windows(2).find(|w| w[0] > w[1]) {
                return Err(assertion(
                    self.name(),
                    format!("output for size {size} not sorted: {} > {}", pair[0], pair[1]),
                ));
            }
        }

        Ok(BenchmarkRecord::new(self.name(), duration_ms(elapsed))
            .with_op_count(outcome.total_sorted))
    }
}
