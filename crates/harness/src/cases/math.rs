//! Matrix and statistics benchmark case.

use std::hint::black_box;

use rand::Rng;

use benchlab_core::BenchmarkRecord;

use crate::case::{assertion, duration_ms, measure, BenchCase, CaseError, Strictness};

/// Iteration plan for [`MathCase`].
#[derive(Debug, Clone)]
pub struct MathPlan {
    /// Square matrix dimension.
    pub matrix_size: usize,
    /// Number of full multiplications.
    pub matrix_iterations: u32,
    /// Length of the random dataset for the statistics pass.
    pub dataset_len: usize,
}

impl Default for MathPlan {
    fn default() -> Self {
        Self {
            matrix_size: 200,
            matrix_iterations: 100,
            dataset_len: 1_000_000,
        }
    }
}

impl MathPlan {
    /// Exact operation count the plan performs: one per scalar
    /// multiply-add, plus three statistics passes over the dataset.
    pub fn expected_ops(&self) -> u64 {
        let n = self.matrix_size as u64;
        u64::from(self.matrix_iterations) * n * n * n + self.dataset_len as u64 * 3
    }
}

/// Summary statistics over the random dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetStats {
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Middle element of the sorted dataset.
    pub median: f64,
}

impl DatasetStats {
    fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self {
                mean: 0.0,
                std_dev: 0.0,
                median: 0.0,
            };
        }
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self {
            mean,
            std_dev: variance.sqrt(),
            median: sorted[sorted.len() / 2],
        }
    }
}

/// Dense matrix multiplications followed by a statistics pass.
#[derive(Debug, Default)]
pub struct MathCase {
    plan: MathPlan,
}

impl MathCase {
    /// Case with the canonical plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Case with a custom plan.
    pub fn with_plan(plan: MathPlan) -> Self {
        Self { plan }
    }
}

fn random_matrix(n: usize, rng: &mut impl Rng) -> Vec<Vec<f64>> {
    (0..n)
        .map(|_| (0..n).map(|_| rng.gen::<f64>()).collect())
        .collect()
}

impl BenchCase for MathCase {
    fn name(&self) -> &'static str {
        "math"
    }

    fn run(&self, _strictness: Strictness) -> Result<BenchmarkRecord, CaseError> {
        let plan = &self.plan;
        let n = plan.matrix_size;
        let ((ops, stats), elapsed) = measure(|| {
            let mut rng = rand::thread_rng();
            let mut ops = 0u64;
            for _ in 0..plan.matrix_iterations {
                let a = random_matrix(n, &mut rng);
                let b = random_matrix(n, &mut rng);
                let mut product = vec![vec![0.0f64; n]; n];
                for i in 0..n {
                    for j in 0..n {
                        for k in 0..n {
                            product[i][j] += a[i][k] * b[k][j];
                            ops += 1;
                        }
                    }
                }
                black_box(&product);
            }

            let dataset: Vec<f64> = (0..plan.dataset_len)
                .map(|_| rng.gen::<f64>() * 1000.0)
                .collect();
            let stats = DatasetStats::from_samples(&dataset);
            ops += dataset.len() as u64 * 3;
            (ops, stats)
        });

        if ops != plan.expected_ops() {
            return Err(assertion(
                self.name(),
                format!("expected {} operations, counted {ops}", plan.expected_ops()),
            ));
        }
        if plan.dataset_len > 0 {
            if !(0.0..=1000.0).contains(&stats.mean) {
                return Err(assertion(
                    self.name(),
                    format!("dataset mean {} outside [0, 1000]", stats.mean),
                ));
            }
            if !(0.0..=1000.0).contains(&stats.median) || stats.std_dev < 0.0 {
                return Err(assertion(self.name(), "dataset statistics out of range"));
            }
        }
        tracing::debug!(
            mean = stats.mean,
            median = stats.median,
            std_dev = stats.std_dev,
            "dataset statistics"
        );

        Ok(BenchmarkRecord::new(self.name(), duration_ms(elapsed)).with_op_count(ops))
    }
}
