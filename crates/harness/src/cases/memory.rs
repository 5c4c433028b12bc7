//! Memory-churn benchmark case.
//!
//! Builds and tears down large nested object graphs: per-object item
//! vectors with per-item metadata, processing marks, priority filtering,
//! and a final score ranking. The workload is allocation-heavy on purpose.

use rand::Rng;

use benchlab_core::BenchmarkRecord;

use crate::case::{assertion, duration_ms, measure, BenchCase, CaseError, Strictness};

/// Iteration plan for [`MemoryCase`].
#[derive(Debug, Clone)]
pub struct MemoryPlan {
    /// Number of objects built.
    pub objects: usize,
    /// Items allocated per object.
    pub items_per_object: usize,
}

impl Default for MemoryPlan {
    fn default() -> Self {
        Self {
            objects: 1000,
            items_per_object: 1000,
        }
    }
}

struct Item {
    value: f64,
    priority: u8,
    processed: bool,
    computed_value: f64,
    tags: [String; 2],
}

struct ObjectSummary {
    id: usize,
    total_items: usize,
    tagged_items: usize,
    high_priority: usize,
    average_value: f64,
}

struct ScoredObject {
    id: usize,
    score: f64,
}

/// Allocates, processes, summarizes, and ranks nested object graphs.
#[derive(Debug, Default)]
pub struct MemoryCase {
    plan: MemoryPlan,
}

impl MemoryCase {
    /// Case with the canonical plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Case with a custom plan.
    pub fn with_plan(plan: MemoryPlan) -> Self {
        Self { plan }
    }
}

impl BenchCase for MemoryCase {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn run(&self, _strictness: Strictness) -> Result<BenchmarkRecord, CaseError> {
        let plan = &self.plan;
        let (outcome, elapsed) = measure(|| {
            let mut rng = rand::thread_rng();
            let mut summaries = Vec::with_capacity(plan.objects);
            for id in 0..plan.objects {
                let mut items: Vec<Item> = (0..plan.items_per_object)
                    .map(|j| Item {
                        value: rng.gen::<f64>() * 1000.0,
                        priority: (j % 5) as u8,
                        processed: false,
                        computed_value: 0.0,
                        tags: [format!("tag_{}", j % 10), format!("category_{}", j % 3)],
                    })
                    .collect();

                for item in &mut items {
                    item.processed = true;
                    item.computed_value = item.value * 2.0 + f64::from(item.priority);
                }

                let mut high_priority: Vec<&Item> = items
                    .iter()
                    .filter(|item| item.processed && item.priority >= 3)
                    .collect();
                high_priority
                    .sort_by(|a, b| b.computed_value.total_cmp(&a.computed_value));

                let average_value =
                    items.iter().map(|item| item.value).sum::<f64>() / items.len().max(1) as f64;
                summaries.push(ObjectSummary {
                    id,
                    total_items: items.len(),
                    tagged_items: items.iter().filter(|i| !i.tags[0].is_empty()).count(),
                    high_priority: high_priority.len(),
                    average_value,
                });
            }

            let mut ranked: Vec<ScoredObject> = summaries
                .iter()
                .map(|s| ScoredObject {
                    id: s.id,
                    score: s.average_value * s.high_priority as f64,
                })
                .collect();
            ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
            (summaries, ranked)
        });
        let (summaries, ranked) = outcome;

        if summaries.len() != plan.objects {
            return Err(assertion(
                self.name(),
                format!("expected {} objects, built {}", plan.objects, summaries.len()),
            ));
        }
        if summaries
            .iter()
            .any(|s| s.total_items != plan.items_per_object || s.tagged_items != s.total_items)
        {
            return Err(assertion(self.name(), "object lost items during processing"));
        }
        if ranked.len() != summaries.len() || ranked.iter().any(|r| r.id >= plan.objects) {
            return Err(assertion(self.name(), "ranking lost or invented objects"));
        }
        if ranked.windows(2).any(|w| w[0].score < w[1].score) {
            return Err(assertion(self.name(), "ranking is not descending by score"));
        }

        let processed = (plan.objects * plan.items_per_object) as u64;
        Ok(BenchmarkRecord::new(self.name(), duration_ms(elapsed)).with_op_count(processed))
    }
}
