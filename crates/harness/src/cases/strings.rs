//! String manipulation and regex benchmark case.

use std::hint::black_box;

use regex::Regex;

use benchlab_core::BenchmarkRecord;

use crate::case::{assertion, duration_ms, measure, setup, BenchCase, CaseError, Strictness};

const BASE_SENTENCE: &str = "The quick brown fox jumps over the lazy dog. ";

// Case, replace, split/join, and match-scan operations per iteration.
const OPS_PER_ITERATION: u64 = 7;

/// Iteration plan for [`StringCase`].
#[derive(Debug, Clone)]
pub struct StringPlan {
    /// How many times the base sentence is repeated into the haystack.
    pub base_repeats: usize,
    /// Full passes over the haystack.
    pub iterations: u32,
}

impl Default for StringPlan {
    fn default() -> Self {
        Self {
            base_repeats: 1000,
            iterations: 50,
        }
    }
}

/// Runs case conversions, regex replacements, split/join, and a word-length
/// match scan over a large haystack.
#[derive(Debug, Default)]
pub struct StringCase {
    plan: StringPlan,
}

impl StringCase {
    /// Case with the canonical plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Case with a custom plan.
    pub fn with_plan(plan: StringPlan) -> Self {
        Self { plan }
    }
}

struct StringOutcome {
    ops: u64,
    last_match_count: usize,
    fox_survived: bool,
}

impl BenchCase for StringCase {
    fn name(&self) -> &'static str {
        "string"
    }

    fn run(&self, _strictness: Strictness) -> Result<BenchmarkRecord, CaseError> {
        let plan = &self.plan;
        let fox = Regex::new(r"fox").map_err(|e| setup(self.name(), e))?;
        let digits = Regex::new(r"\d+").map_err(|e| setup(self.name(), e))?;
        let long_words = Regex::new(r"\b\w{4,}\b").map_err(|e| setup(self.name(), e))?;
        let haystack = BASE_SENTENCE.repeat(plan.base_repeats);

        let (outcome, elapsed) = measure(|| {
            let mut ops = 0u64;
            let mut last_match_count = 0;
            let mut fox_survived = false;
            for _ in 0..plan.iterations {
                let lower = haystack.to_lowercase();
                let upper = haystack.to_uppercase();
                ops += 2;

                let without_fox = fox.replace_all(&haystack, "cat");
                let without_digits = digits.replace_all(&haystack, "NUMBER");
                ops += 2;
                fox_survived |= without_fox.contains("fox");

                let words: Vec<&str> = haystack.split(' ').collect();
                let joined = words.join("-");
                ops += 2;

                last_match_count = long_words.find_iter(&haystack).count();
                if last_match_count > 0 {
                    ops += 1;
                }

                black_box((lower, upper, without_digits, joined));
            }
            StringOutcome {
                ops,
                last_match_count,
                fox_survived,
            }
        });

        let expected = u64::from(plan.iterations) * OPS_PER_ITERATION;
        if outcome.ops != expected {
            return Err(assertion(
                self.name(),
                format!("expected {expected} operations, counted {}", outcome.ops),
            ));
        }
        if plan.iterations > 0 && outcome.last_match_count == 0 {
            return Err(assertion(self.name(), "word-length scan found no matches"));
        }
        if outcome.fox_survived {
            return Err(assertion(self.name(), "replacement left `fox` in the text"));
        }

        Ok(BenchmarkRecord::new(self.name(), duration_ms(elapsed)).with_op_count(outcome.ops))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_plan_counts_seven_ops_per_iteration() {
        let plan = StringPlan {
            base_repeats: 10,
            iterations: 4,
        };
        let record = StringCase::with_plan(plan).run(Strictness::Strict).unwrap();
        assert_eq!(record.op_count, Some(28));
    }

    #[test]
    fn test_zero_iterations_counts_nothing() {
        let plan = StringPlan {
            base_repeats: 10,
            iterations: 0,
        };
        let record = StringCase::with_plan(plan).run(Strictness::Advisory).unwrap();
        assert_eq!(record.op_count, Some(0));
    }
}
