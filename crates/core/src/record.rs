// Copyright 2026 Benchlab Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmark record types.
//!
//! A [`BenchmarkRecord`] captures one executed case; a [`ResultSet`] is the
//! ordered collection of records from one suite run, where insertion order
//! equals execution order. Records are immutable once created and owned
//! exclusively by the result set that produced them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::runner::{detect_runner, RunnerLabel};

/// A single measured benchmark case execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Case name, unique within one suite run.
    pub name: String,
    /// Wall-clock duration of the timed section, in milliseconds.
    pub duration_ms: f64,
    /// Operations completed inside the timed section, for cases that count
    /// them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub op_count: Option<u64>,
    /// When the record was produced.
    pub recorded_at: DateTime<Utc>,
}

impl BenchmarkRecord {
    /// Create a record stamped with the current time.
    pub fn new(name: impl Into<String>, duration_ms: f64) -> Self {
        Self {
            name: name.into(),
            duration_ms,
            op_count: None,
            recorded_at: Utc::now(),
        }
    }

    /// Attach an operation count.
    pub fn with_op_count(mut self, op_count: u64) -> Self {
        self.op_count = Some(op_count);
        self
    }
}

/// Ordered collection of records from one suite run.
///
/// Serializes as a plain JSON array, which is the persisted artifact shape
/// consumed by the comparator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    records: Vec<BenchmarkRecord>,
}

impl ResultSet {
    /// Create an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, preserving execution order.
    pub fn push(&mut self, record: BenchmarkRecord) {
        self.records.push(record);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `idx`, if present.
    pub fn get(&self, idx: usize) -> Option<&BenchmarkRecord> {
        self.records.get(idx)
    }

    /// Iterate records in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, BenchmarkRecord> {
        self.records.iter()
    }

    /// Records as a slice.
    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }
}

impl From<Vec<BenchmarkRecord>> for ResultSet {
    fn from(records: Vec<BenchmarkRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<BenchmarkRecord> for ResultSet {
    fn from_iter<I: IntoIterator<Item = BenchmarkRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// Identity and environment metadata for one suite run.
///
/// Decorates logs and the run banner; never consulted for correctness and
/// not persisted inside the result-set artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetadata {
    /// Unique id for this suite run.
    pub run_id: Uuid,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// CI runner the suite executed under.
    pub runner: RunnerLabel,
}

impl RunMetadata {
    /// Capture metadata for a run starting now.
    pub fn capture() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            runner: detect_runner(),
        }
    }
}
