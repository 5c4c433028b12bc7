// Copyright 2026 Benchlab Contributors
// SPDX-License-Identifier: Apache-2.0

//! Core data model for Benchlab.
//!
//! This crate defines the types shared between the benchmark harness and
//! its consumers: the per-case [`BenchmarkRecord`], the ordered
//! [`ResultSet`] produced by one suite run, the positional comparison of
//! two result sets, and CI-runner detection for run metadata.
//!
//! The harness behavior itself (workloads, cases, suite runner) lives in
//! `benchlab-harness`; this crate stays free of timing and I/O concerns so
//! that any consumer of persisted results can depend on it alone.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod compare;
pub mod error;
pub mod record;
pub mod runner;

pub use compare::{compare, render_comparison, ComparisonRow, FasterSide};
pub use error::{Error, Result};
pub use record::{BenchmarkRecord, ResultSet, RunMetadata};
pub use runner::{detect_runner, detect_runner_with, RunnerLabel};
