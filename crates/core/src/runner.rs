// Copyright 2026 Benchlab Contributors
// SPDX-License-Identifier: Apache-2.0

//! CI runner detection.
//!
//! Maps environment-variable presence to a [`RunnerLabel`]. The label only
//! decorates run metadata; no harness behavior depends on it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The CI system a suite run executed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunnerLabel {
    /// GitHub Actions.
    Github,
    /// Buildkite.
    Buildkite,
    /// CircleCI.
    CircleCi,
    /// GitLab CI.
    Gitlab,
    /// Travis CI.
    Travis,
    /// No recognized CI environment.
    Unknown,
}

impl RunnerLabel {
    /// Lowercase label string.
    pub fn as_str(&self) -> &'static str {
        match self {
            RunnerLabel::Github => "github",
            RunnerLabel::Buildkite => "buildkite",
            RunnerLabel::CircleCi => "circleci",
            RunnerLabel::Gitlab => "gitlab",
            RunnerLabel::Travis => "travis",
            RunnerLabel::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RunnerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Detect the CI runner from the process environment.
pub fn detect_runner() -> RunnerLabel {
    detect_runner_with(|key| std::env::var_os(key).is_some_and(|v| !v.is_empty()))
}

/// Detect the CI runner through an injected environment lookup.
///
/// GitHub Actions wins first and is recognized on its own flag; the
/// remaining systems are only recognized alongside the generic `CI` flag,
/// checked in order: Buildkite, CircleCI, GitLab, Travis.
pub fn detect_runner_with<F>(is_set: F) -> RunnerLabel
where
    F: Fn(&str) -> bool,
{
    if is_set("GITHUB_ACTIONS") {
        return RunnerLabel::Github;
    }
    if is_set("CI") {
        if is_set("BUILDKITE") {
            return RunnerLabel::Buildkite;
        }
        if is_set("CIRCLECI") {
            return RunnerLabel::CircleCi;
        }
        if is_set("GITLAB_CI") {
            return RunnerLabel::Gitlab;
        }
        if is_set("TRAVIS") {
            return RunnerLabel::Travis;
        }
    }
    RunnerLabel::Unknown
}
