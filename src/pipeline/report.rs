//! Per-action results and the run report.

use crate::context::Context;
use crate::error::{Result, ScaffoldError};
use std::fmt;

/// Status of a single action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Skipped,
    Failed,
    NotRun,
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StepStatus::Done => "done",
            StepStatus::Skipped => "skipped",
            StepStatus::Failed => "failed",
            StepStatus::NotRun => "not run",
        };
        f.write_str(s)
    }
}

/// Result of a single action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    pub label: &'static str,
    pub status: StepStatus,
    pub message: String,
}

impl StepResult {
    pub fn done(label: &'static str, message: impl Into<String>) -> Self {
        Self {
            label,
            status: StepStatus::Done,
            message: message.into(),
        }
    }

    pub fn skipped(label: &'static str, message: impl Into<String>) -> Self {
        Self {
            label,
            status: StepStatus::Skipped,
            message: message.into(),
        }
    }

    pub fn failed(label: &'static str, message: impl Into<String>) -> Self {
        Self {
            label,
            status: StepStatus::Failed,
            message: message.into(),
        }
    }

    pub fn not_run(label: &'static str) -> Self {
        Self {
            label,
            status: StepStatus::NotRun,
            message: String::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, StepStatus::Done | StepStatus::Skipped)
    }
}

/// Outcome of a whole run.
#[derive(Debug)]
pub struct PipelineReport {
    /// One entry per declared action, in order.
    pub steps: Vec<StepResult>,
    /// The context as left by the last action that ran.
    pub context: Context,
    /// The error that aborted the run, if any.
    pub failure: Option<ScaffoldError>,
}

impl PipelineReport {
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    /// Status messages of the actions that completed, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.steps
            .iter()
            .filter(|s| s.is_success())
            .map(|s| s.message.as_str())
            .collect()
    }

    /// Convert into a `Result`, surfacing the abort error.
    pub fn into_result(mut self) -> Result<Self> {
        match self.failure.take() {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }
}
