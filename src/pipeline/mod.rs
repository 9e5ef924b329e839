//! The action pipeline.
//!
//! A generator run is an ordered list of [`Action`]s executed one at a time
//! against a single [`Context`]. The runner awaits each action to completion
//! before starting the next, so the fetch action's `input` is visible to every
//! writer after it.
//!
//! The first failing action aborts the run. Nothing is rolled back: files
//! written by earlier actions stay on disk and the report says which actions
//! completed, which failed, and which never ran.
//!
//! [`Context`]: crate::context::Context

mod action;
mod report;
mod runner;


pub use action::Action;
pub use report::{PipelineReport, StepResult, StepStatus};
pub use runner::Pipeline;
