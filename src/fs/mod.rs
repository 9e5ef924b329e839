//! Filesystem utilities.
//!
//! All writes are atomic (temp file + rename) so an interrupted run never
//! leaves a half-written source file or manifest behind.

pub mod atomic;
mod emit;

pub use atomic::{atomic_write, atomic_write_file};
pub use emit::{AppendOutcome, WriteOutcome, append_after_anchor, create_file};
