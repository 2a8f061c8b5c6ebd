//! # contract: interfaces between the snapshot pipeline and its process backend
//!
//! This module defines the [`HelpCapturer`] trait plus the outcome and report
//! types the pipeline aggregates. The trait is the seam between orchestration
//! and the actual child-process invocation, so tests can substitute a
//! deterministic implementation for the real one.
//!
//! ## Mocking & Testing
//! - The trait is annotated for `mockall` so consumers can generate
//!   deterministic mocks for unit/integration tests (gated behind the
//!   `test-export-mocks` feature, as with the rest of the crate's seams).

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;

use crate::capture::CaptureError;

/// What ended up in a snapshot file after one capture attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// The binary responded in time; its stdout was written verbatim.
    Captured { bytes: usize },
    /// The binary path did not exist; the fixed placeholder was written.
    BinaryMissing,
    /// Invocation failed (spawn error, timeout, non-zero exit, bad output);
    /// the failure text was written.
    Failed { reason: String },
}

/// Per-target record of a snapshot run: which file was written and why.
#[derive(Debug, Clone)]
pub struct SnapshotReport {
    pub target_name: String,
    pub output_path: PathBuf,
    pub outcome: CaptureOutcome,
}

/// Trait for capturing a binary's help text.
///
/// The implementor invokes `binary` with the single `flag`, bounded by
/// `limit`, and returns captured stdout. All failure modes are reported as
/// [`CaptureError`]; the caller decides what to write in their place.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait HelpCapturer: Send + Sync {
    async fn capture(
        &self,
        binary: &Path,
        flag: &str,
        limit: Duration,
    ) -> Result<String, CaptureError>;
}
