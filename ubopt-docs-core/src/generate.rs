//! High-level pipeline: layout → help snapshots → generator context.
//!
//! This module provides the top-level orchestration for one documentation
//! build preparation run. It implements a coordinated pipeline that:
//!   - Resolves the docs tree from the project root and creates `_generated`
//!   - Snapshots each configured capture target's help text (best effort)
//!   - Assembles the project info and writes the generator context file
//!   - Aggregates and returns a report of what was written and why.
//!
//! # Major Types
//! - [`GenerateConfig`]: bundles layout, targets, and metadata for a run
//! - [`GenerateReport`]: output report with per-target snapshot outcomes
//!
//! # Error Handling
//! Capture outcomes never fail the run: the doc build always proceeds with
//! whatever text ended up in each snapshot file. Only environment-level I/O
//! failures (creating the output directory, writing an artifact) return an
//! error; callers should log and surface these at the CLI boundary.
//!
//! # Callable From
//! - Used by both the CLI crate and integration tests
//! - Expects a concrete (async) [`HelpCapturer`] implementation

use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

use crate::capture::{snapshot_help, CaptureTarget, DEFAULT_TIMEOUT};
use crate::context::{DocsContext, ProjectInfo, DEFAULT_AUTHOR, DEFAULT_HTML_THEME, DEFAULT_PROJECT};
use crate::contract::{CaptureOutcome, HelpCapturer, SnapshotReport};
use crate::layout::DocsLayout;

/// The top-level configuration for one run.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub project_root: PathBuf,
    pub targets: Vec<CaptureTarget>,
    pub timeout: Duration,
    pub project: String,
    pub author: String,
    pub html_theme: String,
}

impl Default for GenerateConfig {
    /// A bare run against the current directory: one ubopt target, the
    /// fixed project metadata, ten-second capture bound.
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            targets: vec![CaptureTarget::default()],
            timeout: DEFAULT_TIMEOUT,
            project: DEFAULT_PROJECT.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            html_theme: DEFAULT_HTML_THEME.to_string(),
        }
    }
}

/// What one run produced.
#[derive(Debug)]
pub struct GenerateReport {
    pub snapshots: Vec<SnapshotReport>,
    pub context_path: PathBuf,
}

/// Entrypoint: prepare the generated artifacts according to config.
///
/// Targets run sequentially; a single blocking invocation is in flight at
/// any time.
pub async fn generate<C>(config: &GenerateConfig, capturer: &C) -> io::Result<GenerateReport>
where
    C: HelpCapturer + ?Sized,
{
    info!(
        project_root = %config.project_root.display(),
        targets = config.targets.len(),
        "Starting documentation build preparation"
    );

    let layout = DocsLayout::resolve(&config.project_root);
    layout.trace_loaded();
    layout.ensure_generated_dir()?;

    let mut snapshots: Vec<SnapshotReport> = Vec::new();
    for target in &config.targets {
        info!(target = %target.name, "Starting help snapshot for target");
        let report = snapshot_help(&layout, target, config.timeout, capturer).await?;
        match &report.outcome {
            CaptureOutcome::Captured { bytes } => {
                info!(target = %target.name, bytes, "Help snapshot captured");
            }
            CaptureOutcome::BinaryMissing => {
                warn!(target = %target.name, "Help snapshot fell back to placeholder");
            }
            CaptureOutcome::Failed { reason } => {
                warn!(
                    target = %target.name,
                    reason = %reason,
                    "Help snapshot recorded a capture failure"
                );
            }
        }
        snapshots.push(report);
    }

    let info = ProjectInfo::with_names(&config.project, &config.author);
    let mut context = DocsContext::new(info);
    context.html_theme = config.html_theme.clone();
    let context_path = context.write(&layout.generated_dir)?;

    info!(
        snapshots = snapshots.len(),
        context = %context_path.display(),
        "Documentation build preparation complete"
    );

    Ok(GenerateReport {
        snapshots,
        context_path,
    })
}
