//! Best-effort CLI help snapshots.
//!
//! Each [`CaptureTarget`] names a binary inside the project tree whose help
//! output is embedded verbatim into the generated documentation. Capture is
//! fire-and-forget: whatever happens (missing binary, timeout, non-zero
//! exit), a snapshot file is written and the surrounding build proceeds. The
//! only error [`snapshot_help`] can return is an I/O failure writing the
//! snapshot file itself.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{error, info, warn};

use crate::contract::{CaptureOutcome, HelpCapturer, SnapshotReport};
use crate::layout::DocsLayout;

/// Hard bound on a single help invocation.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const DEFAULT_HELP_FLAG: &str = "--help";

/// One binary whose help text is snapshotted into the generated docs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureTarget {
    /// Logical name, used in snapshot placeholder/failure text.
    pub name: String,
    /// Binary path relative to the project root. Kept relative so the
    /// placeholder text names the path as the repository knows it.
    pub binary: PathBuf,
    /// The single flag passed to the binary.
    pub flag: String,
    /// File name written under `_generated`.
    pub output_file: String,
}

impl Default for CaptureTarget {
    /// The repo-local ubopt binary, preferred over PATH lookup.
    fn default() -> Self {
        Self {
            name: "ubopt".to_string(),
            binary: PathBuf::from("cmd/ubopt"),
            flag: DEFAULT_HELP_FLAG.to_string(),
            output_file: "ubopt_help.txt".to_string(),
        }
    }
}

/// Why a help invocation produced no usable stdout.
#[derive(Debug)]
pub enum CaptureError {
    Spawn(io::Error),
    TimedOut { limit: Duration },
    NonZeroExit { status: std::process::ExitStatus },
    InvalidUtf8(std::string::FromUtf8Error),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::Spawn(e) => write!(f, "failed to launch process: {e}"),
            CaptureError::TimedOut { limit } => {
                write!(f, "timed out after {}s", limit.as_secs_f64())
            }
            CaptureError::NonZeroExit { status } => {
                write!(f, "process exited with {status}")
            }
            CaptureError::InvalidUtf8(e) => {
                write!(f, "stdout was not valid UTF-8: {e}")
            }
        }
    }
}

impl std::error::Error for CaptureError {}

impl From<io::Error> for CaptureError {
    fn from(e: io::Error) -> Self {
        CaptureError::Spawn(e)
    }
}

impl From<std::string::FromUtf8Error> for CaptureError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        CaptureError::InvalidUtf8(e)
    }
}

/// Real capturer backed by `tokio::process`. The child is killed when the
/// timeout elapses.
#[derive(Debug, Default, Clone)]
pub struct ProcessCapturer;

impl ProcessCapturer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HelpCapturer for ProcessCapturer {
    async fn capture(
        &self,
        binary: &Path,
        flag: &str,
        limit: Duration,
    ) -> Result<String, CaptureError> {
        let mut command = Command::new(binary);
        command.arg(flag).kill_on_drop(true);

        let output = timeout(limit, command.output())
            .await
            .map_err(|_| CaptureError::TimedOut { limit })??;

        if !output.status.success() {
            return Err(CaptureError::NonZeroExit {
                status: output.status,
            });
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}

/// Captures one target's help text and writes the snapshot file.
///
/// Exactly one file is written per call, regardless of outcome:
/// - binary missing: `"<name> help unavailable (<path> not found)"`
/// - capture failure: `"<name> help capture failed: <description>"`
/// - success: the captured stdout, byte for byte.
pub async fn snapshot_help<C>(
    layout: &DocsLayout,
    target: &CaptureTarget,
    limit: Duration,
    capturer: &C,
) -> io::Result<SnapshotReport>
where
    C: HelpCapturer + ?Sized,
{
    let output_path = layout.generated_dir.join(&target.output_file);
    let binary = layout.project_root.join(&target.binary);

    if !binary.exists() {
        let text = format!(
            "{} help unavailable ({} not found)",
            target.name,
            target.binary.display()
        );
        fs::write(&output_path, &text)?;
        warn!(
            target = %target.name,
            binary = %binary.display(),
            path = %output_path.display(),
            "Help binary not found, wrote placeholder snapshot"
        );
        return Ok(SnapshotReport {
            target_name: target.name.clone(),
            output_path,
            outcome: CaptureOutcome::BinaryMissing,
        });
    }

    match capturer.capture(&binary, &target.flag, limit).await {
        Ok(stdout) => {
            fs::write(&output_path, &stdout)?;
            info!(
                target = %target.name,
                bytes = stdout.len(),
                path = %output_path.display(),
                "Captured help snapshot"
            );
            Ok(SnapshotReport {
                target_name: target.name.clone(),
                output_path,
                outcome: CaptureOutcome::Captured {
                    bytes: stdout.len(),
                },
            })
        }
        Err(e) => {
            let text = format!("{} help capture failed: {}", target.name, e);
            fs::write(&output_path, &text)?;
            error!(
                target = %target.name,
                binary = %binary.display(),
                error = %e,
                path = %output_path.display(),
                "Help capture failed, wrote failure snapshot"
            );
            Ok(SnapshotReport {
                target_name: target.name.clone(),
                output_path,
                outcome: CaptureOutcome::Failed {
                    reason: e.to_string(),
                },
            })
        }
    }
}
