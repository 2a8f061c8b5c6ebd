use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Filesystem layout of a documentation build, derived from the project root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsLayout {
    pub project_root: PathBuf,
    pub docs_dir: PathBuf,
    pub generated_dir: PathBuf,
}

impl DocsLayout {
    /// Derives the docs tree from a project root. All paths are joined from
    /// the root; nothing is read from the environment here.
    pub fn resolve<P: AsRef<Path>>(project_root: P) -> Self {
        let project_root = project_root.as_ref().to_path_buf();
        let docs_dir = project_root.join("docs");
        let generated_dir = docs_dir.join("_generated");
        let layout = Self {
            project_root,
            docs_dir,
            generated_dir,
        };
        debug!(?layout, "Resolved docs layout");
        layout
    }

    /// Creates the `_generated` directory, parents included. Idempotent.
    pub fn ensure_generated_dir(&self) -> io::Result<()> {
        if self.generated_dir.exists() {
            return Ok(());
        }
        fs::create_dir_all(&self.generated_dir)?;
        info!(
            path = %self.generated_dir.display(),
            "Created generated output directory"
        );
        Ok(())
    }

    pub fn trace_loaded(&self) {
        info!(
            project_root = %self.project_root.display(),
            generated_dir = %self.generated_dir.display(),
            "Loaded DocsLayout"
        );
        debug!(?self, "DocsLayout loaded (full debug)");
    }
}
