//! Project metadata and the generator context artifact.
//!
//! The external documentation toolchain reads one JSON file,
//! `_generated/conf.json`, holding the project information and the handful
//! of rendering fields (theme, title, source suffix). This module assembles
//! that file. The release string is the only value taken from the
//! environment; everything else is configuration with fixed defaults.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_PROJECT: &str = "Cool Llama – LinuxOptimizer (ubopt)";
pub const DEFAULT_AUTHOR: &str = "Cool Llama Project";
pub const DEFAULT_HTML_THEME: &str = "furo";

/// Environment variable carrying the release string for a docs build.
pub const VERSION_ENV: &str = "UBOPT_VERSION";
pub const DEFAULT_RELEASE: &str = "dev";

pub const CONTEXT_FILE: &str = "conf.json";

/// Project identification fields, as the doc generator expects them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub project: String,
    pub author: String,
    pub copyright: String,
    pub release: String,
    pub version: String,
}

impl ProjectInfo {
    /// Default project names; release from [`VERSION_ENV`] or `"dev"`.
    pub fn from_env() -> Self {
        Self::with_names(DEFAULT_PROJECT, DEFAULT_AUTHOR)
    }

    /// Custom project/author names; release still comes from the
    /// environment, copyright from the current UTC year.
    pub fn with_names(project: &str, author: &str) -> Self {
        let release =
            std::env::var(VERSION_ENV).unwrap_or_else(|_| DEFAULT_RELEASE.to_string());
        let copyright = format!("{}, {}", Utc::now().year(), author);
        let info = Self {
            project: project.to_string(),
            author: author.to_string(),
            copyright,
            version: release.clone(),
            release,
        };
        debug!(?info, "Assembled project info");
        info
    }
}

/// The full context the documentation toolchain loads: project info plus
/// rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsContext {
    pub project: String,
    pub author: String,
    pub copyright: String,
    pub release: String,
    pub version: String,
    pub source_suffix: String,
    pub master_doc: String,
    pub extensions: Vec<String>,
    pub html_theme: String,
    pub html_title: String,
    pub html_static_path: Vec<String>,
}

impl DocsContext {
    pub fn new(info: ProjectInfo) -> Self {
        let html_title = info.project.clone();
        Self {
            project: info.project,
            author: info.author,
            copyright: info.copyright,
            release: info.release,
            version: info.version,
            source_suffix: ".rst".to_string(),
            master_doc: "index".to_string(),
            extensions: Vec::new(),
            html_theme: DEFAULT_HTML_THEME.to_string(),
            html_title,
            html_static_path: Vec::new(),
        }
    }

    /// Serializes the context as pretty JSON into `generated_dir` and
    /// returns the written path.
    pub fn write(&self, generated_dir: &Path) -> io::Result<PathBuf> {
        let path = generated_dir.join(CONTEXT_FILE);
        let json = serde_json::to_string_pretty(self).map_err(io::Error::from)?;
        fs::write(&path, json)?;
        info!(
            path = %path.display(),
            release = %self.release,
            theme = %self.html_theme,
            "Wrote doc generator context"
        );
        Ok(path)
    }
}
