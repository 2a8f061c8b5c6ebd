//! `load_config` module: loads and adapts a static YAML config into the
//! internal [`GenerateConfig`].
//!
//! This module is the only place where untrusted YAML is parsed and mapped
//! to the pipeline's strongly-typed structs. Every key is optional: absent
//! keys fall back to the fixed defaults, so an empty file (or no file at
//! all, see the CLI) behaves identically to a bare run.
//!
//! # Errors
//! All errors here use `anyhow::Error` for context-rich diagnostics and are
//! surfaced at the CLI boundary.

use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{error, info};
use ubopt_docs_core::capture::{CaptureTarget, DEFAULT_HELP_FLAG};
use ubopt_docs_core::generate::GenerateConfig;

#[derive(Debug, Deserialize)]
pub struct RawConfig {
    #[serde(default)]
    pub project_root: Option<PathBuf>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub targets: Vec<RawTarget>,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub html_theme: Option<String>,
}

/// YAML-side shape of one capture target. Only `name` and `binary` are
/// required; the flag and output file name have conventional defaults.
#[derive(Debug, Deserialize)]
pub struct RawTarget {
    pub name: String,
    pub binary: PathBuf,
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default)]
    pub output_file: Option<String>,
}

impl RawTarget {
    fn into_target(self) -> CaptureTarget {
        let flag = self.flag.unwrap_or_else(|| DEFAULT_HELP_FLAG.to_string());
        let output_file = self
            .output_file
            .unwrap_or_else(|| format!("{}_help.txt", self.name));
        CaptureTarget {
            name: self.name,
            binary: self.binary,
            flag,
            output_file,
        }
    }
}

/// Loads a static YAML config file and maps it onto [`GenerateConfig`],
/// filling every absent key with the fixed defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GenerateConfig> {
    let path_ref = path.as_ref();
    info!(config_path = ?path_ref, "Loading configuration from file");

    let config_content = match fs::read_to_string(path_ref) {
        Ok(content) => {
            info!(config_path = ?path_ref, "Config file read successfully");
            content
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to read config file");
            return Err(anyhow::anyhow!(
                "Failed to read config file {:?}: {}",
                path_ref,
                e
            ));
        }
    };

    let raw: RawConfig = match serde_yaml::from_str(&config_content) {
        Ok(conf) => {
            info!(config_path = ?path_ref, "Parsed config YAML successfully");
            conf
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to parse config YAML");
            return Err(anyhow::anyhow!("Failed to parse config YAML: {e}"));
        }
    };

    let defaults = GenerateConfig::default();
    let targets = if raw.targets.is_empty() {
        defaults.targets
    } else {
        raw.targets.into_iter().map(RawTarget::into_target).collect()
    };

    Ok(GenerateConfig {
        project_root: raw.project_root.unwrap_or(defaults.project_root),
        targets,
        timeout: raw
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout),
        project: raw.project.unwrap_or(defaults.project),
        author: raw.author.unwrap_or(defaults.author),
        html_theme: raw.html_theme.unwrap_or(defaults.html_theme),
    })
}
