//! CLI interface for ubopt-docs: command parsing, argument validation, and
//! orchestration glue.
//!
//! All pipeline logic (layout, capture, context) lives in the
//! `ubopt-docs-core` crate. This module is strictly CLI glue: argument
//! exposure, config resolution, and invoking the pipeline.
//!
//! The async entrypoint [`run`] is public so integration tests can invoke
//! the CLI programmatically with a constructed [`Cli`].

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use ubopt_docs_core::capture::ProcessCapturer;
use ubopt_docs_core::generate::{generate, GenerateConfig};

use crate::load_config::load_config;

/// CLI for ubopt-docs: prepare generated artifacts for the docs build.
#[derive(Parser)]
#[clap(
    name = "ubopt-docs",
    version,
    about = "Capture ubopt CLI help snapshots and write the doc generator context"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Snapshot help output and write the generator context file
    Build {
        /// Path to the YAML config file; defaults apply when omitted
        #[clap(long)]
        config: Option<PathBuf>,
        /// Project root the docs tree and binaries are resolved against
        #[clap(long)]
        project_root: Option<PathBuf>,
    },
}

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Build {
            config,
            project_root,
        } => {
            let mut gen_config = match config {
                Some(path) => load_config(path)?,
                None => GenerateConfig::default(),
            };
            if let Some(root) = project_root {
                gen_config.project_root = root;
            }
            tracing::info!(
                command = "build",
                project_root = %gen_config.project_root.display(),
                targets = gen_config.targets.len(),
                "Starting documentation build preparation"
            );

            let capturer = ProcessCapturer::new();
            let report = generate(&gen_config, &capturer)
                .await
                .context("Documentation build preparation failed")?;

            tracing::info!(command = "build", ?report, "Build preparation complete");
            Ok(())
        }
    }
}
