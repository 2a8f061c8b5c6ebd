#![doc = "ubopt-docs-core: core logic library for the ubopt documentation build."]

//! This crate contains the pipeline that runs ahead of the documentation
//! toolchain: resolving the project layout, capturing CLI help snapshots from
//! the ubopt binary, and writing the build context the generator consumes.
//! The CLI wrapper lives in the `ubopt-docs` crate.
//!
//! # Usage
//! Add this as a dependency for all snapshot, context, layout, and pipeline
//! code.

pub mod capture;
pub mod context;
pub mod contract;
pub mod generate;
pub mod layout;
