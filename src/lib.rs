//! Core library for `flatsort`.
//!
//! Scans one or more source directory trees and relocates every regular file
//! into a flat bucketed target layout (`target/<first char>/<name>`), with
//! collision-free naming, copy verification, optional post-processing of each
//! moved file, and optional timestamp normalization.
//! Keep the library small and ergonomic: an immutable `RunConfig`, one engine
//! entry point, and focused `fs_ops` submodules.

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod shutdown;

pub use config::{LogLevel, RunConfig};
pub use engine::{RunSummary, run};
pub use errors::SortError;
