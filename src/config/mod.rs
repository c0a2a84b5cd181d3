//! Run configuration.
//! Types plus validation; configuration is supplied per run by the driver
//! (CLI or an embedding front end) and never persisted.

pub mod types;
mod validate;

pub use types::{LogLevel, RunConfig};
