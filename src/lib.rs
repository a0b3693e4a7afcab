//! Fetch DuckDB's prebuilt static library for a platform and stage it
//!
//! The pipeline resolves an (OS, arch) pair to DuckDB's platform tag,
//! downloads `static-lib-<tag>.zip` from the release page, extracts it into
//! the working directory, and moves `libduckdb_bundle.a` into
//! `deps/<os>_<arch>/libduckdb.a` next to a `vendor.go` marker.
//!
//! Library functions return [`SetupError`]; only the binary decides to exit.

pub mod config;
pub mod download;
pub mod error;
mod orchestration;
pub mod staging;

pub use config::SetupConfig;
pub use download::Target;
pub use error::{Result, SetupError};
pub use orchestration::run;
pub use staging::StagedArtifacts;
