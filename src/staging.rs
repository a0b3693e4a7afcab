//! Staging of extracted artifacts into the per-platform dependency folder
//!
//! After extraction the working directory holds the static library under its
//! shipped name. Staging moves it into `<deps>/<os>_<arch>/` and drops a
//! marker source file there so the folder builds as its own package.

use std::fs;
use std::path::PathBuf;

use log::{info, warn};

use crate::config::SetupConfig;
use crate::download::{Target, ensure_dir};
use crate::error::{Result, SetupError};

/// Paths produced by a successful staging pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedArtifacts {
    pub deps_dir: PathBuf,
    pub marker: PathBuf,
    pub library: PathBuf,
    /// Header at its extracted location, if the archive shipped one
    pub header: Option<PathBuf>,
}

/// Contents of the marker file: a package clause named after the target
pub fn marker_contents(target: &Target) -> String {
    format!("package {}", target.dir_name())
}

/// Move the extracted library into the dependency folder for `target`.
///
/// Creating the folder is idempotent and the marker is rewritten on every run.
pub fn stage_library(config: &SetupConfig, target: &Target) -> Result<StagedArtifacts> {
    let work_dir = &config.work_dir;
    let deps_dir = work_dir.join(&config.deps_dir).join(target.dir_name());
    ensure_dir(&deps_dir)?;

    let marker = deps_dir.join(&config.marker_file);
    fs::write(&marker, marker_contents(target))
        .map_err(|e| SetupError::io("write marker file", &marker, e))?;

    let source = work_dir.join(&config.library_source);
    let library = deps_dir.join(&config.library_dest);
    fs::rename(&source, &library).map_err(|e| SetupError::io("move static library", &source, e))?;
    info!("Staged {} -> {}", source.display(), library.display());

    // The header is consumed where extraction left it
    let header = work_dir.join(&config.header);
    let header = if header.is_file() {
        Some(header)
    } else {
        warn!("Header {} not found after extraction", header.display());
        None
    };

    Ok(StagedArtifacts {
        deps_dir,
        marker,
        library,
        header,
    })
}
