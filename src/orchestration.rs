//! The setup pipeline: resolve -> download -> extract -> stage

use log::{info, warn};

use crate::config::SetupConfig;
use crate::download::{self, Target};
use crate::error::Result;
use crate::staging::{self, StagedArtifacts};

/// Run a full setup for `target`.
///
/// Stops at the first failure. Nothing under the dependency root is touched
/// unless download and extraction both succeeded.
pub fn run(config: &SetupConfig, target: &Target) -> Result<StagedArtifacts> {
    info!("Target platform: {}", target);
    let tag = target.platform_tag()?;

    let url = config.archive_url(tag);
    info!("Downloading from {}...", url);
    let archive = download::fetch_archive(&url)?;

    info!("Download complete, extracting zip file.");
    let extracted = download::extract_archive(archive.path(), &config.work_dir)?;
    info!(
        "Extracted {} files into {}",
        extracted.len(),
        config.work_dir.display()
    );

    let archive_path = archive.path().to_path_buf();
    if let Err(e) = archive.close() {
        warn!("Could not remove {}: {}", archive_path.display(), e);
    }

    info!("Extraction done, finalizing dependencies.");
    let staged = staging::stage_library(config, target)?;

    info!("Setup completed: {}", staged.deps_dir.display());
    Ok(staged)
}
