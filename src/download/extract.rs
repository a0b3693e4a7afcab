//! Zip extraction into the working directory
//!
//! Entries are written to their stored relative path under the destination.
//! Directory entries are skipped; parents are created on demand instead.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use zip::ZipArchive;

use crate::error::{Result, SetupError};

/// Extract every file entry of `archive_path` below `dest`.
///
/// Returns the paths written, in archive order. A failure on any entry aborts
/// the extraction; files written before it stay on disk.
pub fn extract_archive(archive_path: &Path, dest: &Path) -> Result<Vec<PathBuf>> {
    let archive_err = |source: zip::result::ZipError| SetupError::Archive {
        path: archive_path.to_path_buf(),
        source,
    };

    let file = File::open(archive_path)
        .map_err(|e| SetupError::io("open archive", archive_path, e))?;
    let mut archive = ZipArchive::new(file).map_err(archive_err)?;

    let mut written = Vec::with_capacity(archive.len());

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(archive_err)?;
        if entry.is_dir() {
            continue;
        }

        let relative = entry
            .enclosed_name()
            .ok_or_else(|| SetupError::UnsafeEntryPath {
                name: entry.name().to_string(),
            })?;

        // A bare file name has an empty parent; nothing to create then
        if let Some(parent) = relative.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_dir(&dest.join(parent))?;
        }

        let out_path = dest.join(&relative);
        let mut out = File::create(&out_path)
            .map_err(|e| SetupError::io("create", &out_path, e))?;
        let bytes = io::copy(&mut entry, &mut out)
            .map_err(|e| SetupError::io("extract", &out_path, e))?;

        debug!("Extracted {} ({} bytes)", out_path.display(), bytes);
        written.push(out_path);
    }

    Ok(written)
}

/// `mkdir -p` with 0755 permissions on unix
pub(crate) fn ensure_dir(path: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    builder
        .create(path)
        .map_err(|e| SetupError::io("create directory", path, e))
}
