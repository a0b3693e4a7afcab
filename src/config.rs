use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, SetupError};

/// DuckDB release fetched when nothing else is configured.
pub const DEFAULT_VERSION: &str = "1.2.0";

/// Where DuckDB publishes its release assets.
pub const DEFAULT_RELEASE_BASE: &str = "https://github.com/duckdb/duckdb/releases/download";

/// Setup configuration (defaults mirror the upstream release layout).
///
/// Every field is optional in a TOML file; missing fields keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    /// DuckDB version, without the leading `v`
    pub version: String,
    /// Base URL; the asset URL is `<release_base>/v<version>/static-lib-<tag>.zip`
    pub release_base: String,
    /// Directory the archive is extracted into and `deps_dir` is relative to
    pub work_dir: PathBuf,
    /// Root of the per-platform dependency folders
    pub deps_dir: PathBuf,
    /// File written into each dependency folder
    pub marker_file: String,
    /// Static library name as shipped in the archive
    pub library_source: String,
    /// Static library name inside the dependency folder
    pub library_dest: String,
    /// Header shipped next to the library
    pub header: String,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            release_base: DEFAULT_RELEASE_BASE.to_string(),
            work_dir: PathBuf::from("."),
            deps_dir: PathBuf::from("deps"),
            marker_file: "vendor.go".to_string(),
            library_source: "libduckdb_bundle.a".to_string(),
            library_dest: "libduckdb.a".to_string(),
            header: "duckdb.h".to_string(),
        }
    }
}

impl SetupConfig {
    /// Load a config file, filling unspecified fields with defaults
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| SetupError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&raw).map_err(|reason| SetupError::Config {
            path: path.to_path_buf(),
            reason,
        })
    }

    fn from_toml(raw: &str) -> std::result::Result<Self, String> {
        toml::from_str(raw).map_err(|e| e.to_string())
    }

    /// Download URL of the static library archive for a platform tag
    pub fn archive_url(&self, platform_tag: &str) -> String {
        format!(
            "{}/v{}/static-lib-{}.zip",
            self.release_base.trim_end_matches('/'),
            self.version,
            platform_tag
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url_matches_release_layout() {
        let cfg = SetupConfig::default();
        assert_eq!(
            cfg.archive_url("osx-arm64"),
            "https://github.com/duckdb/duckdb/releases/download/v1.2.0/static-lib-osx-arm64.zip"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        let cfg = SetupConfig {
            release_base: "http://127.0.0.1:8080/".to_string(),
            version: "1.1.3".to_string(),
            ..SetupConfig::default()
        };
        assert_eq!(
            cfg.archive_url("linux-amd64"),
            "http://127.0.0.1:8080/v1.1.3/static-lib-linux-amd64.zip"
        );
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = SetupConfig::from_toml("version = \"1.1.0\"\ndeps_dir = \"third_party\"\n").unwrap();
        assert_eq!(cfg.version, "1.1.0");
        assert_eq!(cfg.deps_dir, PathBuf::from("third_party"));
        assert_eq!(cfg.marker_file, "vendor.go");
        assert_eq!(cfg.release_base, DEFAULT_RELEASE_BASE);
    }

    #[test]
    fn unknown_types_are_rejected() {
        assert!(SetupConfig::from_toml("version = 12").is_err());
    }

    #[test]
    fn load_reports_missing_file_as_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("setup.toml");
        let err = SetupConfig::load(&missing).unwrap_err();
        assert!(matches!(err, SetupError::Config { ref path, .. } if path == &missing));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("setup.toml");
        fs::write(&path, "release_base = \"http://mirror.local/duckdb\"\n").unwrap();
        let cfg = SetupConfig::load(&path).unwrap();
        assert_eq!(cfg.release_base, "http://mirror.local/duckdb");
        assert_eq!(cfg.version, DEFAULT_VERSION);
    }
}
