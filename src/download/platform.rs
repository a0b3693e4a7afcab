//! Target platform resolution
//!
//! Maps a Go-style (OS, architecture) pair such as `("darwin", "arm64")` onto
//! the tag DuckDB uses in its static library asset names (`osx-arm64`).

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

use crate::error::{Result, SetupError};

/// OS -> architecture -> DuckDB platform tag (initialized once, never mutated)
static PLATFORMS: Lazy<HashMap<&'static str, HashMap<&'static str, &'static str>>> =
    Lazy::new(|| {
        HashMap::from([
            (
                "darwin",
                HashMap::from([("arm64", "osx-arm64"), ("amd64", "osx-amd64")]),
            ),
            (
                "linux",
                HashMap::from([("arm64", "linux-arm64"), ("amd64", "linux-amd64")]),
            ),
            ("windows", HashMap::from([("amd64", "windows-mingw")])),
        ])
    });

/// The OS/architecture pair a setup run targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub os: String,
    pub arch: String,
}

impl Target {
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// Look up the DuckDB platform tag for this target
    pub fn platform_tag(&self) -> Result<&'static str> {
        resolve(&self.os, &self.arch)
    }

    /// `<os>_<arch>`: name of the dependency folder and of its marker package
    pub fn dir_name(&self) -> String {
        format!("{}_{}", self.os, self.arch)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}

/// Resolve an (OS, architecture) pair to its platform tag.
///
/// Both identifiers are matched case-sensitively.
pub fn resolve(os: &str, arch: &str) -> Result<&'static str> {
    let arches = PLATFORMS
        .get(os)
        .ok_or_else(|| SetupError::UnsupportedPlatform { os: os.to_string() })?;

    arches
        .get(arch)
        .copied()
        .ok_or_else(|| SetupError::UnsupportedArchitecture {
            os: os.to_string(),
            arch: arch.to_string(),
        })
}

/// Every supported `(os, arch, tag)` triple, sorted by OS then architecture
pub fn supported() -> Vec<(&'static str, &'static str, &'static str)> {
    let mut all: Vec<_> = PLATFORMS
        .iter()
        .flat_map(|(os, arches)| arches.iter().map(move |(arch, tag)| (*os, *arch, *tag)))
        .collect();
    all.sort_unstable();
    all
}

/// Host OS using the names the platform table is keyed by
pub fn host_os() -> &'static str {
    go_os(std::env::consts::OS)
}

/// Host architecture using the names the platform table is keyed by
pub fn host_arch() -> &'static str {
    go_arch(std::env::consts::ARCH)
}

fn go_os(os: &'static str) -> &'static str {
    match os {
        "macos" => "darwin",
        other => other,
    }
}

fn go_arch(arch: &'static str) -> &'static str {
    match arch {
        "x86_64" => "amd64",
        "aarch64" => "arm64",
        "x86" => "386",
        "powerpc64" => "ppc64",
        other => other,
    }
}
