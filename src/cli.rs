use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use duckdb_setup::download::{host_arch, host_os};
use duckdb_setup::{SetupConfig, Target};

/// Single-dash long flags existing build scripts pass (`-os linux`)
const GO_STYLE_FLAGS: [&str; 2] = ["-os", "-arch"];

/// Command-line arguments for duckdb-setup
#[derive(Parser, Debug)]
#[command(name = "duckdb-setup")]
#[command(version, about = "Download and stage the DuckDB static library for a platform")]
pub struct Args {
    /// Target OS name (darwin, linux, windows)
    #[arg(long, default_value_t = host_os().to_string())]
    pub os: String,

    /// Target architecture name (amd64, arm64)
    #[arg(long, default_value_t = host_arch().to_string())]
    pub arch: String,

    /// DuckDB release to fetch, without the leading `v`
    #[arg(long = "lib-version", value_name = "VERSION")]
    pub lib_version: Option<String>,

    /// Base URL of the release downloads
    #[arg(long, value_name = "URL")]
    pub release_base: Option<String>,

    /// Working directory to extract into (default: current directory)
    #[arg(long = "dir", short = 'C', value_name = "DIR")]
    pub work_dir: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Print the supported platforms and exit
    #[arg(long)]
    pub list_platforms: bool,
}

impl Args {
    /// Parse the process arguments, accepting Go-style `-os`/`-arch`
    pub fn from_env() -> Self {
        Self::parse_from(normalize_go_flags(std::env::args_os()))
    }

    pub fn target(&self) -> Target {
        Target::new(self.os.clone(), self.arch.clone())
    }

    /// Layer command-line overrides on top of a loaded config
    pub fn apply(&self, mut config: SetupConfig) -> SetupConfig {
        if let Some(version) = &self.lib_version {
            config.version = version.clone();
        }
        if let Some(base) = &self.release_base {
            config.release_base = base.clone();
        }
        if let Some(dir) = &self.work_dir {
            config.work_dir = dir.clone();
        }
        config
    }
}

/// Rewrite `-os`, `-arch`, `-os=x` and `-arch=x` into their `--` forms.
///
/// Everything after a bare `--` is left alone.
pub fn normalize_go_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(|arg| {
            if passthrough {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    passthrough = true;
                    arg
                }
                Some(s) if is_go_flag(s) => OsString::from(format!("-{s}")),
                _ => arg,
            }
        })
        .collect()
}

fn is_go_flag(arg: &str) -> bool {
    GO_STYLE_FLAGS.iter().any(|flag| {
        arg.strip_prefix(flag)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('='))
    })
}
