//! DuckDB release download and archive extraction
//!
//! ## Module Organization
//!
//! - `platform` - (OS, arch) to DuckDB platform tag lookup
//! - `fetch` - HTTP GET of the release asset into a temp file
//! - `extract` - Zip extraction into the working directory

mod fetch;
mod extract;
mod platform;

pub use fetch::fetch_archive;
pub use extract::extract_archive;
pub(crate) use extract::ensure_dir;
pub use platform::{Target, host_arch, host_os, resolve, supported};
