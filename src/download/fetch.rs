//! Archive download into a temporary file

use std::io;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use tempfile::NamedTempFile;

use crate::error::{Result, SetupError};

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Download `url` into a fresh `duckdb-static-lib-*.zip` temp file.
///
/// The returned file is deleted when dropped. Transport failures surface as
/// [`SetupError::Network`], non-success statuses as [`SetupError::HttpStatus`].
pub fn fetch_archive(url: &str) -> Result<NamedTempFile> {
    let network = |source: reqwest::Error| SetupError::Network {
        url: url.to_string(),
        source,
    };

    // No overall timeout: a slow mirror is allowed to finish
    let client = reqwest::blocking::Client::builder()
        .user_agent(APP_USER_AGENT)
        .timeout(None::<Duration>)
        .build()
        .map_err(network)?;

    let mut response = client.get(url).send().map_err(network)?;

    let status = response.status();
    if !status.is_success() {
        return Err(SetupError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }

    let mut archive = tempfile::Builder::new()
        .prefix("duckdb-static-lib-")
        .suffix(".zip")
        .tempfile()
        .map_err(|e| SetupError::io("create temporary file in", std::env::temp_dir(), e))?;

    let progress = progress_bar(response.content_length());
    let copied = io::copy(&mut response, &mut progress.wrap_write(archive.as_file_mut()));
    progress.finish_and_clear();

    let bytes = copied.map_err(|e| SetupError::io("write download to", archive.path(), e))?;
    info!("Downloaded {} bytes to {}", bytes, archive.path().display());

    Ok(archive)
}

/// Byte progress on stderr; indicatif hides it when stderr is not a terminal
fn progress_bar(total: Option<u64>) -> ProgressBar {
    let (bar, template) = match total {
        Some(len) => (
            ProgressBar::new(len),
            "[{bar:40.green/blue}] {bytes}/{total_bytes} ({eta})",
        ),
        None => (ProgressBar::new_spinner(), "{spinner:.green} {bytes} downloaded"),
    };
    if let Ok(style) = ProgressStyle::with_template(template) {
        bar.set_style(style.progress_chars("█▓░"));
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    #[test]
    fn connection_refused_is_network_error() {
        // Bind then drop to get a port nothing listens on
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let url = format!("http://127.0.0.1:{port}/v1.2.0/static-lib-linux-amd64.zip");

        let err = fetch_archive(&url).unwrap_err();
        match err {
            SetupError::Network { url: failed, .. } => assert_eq!(failed, url),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn progress_bar_handles_unknown_length() {
        let bar = progress_bar(None);
        assert_eq!(bar.length(), None);
        let bar = progress_bar(Some(10));
        assert_eq!(bar.length(), Some(10));
    }
}
