//! Shared fixtures: a one-shot HTTP server and zip builders

#![allow(dead_code)]

use std::io::{Cursor, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub const LIBRARY_BYTES: &[u8] = b"!<arch>\nduckdb static library payload\n";
pub const HEADER_BYTES: &[u8] = b"#pragma once\n/* duckdb.h */\n";

/// Serve exactly one response, reporting the requested path on the channel.
///
/// Returns the base URL (`http://127.0.0.1:<port>`).
pub fn serve_once(status: &'static str, body: Vec<u8>) -> (String, Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };

        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut chunk) {
                Ok(0) | Err(_) => return,
                Ok(n) => request.extend_from_slice(&chunk[..n]),
            }
        }

        let request = String::from_utf8_lossy(&request);
        let path = request
            .lines()
            .next()
            .and_then(|line| line.split_whitespace().nth(1))
            .unwrap_or_default()
            .to_string();
        let _ = tx.send(path);

        let head = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/zip\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        let _ = stream.write_all(head.as_bytes());
        let _ = stream.write_all(&body);
        let _ = stream.flush();
    });

    (base, rx)
}

/// Base URL of a port nothing is listening on
pub fn refused_base() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// A zip laid out like DuckDB's `static-lib-*.zip` release assets
pub fn release_archive() -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    zip.start_file("libduckdb_bundle.a", options).unwrap();
    zip.write_all(LIBRARY_BYTES).unwrap();
    zip.start_file("duckdb.h", options).unwrap();
    zip.write_all(HEADER_BYTES).unwrap();
    zip.add_directory("include/", options).unwrap();
    zip.start_file("include/duckdb/common/types.hpp", options).unwrap();
    zip.write_all(b"// types\n").unwrap();

    zip.finish().unwrap().into_inner()
}
