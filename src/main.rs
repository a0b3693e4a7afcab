mod cli;

use anyhow::{Context, Result};
use log::{error, info};

use duckdb_setup::{SetupConfig, download};

fn main() {
    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "[{} {} {}:{}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = real_main() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<()> {
    let args = cli::Args::from_env();

    if args.list_platforms {
        for (os, arch, tag) in download::supported() {
            println!("{os:<8} {arch:<6} {tag}");
        }
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => SetupConfig::load(path)?,
        None => SetupConfig::default(),
    };
    let config = args.apply(config);
    let target = args.target();

    let staged = duckdb_setup::run(&config, &target)
        .with_context(|| format!("setup for {target} failed"))?;

    info!("Static library ready at {}", staged.library.display());
    Ok(())
}
