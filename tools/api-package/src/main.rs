//! Flow API package writer
//!
//! Stamps the `package.json` for the NestJS API app. The manifest content is
//! fixed; only the destination can be changed.
//!
//! # Usage
//!
//! ```bash
//! # Write to the default location in the Flow checkout
//! write-api-package
//!
//! # Write somewhere else
//! write-api-package --output ./apps/api/package.json
//! ```

mod error;
mod manifest;
mod writer;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Write the API app package.json
#[derive(Parser)]
#[command(name = "write-api-package")]
#[command(author, version)]
#[command(about = "Write the package.json manifest for the Flow API app")]
struct Args {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Destination file (the parent directory must already exist)
    #[arg(short, long, default_value = writer::DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Output path: {:?}", args.output);

    writer::write(&args.output).context("Failed to write API package manifest")?;

    Ok(())
}
