//! # otlp-debug - Main Entry Point
//!
//! Supports two operational modes:
//! - **Server** (default): accept OTLP/HTTP profile exports and print a report per request
//! - **Replay** (`--replay <FILE>`): report on a captured payload and exit

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use otlp_debug::analysis::build_report;
use otlp_debug::cli::Args;
use otlp_debug::decode::{decode_body, ContentEncoding};
use otlp_debug::server::{self, StdoutSink};
use otlp_debug_common::{HEALTH_PATH, PROFILES_PATH};
use std::path::Path;
use std::sync::Arc;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            EXIT_ERROR
        }
    });
}

/// Decode a captured payload and print its report
fn replay(path: &Path, gzip: bool, max_body_bytes: usize) -> Result<()> {
    let body =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let encoding = if gzip { ContentEncoding::Gzip } else { ContentEncoding::Identity };

    let export = decode_body(&body, encoding, max_body_bytes)
        .with_context(|| format!("Failed to decode {}", path.display()))?;
    info!("Replaying {} ({} bytes)", path.display(), body.len());

    print!("{}", build_report(&export));
    Ok(())
}

#[tokio::main]
async fn run() -> Result<()> {
    let args = Args::parse();

    if let Some(ref path) = args.replay {
        return replay(path, args.gzip, args.max_body_bytes);
    }

    let config = args.server_config();
    if !args.quiet {
        println!("otlp-debug v{}", env!("CARGO_PKG_VERSION"));
        println!("listen: {}", config.listen);
        println!("POST profiles to {PROFILES_PATH} for debugging");
        println!("Health check at {HEALTH_PATH}");
    }

    server::serve(config, Arc::new(StdoutSink)).await.context("Server failed")?;
    Ok(())
}
