//! CLI argument definitions

use crate::server::{ServerConfig, DEFAULT_MAX_BODY_BYTES};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "otlp-debug",
    version,
    about = "Inspect OTLP profile exports and report symbolization coverage",
    after_help = "\
EXAMPLES:
    otlp-debug                                   Listen on 0.0.0.0:4040
    otlp-debug --listen 127.0.0.1:9999           Custom address
    otlp-debug --replay capture.pb               Report on a captured payload
    otlp-debug --replay capture.pb.gz --gzip     Captured payload, gzip encoded

    curl --data-binary @capture.pb -H 'Content-Type: application/x-protobuf' \\
        http://localhost:4040/v1/profiles"
)]
pub struct Args {
    /// Address to accept OTLP/HTTP profile exports on
    #[arg(short, long, default_value = "0.0.0.0:4040", value_name = "ADDR")]
    pub listen: SocketAddr,

    /// Largest accepted request body in bytes (also bounds gzip inflation)
    #[arg(long, default_value_t = DEFAULT_MAX_BODY_BYTES, value_name = "BYTES")]
    pub max_body_bytes: usize,

    /// Return the report in the HTTP response body
    #[arg(long)]
    pub echo_report: bool,

    /// Decode a captured payload file, print its report and exit
    #[arg(long, value_name = "FILE", conflicts_with_all = ["listen", "echo_report"])]
    pub replay: Option<PathBuf>,

    /// Replay file is gzip encoded
    #[arg(long, requires = "replay")]
    pub gzip: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    #[must_use]
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            listen: self.listen,
            max_body_bytes: self.max_body_bytes,
            echo_report: self.echo_report,
        }
    }
}
