use anyhow::{Context, Result};
use clap::Parser;
use flate2::write::GzEncoder;
use flate2::Compression;
use otlp_debug_common::proto::{
    ExportProfilesServiceRequest, InstrumentationScope, KeyValue, Line, Location, Mapping, Profile,
    Resource, ResourceProfiles, ScopeProfiles,
};
use otlp_debug_common::{BUILD_ID_GNU_KEY, DEFAULT_PORT, PROFILES_PATH};
use prost::Message;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Parser)]
enum Cmd {
    /// Write a sample profiles export for exercising the debug server
    SamplePayload {
        #[arg(long, default_value = "sample-profiles.pb")]
        out: PathBuf,
        #[arg(long)]
        gzip: bool,
        #[arg(long, default_value_t = 12)]
        locations: u64,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Cmd::SamplePayload { out, gzip, locations } => sample_payload(&out, gzip, locations)?,
    }

    Ok(())
}

fn sample_payload(out: &Path, gzip: bool, locations: u64) -> Result<()> {
    let mut bytes = sample_request(locations).encode_to_vec();
    if gzip {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&bytes).context("Failed to compress payload")?;
        bytes = encoder.finish().context("Failed to compress payload")?;
    }

    std::fs::write(out, &bytes).with_context(|| format!("Failed to write {}", out.display()))?;

    println!("✓ Sample payload written");
    println!("  File: {} ({} bytes)", out.display(), bytes.len());
    let encoding = if gzip { " -H 'Content-Encoding: gzip'" } else { "" };
    println!(
        "  Try: curl --data-binary @{} -H 'Content-Type: application/x-protobuf'{encoding} \
         http://localhost:{DEFAULT_PORT}{PROFILES_PATH}",
        out.display()
    );

    Ok(())
}

/// One profile with a symbolized executable and an unsymbolized library.
/// Every third location carries no line information.
fn sample_request(locations: u64) -> ExportProfilesServiceRequest {
    let profile = Profile {
        string_table: vec![
            String::new(),
            "/usr/bin/sample-app".into(),
            "/usr/lib/libc.so.6".into(),
        ],
        attribute_table: vec![KeyValue::string(BUILD_ID_GNU_KEY, "4f2c9a1be07d3e58")],
        mapping_table: vec![
            Mapping {
                memory_start: 0x55d0_0000_0000,
                memory_limit: 0x55d0_0004_2000,
                filename_strindex: 1,
                attribute_indices: vec![0],
                has_functions: true,
                has_filenames: true,
                has_line_numbers: true,
                ..Default::default()
            },
            Mapping {
                memory_start: 0x7f3a_0000_0000,
                memory_limit: 0x7f3a_001d_8000,
                filename_strindex: 2,
                ..Default::default()
            },
        ],
        location_table: (0..locations)
            .map(|n| {
                let symbolized = n % 3 != 2;
                Location {
                    mapping_index: i32::from(!symbolized),
                    address: 0x1000 + n * 0x40,
                    line: if symbolized {
                        let line = 100 + i64::try_from(n).unwrap_or_default();
                        vec![Line { function_index: 0, line, column: 0 }]
                    } else {
                        Vec::new()
                    },
                    ..Default::default()
                }
            })
            .collect(),
    };

    ExportProfilesServiceRequest {
        resource_profiles: vec![ResourceProfiles {
            resource: Some(Resource {
                attributes: vec![KeyValue::string("service.name", "sample-app")],
                dropped_attributes_count: 0,
            }),
            scope_profiles: vec![ScopeProfiles {
                scope: Some(InstrumentationScope {
                    name: "xtask".into(),
                    version: env!("CARGO_PKG_VERSION").into(),
                    ..Default::default()
                }),
                profiles: vec![profile],
                schema_url: String::new(),
            }],
            schema_url: String::new(),
        }],
    }
}
