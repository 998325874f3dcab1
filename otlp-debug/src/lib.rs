//! # otlp-debug - OTLP Profiles Ingestion Debugger
//!
//! otlp-debug answers one question: why does profiling data arriving at an
//! OTLP ingestion endpoint show up incomplete or unsymbolized? It accepts the
//! same `ExportProfilesServiceRequest` payload a collector would, decodes it,
//! and prints a report of what the exporter actually sent.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────┐         ┌──────────────────────┐
//! │  OTLP exporter       │  POST   │  captured payload    │
//! │  (eBPF profiler ...) │         │  (--replay FILE)     │
//! └──────────┬───────────┘         └──────────┬───────────┘
//!            │ /v1/profiles                    │
//!            ▼                                 │
//! ┌──────────────────────┐                     │
//! │  server (axum)       │                     │
//! │  405 / 413 / gzip    │                     │
//! └──────────┬───────────┘                     │
//!            ▼                                 ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │  decode: protobuf → ProfileExport (owned, read-only)    │
//! └──────────────────────────┬──────────────────────────────┘
//!                            ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │  analysis: traverse, resolve table indices, aggregate   │
//! └──────────────────────────┬──────────────────────────────┘
//!                            ▼
//!                    ReportSink (stdout)
//! ```
//!
//! ## Module Structure
//!
//! - [`domain`]: Decoded tree (`ProfileExport` → ... → `ProfileDictionary`) and errors
//! - [`decode`]: Protobuf decode plus `Content-Encoding` handling
//! - [`analysis`]: Bounds-checked dictionary lookups and the report builder
//! - [`server`]: HTTP endpoints, report sinks, graceful shutdown
//! - [`cli`]: Command-line argument parsing and configuration
//!
//! ## Report Contents
//!
//! Per profile: every mapping with its `has_functions` / `has_filenames` /
//! `has_line_numbers` flags, address range, filename and GNU build id; the
//! location count with a preview of the first five locations; the number of
//! locations without line information. A final line totals mappings and
//! unsymbolized mappings across the whole export.
//!
//! ## Typical Usage
//!
//! ```bash
//! # Point an exporter at the debugger
//! RUST_LOG=info ./otlp-debug --listen 0.0.0.0:4040
//!
//! # Report on a captured payload
//! ./otlp-debug --replay capture.pb
//! ```

// Expose modules for testing
pub mod analysis;
pub mod cli;
pub mod decode;
pub mod domain;
pub mod server;
