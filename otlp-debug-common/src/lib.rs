//! # Shared Wire Schema (Exporter ↔ Analyzer)
//!
//! Defines the OTLP profiles export messages and the constants shared between
//! the analyzer (`otlp-debug`) and the tools that produce payloads for it
//! (`xtask`, integration tests). The message structs carry `prost` field tags
//! matching `opentelemetry/proto/collector/profiles/v1development`.
//!
//! ## Key Types
//!
//! - [`proto::ExportProfilesServiceRequest`] - Root of every `POST /v1/profiles` body
//! - [`proto::Profile`] - One profile with its dictionary tables
//! - [`proto::Mapping`] / [`proto::Location`] - Table rows referenced by index

pub mod proto;

// ============================================================================
// Semantic Conventions
// ============================================================================

/// Attribute key carrying the GNU build id of an executable image.
///
/// Attached to mappings through `Mapping.attribute_indices`.
pub const BUILD_ID_GNU_KEY: &str = "process.executable.build_id.gnu";

// ============================================================================
// Transport Constants
// ============================================================================

/// Port the debug endpoint listens on by default
pub const DEFAULT_PORT: u16 = 4040;

/// OTLP/HTTP path for profile exports
pub const PROFILES_PATH: &str = "/v1/profiles";

/// Liveness probe path
pub const HEALTH_PATH: &str = "/health";

/// Content type used by OTLP/HTTP binary protobuf exporters
pub const PROTOBUF_CONTENT_TYPE: &str = "application/x-protobuf";
