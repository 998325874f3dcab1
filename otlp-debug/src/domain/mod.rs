//! Domain model for otlp-debug
//!
//! This module contains the decoded profile tree and errors that provide:
//! - An owned, read-only view of one export (no wire types leak past the decoder)
//! - Structured error handling for the decode and ingestion paths

pub mod errors;
pub mod types;

// Re-export common types for convenience
pub use types::{
    Attribute, AttributeValue, Line, Location, Mapping, Profile, ProfileDictionary,
    ProfileExport, ResourceProfile, ScopeProfile,
};

pub use errors::{DecodeError, IngestError, ServerError};
