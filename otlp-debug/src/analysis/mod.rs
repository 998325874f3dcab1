//! Analysis logic for decoded profile exports
//!
//! This module contains the traversal and aggregation over the decoded tree,
//! separated from the HTTP transport layer.

pub mod lookup;
pub mod report;

pub use lookup::{resolve_attribute, resolve_build_id, resolve_string};
pub use report::{build_report, write_report, MappingTotals, MAX_LOCATION_PREVIEWS};
