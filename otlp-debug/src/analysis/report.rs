//! Symbolization report for a decoded profile export.
//!
//! Walks resources → scopes → profiles in source order and renders, per
//! profile, every mapping (flags, address range, filename, build id) followed by
//! a capped preview of its locations. A final summary line carries the mapping
//! totals accumulated across the entire export.
//!
//! # Output
//!
//! ```text
//! ResourceProfile 0:
//!   ScopeProfile 0:
//!     Profile 0:
//!       Mapping 0: HasFunctions=false, HasFilenames=false, HasLineNumbers=false
//!         MemoryStart=0x400000, MemoryLimit=0x4a1000, Filename=/usr/bin/app
//!         BuildID=3f1c0a9e
//!       Locations: 7
//!         Location 0: Address=0x401a2c, MappingIndex=0, Lines=0
//!         ...
//!       Unsymbolized locations: 3/7
//! SUMMARY: Total mappings=1, Unsymbolized mappings=1
//! ```
//!
//! Out-of-range table references never fail the report: a missing filename
//! renders as `unknown`, a missing build id as `none`.

use crate::analysis::lookup::{resolve_build_id, resolve_string};
use crate::domain::{Location, Mapping, ProfileDictionary, ProfileExport};
use std::fmt::{self, Write};

// =============================================================================
// CONSTANTS
// =============================================================================

/// Number of leading locations printed individually per profile.
///
/// Later locations still count towards the unsymbolized total.
pub const MAX_LOCATION_PREVIEWS: usize = 5;

const UNKNOWN_FILENAME: &str = "unknown";
const NO_BUILD_ID: &str = "none";

// =============================================================================
// ACCUMULATORS
// =============================================================================

/// Mapping counters for a whole export.
///
/// Threaded through the traversal and never reset between profiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MappingTotals {
    pub total: usize,
    pub unsymbolized: usize,
}

impl MappingTotals {
    pub fn record(&mut self, mapping: &Mapping) {
        self.total += 1;
        if !mapping.is_symbolized() {
            self.unsymbolized += 1;
        }
    }
}

/// Location counters for a single profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct LocationStats {
    total: usize,
    unsymbolized: usize,
}

impl LocationStats {
    fn record(&mut self, location: &Location) {
        self.total += 1;
        if !location.is_symbolized() {
            self.unsymbolized += 1;
        }
    }
}

// =============================================================================
// RENDERING
// =============================================================================

/// Render the report for `export` into a `String`.
#[must_use]
pub fn build_report(export: &ProfileExport) -> String {
    let mut out = String::new();
    // fmt::Write for String is infallible
    let _ = write_report(&mut out, export);
    out
}

/// Render the report for `export` into any formatter sink.
///
/// Returns the export-wide mapping totals printed on the summary line.
///
/// # Errors
/// Only propagates errors raised by `out` itself.
pub fn write_report<W: Write>(
    out: &mut W,
    export: &ProfileExport,
) -> Result<MappingTotals, fmt::Error> {
    let mut totals = MappingTotals::default();

    for (i, resource) in export.resource_profiles.iter().enumerate() {
        writeln!(out, "ResourceProfile {i}:")?;
        for (j, scope) in resource.scope_profiles.iter().enumerate() {
            writeln!(out, "  ScopeProfile {j}:")?;
            for (k, profile) in scope.profiles.iter().enumerate() {
                writeln!(out, "    Profile {k}:")?;
                write_profile(out, &profile.dictionary, &mut totals)?;
            }
        }
    }

    writeln!(
        out,
        "SUMMARY: Total mappings={}, Unsymbolized mappings={}",
        totals.total, totals.unsymbolized
    )?;
    Ok(totals)
}

fn write_profile<W: Write>(
    out: &mut W,
    dict: &ProfileDictionary,
    totals: &mut MappingTotals,
) -> fmt::Result {
    for (l, mapping) in dict.mappings.iter().enumerate() {
        write_mapping(out, l, mapping, dict)?;
        totals.record(mapping);
    }

    writeln!(out, "      Locations: {}", dict.locations.len())?;
    let mut stats = LocationStats::default();
    for (l, location) in dict.locations.iter().enumerate() {
        stats.record(location);
        if l < MAX_LOCATION_PREVIEWS {
            writeln!(
                out,
                "        Location {l}: Address=0x{:x}, MappingIndex={}, Lines={}",
                location.address,
                location.mapping_index,
                location.lines.len()
            )?;
        }
    }
    writeln!(out, "      Unsymbolized locations: {}/{}", stats.unsymbolized, stats.total)
}

fn write_mapping<W: Write>(
    out: &mut W,
    l: usize,
    mapping: &Mapping,
    dict: &ProfileDictionary,
) -> fmt::Result {
    let filename = resolve_string(dict, mapping.filename_string_index).unwrap_or(UNKNOWN_FILENAME);
    let build_id = resolve_build_id(dict, mapping).unwrap_or(NO_BUILD_ID);

    writeln!(
        out,
        "      Mapping {l}: HasFunctions={}, HasFilenames={}, HasLineNumbers={}",
        mapping.has_functions, mapping.has_filenames, mapping.has_line_numbers
    )?;
    writeln!(
        out,
        "        MemoryStart=0x{:x}, MemoryLimit=0x{:x}, Filename={filename}",
        mapping.memory_start, mapping.memory_limit
    )?;
    writeln!(out, "        BuildID={build_id}")
}
