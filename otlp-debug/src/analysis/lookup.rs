//! Bounds-checked dictionary lookups.
//!
//! Table indices arrive straight from the wire and are not guaranteed to be in
//! range (negative values included). Every lookup returns `None` instead of
//! indexing blindly; callers decide which sentinel to show.

use crate::domain::{Attribute, Mapping, ProfileDictionary};
use otlp_debug_common::BUILD_ID_GNU_KEY;

/// Position of `index` in a table of `len` rows, if it exists
fn table_position(index: i32, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&pos| pos < len)
}

/// Look up a string table entry.
#[must_use]
pub fn resolve_string(dict: &ProfileDictionary, index: i32) -> Option<&str> {
    table_position(index, dict.strings.len()).map(|pos| dict.strings[pos].as_str())
}

/// Look up an attribute table entry.
#[must_use]
pub fn resolve_attribute(dict: &ProfileDictionary, index: i32) -> Option<&Attribute> {
    table_position(index, dict.attributes.len()).map(|pos| &dict.attributes[pos])
}

/// GNU build id attached to a mapping.
///
/// Scans `attribute_indices` in order, skipping out-of-range entries. When the
/// key appears more than once the last occurrence wins. A matching attribute
/// whose value is not text yields `Some("")`.
#[must_use]
pub fn resolve_build_id<'a>(dict: &'a ProfileDictionary, mapping: &Mapping) -> Option<&'a str> {
    mapping
        .attribute_indices
        .iter()
        .rev()
        .filter_map(|&index| resolve_attribute(dict, index))
        .find(|attr| attr.key == BUILD_ID_GNU_KEY)
        .map(|attr| attr.value.as_str().unwrap_or_default())
}
