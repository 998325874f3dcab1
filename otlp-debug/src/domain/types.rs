//! Decoded profile export tree
//!
//! Every level exclusively owns its children, in source order. Most fields of
//! [`Mapping`] and [`Location`] are positions into the owning
//! [`ProfileDictionary`] tables rather than inline values; those positions are
//! kept exactly as received and are never trusted (see `analysis::lookup`).

/// Root of one decoded payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileExport {
    pub resource_profiles: Vec<ResourceProfile>,
}

/// Profiles collected from one resource (process, host, container).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceProfile {
    pub scope_profiles: Vec<ScopeProfile>,
}

/// Profiles produced by one instrumentation scope.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScopeProfile {
    pub profiles: Vec<Profile>,
}

/// A single profile. The dictionary is scoped to this profile only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    pub dictionary: ProfileDictionary,
}

/// Shared lookup tables of one profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileDictionary {
    /// String table, indexed by position
    pub strings: Vec<String>,

    /// Attribute table, indexed by position
    pub attributes: Vec<Attribute>,

    pub mappings: Vec<Mapping>,

    pub locations: Vec<Location>,
}

/// One row of the attribute table.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub key: String,
    pub value: AttributeValue,
}

/// Attribute value variants.
///
/// `Empty` stands for a key/value pair sent without a value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AttributeValue {
    #[default]
    Empty,
    String(String),
    Bool(bool),
    Int(i64),
    Double(f64),
    Bytes(Vec<u8>),
    Array(Vec<AttributeValue>),
    KeyValueList(Vec<Attribute>),
}

impl AttributeValue {
    /// Text alternative of the value, if it holds one
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

/// A loaded executable or library image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    pub memory_start: u64,
    pub memory_limit: u64,

    /// Index into `ProfileDictionary::strings`
    pub filename_string_index: i32,

    /// Indices into `ProfileDictionary::attributes`
    pub attribute_indices: Vec<i32>,

    pub has_functions: bool,
    pub has_filenames: bool,
    pub has_line_numbers: bool,
}

impl Mapping {
    /// A mapping without function information counts as unsymbolized
    #[must_use]
    pub fn is_symbolized(&self) -> bool {
        self.has_functions
    }
}

/// One sampled program point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub address: u64,

    /// Index into `ProfileDictionary::mappings`
    pub mapping_index: i32,

    /// Resolved source lines, innermost first. Empty when unsymbolized.
    pub lines: Vec<Line>,
}

impl Location {
    #[must_use]
    pub fn is_symbolized(&self) -> bool {
        !self.lines.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Line {
    pub function_index: i32,
    pub line: i64,
    pub column: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_value_as_str() {
        assert_eq!(AttributeValue::String("abc".into()).as_str(), Some("abc"));
        assert_eq!(AttributeValue::Int(7).as_str(), None);
        assert_eq!(AttributeValue::Empty.as_str(), None);
    }

    #[test]
    fn test_location_symbolization() {
        let mut location = Location { address: 0x1000, mapping_index: 0, lines: vec![] };
        assert!(!location.is_symbolized());

        location.lines.push(Line { function_index: 1, line: 42, column: 0 });
        assert!(location.is_symbolized());
    }

    #[test]
    fn test_mapping_symbolization_follows_has_functions() {
        let mapping = Mapping { has_filenames: true, has_line_numbers: true, ..Default::default() };
        assert!(!mapping.is_symbolized());
    }
}
