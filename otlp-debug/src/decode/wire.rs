//! Protobuf decode of `ExportProfilesServiceRequest`
//!
//! The wire structs from `otlp-debug-common` are converted into the domain
//! tree right after decoding. Table indices are copied verbatim; bounds are
//! only checked when the report resolves them.

use crate::domain::{
    Attribute, AttributeValue, DecodeError, Line, Location, Mapping, Profile, ProfileDictionary,
    ProfileExport, ResourceProfile, ScopeProfile,
};
use log::debug;
use otlp_debug_common::proto::{self, any_value};
use prost::Message;

/// Decode one serialized profiles export.
///
/// Unknown fields are skipped. An empty buffer is a valid, empty export.
///
/// # Errors
/// Returns [`DecodeError`] when the buffer is truncated, has malformed length
/// prefixes or invalid wire types, or carries non-UTF-8 strings.
pub fn decode(bytes: &[u8]) -> Result<ProfileExport, DecodeError> {
    let request = proto::ExportProfilesServiceRequest::decode(bytes)?;
    debug!(
        "Decoded {} bytes into {} resource profiles",
        bytes.len(),
        request.resource_profiles.len()
    );
    Ok(request.into())
}

impl From<proto::ExportProfilesServiceRequest> for ProfileExport {
    fn from(request: proto::ExportProfilesServiceRequest) -> Self {
        Self { resource_profiles: request.resource_profiles.into_iter().map(Into::into).collect() }
    }
}

impl From<proto::ResourceProfiles> for ResourceProfile {
    fn from(resource: proto::ResourceProfiles) -> Self {
        Self { scope_profiles: resource.scope_profiles.into_iter().map(Into::into).collect() }
    }
}

impl From<proto::ScopeProfiles> for ScopeProfile {
    fn from(scope: proto::ScopeProfiles) -> Self {
        Self { profiles: scope.profiles.into_iter().map(Into::into).collect() }
    }
}

impl From<proto::Profile> for Profile {
    fn from(profile: proto::Profile) -> Self {
        Self {
            dictionary: ProfileDictionary {
                strings: profile.string_table,
                attributes: profile.attribute_table.into_iter().map(Into::into).collect(),
                mappings: profile.mapping_table.into_iter().map(Into::into).collect(),
                locations: profile.location_table.into_iter().map(Into::into).collect(),
            },
        }
    }
}

impl From<proto::KeyValue> for Attribute {
    fn from(kv: proto::KeyValue) -> Self {
        Self { key: kv.key, value: kv.value.map(Into::into).unwrap_or_default() }
    }
}

impl From<proto::AnyValue> for AttributeValue {
    fn from(value: proto::AnyValue) -> Self {
        match value.value {
            None => Self::Empty,
            Some(any_value::Value::StringValue(s)) => Self::String(s),
            Some(any_value::Value::BoolValue(b)) => Self::Bool(b),
            Some(any_value::Value::IntValue(i)) => Self::Int(i),
            Some(any_value::Value::DoubleValue(d)) => Self::Double(d),
            Some(any_value::Value::BytesValue(b)) => Self::Bytes(b),
            Some(any_value::Value::ArrayValue(array)) => {
                Self::Array(array.values.into_iter().map(Into::into).collect())
            }
            Some(any_value::Value::KvlistValue(list)) => {
                Self::KeyValueList(list.values.into_iter().map(Into::into).collect())
            }
        }
    }
}

impl From<proto::Mapping> for Mapping {
    fn from(mapping: proto::Mapping) -> Self {
        Self {
            memory_start: mapping.memory_start,
            memory_limit: mapping.memory_limit,
            filename_string_index: mapping.filename_strindex,
            attribute_indices: mapping.attribute_indices,
            has_functions: mapping.has_functions,
            has_filenames: mapping.has_filenames,
            has_line_numbers: mapping.has_line_numbers,
        }
    }
}

impl From<proto::Location> for Location {
    fn from(location: proto::Location) -> Self {
        Self {
            address: location.address,
            mapping_index: location.mapping_index,
            lines: location.line.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<proto::Line> for Line {
    fn from(line: proto::Line) -> Self {
        Self { function_index: line.function_index, line: line.line, column: line.column }
    }
}
