//! Fixture builders shared by the integration tests

#![allow(dead_code)]

use otlp_debug_common::proto::{
    ExportProfilesServiceRequest, KeyValue, Line, Location, Mapping, Profile, ResourceProfiles,
    ScopeProfiles,
};
use otlp_debug_common::BUILD_ID_GNU_KEY;
use prost::Message;

pub fn request(resources: Vec<Vec<Vec<Profile>>>) -> ExportProfilesServiceRequest {
    ExportProfilesServiceRequest {
        resource_profiles: resources
            .into_iter()
            .map(|scopes| ResourceProfiles {
                scope_profiles: scopes
                    .into_iter()
                    .map(|profiles| ScopeProfiles { profiles, ..Default::default() })
                    .collect(),
                ..Default::default()
            })
            .collect(),
    }
}

/// One resource, one scope, one profile
pub fn single_profile(profile: Profile) -> Vec<u8> {
    request(vec![vec![vec![profile]]]).encode_to_vec()
}

pub fn mapping(filename_strindex: i32, has_functions: bool) -> Mapping {
    Mapping {
        memory_start: 0x7f00_0000_0000,
        memory_limit: 0x7f00_0002_1000,
        filename_strindex,
        has_functions,
        has_filenames: has_functions,
        has_line_numbers: has_functions,
        ..Default::default()
    }
}

pub fn location(address: u64, lines: usize) -> Location {
    Location {
        mapping_index: 0,
        address,
        line: vec![Line { function_index: 0, line: 10, column: 0 }; lines],
        ..Default::default()
    }
}

pub fn build_id(value: &str) -> KeyValue {
    KeyValue::string(BUILD_ID_GNU_KEY, value)
}

/// Profile with `count` mappings, every other one unsymbolized
pub fn profile_with_mappings(count: usize) -> Profile {
    Profile {
        string_table: vec![String::new(), "libfoo.so".into()],
        mapping_table: (0..count).map(|n| mapping(1, n % 2 == 0)).collect(),
        ..Default::default()
    }
}
