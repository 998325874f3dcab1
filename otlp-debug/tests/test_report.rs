mod common;

use common::{build_id, location, mapping, profile_with_mappings, request, single_profile};
use otlp_debug::analysis::{build_report, MAX_LOCATION_PREVIEWS};
use otlp_debug::decode::decode;
use otlp_debug_common::proto::{KeyValue, Profile};
use prost::Message;

fn report_for(bytes: &[u8]) -> String {
    build_report(&decode(bytes).expect("payload should decode"))
}

#[test]
fn test_empty_export_reports_summary_only() {
    let bytes = request(vec![]).encode_to_vec();
    assert_eq!(report_for(&bytes), "SUMMARY: Total mappings=0, Unsymbolized mappings=0\n");
}

#[test]
fn test_unsymbolized_mapping_with_resolved_filename() {
    let bytes = single_profile(Profile {
        string_table: vec![String::new(), "/usr/lib/libssl.so.3".into()],
        mapping_table: vec![mapping(1, false)],
        ..Default::default()
    });

    let report = report_for(&bytes);
    assert!(report.contains(
        "      Mapping 0: HasFunctions=false, HasFilenames=false, HasLineNumbers=false\n"
    ));
    assert!(report.contains(
        "        MemoryStart=0x7f0000000000, MemoryLimit=0x7f0000021000, Filename=/usr/lib/libssl.so.3\n"
    ));
    assert!(report.contains("        BuildID=none\n"));
    assert!(report.ends_with("SUMMARY: Total mappings=1, Unsymbolized mappings=1\n"));
}

#[test]
fn test_seven_locations_three_unsymbolized() {
    let lines_per_location = [1, 0, 2, 0, 1, 1, 0];
    let bytes = single_profile(Profile {
        location_table: lines_per_location
            .iter()
            .enumerate()
            .map(|(n, &lines)| location(0x1000 * (n as u64 + 1), lines))
            .collect(),
        ..Default::default()
    });

    let report = report_for(&bytes);
    let previews: Vec<&str> =
        report.lines().filter(|line| line.starts_with("        Location ")).collect();

    assert_eq!(previews.len(), MAX_LOCATION_PREVIEWS);
    assert_eq!(previews[0], "        Location 0: Address=0x1000, MappingIndex=0, Lines=1");
    assert_eq!(previews[4], "        Location 4: Address=0x5000, MappingIndex=0, Lines=1");
    assert!(report.contains("      Locations: 7\n"));
    assert!(report.contains("      Unsymbolized locations: 3/7\n"));
}

#[test]
fn test_truncated_payload_fails_to_decode() {
    let bytes = single_profile(Profile {
        string_table: vec!["a".into(), "b".into()],
        mapping_table: vec![mapping(0, true)],
        location_table: vec![location(0x10, 1)],
        ..Default::default()
    });

    for cut in [1, bytes.len() / 2, bytes.len() - 1] {
        assert!(decode(&bytes[..cut]).is_err(), "truncation at {cut} should fail");
    }
}

#[test]
fn test_report_is_deterministic() {
    let bytes = single_profile(Profile {
        string_table: vec![String::new(), "app".into()],
        attribute_table: vec![build_id("deadbeef")],
        mapping_table: vec![{
            let mut m = mapping(1, true);
            m.attribute_indices = vec![0];
            m
        }],
        location_table: (0..9).map(|n| location(0x400 + n, (n % 3) as usize)).collect(),
    });

    let first = report_for(&bytes);
    for _ in 0..5 {
        assert_eq!(report_for(&bytes), first);
    }
}

#[test]
fn test_out_of_range_indices_do_not_truncate_report() {
    let mut broken = mapping(99, true);
    broken.attribute_indices = vec![42, -7];
    let mut valid = mapping(1, false);
    valid.attribute_indices = vec![5, 0];

    let bytes = single_profile(Profile {
        string_table: vec![String::new(), "libc.so.6".into()],
        attribute_table: vec![build_id("c0ffee")],
        mapping_table: vec![broken, valid],
        location_table: vec![location(0x1, 0)],
    });

    let report = report_for(&bytes);
    assert!(report.contains("Filename=unknown\n        BuildID=none\n"));
    assert!(report.contains("Filename=libc.so.6\n        BuildID=c0ffee\n"));
    assert!(report.contains("Unsymbolized locations: 1/1\n"));
    assert!(report.ends_with("SUMMARY: Total mappings=2, Unsymbolized mappings=1\n"));
}

#[test]
fn test_duplicate_build_id_last_index_wins() {
    let mut m = mapping(0, true);
    m.attribute_indices = vec![1, 2, 0];

    let bytes = single_profile(Profile {
        string_table: vec!["bin".into()],
        attribute_table: vec![
            build_id("aaaa"),
            KeyValue::string("process.executable.name", "bin"),
            build_id("bbbb"),
        ],
        mapping_table: vec![m],
        ..Default::default()
    });

    assert!(report_for(&bytes).contains("BuildID=aaaa\n"));
}

#[test]
fn test_mapping_totals_span_all_resources_and_scopes() {
    // 3 + 2 + 4 mappings, odd positions unsymbolized: 1 + 1 + 2
    let bytes = request(vec![
        vec![vec![profile_with_mappings(3)], vec![profile_with_mappings(2)]],
        vec![vec![profile_with_mappings(4)]],
    ])
    .encode_to_vec();

    let report = report_for(&bytes);
    assert!(report.contains("ResourceProfile 1:\n  ScopeProfile 0:\n    Profile 0:\n"));
    assert!(report.ends_with("SUMMARY: Total mappings=9, Unsymbolized mappings=4\n"));
    assert_eq!(report.matches("SUMMARY:").count(), 1);
}

#[test]
fn test_hierarchy_order_is_preserved() {
    let bytes = request(vec![vec![vec![Profile::default(), Profile::default()]]]).encode_to_vec();

    let expected = "\
ResourceProfile 0:
  ScopeProfile 0:
    Profile 0:
      Locations: 0
      Unsymbolized locations: 0/0
    Profile 1:
      Locations: 0
      Unsymbolized locations: 0/0
SUMMARY: Total mappings=0, Unsymbolized mappings=0
";
    assert_eq!(report_for(&bytes), expected);
}
