use std::fs;
use std::path::PathBuf;

use switchcfg_core::{parse, parse_partial, LagMode, ListError, ParseError};

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

fn read_fixture(path: &str) -> String {
    fs::read_to_string(fixture(path)).expect("fixture should be readable")
}

#[test]
fn parses_vlan_centric_fixture() {
    let model = parse(&read_fixture("fixtures/vlan-centric.cfg")).expect("parse should succeed");

    assert_eq!(model.hostname.as_deref(), Some("HP-2530-48G"));
    assert!(model.spanning_tree);
    assert_eq!(model.vlans.keys().copied().collect::<Vec<_>>(), vec![1, 10, 20, 30]);
    assert_eq!(model.vlans[&1].untagged, vec![21, 22]);
    assert_eq!(model.vlans[&10].untagged, vec![1, 2, 3, 4]);
    assert_eq!(model.vlans[&10].tagged, vec![23, 24, 47, 48]);

    assert!(!model.svis.contains_key(&1));
    assert_eq!(model.svis[&10].address, "10.0.10.1");
    assert_eq!(model.svis[&20].mask, "255.255.255.0");

    let groups = &model.link_aggregation_groups;
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].name, "Trk1");
    assert_eq!(groups[0].members, vec![47, 48]);
    assert_eq!(groups[0].mode, LagMode::Lacp);
    assert_eq!(groups[1].name, "Trk2");
    assert_eq!(groups[1].mode, LagMode::Static);
}

#[test]
fn parses_interface_centric_fixture() {
    let model =
        parse(&read_fixture("fixtures/interface-centric.cfg")).expect("parse should succeed");

    assert_eq!(model.interface_descriptions[&1], "Uplink core");
    assert_eq!(model.interface_descriptions[&3], "spare");
    assert!(model.link_aggregation_groups.is_empty());

    // Port 1 was tagged for VLAN 10 from both sides; it appears once.
    assert_eq!(model.vlans[&10].tagged, vec![1, 2]);
    assert_eq!(model.vlans[&20].tagged, vec![1, 2]);
    assert_eq!(model.vlans[&30].untagged, vec![4, 2]);
}

#[test]
fn both_syntax_variants_mix_in_one_input() {
    let model = parse(
        "interface 9\n   tagged vlan 40\n   exit\nvlan 40\n   tagged 8\n   untagged 7\n   exit\ntrunk 1-2 Trk1 lacp\n",
    )
    .expect("parse should succeed");

    assert_eq!(model.vlans[&40].tagged, vec![8, 9]);
    assert_eq!(model.vlans[&40].untagged, vec![7]);
    assert_eq!(model.link_aggregation_groups.len(), 1);
}

#[test]
fn malformed_range_stops_with_partial_model() {
    let (model, err) = parse_partial(&read_fixture("fixtures/malformed-range.cfg"));

    assert_eq!(model.hostname.as_deref(), Some("broken"));
    assert!(model.vlans.is_empty());
    assert_eq!(
        err,
        Some(ParseError::Number {
            line: 3,
            text: "untagged 3-1".to_string(),
            source: ListError::InvalidRange("3-1".to_string()),
        })
    );
}

#[test]
fn non_numeric_vlan_id_is_an_error() {
    let err = parse("vlan ten\n").expect_err("vlan id must be numeric");
    assert_eq!(err.line(), 1);
    assert!(err.to_string().contains("invalid number 'ten'"));
}

#[test]
fn bad_port_in_trunk_line_is_an_error() {
    let err = parse("trunk 1-x Trk1 lacp\n").expect_err("trunk ports must be numeric");
    assert!(matches!(err, ParseError::Number { line: 1, .. }));
}

#[test]
fn blank_lines_and_indentation_are_ignored() {
    let model = parse("\n\n   vlan 5   \n\n\t untagged 3 \n\n").expect("parse should succeed");
    assert_eq!(model.vlans[&5].untagged, vec![3]);
}
