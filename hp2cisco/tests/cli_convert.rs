use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

fn path_as_str(path: &Path) -> &str {
    path.to_str().expect("path should be valid utf-8")
}

fn hp2cisco() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("hp2cisco"))
}

#[test]
fn convert_writes_output_file_and_summary() {
    let dir = tempdir().expect("tempdir");
    let output_path = dir.path().join("switch.ios");

    hp2cisco()
        .arg("convert")
        .arg(fixture("fixtures/vlan-centric.cfg"))
        .arg("--output")
        .arg(path_as_str(&output_path))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "convert_summary vlans=4 svis=2 access_ports=8 trunk_ports=2 aggregates=2 aggregate_members=4",
        ));

    let converted = fs::read_to_string(&output_path).expect("converted file");
    let expected =
        fs::read_to_string(fixture("fixtures/vlan-centric.ios")).expect("expected output");
    assert_eq!(converted, expected);
}

#[test]
fn convert_prints_to_stdout_without_output() {
    let expected =
        fs::read_to_string(fixture("fixtures/interface-centric.ios")).expect("expected output");

    let assert = hp2cisco()
        .arg("convert")
        .arg(fixture("fixtures/interface-centric.cfg"))
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert_eq!(stdout, expected);
}

#[test]
fn convert_reads_stdin() {
    hp2cisco()
        .args(["convert", "-"])
        .write_stdin("vlan 10\n   untagged 1\n   exit\ntrunk 6-7 Trk1 lacp\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "interface FastEthernet0/1\n switchport mode access\n switchport access vlan 10\n",
        ))
        .stdout(predicate::str::contains(" channel-group 1 mode active"));
}

#[test]
fn convert_reports_malformed_range() {
    let dir = tempdir().expect("tempdir");
    let output_path = dir.path().join("switch.ios");

    hp2cisco()
        .arg("convert")
        .arg(fixture("fixtures/malformed-range.cfg"))
        .arg("--output")
        .arg(path_as_str(&output_path))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"))
        .stderr(predicate::str::contains("line 3"))
        .stderr(predicate::str::contains("invalid range '3-1'"));

    assert!(!output_path.exists());
}

#[test]
fn convert_rejects_output_overwriting_input() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("switch.cfg");
    fs::write(&input, "vlan 10\n untagged 1\n").expect("write input");

    hp2cisco()
        .arg("convert")
        .arg(&input)
        .arg("--output")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "refusing to overwrite source file",
        ));

    let unchanged = fs::read_to_string(&input).expect("input still readable");
    assert_eq!(unchanged, "vlan 10\n untagged 1\n");
}

#[test]
fn convert_rejects_output_overwriting_profile_file() {
    let dir = tempdir().expect("tempdir");
    let profile = dir.path().join("lab.toml");
    fs::write(&profile, "[render]\nport_prefix = \"Ethernet1/\"\n").expect("write profile");

    hp2cisco()
        .args(["convert", "-", "--profile-file", path_as_str(&profile), "--output"])
        .arg(&profile)
        .write_stdin("vlan 20\n untagged 2\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "refusing to overwrite source file",
        ));

    let unchanged = fs::read_to_string(&profile).expect("profile still readable");
    assert_eq!(unchanged, "[render]\nport_prefix = \"Ethernet1/\"\n");
}

#[test]
fn convert_without_vlans_is_nothing_to_convert() {
    hp2cisco()
        .arg("convert")
        .arg(fixture("fixtures/no-vlans.cfg"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to convert"))
        .stderr(predicate::str::contains("failed to parse").not());
}

#[test]
fn convert_allow_empty_writes_global_settings() {
    let assert = hp2cisco()
        .arg("convert")
        .arg(fixture("fixtures/no-vlans.cfg"))
        .arg("--allow-empty")
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: no VLAN data found"));
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert_eq!(stdout, "hostname blank\n\nspanning-tree mode mst\n");
}

#[test]
fn convert_uses_named_profile() {
    hp2cisco()
        .args(["convert", "-", "--profile", "ios-xe-stack"])
        .write_stdin("vlan 20\n tagged 4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "interface GigabitEthernet1/0/4\n switchport mode trunk\n switchport trunk allowed vlan 20\n",
        ));
}

#[test]
fn convert_uses_profile_file() {
    let dir = tempdir().expect("tempdir");
    let profile = dir.path().join("lab.toml");
    fs::write(
        &profile,
        "[render]\nport_prefix = \"Ethernet1/\"\nspanning_tree_mode = \"rapid-pvst\"\n",
    )
    .expect("write profile");

    hp2cisco()
        .args(["convert", "-", "--profile-file", path_as_str(&profile)])
        .write_stdin("vlan 20\n untagged 2\n exit\nspanning-tree\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("interface Ethernet1/2\n"))
        .stdout(predicate::str::contains("spanning-tree mode rapid-pvst\n"));
}

#[test]
fn convert_rejects_unknown_profile() {
    hp2cisco()
        .args(["convert", "-", "--profile", "nexus-9k"])
        .write_stdin("vlan 20\n untagged 2\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown profile 'nexus-9k'"));
}
