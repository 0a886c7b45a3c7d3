use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

fn hp2cisco() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("hp2cisco"))
}

#[test]
fn inspect_prints_model_and_roles() {
    hp2cisco()
        .arg("inspect")
        .arg(fixture("fixtures/vlan-centric.cfg"))
        .assert()
        .success()
        .stdout(predicate::str::contains("profile=ios-fastethernet source=embedded"))
        .stdout(predicate::str::contains(
            "hostname=HP-2530-48G spanning_tree=enabled",
        ))
        .stdout(predicate::str::contains(
            "- 10 untagged=1,2,3,4 tagged=23,24,47,48",
        ))
        .stdout(predicate::str::contains(
            "- Port-channel2 source=Trk2 mode=static members=45,46",
        ))
        .stdout(predicate::str::contains(
            "- FastEthernet0/23 trunk allowed=10,30",
        ))
        .stdout(predicate::str::contains("- FastEthernet0/47 channel-group=1"));
}

#[test]
fn inspect_json_is_machine_readable() {
    let output = hp2cisco()
        .arg("inspect")
        .arg(fixture("fixtures/interface-centric.cfg"))
        .arg("--format")
        .arg("json")
        .output()
        .expect("command output");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["profile"], "ios-fastethernet");
    assert_eq!(report["model"]["hostname"], "aruba-2930");
    assert_eq!(report["model"]["interface_descriptions"]["1"], "Uplink core");
    assert_eq!(report["roles"]["standalone"]["3"]["mode"], "access");
    assert_eq!(report["roles"]["standalone"]["3"]["vlan"], 1);
    assert_eq!(report["summary"]["descriptions"], 3);
}

#[test]
fn inspect_reports_parse_errors() {
    hp2cisco()
        .arg("inspect")
        .arg(fixture("fixtures/malformed-range.cfg"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn profiles_lists_embedded_profiles() {
    hp2cisco()
        .arg("profiles")
        .assert()
        .success()
        .stdout(predicate::str::contains("ios-fastethernet (default)"))
        .stdout(predicate::str::contains("port_prefix=GigabitEthernet0/"))
        .stdout(predicate::str::contains("ios-xe-stack"));
}
