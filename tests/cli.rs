use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("linkkit_component").unwrap()
}

#[test]
fn json_output_without_lwip() {
    cmd()
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"linkkit\""))
        .stdout(predicate::str::contains("framework/protocol/linkkit/iotx-sdk-c"))
        .stdout(predicate::str::contains("framework/common"))
        .stdout(predicate::str::contains("kernel/protocols/net").not())
        .stdout(predicate::str::contains("no_with_lwip").not());
}

#[test]
fn set_override_enables_lwip_branch() {
    cmd()
        .arg("--set")
        .arg("LWIP=1")
        .assert()
        .success()
        .stdout(predicate::str::contains("kernel/protocols/net"))
        .stdout(predicate::str::contains("\"no_with_lwip\": 0"));
}

#[test]
fn set_override_with_other_value_is_ignored() {
    cmd()
        .arg("--set")
        .arg("LWIP=2")
        .assert()
        .success()
        .stdout(predicate::str::contains("kernel/protocols/net").not())
        .stdout(predicate::str::contains("no_with_lwip").not());
}

#[test]
fn config_file_seeds_global_config() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("build.toml");
    fs::write(&config_path, "[global]\nLWIP = 1\n").unwrap();

    cmd()
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("kernel/protocols/net"))
        .stdout(predicate::str::contains("\"no_with_lwip\": 0"));
}

#[test]
fn missing_config_file_fails() {
    cmd()
        .arg("--config")
        .arg("does-not-exist.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.toml"));
}

#[test]
fn invalid_set_override_fails() {
    cmd()
        .arg("--set")
        .arg("not an assignment")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --set override"));
}

#[test]
fn make_fragment_lists_sources_and_defines() {
    cmd()
        .arg("--format")
        .arg("make")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "linkkit_SOURCES := linkkit_sample_gateway.c light.c linkkit_entry.c",
        ))
        .stdout(predicate::str::contains("-DMQTT_DIRECT"))
        .stdout(predicate::str::contains("-DON_PRE2=1"));
}

#[test]
fn make_fragment_carries_config_writeback() {
    cmd()
        .args(["--format", "make", "--set", "LWIP=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("linkkit_COMPONENTS :=").and(
            predicate::str::contains("kernel/protocols/net"),
        ))
        .stdout(predicate::str::contains("no_with_lwip := 0"));
}

#[test]
fn out_file_skipped_unless_forced() {
    let temp = TempDir::new().unwrap();
    let out_path = temp.path().join("component.json");
    let out = out_path.to_str().unwrap();

    cmd().args(["--out", out]).assert().success();
    let first = fs::read_to_string(&out_path).unwrap();
    assert!(first.contains("\"name\": \"linkkit\""));

    // 不带 --force 时已有文件不被覆盖
    cmd()
        .args(["--out", out, "--set", "LWIP=1"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&out_path).unwrap(), first);

    cmd()
        .args(["--out", out, "--set", "LWIP=1", "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out_path).unwrap().contains("no_with_lwip"));
}
