use assert_cmd::Command;
use predicates::prelude::*;

const RINK_101X25: &str = include_str!("fixtures/rink_101x25.txt");

fn rink() -> Command {
    Command::cargo_bin("hockey-rink").unwrap()
}

#[test]
fn default_run_prints_standard_rink() {
    rink()
        .assert()
        .success()
        .stdout(RINK_101X25)
        .stderr(predicate::str::is_empty());
}

#[test]
fn several_sizes_print_in_order() {
    let out = rink()
        .args(["--size", "17x5", "-s", "30x7"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[0], "/`o```o```o```o`\\");
    assert_eq!(lines[5], "/```o```````o`````o``````o```\\");
}

#[test]
fn color_flags_emit_escape_sequences() {
    rink()
        .args(["--size", "17x5", "--color", "red", "--bright"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[1m"))
        .stdout(predicate::str::contains("|     | | |     |"));
}

#[test]
fn layout_prints_json() {
    let out = rink()
        .args(["--layout"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["goal_left"], 5);
    assert_eq!(v["goal_right"], 95);
    assert_eq!(v["center_ice"]["x"], 50);
    assert_eq!(v["center_ice"]["y"], 24);
    assert_eq!(v["dots"].as_array().unwrap().len(), 9);
}

#[test]
fn rejects_malformed_size() {
    rink()
        .args(["--size", "101by25"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected WIDTHxHEIGHT"));
    rink()
        .args(["--size", "0x25"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("size must be positive"));
}
