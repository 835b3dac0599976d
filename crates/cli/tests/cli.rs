// ABOUTME: Integration tests for the el CLI binary.
// ABOUTME: Tests rendering, descriptor parsing, template fill and distance output.

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::process::Command;

fn el_cmd() -> Command {
    Command::cargo_bin("el").unwrap()
}

fn json_stdout(args: &[&str]) -> Value {
    let output = el_cmd().args(args).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn render_prints_html() {
    el_cmd()
        .args(["render", "p.note", "--text", "a\nb", "--attr", "title=hi"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"<p class="note" title="hi">a<br>b</p>"#,
        ));
}

#[test]
fn render_applies_styles() {
    el_cmd()
        .args(["render", "div", "--style", "width=10", "--style", "opacity=0.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"style="width: 10px; opacity: 0.5;""#,
        ));
}

#[test]
fn render_rejects_bad_tag() {
    el_cmd()
        .args(["render", "1bad"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid tag name"));
}

#[test]
fn render_rejects_malformed_attr() {
    el_cmd()
        .args(["render", "div", "--attr", "novalue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected name=value"));
}

#[test]
fn parse_outputs_descriptor_json() {
    let value = json_stdout(&["parse", "div#main.a.b", "--compact"]);
    assert_eq!(value, json!({ "tag": "div", "id": "main", "class_name": "a b" }));
}

#[test]
fn fill_outputs_pieces() {
    let value = json_stdout(&["fill", "a-X-b-X-c", "--target", "X", "--with", "*"]);
    assert_eq!(value, json!(["a-", "*", "-b-", "*", "-c"]));
}

#[test]
fn distance_outputs_rect_and_distance() {
    let value = json_stdout(&["distance", "--rect", "0,0,10,10", "--point", "13,14"]);
    assert_eq!(value["distance"], json!(5.0));
    assert_eq!(value["rect"]["right"], json!(10.0));
}

#[test]
fn distance_accepts_negative_coordinates() {
    let value = json_stdout(&["distance", "--rect", "0,0,10,10", "--point", "-3,-4"]);
    assert_eq!(value["distance"], json!(5.0));

    let value = json_stdout(&["distance", "--rect", "-20,-20,-10,-10", "--point", "-15,-5"]);
    assert_eq!(value["distance"], json!(5.0));
    assert_eq!(value["rect"]["left"], json!(-20.0));
}

#[test]
fn verbose_logs_parsed_command_to_stderr() {
    el_cmd()
        .args(["-v", "parse", "p.note"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("parsed arguments"));
}

#[test]
fn distance_rejects_short_rect() {
    el_cmd()
        .args(["distance", "--rect", "0,0,10", "--point", "1,1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--rect"));
}
