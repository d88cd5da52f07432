//! Integration tests for sync, render and status

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_workspace, purpleline_cmd, SAMPLE_FORM};

fn synced_workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());
    let form = temp.path().join("form.json");
    fs::write(&form, SAMPLE_FORM).unwrap();

    purpleline_cmd()
        .current_dir(temp.path())
        .arg("sync")
        .arg(&form)
        .assert()
        .success()
        .stdout(predicate::str::contains("Synced 5 items"));

    temp
}

fn render(temp: &TempDir, target: &str) -> String {
    let output = purpleline_cmd()
        .current_dir(temp.path())
        .args(["render", target])
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_render_domestic() {
    let temp = synced_workspace();
    let html = render(&temp, "domestic");

    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("September 17, 2025"));
    assert!(!html.contains("%%date%%"));

    let top = html.find("Top story").unwrap();
    let second = html.find("Second story").unwrap();
    assert!(top < second);

    assert!(html.contains("https://img.example/lead.jpg"));
    assert!(html.contains("Line one<br />Line two"));
    assert!(html.contains("Hello ##First Name##"));
    assert!(html.contains("utm_campaign=2025-09-17+Purple+Line+domestic"));
    assert!(html.contains("ALUMNI IN ACTION"));
}

#[test]
fn test_render_international() {
    let temp = synced_workspace();
    let html = render(&temp, "intl");

    assert!(html.contains("Second story"));
    assert!(!html.contains("Top story"));
    assert!(!html.contains("ALUMNI IN ACTION"));
    assert!(html.contains("NEWS IN BRIEF"));
    assert!(html.contains("utm_campaign=2025-09-17+Purple+Line+international"));
}

#[test]
fn test_render_web_fragment() {
    let temp = synced_workspace();
    let html = render(&temp, "web");

    assert!(!html.contains("<!DOCTYPE html>"));
    assert!(!html.contains("utm_"));
    assert!(html.contains(r#"<p class="pl-date">September 17, 2025</p>"#));
    assert!(html.find("Top story").unwrap() < html.find("Second story").unwrap());
    assert!(html.contains("Alumni in Action"));
}

#[test]
fn test_render_web_preview_to_file() {
    let temp = synced_workspace();
    let out = temp.path().join("preview.html");

    purpleline_cmd()
        .current_dir(temp.path())
        .args(["render", "web", "--preview", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote web to"));

    let page = fs::read_to_string(out).unwrap();
    assert!(page.contains("purpleline.css"));
    assert!(page.contains("Class notes"));
}

#[test]
fn test_render_unknown_target() {
    let temp = synced_workspace();

    purpleline_cmd()
        .current_dir(temp.path())
        .args(["render", "canada"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Valid targets"));
}

#[test]
fn test_render_empty_workspace_is_chrome_only() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    let html = render(&temp, "domestic");
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(!html.contains("<!-- BLOCK:"));
}

#[test]
fn test_status() {
    let temp = synced_workspace();

    purpleline_cmd()
        .current_dir(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Issue: September 17, 2025"))
        .stdout(predicate::str::is_match(r"newsitems\s+2\s+2\s+1").unwrap())
        .stdout(predicate::str::is_match(r"actionitems\s+1\s+1\s+0").unwrap());
}

#[test]
fn test_sync_rejects_malformed_form() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());
    let form = temp.path().join("form.json");
    fs::write(&form, "not json").unwrap();

    purpleline_cmd()
        .current_dir(temp.path())
        .arg("sync")
        .arg(&form)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid editor form"));
}
