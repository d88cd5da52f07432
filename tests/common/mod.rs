use assert_cmd::Command;
use std::path::Path;

pub fn purpleline_cmd() -> Command {
    let mut cmd = Command::cargo_bin("purpleline").unwrap();
    cmd.env_remove("PURPLELINE_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Initialize a workspace at `path`
#[allow(dead_code)]
pub fn init_workspace(path: &Path) {
    purpleline_cmd().arg("init").arg(path).assert().success();
}

/// Editor form snapshot with one ranked story per section
#[allow(dead_code)]
pub const SAMPLE_FORM: &str = r#"{
    "date": "2025-09-17",
    "subject": "Purple Line: September",
    "imageLead": "https://img.example/lead.jpg",
    "imageLeadAlt": "The Arch in autumn",
    "items": [
        {"type": "newsitems", "fields": {
            "headline": "Second story", "url": "https://news.northwestern.edu/second",
            "body": "Line one\nLine two", "cta": "Read more", "domestic": "2", "international": "1"}},
        {"type": "newsitems", "fields": {
            "headline": "Top story", "url": "https://news.northwestern.edu/top",
            "body": "Hello ##First Name##", "cta": "Read more", "domestic": "1", "international": "0"}},
        {"type": "briefitems", "fields": {
            "headline": "Library hours", "url": "https://www.library.northwestern.edu/",
            "domestic": "1", "international": "1"}},
        {"type": "actionitem", "fields": {
            "headline": "Volunteer", "url": "https://alumni.northwestern.edu/volunteer",
            "cta": "Sign up", "domestic": "1", "international": ""}},
        {"type": "twocolumnitems", "fields": {
            "headline": "Class notes", "url": "https://our.northwestern.edu/notes",
            "body": "See what classmates are up to", "cta": "Browse", "domestic": "1", "international": "1"}}
    ]
}"#;
