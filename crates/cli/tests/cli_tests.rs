//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("postmetric")
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn json_output(args: &[&str]) -> serde_json::Value {
    let output = cmd().args(args).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_cli_file_input() {
    cmd()
        .arg(get_fixture_path("blog_post.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Statistics"))
        .stdout(predicate::str::contains("SEO score:"));
}

#[test]
fn test_cli_stdin_input() {
    cmd()
        .arg("-")
        .write_stdin("<p>Hello world.</p>")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Words:\s+2\n").unwrap());
}

#[test]
fn test_cli_json_format() {
    let fixture = get_fixture_path("blog_post.html");
    let value = json_output(&["-f", "json", &fixture]);

    assert_eq!(value["statistics"]["word_count"], 109);
    assert_eq!(value["statistics"]["images"]["without_alt"], 1);
    assert_eq!(value["readability"]["difficulty"], "standard");
    assert_eq!(value["seo"]["images"]["message"], "1 image(s) missing alt text");
}

#[test]
fn test_cli_seo_inputs() {
    let fixture = get_fixture_path("blog_post.html");
    let value = json_output(&[
        "-f",
        "json",
        "--title",
        "Getting Started with Rust Ownership",
        "--keyword",
        "rust ownership",
        &fixture,
    ]);

    assert_eq!(value["seo"]["title"]["score"], 100);
    assert_eq!(value["seo"]["keywords"]["score"], 100);
    assert_eq!(value["seo"]["overall"], 74);
}

#[test]
fn test_cli_pretty_json() {
    cmd()
        .args(["-f", "json", "--pretty", &get_fixture_path("blog_post.html")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\n"));
}

#[test]
fn test_cli_toml_format() {
    cmd()
        .args(["-f", "toml", &get_fixture_path("blog_post.html")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[statistics]"))
        .stdout(predicate::str::contains("[seo.images]"));
}

#[test]
fn test_cli_text_header_and_messages() {
    cmd()
        .args(["-t", "My First Post", &get_fixture_path("blog_post.html")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("My First Post\n============="))
        .stdout(predicate::str::contains("Title is too short"));

    cmd()
        .args(["--no-seo-messages", &get_fixture_path("blog_post.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Add a title to your post").not());
}

#[test]
fn test_cli_reading_rate() {
    let fixture = get_fixture_path("blog_post.html");
    let value = json_output(&["-f", "json", "--reading-wpm", "50", "--speaking-wpm", "25", &fixture]);

    assert_eq!(value["statistics"]["reading_time_minutes"], 3);
    assert_eq!(value["statistics"]["speaking_time_minutes"], 5);
}

#[test]
fn test_cli_zero_rate_rejected() {
    cmd()
        .args(["--reading-wpm", "0", &get_fixture_path("blog_post.html")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading_words_per_minute"));
}

#[test]
fn test_cli_output_file() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("report.json");

    cmd()
        .args(["-f", "json", "-o", output.to_str().unwrap()])
        .arg(get_fixture_path("blog_post.html"))
        .assert()
        .success();

    let written = std::fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(written.trim()).unwrap();
    assert_eq!(value["statistics"]["word_count"], 109);
}

#[test]
fn test_cli_output_file_is_quiet_without_verbose() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("report.txt");

    cmd()
        .env_remove("RUST_LOG")
        .args(["-o", output.to_str().unwrap()])
        .arg(get_fixture_path("blog_post.html"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    assert!(output.exists());
}

#[test]
fn test_cli_output_file_verbose_reports_path() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("report.txt");

    cmd()
        .args(["-v", "-o", output.to_str().unwrap()])
        .arg(get_fixture_path("blog_post.html"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Output written to"));
}

#[test]
fn test_cli_invalid_file() {
    cmd().arg("nonexistent.html").assert().failure();
}

#[test]
fn test_cli_invalid_format() {
    cmd()
        .args(["-f", "yaml", &get_fixture_path("blog_post.html")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid format"));
}

#[test]
fn test_cli_empty_content() {
    let value = json_output(&["-f", "json", &get_fixture_path("empty_content.html")]);

    assert_eq!(value["statistics"]["word_count"], 0);
    assert_eq!(value["statistics"]["reading_time_minutes"], 1);
    assert_eq!(value["seo"]["overall"], 29);
}

#[test]
fn test_cli_malformed_html() {
    cmd().arg(get_fixture_path("malformed_html.html")).assert().success();
}

#[test]
fn test_cli_invalid_utf8() {
    let value = json_output(&["-f", "json", &get_fixture_path("latin1_post.html")]);
    assert_eq!(value["statistics"]["word_count"], 4);
}

#[test]
fn test_cli_verbose() {
    cmd()
        .args(["-v", &get_fixture_path("blog_post.html")])
        .assert()
        .success()
        .stderr(predicate::str::contains("Postmetric"))
        .stderr(predicate::str::contains("Timing Summary"));
}
