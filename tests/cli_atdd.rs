use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FULL_REQUEST: &str = r#"{
  "profile": {
    "name": "Acme Plumbing",
    "website": "https://acmeplumbing.test",
    "street_address": "100 Congress Ave",
    "city": "Austin",
    "zip": "78701",
    "phone": "(512) 555-0100",
    "category": "plumber",
    "gbp_url": "https://maps.google.com/?cid=42"
  },
  "signals": {
    "gbp": { "found": true, "rating": 4.8, "review_count": 60, "has_recent_activity": true },
    "page": {
      "has_h1": true, "has_title": true, "has_meta_description": true,
      "has_local_business_schema": true, "alt_text_coverage": 100,
      "internal_link_count": 20, "word_count": 900,
      "mentions_city": true, "mentions_category": true
    },
    "performance": { "performance_score": 1.0, "seo_score": 1.0, "has_mobile_viewport": true },
    "citation_count": 12
  }
}"#;

const BARE_REQUEST: &str = r#"{
  "profile": { "name": "Acme Plumbing", "website": "https://acmeplumbing.test" }
}"#;

fn localscore() -> Command {
    Command::cargo_bin("localscore").expect("binary should compile")
}

fn write_request(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("audit.json");
    fs::write(&path, body).expect("request should write");
    path
}

#[test]
fn score_full_request_succeeds_with_perfect_report() {
    let dir = TempDir::new().expect("temp dir should be created");
    let input = write_request(dir.path(), FULL_REQUEST);

    localscore()
        .arg("score")
        .arg(&input)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Overall score: 100/100 (Strong)"))
        .stdout(predicate::str::contains("## Local SEO: 100/100"));
}

#[test]
fn score_json_outputs_sub_scores() {
    let dir = TempDir::new().expect("temp dir should be created");
    let input = write_request(dir.path(), FULL_REQUEST);

    let output = localscore()
        .args(["score", "--format", "json"])
        .arg(&input)
        .output()
        .expect("score should run");
    assert_eq!(output.status.code(), Some(0));

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(value["result"]["local"]["score"], 100);
    assert_eq!(value["result"]["onsite"]["score"], 100);
    assert_eq!(value["result"]["combined"], 100);
}

#[test]
fn score_bare_request_is_below_default_threshold() {
    let dir = TempDir::new().expect("temp dir should be created");
    let input = write_request(dir.path(), BARE_REQUEST);

    localscore()
        .arg("score")
        .arg(&input)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Google Business Profile URL not provided"))
        .stdout(predicate::str::contains("Unable to analyze website performance"))
        .stderr(predicate::str::contains("below pass score 70"));
}

#[test]
fn score_respects_pass_score_from_config() {
    let dir = TempDir::new().expect("temp dir should be created");
    let input = write_request(dir.path(), BARE_REQUEST);
    fs::write(
        dir.path().join("localscore.toml"),
        "[thresholds]\npass_score = 0\n",
    )
    .expect("config should write");

    localscore()
        .arg("score")
        .arg(&input)
        .assert()
        .code(1);
}

#[test]
fn score_with_api_disabled_ignores_signals() {
    let dir = TempDir::new().expect("temp dir should be created");
    let input = write_request(dir.path(), FULL_REQUEST);
    fs::write(
        dir.path().join("localscore.toml"),
        "[service]\napi_enabled = false\n",
    )
    .expect("config should write");

    localscore()
        .args(["onsite"])
        .arg(&input)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("onsite: 50/100"))
        .stderr(predicate::str::contains("live signal collection is disabled"));
}

#[test]
fn score_html_uses_configured_cta() {
    let dir = TempDir::new().expect("temp dir should be created");
    let input = write_request(dir.path(), FULL_REQUEST);
    fs::write(
        dir.path().join("localscore.toml"),
        r#"
[report]
brand_name = "Hill Country SEO"
cta_url = "https://hillcountryseo.test/book"
"#,
    )
    .expect("config should write");

    localscore()
        .args(["score", "--format", "html"])
        .arg(&input)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("<!doctype html>"))
        .stdout(predicate::str::contains("href=\"https://hillcountryseo.test/book\""));
}

#[test]
fn score_rejects_invalid_config() {
    let dir = TempDir::new().expect("temp dir should be created");
    let input = write_request(dir.path(), FULL_REQUEST);
    fs::write(
        dir.path().join("localscore.toml"),
        "[thresholds]\npass_score = 250\n",
    )
    .expect("config should write");

    localscore()
        .arg("score")
        .arg(&input)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("thresholds.pass_score"));
}

#[test]
fn score_missing_input_is_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");

    localscore()
        .arg("score")
        .arg(dir.path().join("missing.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("input file not found"));
}

#[test]
fn score_html_file_fills_page_signals() {
    let dir = TempDir::new().expect("temp dir should be created");
    let input = write_request(
        dir.path(),
        r#"{
  "profile": {
    "name": "Acme Plumbing",
    "website": "https://acmeplumbing.test",
    "city": "Austin",
    "zip": "78701",
    "phone": "512-555-0100",
    "category": "plumber"
  }
}"#,
    );
    let homepage = dir.path().join("index.html");
    fs::write(
        &homepage,
        r#"<html><head><title>Austin Plumber | Acme</title>
<meta name="viewport" content="width=device-width">
<script type="application/ld+json">{"@type":"Plumber"}</script></head>
<body><h1>Acme</h1><p>Serving Austin since 1999.</p></body></html>"#,
    )
    .expect("homepage should write");

    let output = localscore()
        .args(["score", "--format", "json", "--html"])
        .arg(&homepage)
        .arg(&input)
        .output()
        .expect("score should run");

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    let local_insights = value["result"]["local"]["insights"]
        .as_array()
        .expect("insights should be an array");
    assert!(!local_insights
        .iter()
        .any(|insight| insight == "No LocalBusiness structured data found on homepage"));
    assert!(!local_insights
        .iter()
        .any(|insight| insight == "City name not found on homepage"));
    assert_ne!(value["result"]["onsite"]["score"], 50);
}

#[test]
fn local_prints_insights_in_order() {
    let dir = TempDir::new().expect("temp dir should be created");
    let input = write_request(dir.path(), BARE_REQUEST);

    let output = localscore()
        .arg("local")
        .arg(&input)
        .output()
        .expect("local should run");
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).expect("stdout should be utf-8");
    let lines = stdout.lines().collect::<Vec<_>>();
    assert_eq!(lines[0], "local: 0/100");
    assert_eq!(lines[1], "- Google Business Profile URL not provided");
    assert_eq!(lines.len(), 10);
}

#[test]
fn scan_prints_extracted_signals() {
    let dir = TempDir::new().expect("temp dir should be created");
    let homepage = dir.path().join("index.html");
    fs::write(
        &homepage,
        r#"<title>Acme</title><a href="/a">a</a><a href="https://acme.test/b">b</a><img src="x" alt="x">"#,
    )
    .expect("homepage should write");

    let output = localscore()
        .arg("scan")
        .arg(&homepage)
        .args(["--website", "https://acme.test"])
        .output()
        .expect("scan should run");
    assert_eq!(output.status.code(), Some(0));

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(value["page"]["internal_link_count"], 2);
    assert_eq!(value["page"]["has_title"], true);
    assert_eq!(value["has_mobile_viewport"], false);
}

#[test]
fn init_writes_template_once() {
    let dir = TempDir::new().expect("temp dir should be created");

    localscore()
        .arg("init")
        .arg(dir.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("audit.json"));
    assert!(dir.path().join("audit.json").exists());

    localscore()
        .arg("init")
        .arg(dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("refusing to overwrite"));

    localscore()
        .arg("local")
        .arg(dir.path().join("audit.json"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("local:"));
}
