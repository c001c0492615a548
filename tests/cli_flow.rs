mod common;

use common::{PATHS_YAML, TestContext};
use predicates::prelude::*;
use serde_json::json;
use std::fs;

#[test]
fn missing_sub_path_key_is_reported_before_any_request() {
    let ctx = TestContext::new();
    let paths: String = PATHS_YAML
        .lines()
        .filter(|line| !line.starts_with("candidate_subpath:"))
        .map(|line| format!("{line}\n"))
        .collect();
    ctx.write_paths_config(&paths);

    ctx.cli()
        .arg("paths")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Configuration error"))
        .stderr(predicate::str::contains("candidate_subpath"));
}

#[test]
fn missing_repository_config_is_reported() {
    let ctx = TestContext::new();

    ctx.cli_for("other")
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("other.yml"));
}

#[test]
fn paths_prints_both_manual_conventions() {
    let mut ctx = TestContext::new();
    let _state = ctx.mock_state("v3.2", &["develop", "hotfix-3.1.1", "release-3.3"]);
    let accepted = ctx.candidate_dir("hotfix-3.2");
    let root = ctx.candidate_root();

    ctx.cli()
        .arg("paths")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("candidate_root: {}", root.display())))
        .stdout(predicate::str::contains(format!(
            "current_candidate: {}",
            root.join("release-3.3").display()
        )))
        .stdout(predicate::str::contains(format!(
            "user_manual_download: {}",
            root.join("release-3.3").join("acme-user-manual-3.3.pdf").display()
        )))
        .stdout(predicate::str::contains(format!(
            "user_manual_previous: {}",
            accepted.join("acme-user-manual-v3.2.pdf").display()
        )));
}

#[test]
fn paths_reports_empty_queue_without_failing() {
    let mut ctx = TestContext::new();
    let _state = ctx.mock_state("v3.2", &["develop", "release-3.2"]);

    ctx.cli()
        .arg("paths")
        .assert()
        .success()
        .stdout(predicate::str::contains("current_candidate: (unavailable: No release candidate"));
}

#[test]
fn dry_run_generate_creates_no_manual() {
    let mut ctx = TestContext::new();
    let _state = ctx.mock_state("v3.2", &["release-3.3"]);
    let candidate = ctx.candidate_dir("release-3.3");

    ctx.cli()
        .args(["--dry-run", "generate-user-manual"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Would run: confluence-tools --config"))
        .stderr(predicate::str::contains("acme-user-manual-3.3.pdf"));

    assert!(!candidate.join("acme-user-manual-3.3.pdf").exists());
}

#[test]
fn whatif_alias_enables_dry_run() {
    let mut ctx = TestContext::new();
    let _state = ctx.mock_state("v3.2", &["release-3.3"]);
    let merge = ctx.server().mock("POST", "/repos/acme-org/acme/merges").expect(0).create();

    ctx.cli().args(["--whatif", "accept"]).assert().success();
    merge.assert();
}

#[test]
fn copy_without_previous_manual_fails_and_writes_nothing() {
    let mut ctx = TestContext::new();
    let _state = ctx.mock_state("v3.2", &["release-3.3"]);
    ctx.candidate_dir("hotfix-3.2");
    let candidate = ctx.candidate_dir("release-3.3");

    ctx.cli()
        .arg("copy-previous-user-manual")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Previous user manual could not be found"))
        .stderr(predicate::str::contains("acme-user-manual-v3.2.pdf"));

    assert_eq!(fs::read_dir(candidate).unwrap().count(), 0);
}

#[test]
fn copy_previous_manual_renames_to_candidate_convention() {
    let mut ctx = TestContext::new();
    let _state = ctx.mock_state("v3.2", &["release-3.3"]);
    let accepted = ctx.candidate_dir("hotfix-3.2");
    ctx.write_file(&accepted.join("acme-user-manual-v3.2.pdf"), "manual v3.2");
    let candidate = ctx.candidate_dir("release-3.3");

    ctx.cli().arg("copy-previous-user-manual").assert().success();

    let copied = fs::read_to_string(candidate.join("acme-user-manual-3.3.pdf")).unwrap();
    assert_eq!(copied, "manual v3.2");
}

#[test]
fn release_history_is_written_into_accepted_directory() {
    let mut ctx = TestContext::new();
    let _state = ctx.mock_state("v3.3", &[]);
    let accepted = ctx.candidate_dir("release-3.3");
    let _releases = ctx
        .server()
        .mock("GET", "/repos/acme-org/acme/releases")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                { "tag_name": "v3.3", "body": "New export", "published_at": "2024-06-10T09:00:00Z" }
            ])
            .to_string(),
        )
        .create();

    ctx.cli().arg("download-release-history").assert().success();

    let history = fs::read_to_string(accepted.join("release-history.txt")).unwrap();
    assert_eq!(history, "v3.3 (2024-06-10)\nNew export\n\n");
}

#[test]
fn dry_run_release_history_writes_nothing() {
    let mut ctx = TestContext::new();
    let _state = ctx.mock_state("v3.3", &[]);
    let accepted = ctx.candidate_dir("release-3.3");
    let releases = ctx.server().mock("GET", "/repos/acme-org/acme/releases").expect(0).create();

    ctx.cli()
        .args(["--dry-run", "download-release-history"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Would write release history to"));

    assert!(!accepted.join("release-history.txt").exists());
    releases.assert();
}

#[test]
fn missing_accepted_directory_is_reported() {
    let mut ctx = TestContext::new();
    let _state = ctx.mock_state("v4.0", &[]);
    ctx.candidate_dir("release-3.1");
    ctx.candidate_dir("hotfix-3.2");
    ctx.candidate_dir("release-3.3");

    ctx.cli()
        .arg("download-release-history")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Could not find the download directory for latest version 4.0",
        ));
}

#[test]
fn status_summarizes_lifecycle() {
    let mut ctx = TestContext::new();
    let _state = ctx.mock_state("v3.2", &["release-3.4", "release-3.3"]);
    ctx.candidate_dir("release-3.2");
    ctx.candidate_dir("release-3.3");

    ctx.cli()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Latest version: v3.2"))
        .stdout(predicate::str::contains("Queue: release-3.3, release-3.4"))
        .stdout(predicate::str::contains("Candidate release-3.3: downloaded, no manual"))
        .stdout(predicate::str::contains("no history"));
}
