use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn mspcat_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mspcat").unwrap();
    cmd.env("MSPCAT_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn first_run_lists_sample_services() {
    let home = TempDir::new().unwrap();

    mspcat_cmd(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Office 365 Setup"))
        .stdout(predicate::str::contains("Network Monitoring"))
        .stdout(predicate::str::contains("Backup Service"));

    assert!(home.path().join("msp-services.json").exists());
}

#[test]
fn added_service_is_searchable() {
    let home = TempDir::new().unwrap();

    mspcat_cmd(&home)
        .args([
            "add",
            "--name",
            "Security Awareness Training",
            "--category",
            "Training",
            "--short",
            "Monthly drills for staff",
            "--description",
            "Simulated phishing campaigns with follow-up training",
            "--amount",
            "300",
            "--period",
            "one-time",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Security Awareness Training"));

    mspcat_cmd(&home)
        .args(["list", "--search", "PHISHING"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Security Awareness Training"))
        .stdout(predicate::str::contains("$300 one-time"))
        .stdout(predicate::str::contains("Office 365 Setup").not());

    mspcat_cmd(&home)
        .args(["list", "--search", "monthly drills"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No services found."));
}

#[test]
fn add_without_category_fails() {
    let home = TempDir::new().unwrap();

    mspcat_cmd(&home)
        .args(["add", "--name", "Orphan", "--short", "No category"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category is required"));
}

#[test]
fn list_filters_by_category() {
    let home = TempDir::new().unwrap();

    mspcat_cmd(&home)
        .args(["list", "--category", "security"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup Service"))
        .stdout(predicate::str::contains("Network Monitoring").not());
}

#[test]
fn stats_reports_sample_counts() {
    let home = TempDir::new().unwrap();

    mspcat_cmd(&home)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total services     3"))
        .stdout(predicate::str::contains("Featured services  2"))
        .stdout(predicate::str::contains("Categories         3"));
}

#[test]
fn export_writes_csv_and_docx() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("out");

    mspcat_cmd(&home)
        .args(["export", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("msp-service-catalog.csv"));

    let csv = fs::read_to_string(out.join("msp-service-catalog.csv")).unwrap();
    assert_eq!(csv.lines().count(), 4);
    assert!(out.join("msp-service-catalog.docx").exists());
}

#[test]
fn export_uses_configured_dir() {
    let home = TempDir::new().unwrap();
    let reports = home.path().join("reports");

    mspcat_cmd(&home)
        .args(["config", "export-dir"])
        .arg(&reports)
        .assert()
        .success();

    mspcat_cmd(&home)
        .args(["export", "--format", "csv"])
        .assert()
        .success();

    assert!(reports.join("msp-service-catalog.csv").exists());
    assert!(!reports.join("msp-service-catalog.docx").exists());
}

#[test]
fn config_rejects_unknown_category() {
    let home = TempDir::new().unwrap();

    mspcat_cmd(&home)
        .args(["config", "default-category", "Plumbing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category: Plumbing"));

    mspcat_cmd(&home)
        .args(["config", "default-category"])
        .assert()
        .success()
        .stdout(predicate::str::contains("all"));
}

#[test]
fn duplicate_missing_id_fails() {
    let home = TempDir::new().unwrap();

    mspcat_cmd(&home)
        .args(["duplicate", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Service not found: missing"));
}

#[test]
fn duplicate_then_show_copy() {
    let home = TempDir::new().unwrap();

    mspcat_cmd(&home)
        .args(["duplicate", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Network Monitoring (Copy)"));

    mspcat_cmd(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Network Monitoring (Copy)"));
}

#[test]
fn edit_changes_only_given_fields() {
    let home = TempDir::new().unwrap();

    mspcat_cmd(&home)
        .args(["edit", "3", "--amount", "250"])
        .assert()
        .success();

    mspcat_cmd(&home)
        .args(["show", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup Service"))
        .stdout(predicate::str::contains("$250/monthly"));
}

#[test]
fn malformed_snapshot_falls_back_to_sample() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("msp-services.json"), "[{broken").unwrap();

    mspcat_cmd(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved catalog could not be read"))
        .stdout(predicate::str::contains("Office 365 Setup"))
        .stderr(predicate::str::contains("sample services"));

    let on_disk = fs::read_to_string(home.path().join("msp-services.json")).unwrap();
    assert_eq!(on_disk, "[{broken");
}

#[test]
fn help_shows_command_groups() {
    let home = TempDir::new().unwrap();

    mspcat_cmd(&home)
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Per-Service Commands:"));
}
