//! End-to-end tests for the `mm` binary

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Workspace {
    temp: TempDir,
}

impl Workspace {
    fn new(csv: &str, template: &str) -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        fs::write(temp.path().join("data.csv"), csv).unwrap();
        fs::write(temp.path().join("template.txt"), template).unwrap();
        fs::write(
            temp.path().join("mm.yml"),
            "csv-path: data.csv\ntemplate-path: template.txt\noutput-dir: out\n",
        )
        .unwrap();
        Self { temp }
    }

    fn path(&self) -> &Path {
        self.temp.path()
    }

    fn out(&self) -> PathBuf {
        self.path().join("out")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("mm").unwrap();
        cmd.current_dir(self.path())
            .env_remove("RUST_LOG")
            .env_remove("CLICOLOR_FORCE")
            .env("CLICOLOR", "0")
            .arg("--config")
            .arg("mm.yml");
        cmd
    }
}

#[test]
fn test_renders_one_file_per_row() {
    let ws = Workspace::new(
        "7,Acme Co,Springfield,joe@acme.com,joe99\n8,Globex,Shelbyville,hank@globex.com,hank\n",
        "Hi %%1%% from %%2%% in %%4%%, contact %%3%%",
    );

    ws.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Processing complete"));

    let first = fs::read_to_string(ws.out().join("template-7.txt")).unwrap();
    assert_eq!(first, "Hi joe99 from Acme Co in Springfield, contact joe@acme.com\n");
    let second = fs::read_to_string(ws.out().join("template-8.txt")).unwrap();
    assert_eq!(second, "Hi hank from Globex in Shelbyville, contact hank@globex.com\n");
}

#[test]
fn test_reports_skipped_line_number() {
    let ws = Workspace::new("1,A,CityA,a@a.com,ua\n\n2,B,CityB\n", "%%1%% %%2%% %%3%% %%4%%");

    ws.cmd()
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping CSV line 3"))
        .stdout(predicate::str::contains("! Processing complete"))
        .stdout(predicate::str::contains("skipped line(s): 3"));

    assert!(ws.out().join("template-1.txt").exists());
    assert!(!ws.out().join("template-2.txt").exists());
}

#[test]
fn test_warns_on_missing_placeholder() {
    let ws = Workspace::new("1,A,CityA,a@a.com,ua\n", "Hello %%1%%");

    ws.cmd()
        .assert()
        .success()
        .stderr(predicate::str::contains("Placeholder %%2%% not found"))
        .stderr(predicate::str::contains("Placeholder %%4%% not found"));

    assert_eq!(fs::read_to_string(ws.out().join("template-1.txt")).unwrap(), "Hello ua\n");
}

#[test]
fn test_latin1_input_does_not_abort() {
    let ws = Workspace::new("", "");
    fs::write(ws.path().join("template.txt"), b"Espa\xf1a %%1%%\r").unwrap();
    fs::write(ws.path().join("data.csv"), b"1,Pe\xf1a,C,e@e.com,u1\r2,B,C,e@e.com,u2\r").unwrap();

    ws.cmd().assert().success();

    assert_eq!(fs::read_to_string(ws.out().join("template-1.txt")).unwrap(), "Espa\u{FFFD}a u1\n");
    assert_eq!(fs::read_to_string(ws.out().join("template-2.txt")).unwrap(), "Espa\u{FFFD}a u2\n");
}

#[test]
fn test_cli_flags_override_config() {
    let ws = Workspace::new("1,A,CityA,a@a.com,ua\n", "%%1%%");
    fs::write(ws.path().join("other.csv"), "5,E,CityE,e@e.com,ue\n").unwrap();

    ws.cmd().args(["--csv", "other.csv", "-o", "letters"]).assert().success();

    assert_eq!(fs::read_to_string(ws.path().join("letters").join("template-5.txt")).unwrap(), "ue\n");
    assert!(!ws.out().exists());
}

#[test]
fn test_missing_csv_fails() {
    let ws = Workspace::new("", "%%1%%");
    fs::remove_file(ws.path().join("data.csv")).unwrap();

    ws.cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open CSV file"));
}

#[test]
fn test_missing_config_file_fails() {
    let ws = Workspace::new("", "%%1%%");

    Command::cargo_bin("mm")
        .unwrap()
        .current_dir(ws.path())
        .args(["--config", "absent.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}
