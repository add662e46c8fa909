use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

const SNAPSHOT: &str = r#"[
  {
    "name": "browser/github",
    "password": "hunter2",
    "fields": {
      "login": "octocat",
      "url": "https://github.com",
      "icon": "github.png",
      "autotype_enabled": "True",
      "pin": "1234"
    }
  },
  {
    "name": "vault/amazon",
    "password": "vault-only"
  },
  {
    "name": "browser/amazon",
    "password": "pw, \"quoted\"",
    "body": "otpauth://totp/amazon?secret=JBSWY3DP",
    "fields": {
      "login": "",
      "user": "bob",
      "username": "carol",
      "notes": "line1, \"x\""
    }
  }
]"#;

/// Run passexport isolated from the caller's config and `CSV` variable.
fn passexport(dir: &assert_fs::TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("passexport");
    cmd.current_dir(dir.path())
        .env_remove("CSV")
        .env_remove("PASSEXPORT_CONFIG")
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"));
    cmd
}

/// Create a temp dir holding `entries.json`.
fn setup() -> assert_fs::TempDir {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("entries.json").write_str(SNAPSHOT).unwrap();
    dir
}

/// Parse CSV output into rows, header excluded.
fn csv_rows(stdout: &[u8]) -> Vec<Vec<String>> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(stdout)
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect()
}

// ─── Text output ────────────────────────────────────────────────

#[test]
fn text_output_lists_selected_entries() {
    let dir = setup();

    passexport(&dir)
        .args(["--store-file", "entries.json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("github\n"))
        .stdout(predicate::str::contains("\t            username: octocat\n"))
        .stdout(predicate::str::contains("\t                 url: https://github.com\n"))
        .stdout(predicate::str::contains("\t                 pin: 1234\n"))
        .stdout(predicate::str::contains("\namazon\n"))
        .stdout(predicate::str::contains("\t            username: bob\n"))
        .stdout(predicate::str::contains("body: otpauth://totp/amazon"))
        .stdout(predicate::str::contains("vault-only").not())
        .stdout(predicate::str::contains("icon").not())
        .stdout(predicate::str::contains("carol").not());
}

#[test]
fn summary_goes_to_stderr() {
    let dir = setup();

    passexport(&dir)
        .args(["--store-file", "entries.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("record(s) exported").not())
        .stderr(predicate::str::contains("2 record(s) exported"))
        .stderr(predicate::str::contains("1 entries outside the prefix"));
}

#[test]
fn quiet_mode_prints_no_diagnostics() {
    let dir = setup();

    passexport(&dir)
        .args(["--store-file", "entries.json", "--quiet"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn verbose_mode_names_each_record() {
    let dir = setup();

    passexport(&dir)
        .args(["--store-file", "entries.json", "--verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Exported github"))
        .stderr(predicate::str::contains("Exported amazon"));
}

// ─── CSV output ─────────────────────────────────────────────────

#[test]
fn csv_flag_writes_header_and_rows_in_list_order() {
    let dir = setup();

    let output = passexport(&dir)
        .args(["--store-file", "entries.json", "--csv"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    assert!(stdout.starts_with(
        "Title,Username,Email,Password,Website,TOTP Secret Key,*Backup Codes,*Seed,*Comment,*Body\n"
    ));

    let rows = csv_rows(&output.stdout);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], "github");
    assert_eq!(rows[1][0], "amazon");
}

#[test]
fn csv_values_round_trip() {
    let dir = setup();

    let output = passexport(&dir)
        .args(["--store-file", "entries.json", "--csv"])
        .output()
        .unwrap();
    let rows = csv_rows(&output.stdout);

    let github = &rows[0];
    assert_eq!(github[1], "octocat");
    assert_eq!(github[3], "hunter2");
    assert_eq!(github[4], "https://github.com");
    assert_eq!(github[8], "pin: 1234");
    assert_eq!(github[9], "");

    let amazon = &rows[1];
    assert_eq!(amazon[1], "bob");
    assert_eq!(amazon[3], "pw, \"quoted\"");
    assert_eq!(amazon[5], "");
    assert_eq!(amazon[7], "");
    assert_eq!(amazon[8], "notes: line1, \"x\"");
    assert_eq!(amazon[9], "otpauth://totp/amazon?secret=JBSWY3DP");
}

#[test]
fn csv_env_variable_selects_csv() {
    let dir = setup();

    passexport(&dir)
        .env("CSV", "1")
        .args(["--store-file", "entries.json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Title,Username"));
}

#[test]
fn csv_env_variable_with_any_value_selects_csv() {
    for value in ["0", "false"] {
        let dir = setup();

        passexport(&dir)
            .env("CSV", value)
            .args(["--store-file", "entries.json"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Title,Username"));
    }
}

#[test]
fn empty_csv_env_variable_keeps_text() {
    let dir = setup();

    passexport(&dir)
        .env("CSV", "")
        .args(["--store-file", "entries.json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("github\n"));
}

#[test]
fn text_flag_overrides_csv_env_variable() {
    let dir = setup();

    passexport(&dir)
        .env("CSV", "1")
        .args(["--store-file", "entries.json", "--text"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("github\n"));
}

// ─── Selection ──────────────────────────────────────────────────

#[test]
fn custom_prefix_selects_other_namespace() {
    let dir = setup();

    let output = passexport(&dir)
        .args(["--store-file", "entries.json", "--csv", "--prefix", "vault/"])
        .output()
        .unwrap();
    let rows = csv_rows(&output.stdout);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "amazon");
    assert_eq!(rows[0][3], "vault-only");
}

#[test]
fn no_matching_entries_writes_header_only() {
    let dir = setup();

    passexport(&dir)
        .args(["--store-file", "entries.json", "--csv", "--prefix", "email/"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "Title,Username,Email,Password,Website,TOTP Secret Key,*Backup Codes,*Seed,*Comment,*Body\n",
        ));
}

#[test]
fn empty_prefix_is_rejected() {
    let dir = setup();

    passexport(&dir)
        .args(["--store-file", "entries.json", "--prefix", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("prefix must not be empty"));
}

// ─── Errors ─────────────────────────────────────────────────────

#[test]
fn missing_store_file_fails_before_output() {
    let dir = assert_fs::TempDir::new().unwrap();

    passexport(&dir)
        .args(["--store-file", "missing.json", "--csv"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn malformed_store_file_fails() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("entries.json").write_str("{\"name\": 1}").unwrap();

    passexport(&dir)
        .args(["--store-file", "entries.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid store file"));
}

#[test]
fn retrieval_error_aborts_and_names_the_entry() {
    let dir = setup();

    // Snapshots only hold the latest revision, so every read fails.
    passexport(&dir)
        .args(["--store-file", "entries.json", "--csv", "--revision", "-1"])
        .assert()
        .failure()
        .stdout(predicate::str::starts_with("Title,Username"))
        .stdout(predicate::str::contains("github").not())
        .stderr(predicate::str::contains("browser/github"));
}

#[test]
fn skip_errors_continues_past_failures() {
    let dir = setup();

    passexport(&dir)
        .args([
            "--store-file",
            "entries.json",
            "--revision",
            "-1",
            "--skip-errors",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Skipped 'browser/github'"))
        .stderr(predicate::str::contains("Skipped 'browser/amazon'"))
        .stderr(predicate::str::contains("2 skipped"));
}

#[test]
fn missing_gopass_binary_fails() {
    let dir = assert_fs::TempDir::new().unwrap();

    passexport(&dir)
        .args(["--gopass", "/nonexistent/gopass-binary"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Secret store not available"));
}
