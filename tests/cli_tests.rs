use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn semparar_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("semparar"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_config(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("semparar.toml");
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_help() {
    semparar_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sem Parar toll invoice client"))
        .stdout(predicate::str::contains("--extract"))
        .stdout(predicate::str::contains("--month"));
}

#[test]
fn test_version() {
    semparar_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("semparar"));
}

#[test]
fn test_config_is_required() {
    semparar_cmd().arg("--total").assert().failure();
}

#[test]
fn test_missing_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nonexistent.toml");

    semparar_cmd()
        .args(["--total", config_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_malformed_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(&temp_dir, "cpf = \"123\"\n");

    semparar_cmd()
        .args(["--total", config_path.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_no_flags_prints_nothing() {
    let temp_dir = TempDir::new().unwrap();
    // unreachable service: nothing may be requested when nothing is asked for
    let config_path = write_config(
        &temp_dir,
        "cpf = \"123\"\npassword = \"secret\"\n\n[service]\nbase_url = \"http://127.0.0.1:1\"\n",
    );

    semparar_cmd()
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_unreachable_service() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(
        &temp_dir,
        "cpf = \"123\"\npassword = \"secret\"\n\n[service]\nbase_url = \"http://127.0.0.1:1\"\ntimeout_secs = 5\n",
    );

    semparar_cmd()
        .args(["--total", "--extract", config_path.as_str()])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to connect"));
}

#[test]
fn test_failed_month_change_prints_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(
        &temp_dir,
        "cpf = \"123\"\npassword = \"secret\"\n\n[service]\nbase_url = \"http://127.0.0.1:1\"\ntimeout_secs = 5\n",
    );

    semparar_cmd()
        .args(["--month", "3", "--total", "--extract", config_path.as_str()])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stdout(predicate::str::contains("Total:").not())
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_init_writes_template() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("conf").join("semparar.toml");

    semparar_cmd()
        .args(["--init", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config template"));

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("cpf = "));
    assert!(content.contains("password = "));
}

#[test]
fn test_init_fails_if_exists() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(&temp_dir, "cpf = \"1\"\npassword = \"2\"\n");

    semparar_cmd()
        .args(["--init", config_path.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
