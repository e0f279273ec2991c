use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn humidor(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("humidor").unwrap();
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_command_groups() {
    let dir = TempDir::new().unwrap();
    humidor(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("humidor")
                .and(predicate::str::contains("cigar"))
                .and(predicate::str::contains("journal"))
                .and(predicate::str::contains("dashboard")),
        );
}

#[test]
fn test_unknown_panel_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    humidor(&dir)
        .args(["dashboard", "--panel", "pie-chart"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pie-chart"));
}

#[test]
fn test_errors_go_to_stderr_with_prefix() {
    let dir = TempDir::new().unwrap();
    humidor(&dir).arg("init").assert().success();

    humidor(&dir)
        .args(["cigar", "show", "no-such-cigar"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error:").and(predicate::str::contains("no-such-cigar")));
}

#[test]
fn test_negative_adjustments_parse_as_numbers() {
    let dir = TempDir::new().unwrap();
    humidor(&dir).arg("init").assert().success();

    // The cigar does not exist; what matters is that "-2" is not read as a flag
    humidor(&dir)
        .args(["cigar", "adjust", "missing", "-2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn test_cigar_list_help_describes_filters() {
    let dir = TempDir::new().unwrap();
    humidor(&dir)
        .args(["cigar", "list", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Match name or brand")
                .and(predicate::str::contains("--brand"))
                .and(predicate::str::contains("binder").not()),
        );
}

#[test]
fn test_brand_and_search_are_exclusive() {
    let dir = TempDir::new().unwrap();
    humidor(&dir)
        .args(["cigar", "list", "--brand", "Padron", "--search", "1964"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
