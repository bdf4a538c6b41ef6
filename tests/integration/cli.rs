//! The `kubegen add controller` command.

use assert_cmd::Command;
use kubegen_cli::test_utils::TestProject;
use predicates::prelude::*;

const CONTROLLER: &str = "pkg/controller/appservice/v1alpha1/appservice_controller.go";

fn add_controller(project: &TestProject) -> Command {
    let mut cmd = Command::cargo_bin("kubegen").unwrap();
    cmd.current_dir(project.path())
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .args(["add", "controller", "--api-version", "app.example.com/v1alpha1", "--kind", "AppService"]);
    cmd
}

#[test]
fn test_add_controller_creates_file() {
    let project = TestProject::new().unwrap();

    add_controller(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("appservice_controller.go"));

    assert!(project.read_file(CONTROLLER).unwrap().contains("type ReconcileAppService struct"));
}

#[test]
fn test_dry_run_prints_without_writing() {
    let project = TestProject::new().unwrap();

    add_controller(&project)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("package v1alpha1"))
        .stdout(predicate::str::contains(
            "appv1alpha1 \"github.com/example-inc/app-operator/pkg/apis/app/v1alpha1\"",
        ));

    assert!(!project.file_exists(CONTROLLER));
}

#[test]
fn test_existing_file_fails() {
    let project = TestProject::new().unwrap();
    project.write_file(CONTROLLER, "keep me").unwrap();

    add_controller(&project)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(project.read_file(CONTROLLER).unwrap(), "keep me");
}

#[test]
fn test_empty_identifier_fails() {
    let project = TestProject::new().unwrap();

    add_controller(&project)
        .args(["--custom-api-import", "k8s.io/api/rbac/v1="])
        .assert()
        .failure()
        .stderr(predicate::str::contains("identifier is empty"));

    assert!(!project.file_exists(CONTROLLER));
}

#[test]
fn test_project_dir_flag() {
    let project = TestProject::new().unwrap();
    let elsewhere = tempfile::TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("kubegen").unwrap();
    cmd.current_dir(elsewhere.path())
        .arg("--project-dir")
        .arg(project.path())
        .args(["add", "controller", "--api-version", "app.example.com/v1alpha1", "--kind", "AppService"])
        .assert()
        .success();

    assert!(project.file_exists(CONTROLLER));
}

#[test]
fn test_missing_project_files_fails() {
    let empty = tempfile::TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("kubegen").unwrap();
    cmd.current_dir(empty.path())
        .args(["add", "controller", "--api-version", "app.example.com/v1alpha1", "--kind", "AppService"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("go.mod"));
}
