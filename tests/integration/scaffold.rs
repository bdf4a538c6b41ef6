//! Scaffolding into a real project directory.

use kubegen_cli::config::ProjectConfig;
use kubegen_cli::core::KubegenError;
use kubegen_cli::scaffold::{ControllerKind, Scaffold, ScaffoldStatus};
use kubegen_cli::test_utils::{TestProject, app_service, init_test_logging};
use kubegen_cli::utils::LocalFileSystem;
use std::sync::Arc;

const CONTROLLER: &str = "pkg/controller/appservice/v1alpha1/appservice_controller.go";

fn scaffold(project: &TestProject) -> Scaffold {
    let config = ProjectConfig::load(project.path()).unwrap();
    Scaffold::new(config, Arc::new(LocalFileSystem))
}

#[test]
fn test_creates_controller_and_parent_directories() {
    init_test_logging(None);
    let project = TestProject::new().unwrap();

    let outcome = scaffold(&project).execute(&ControllerKind::new(app_service())).unwrap();

    assert_eq!(outcome.status, ScaffoldStatus::Created);
    assert_eq!(outcome.path, project.path().join(CONTROLLER));
    let content = project.read_file(CONTROLLER).unwrap();
    assert!(content.starts_with("package v1alpha1\n"));
}

#[test]
fn test_existing_controller_is_left_untouched() {
    let project = TestProject::new().unwrap();
    project.write_file(CONTROLLER, "// hand written\n").unwrap();

    let err = scaffold(&project).execute(&ControllerKind::new(app_service())).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<KubegenError>(),
        Some(KubegenError::AlreadyExists { .. })
    ));
    assert!(err.to_string().contains("already exists"));
    assert_eq!(project.read_file(CONTROLLER).unwrap(), "// hand written\n");
}

#[test]
fn test_explicit_path_is_honored() {
    let project = TestProject::new().unwrap();

    let outcome = scaffold(&project)
        .execute(&ControllerKind::new(app_service()).with_path("internal/appservice.go"))
        .unwrap();

    assert_eq!(outcome.path, project.path().join("internal/appservice.go"));
    assert!(project.file_exists("internal/appservice.go"));
    assert!(!project.file_exists(CONTROLLER));
}

#[test]
fn test_invalid_custom_import_writes_nothing() {
    let project = TestProject::new().unwrap();

    let err = scaffold(&project)
        .execute(&ControllerKind::new(app_service()).with_custom_import("k8s.io/api/rbac/v1="))
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<KubegenError>(),
        Some(KubegenError::EmptyImportIdentifier { .. })
    ));
    assert!(!project.file_exists(CONTROLLER));
}

#[test]
fn test_config_file_takes_precedence_over_go_mod() {
    let project = TestProject::new().unwrap();
    project.write_file("kubegen.toml", "repo = \"example.com/other/operator\"\n").unwrap();

    let rendered = scaffold(&project).render(&ControllerKind::new(app_service())).unwrap();

    assert!(rendered.content.contains("\"example.com/other/operator/pkg/apis/app/v1alpha1\""));
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_destination_is_left_untouched() {
    let project = TestProject::new().unwrap();
    let link = project.path().join("ctrl.go");
    std::os::unix::fs::symlink(project.path().join("nowhere.go"), &link).unwrap();

    let err = scaffold(&project)
        .execute(&ControllerKind::new(app_service()).with_path("ctrl.go"))
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<KubegenError>(),
        Some(KubegenError::AlreadyExists { .. })
    ));
    assert!(std::fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
}
