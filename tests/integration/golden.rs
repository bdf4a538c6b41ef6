//! Rendering of the reference `AppService` controller.

use kubegen_cli::config::ProjectConfig;
use kubegen_cli::scaffold::{ControllerKind, Scaffold};
use kubegen_cli::test_utils::{MemoryFileSystem, TEST_REPO, app_service, init_test_logging};
use std::path::PathBuf;
use std::sync::Arc;

const GOLDEN: &str = include_str!("../fixtures/appservice_controller.go.golden");

fn scaffold() -> Scaffold {
    Scaffold::new(ProjectConfig::new(TEST_REPO), Arc::new(MemoryFileSystem::default()))
}

#[test]
fn test_default_controller_matches_golden() {
    init_test_logging(None);

    let rendered = scaffold().render(&ControllerKind::new(app_service())).unwrap();

    assert_eq!(
        rendered.path,
        PathBuf::from("pkg/controller/appservice/v1alpha1/appservice_controller.go")
    );
    assert_eq!(rendered.content, GOLDEN);
}

#[test]
fn test_custom_import_replaces_project_api() {
    let rendered = scaffold()
        .render(&ControllerKind::new(app_service()).with_custom_import("k8s.io/api/apps/v1=appsv1"))
        .unwrap();

    assert!(rendered.content.contains("\tappsv1 \"k8s.io/api/apps/v1\"\n"));
    assert!(rendered.content.contains("&appsv1.AppService{}"));
    assert!(!rendered.content.contains("pkg/apis/app/v1alpha1"));
}

#[test]
fn test_derived_identifier_from_path() {
    let rendered = scaffold()
        .render(&ControllerKind::new(app_service()).with_custom_import("k8s.io/api/batch/v1"))
        .unwrap();

    assert!(rendered.content.contains("\tbatchv1 \"k8s.io/api/batch/v1\"\n"));
    assert!(rendered.content.contains("&batchv1.AppService{}"));
}
