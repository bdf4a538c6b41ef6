//! Request isolation under concurrent generation.

use kubegen_cli::config::ProjectConfig;
use kubegen_cli::core::KubegenError;
use kubegen_cli::scaffold::{ControllerKind, Scaffold, generate_batch};
use kubegen_cli::test_utils::{
    MemoryFileSystem, TEST_REPO, TestProject, app_service, init_test_logging,
};
use kubegen_cli::utils::LocalFileSystem;
use std::sync::Arc;

#[tokio::test]
async fn test_batch_requests_do_not_share_imports() {
    init_test_logging(None);
    let fs = Arc::new(MemoryFileSystem::default());
    let scaffold = Scaffold::new(ProjectConfig::new(TEST_REPO).with_project_dir("/project"), fs.clone());

    let requests = vec![
        ControllerKind::new(app_service())
            .with_custom_import("k8s.io/api/apps/v1=appsv1")
            .with_path("apps/controller.go"),
        ControllerKind::new(app_service())
            .with_custom_import("k8s.io/api/batch/v1=batchv1")
            .with_path("batch/controller.go"),
    ];

    let results = generate_batch(&scaffold, requests).await;
    assert_eq!(results.len(), 2);
    let paths: Vec<_> = results.into_iter().map(|r| r.unwrap().path).collect();

    let apps = fs.read(&paths[0]).unwrap();
    let batch = fs.read(&paths[1]).unwrap();
    assert!(apps.contains("appsv1 \"k8s.io/api/apps/v1\""));
    assert!(!apps.contains("batchv1"));
    assert!(batch.contains("batchv1 \"k8s.io/api/batch/v1\""));
    assert!(!batch.contains("appsv1"));
    assert_eq!(fs.write_count(), 2);
}

#[tokio::test]
async fn test_batch_output_matches_sequential_render() {
    let scaffold = Scaffold::new(
        ProjectConfig::new(TEST_REPO).with_project_dir("/project"),
        Arc::new(MemoryFileSystem::default()),
    );
    let expected = scaffold.render(&ControllerKind::new(app_service())).unwrap().content;

    let fs = Arc::new(MemoryFileSystem::default());
    let batch_scaffold =
        Scaffold::new(ProjectConfig::new(TEST_REPO).with_project_dir("/project"), fs.clone());
    let requests: Vec<_> = (0..8)
        .map(|i| ControllerKind::new(app_service()).with_path(format!("out/{i}.go")))
        .collect();

    for result in generate_batch(&batch_scaffold, requests).await {
        let outcome = result.unwrap();
        assert_eq!(fs.read(&outcome.path).unwrap(), expected);
    }
}

#[tokio::test]
async fn test_failed_request_does_not_affect_others() {
    let fs = Arc::new(MemoryFileSystem::default());
    let scaffold = Scaffold::new(ProjectConfig::new(TEST_REPO).with_project_dir("/project"), fs.clone());

    let requests = vec![
        ControllerKind::new(app_service()).with_custom_import("=broken").with_path("a.go"),
        ControllerKind::new(app_service()).with_path("b.go"),
    ];

    let results = generate_batch(&scaffold, requests).await;
    assert!(results[0].is_err());
    assert!(results[1].is_ok());
    assert_eq!(fs.write_count(), 1);
}

#[tokio::test]
async fn test_batch_requests_for_one_path_create_it_once() {
    let project = TestProject::new().unwrap();
    let config = ProjectConfig::load(project.path()).unwrap();
    let scaffold = Scaffold::new(config, Arc::new(LocalFileSystem));

    for round in 0..10 {
        let target = format!("same/{round}.go");
        let requests = vec![
            ControllerKind::new(app_service())
                .with_custom_import("k8s.io/api/apps/v1=appsv1")
                .with_path(&target),
            ControllerKind::new(app_service())
                .with_custom_import("k8s.io/api/batch/v1=batchv1")
                .with_path(&target),
        ];

        let results = generate_batch(&scaffold, requests).await;
        let created = results.iter().filter(|r| r.is_ok()).count();
        let rejected = results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .filter(|e| {
                matches!(e.downcast_ref::<KubegenError>(), Some(KubegenError::AlreadyExists { .. }))
            })
            .count();
        assert_eq!((created, rejected), (1, 1), "round {round}");

        let winner_is_apps = results[0].is_ok();
        let content = project.read_file(&target).unwrap();
        assert_eq!(content.contains("appsv1 \"k8s.io/api/apps/v1\""), winner_is_apps);
        assert_eq!(content.contains("batchv1 \"k8s.io/api/batch/v1\""), !winner_is_apps);
    }
}
