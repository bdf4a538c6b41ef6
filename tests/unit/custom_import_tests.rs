//! Custom import parsing properties.

use kubegen_cli::core::KubegenError;
use kubegen_cli::imports::CustomImportSpec;

fn parse(raw: &str) -> Result<(String, String), KubegenError> {
    CustomImportSpec::parse(raw)
        .map(|spec| (spec.path.as_str().to_string(), spec.ident.as_str().to_string()))
}

#[test]
fn derived_identifier_joins_last_two_segments() {
    let cases = [
        ("k8s.io/api/apps/v1", "appsv1"),
        ("example.com/Group/V2Beta1", "groupv2beta1"),
        ("a/b", "ab"),
        ("github.com/org/my-api.io/v1", "myapiiov1"),
        ("single", "single"),
        ("Single-Seg.ment", "singlesegment"),
    ];
    for (path, ident) in cases {
        assert_eq!(parse(path).unwrap(), (path.to_string(), ident.to_string()), "path {path:?}");
    }
}

#[test]
fn explicit_identifier_keeps_case_and_drops_punctuation() {
    assert_eq!(parse("k8s.io/api/rbac/v1=Rbac.V1").unwrap().1, "RbacV1");
    assert_eq!(parse("k8s.io/api/rbac/v1=rbac_v1").unwrap().1, "rbac_v1");
}

#[test]
fn trailing_separator_is_an_error() {
    for path in ["k8s.io/api/rbac/v1", "pkg", "a/b/c"] {
        let raw = format!("{path}=");
        assert!(
            matches!(parse(&raw), Err(KubegenError::EmptyImportIdentifier { .. })),
            "input {raw:?}"
        );
    }
}

#[test]
fn missing_path_is_an_error() {
    for raw in ["", "=id", "  =id", "\t"] {
        assert!(matches!(parse(raw), Err(KubegenError::EmptyImportPath { .. })), "input {raw:?}");
    }
}

#[test]
fn extra_separators_ignored() {
    assert_eq!(
        parse("k8s.io/api/rbac/v1=rbacv1=").unwrap(),
        ("k8s.io/api/rbac/v1".to_string(), "rbacv1".to_string())
    );
    assert_eq!(
        parse("k8s.io/api/rbac/v1=rbacv1=other=more").unwrap(),
        ("k8s.io/api/rbac/v1".to_string(), "rbacv1".to_string())
    );
}

#[test]
fn error_message_quotes_input() {
    let err = parse("k8s.io/api/rbac/v1=").unwrap_err();
    assert!(err.to_string().contains("\"k8s.io/api/rbac/v1=\""));
}
