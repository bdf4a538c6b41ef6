//! Import table and collision resolution properties.

use kubegen_cli::imports::resolver::{self, COLLISION_SUFFIX};
use kubegen_cli::imports::{ImportIdentifier, ImportPath, ImportTable};

fn path(p: &str) -> ImportPath {
    ImportPath::new(p).unwrap()
}

fn ident(i: &str) -> ImportIdentifier {
    ImportIdentifier::sanitize(i)
}

#[test]
fn collision_renames_newcomer_only() {
    let mut table = ImportTable::default();
    table.insert(path("pkgA"), ident("foo"));

    let table = resolver::merge(table, path("pkgB"), ident("foo"));

    assert_eq!(table.identifier_for(&path("pkgA")), Some(&ident("foo")));
    assert_eq!(
        table.identifier_for(&path("pkgB")),
        Some(&ident(&format!("foo{COLLISION_SUFFIX}")))
    );
}

#[test]
fn merging_twice_matches_merging_once() {
    let once = resolver::merge(ImportTable::base(), path("k8s.io/api/apps/v1"), ident("appsv1"));
    let twice = resolver::merge(once.clone(), path("k8s.io/api/apps/v1"), ident("appsv1"));
    assert_eq!(once, twice);
}

#[test]
fn requests_do_not_share_tables() {
    let first = resolver::merge(ImportTable::base(), path("k8s.io/api/apps/v1"), ident("appsv1"));
    let second =
        resolver::merge(ImportTable::base(), path("k8s.io/api/batch/v1"), ident("batchv1"));

    assert!(!first.contains_path(&path("k8s.io/api/batch/v1")));
    assert!(!second.contains_path(&path("k8s.io/api/apps/v1")));
    assert!(!ImportTable::base().contains_path(&path("k8s.io/api/apps/v1")));
}

#[test]
fn unaliased_collision_gets_suffix() {
    // Base entries without an alias hold the empty identifier
    let table = resolver::merge(ImportTable::base(), path("example.com/x"), ident("-"));
    assert_eq!(table.identifier_for(&path("example.com/x")), Some(&ident("api")));
}

#[test]
fn entries_follow_path_order() {
    let table = resolver::merge(ImportTable::base(), path("aaa.io/first"), ident("first"));
    let table = resolver::merge(table, path("zzz.io/last"), ident("last"));

    let entries = table.entries();
    assert_eq!(entries.first().unwrap().path.as_str(), "aaa.io/first");
    assert_eq!(entries.last().unwrap().path.as_str(), "zzz.io/last");
    assert_eq!(entries, table.entries());
}
