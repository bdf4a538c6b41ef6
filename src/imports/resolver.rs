//! Identifier collision resolution.
//!
//! Import identifiers must be unique within a generated file. When a new
//! package wants an identifier another package already holds, the newcomer
//! gets [`COLLISION_SUFFIX`] appended, once. The renamed identifier is not
//! checked again: if `<ident>api` is also taken, the table ends up with a
//! duplicate identifier.

use super::{ImportIdentifier, ImportPath, ImportTable};

/// Appended to an identifier already bound to a different path.
pub const COLLISION_SUFFIX: &str = "api";

/// The identifier `path` should use given what `table` already holds.
///
/// Single pass over the table; no rename when `ident` is unbound or already
/// bound to `path` itself.
#[must_use]
pub fn disambiguate(
    table: &ImportTable,
    path: &ImportPath,
    ident: ImportIdentifier,
) -> ImportIdentifier {
    let taken = table
        .iter()
        .any(|(existing_path, existing)| *existing == ident && existing_path != path);
    if taken {
        let renamed = ident.with_suffix(COLLISION_SUFFIX);
        tracing::debug!(
            "Import identifier {:?} already in use, importing {} as {:?}",
            ident.as_str(),
            path,
            renamed.as_str()
        );
        renamed
    } else {
        ident
    }
}

/// Merge `(path, ident)` into a request's own table and return it.
///
/// The table is taken by value: callers hand over their private copy and the
/// shared base imports are never touched.
#[must_use]
pub fn merge(mut table: ImportTable, path: ImportPath, ident: ImportIdentifier) -> ImportTable {
    let ident = disambiguate(&table, &path, ident);
    table.insert(path, ident);
    table
}
