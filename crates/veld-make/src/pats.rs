//! Pattern constructors.

use salsa::Database;
use veld_green::SyntaxKind::*;
use veld_green::ast::{Node as _, Pat, Path, RecordPatField, RecordPatFieldList};

use crate::builder::{NodeBuilder, cast_node};
use crate::error::{MakeError, Result};
use crate::fragment;
use crate::lists;
use crate::tokens;

pub fn wildcard_pat<'db>(db: &'db dyn Database) -> Pat<'db> {
    let mut b = NodeBuilder::new(db, WILDCARD_PAT);
    b.fixed(UNDERSCORE);
    b.finish_cast()
}

pub fn ident_pat<'db>(db: &'db dyn Database, name: &str) -> Result<Pat<'db>> {
    let mut b = NodeBuilder::new(db, IDENT_PAT);
    b.token(tokens::name(db, name)?);
    Ok(b.finish_cast())
}

/// A literal pattern from its text, e.g. `-1` or `"two"`.
///
/// Literal patterns are too lexical to assemble structurally, so the text is
/// routed through the fragment parser; text that does not reparse as a
/// literal pattern reports a reparse error.
pub fn literal_pat<'db>(db: &'db dyn Database, text: &str) -> Result<Pat<'db>> {
    let pat = fragment::pat_from_text(db, text)?;
    if pat.syntax().kind(db) != LITERAL_PAT {
        return Err(MakeError::ReparseKind {
            expected: "a literal pattern",
            found: pat.syntax().kind(db),
        });
    }
    Ok(pat)
}

pub fn tuple_pat<'db>(
    db: &'db dyn Database,
    pats: impl IntoIterator<Item = Pat<'db>>,
) -> Pat<'db> {
    let items: Vec<_> = pats.into_iter().map(Pat::syntax).collect();
    cast_node(db, lists::tuple_like(db, TUPLE_PAT, items))
}

pub fn paren_pat<'db>(db: &'db dyn Database, pat: Pat<'db>) -> Pat<'db> {
    let mut b = NodeBuilder::new(db, PAREN_PAT);
    b.fixed(LEFT_PAREN);
    b.node(pat.syntax());
    b.fixed(RIGHT_PAREN);
    b.finish_cast()
}

/// A path pattern; a single-segment path is an identifier binding, so that
/// case collapses to an `IDENT_PAT` the way the reparsed text would.
pub fn path_pat<'db>(db: &'db dyn Database, path: Path<'db>) -> Pat<'db> {
    let mut segments = path.segments(db);
    let first = segments.next();
    let rest = segments.next();

    if let (Some(only), None) = (first, rest) {
        let mut b = NodeBuilder::new(db, IDENT_PAT);
        if let Some(name) = only.name(db) {
            b.token(name);
        }
        return b.finish_cast();
    }

    let mut b = NodeBuilder::new(db, PATH_PAT);
    b.node(path.syntax());
    b.finish_cast()
}

pub fn rest_pat<'db>(db: &'db dyn Database) -> Pat<'db> {
    let mut b = NodeBuilder::new(db, REST_PAT);
    b.fixed(DOT2);
    b.finish_cast()
}

/// `Point { x: a, .. }`.
pub fn record_pat<'db>(
    db: &'db dyn Database,
    path: Path<'db>,
    fields: RecordPatFieldList<'db>,
) -> Pat<'db> {
    let mut b = NodeBuilder::new(db, RECORD_PAT);
    b.node(path.syntax());
    b.space();
    b.node(fields.syntax());
    b.finish_cast()
}

/// One `name: pat` field; `None` renders the shorthand `name`.
pub fn record_pat_field<'db>(
    db: &'db dyn Database,
    name: &str,
    pat: Option<Pat<'db>>,
) -> Result<RecordPatField<'db>> {
    let mut b = NodeBuilder::new(db, RECORD_PAT_FIELD);
    b.token(tokens::name(db, name)?);
    if let Some(pat) = pat {
        b.fixed(COLON);
        b.node(pat.syntax());
    }
    Ok(b.finish_cast())
}

/// `Rgb(r, g, b)`.
pub fn tuple_struct_pat<'db>(
    db: &'db dyn Database,
    path: Path<'db>,
    pats: impl IntoIterator<Item = Pat<'db>>,
) -> Pat<'db> {
    let mut b = NodeBuilder::new(db, TUPLE_STRUCT_PAT);
    b.node(path.syntax());
    b.fixed(LEFT_PAREN);

    let pats: Vec<_> = pats.into_iter().collect();
    let last = pats.len().checked_sub(1);
    for (index, pat) in pats.into_iter().enumerate() {
        b.node(pat.syntax());
        if Some(index) != last {
            b.fixed(COMMA);
        }
    }

    b.fixed(RIGHT_PAREN);
    b.finish_cast()
}
