//! Path constructors: `a`, `a.b`, `geo.vec.Vec2`.
//!
//! Paths are flat: segments and dots interleave as direct children, which
//! makes concatenation a child-sequence splice.

use salsa::Database;
use veld_green::SyntaxKind::*;
use veld_green::ast::{Node as _, Path, PathSegment};

use crate::builder::NodeBuilder;
use crate::error::{MakeError, Result};
use crate::tokens;

pub fn path_segment<'db>(db: &'db dyn Database, name: &str) -> Result<PathSegment<'db>> {
    let mut b = NodeBuilder::new(db, PATH_SEGMENT);
    b.token(tokens::name(db, name)?);
    Ok(b.finish_cast())
}

pub fn path_unqualified<'db>(db: &'db dyn Database, segment: PathSegment<'db>) -> Path<'db> {
    let mut b = NodeBuilder::new(db, PATH);
    b.node(segment.syntax());
    b.finish_cast()
}

pub fn path_from_segments<'db>(
    db: &'db dyn Database,
    segments: impl IntoIterator<Item = PathSegment<'db>>,
) -> Result<Path<'db>> {
    let mut b = NodeBuilder::new(db, PATH);
    let mut count = 0;

    for segment in segments {
        if count > 0 {
            b.fixed(DOT);
        }
        b.node(segment.syntax());
        count += 1;
    }

    if count == 0 {
        return Err(MakeError::EmptyList { kind: PATH });
    }

    Ok(b.finish_cast())
}

pub fn path_from_names<'db>(db: &'db dyn Database, names: &[&str]) -> Result<Path<'db>> {
    let mut segments = Vec::with_capacity(names.len());
    for name in names {
        segments.push(path_segment(db, name)?);
    }
    path_from_segments(db, segments)
}

/// Appends one more segment to an existing path.
pub fn path_qualified<'db>(
    db: &'db dyn Database,
    qualifier: Path<'db>,
    segment: PathSegment<'db>,
) -> Path<'db> {
    let mut b = NodeBuilder::new(db, PATH);
    b.extend_raw(qualifier.syntax().children(db).iter().copied());
    b.fixed(DOT);
    b.node(segment.syntax());
    b.finish_cast()
}

/// Joins two paths into one, `lhs` first.
pub fn path_concat<'db>(db: &'db dyn Database, lhs: Path<'db>, rhs: Path<'db>) -> Path<'db> {
    let mut b = NodeBuilder::new(db, PATH);
    b.extend_raw(lhs.syntax().children(db).iter().copied());
    b.fixed(DOT);
    b.extend_raw(rhs.syntax().children(db).iter().copied());
    b.finish_cast()
}

pub(crate) fn is_single_segment<'db>(db: &'db dyn Database, path: Path<'db>) -> bool {
    path.segments(db).count() == 1
}
