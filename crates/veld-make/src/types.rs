//! Type constructors.

use salsa::Database;
use veld_green::SyntaxKind::*;
use veld_green::ast::{GenericArgList, Node as _, Path, Type};

use crate::builder::{NodeBuilder, cast_node};
use crate::error::Result;
use crate::lists;
use crate::paths;

pub fn ty_path<'db>(db: &'db dyn Database, path: Path<'db>) -> Type<'db> {
    let mut b = NodeBuilder::new(db, PATH_TYPE);
    b.node(path.syntax());
    b.finish_cast()
}

pub fn ty_name<'db>(db: &'db dyn Database, name: &str) -> Result<Type<'db>> {
    Ok(ty_path(db, paths::path_unqualified(db, paths::path_segment(db, name)?)))
}

/// `List[T]`: a path type with generic arguments.
pub fn ty_generic<'db>(
    db: &'db dyn Database,
    path: Path<'db>,
    args: GenericArgList<'db>,
) -> Type<'db> {
    let mut b = NodeBuilder::new(db, PATH_TYPE);
    b.node(path.syntax());
    b.node(args.syntax());
    b.finish_cast()
}

pub fn ty_unit<'db>(db: &'db dyn Database) -> Type<'db> {
    let mut b = NodeBuilder::new(db, TUPLE_TYPE);
    b.fixed(LEFT_PAREN);
    b.fixed(RIGHT_PAREN);
    b.finish_cast()
}

pub fn ty_tuple<'db>(
    db: &'db dyn Database,
    fields: impl IntoIterator<Item = Type<'db>>,
) -> Type<'db> {
    let fields: Vec<_> = fields.into_iter().map(Type::syntax).collect();
    if fields.is_empty() {
        return ty_unit(db);
    }

    // `(T)` already reparses as a one-element tuple type; no trailing comma.
    let node = lists::separated(
        db,
        TUPLE_TYPE,
        Some((LEFT_PAREN, RIGHT_PAREN)),
        COMMA,
        fields,
        lists::TrailingSeparator::Never,
    );
    cast_node(db, node)
}

pub fn ty_array<'db>(db: &'db dyn Database, element: Type<'db>) -> Type<'db> {
    let mut b = NodeBuilder::new(db, ARRAY_TYPE);
    b.fixed(LEFT_BRACKET);
    b.node(element.syntax());
    b.fixed(RIGHT_BRACKET);
    b.finish_cast()
}

pub fn ty_placeholder<'db>(db: &'db dyn Database) -> Type<'db> {
    let mut b = NodeBuilder::new(db, INFER_TYPE);
    b.fixed(UNDERSCORE);
    b.finish_cast()
}
