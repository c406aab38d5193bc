//! Item constructors: functions, structs, enums, imports, and modules.

use salsa::Database;
use veld_green::SyntaxKind::*;
use veld_green::ast::{
    BlockExpr, Enum, Fn, GenericParamList, Item, Module, Node as _, Param, ParamList, Path,
    RecordField, RecordFieldList, Struct, TupleField, TupleFieldList, Type, TypeParam, Use,
    UseTree, UseTreeList, Variant, VariantList,
};

use crate::builder::NodeBuilder;
use crate::error::{MakeError, Result};
use crate::tokens;

/// The body shape of a struct or enum variant.
#[derive(Clone, Copy, Debug)]
pub enum FieldList<'db> {
    Record(RecordFieldList<'db>),
    Tuple(TupleFieldList<'db>),
    Unit,
}

pub fn fn_<'db>(
    db: &'db dyn Database,
    name: &str,
    generic_params: Option<GenericParamList<'db>>,
    params: ParamList<'db>,
    ret_type: Option<Type<'db>>,
    body: BlockExpr<'db>,
) -> Result<Fn<'db>> {
    let mut b = NodeBuilder::new(db, FN);
    b.fixed(FUN_KW);
    b.token(tokens::name(db, name)?);

    if let Some(generic_params) = generic_params {
        b.node(generic_params.syntax());
    }

    b.node(params.syntax());

    if let Some(ret_type) = ret_type {
        b.node(return_type(db, ret_type));
    }

    b.space();
    b.node(body.syntax());
    Ok(b.finish_cast())
}

fn return_type<'db>(db: &'db dyn Database, ty: Type<'db>) -> veld_green::GreenNode<'db> {
    let mut b = NodeBuilder::new(db, RETURN_TYPE);
    b.fixed(COLON);
    b.node(ty.syntax());
    b.finish()
}

/// `name: Type`, a typed function parameter.
pub fn param<'db>(db: &'db dyn Database, name: &str, ty: Type<'db>) -> Result<Param<'db>> {
    let mut b = NodeBuilder::new(db, PARAM);
    b.token(tokens::name(db, name)?);
    b.fixed(COLON);
    b.node(ty.syntax());
    Ok(b.finish_cast())
}

/// A closure parameter; the type ascription is optional there.
pub fn closure_param<'db>(
    db: &'db dyn Database,
    name: &str,
    ty: Option<Type<'db>>,
) -> Result<Param<'db>> {
    let mut b = NodeBuilder::new(db, PARAM);
    b.token(tokens::name(db, name)?);
    if let Some(ty) = ty {
        b.fixed(COLON);
        b.node(ty.syntax());
    }
    Ok(b.finish_cast())
}

pub fn type_param<'db>(db: &'db dyn Database, name: &str) -> Result<TypeParam<'db>> {
    let mut b = NodeBuilder::new(db, TYPE_PARAM);
    b.token(tokens::name(db, name)?);
    Ok(b.finish_cast())
}

pub fn struct_<'db>(
    db: &'db dyn Database,
    name: &str,
    generic_params: Option<GenericParamList<'db>>,
    fields: FieldList<'db>,
) -> Result<Struct<'db>> {
    let mut b = NodeBuilder::new(db, STRUCT);
    b.fixed(STRUCT_KW);
    b.token(tokens::name(db, name)?);

    if let Some(generic_params) = generic_params {
        b.node(generic_params.syntax());
    }

    match fields {
        FieldList::Record(fields) => {
            b.space();
            b.node(fields.syntax());
        }
        FieldList::Tuple(fields) => {
            b.node(fields.syntax());
            b.fixed(SEMICOLON);
        }
        FieldList::Unit => b.fixed(SEMICOLON),
    }

    Ok(b.finish_cast())
}

pub fn record_field<'db>(
    db: &'db dyn Database,
    name: &str,
    ty: Type<'db>,
) -> Result<RecordField<'db>> {
    let mut b = NodeBuilder::new(db, RECORD_FIELD);
    b.token(tokens::name(db, name)?);
    b.fixed(COLON);
    b.node(ty.syntax());
    Ok(b.finish_cast())
}

pub fn tuple_field<'db>(db: &'db dyn Database, ty: Type<'db>) -> TupleField<'db> {
    let mut b = NodeBuilder::new(db, TUPLE_FIELD);
    b.node(ty.syntax());
    b.finish_cast()
}

pub fn enum_<'db>(
    db: &'db dyn Database,
    name: &str,
    generic_params: Option<GenericParamList<'db>>,
    variants: VariantList<'db>,
) -> Result<Enum<'db>> {
    let mut b = NodeBuilder::new(db, ENUM);
    b.fixed(ENUM_KW);
    b.token(tokens::name(db, name)?);

    if let Some(generic_params) = generic_params {
        b.node(generic_params.syntax());
    }

    b.space();
    b.node(variants.syntax());
    Ok(b.finish_cast())
}

/// One enum variant; `FieldList::Unit` renders just the name.
pub fn variant<'db>(
    db: &'db dyn Database,
    name: &str,
    fields: FieldList<'db>,
) -> Result<Variant<'db>> {
    let mut b = NodeBuilder::new(db, VARIANT);
    b.token(tokens::name(db, name)?);

    match fields {
        FieldList::Record(fields) => {
            b.space();
            b.node(fields.syntax());
        }
        FieldList::Tuple(fields) => b.node(fields.syntax()),
        FieldList::Unit => {}
    }

    Ok(b.finish_cast())
}

pub fn use_<'db>(db: &'db dyn Database, tree: UseTree<'db>) -> Use<'db> {
    let mut b = NodeBuilder::new(db, USE);
    b.fixed(USE_KW);
    b.node(tree.syntax());
    b.fixed(SEMICOLON);
    b.finish_cast()
}

/// A use tree: a path, optionally extended by `.{...}` or `.*` (but not
/// both, which the grammar has no spelling for).
pub fn use_tree<'db>(
    db: &'db dyn Database,
    path: Path<'db>,
    list: Option<UseTreeList<'db>>,
    glob: bool,
) -> Result<UseTree<'db>> {
    if glob && list.is_some() {
        return Err(MakeError::GlobAndList);
    }

    let mut b = NodeBuilder::new(db, USE_TREE);
    b.node(path.syntax());

    if glob {
        b.fixed(DOT);
        // Spaced like a path segment, not like the binary operator.
        b.fixed_tight(STAR);
    } else if let Some(list) = list {
        b.fixed(DOT);
        b.node(list.syntax());
    }

    Ok(b.finish_cast())
}

/// A whole module from its items, blank-line separated.
pub fn module<'db>(
    db: &'db dyn Database,
    items: impl IntoIterator<Item = Item<'db>>,
) -> Module<'db> {
    let mut b = NodeBuilder::new(db, MODULE);

    let mut first = true;
    for item in items {
        if !first {
            b.token(tokens::blank_line(db));
        }
        b.node(item.syntax());
        first = false;
    }

    b.token(tokens::newline(db));
    b.finish_cast()
}
