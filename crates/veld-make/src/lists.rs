//! Separator-delimited sequences: argument lists, parameter lists, arm
//! lists, field lists.
//!
//! One generic engine drives them all; each public constructor fixes the
//! delimiters, the separator, the emptiness rule, and (where the grammar
//! leaves a choice) the trailing-separator policy.

use salsa::Database;
use veld_green::SyntaxKind::{self, *};
use veld_green::GreenNode;
use veld_green::ast::{
    ArgList, Expr, GenericArgList, GenericParamList, MatchArm, MatchArmList, Node as _, Param,
    ParamList, RecordExprField, RecordExprFieldList, RecordField, RecordFieldList,
    RecordPatField, RecordPatFieldList, TupleField, TupleFieldList, Type, TypeParam, UseTree,
    UseTreeList, Variant, VariantList,
};

use crate::builder::{NodeBuilder, cast_node};
use crate::error::{MakeError, Result};
use crate::pats;

/// Whether the final element is followed by a separator too.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrailingSeparator {
    Always,
    Never,
}

pub(crate) fn separated<'db>(
    db: &'db dyn Database,
    kind: SyntaxKind,
    delimiters: Option<(SyntaxKind, SyntaxKind)>,
    separator: SyntaxKind,
    items: impl IntoIterator<Item = GreenNode<'db>>,
    trailing: TrailingSeparator,
) -> GreenNode<'db> {
    let items: Vec<_> = items.into_iter().collect();
    let mut b = NodeBuilder::new(db, kind);

    if let Some((open, _)) = delimiters {
        b.fixed(open);
    }

    let last = items.len().checked_sub(1);
    for (index, item) in items.into_iter().enumerate() {
        b.node(item);
        if Some(index) != last || trailing == TrailingSeparator::Always {
            b.fixed(separator);
        }
    }

    if let Some((_, close)) = delimiters {
        b.fixed(close);
    }

    b.finish()
}

/// `(a, b, c)`; zero arguments are legal.
pub fn arg_list<'db>(
    db: &'db dyn Database,
    args: impl IntoIterator<Item = Expr<'db>>,
) -> ArgList<'db> {
    let node = separated(
        db,
        ARG_LIST,
        Some((LEFT_PAREN, RIGHT_PAREN)),
        COMMA,
        args.into_iter().map(Expr::syntax),
        TrailingSeparator::Never,
    );
    cast_node(db, node)
}

/// `(a: Int, b: T)`; zero parameters are legal.
pub fn param_list<'db>(
    db: &'db dyn Database,
    params: impl IntoIterator<Item = Param<'db>>,
) -> ParamList<'db> {
    let node = separated(
        db,
        PARAM_LIST,
        Some((LEFT_PAREN, RIGHT_PAREN)),
        COMMA,
        params.into_iter().map(Param::syntax),
        TrailingSeparator::Never,
    );
    cast_node(db, node)
}

/// `|a, b|` as used by closures; zero parameters render as `||`.
pub fn closure_param_list<'db>(
    db: &'db dyn Database,
    params: impl IntoIterator<Item = Param<'db>>,
) -> ParamList<'db> {
    let params: Vec<_> = params.into_iter().collect();
    let mut b = NodeBuilder::new(db, PARAM_LIST);

    if params.is_empty() {
        b.fixed_tight(PIPE2);
        return b.finish_cast();
    }

    b.fixed_tight(PIPE);
    let last = params.len() - 1;
    for (index, param) in params.into_iter().enumerate() {
        b.node(param.syntax());
        if index != last {
            b.fixed(COMMA);
        }
    }
    b.fixed_tight(PIPE);
    b.finish_cast()
}

/// `[T, U]`; at least one parameter is required.
pub fn generic_param_list<'db>(
    db: &'db dyn Database,
    params: impl IntoIterator<Item = TypeParam<'db>>,
) -> Result<GenericParamList<'db>> {
    let params: Vec<_> = params.into_iter().collect();
    if params.is_empty() {
        return Err(MakeError::EmptyList { kind: GENERIC_PARAM_LIST });
    }

    let node = separated(
        db,
        GENERIC_PARAM_LIST,
        Some((LEFT_BRACKET, RIGHT_BRACKET)),
        COMMA,
        params.into_iter().map(TypeParam::syntax),
        TrailingSeparator::Never,
    );
    Ok(cast_node(db, node))
}

/// `[Str, Int]` attached to a path type; at least one argument is required.
pub fn generic_arg_list<'db>(
    db: &'db dyn Database,
    args: impl IntoIterator<Item = Type<'db>>,
) -> Result<GenericArgList<'db>> {
    let args: Vec<_> = args.into_iter().collect();
    if args.is_empty() {
        return Err(MakeError::EmptyList { kind: GENERIC_ARG_LIST });
    }

    let node = separated(
        db,
        GENERIC_ARG_LIST,
        Some((LEFT_BRACKET, RIGHT_BRACKET)),
        COMMA,
        args.into_iter().map(Type::syntax),
        TrailingSeparator::Never,
    );
    Ok(cast_node(db, node))
}

/// `{ pat => expr, ... }`; a match without arms is not a match.
pub fn match_arm_list<'db>(
    db: &'db dyn Database,
    arms: impl IntoIterator<Item = MatchArm<'db>>,
) -> Result<MatchArmList<'db>> {
    let arms: Vec<_> = arms.into_iter().collect();
    if arms.is_empty() {
        return Err(MakeError::EmptyList { kind: MATCH_ARM_LIST });
    }

    let node = separated(
        db,
        MATCH_ARM_LIST,
        Some((LEFT_BRACE, RIGHT_BRACE)),
        COMMA,
        arms.into_iter().map(MatchArm::syntax),
        TrailingSeparator::Always,
    );
    Ok(cast_node(db, node))
}

/// `{ x: Int, y: Int }` on a struct or variant; zero fields are legal.
pub fn record_field_list<'db>(
    db: &'db dyn Database,
    fields: impl IntoIterator<Item = RecordField<'db>>,
) -> RecordFieldList<'db> {
    let node = separated(
        db,
        RECORD_FIELD_LIST,
        Some((LEFT_BRACE, RIGHT_BRACE)),
        COMMA,
        fields.into_iter().map(RecordField::syntax),
        TrailingSeparator::Never,
    );
    cast_node(db, node)
}

/// `(Int, Str)` on a tuple struct or variant; zero fields are legal.
pub fn tuple_field_list<'db>(
    db: &'db dyn Database,
    fields: impl IntoIterator<Item = TupleField<'db>>,
) -> TupleFieldList<'db> {
    let node = separated(
        db,
        TUPLE_FIELD_LIST,
        Some((LEFT_PAREN, RIGHT_PAREN)),
        COMMA,
        fields.into_iter().map(TupleField::syntax),
        TrailingSeparator::Never,
    );
    cast_node(db, node)
}

/// `{ Red, Rgb(Int) }`; an empty enum is legal.
pub fn variant_list<'db>(
    db: &'db dyn Database,
    variants: impl IntoIterator<Item = Variant<'db>>,
) -> VariantList<'db> {
    let node = separated(
        db,
        VARIANT_LIST,
        Some((LEFT_BRACE, RIGHT_BRACE)),
        COMMA,
        variants.into_iter().map(Variant::syntax),
        TrailingSeparator::Never,
    );
    cast_node(db, node)
}

/// `{ x: 1, y: 2 }` on a record literal, with a caller-chosen trailing
/// separator policy.
pub fn record_expr_field_list<'db>(
    db: &'db dyn Database,
    fields: impl IntoIterator<Item = RecordExprField<'db>>,
    trailing: TrailingSeparator,
) -> RecordExprFieldList<'db> {
    let node = separated(
        db,
        RECORD_EXPR_FIELD_LIST,
        Some((LEFT_BRACE, RIGHT_BRACE)),
        COMMA,
        fields.into_iter().map(RecordExprField::syntax),
        trailing,
    );
    cast_node(db, node)
}

/// `{ x: a, y, .. }` on a record pattern; `rest` appends the `..` marker.
pub fn record_pat_field_list<'db>(
    db: &'db dyn Database,
    fields: impl IntoIterator<Item = RecordPatField<'db>>,
    rest: bool,
) -> RecordPatFieldList<'db> {
    let mut items: Vec<_> = fields.into_iter().map(RecordPatField::syntax).collect();
    if rest {
        items.push(pats::rest_pat(db).syntax());
    }

    let node = separated(
        db,
        RECORD_PAT_FIELD_LIST,
        Some((LEFT_BRACE, RIGHT_BRACE)),
        COMMA,
        items,
        TrailingSeparator::Never,
    );
    cast_node(db, node)
}

/// `{ Point, vec.Vec2 }` inside a `use` item; at least one tree is required.
pub fn use_tree_list<'db>(
    db: &'db dyn Database,
    trees: impl IntoIterator<Item = UseTree<'db>>,
) -> Result<UseTreeList<'db>> {
    let trees: Vec<_> = trees.into_iter().collect();
    if trees.is_empty() {
        return Err(MakeError::EmptyList { kind: USE_TREE_LIST });
    }

    let node = separated(
        db,
        USE_TREE_LIST,
        Some((LEFT_BRACE, RIGHT_BRACE)),
        COMMA,
        trees.into_iter().map(UseTree::syntax),
        TrailingSeparator::Never,
    );
    Ok(cast_node(db, node))
}

/// `(a, b)` as a bare tuple body; shared by tuple expressions, patterns,
/// and types, which differ only in node kind.
pub(crate) fn tuple_like<'db>(
    db: &'db dyn Database,
    kind: SyntaxKind,
    items: Vec<GreenNode<'db>>,
) -> GreenNode<'db> {
    // A one-element tuple needs its trailing separator to stay a tuple.
    let trailing =
        if items.len() == 1 { TrailingSeparator::Always } else { TrailingSeparator::Never };
    separated(db, kind, Some((LEFT_PAREN, RIGHT_PAREN)), COMMA, items, trailing)
}

#[cfg(test)]
mod tests {
    use salsa::DatabaseImpl;
    use veld_green::ast::Node as _;

    use super::*;
    use crate::exprs;

    #[test]
    fn never_trailing_yields_n_minus_one_separators() {
        let db = DatabaseImpl::new();
        let args = [exprs::expr_int(&db, 1), exprs::expr_int(&db, 2), exprs::expr_int(&db, 3)];

        let list = arg_list(&db, args);
        assert_eq!(list.syntax().text(&db), "(1, 2, 3)");
    }

    #[test]
    fn empty_list_renders_bare_delimiters() {
        let db = DatabaseImpl::new();
        let list = arg_list(&db, []);
        assert_eq!(list.syntax().text(&db), "()");
    }

    #[test]
    fn always_trailing_yields_n_separators() {
        let db = DatabaseImpl::new();
        let fields = [
            exprs::record_expr_field(&db, "x", Some(exprs::expr_int(&db, 1))).unwrap(),
            exprs::record_expr_field(&db, "y", Some(exprs::expr_int(&db, 2))).unwrap(),
        ];

        let list = record_expr_field_list(&db, fields, TrailingSeparator::Always);
        assert_eq!(list.syntax().text(&db), "{ x: 1, y: 2, }");

        let fields = [
            exprs::record_expr_field(&db, "x", Some(exprs::expr_int(&db, 1))).unwrap(),
            exprs::record_expr_field(&db, "y", Some(exprs::expr_int(&db, 2))).unwrap(),
        ];
        let list = record_expr_field_list(&db, fields, TrailingSeparator::Never);
        assert_eq!(list.syntax().text(&db), "{ x: 1, y: 2 }");
    }

    #[test]
    fn empty_match_arm_list_is_a_construction_error() {
        let db = DatabaseImpl::new();
        let result = match_arm_list(&db, []);
        assert_eq!(result, Err(MakeError::EmptyList { kind: MATCH_ARM_LIST }));
        assert!(!result.unwrap_err().is_internal());
    }
}
