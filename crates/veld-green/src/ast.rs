//! Typed wrappers around raw green nodes.
//!
//! A wrapper is a zero-cost witness that the wrapped node has the right kind
//! (or belongs to the right kind category). Casting is the only way in, so
//! holding a wrapper is holding the proof.

use salsa::Database;

use crate::SyntaxKind::*;
use crate::{GreenNode, GreenToken};

pub trait Node<'db>: Sized {
    fn cast(db: &'db dyn Database, syntax: GreenNode<'db>) -> Option<Self>;

    fn syntax(self) -> GreenNode<'db>;
}

fn children<'db, N: Node<'db> + 'db>(
    db: &'db dyn Database,
    parent: GreenNode<'db>,
) -> impl Iterator<Item = N> + 'db {
    parent.child_nodes(db).filter_map(move |node| N::cast(db, node))
}

fn child<'db, N: Node<'db> + 'db>(db: &'db dyn Database, parent: GreenNode<'db>) -> Option<N> {
    children(db, parent).next()
}

fn first_token<'db>(db: &'db dyn Database, parent: GreenNode<'db>) -> Option<GreenToken<'db>> {
    parent.child_tokens(db).find(|token| !token.kind(db).is_trivia())
}

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name<'db>(GreenNode<'db>);

        impl<'db> Node<'db> for $name<'db> {
            fn cast(db: &'db dyn Database, syntax: GreenNode<'db>) -> Option<Self> {
                (syntax.kind(db) == $kind).then_some(Self(syntax))
            }

            fn syntax(self) -> GreenNode<'db> {
                self.0
            }
        }
    };
}

macro_rules! ast_category {
    ($name:ident, $pred:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name<'db>(GreenNode<'db>);

        impl<'db> Node<'db> for $name<'db> {
            fn cast(db: &'db dyn Database, syntax: GreenNode<'db>) -> Option<Self> {
                syntax.kind(db).$pred().then_some(Self(syntax))
            }

            fn syntax(self) -> GreenNode<'db> {
                self.0
            }
        }
    };
}

ast_category!(Item, is_item);
ast_category!(Expr, is_expr);
ast_category!(Pat, is_pat);
ast_category!(Type, is_type);
ast_category!(Stmt, is_stmt);

ast_node!(Module, MODULE);
ast_node!(Fn, FN);
ast_node!(Struct, STRUCT);
ast_node!(Enum, ENUM);
ast_node!(Use, USE);
ast_node!(UseTree, USE_TREE);
ast_node!(UseTreeList, USE_TREE_LIST);
ast_node!(Param, PARAM);
ast_node!(ParamList, PARAM_LIST);
ast_node!(GenericParamList, GENERIC_PARAM_LIST);
ast_node!(TypeParam, TYPE_PARAM);
ast_node!(GenericArgList, GENERIC_ARG_LIST);
ast_node!(RecordField, RECORD_FIELD);
ast_node!(RecordFieldList, RECORD_FIELD_LIST);
ast_node!(TupleField, TUPLE_FIELD);
ast_node!(TupleFieldList, TUPLE_FIELD_LIST);
ast_node!(Variant, VARIANT);
ast_node!(VariantList, VARIANT_LIST);
ast_node!(Path, PATH);
ast_node!(PathSegment, PATH_SEGMENT);
ast_node!(BinaryExpr, BINARY_EXPR);
ast_node!(PrefixExpr, PREFIX_EXPR);
ast_node!(CallExpr, CALL_EXPR);
ast_node!(BlockExpr, BLOCK_EXPR);
ast_node!(IfExpr, IF_EXPR);
ast_node!(MatchExpr, MATCH_EXPR);
ast_node!(MatchArmList, MATCH_ARM_LIST);
ast_node!(MatchArm, MATCH_ARM);
ast_node!(ArgList, ARG_LIST);
ast_node!(RecordExprField, RECORD_EXPR_FIELD);
ast_node!(RecordExprFieldList, RECORD_EXPR_FIELD_LIST);
ast_node!(RecordPatField, RECORD_PAT_FIELD);
ast_node!(RecordPatFieldList, RECORD_PAT_FIELD_LIST);

macro_rules! ast_upcast {
    ($from:ident => $to:ident) => {
        impl<'db> From<$from<'db>> for $to<'db> {
            fn from(node: $from<'db>) -> Self {
                Self(node.0)
            }
        }
    };
}

ast_upcast!(Fn => Item);
ast_upcast!(Struct => Item);
ast_upcast!(Enum => Item);
ast_upcast!(Use => Item);
ast_upcast!(BinaryExpr => Expr);
ast_upcast!(PrefixExpr => Expr);
ast_upcast!(CallExpr => Expr);
ast_upcast!(BlockExpr => Expr);
ast_upcast!(IfExpr => Expr);
ast_upcast!(MatchExpr => Expr);

impl<'db> Module<'db> {
    pub fn items(self, db: &'db dyn Database) -> impl Iterator<Item = Item<'db>> + 'db {
        children(db, self.0)
    }
}

impl<'db> Item<'db> {
    pub fn kind(self, db: &'db dyn Database) -> crate::SyntaxKind {
        self.0.kind(db)
    }
}

impl<'db> Fn<'db> {
    pub fn name(self, db: &'db dyn Database) -> Option<GreenToken<'db>> {
        self.0.child_tokens(db).find(|token| token.kind(db) == NAME)
    }

    pub fn param_list(self, db: &'db dyn Database) -> Option<ParamList<'db>> {
        child(db, self.0)
    }

    pub fn body(self, db: &'db dyn Database) -> Option<BlockExpr<'db>> {
        child(db, self.0)
    }
}

impl<'db> Expr<'db> {
    pub fn kind(self, db: &'db dyn Database) -> crate::SyntaxKind {
        self.0.kind(db)
    }
}

impl<'db> BinaryExpr<'db> {
    pub fn lhs(self, db: &'db dyn Database) -> Option<Expr<'db>> {
        child(db, self.0)
    }

    pub fn op_token(self, db: &'db dyn Database) -> Option<GreenToken<'db>> {
        first_token(db, self.0)
    }

    pub fn rhs(self, db: &'db dyn Database) -> Option<Expr<'db>> {
        children(db, self.0).nth(1)
    }
}

impl<'db> PrefixExpr<'db> {
    pub fn op_token(self, db: &'db dyn Database) -> Option<GreenToken<'db>> {
        first_token(db, self.0)
    }

    pub fn operand(self, db: &'db dyn Database) -> Option<Expr<'db>> {
        child(db, self.0)
    }
}

impl<'db> CallExpr<'db> {
    pub fn callee(self, db: &'db dyn Database) -> Option<Expr<'db>> {
        child(db, self.0)
    }

    pub fn arg_list(self, db: &'db dyn Database) -> Option<ArgList<'db>> {
        child(db, self.0)
    }
}

impl<'db> BlockExpr<'db> {
    pub fn stmts(self, db: &'db dyn Database) -> impl Iterator<Item = Stmt<'db>> + 'db {
        children(db, self.0)
    }

    /// The trailing expression, the one without a `;` after it.
    pub fn tail_expr(self, db: &'db dyn Database) -> Option<Expr<'db>> {
        child(db, self.0)
    }
}

impl<'db> MatchExpr<'db> {
    pub fn scrutinee(self, db: &'db dyn Database) -> Option<Expr<'db>> {
        child(db, self.0)
    }

    pub fn arm_list(self, db: &'db dyn Database) -> Option<MatchArmList<'db>> {
        child(db, self.0)
    }
}

impl<'db> MatchArmList<'db> {
    pub fn arms(self, db: &'db dyn Database) -> impl Iterator<Item = MatchArm<'db>> + 'db {
        children(db, self.0)
    }
}

impl<'db> MatchArm<'db> {
    pub fn pat(self, db: &'db dyn Database) -> Option<Pat<'db>> {
        child(db, self.0)
    }

    pub fn value(self, db: &'db dyn Database) -> Option<Expr<'db>> {
        child(db, self.0)
    }
}

impl<'db> ArgList<'db> {
    pub fn args(self, db: &'db dyn Database) -> impl Iterator<Item = Expr<'db>> + 'db {
        children(db, self.0)
    }
}

impl<'db> ParamList<'db> {
    pub fn params(self, db: &'db dyn Database) -> impl Iterator<Item = Param<'db>> + 'db {
        children(db, self.0)
    }
}

impl<'db> Path<'db> {
    pub fn segments(self, db: &'db dyn Database) -> impl Iterator<Item = PathSegment<'db>> + 'db {
        children(db, self.0)
    }
}

impl<'db> PathSegment<'db> {
    pub fn name(self, db: &'db dyn Database) -> Option<GreenToken<'db>> {
        first_token(db, self.0)
    }
}
