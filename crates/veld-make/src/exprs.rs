//! Expression constructors.
//!
//! Operand parenthesization is decided here, against the precedence table:
//! a child whose top-level operator binds too loosely for its position is
//! wrapped in a parenthesized expression before being attached. A few
//! grammar quirks force extra parentheses beyond pure precedence; those
//! cases are marked where they happen.

use salsa::Database;
use veld_green::SyntaxKind::*;
use veld_green::GreenToken;
use veld_green::ast::{
    ArgList, BlockExpr, Expr, IfExpr, MatchArm, MatchArmList, Node as _, ParamList, Pat, Path,
    RecordExprField, RecordExprFieldList, Stmt, Type,
};

use crate::builder::{NodeBuilder, cast_node};
use crate::error::{MakeError, Result};
use crate::lists;
use crate::paths;
use crate::prec::{self, BinOp, Position, UnaryOp};
use crate::tokens;

fn literal<'db>(db: &'db dyn Database, token: GreenToken<'db>) -> Expr<'db> {
    let mut b = NodeBuilder::new(db, LITERAL);
    b.token(token);
    b.finish_cast()
}

pub fn expr_int<'db>(db: &'db dyn Database, value: u64) -> Expr<'db> {
    literal(db, GreenToken::new(db, INT_NUMBER, Box::<str>::from(value.to_string())))
}

pub fn expr_float<'db>(db: &'db dyn Database, text: &str) -> Result<Expr<'db>> {
    Ok(literal(db, tokens::float_number(db, text)?))
}

pub fn expr_bool<'db>(db: &'db dyn Database, value: bool) -> Expr<'db> {
    literal(db, tokens::fixed(db, if value { TRUE_KW } else { FALSE_KW }))
}

pub fn expr_string<'db>(db: &'db dyn Database, value: &str) -> Expr<'db> {
    literal(db, tokens::string(db, value))
}

/// A literal expression from raw token text, e.g. `0x2a`.
pub fn expr_literal<'db>(db: &'db dyn Database, text: &str) -> Result<Expr<'db>> {
    Ok(literal(db, tokens::literal(db, text)?))
}

/// A single-name reference.
pub fn expr_name<'db>(db: &'db dyn Database, name: &str) -> Result<Expr<'db>> {
    let path = paths::path_unqualified(db, paths::path_segment(db, name)?);
    let mut b = NodeBuilder::new(db, PATH_EXPR);
    b.node(path.syntax());
    Ok(b.finish_cast())
}

/// A path used as an expression. Only single-segment paths occur in
/// expression position; `a.b` there is field access, so a qualified path is
/// a construction error.
pub fn expr_path<'db>(db: &'db dyn Database, path: Path<'db>) -> Result<Expr<'db>> {
    if !paths::is_single_segment(db, path) {
        return Err(MakeError::QualifiedPath {
            context: "name reference",
            path: path.syntax().text(db),
        });
    }

    let mut b = NodeBuilder::new(db, PATH_EXPR);
    b.node(path.syntax());
    Ok(b.finish_cast())
}

pub fn expr_paren<'db>(db: &'db dyn Database, inner: Expr<'db>) -> Expr<'db> {
    let mut b = NodeBuilder::new(db, PAREN_EXPR);
    b.fixed(LEFT_PAREN);
    b.node(inner.syntax());
    b.fixed(RIGHT_PAREN);
    b.finish_cast()
}

pub fn expr_unit<'db>(db: &'db dyn Database) -> Expr<'db> {
    let mut b = NodeBuilder::new(db, TUPLE_EXPR);
    b.fixed(LEFT_PAREN);
    b.fixed(RIGHT_PAREN);
    b.finish_cast()
}

pub fn expr_tuple<'db>(
    db: &'db dyn Database,
    items: impl IntoIterator<Item = Expr<'db>>,
) -> Expr<'db> {
    let items: Vec<_> = items.into_iter().map(Expr::syntax).collect();
    if items.is_empty() {
        return expr_unit(db);
    }
    cast_node(db, lists::tuple_like(db, TUPLE_EXPR, items))
}

fn maybe_paren<'db>(db: &'db dyn Database, expr: Expr<'db>, position: Position) -> Expr<'db> {
    if prec::needs_parens(db, expr, position) { expr_paren(db, expr) } else { expr }
}

pub fn expr_binary<'db>(
    db: &'db dyn Database,
    op: BinOp,
    lhs: Expr<'db>,
    rhs: Expr<'db>,
) -> Expr<'db> {
    let lhs = maybe_paren(db, lhs, Position::Left(op));
    let rhs = maybe_paren(db, rhs, Position::Right(op));

    let mut b = NodeBuilder::new(db, BINARY_EXPR);
    b.node(lhs.syntax());
    b.fixed(op.syntax_kind());
    b.node(rhs.syntax());
    b.finish_cast()
}

pub fn expr_assignment<'db>(db: &'db dyn Database, lhs: Expr<'db>, rhs: Expr<'db>) -> Expr<'db> {
    expr_binary(db, BinOp::Assign, lhs, rhs)
}

pub fn expr_prefix<'db>(db: &'db dyn Database, op: UnaryOp, operand: Expr<'db>) -> Expr<'db> {
    let operand = maybe_paren(db, operand, Position::Prefix);

    let mut b = NodeBuilder::new(db, PREFIX_EXPR);
    b.fixed_tight(op.syntax_kind());
    b.node(operand.syntax());
    b.finish_cast()
}

/// The `?` postfix.
pub fn expr_try<'db>(db: &'db dyn Database, operand: Expr<'db>) -> Expr<'db> {
    let operand = maybe_paren(db, operand, Position::Postfix);

    let mut b = NodeBuilder::new(db, POSTFIX_EXPR);
    b.node(operand.syntax());
    b.fixed_tight(QUESTION);
    b.finish_cast()
}

/// `true` when rendering `receiver.` would glue the dot onto a number
/// token, turning `1.abs()` into a float literal.
fn is_numeric_literal<'db>(db: &'db dyn Database, expr: Expr<'db>) -> bool {
    expr.kind(db) == LITERAL
        && expr
            .syntax()
            .child_tokens(db)
            .any(|token| matches!(token.kind(db), INT_NUMBER | FLOAT_NUMBER))
}

fn receiver_operand<'db>(db: &'db dyn Database, receiver: Expr<'db>) -> Expr<'db> {
    if is_numeric_literal(db, receiver) {
        return expr_paren(db, receiver);
    }
    maybe_paren(db, receiver, Position::Postfix)
}

pub fn expr_call<'db>(db: &'db dyn Database, callee: Expr<'db>, args: ArgList<'db>) -> Expr<'db> {
    // `a.b(x)` reparses as a method call, so a field-access callee keeps its
    // parentheses even though the precedences agree.
    let callee = if callee.kind(db) == FIELD_EXPR {
        expr_paren(db, callee)
    } else {
        maybe_paren(db, callee, Position::Postfix)
    };

    let mut b = NodeBuilder::new(db, CALL_EXPR);
    b.node(callee.syntax());
    b.node(args.syntax());
    b.finish_cast()
}

pub fn expr_method_call<'db>(
    db: &'db dyn Database,
    receiver: Expr<'db>,
    name: &str,
    args: ArgList<'db>,
) -> Result<Expr<'db>> {
    let receiver = receiver_operand(db, receiver);

    let mut b = NodeBuilder::new(db, METHOD_CALL_EXPR);
    b.node(receiver.syntax());
    b.fixed(DOT);
    b.token(tokens::name(db, name)?);
    b.node(args.syntax());
    Ok(b.finish_cast())
}

pub fn expr_field<'db>(
    db: &'db dyn Database,
    receiver: Expr<'db>,
    name: &str,
) -> Result<Expr<'db>> {
    let receiver = receiver_operand(db, receiver);

    let mut b = NodeBuilder::new(db, FIELD_EXPR);
    b.node(receiver.syntax());
    b.fixed(DOT);
    b.token(tokens::name(db, name)?);
    Ok(b.finish_cast())
}

pub fn expr_index<'db>(db: &'db dyn Database, base: Expr<'db>, index: Expr<'db>) -> Expr<'db> {
    let base = maybe_paren(db, base, Position::Postfix);

    let mut b = NodeBuilder::new(db, INDEX_EXPR);
    b.node(base.syntax());
    b.fixed(LEFT_BRACKET);
    b.node(index.syntax());
    b.fixed(RIGHT_BRACKET);
    b.finish_cast()
}

/// `Point { x: 1 }`. Record literals take a single-segment path; anything
/// longer would reparse as field accesses.
pub fn expr_record<'db>(
    db: &'db dyn Database,
    path: Path<'db>,
    fields: RecordExprFieldList<'db>,
) -> Result<Expr<'db>> {
    if !paths::is_single_segment(db, path) {
        return Err(MakeError::QualifiedPath {
            context: "record literal",
            path: path.syntax().text(db),
        });
    }

    let mut b = NodeBuilder::new(db, RECORD_EXPR);
    b.node(path.syntax());
    b.space();
    b.node(fields.syntax());
    Ok(b.finish_cast())
}

/// One `name: value` field; `None` renders the shorthand `name`.
pub fn record_expr_field<'db>(
    db: &'db dyn Database,
    name: &str,
    value: Option<Expr<'db>>,
) -> Result<RecordExprField<'db>> {
    let mut b = NodeBuilder::new(db, RECORD_EXPR_FIELD);
    b.token(tokens::name(db, name)?);
    if let Some(value) = value {
        b.fixed(COLON);
        b.node(value.syntax());
    }
    Ok(b.finish_cast())
}

/// The branch after `else`: either a block or a chained `if`.
#[derive(Clone, Copy, Debug)]
pub enum ElseBranch<'db> {
    Block(BlockExpr<'db>),
    If(IfExpr<'db>),
}

pub fn expr_if<'db>(
    db: &'db dyn Database,
    condition: Expr<'db>,
    then_branch: BlockExpr<'db>,
    else_branch: Option<ElseBranch<'db>>,
) -> IfExpr<'db> {
    let mut b = NodeBuilder::new(db, IF_EXPR);
    b.fixed(IF_KW);
    b.fixed(LEFT_PAREN);
    b.node(condition.syntax());
    b.fixed(RIGHT_PAREN);
    b.space();
    b.node(then_branch.syntax());

    match else_branch {
        Some(ElseBranch::Block(block)) => {
            b.fixed(ELSE_KW);
            b.node(block.syntax());
        }
        Some(ElseBranch::If(nested)) => {
            b.fixed(ELSE_KW);
            b.node(nested.syntax());
        }
        None => {}
    }

    b.finish_cast()
}

pub fn expr_match<'db>(
    db: &'db dyn Database,
    scrutinee: Expr<'db>,
    arms: MatchArmList<'db>,
) -> Expr<'db> {
    let mut b = NodeBuilder::new(db, MATCH_EXPR);
    b.fixed(MATCH_KW);
    b.fixed(LEFT_PAREN);
    b.node(scrutinee.syntax());
    b.fixed(RIGHT_PAREN);
    b.space();
    b.node(arms.syntax());
    b.finish_cast()
}

pub fn match_arm<'db>(
    db: &'db dyn Database,
    pat: Pat<'db>,
    guard: Option<Expr<'db>>,
    value: Expr<'db>,
) -> MatchArm<'db> {
    let mut b = NodeBuilder::new(db, MATCH_ARM);
    b.node(pat.syntax());

    if let Some(guard) = guard {
        b.space();
        b.node(match_guard(db, guard));
    }

    b.fixed(FAT_ARROW);
    b.node(value.syntax());
    b.finish_cast()
}

fn match_guard<'db>(db: &'db dyn Database, condition: Expr<'db>) -> veld_green::GreenNode<'db> {
    let mut b = NodeBuilder::new(db, MATCH_GUARD);
    b.fixed(IF_KW);
    b.fixed(LEFT_PAREN);
    b.node(condition.syntax());
    b.fixed(RIGHT_PAREN);
    b.finish()
}

pub fn expr_loop<'db>(db: &'db dyn Database, body: BlockExpr<'db>) -> Expr<'db> {
    let mut b = NodeBuilder::new(db, LOOP_EXPR);
    b.fixed(LOOP_KW);
    b.node(body.syntax());
    b.finish_cast()
}

pub fn expr_while<'db>(
    db: &'db dyn Database,
    condition: Expr<'db>,
    body: BlockExpr<'db>,
) -> Expr<'db> {
    let mut b = NodeBuilder::new(db, WHILE_EXPR);
    b.fixed(WHILE_KW);
    b.fixed(LEFT_PAREN);
    b.node(condition.syntax());
    b.fixed(RIGHT_PAREN);
    b.space();
    b.node(body.syntax());
    b.finish_cast()
}

pub fn expr_for<'db>(
    db: &'db dyn Database,
    pat: Pat<'db>,
    iterable: Expr<'db>,
    body: BlockExpr<'db>,
) -> Expr<'db> {
    let mut b = NodeBuilder::new(db, FOR_EXPR);
    b.fixed(FOR_KW);
    b.fixed(LEFT_PAREN);
    b.node(pat.syntax());
    b.fixed(IN_KW);
    b.node(iterable.syntax());
    b.fixed(RIGHT_PAREN);
    b.space();
    b.node(body.syntax());
    b.finish_cast()
}

pub fn expr_return<'db>(db: &'db dyn Database, value: Option<Expr<'db>>) -> Expr<'db> {
    let mut b = NodeBuilder::new(db, RETURN_EXPR);
    b.fixed(RETURN_KW);
    if let Some(value) = value {
        b.node(value.syntax());
    }
    b.finish_cast()
}

pub fn expr_break<'db>(db: &'db dyn Database, value: Option<Expr<'db>>) -> Expr<'db> {
    let mut b = NodeBuilder::new(db, BREAK_EXPR);
    b.fixed(BREAK_KW);
    if let Some(value) = value {
        b.node(value.syntax());
    }
    b.finish_cast()
}

pub fn expr_continue<'db>(db: &'db dyn Database) -> Expr<'db> {
    let mut b = NodeBuilder::new(db, CONTINUE_EXPR);
    b.fixed(CONTINUE_KW);
    b.finish_cast()
}

pub fn expr_closure<'db>(
    db: &'db dyn Database,
    params: ParamList<'db>,
    body: Expr<'db>,
) -> Expr<'db> {
    let mut b = NodeBuilder::new(db, CLOSURE_EXPR);
    b.node(params.syntax());
    b.space();
    b.node(body.syntax());
    b.finish_cast()
}

pub fn block_expr<'db>(
    db: &'db dyn Database,
    stmts: impl IntoIterator<Item = Stmt<'db>>,
    tail: Option<Expr<'db>>,
) -> BlockExpr<'db> {
    let mut b = NodeBuilder::new(db, BLOCK_EXPR);
    b.fixed(LEFT_BRACE);

    for stmt in stmts {
        b.node(stmt.syntax());
        b.space();
    }

    if let Some(tail) = tail {
        b.node(tail.syntax());
    }

    b.fixed(RIGHT_BRACE);
    b.finish_cast()
}

pub fn expr_empty_block<'db>(db: &'db dyn Database) -> BlockExpr<'db> {
    block_expr(db, std::iter::empty(), None)
}

/// An expression statement; the `;` is always rendered, which every
/// expression kind tolerates.
pub fn expr_stmt<'db>(db: &'db dyn Database, expr: Expr<'db>) -> Stmt<'db> {
    let mut b = NodeBuilder::new(db, EXPR_STMT);
    b.node(expr.syntax());
    b.fixed(SEMICOLON);
    b.finish_cast()
}

/// `val pat: Type = initializer;`.
pub fn val_stmt<'db>(
    db: &'db dyn Database,
    pat: Pat<'db>,
    ty: Option<Type<'db>>,
    initializer: Expr<'db>,
) -> Stmt<'db> {
    let mut b = NodeBuilder::new(db, VAL_STMT);
    b.fixed(VAL_KW);
    b.node(pat.syntax());
    if let Some(ty) = ty {
        b.fixed(COLON);
        b.node(ty.syntax());
    }
    b.fixed(EQ);
    b.node(initializer.syntax());
    b.fixed(SEMICOLON);
    b.finish_cast()
}
