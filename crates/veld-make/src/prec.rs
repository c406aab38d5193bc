//! Operator precedence, associativity, and token spacing tables.
//!
//! These are the static facts the assemblers consult when deciding whether a
//! child expression must be parenthesized and how fixed tokens are spaced.
//! The expression parser keeps its own binding powers; the two tables must
//! describe the same grammar or round-tripping breaks.

use salsa::Database;
use veld_green::SyntaxKind::{self, *};
use veld_green::ast::{BinaryExpr, Expr, Node as _};

/// Binary operators, including assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinOp {
    Assign,
    Or,
    And,
    Eq,
    Neq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
    None,
}

impl BinOp {
    pub fn syntax_kind(self) -> SyntaxKind {
        match self {
            Self::Assign => EQ,
            Self::Or => PIPE2,
            Self::And => AMP2,
            Self::Eq => EQ2,
            Self::Neq => NEQ,
            Self::Lt => LESS,
            Self::LtEq => LESS_EQ,
            Self::Gt => GREATER,
            Self::GtEq => GREATER_EQ,
            Self::Add => PLUS,
            Self::Sub => MINUS,
            Self::Mul => STAR,
            Self::Div => SLASH,
            Self::Rem => PERCENT,
        }
    }

    pub fn from_kind(kind: SyntaxKind) -> Option<Self> {
        let op = match kind {
            EQ => Self::Assign,
            PIPE2 => Self::Or,
            AMP2 => Self::And,
            EQ2 => Self::Eq,
            NEQ => Self::Neq,
            LESS => Self::Lt,
            LESS_EQ => Self::LtEq,
            GREATER => Self::Gt,
            GREATER_EQ => Self::GtEq,
            PLUS => Self::Add,
            MINUS => Self::Sub,
            STAR => Self::Mul,
            SLASH => Self::Div,
            PERCENT => Self::Rem,
            _ => return None,
        };
        Some(op)
    }

    /// Higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Assign => 1,
            Self::Or => 2,
            Self::And => 3,
            Self::Eq | Self::Neq | Self::Lt | Self::LtEq | Self::Gt | Self::GtEq => 4,
            Self::Add | Self::Sub => 5,
            Self::Mul | Self::Div | Self::Rem => 6,
        }
    }

    pub fn assoc(self) -> Assoc {
        match self {
            Self::Assign => Assoc::Right,
            Self::Eq | Self::Neq | Self::Lt | Self::LtEq | Self::Gt | Self::GtEq => Assoc::None,
            _ => Assoc::Left,
        }
    }
}

/// Prefix operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
    Not,
}

impl UnaryOp {
    pub fn syntax_kind(self) -> SyntaxKind {
        match self {
            Self::Neg => MINUS,
            Self::Not => BANG,
        }
    }
}

pub const PREFIX_PRECEDENCE: u8 = 7;
pub const POSTFIX_PRECEDENCE: u8 = 8;

/// Precedence of an expression's own top-level operator.
///
/// `None` marks atoms: literals, paths, delimited and block-like
/// expressions, which never need parenthesizing. Only the immediate kind is
/// inspected; anything deeper was already resolved when the child was built.
pub fn precedence_of<'db>(db: &'db dyn Database, expr: Expr<'db>) -> Option<u8> {
    let precedence = match expr.kind(db) {
        BINARY_EXPR => BinaryExpr::cast(db, expr.syntax())
            .and_then(|node| node.op_token(db))
            .and_then(|token| BinOp::from_kind(token.kind(db)))
            // A foreign binary node without a known operator: assume the
            // loosest binding, which at worst over-parenthesizes.
            .map_or(1, BinOp::precedence),
        PREFIX_EXPR => PREFIX_PRECEDENCE,
        POSTFIX_EXPR | CALL_EXPR | METHOD_CALL_EXPR | FIELD_EXPR | INDEX_EXPR => {
            POSTFIX_PRECEDENCE
        }
        CLOSURE_EXPR | RETURN_EXPR | BREAK_EXPR => 1,
        _ => return None,
    };
    Some(precedence)
}

/// Where a child expression sits relative to its operator parent.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Position {
    Left(BinOp),
    Right(BinOp),
    Prefix,
    Postfix,
}

pub(crate) fn needs_parens<'db>(
    db: &'db dyn Database,
    child: Expr<'db>,
    position: Position,
) -> bool {
    let Some(child_precedence) = precedence_of(db, child) else { return false };

    match position {
        Position::Left(op) => {
            child_precedence < op.precedence()
                || (child_precedence == op.precedence() && op.assoc() != Assoc::Left)
        }
        Position::Right(op) => {
            child_precedence < op.precedence()
                || (child_precedence == op.precedence() && op.assoc() != Assoc::Right)
        }
        Position::Prefix => child_precedence < PREFIX_PRECEDENCE,
        Position::Postfix => child_precedence < POSTFIX_PRECEDENCE,
    }
}

/// Spacing a fixed token requires from its neighbors when assembled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Spacing {
    /// No opinion.
    None,
    /// A space before the token.
    Before,
    /// A space after the token.
    After,
    /// Spaces on both sides.
    Around,
    /// Suppress a pending space; closing delimiters hug their content.
    Tight,
}

pub(crate) fn spacing(kind: SyntaxKind) -> Spacing {
    match kind {
        COMMA | SEMICOLON | COLON | LEFT_BRACE => Spacing::After,
        FUN_KW | VAL_KW | IF_KW | MATCH_KW | LOOP_KW | WHILE_KW | FOR_KW | RETURN_KW
        | BREAK_KW | STRUCT_KW | ENUM_KW | USE_KW => Spacing::After,
        EQ | EQ2 | NEQ | LESS | LESS_EQ | GREATER | GREATER_EQ | AMP2 | PIPE2 | PLUS | MINUS
        | STAR | SLASH | PERCENT | FAT_ARROW | ELSE_KW | IN_KW => Spacing::Around,
        RIGHT_BRACE => Spacing::Before,
        RIGHT_PAREN | RIGHT_BRACKET => Spacing::Tight,
        _ => Spacing::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_kinds_round_trip() {
        for op in [
            BinOp::Assign,
            BinOp::Or,
            BinOp::And,
            BinOp::Eq,
            BinOp::Neq,
            BinOp::Lt,
            BinOp::LtEq,
            BinOp::Gt,
            BinOp::GtEq,
            BinOp::Add,
            BinOp::Sub,
            BinOp::Mul,
            BinOp::Div,
            BinOp::Rem,
        ] {
            assert_eq!(BinOp::from_kind(op.syntax_kind()), Some(op));
            assert!(op.syntax_kind().static_text().is_some());
        }
    }

    #[test]
    fn ranks_order_as_expected() {
        assert!(BinOp::Mul.precedence() > BinOp::Add.precedence());
        assert!(BinOp::Add.precedence() > BinOp::Lt.precedence());
        assert!(BinOp::Lt.precedence() > BinOp::And.precedence());
        assert!(BinOp::And.precedence() > BinOp::Or.precedence());
        assert!(BinOp::Or.precedence() > BinOp::Assign.precedence());
        assert!(PREFIX_PRECEDENCE > BinOp::Mul.precedence());
        assert!(POSTFIX_PRECEDENCE > PREFIX_PRECEDENCE);
    }
}
