use veld_green::SyntaxKind::{self, *};
use veld_green::SyntaxSet;

use super::{delimited, paths, patterns, types};
use crate::parser::{CompletedMarker, Parser};

pub(crate) const EXPR_FIRST: SyntaxSet = SyntaxSet::new([
    INT_NUMBER,
    FLOAT_NUMBER,
    STRING,
    TRUE_KW,
    FALSE_KW,
    NAME,
    LEFT_PAREN,
    LEFT_BRACE,
    IF_KW,
    MATCH_KW,
    LOOP_KW,
    WHILE_KW,
    FOR_KW,
    RETURN_KW,
    BREAK_KW,
    CONTINUE_KW,
    MINUS,
    BANG,
    PIPE,
    PIPE2,
]);

pub(crate) fn stmt(p: &mut Parser<'_, '_>) {
    match p.peek_kind() {
        VAL_KW => {
            let m = p.start();
            p.advance();
            patterns::pattern(p);
            if p.eat(COLON) {
                types::type_(p);
            }
            p.expect(EQ);
            expr(p);
            p.expect(SEMICOLON);
            m.complete(p, VAL_STMT);
        }
        _ => {
            let Some(completed) = expr(p) else { return };

            if p.at(SEMICOLON) {
                let m = completed.precede(p);
                p.advance();
                m.complete(p, EXPR_STMT);
            } else if !p.at(RIGHT_BRACE) && !p.at(EOF) {
                // Block-like expressions stand on their own as statements.
                if is_block_like(completed.kind()) {
                    let m = completed.precede(p);
                    m.complete(p, EXPR_STMT);
                } else {
                    p.error("expected `;`");
                }
            }
        }
    }
}

pub(crate) fn expr(p: &mut Parser<'_, '_>) -> Option<CompletedMarker> {
    expr_bp(p, 1)
}

fn is_block_like(kind: SyntaxKind) -> bool {
    matches!(kind, BLOCK_EXPR | IF_EXPR | MATCH_EXPR | LOOP_EXPR | WHILE_EXPR | FOR_EXPR)
}

/// Infix binding power, and whether the operator is right-associative.
fn binding_power(kind: SyntaxKind) -> Option<(u8, bool)> {
    let power = match kind {
        EQ => (1, true),
        PIPE2 => (2, false),
        AMP2 => (3, false),
        EQ2 | NEQ | LESS | LESS_EQ | GREATER | GREATER_EQ => (4, false),
        PLUS | MINUS => (5, false),
        STAR | SLASH | PERCENT => (6, false),
        _ => return None,
    };
    Some(power)
}

fn expr_bp(p: &mut Parser<'_, '_>, min_bp: u8) -> Option<CompletedMarker> {
    let mut lhs = lhs(p)?;

    while let Some((bp, right_assoc)) = binding_power(p.peek_kind()) {
        if bp < min_bp {
            break;
        }

        let m = lhs.precede(p);
        p.advance();
        expr_bp(p, if right_assoc { bp } else { bp + 1 });
        lhs = m.complete(p, BINARY_EXPR);
    }

    Some(lhs)
}

fn lhs(p: &mut Parser<'_, '_>) -> Option<CompletedMarker> {
    match p.peek_kind() {
        MINUS | BANG => {
            let m = p.start();
            p.advance();
            lhs(p);
            Some(m.complete(p, PREFIX_EXPR))
        }
        _ => postfix_expr(p),
    }
}

fn postfix_expr(p: &mut Parser<'_, '_>) -> Option<CompletedMarker> {
    let mut lhs = primary_expr(p)?;

    loop {
        lhs = match p.peek_kind() {
            QUESTION => {
                let m = lhs.precede(p);
                p.advance();
                m.complete(p, POSTFIX_EXPR)
            }
            LEFT_PAREN => {
                let m = lhs.precede(p);
                arg_list(p);
                m.complete(p, CALL_EXPR)
            }
            LEFT_BRACKET => {
                let m = lhs.precede(p);
                p.advance();
                expr(p);
                p.expect(RIGHT_BRACKET);
                m.complete(p, INDEX_EXPR)
            }
            DOT => {
                let m = lhs.precede(p);
                p.advance();
                if !p.eat(NAME) {
                    p.error("expected a field or method name");
                }
                if p.at(LEFT_PAREN) {
                    arg_list(p);
                    m.complete(p, METHOD_CALL_EXPR)
                } else {
                    m.complete(p, FIELD_EXPR)
                }
            }
            _ => break,
        };
    }

    Some(lhs)
}

fn arg_list(p: &mut Parser<'_, '_>) {
    let m = p.start();
    delimited(p, LEFT_PAREN, RIGHT_PAREN, COMMA, "expected expression", &EXPR_FIRST, |p| {
        expr(p).is_some()
    });
    m.complete(p, ARG_LIST);
}

fn primary_expr(p: &mut Parser<'_, '_>) -> Option<CompletedMarker> {
    let completed = match p.peek_kind() {
        INT_NUMBER | FLOAT_NUMBER | STRING | TRUE_KW | FALSE_KW => {
            let m = p.start();
            p.advance();
            m.complete(p, LITERAL)
        }
        NAME if p.peek_next_kind() == LEFT_BRACE => record_expr(p),
        NAME => {
            let m = p.start();
            paths::single_segment_path(p);
            m.complete(p, PATH_EXPR)
        }
        LEFT_PAREN => paren_or_tuple_expr(p),
        LEFT_BRACE => block_expr(p),
        IF_KW => if_expr(p),
        MATCH_KW => match_expr(p),
        LOOP_KW => {
            let m = p.start();
            p.advance();
            block(p);
            m.complete(p, LOOP_EXPR)
        }
        WHILE_KW => {
            let m = p.start();
            p.advance();
            condition(p);
            block(p);
            m.complete(p, WHILE_EXPR)
        }
        FOR_KW => {
            let m = p.start();
            p.advance();
            p.expect(LEFT_PAREN);
            patterns::pattern(p);
            p.expect(IN_KW);
            expr(p);
            p.expect(RIGHT_PAREN);
            block(p);
            m.complete(p, FOR_EXPR)
        }
        RETURN_KW => {
            let m = p.start();
            p.advance();
            if EXPR_FIRST.contains(p.peek_kind()) {
                expr(p);
            }
            m.complete(p, RETURN_EXPR)
        }
        BREAK_KW => {
            let m = p.start();
            p.advance();
            if EXPR_FIRST.contains(p.peek_kind()) {
                expr(p);
            }
            m.complete(p, BREAK_EXPR)
        }
        CONTINUE_KW => {
            let m = p.start();
            p.advance();
            m.complete(p, CONTINUE_EXPR)
        }
        PIPE | PIPE2 => closure_expr(p),
        _ => {
            let m = p.start();
            p.error("expected expression");
            p.advance();
            m.complete(p, ERROR);
            return None;
        }
    };

    Some(completed)
}

/// A parenthesized condition or scrutinee, as in `if (c)` and `match (e)`.
fn condition(p: &mut Parser<'_, '_>) {
    p.expect(LEFT_PAREN);
    expr(p);
    p.expect(RIGHT_PAREN);
}

fn paren_or_tuple_expr(p: &mut Parser<'_, '_>) -> CompletedMarker {
    debug_assert_eq!(p.peek_kind(), LEFT_PAREN);

    let m = p.start();
    p.advance();

    if p.eat(RIGHT_PAREN) {
        return m.complete(p, TUPLE_EXPR);
    }

    expr(p);
    if p.at(COMMA) {
        while p.eat(COMMA) {
            if p.at(RIGHT_PAREN) {
                break;
            }
            expr(p);
        }
        p.expect(RIGHT_PAREN);
        m.complete(p, TUPLE_EXPR)
    } else {
        p.expect(RIGHT_PAREN);
        m.complete(p, PAREN_EXPR)
    }
}

fn record_expr(p: &mut Parser<'_, '_>) -> CompletedMarker {
    let m = p.start();
    paths::single_segment_path(p);
    record_expr_field_list(p);
    m.complete(p, RECORD_EXPR)
}

fn record_expr_field_list(p: &mut Parser<'_, '_>) {
    let m = p.start();
    delimited(
        p,
        LEFT_BRACE,
        RIGHT_BRACE,
        COMMA,
        "expected field",
        &SyntaxSet::new([NAME]),
        |p| match p.peek_kind() {
            NAME => {
                let m = p.start();
                p.advance();
                if p.eat(COLON) {
                    expr(p);
                }
                m.complete(p, RECORD_EXPR_FIELD);
                true
            }
            _ => false,
        },
    );
    m.complete(p, RECORD_EXPR_FIELD_LIST);
}

fn if_expr(p: &mut Parser<'_, '_>) -> CompletedMarker {
    debug_assert_eq!(p.peek_kind(), IF_KW);

    let m = p.start();
    p.advance();
    condition(p);
    block(p);
    if p.eat(ELSE_KW) {
        if p.at(IF_KW) {
            if_expr(p);
        } else {
            block(p);
        }
    }
    m.complete(p, IF_EXPR)
}

fn match_expr(p: &mut Parser<'_, '_>) -> CompletedMarker {
    debug_assert_eq!(p.peek_kind(), MATCH_KW);

    let m = p.start();
    p.advance();
    condition(p);
    if p.at(LEFT_BRACE) {
        match_arm_list(p);
    } else {
        p.error("expected match arms");
    }
    m.complete(p, MATCH_EXPR)
}

fn match_arm_list(p: &mut Parser<'_, '_>) {
    let m = p.start();
    delimited(
        p,
        LEFT_BRACE,
        RIGHT_BRACE,
        COMMA,
        "expected match arm",
        &patterns::PAT_FIRST,
        |p| {
            if !patterns::PAT_FIRST.contains(p.peek_kind()) {
                return false;
            }
            match_arm(p);
            true
        },
    );
    m.complete(p, MATCH_ARM_LIST);
}

fn match_arm(p: &mut Parser<'_, '_>) {
    let m = p.start();
    patterns::pattern(p);
    if p.at(IF_KW) {
        let guard = p.start();
        p.advance();
        condition(p);
        guard.complete(p, MATCH_GUARD);
    }
    p.expect(FAT_ARROW);
    expr(p);
    m.complete(p, MATCH_ARM);
}

fn closure_expr(p: &mut Parser<'_, '_>) -> CompletedMarker {
    let m = p.start();
    closure_param_list(p);
    expr(p);
    m.complete(p, CLOSURE_EXPR)
}

fn closure_param_list(p: &mut Parser<'_, '_>) {
    let m = p.start();

    if p.eat(PIPE2) {
        m.complete(p, PARAM_LIST);
        return;
    }

    p.expect(PIPE);
    while !p.at(PIPE) && !p.at(EOF) {
        if p.peek_kind() != NAME {
            p.error("expected parameter name");
            break;
        }
        closure_param(p);
        if !p.eat(COMMA) {
            break;
        }
    }
    p.expect(PIPE);
    m.complete(p, PARAM_LIST);
}

fn closure_param(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.advance();
    if p.eat(COLON) {
        types::type_(p);
    }
    m.complete(p, PARAM);
}

pub(crate) fn block(p: &mut Parser<'_, '_>) {
    if p.peek_kind() != LEFT_BRACE {
        p.error("expected a block");
        return;
    }

    block_expr(p);
}

fn block_expr(p: &mut Parser<'_, '_>) -> CompletedMarker {
    debug_assert_eq!(p.peek_kind(), LEFT_BRACE);

    let m = p.start();
    p.advance();

    while !matches!(p.peek_kind(), RIGHT_BRACE | EOF) {
        stmt(p);
    }

    p.expect(RIGHT_BRACE);
    m.complete(p, BLOCK_EXPR)
}
