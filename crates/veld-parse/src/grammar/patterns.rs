use veld_green::SyntaxKind::*;
use veld_green::SyntaxSet;

use super::{delimited, paths};
use crate::parser::Parser;

pub(crate) const PAT_FIRST: SyntaxSet = SyntaxSet::new([
    UNDERSCORE,
    NAME,
    INT_NUMBER,
    FLOAT_NUMBER,
    STRING,
    TRUE_KW,
    FALSE_KW,
    MINUS,
    LEFT_PAREN,
    DOT2,
]);

pub(crate) fn pattern(p: &mut Parser<'_, '_>) -> bool {
    match p.peek_kind() {
        UNDERSCORE => {
            let m = p.start();
            p.advance();
            m.complete(p, WILDCARD_PAT);
        }
        INT_NUMBER | FLOAT_NUMBER | STRING | TRUE_KW | FALSE_KW => {
            let m = p.start();
            p.advance();
            m.complete(p, LITERAL_PAT);
        }
        MINUS => {
            let m = p.start();
            p.advance();
            if matches!(p.peek_kind(), INT_NUMBER | FLOAT_NUMBER) {
                p.advance();
            } else {
                p.error("expected a number literal");
            }
            m.complete(p, LITERAL_PAT);
        }
        DOT2 => {
            let m = p.start();
            p.advance();
            m.complete(p, REST_PAT);
        }
        LEFT_PAREN => {
            let m = p.start();
            p.advance();

            if p.eat(RIGHT_PAREN) {
                m.complete(p, TUPLE_PAT);
                return true;
            }

            pattern(p);
            if p.at(COMMA) {
                while p.eat(COMMA) {
                    if p.at(RIGHT_PAREN) {
                        break;
                    }
                    pattern(p);
                }
                p.expect(RIGHT_PAREN);
                m.complete(p, TUPLE_PAT);
            } else {
                p.expect(RIGHT_PAREN);
                m.complete(p, PAREN_PAT);
            }
        }
        NAME => {
            if matches!(p.peek_next_kind(), DOT | LEFT_BRACE | LEFT_PAREN) {
                let m = p.start();
                paths::path(p);
                match p.peek_kind() {
                    LEFT_BRACE => {
                        record_pat_field_list(p);
                        m.complete(p, RECORD_PAT);
                    }
                    LEFT_PAREN => {
                        tuple_struct_fields(p);
                        m.complete(p, TUPLE_STRUCT_PAT);
                    }
                    _ => {
                        m.complete(p, PATH_PAT);
                    }
                }
            } else {
                let m = p.start();
                p.advance();
                m.complete(p, IDENT_PAT);
            }
        }
        _ => {
            p.error("expected a pattern");
            return false;
        }
    }

    true
}

fn record_pat_field_list(p: &mut Parser<'_, '_>) {
    let m = p.start();
    delimited(
        p,
        LEFT_BRACE,
        RIGHT_BRACE,
        COMMA,
        "expected field pattern",
        &SyntaxSet::new([NAME, DOT2]),
        |p| match p.peek_kind() {
            DOT2 => {
                let m = p.start();
                p.advance();
                m.complete(p, REST_PAT);
                true
            }
            NAME => {
                let m = p.start();
                p.advance();
                if p.eat(COLON) {
                    pattern(p);
                }
                m.complete(p, RECORD_PAT_FIELD);
                true
            }
            _ => false,
        },
    );
    m.complete(p, RECORD_PAT_FIELD_LIST);
}

fn tuple_struct_fields(p: &mut Parser<'_, '_>) {
    delimited(p, LEFT_PAREN, RIGHT_PAREN, COMMA, "expected a pattern", &PAT_FIRST, |p| {
        if PAT_FIRST.contains(p.peek_kind()) { pattern(p) } else { false }
    });
}
