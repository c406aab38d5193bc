use veld_green::SyntaxKind::*;
use veld_green::SyntaxSet;

use super::{delimited, paths};
use crate::parser::Parser;

pub(crate) const TYPE_FIRST: SyntaxSet =
    SyntaxSet::new([NAME, LEFT_PAREN, LEFT_BRACKET, UNDERSCORE]);

pub(crate) fn type_(p: &mut Parser<'_, '_>) {
    match p.peek_kind() {
        NAME => {
            let m = p.start();
            paths::path(p);
            if p.at(LEFT_BRACKET) {
                generic_arg_list(p);
            }
            m.complete(p, PATH_TYPE);
        }
        LEFT_PAREN => {
            let m = p.start();
            p.advance();

            if p.eat(RIGHT_PAREN) {
                m.complete(p, TUPLE_TYPE);
                return;
            }

            type_(p);
            while p.eat(COMMA) {
                if p.at(RIGHT_PAREN) {
                    break;
                }
                type_(p);
            }
            p.expect(RIGHT_PAREN);
            m.complete(p, TUPLE_TYPE);
        }
        LEFT_BRACKET => {
            let m = p.start();
            p.advance();
            type_(p);
            p.expect(RIGHT_BRACKET);
            m.complete(p, ARRAY_TYPE);
        }
        UNDERSCORE => {
            let m = p.start();
            p.advance();
            m.complete(p, INFER_TYPE);
        }
        _ => p.error("expected a type"),
    }
}

fn generic_arg_list(p: &mut Parser<'_, '_>) {
    let m = p.start();
    delimited(
        p,
        LEFT_BRACKET,
        RIGHT_BRACKET,
        COMMA,
        "expected type argument",
        &TYPE_FIRST,
        |p| {
            if TYPE_FIRST.contains(p.peek_kind()) {
                type_(p);
                true
            } else {
                false
            }
        },
    );
    m.complete(p, GENERIC_ARG_LIST);
}
