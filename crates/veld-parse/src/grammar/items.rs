use veld_green::SyntaxKind::*;
use veld_green::SyntaxSet;

use super::{delimited, exprs, name, paths, types};
use crate::parser::Parser;

pub(crate) fn module(p: &mut Parser<'_, '_>) {
    let m = p.start();

    while p.peek_kind() != EOF {
        item(p);
    }

    p.expect(EOF);
    m.complete(p, MODULE);
}

fn item(p: &mut Parser<'_, '_>) {
    match p.peek_kind() {
        FUN_KW => fn_(p),
        STRUCT_KW => struct_(p),
        ENUM_KW => enum_(p),
        USE_KW => use_(p),
        SEMICOLON => p.error_and_bump("expected an item, found `;`"),
        _ => p.error_and_bump("expected an item"),
    }
}

fn fn_(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.advance();

    name(p, &SyntaxSet::new([LEFT_BRACKET, LEFT_PAREN, COLON, LEFT_BRACE]));

    if p.at(LEFT_BRACKET) {
        generic_param_list(p);
    }

    if p.at(LEFT_PAREN) {
        param_list(p);
    } else {
        p.error("expected function parameters");
    }

    if p.at(COLON) {
        return_type(p);
    }

    exprs::block(p);

    m.complete(p, FN);
}

fn return_type(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.advance();
    types::type_(p);
    m.complete(p, RETURN_TYPE);
}

fn generic_param_list(p: &mut Parser<'_, '_>) {
    let m = p.start();
    delimited(
        p,
        LEFT_BRACKET,
        RIGHT_BRACKET,
        COMMA,
        "expected generic parameter",
        &SyntaxSet::new([NAME]),
        |p| match p.peek_kind() {
            NAME => {
                let m = p.start();
                p.advance();
                m.complete(p, TYPE_PARAM);
                true
            }
            _ => false,
        },
    );
    m.complete(p, GENERIC_PARAM_LIST);
}

fn param_list(p: &mut Parser<'_, '_>) {
    let m = p.start();
    delimited(
        p,
        LEFT_PAREN,
        RIGHT_PAREN,
        COMMA,
        "expected parameter",
        &SyntaxSet::new([NAME]),
        |p| match p.peek_kind() {
            NAME => {
                param(p);
                true
            }
            _ => false,
        },
    );
    m.complete(p, PARAM_LIST);
}

fn param(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.advance();

    if p.eat(COLON) {
        types::type_(p);
    } else {
        p.error("missing type for function parameter");
    }

    m.complete(p, PARAM);
}

fn struct_(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.advance();

    name(p, &SyntaxSet::new([LEFT_BRACKET, LEFT_PAREN, LEFT_BRACE, SEMICOLON]));

    if p.at(LEFT_BRACKET) {
        generic_param_list(p);
    }

    match p.peek_kind() {
        LEFT_BRACE => record_field_list(p),
        LEFT_PAREN => {
            tuple_field_list(p);
            p.expect(SEMICOLON);
        }
        SEMICOLON => p.advance(),
        _ => p.error("expected struct fields or `;`"),
    }

    m.complete(p, STRUCT);
}

fn record_field_list(p: &mut Parser<'_, '_>) {
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
                record_field(p);
                true
            }
            _ => false,
        },
    );
    m.complete(p, RECORD_FIELD_LIST);
}

fn record_field(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.advance();

    if p.eat(COLON) {
        types::type_(p);
    } else {
        p.error("missing field type");
    }

    m.complete(p, RECORD_FIELD);
}

fn tuple_field_list(p: &mut Parser<'_, '_>) {
    let m = p.start();
    delimited(
        p,
        LEFT_PAREN,
        RIGHT_PAREN,
        COMMA,
        "expected field type",
        &types::TYPE_FIRST,
        |p| {
            if types::TYPE_FIRST.contains(p.peek_kind()) {
                let m = p.start();
                types::type_(p);
                m.complete(p, TUPLE_FIELD);
                true
            } else {
                false
            }
        },
    );
    m.complete(p, TUPLE_FIELD_LIST);
}

fn enum_(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.advance();

    name(p, &SyntaxSet::new([LEFT_BRACKET, LEFT_BRACE]));

    if p.at(LEFT_BRACKET) {
        generic_param_list(p);
    }

    if p.at(LEFT_BRACE) {
        variant_list(p);
    } else {
        p.error("expected enum variants");
    }

    m.complete(p, ENUM);
}

fn variant_list(p: &mut Parser<'_, '_>) {
    let m = p.start();
    delimited(
        p,
        LEFT_BRACE,
        RIGHT_BRACE,
        COMMA,
        "expected variant",
        &SyntaxSet::new([NAME]),
        |p| match p.peek_kind() {
            NAME => {
                variant(p);
                true
            }
            _ => false,
        },
    );
    m.complete(p, VARIANT_LIST);
}

fn variant(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.advance();

    match p.peek_kind() {
        LEFT_BRACE => record_field_list(p),
        LEFT_PAREN => tuple_field_list(p),
        _ => {}
    }

    m.complete(p, VARIANT);
}

fn use_(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.advance();
    use_tree(p);
    p.expect(SEMICOLON);
    m.complete(p, USE);
}

fn use_tree(p: &mut Parser<'_, '_>) {
    let m = p.start();

    match p.peek_kind() {
        LEFT_BRACE => use_tree_list(p),
        NAME => {
            paths::path(p);
            if p.eat(DOT) {
                match p.peek_kind() {
                    STAR => p.advance(),
                    LEFT_BRACE => use_tree_list(p),
                    _ => p.error("expected `*` or `{` in use tree"),
                }
            }
        }
        _ => p.error("expected a use tree"),
    }

    m.complete(p, USE_TREE);
}

fn use_tree_list(p: &mut Parser<'_, '_>) {
    let m = p.start();
    delimited(
        p,
        LEFT_BRACE,
        RIGHT_BRACE,
        COMMA,
        "expected use tree",
        &SyntaxSet::new([NAME, LEFT_BRACE]),
        |p| match p.peek_kind() {
            NAME | LEFT_BRACE => {
                use_tree(p);
                true
            }
            _ => false,
        },
    );
    m.complete(p, USE_TREE_LIST);
}
