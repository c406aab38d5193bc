//! The library's core promise: render any constructed node and the grammar
//! parser hands back a tree of the same shape.
//!
//! Detached expressions, patterns, and types are embedded in a small host
//! module first, since the parser's entry point is a module; the comparison
//! then walks both trees and requires the same non-trivia kind skeleton.

use salsa::{Database, DatabaseImpl};
use veld_green::ast::{self, Node as _};
use veld_green::{GreenNode, NodeOrToken};
use veld_make::{self as make, BinOp, ElseBranch, FieldList, TrailingSeparator, UnaryOp};

fn skeleton<'db>(db: &'db dyn Database, node: GreenNode<'db>, out: &mut String) {
    use std::fmt::Write as _;

    _ = write!(out, "{:?}(", node.kind(db));
    for child in node.children(db) {
        match *child {
            NodeOrToken::Node(child) => skeleton(db, child, out),
            NodeOrToken::Token(token) => {
                if !token.kind(db).is_trivia() {
                    _ = write!(out, "{:?} ", token.kind(db));
                }
            }
        }
    }
    _ = write!(out, ")");
}

fn assert_roundtrip<'db>(db: &'db DatabaseImpl, module: ast::Module<'db>) {
    let text = module.syntax().text(db);
    let parse = veld_parse::module(db, &text);
    assert!(
        parse.diagnostics().is_empty(),
        "diagnostics for {text:?}: {:?}",
        parse.diagnostics()
    );

    let mut expected = String::new();
    skeleton(db, module.syntax(), &mut expected);
    let mut actual = String::new();
    skeleton(db, parse.root(), &mut actual);

    assert_eq!(expected, actual, "skeleton mismatch for {text:?}");
}

fn expr_module<'db>(db: &'db DatabaseImpl, expr: ast::Expr<'db>) -> ast::Module<'db> {
    let body = make::block_expr(db, std::iter::empty(), Some(expr));
    let host = make::fn_(db, "sample", None, make::param_list(db, std::iter::empty()), None, body)
        .unwrap();
    make::module(db, [host.into()])
}

fn name<'db>(db: &'db DatabaseImpl, text: &str) -> ast::Expr<'db> {
    make::expr_name(db, text).unwrap()
}

#[test]
fn literal_expressions() {
    let db = DatabaseImpl::new();

    for expr in [
        make::expr_int(&db, 42),
        make::expr_float(&db, "1.5e-3").unwrap(),
        make::expr_literal(&db, "0x2a").unwrap(),
        make::expr_bool(&db, true),
        make::expr_bool(&db, false),
        make::expr_string(&db, "two\nlines \"quoted\""),
    ] {
        assert_roundtrip(&db, expr_module(&db, expr));
    }
}

#[test]
fn operator_expressions() {
    let db = DatabaseImpl::new();

    let ops = [
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
    ];
    for op in ops {
        let expr = make::expr_binary(&db, op, name(&db, "a"), name(&db, "b"));
        assert_roundtrip(&db, expr_module(&db, expr));
    }

    // Mixed nesting in every position, with and without forced parens.
    let sum =
        || make::expr_binary(&db, BinOp::Add, make::expr_int(&db, 1), make::expr_int(&db, 2));
    for expr in [
        make::expr_binary(&db, BinOp::Mul, sum(), make::expr_int(&db, 3)),
        make::expr_binary(&db, BinOp::Add, make::expr_int(&db, 1), sum()),
        make::expr_binary(&db, BinOp::Lt, sum(), sum()),
        make::expr_prefix(&db, UnaryOp::Neg, sum()),
        make::expr_prefix(&db, UnaryOp::Not, name(&db, "flag")),
        make::expr_prefix(&db, UnaryOp::Neg, make::expr_prefix(&db, UnaryOp::Not, name(&db, "x"))),
        make::expr_try(&db, make::expr_prefix(&db, UnaryOp::Neg, name(&db, "x"))),
        make::expr_prefix(&db, UnaryOp::Neg, make::expr_try(&db, name(&db, "x"))),
        make::expr_assignment(&db, name(&db, "x"), sum()),
    ] {
        assert_roundtrip(&db, expr_module(&db, expr));
    }
}

#[test]
fn postfix_expressions() {
    let db = DatabaseImpl::new();

    let args = || make::arg_list(&db, [make::expr_int(&db, 1), make::expr_int(&db, 2)]);

    for expr in [
        make::expr_call(&db, name(&db, "f"), args()),
        make::expr_call(&db, name(&db, "f"), make::arg_list(&db, std::iter::empty())),
        make::expr_call(
            &db,
            make::expr_call(&db, name(&db, "f"), make::arg_list(&db, std::iter::empty())),
            args(),
        ),
        make::expr_method_call(&db, name(&db, "p"), "scale", args()).unwrap(),
        make::expr_method_call(&db, make::expr_int(&db, 1), "abs", make::arg_list(&db, std::iter::empty()))
            .unwrap(),
        make::expr_field(&db, name(&db, "p"), "x").unwrap(),
        make::expr_field(&db, make::expr_field(&db, name(&db, "p"), "x").unwrap(), "y").unwrap(),
        make::expr_call(&db, make::expr_field(&db, name(&db, "p"), "x").unwrap(), args()),
        make::expr_index(&db, name(&db, "xs"), make::expr_int(&db, 0)),
        make::expr_try(&db, make::expr_method_call(
            &db,
            name(&db, "p"),
            "scale",
            make::arg_list(&db, std::iter::empty()),
        )
        .unwrap()),
    ] {
        assert_roundtrip(&db, expr_module(&db, expr));
    }
}

#[test]
fn grouping_expressions() {
    let db = DatabaseImpl::new();

    for expr in [
        make::expr_unit(&db),
        make::expr_paren(&db, name(&db, "a")),
        make::expr_tuple(&db, [name(&db, "a")]),
        make::expr_tuple(&db, [name(&db, "a"), name(&db, "b")]),
        make::expr_tuple(&db, std::iter::empty()),
    ] {
        assert_roundtrip(&db, expr_module(&db, expr));
    }
}

#[test]
fn record_expressions() {
    let db = DatabaseImpl::new();

    let path = make::path_from_names(&db, &["Point"]).unwrap();
    for trailing in [TrailingSeparator::Never, TrailingSeparator::Always] {
        let fields = make::record_expr_field_list(
            &db,
            [
                make::record_expr_field(&db, "x", Some(make::expr_int(&db, 1))).unwrap(),
                make::record_expr_field(&db, "y", None).unwrap(),
            ],
            trailing,
        );
        let record = make::expr_record(&db, path, fields).unwrap();
        assert_roundtrip(&db, expr_module(&db, record));
    }

    let empty = make::expr_record(
        &db,
        path,
        make::record_expr_field_list(&db, std::iter::empty(), TrailingSeparator::Never),
    )
    .unwrap();
    assert_roundtrip(&db, expr_module(&db, empty));

    // A record literal is fine in operand and scrutinee position alike.
    let sum = make::expr_binary(&db, BinOp::Add, name(&db, "a"), empty);
    assert_roundtrip(&db, expr_module(&db, sum));

    let body = make::expr_empty_block(&db);
    let while_ = make::expr_while(&db, empty, body);
    assert_roundtrip(&db, expr_module(&db, while_));
}

#[test]
fn control_flow_expressions() {
    let db = DatabaseImpl::new();

    let block_with = |text: &str| {
        make::block_expr(&db, std::iter::empty(), Some(make::expr_name(&db, text).unwrap()))
    };

    let chain = make::expr_if(
        &db,
        name(&db, "c2"),
        block_with("b"),
        Some(ElseBranch::Block(block_with("c"))),
    );
    let if_ = make::expr_if(
        &db,
        name(&db, "c1"),
        block_with("a"),
        Some(ElseBranch::If(chain)),
    );
    assert_roundtrip(&db, expr_module(&db, if_.into()));

    let plain = make::expr_if(&db, name(&db, "c"), block_with("a"), None);
    assert_roundtrip(&db, expr_module(&db, plain.into()));

    let loop_body = make::block_expr(
        &db,
        [make::expr_stmt(&db, make::expr_break(&db, Some(make::expr_int(&db, 1))))],
        None,
    );
    assert_roundtrip(&db, expr_module(&db, make::expr_loop(&db, loop_body)));

    let while_body = make::block_expr(
        &db,
        [make::expr_stmt(
            &db,
            make::expr_assignment(
                &db,
                name(&db, "x"),
                make::expr_binary(&db, BinOp::Add, name(&db, "x"), make::expr_int(&db, 1)),
            ),
        )],
        None,
    );
    let while_ = make::expr_while(
        &db,
        make::expr_binary(&db, BinOp::Lt, name(&db, "x"), make::expr_int(&db, 5)),
        while_body,
    );
    assert_roundtrip(&db, expr_module(&db, while_));

    let for_ = make::expr_for(
        &db,
        make::tuple_pat(&db, [make::ident_pat(&db, "i").unwrap(), make::ident_pat(&db, "v").unwrap()]),
        make::expr_method_call(&db, name(&db, "xs"), "entries", make::arg_list(&db, std::iter::empty()))
            .unwrap(),
        make::block_expr(
            &db,
            [make::expr_stmt(&db, make::expr_continue(&db))],
            None,
        ),
    );
    assert_roundtrip(&db, expr_module(&db, for_));

    for expr in [
        make::expr_return(&db, None),
        make::expr_return(&db, Some(name(&db, "x"))),
        make::expr_break(&db, None),
        make::expr_continue(&db),
    ] {
        assert_roundtrip(&db, expr_module(&db, expr));
    }
}

#[test]
fn closures_and_blocks() {
    let db = DatabaseImpl::new();

    let typed = make::closure_param_list(
        &db,
        [
            make::closure_param(&db, "a", Some(make::ty_name(&db, "Int").unwrap())).unwrap(),
            make::closure_param(&db, "b", None).unwrap(),
        ],
    );
    let closure = make::expr_closure(
        &db,
        typed,
        make::expr_binary(&db, BinOp::Mul, name(&db, "a"), name(&db, "b")),
    );
    assert_roundtrip(&db, expr_module(&db, closure));

    let empty = make::expr_closure(
        &db,
        make::closure_param_list(&db, std::iter::empty()),
        make::expr_unit(&db),
    );
    assert_roundtrip(&db, expr_module(&db, empty));

    // A closure in call position keeps its parentheses.
    let called = make::expr_call(&db, empty, make::arg_list(&db, std::iter::empty()));
    assert_roundtrip(&db, expr_module(&db, called));

    let stmts = [
        make::val_stmt(
            &db,
            make::ident_pat(&db, "x").unwrap(),
            Some(make::ty_name(&db, "Int").unwrap()),
            make::expr_int(&db, 1),
        ),
        make::expr_stmt(&db, make::expr_call(&db, name(&db, "emit"), make::arg_list(&db, [name(&db, "x")]))),
    ];
    let block = make::block_expr(&db, stmts, Some(name(&db, "x")));
    assert_roundtrip(&db, expr_module(&db, block.into()));
}

#[test]
fn patterns_roundtrip_inside_a_match() {
    let db = DatabaseImpl::new();

    let record_fields = make::record_pat_field_list(
        &db,
        [
            make::record_pat_field(&db, "x", Some(make::ident_pat(&db, "a").unwrap())).unwrap(),
            make::record_pat_field(&db, "y", None).unwrap(),
        ],
        true,
    );

    let pats = [
        make::wildcard_pat(&db),
        make::ident_pat(&db, "x").unwrap(),
        make::literal_pat(&db, "-1").unwrap(),
        make::literal_pat(&db, "\"two\"").unwrap(),
        make::tuple_pat(&db, [make::ident_pat(&db, "a").unwrap(), make::wildcard_pat(&db)]),
        make::tuple_pat(&db, [make::ident_pat(&db, "only").unwrap()]),
        make::paren_pat(&db, make::ident_pat(&db, "inner").unwrap()),
        make::path_pat(&db, make::path_from_names(&db, &["geo", "Color", "Red"]).unwrap()),
        make::path_pat(&db, make::path_from_names(&db, &["binding"]).unwrap()),
        make::record_pat(&db, make::path_from_names(&db, &["Point"]).unwrap(), record_fields),
        make::tuple_struct_pat(
            &db,
            make::path_from_names(&db, &["Rgb"]).unwrap(),
            [
                make::ident_pat(&db, "r").unwrap(),
                make::ident_pat(&db, "g").unwrap(),
                make::ident_pat(&db, "b").unwrap(),
            ],
        ),
    ];

    for pat in pats {
        let arm = make::match_arm(&db, pat, None, make::expr_unit(&db));
        let match_ = make::expr_match(
            &db,
            name(&db, "subject"),
            make::match_arm_list(&db, [arm]).unwrap(),
        );
        assert_roundtrip(&db, expr_module(&db, match_));
    }
}

#[test]
fn types_roundtrip_inside_parameters() {
    let db = DatabaseImpl::new();

    let map = make::ty_generic(
        &db,
        make::path_from_names(&db, &["Map"]).unwrap(),
        make::generic_arg_list(&db, [make::ty_name(&db, "Str").unwrap(), make::ty_name(&db, "Int").unwrap()])
            .unwrap(),
    );

    let types = [
        make::ty_name(&db, "Int").unwrap(),
        make::ty_path(&db, make::path_from_names(&db, &["geo", "Point"]).unwrap()),
        map,
        make::ty_unit(&db),
        make::ty_tuple(&db, [make::ty_name(&db, "Int").unwrap(), make::ty_name(&db, "Str").unwrap()]),
        make::ty_tuple(&db, [make::ty_name(&db, "Int").unwrap()]),
        make::ty_array(&db, make::ty_name(&db, "Int").unwrap()),
        make::ty_placeholder(&db),
    ];

    for ty in types {
        let params = make::param_list(&db, [make::param(&db, "p", ty).unwrap()]);
        let host = make::fn_(&db, "sample", None, params, Some(ty), make::expr_empty_block(&db))
            .unwrap();
        let module = make::module(&db, [host.into()]);
        assert_roundtrip(&db, module);
    }
}

#[test]
fn items_roundtrip() {
    let db = DatabaseImpl::new();
    let int = || make::ty_name(&db, "Int").unwrap();

    let generic_fn = make::fn_(
        &db,
        "classify",
        Some(
            make::generic_param_list(
                &db,
                [make::type_param(&db, "T").unwrap(), make::type_param(&db, "U").unwrap()],
            )
            .unwrap(),
        ),
        make::param_list(
            &db,
            [
                make::param(&db, "p", make::ty_name(&db, "T").unwrap()).unwrap(),
                make::param(&db, "k", int()).unwrap(),
            ],
        ),
        Some(make::ty_name(&db, "T").unwrap()),
        make::block_expr(&db, std::iter::empty(), Some(name(&db, "p"))),
    )
    .unwrap();

    let point = make::struct_(
        &db,
        "Point",
        None,
        FieldList::Record(make::record_field_list(
            &db,
            [
                make::record_field(&db, "x", int()).unwrap(),
                make::record_field(&db, "y", int()).unwrap(),
            ],
        )),
    )
    .unwrap();

    let pair = make::struct_(
        &db,
        "Pair",
        Some(make::generic_param_list(&db, [make::type_param(&db, "T").unwrap()]).unwrap()),
        FieldList::Tuple(make::tuple_field_list(
            &db,
            [
                make::tuple_field(&db, make::ty_name(&db, "T").unwrap()),
                make::tuple_field(&db, make::ty_name(&db, "T").unwrap()),
            ],
        )),
    )
    .unwrap();

    let unit = make::struct_(&db, "Marker", None, FieldList::Unit).unwrap();

    let color = make::enum_(
        &db,
        "Color",
        None,
        make::variant_list(
            &db,
            [
                make::variant(&db, "Red", FieldList::Unit).unwrap(),
                make::variant(
                    &db,
                    "Rgb",
                    FieldList::Tuple(make::tuple_field_list(
                        &db,
                        [
                            make::tuple_field(&db, int()),
                            make::tuple_field(&db, int()),
                            make::tuple_field(&db, int()),
                        ],
                    )),
                )
                .unwrap(),
                make::variant(
                    &db,
                    "Named",
                    FieldList::Record(make::record_field_list(
                        &db,
                        [make::record_field(&db, "name", make::ty_name(&db, "Str").unwrap()).unwrap()],
                    )),
                )
                .unwrap(),
            ],
        ),
    )
    .unwrap();

    let plain_use = make::use_(
        &db,
        make::use_tree(&db, make::path_from_names(&db, &["geo", "Point"]).unwrap(), None, false)
            .unwrap(),
    );

    let nested = make::use_tree(
        &db,
        make::path_from_names(&db, &["vec", "Vec2"]).unwrap(),
        None,
        false,
    )
    .unwrap();
    let direct = make::use_tree(&db, make::path_from_names(&db, &["Mat"]).unwrap(), None, false)
        .unwrap();
    let listed_use = make::use_(
        &db,
        make::use_tree(
            &db,
            make::path_from_names(&db, &["geo"]).unwrap(),
            Some(make::use_tree_list(&db, [nested, direct]).unwrap()),
            false,
        )
        .unwrap(),
    );

    let glob_use = make::use_(
        &db,
        make::use_tree(&db, make::path_from_names(&db, &["std"]).unwrap(), None, true).unwrap(),
    );

    let module = make::module(
        &db,
        [
            plain_use.into(),
            listed_use.into(),
            glob_use.into(),
            point.into(),
            pair.into(),
            unit.into(),
            color.into(),
            generic_fn.into(),
        ],
    );
    assert_roundtrip(&db, module);
}

#[test]
fn paths_compose() {
    let db = DatabaseImpl::new();

    let lhs = make::path_from_names(&db, &["geo", "vec"]).unwrap();
    let rhs = make::path_from_names(&db, &["Vec2"]).unwrap();
    let concat = make::path_concat(&db, lhs, rhs);
    assert_eq!(concat.syntax().text(&db), "geo.vec.Vec2");

    let qualified = make::path_qualified(&db, lhs, make::path_segment(&db, "Mat").unwrap());
    assert_eq!(qualified.syntax().text(&db), "geo.vec.Mat");

    // Composition is equivalent to building from segments directly.
    assert_eq!(concat, make::path_from_names(&db, &["geo", "vec", "Vec2"]).unwrap());
}
