use std::hint::black_box;

use codspeed_criterion_compat::{Criterion, criterion_group, criterion_main};
use salsa::Database;
use veld_green::ast::{Expr, Node as _};
use veld_make::BinOp;

fn deep_sum<'db>(db: &'db dyn Database, depth: u64) -> Expr<'db> {
    let mut expr = veld_make::expr_int(db, 0);
    for i in 1..depth {
        expr = veld_make::expr_binary(db, BinOp::Add, expr, veld_make::expr_int(db, i));
    }
    expr
}

fn benchmark_synthesis(c: &mut Criterion) {
    let db = salsa::DatabaseImpl::new();

    c.bench_function("deep_binary_chain", |b| {
        b.iter(|| black_box(deep_sum(&db, 64)));
    });

    c.bench_function("render_deep_chain", |b| {
        let expr = deep_sum(&db, 64);
        b.iter(|| black_box(expr.syntax().text(&db)));
    });
}

criterion_group!(benches, benchmark_synthesis);
criterion_main!(benches);
