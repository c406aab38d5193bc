use std::hint::black_box;

use codspeed_criterion_compat::{
    BenchmarkId, Criterion, Throughput, criterion_group, criterion_main,
};

fn benchmark_parser(c: &mut Criterion) {
    let db = salsa::DatabaseImpl::new();
    let sources = [
        (
            "simple",
            r#"
            fun foo() {
                42
            }
            "#,
        ),
        (
            "medium",
            r#"
            fun foo(a: Int, b: Int): Int {
                if (a < b) { a } else { b }
                match (a) {
                    0 => b,
                    _ => a + b,
                }
            }

            fun bar() {
                loop { break; }
            }
            "#,
        ),
    ];

    let mut group = c.benchmark_group("parser");

    for (name, source) in sources {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse", name), &source, |b, &source| {
            b.iter(|| {
                let parse = veld_parse::module(&db, source);
                black_box(parse.root());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_parser);
criterion_main!(benches);
