use codspeed_criterion_compat::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use veld_tokenizer::{SyntaxKind, Tokenizer};

static SOURCE: &str = "
fun classify(p: Point, k: Int): Int { val q = p.scale(k)?; q.x + q.y * 2 }
fun classify(p: Point, k: Int): Int { val q = p.scale(k)?; q.x + q.y * 2 }
fun classify(p: Point, k: Int): Int { val q = p.scale(k)?; q.x + q.y * 2 }
fun classify(p: Point, k: Int): Int { val q = p.scale(k)?; q.x + q.y * 2 }
fun classify(p: Point, k: Int): Int { val q = p.scale(k)?; q.x + q.y * 2 }
fun classify(p: Point, k: Int): Int { val q = p.scale(k)?; q.x + q.y * 2 }
fun classify(p: Point, k: Int): Int { val q = p.scale(k)?; q.x + q.y * 2 }
fun classify(p: Point, k: Int): Int { val q = p.scale(k)?; q.x + q.y * 2 }
";

static OPERATORS: &str = "
a == b != c <= d >= e && f || g => h . i .. j ? k - l + m * n / o % p
a == b != c <= d >= e && f || g => h . i .. j ? k - l + m * n / o % p
a == b != c <= d >= e && f || g => h . i .. j ? k - l + m * n / o % p
a == b != c <= d >= e && f || g => h . i .. j ? k - l + m * n / o % p
";

static CANDIDATES: [(&str, &str); 2] = [("functions", SOURCE), ("operators", OPERATORS)];

fn iterate(s: &str) {
    let mut tokenizer = Tokenizer::new(s);

    loop {
        let token = tokenizer.next_token();
        if token.kind == SyntaxKind::EOF {
            break;
        }
        black_box(token);
    }
}

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");

    for (name, source) in CANDIDATES {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(name, &source, |b, &s| b.iter(|| iterate(s)));
    }
}

criterion_group!(benches, bench_iterate);
criterion_main!(benches);
