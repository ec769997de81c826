//! FILENAME: core/formatter/benches/beautify.rs
//! Measures parse + layout cost for short, nested, and long formulas.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use formatter::{beautify, format, FormattingOptions};
use parser::parse;

/// IF chains nested `depth` levels deep: =IF(A1>1,IF(A2>2,...,0),0)
fn nested_if(depth: usize) -> String {
    let mut formula = String::from("0");
    for level in (1..=depth).rev() {
        formula = format!("IF(A{}>{},SUM(B{}:B{}),{})", level, level, level, level + 10, formula);
    }
    format!("={}", formula)
}

/// One SUM over `terms` added cell references.
fn long_sum(terms: usize) -> String {
    let refs: Vec<String> = (1..=terms).map(|i| format!("A{}*B{}", i, i)).collect();
    format!("=SUM({})", refs.join("+"))
}

fn bench_beautify(c: &mut Criterion) {
    let options = FormattingOptions::default();
    let mut group = c.benchmark_group("beautify");

    group.bench_function("inline_if", |b| {
        b.iter(|| beautify(black_box("=IF(A1>100,\"High\",\"Low\")"), &options))
    });

    for depth in [2, 8, 32] {
        let formula = nested_if(depth);
        group.bench_with_input(BenchmarkId::new("nested_if", depth), &formula, |b, f| {
            b.iter(|| beautify(black_box(f), &options))
        });
    }

    for terms in [10, 100, 1000] {
        let formula = long_sum(terms);
        group.bench_with_input(BenchmarkId::new("long_sum", terms), &formula, |b, f| {
            b.iter(|| beautify(black_box(f), &options))
        });
    }

    group.finish();
}

fn bench_layout_only(c: &mut Criterion) {
    let options = FormattingOptions::default();
    let tree = parse(&nested_if(16));

    c.bench_function("format_nested_if_16", |b| {
        b.iter(|| format(black_box(&tree), &options))
    });
}

criterion_group!(benches, bench_beautify, bench_layout_only);
criterion_main!(benches);
