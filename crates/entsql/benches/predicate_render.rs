use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use entsql::Predicate;

/// col0 = ? AND col1 = ? AND ...
fn and_chain(n: usize) -> Predicate {
    let mut iter = (0..n).map(|i| Predicate::eq(format!("col{i}"), i as i64));
    let first = iter.next().unwrap_or_else(|| Predicate::is_not_null("id"));
    first.and_all(iter)
}

/// (a = ? OR b = ?) AND (a = ? OR b = ?) AND ..., one paren pair per term.
fn mixed_tree(n: usize) -> Predicate {
    let term = |i: usize| {
        Predicate::eq(format!("a{i}"), i as i64).or(Predicate::eq(format!("b{i}"), i as i64))
    };
    let mut iter = (0..n).map(term);
    let first = iter.next().unwrap_or_else(|| Predicate::is_not_null("id"));
    first.and_all(iter)
}

fn bench_and_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("predicate/and_chain");

    for n in [1, 5, 10, 50, 100] {
        let p = and_chain(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &p, |b, p| {
            b.iter(|| black_box(p.to_sql()));
        });
    }

    group.finish();
}

fn bench_mixed_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("predicate/mixed_tree");

    for n in [1, 5, 10, 50] {
        let p = mixed_tree(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &p, |b, p| {
            b.iter(|| black_box(p.to_sql()));
        });
    }

    group.finish();
}

fn bench_in_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("predicate/in_list");

    for n in [5, 20, 100, 500] {
        let values: Vec<i64> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let p = Predicate::in_list("id", values.iter().copied());
                black_box(p.to_sql());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_and_chain, bench_mixed_tree, bench_in_list);
criterion_main!(benches);
