use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use entsql::{EntityBuilder, Field, Order, Predicate, TableRef};

struct Row {
    values: Vec<i64>,
}

/// An entity with `n` columns, soft delete on, filtered on every column.
fn builder(n: usize) -> EntityBuilder<Row> {
    let mut b = EntityBuilder::with_soft_delete();
    b.table(
        TableRef::new("t")
            .alias("a")
            .left_join(TableRef::new("u").alias("b"), "b.t_id = a.id"),
    );
    for i in 0..n {
        b.field(Field::new(format!("col{i}"), move |r: &Row| r.values[i]));
        b.and_filter(Predicate::eq(format!("a.col{i}"), i as i64));
    }
    b.order_by(Order::desc("a.id")).paginate(3, 25);
    b
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement/select");

    for n in [1, 5, 10, 50] {
        let b = builder(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &b, |bench, b| {
            bench.iter(|| black_box(b.select()));
        });
    }

    group.finish();
}

fn bench_select_with_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement/select_with_count");

    for n in [1, 5, 10, 50] {
        let b = builder(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &b, |bench, b| {
            bench.iter(|| black_box(b.select_with_count()));
        });
    }

    group.finish();
}

fn bench_insert_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement/insert_rows");

    let b = builder(10);
    for rows in [1, 10, 100] {
        let data: Vec<Row> = (0..rows)
            .map(|r| Row {
                values: (0..10).map(|i| r * 10 + i).collect(),
            })
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(rows), &data, |bench, data| {
            bench.iter(|| black_box(b.insert(data)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_select, bench_select_with_count, bench_insert_rows);
criterion_main!(benches);
