use crate::common::{configure_criterion, event_branches, user_input, user_schema};
use criterion::{criterion_group, Criterion};
use schema_rail::{map, NumberOptions, Schema, StringOptions, Value};
use std::hint::black_box;

pub fn bench_scalars(c: &mut Criterion) {
    let text = Schema::string_with(StringOptions::default().min_length(1).max_length(64));
    let pattern = Schema::string_with(StringOptions::default().pattern(r"^[a-z0-9_]+$"));
    let number = Schema::integer_with(NumberOptions::default().between(0, 1000));
    let coerced = number.clone().coerce();

    let word = Value::from("schema_rail");
    c.bench_function("parsing/string", |b| b.iter(|| black_box(text.parse(black_box(&word)))));
    c.bench_function("parsing/string_pattern", |b| {
        b.iter(|| black_box(pattern.parse(black_box(&word))))
    });

    let int = Value::Int(512);
    c.bench_function("parsing/integer", |b| b.iter(|| black_box(number.parse(black_box(&int)))));

    let raw = Value::from(" 512 ");
    c.bench_function("parsing/integer_coerced", |b| {
        b.iter(|| black_box(coerced.parse(black_box(&raw))))
    });
}

pub fn bench_record(c: &mut Criterion) {
    let schema = user_schema();
    let input = user_input(42);

    c.bench_function("parsing/record_valid", |b| {
        b.iter(|| black_box(schema.parse(black_box(&input))))
    });
}

pub fn bench_discriminated_vs_alternation(c: &mut Criterion) {
    let tagged = Schema::discriminated("type", event_branches());
    let untagged = Schema::alternation(event_branches());
    let input = map! { "type" => "scroll", "delta" => 1.5 };

    let mut group = c.benchmark_group("parsing/dispatch");
    group.bench_function("discriminated", |b| b.iter(|| black_box(tagged.parse(black_box(&input)))));
    group.bench_function("alternation", |b| b.iter(|| black_box(untagged.parse(black_box(&input)))));
    group.finish();
}

pub fn bench_lazy_tree(c: &mut Criterion) {
    fn tree() -> Schema {
        Schema::record(schema_rail::fields! {
            "value" => Schema::integer(),
            "children" => Schema::sequence(Schema::lazy(tree)),
        })
    }
    fn node(depth: usize) -> Value {
        let children: Vec<Value> = if depth == 0 { Vec::new() } else { vec![node(depth - 1), node(depth - 1)] };
        map! { "value" => depth as i64, "children" => children }
    }

    let schema = tree();
    let input = node(6);
    c.bench_function("parsing/lazy_tree_depth_6", |b| {
        b.iter(|| black_box(schema.parse(black_box(&input))))
    });
}

criterion_group! {
    name = parsing_benches;
    config = configure_criterion();
    targets =
        bench_scalars,
        bench_record,
        bench_discriminated_vs_alternation,
        bench_lazy_tree,
}
