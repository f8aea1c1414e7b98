use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use scriptlet_value::{decode, encode, from_structured, to_structured, ScriptTable, ScriptValue};

fn build_table(width: usize, depth: usize) -> ScriptTable {
    let table = ScriptTable::new();
    for index in 0..width {
        table.insert(format!("field{index}"), ScriptValue::Number(index as f64));
    }
    if depth > 0 {
        let list = ScriptTable::new();
        for index in 0..width {
            list.push(ScriptValue::Str(format!("item{index}")));
        }
        table.insert("list", list);
        table.insert("child", build_table(width, depth - 1));
    }
    table
}

fn benchmark_to_structured(criterion: &mut Criterion) {
    let table = build_table(8, 3);
    let value = ScriptValue::Table(table);

    criterion.bench_function("convert_to_structured", |b| {
        b.iter(|| black_box(to_structured(black_box(&value)).expect("table is pure data")));
    });
}

fn benchmark_from_structured(criterion: &mut Criterion) {
    let table = build_table(8, 3);
    let structured = to_structured(&ScriptValue::Table(table)).expect("table is pure data");

    criterion.bench_function("convert_from_structured", |b| {
        b.iter(|| black_box(from_structured(black_box(&structured))));
    });
}

fn benchmark_json_roundtrip(criterion: &mut Criterion) {
    let table = build_table(8, 3);
    let structured = to_structured(&ScriptValue::Table(table)).expect("table is pure data");
    let bytes = encode(&structured);

    criterion.bench_function("json_encode", |b| {
        b.iter(|| black_box(encode(black_box(&structured))));
    });
    criterion.bench_function("json_decode", |b| {
        b.iter(|| black_box(decode(black_box(&bytes)).expect("encoded value should decode")));
    });
}

criterion_group!(convert, benchmark_to_structured, benchmark_from_structured, benchmark_json_roundtrip);
criterion_main!(convert);
