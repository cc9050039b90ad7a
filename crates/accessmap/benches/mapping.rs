use accessmap::{mapper::ApplicationMapper, tree::TreeMap};
use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::{Value, json};
use std::hint::black_box;

fn application_tree(items: usize) -> TreeMap {
    let policy: Vec<Value> = (0..items)
        .map(|i| json!({ "id": i.to_string(), "type": if i % 2 == 0 { "Rule" } else { "RuleSet" } }))
        .collect();

    let Value::Object(map) = json!({
        "name": "bench",
        "context_root": "/bench",
        "default_auth_type": "API",
        "virtual_host_ids": ["1", "2", "3"],
        "site_id": "42",
        "enabled": true,
        "policy": [{ "api": policy.clone(), "web": policy }]
    }) else {
        unreachable!()
    };

    map
}

fn bench_application(c: &mut Criterion) {
    let tree = application_tree(200);
    let model = ApplicationMapper::expand(&tree).unwrap();

    c.bench_function("application expand (400 policy items)", |b| {
        b.iter(|| black_box(ApplicationMapper::expand(black_box(&tree)).unwrap()));
    });

    c.bench_function("application flatten (400 policy items)", |b| {
        b.iter(|| black_box(ApplicationMapper::flatten(black_box(&model))));
    });
}

criterion_group!(benches, bench_application);
criterion_main!(benches);
