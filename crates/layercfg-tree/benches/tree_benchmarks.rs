use criterion::{Criterion, black_box, criterion_group, criterion_main};
use layercfg_tree::{Content, Tree, parse_path};
use serde_json::json;

fn sample() -> Content {
    Content::try_from(json!({
        "databases": {
            "main": {"host": "127.0.0.1", "port": 5432, "version": [["9", "6"], ["10"]]},
            "replica": {"host": "10.0.0.2", "port": 5433},
        },
        "servers": [
            {"host": "a.internal", "port": 80},
            {"host": "b.internal", "port": 81},
        ],
    }))
    .unwrap()
}

fn parse_benchmark(c: &mut Criterion) {
    c.bench_function("path::parse_path", |b| {
        b.iter(|| parse_path(black_box("databases.main.version[0][1]")))
    });
}

fn get_benchmark(c: &mut Criterion) {
    let content = sample();
    c.bench_function("Content::get (hit)", |b| {
        b.iter(|| content.get(black_box("servers[1].port")).to_int())
    });
    c.bench_function("Content::get (miss)", |b| {
        b.iter(|| content.get(black_box("servers[7].port")).is_nil())
    });
}

fn set_benchmark(c: &mut Criterion) {
    c.bench_function("Content::set (vivify)", |b| {
        b.iter(|| {
            let mut content = Content::new();
            content
                .set(black_box("a.b[0].c[0]"), black_box("value"))
                .unwrap();
            content
        })
    });
}

fn merge_benchmark(c: &mut Criterion) {
    let base = sample();
    let overlay = Content::try_from(json!({
        "databases": {"main": {"port": 6432}},
        "servers": [{"port": 8080}, {}, {"host": "c.internal"}],
    }))
    .unwrap();

    c.bench_function("Content::merge", |b| {
        b.iter(|| {
            let mut merged = base.clone();
            merged.merge(black_box(overlay.clone()));
            merged
        })
    });

    c.bench_function("Tree::merge (arrays)", |b| {
        b.iter(|| {
            let mut dst = Tree::from(json!([[1, 2], [3]]));
            dst.merge(black_box(Tree::from(json!([[4], [5, 6], [7]]))));
            dst
        })
    });
}

criterion_group!(
    benches,
    parse_benchmark,
    get_benchmark,
    set_benchmark,
    merge_benchmark
);
criterion_main!(benches);
