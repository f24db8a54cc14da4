use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mw_core::{ChangeKind, MedWriterConfig, TextChange};
use rand::Rng;

fn bench_config(c: &mut Criterion) {
    let json = serde_json::to_string(&MedWriterConfig::default()).unwrap();
    c.bench_function("config_from_json", |b| {
        b.iter(|| black_box(MedWriterConfig::from_json_str(black_box(&json)).unwrap()))
    });
}

fn bench_map_span(c: &mut Criterion) {
    let change = TextChange {
        kind: ChangeKind::Replace,
        start: 5_000,
        end: 5_040,
        old_text: "x".repeat(40),
        new_text: "y".repeat(12),
        timestamp: Utc::now(),
    };
    let mut rng = rand::thread_rng();
    let spans: Vec<(usize, usize)> = (0..10_000)
        .map(|_| {
            let s = rng.gen_range(0..10_000);
            (s, s + rng.gen_range(1..30))
        })
        .collect();

    c.bench_function("map_span_10k", |b| {
        b.iter(|| {
            spans
                .iter()
                .filter_map(|&(s, e)| change.map_span(s, e))
                .count()
        })
    });
}

criterion_group!(benches, bench_config, bench_map_span);
criterion_main!(benches);
