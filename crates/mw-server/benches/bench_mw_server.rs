use axum::{body::Body, http::Request};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mw_server::app;
use rand::seq::SliceRandom;
use serde_json::json;
use tower::ServiceExt;

fn bench_chunk_route(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut words = vec!["fever", "cough", "dyspnea", "tachycardia", "pallor", "rash"];
    let mut rng = rand::thread_rng();
    let text: String = (0..200)
        .map(|_| {
            words.shuffle(&mut rng);
            format!("Patient reports {} and {}. ", words[0], words[1])
        })
        .collect();
    let body = json!({ "text": text, "maxChunkSize": 300 }).to_string();

    c.bench_function("route_chunk_200_sentences", |b| {
        b.to_async(&rt).iter(|| async {
            let request = Request::builder()
                .method("POST")
                .uri("/api/v1/text/chunk")
                .header("content-type", "application/json")
                .body(Body::from(body.clone()))
                .unwrap();
            black_box(app().oneshot(request).await.unwrap())
        })
    });
}

criterion_group!(benches, bench_chunk_route);
criterion_main!(benches);
