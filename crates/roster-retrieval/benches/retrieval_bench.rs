use criterion::{criterion_group, criterion_main, Criterion};

use roster_core::config::RosterConfig;
use roster_core::models::RetrievalRequest;
use roster_core::traits::IRetriever;
use roster_retrieval::RetrievalEngine;
use roster_store::load_raw_records;

fn engine() -> RetrievalEngine {
    let engine = RetrievalEngine::new(RosterConfig::default());
    engine
        .reload(&load_raw_records(test_fixtures::kb_dir()).unwrap())
        .unwrap();
    engine
}

fn bench_anchor(c: &mut Criterion) {
    let engine = engine();
    let request = RetrievalRequest::for_anchor("gertrude");
    c.bench_function("retrieve_adversary_anchor", |b| {
        b.iter(|| engine.retrieve(&request).unwrap());
    });
}

fn bench_free_text(c: &mut Criterion) {
    let engine = engine();
    let request = RetrievalRequest::for_text("ice spells during break");
    c.bench_function("retrieve_free_text", |b| {
        b.iter(|| engine.retrieve(&request).unwrap());
    });
}

fn bench_reload(c: &mut Criterion) {
    let engine = engine();
    let raw = load_raw_records(test_fixtures::kb_dir()).unwrap();
    c.bench_function("reload_sample_kb", |b| {
        b.iter(|| engine.reload(&raw).unwrap());
    });
}

criterion_group!(benches, bench_anchor, bench_free_text, bench_reload);
criterion_main!(benches);
