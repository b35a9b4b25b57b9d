use std::hint::black_box;
use std::path::PathBuf;

use criterion::{criterion_group, criterion_main, Criterion};

use mediabin::media::schema::Candidate;
use mediabin::media::validate::validate_batch;
use mediabin::media::{mime, preview};

fn full_batch() -> Vec<Candidate> {
    let names = [
        "photo-01.png",
        "photo-02.jpg",
        "photo-03.jpeg",
        "banner.gif",
        "clip-01.mp4",
        "clip-02.mp4",
        "track-01.mp3",
        "track-02.mp3",
        "photo-04.png",
        "clip-03.mp4",
    ];
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Candidate {
            path: PathBuf::from(format!("/tmp/{name}")),
            name: (*name).to_string(),
            size: 150_000 + (i as u64) * 10_000,
            mime: mime::guess_type(name),
        })
        .collect()
}

fn bench_validate(c: &mut Criterion) {
    let batch = full_batch();
    c.bench_function("validate_full_batch", |b| {
        b.iter(|| validate_batch(black_box(&batch)))
    });
}

fn bench_preview(c: &mut Criterion) {
    c.bench_function("preview_kind", |b| {
        b.iter(|| preview::preview_kind(black_box("video/mp4")))
    });
}

criterion_group!(benches, bench_validate, bench_preview);
criterion_main!(benches);
