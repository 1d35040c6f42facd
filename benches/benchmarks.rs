use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;

use lexprep::{Collocations, Pipeline};

const VOCAB: &[&str] = &[
    "Acme", "cloud", "storage", "the", "of", "well-known", "machine", "learning", "platform",
    "customers", "in", "New", "York", "https://acme.io", "@acme", "2024", "and", "secure",
    "backup", "teams", "opened", "offices", "quickly", "growing", "<b>", "don't",
];

fn random_document(rng: &mut StdRng, sentences: usize) -> String {
    let mut doc = String::new();
    for _ in 0..sentences {
        let len = rng.gen_range(5..25);
        let words: Vec<&str> = (0..len).map(|_| *VOCAB.choose(&mut *rng).unwrap()).collect();
        doc.push_str(&words.join(" "));
        doc.push_str(". ");
    }
    doc
}

fn bench_document(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let doc = random_document(&mut rng, 200);
    let surface = Pipeline::surface().unwrap();
    let lemmatized = Pipeline::lemmatized().unwrap();

    c.bench_function("tokenize_document_surface_200", |b| {
        b.iter(|| surface.tokenize_document(black_box(&doc)))
    });
    c.bench_function("tokenize_document_lemmatized_200", |b| {
        b.iter(|| lemmatized.tokenize_document(black_box(&doc)))
    });
}

fn bench_website(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let fragments: Vec<String> = (0..500)
        .map(|_| {
            let len = rng.gen_range(1..12);
            (0..len)
                .map(|_| *VOCAB.choose(&mut rng).unwrap())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    let pipeline = Pipeline::surface().unwrap();

    c.bench_function("tokenize_website_500", |b| {
        b.iter(|| pipeline.tokenize_website(black_box(&fragments)))
    });
}

fn bench_collocations(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let tokens: Vec<String> = (0..10_000)
        .map(|_| VOCAB.choose(&mut rng).unwrap().to_lowercase())
        .collect();
    let collocations = Collocations::with_params(2, 10);

    c.bench_function("collocations_10k", |b| {
        b.iter(|| collocations.augment(black_box(tokens.clone())))
    });
}

criterion_group!(benches, bench_document, bench_website, bench_collocations);
criterion_main!(benches);
