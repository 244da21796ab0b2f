//! Benchmarks for tokenizing and ranking throughput

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use wordstream_core::{share, Longest, MostFrequent, Shortest, Tokenizer, WordCollection};

/// Generate test text of roughly `size_kb` kilobytes
fn generate_test_text(size_kb: usize) -> String {
    let base_text = "The quick brown fox jumps over the lazy dog, again and again. \
                     Streaming statistics never rescan history. ";
    let repetitions = (size_kb * 1024) / base_text.len() + 1;

    base_text.repeat(repetitions)
}

fn benchmark_tokenizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenizer");
    let tokenizer = Tokenizer::new();

    for size_kb in [4, 64] {
        let text = generate_test_text(size_kb);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size_kb), &text, |b, text| {
            b.iter(|| tokenizer.process_words(black_box(text), Some("carry")));
        });
    }

    group.finish();
}

fn benchmark_collection(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection");
    let tokenizer = Tokenizer::new();
    let text = generate_test_text(256);
    let words = tokenizer.process_words(&text, None).words;

    for capacity in [1, 10, 100] {
        group.throughput(Throughput::Elements(words.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("three_trackers", capacity),
            &capacity,
            |b, &capacity| {
                b.iter(|| {
                    let mut collection = WordCollection::new();
                    collection.add_stat(&share(MostFrequent::new(capacity).unwrap()));
                    collection.add_stat(&share(Longest::new(capacity).unwrap()));
                    collection.add_stat(&share(Shortest::new(capacity).unwrap()));
                    collection.add_words(black_box(&words));
                    collection.num_words()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_tokenizer, benchmark_collection);
criterion_main!(benches);
