use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wcv_engine::Counts;
use wcv_engine::decode::count_into;

fn benchmark_count_into(c: &mut Criterion) {
    let ascii = "the quick brown fox jumps over the lazy dog\n".repeat(2_000);
    let mixed = "żółw 😊 łódź\tniebo\n".repeat(2_000);

    c.bench_function("count_ascii", |b| {
        b.iter(|| {
            let counts = Counts::new();
            count_into(black_box(ascii.as_bytes()), &counts).unwrap();
            black_box(counts.snapshot());
        })
    });

    c.bench_function("count_multibyte", |b| {
        b.iter(|| {
            let counts = Counts::new();
            count_into(black_box(mixed.as_bytes()), &counts).unwrap();
            black_box(counts.snapshot());
        })
    });
}

criterion_group!(benches, benchmark_count_into);
criterion_main!(benches);
