use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rowscan::parse_document;

fn build_document(rows: usize) -> String {
    let mut text = String::from("Title,Genre,Rating,Director,Review\n");
    for i in 0..rows {
        text.push_str(&format!(
            "Movie {i},\"Drama, Comedy\",{}.{},Director {i},\"A review, with a comma and \"\"quotes\"\"\"\n",
            5 + i % 5,
            i % 10
        ));
    }
    text
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_document");

    for size in [100, 1_000, 10_000, 100_000].iter() {
        let text = build_document(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| {
                let records = parse_document(black_box(text));
                black_box(records);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_parse);
criterion_main!(benches);
