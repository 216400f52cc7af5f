use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use partlex_engine::Classifier;

const LINES: &[&str] = &[
    "פ.אויר מזדה 3 מ13",
    "דסקיות קדמי ימין אוקטביה מ05",
    "בולם אחורי קורולה מ08 עד 13",
    "אטם ראש CBZ 1.2 פולו",
    "רצועה 6PK 1230 קורולה",
    "ציריה 4x4 היילקס ויגו מ08",
    "ת.מנוע שמאל ספורטאג מ16",
    "מ.מים יונדאי I30 1.6",
];

fn bench_classify(c: &mut Criterion) {
    let classifier = Classifier::with_defaults().unwrap();

    let mut group = c.benchmark_group("classify");
    for line in LINES.iter().take(3) {
        group.bench_with_input(BenchmarkId::from_parameter(line), line, |b, line| {
            b.iter(|| classifier.classify(black_box(line)));
        });
    }
    group.finish();
}

fn bench_classify_batch(c: &mut Criterion) {
    let classifier = Classifier::with_defaults().unwrap();
    let batch: Vec<String> = LINES
        .iter()
        .cycle()
        .take(1000)
        .map(|s| s.to_string())
        .collect();

    let mut group = c.benchmark_group("classify_batch");
    group.throughput(Throughput::Elements(batch.len() as u64));
    group.bench_function("1000_lines", |b| {
        b.iter(|| classifier.classify_batch(black_box(&batch)));
    });
    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    c.bench_function("classifier_construction", |b| {
        b.iter(|| Classifier::with_defaults().unwrap());
    });
}

criterion_group!(
    benches,
    bench_classify,
    bench_classify_batch,
    bench_construction
);
criterion_main!(benches);
