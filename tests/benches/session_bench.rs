use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sha2mac_api::{InputEncoding, OutputFormat, Variant};
use sha2mac_session::DigestSession;

const SIZES: &[usize] = &[64, 1024, 65536];

fn bench_fresh_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("session digest (cold)");

    for &size in SIZES {
        let text = "a".repeat(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| {
                let session = DigestSession::new(black_box(text), InputEncoding::Ascii).unwrap();
                black_box(session.digest_encoded(Variant::Sha256, OutputFormat::Hex).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_cached_session(c: &mut Criterion) {
    let session = DigestSession::from_bytes(&vec![0u8; 65536]);
    session.digest(Variant::Sha256).unwrap();

    c.bench_function("session digest (cached)", |b| {
        b.iter(|| black_box(session.digest(black_box(Variant::Sha256)).unwrap()));
    });
}

fn bench_hmac_text(c: &mut Criterion) {
    let session = DigestSession::from_bytes(&vec![0u8; 1024]);
    let key = "0b".repeat(20);

    c.bench_function("session hmac_encoded", |b| {
        b.iter(|| {
            black_box(
                session
                    .hmac_encoded(black_box(&key), InputEncoding::Hex, Variant::Sha256, OutputFormat::Base64)
                    .unwrap(),
            )
        });
    });
}

criterion_group!(benches, bench_fresh_session, bench_cached_session, bench_hmac_text);
criterion_main!(benches);
