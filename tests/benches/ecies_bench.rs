use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nistecies_pke::{Curve, EciesEngine, RawPrivateKey};
use rand::rngs::OsRng;

fn bench_ecies(c: &mut Criterion) {
    let engine = EciesEngine::default();

    for curve in Curve::ALL {
        let mut group = c.benchmark_group(format!("ECIES-{}", curve));
        let recipient = RawPrivateKey::generate(curve, &mut OsRng).unwrap();
        let public = recipient.public_key();

        for size in [16usize, 1024, 16384] {
            let plaintext = vec![0u8; size];
            let envelope = engine.encrypt(&plaintext, &public, None, &mut OsRng).unwrap();
            group.throughput(Throughput::Bytes(size as u64));

            group.bench_with_input(BenchmarkId::new("encrypt", size), &plaintext, |b, pt| {
                b.iter(|| engine.encrypt(pt, &public, None, &mut OsRng).unwrap());
            });
            group.bench_with_input(BenchmarkId::new("decrypt", size), &envelope, |b, env| {
                b.iter(|| engine.decrypt(env, &recipient, None).unwrap());
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_ecies);
criterion_main!(benches);
