use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use h3syl::{Config, SyllableSystem};

const PARIS: (f64, f64) = (48.8566, 2.3522);

fn system() -> SyllableSystem {
    let config = Config::bundled("ascii-dnqqwn").expect("bundled config");
    SyllableSystem::new(config).expect("system")
}

fn bench_encode(c: &mut Criterion) {
    let system = system();

    c.bench_function("encode", |b| {
        b.iter(|| {
            system
                .encode(black_box(PARIS.0), black_box(PARIS.1))
                .expect("address")
        })
    });
}

fn bench_decode(c: &mut Criterion) {
    let system = system();
    let address = system.encode(PARIS.0, PARIS.1).expect("address");

    c.bench_function("decode", |b| {
        b.iter(|| system.decode(black_box(&address)).expect("center"))
    });
}

fn bench_estimate(c: &mut Criterion) {
    let system = system();
    let address = system.encode(PARIS.0, PARIS.1).expect("address");

    let mut group = c.benchmark_group("estimate");
    for syllables in [1_usize, 2, 4, 7] {
        let prefix = &address[..2 * syllables];
        group.bench_with_input(
            BenchmarkId::new("prefix", syllables),
            &prefix,
            |b, &prefix| b.iter(|| system.estimate(black_box(prefix))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_estimate);
criterion_main!(benches);
