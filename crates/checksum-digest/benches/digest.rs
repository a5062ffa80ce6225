use std::hint::black_box;
use std::io::Cursor;

use checksum_digest::{Algorithm, StreamOptions, digest_reader};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const INPUT_LEN: usize = 8 * 1024 * 1024;

fn bench_single_algorithm(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_algorithm");
    let data = vec![0x5Au8; INPUT_LEN];
    group.throughput(Throughput::Bytes(INPUT_LEN as u64));

    for algorithm in Algorithm::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(algorithm), &algorithm, |b, &alg| {
            b.iter(|| {
                digest_reader(Cursor::new(black_box(&data)), &[alg], &StreamOptions::new()).unwrap()
            });
        });
    }

    group.finish();
}

fn bench_fan_out_chunk_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("fan_out_all");
    let data = vec![0x5Au8; INPUT_LEN];
    group.throughput(Throughput::Bytes(INPUT_LEN as u64));

    for chunk_size in [4 * 1024, 32 * 1024, 256 * 1024] {
        let options = StreamOptions::new().chunk_size(chunk_size);
        group.bench_with_input(BenchmarkId::from_parameter(chunk_size), &options, |b, options| {
            b.iter(|| digest_reader(Cursor::new(black_box(&data)), &Algorithm::ALL, options).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_algorithm, bench_fan_out_chunk_size);
criterion_main!(benches);
