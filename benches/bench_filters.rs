use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ringscan_core::{LidarScan, PointXYZIR};
use ringscan_filters::{remove_invalid_points, resample_to};
use ringscan_stats::{median_range, ring_near_max_ranges};

fn random_scan(n: usize, seed: u64) -> LidarScan {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let x = if rng.gen_bool(0.01) {
                f32::NAN
            } else {
                rng.gen_range(-50.0f32..50.0)
            };
            PointXYZIR::new(
                x,
                rng.gen_range(-3.0f32..3.0),
                rng.gen_range(-50.0f32..50.0),
                rng.gen_range(0.0f32..100.0),
                (i % 64) as u16,
            )
        })
        .collect()
}

fn bench_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample_to");
    for size in [100_000, 1_000_000] {
        let scan = random_scan(size, 42);
        group.bench_with_input(BenchmarkId::new("ringscan", size), &scan, |b, scan| {
            b.iter(|| resample_to(scan, size / 10))
        });
    }
    group.finish();
}

fn bench_remove_invalid(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_invalid_points");
    for size in [100_000, 1_000_000] {
        let scan = random_scan(size, 42);
        group.bench_with_input(BenchmarkId::new("ringscan", size), &scan, |b, scan| {
            b.iter(|| {
                let mut scan = scan.clone();
                remove_invalid_points(&mut scan)
            })
        });
    }
    group.finish();
}

fn bench_range_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_stats");
    let sensor = ringscan_core::SensorModel::hdl64();
    let scan = random_scan(130_000, 42);
    group.bench_function("median_range", |b| b.iter(|| median_range(&scan)));
    group.bench_function("ring_near_max_ranges", |b| {
        b.iter(|| ring_near_max_ranges(&scan, &sensor))
    });
    group.finish();
}

criterion_group!(benches, bench_resample, bench_remove_invalid, bench_range_stats);
criterion_main!(benches);
