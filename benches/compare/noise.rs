use super::SIZE;
use criterion::{measurement::WallTime, *};
use noise::{self as noise_rs, NoiseFn};
use noise_rs::{Perlin, Simplex};

pub fn benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("noise");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(4));

    sample_2d(&mut group, "perlin", Perlin::new(Perlin::DEFAULT_SEED));
    sample_2d(&mut group, "simplex", Simplex::new(Simplex::DEFAULT_SEED));

    group.bench_function("perlin 3d", |bencher| {
        bencher.iter(|| {
            let noise = Perlin::new(Perlin::DEFAULT_SEED);
            let frequency = 1.0 / 32.0;
            let mut res = 0.0;
            for x in 0..SIZE {
                for y in 0..SIZE {
                    res += noise.get([
                        x as f64 * frequency,
                        y as f64 * frequency,
                        (x ^ y) as f64 * 0.01 * frequency,
                    ]);
                }
            }
            res
        });
    });
}

fn sample_2d(
    group: &mut BenchmarkGroup<WallTime>,
    name: &str,
    noise: impl NoiseFn<f64, 2>,
) {
    group.bench_function(name, |bencher| {
        bencher.iter(|| {
            let frequency = 1.0 / 32.0;
            let mut res = 0.0;
            for x in 0..SIZE {
                for y in 0..SIZE {
                    res += noise.get([x as f64 * frequency, y as f64 * frequency]);
                }
            }
            res
        });
    });
}
