use super::SIZE;
use bevy_math::{Vec2, Vec3, Vec4};
use criterion::*;
use lattice_noise::{
    ConfigurableNoise, Noise, SampleableFor,
    perlin::{Perlin, Periodic, perlin_noise_2d},
    simplex::{Simplex, simplex_noise_2d},
};

#[inline]
fn bench_2d(mut noise: impl SampleableFor<Vec2, f32> + ConfigurableNoise) -> f32 {
    noise.set_wavelength(32.0);
    let mut res = 0.0;
    for x in 0..SIZE {
        for y in 0..SIZE {
            res += noise.sample(Vec2::new(x as f32, y as f32));
        }
    }
    res
}

/// Samples a slice through 3d space so the point count matches the 2d benches.
#[inline]
fn bench_3d(mut noise: impl SampleableFor<Vec3, f32> + ConfigurableNoise) -> f32 {
    noise.set_wavelength(32.0);
    let mut res = 0.0;
    for x in 0..SIZE {
        for y in 0..SIZE {
            res += noise.sample(Vec3::new(x as f32, y as f32, (x ^ y) as f32 * 0.01));
        }
    }
    res
}

#[inline]
fn bench_4d(mut noise: impl SampleableFor<Vec4, f32> + ConfigurableNoise) -> f32 {
    noise.set_wavelength(32.0);
    let mut res = 0.0;
    for x in 0..SIZE {
        for y in 0..SIZE {
            let t = (x ^ y) as f32 * 0.01;
            res += noise.sample(Vec4::new(x as f32, y as f32, t, -t));
        }
    }
    res
}

pub fn benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("lattice_noise");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(4));

    group.bench_function("perlin", |bencher| {
        bencher.iter(|| bench_2d(Noise::<Perlin>::default()));
    });
    group.bench_function("tiling perlin", |bencher| {
        bencher.iter(|| {
            bench_2d(Noise::from(Perlin {
                tiling: Periodic(Vec2::splat(8.0)),
            }))
        });
    });
    group.bench_function("perlin 3d", |bencher| {
        bencher.iter(|| bench_3d(Noise::<Perlin>::default()));
    });
    group.bench_function("perlin 4d", |bencher| {
        bencher.iter(|| bench_4d(Noise::<Perlin>::default()));
    });

    group.bench_function("simplex", |bencher| {
        bencher.iter(|| bench_2d(Noise::<Simplex>::default()));
    });
    group.bench_function("simplex 3d", |bencher| {
        bencher.iter(|| bench_3d(Noise::<Simplex>::default()));
    });
    group.bench_function("simplex 4d", |bencher| {
        bencher.iter(|| bench_4d(Noise::<Simplex>::default()));
    });

    group.bench_function("manual perlin and simplex", |bencher| {
        bencher.iter(|| {
            let mut res = 0.0;
            for x in 0..SIZE {
                for y in 0..SIZE {
                    let loc = black_box(Vec2::new(x as f32, y as f32) / 32.0);
                    res += perlin_noise_2d(loc) + simplex_noise_2d(loc);
                }
            }
            res
        });
    });
}
