//! This example demonstrates how the noise library works from an API perspective.
//! To see what the noise looks like, see the "`show_noise`" example.

use bevy_math::{IVec2, Vec2, Vec3, Vec4};
use lattice_noise::{prelude::*, tables::PERMUTATION};

fn main() {
    // Free functions are the most direct way to sample.
    println!(
        "Simplex 2d at (0.5, 0.25): {}.",
        simplex_noise_2d(Vec2::new(0.5, 0.25))
    );
    println!(
        "Simplex 3d at (1.5, -2.25, 0.75): {}.",
        simplex_noise_3d(Vec3::new(1.5, -2.25, 0.75))
    );
    println!(
        "Perlin 4d at (0.3, -1.7, 2.9, 4.1): {}.",
        perlin_noise_4d(Vec4::new(0.3, -1.7, 2.9, 4.1))
    );

    // Periodic noise repeats exactly every `period` units.
    let period = Vec2::new(3.0, 5.0);
    let here = Vec2::new(0.75, -1.5);
    println!(
        "Tiled perlin at {here}: {}, and one tile over: {}.",
        perlin_noise_2d_periodic(here, period),
        perlin_noise_2d_periodic(here + period, period)
    );

    // The hash behind simplex noise.
    println!(
        "The lattice cell (3, 7) hashes to {}.",
        PERMUTATION.hash2(IVec2::new(3, 7))
    );

    // Noise functions
    println!(
        "Simplex from noise function: {}.",
        Simplex.evaluate(Vec4::new(-5.5, 0.25, 1.75, -0.6))
    );

    // Noise type
    let mut perlin = Noise::<(Perlin, SNormToUNorm)>::default();
    perlin.set_wavelength(32.0); // One lattice cell every 32 units.
    // These inline. Use them in tight loops:
    let unorm = perlin.sample_for::<f32>(Vec2::new(100.0, 40.0));
    let _or_sample: f64 = perlin.sample(Vec3::new(100.0, 40.0, 7.0)); // f32 is still generated, but we can ask for anything that implements into, like f64.
    println!("Perlin noise mapped to unorm: {unorm}.");

    // Tiling
    let tiled = Noise::from(Perlin::periodic(Vec2::splat(4.0)));
    println!(
        "Tiled perlin noise: {} == {}.",
        tiled.sample_for::<f32>(Vec2::new(0.3, 0.6)),
        tiled.sample_for::<f32>(Vec2::new(4.3, -3.4))
    );

    // Dynamic noise
    // This is not inlined, so it's not recommended to do this for tight loops.
    let dyn_noise: Box<dyn DynamicSampleable<Vec2, f32>> = Box::new(Noise::from(Simplex));
    println!(
        "dyn noise sample: {}",
        dyn_noise.sample_dyn(Vec2::new(-1.2, 1.0))
    );
}
