//! Contains common imports

pub use crate::{
    ConfigurableNoise, DynamicSampleable, Noise, NoiseFunction, Sampleable, SampleableFor,
    adapters::{SNormToUNorm, UNormToSNorm},
    perlin::{
        Perlin, Periodic, Tiling, Untiled, perlin_noise_2d, perlin_noise_2d_periodic,
        perlin_noise_3d, perlin_noise_3d_periodic, perlin_noise_4d, perlin_noise_4d_periodic,
    },
    simplex::{Simplex, simplex_noise_2d, simplex_noise_3d, simplex_noise_4d},
};
