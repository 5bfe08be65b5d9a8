//! Contains small [`NoiseFunction`]s that reshape the output of another one.
//! Chain them after a noise function with a tuple, ex: `(Perlin::default(), SNormToUNorm)`.

use crate::NoiseFunction;

/// A [`NoiseFunction`] that maps `f32`s from (-1, 1) to (0, 1).
///
/// Noise that overshoots (-1, 1) will overshoot (0, 1) too. Nothing is clamped.
#[derive(Default, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct SNormToUNorm;

/// A [`NoiseFunction`] that maps `f32`s from (0, 1) to (-1, 1).
#[derive(Default, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct UNormToSNorm;

impl NoiseFunction<f32> for SNormToUNorm {
    type Output = f32;

    #[inline]
    fn evaluate(&self, input: f32) -> Self::Output {
        input * 0.5 + 0.5
    }
}

impl NoiseFunction<f32> for UNormToSNorm {
    type Output = f32;

    #[inline]
    fn evaluate(&self, input: f32) -> Self::Output {
        (input - 0.5) * 2.0
    }
}
