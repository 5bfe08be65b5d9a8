#![no_std]
#![allow(
    clippy::doc_markdown,
    reason = "These rules should not apply to the readme."
)]
#![doc = include_str!("../README.md")]

pub mod adapters;
pub mod math;
pub mod perlin;
pub mod prelude;
pub mod simplex;
pub mod tables;

use bevy_math::VectorSpace;

/// Represents a simple noise function with an input `I` and an output.
///
/// Every noise function in this crate is pure: the same input always produces the same output.
pub trait NoiseFunction<I> {
    /// The output of the function.
    type Output;

    /// Evaluates the function at `input`.
    fn evaluate(&self, input: I) -> Self::Output;
}

impl<I, T0: NoiseFunction<I>> NoiseFunction<I> for (T0,) {
    type Output = T0::Output;
    #[inline]
    fn evaluate(&self, input: I) -> Self::Output {
        self.0.evaluate(input)
    }
}

macro_rules! impl_noise_function_tuple {
    ($($l:ident-$t:ident-$i:tt),*) => {
        impl<
            I,
            T0: NoiseFunction<I>,
            $($t: NoiseFunction<$l::Output>,)*
        > NoiseFunction<I> for (T0, $($t,)*)
        {
            type Output = <impl_noise_function_tuple!(last $($t),*)>::Output;

            #[inline]
            fn evaluate(&self, input: I) -> Self::Output {
                let input = self.0.evaluate(input);
                $(let input = self.$i.evaluate(input);)*
                input
            }
        }
    };


    (last $f:ident $(,)? ) => {
        $f
    };

    (last $f:ident, $($items:ident),+ $(,)?) => {
        impl_noise_function_tuple!(last $($items),+)
    };
}

#[rustfmt::skip]
mod function_impls {
    use super::*;
    impl_noise_function_tuple!(T0-T1-1);
    impl_noise_function_tuple!(T0-T1-1, T1-T2-2);
    impl_noise_function_tuple!(T0-T1-1, T1-T2-2, T2-T3-3);
    impl_noise_function_tuple!(T0-T1-1, T1-T2-2, T2-T3-3, T3-T4-4);
}

/// Specifies that this noise is configurable.
pub trait ConfigurableNoise {
    /// Sets the scale of the noise via its frequency.
    fn set_frequency(&mut self, frequency: f32);

    /// Gets the scale of the noise via its frequency.
    fn get_frequency(&self) -> f32;

    /// Sets the scale of the noise via its wavelength, the size of one lattice cell in sample space.
    fn set_wavelength(&mut self, wavelength: f32) {
        self.set_frequency(1.0 / wavelength);
    }

    /// Gets the scale of the noise via its wavelength, the size of one lattice cell in sample space.
    fn get_wavelength(&self) -> f32 {
        1.0 / self.get_frequency()
    }
}

/// Indicates that this noise is samplable by type `I`.
pub trait Sampleable<I: VectorSpace> {
    /// Represents the raw result of the sample.
    type Result;

    /// Samples the [`Noise`] at `loc`, returning the raw result of the [`NoiseFunction`].
    fn sample_raw(&self, loc: I) -> Self::Result;

    /// Samples the noise at `loc` for a result of type `T`. This is a convenience over [`SampleableFor`] since it doesn't require `T` to be written in the trait.
    #[inline]
    fn sample_for<T>(&self, loc: I) -> T
    where
        Self: SampleableFor<I, T>,
    {
        self.sample(loc)
    }
}

/// Indicates that this noise is samplable by type `I` for type `T`.
pub trait SampleableFor<I: VectorSpace, T> {
    /// Samples the noise at `loc` for a result of type `T`.
    fn sample(&self, loc: I) -> T;
}

/// A version of [`Sampleable`] that is object safe.
/// This crate uses exact types whenever possible to enable more inlining,
/// but this trait focuses instead on usability at the expense of speed.
///
/// Use [`Sampleable`] when you need performance and [`DynamicSampleable`] when you need object safety, ex: to pick between perlin and simplex noise at runtime.
pub trait DynamicSampleable<I: VectorSpace, T>: ConfigurableNoise + SampleableFor<I, T> {
    /// This is the same as [`SampleableFor::sample`] but it is not inlined.
    fn sample_dyn(&self, loc: I) -> T {
        self.sample(loc)
    }
}

/// This is the standard end interface of a [`NoiseFunction`].
/// It scales the sample location by a frequency before passing it to the [`NoiseFunction`].
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Noise<N> {
    /// The [`NoiseFunction`] powering this noise.
    pub noise: N,
    /// The frequency or scale of the [`Noise`].
    pub frequency: f32,
}

impl<N: Default> Default for Noise<N> {
    fn default() -> Self {
        Self {
            noise: N::default(),
            frequency: 1.0,
        }
    }
}

impl<N> From<N> for Noise<N> {
    fn from(value: N) -> Self {
        Self {
            noise: value,
            frequency: 1.0,
        }
    }
}

impl<I: VectorSpace, N: NoiseFunction<I>> NoiseFunction<I> for Noise<N> {
    type Output = N::Output;

    #[inline]
    fn evaluate(&self, input: I) -> Self::Output {
        self.noise.evaluate(input * self.frequency)
    }
}

impl<N> ConfigurableNoise for Noise<N> {
    fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency;
    }

    fn get_frequency(&self) -> f32 {
        self.frequency
    }
}

impl<I: VectorSpace, N: NoiseFunction<I>> Sampleable<I> for Noise<N> {
    type Result = N::Output;

    #[inline]
    fn sample_raw(&self, loc: I) -> Self::Result {
        self.evaluate(loc)
    }
}

impl<T, I: VectorSpace, N: NoiseFunction<I, Output: Into<T>>> SampleableFor<I, T> for Noise<N> {
    #[inline]
    fn sample(&self, loc: I) -> T {
        self.sample_raw(loc).into()
    }
}

impl<T, I: VectorSpace, N> DynamicSampleable<I, T> for Noise<N> where
    Self: SampleableFor<I, T> + Sampleable<I>
{
}
