//! Contains the small, per-element math the lattice noise functions are built from.
//!
//! These are spelled out here rather than borrowed from the vector types directly
//! because the noise output depends on their exact rounding behavior.
//! For example, [`LatticeMath::fract_floor`] is always `x - floor(x)`, even for negative `x`.

use bevy_math::{Vec2, Vec3, Vec4, ops};

/// Element-wise operations on `f32` and the `bevy_math` float vectors.
pub trait LatticeMath: Copy {
    /// Returns `self - floor(self)`, which is always in `[0, 1)`.
    fn fract_floor(self) -> Self;

    /// Returns `self - modulus * floor(self / modulus)`.
    /// For positive `modulus`, this is in `[0, modulus)`.
    fn floor_mod(self, modulus: Self) -> Self;

    /// Returns 0 where `self < edge` and 1 everywhere else.
    fn step(self, edge: Self) -> Self;

    /// Returns `self + t * (other - self)`.
    fn mix(self, other: Self, t: f32) -> Self;

    /// Reduces whole numbers into `0..289`.
    fn mod289(self) -> Self;

    /// The polynomial permutation `mod289((34x + 1) * x)`.
    /// This is a bijection on the whole numbers `0..289`.
    fn permute(self) -> Self;

    /// A first order approximation of `1 / sqrt(r)` that is accurate near `r = 0.7`,
    /// which is where the squared lengths of hashed gradients land.
    fn taylor_inv_sqrt(self) -> Self;

    /// The quintic fade curve `6t^5 - 15t^4 + 10t^3`.
    /// Its first and second derivatives are 0 at both 0 and 1.
    fn fade(self) -> Self;
}

const TAYLOR_A: f32 = 1.792_842_9;
const TAYLOR_B: f32 = 0.853_734_73;

impl LatticeMath for f32 {
    #[inline]
    fn fract_floor(self) -> Self {
        self - ops::floor(self)
    }

    #[inline]
    fn floor_mod(self, modulus: Self) -> Self {
        self - modulus * ops::floor(self / modulus)
    }

    #[inline]
    fn step(self, edge: Self) -> Self {
        if self < edge { 0.0 } else { 1.0 }
    }

    #[inline]
    fn mix(self, other: Self, t: f32) -> Self {
        self + t * (other - self)
    }

    #[inline]
    fn mod289(self) -> Self {
        self - ops::floor(self * (1.0 / 289.0)) * 289.0
    }

    #[inline]
    fn permute(self) -> Self {
        ((self * 34.0 + 1.0) * self).mod289()
    }

    #[inline]
    fn taylor_inv_sqrt(self) -> Self {
        TAYLOR_A - TAYLOR_B * self
    }

    #[inline]
    fn fade(self) -> Self {
        self * self * self * (self * (self * 6.0 - 15.0) + 10.0)
    }
}

macro_rules! impl_lattice_math {
    ($t:ty) => {
        impl LatticeMath for $t {
            #[inline]
            fn fract_floor(self) -> Self {
                self - self.floor()
            }

            #[inline]
            fn floor_mod(self, modulus: Self) -> Self {
                self - modulus * (self / modulus).floor()
            }

            #[inline]
            fn step(self, edge: Self) -> Self {
                <$t>::select(self.cmplt(edge), <$t>::ZERO, <$t>::ONE)
            }

            #[inline]
            fn mix(self, other: Self, t: f32) -> Self {
                self + t * (other - self)
            }

            #[inline]
            fn mod289(self) -> Self {
                self - (self * (1.0 / 289.0)).floor() * 289.0
            }

            #[inline]
            fn permute(self) -> Self {
                ((self * 34.0 + 1.0) * self).mod289()
            }

            #[inline]
            fn taylor_inv_sqrt(self) -> Self {
                TAYLOR_A - TAYLOR_B * self
            }

            #[inline]
            fn fade(self) -> Self {
                self * self * self * (self * (self * 6.0 - 15.0) + 10.0)
            }
        }
    };
}

impl_lattice_math!(Vec2);
impl_lattice_math!(Vec3);
impl_lattice_math!(Vec4);
