//! Contains classic Perlin noise in 2, 3, and 4 dimensions, with optional tiling.
//!
//! Unlike [`simplex`](crate::simplex), this samples the axis aligned hypercube around the point.
//! Gradients are not looked up from a table. Instead, each corner's lattice coordinates run through
//! a polynomial hash modulo 289, and the hash is unpacked into a gradient with floor and fract steps.
//! The corner dot products are blended with the quintic [`fade`](LatticeMath::fade) curve.
//!
//! Because all of the hashing happens on whole `f32`s, the lattice is only distinct for 289 cells on each axis.
//! The periodic variants wrap the lattice to a smaller period before hashing, which makes the noise tile.

use bevy_math::{Vec2, Vec3, Vec4};

use crate::{NoiseFunction, math::LatticeMath};

const SCALE_2D: f32 = 2.3;
const SCALE_3D: f32 = 2.2;
const SCALE_4D: f32 = 2.2;

/// Decides how lattice coordinates wrap before they are hashed.
pub trait Tiling<V> {
    /// Wraps the whole-numbered lattice coordinates `cell`.
    fn wrap(&self, cell: V) -> V;
}

/// A [`Tiling`] that leaves the lattice alone.
/// The noise still repeats, but only every 289 units.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct Untiled;

impl<V> Tiling<V> for Untiled {
    #[inline(always)]
    fn wrap(&self, cell: V) -> V {
        cell
    }
}

/// A [`Tiling`] that repeats the lattice every `period` units on each axis.
///
/// Each axis of the period should be a positive whole number.
/// Anything else is a logic error and will produce meaningless (but finite) noise for finite inputs.
/// Debug builds assert that the period is positive.
#[derive(Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct Periodic<V>(pub V);

/// Samples the 4 corner gradients of a 2d cell from their hashes.
#[inline]
fn gradients_2d(hash: Vec4) -> [Vec2; 4] {
    let gx = (hash * (1.0 / 41.0)).fract_floor() * 2.0 - 1.0;
    let gy = gx.abs() - 0.5;
    let gx = gx - (gx + 0.5).floor();
    [0, 1, 2, 3].map(|corner| {
        let gradient = Vec2::new(gx[corner], gy[corner]);
        gradient * gradient.length_squared().taylor_inv_sqrt()
    })
}

/// Samples 4 gradients for the corners of a 3d cell from their hashes.
/// The hash is split into a 7 by 7 grid on an octahedron, and points outside the octahedron are folded back in.
#[inline]
fn gradients_3d(hash: Vec4) -> [Vec3; 4] {
    let gx = hash * (1.0 / 7.0);
    let gy = (gx.floor() * (1.0 / 7.0)).fract_floor() - 0.5;
    let gx = gx.fract_floor();
    let gz = 0.5 - gx.abs() - gy.abs();
    let fold = Vec4::ZERO.step(gz);
    let gx = gx - fold * (gx.step(Vec4::ZERO) - 0.5);
    let gy = gy - fold * (gy.step(Vec4::ZERO) - 0.5);
    [0, 1, 2, 3].map(|corner| {
        let gradient = Vec3::new(gx[corner], gy[corner], gz[corner]);
        gradient * gradient.length_squared().taylor_inv_sqrt()
    })
}

/// Samples 4 gradients for the corners of a 4d cell from their hashes.
/// This is the 3d approach lifted onto a cross polytope: a 7 by 7 by 6 grid.
#[inline]
fn gradients_4d(hash: Vec4) -> [Vec4; 4] {
    let gx = hash * (1.0 / 7.0);
    let gy = gx.floor() * (1.0 / 7.0);
    let gz = gy.floor() * (1.0 / 6.0);
    let gx = gx.fract_floor() - 0.5;
    let gy = gy.fract_floor() - 0.5;
    let gz = gz.fract_floor() - 0.5;
    let gw = 0.75 - gx.abs() - gy.abs() - gz.abs();
    let fold = Vec4::ZERO.step(gw);
    let gx = gx - fold * (gx.step(Vec4::ZERO) - 0.5);
    let gy = gy - fold * (gy.step(Vec4::ZERO) - 0.5);
    [0, 1, 2, 3].map(|corner| {
        let gradient = Vec4::new(gx[corner], gy[corner], gz[corner], gw[corner]);
        gradient * gradient.length_squared().taylor_inv_sqrt()
    })
}

/// The hypercube of the lattice that contains a sample.
struct LatticeCell<V> {
    /// The hashable coordinates of the lowest corner.
    lower: V,
    /// The hashable coordinates of the highest corner.
    upper: V,
    /// The offset of the sample from the lowest corner.
    near: V,
    /// The offset of the sample from the highest corner.
    far: V,
}

macro_rules! impl_lattice_cell {
    ($vec:ty, $d:literal) => {
        impl Tiling<$vec> for Periodic<$vec> {
            #[inline]
            fn wrap(&self, cell: $vec) -> $vec {
                debug_assert!(
                    self.0.cmpgt(<$vec>::ZERO).all(),
                    "tiling periods must be positive"
                );
                cell.floor_mod(self.0)
            }
        }

        impl LatticeCell<$vec> {
            #[inline]
            fn new(point: $vec, tiling: &impl Tiling<$vec>) -> Self {
                let lower = point.floor();
                let upper = lower + 1.0;
                let near = point.fract_floor();
                Self {
                    lower: tiling.wrap(lower).mod289(),
                    upper: tiling.wrap(upper).mod289(),
                    near,
                    far: near - 1.0,
                }
            }

            /// Gets the offset of the sample from a corner of the cell.
            /// Bit `n` of `corner` is set when that corner is on the high side of axis `n`.
            #[inline]
            fn offset(&self, corner: usize) -> $vec {
                let near = self.near.to_array();
                let far = self.far.to_array();
                <$vec>::from_array(core::array::from_fn::<f32, $d, _>(|axis| {
                    if (corner >> axis) & 1 == 1 {
                        far[axis]
                    } else {
                        near[axis]
                    }
                }))
            }

            /// Hashes the x and y coordinates of the 4 columns through the cell,
            /// in the order (low x, low y), (high x, low y), (low x, high y), (high x, high y).
            #[inline]
            fn hash_xy(&self) -> Vec4 {
                let ix = Vec4::new(self.lower.x, self.upper.x, self.lower.x, self.upper.x);
                let iy = Vec4::new(self.lower.y, self.lower.y, self.upper.y, self.upper.y);
                (ix.permute() + iy).permute()
            }
        }
    };
}

impl_lattice_cell!(Vec2, 2);
impl_lattice_cell!(Vec3, 3);
impl_lattice_cell!(Vec4, 4);

#[inline]
fn perlin_2d(point: Vec2, tiling: &impl Tiling<Vec2>) -> f32 {
    let cell = LatticeCell::<Vec2>::new(point, tiling);
    let gradients = gradients_2d(cell.hash_xy());
    let n = Vec4::from_array(core::array::from_fn(|corner| {
        gradients[corner].dot(cell.offset(corner))
    }));

    let fade = cell.near.fade();
    let n_x = Vec2::new(n.x, n.z).mix(Vec2::new(n.y, n.w), fade.x);
    SCALE_2D * n_x.x.mix(n_x.y, fade.y)
}

#[inline]
fn perlin_3d(point: Vec3, tiling: &impl Tiling<Vec3>) -> f32 {
    let cell = LatticeCell::<Vec3>::new(point, tiling);
    let hash_xy = cell.hash_xy();
    let low_z = gradients_3d((hash_xy + cell.lower.z).permute());
    let high_z = gradients_3d((hash_xy + cell.upper.z).permute());

    let dots = |gradients: [Vec3; 4], z: usize| {
        Vec4::from_array(core::array::from_fn(|xy| {
            gradients[xy].dot(cell.offset(xy | (z << 2)))
        }))
    };
    let n_low_z = dots(low_z, 0);
    let n_high_z = dots(high_z, 1);

    let fade = cell.near.fade();
    let n_z = n_low_z.mix(n_high_z, fade.z);
    let n_yz = Vec2::new(n_z.x, n_z.y).mix(Vec2::new(n_z.z, n_z.w), fade.y);
    SCALE_3D * n_yz.x.mix(n_yz.y, fade.x)
}

#[inline]
fn perlin_4d(point: Vec4, tiling: &impl Tiling<Vec4>) -> f32 {
    let cell = LatticeCell::<Vec4>::new(point, tiling);
    let hash_xy = cell.hash_xy();
    let hash_low_z = (hash_xy + cell.lower.z).permute();
    let hash_high_z = (hash_xy + cell.upper.z).permute();

    let dots = |hash_xyz: Vec4, w: f32, corner_zw: usize| {
        let gradients = gradients_4d((hash_xyz + w).permute());
        Vec4::from_array(core::array::from_fn(|xy| {
            gradients[xy].dot(cell.offset(xy | (corner_zw << 2)))
        }))
    };
    let n_low_z_low_w = dots(hash_low_z, cell.lower.w, 0b00);
    let n_high_z_low_w = dots(hash_high_z, cell.lower.w, 0b01);
    let n_low_z_high_w = dots(hash_low_z, cell.upper.w, 0b10);
    let n_high_z_high_w = dots(hash_high_z, cell.upper.w, 0b11);

    let fade = cell.near.fade();
    let n_low_z = n_low_z_low_w.mix(n_low_z_high_w, fade.w);
    let n_high_z = n_high_z_low_w.mix(n_high_z_high_w, fade.w);
    let n_zw = n_low_z.mix(n_high_z, fade.z);
    let n_yzw = Vec2::new(n_zw.x, n_zw.y).mix(Vec2::new(n_zw.z, n_zw.w), fade.y);
    SCALE_4D * n_yzw.x.mix(n_yzw.y, fade.x)
}

/// Samples 2d classic Perlin noise at `point`.
///
/// The result is roughly in `[-1, 1]`, but it is not clamped.
/// Every lattice point maps to 0.
///
/// ```
/// # use bevy_math::Vec2;
/// # use lattice_noise::perlin::perlin_noise_2d;
/// assert_eq!(perlin_noise_2d(Vec2::new(3.0, -8.0)), 0.0);
/// ```
pub fn perlin_noise_2d(point: Vec2) -> f32 {
    perlin_2d(point, &Untiled)
}

/// Samples 3d classic Perlin noise at `point`.
///
/// The result is roughly in `[-1, 1]`, but it is not clamped.
pub fn perlin_noise_3d(point: Vec3) -> f32 {
    perlin_3d(point, &Untiled)
}

/// Samples 4d classic Perlin noise at `point`.
///
/// The result is roughly in `[-1, 1]`, but it is not clamped.
pub fn perlin_noise_4d(point: Vec4) -> f32 {
    perlin_4d(point, &Untiled)
}

/// Samples 2d classic Perlin noise at `point`, tiled every `period` units.
///
/// Each axis of `period` must be a positive whole number.
/// Then, for any whole `k`, `point + k * period` samples the same value as `point`.
pub fn perlin_noise_2d_periodic(point: Vec2, period: Vec2) -> f32 {
    perlin_2d(point, &Periodic(period))
}

/// Samples 3d classic Perlin noise at `point`, tiled every `period` units.
///
/// Each axis of `period` must be a positive whole number.
pub fn perlin_noise_3d_periodic(point: Vec3, period: Vec3) -> f32 {
    perlin_3d(point, &Periodic(period))
}

/// Samples 4d classic Perlin noise at `point`, tiled every `period` units.
///
/// Each axis of `period` must be a positive whole number.
pub fn perlin_noise_4d_periodic(point: Vec4, period: Vec4) -> f32 {
    perlin_4d(point, &Periodic(period))
}

/// A [`NoiseFunction`] that produces classic Perlin noise `f32`s roughly between -1 and 1.
///
/// This is implemented for [`Vec2`], [`Vec3`], and [`Vec4`].
/// `T` is the [`Tiling`]. Use [`Periodic`] to make the noise tile.
#[derive(Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct Perlin<T = Untiled> {
    /// How the lattice wraps.
    pub tiling: T,
}

impl<V> Perlin<Periodic<V>> {
    /// Creates a [`Perlin`] that repeats every `period` units.
    pub fn periodic(period: V) -> Self {
        Self {
            tiling: Periodic(period),
        }
    }
}

impl<T: Tiling<Vec2>> NoiseFunction<Vec2> for Perlin<T> {
    type Output = f32;

    #[inline]
    fn evaluate(&self, input: Vec2) -> Self::Output {
        perlin_2d(input, &self.tiling)
    }
}

impl<T: Tiling<Vec3>> NoiseFunction<Vec3> for Perlin<T> {
    type Output = f32;

    #[inline]
    fn evaluate(&self, input: Vec3) -> Self::Output {
        perlin_3d(input, &self.tiling)
    }
}

impl<T: Tiling<Vec4>> NoiseFunction<Vec4> for Perlin<T> {
    type Output = f32;

    #[inline]
    fn evaluate(&self, input: Vec4) -> Self::Output {
        perlin_4d(input, &self.tiling)
    }
}
