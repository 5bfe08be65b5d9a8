//! Contains simplex noise in 2, 3, and 4 dimensions.
//!
//! Space is skewed so that the simplices (triangles, tetrahedra, and 5-cells) line up with an integer grid.
//! Each corner of the simplex containing the sample contributes a gradient dot product,
//! weighted by a radial falloff, and the sum is scaled to roughly fill `[-1, 1]`.
//! This follows Stefan Gustavson's reference formulation, including its tie-breaking rules.

use bevy_math::{IVec2, IVec3, IVec4, Vec2, Vec3, Vec4};

use crate::{
    NoiseFunction,
    tables::{PERMUTATION, gradient3, gradient4},
};

/// The 2d skew factor, `(sqrt(3) - 1) / 2`.
pub const F2: f32 = 0.5 * (SQRT_3 - 1.0);
/// The 2d unskew factor, `(3 - sqrt(3)) / 6`.
pub const G2: f32 = (3.0 - SQRT_3) / 6.0;
/// The 3d skew factor, `1 / 3`.
pub const F3: f32 = 1.0 / 3.0;
/// The 3d unskew factor, `1 / 6`.
pub const G3: f32 = 1.0 / 6.0;
/// The 4d skew factor, `(sqrt(5) - 1) / 4`.
pub const F4: f32 = (SQRT_5 - 1.0) / 4.0;
/// The 4d unskew factor, `(5 - sqrt(5)) / 20`.
pub const G4: f32 = (5.0 - SQRT_5) / 20.0;

const SQRT_3: f32 = 1.732_050_8;
const SQRT_5: f32 = 2.236_068;

/// Squared radius past which a corner stops contributing in 2d.
const FALLOFF_2D: f32 = 0.5;
/// Squared radius past which a corner stops contributing in 3d and 4d.
/// The output scales below are tuned for this wider kernel.
const FALLOFF_3D: f32 = 0.6;
const FALLOFF_4D: f32 = 0.6;

const SCALE_2D: f32 = 70.0;
const SCALE_3D: f32 = 32.0;
const SCALE_4D: f32 = 27.0;

/// A [`NoiseFunction`] that produces simplex noise `f32`s roughly between -1 and 1.
///
/// This is implemented for [`Vec2`], [`Vec3`], and [`Vec4`].
/// It is a thin wrapper around [`simplex_noise_2d`], [`simplex_noise_3d`], and [`simplex_noise_4d`].
#[derive(Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct Simplex;

impl NoiseFunction<Vec2> for Simplex {
    type Output = f32;

    #[inline]
    fn evaluate(&self, input: Vec2) -> Self::Output {
        simplex_noise_2d(input)
    }
}

impl NoiseFunction<Vec3> for Simplex {
    type Output = f32;

    #[inline]
    fn evaluate(&self, input: Vec3) -> Self::Output {
        simplex_noise_3d(input)
    }
}

impl NoiseFunction<Vec4> for Simplex {
    type Output = f32;

    #[inline]
    fn evaluate(&self, input: Vec4) -> Self::Output {
        simplex_noise_4d(input)
    }
}

/// Computes one corner's share of the noise.
/// `gradient_dot` is only called if the corner is within the falloff radius.
#[inline(always)]
fn contribution(falloff: f32, distance_squared: f32, gradient_dot: impl FnOnce() -> f32) -> f32 {
    let t = falloff - distance_squared;
    if t < 0.0 {
        0.0
    } else {
        let t2 = t * t;
        t2 * t2 * gradient_dot()
    }
}

/// Samples 2d simplex noise at `point`.
///
/// The result is roughly in `[-1, 1]`, but it is not clamped.
///
/// ```
/// # use bevy_math::Vec2;
/// # use lattice_noise::simplex::simplex_noise_2d;
/// assert_eq!(simplex_noise_2d(Vec2::ZERO), 0.0);
/// ```
pub fn simplex_noise_2d(point: Vec2) -> f32 {
    let skew = point.element_sum() * F2;
    let cell = (point + skew).floor();
    let unskew = cell.element_sum() * G2;
    let x0 = point - (cell - unskew);

    // The middle corner is found by walking along the larger axis first.
    // Ties walk along y.
    let step = if x0.x > x0.y { IVec2::X } else { IVec2::Y };

    let x1 = x0 - step.as_vec2() + G2;
    let x2 = x0 - 1.0 + 2.0 * G2;

    let base = cell.as_ivec2();
    let corner = |offset: IVec2, local: Vec2| {
        contribution(FALLOFF_2D, local.length_squared(), || {
            let hash = PERMUTATION.hash2(base.wrapping_add(offset));
            gradient3(hash).truncate().dot(local)
        })
    };

    let n0 = corner(IVec2::ZERO, x0);
    let n1 = corner(step, x1);
    let n2 = corner(IVec2::ONE, x2);
    SCALE_2D * (n0 + n1 + n2)
}

/// The six ways to order three axes by decreasing offset within a 3d simplex cell.
/// Each names the axes from the largest offset to the smallest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AxisOrder {
    Xyz,
    Xzy,
    Zxy,
    Zyx,
    Yzx,
    Yxz,
}

impl AxisOrder {
    /// Ranks the axes of `offset`.
    /// The comparisons and their tie-breaks decide which tetrahedron the point falls in,
    /// so they must not be reordered.
    #[inline]
    fn rank(offset: Vec3) -> Self {
        let Vec3 { x, y, z } = offset;
        if x >= y {
            if y >= z {
                Self::Xyz
            } else if x >= z {
                Self::Xzy
            } else {
                Self::Zxy
            }
        } else if y < z {
            Self::Zyx
        } else if x < z {
            Self::Yzx
        } else {
            Self::Yxz
        }
    }

    /// Gets the lattice offsets of the second and third corners of the tetrahedron.
    #[inline]
    fn corner_offsets(self) -> (IVec3, IVec3) {
        match self {
            Self::Xyz => (IVec3::new(1, 0, 0), IVec3::new(1, 1, 0)),
            Self::Xzy => (IVec3::new(1, 0, 0), IVec3::new(1, 0, 1)),
            Self::Zxy => (IVec3::new(0, 0, 1), IVec3::new(1, 0, 1)),
            Self::Zyx => (IVec3::new(0, 0, 1), IVec3::new(0, 1, 1)),
            Self::Yzx => (IVec3::new(0, 1, 0), IVec3::new(0, 1, 1)),
            Self::Yxz => (IVec3::new(0, 1, 0), IVec3::new(1, 1, 0)),
        }
    }
}

/// Samples 3d simplex noise at `point`.
///
/// The result is roughly in `[-1, 1]`, but it is not clamped.
pub fn simplex_noise_3d(point: Vec3) -> f32 {
    let skew = point.element_sum() * F3;
    let cell = (point + skew).floor();
    let unskew = cell.element_sum() * G3;
    let x0 = point - (cell - unskew);

    let (o1, o2) = AxisOrder::rank(x0).corner_offsets();

    let x1 = x0 - o1.as_vec3() + G3;
    let x2 = x0 - o2.as_vec3() + 2.0 * G3;
    let x3 = x0 - 1.0 + 3.0 * G3;

    let base = cell.as_ivec3();
    let corner = |offset: IVec3, local: Vec3| {
        contribution(FALLOFF_3D, local.length_squared(), || {
            let hash = PERMUTATION.hash3(base.wrapping_add(offset));
            gradient3(hash).dot(local)
        })
    };

    let n0 = corner(IVec3::ZERO, x0);
    let n1 = corner(o1, x1);
    let n2 = corner(o2, x2);
    let n3 = corner(IVec3::ONE, x3);
    SCALE_3D * (n0 + n1 + n2 + n3)
}

/// Ranks each axis of `offset` from 0 (smallest) to 3 (largest).
///
/// Each of the six axis pairs awards a point to the larger axis.
/// On a tie, the later axis wins.
#[inline]
fn rank_axes(offset: Vec4) -> [u8; 4] {
    const PAIRS: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
    let offset = offset.to_array();
    let mut rank = [0u8; 4];
    for (a, b) in PAIRS {
        if offset[a] > offset[b] {
            rank[a] += 1;
        } else {
            rank[b] += 1;
        }
    }
    rank
}

/// Samples 4d simplex noise at `point`.
///
/// The result is roughly in `[-1, 1]`, but it is not clamped.
pub fn simplex_noise_4d(point: Vec4) -> f32 {
    let skew = point.element_sum() * F4;
    let cell = (point + skew).floor();
    let unskew = cell.element_sum() * G4;
    let x0 = point - (cell - unskew);

    // Axes step in order of decreasing rank, so the nth corner has stepped along every axis ranked at least `4 - n`.
    let rank = rank_axes(x0);
    let stepped = |threshold: u8| IVec4::from_array(rank.map(|r| i32::from(r >= threshold)));
    let o1 = stepped(3);
    let o2 = stepped(2);
    let o3 = stepped(1);

    let x1 = x0 - o1.as_vec4() + G4;
    let x2 = x0 - o2.as_vec4() + 2.0 * G4;
    let x3 = x0 - o3.as_vec4() + 3.0 * G4;
    let x4 = x0 - 1.0 + 4.0 * G4;

    let base = cell.as_ivec4();
    let corner = |offset: IVec4, local: Vec4| {
        contribution(FALLOFF_4D, local.length_squared(), || {
            let hash = PERMUTATION.hash4(base.wrapping_add(offset));
            gradient4(hash).dot(local)
        })
    };

    let n0 = corner(IVec4::ZERO, x0);
    let n1 = corner(o1, x1);
    let n2 = corner(o2, x2);
    let n3 = corner(o3, x3);
    let n4 = corner(IVec4::ONE, x4);
    SCALE_4D * (n0 + n1 + n2 + n3 + n4)
}
