//! Contains the fixed tables every noise evaluator hashes through.
//!
//! Nothing here is ever mutated. The tables are plain `static`/`const` data,
//! so they are ready before the first sample and can be read from any number of threads at once.

use bevy_math::{IVec2, IVec3, IVec4, Vec3, Vec4};

/// Ken Perlin's reference permutation of `0..=255`.
///
/// The exact order matters: any baked asset sampled from this crate depends on it.
pub const PERLIN_PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

/// A permutation of `0..=255` stored twice end to end.
///
/// Because of the duplication, `table[a + b]` is always in bounds for `a, b < 256`,
/// so nested lookups never need a second modulo.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct PermutationTable([u8; 512]);

/// The process-wide table every evaluator in this crate uses.
pub static PERMUTATION: PermutationTable = PermutationTable::new(&PERLIN_PERMUTATION);

impl PermutationTable {
    /// Builds a table from one period of a permutation.
    /// `base` is expected to contain each of `0..=255` exactly once.
    pub const fn new(base: &[u8; 256]) -> Self {
        let mut table = [0u8; 512];
        let mut i = 0;
        while i < 512 {
            table[i] = base[i & 255];
            i += 1;
        }
        Self(table)
    }

    /// Gets the full, duplicated table.
    #[inline]
    pub const fn as_array(&self) -> &[u8; 512] {
        &self.0
    }

    /// Masks `coord` into `0..256` and looks it up after adding `offset`.
    #[inline(always)]
    fn lookup(&self, coord: i32, offset: u8) -> u8 {
        self.0[(coord & 255) as usize + offset as usize]
    }

    /// Hashes a single lattice coordinate.
    #[inline]
    pub fn hash1(&self, i: i32) -> u8 {
        self.lookup(i, 0)
    }

    /// Hashes a 2d lattice cell: `table[i + table[j]]`.
    #[inline]
    pub fn hash2(&self, cell: IVec2) -> u8 {
        self.lookup(cell.x, self.hash1(cell.y))
    }

    /// Hashes a 3d lattice cell: `table[i + table[j + table[k]]]`.
    #[inline]
    pub fn hash3(&self, cell: IVec3) -> u8 {
        self.lookup(cell.x, self.hash2(IVec2::new(cell.y, cell.z)))
    }

    /// Hashes a 4d lattice cell: `table[i + table[j + table[k + table[l]]]]`.
    #[inline]
    pub fn hash4(&self, cell: IVec4) -> u8 {
        self.lookup(cell.x, self.hash3(IVec3::new(cell.y, cell.z, cell.w)))
    }
}

/// The 12 gradient directions used by 2d and 3d simplex noise: the midpoints of a cube's edges.
/// 2d noise only reads `x` and `y`.
pub const GRAD3: [Vec3; 12] = [
    Vec3::new(1.0, 1.0, 0.0),
    Vec3::new(-1.0, 1.0, 0.0),
    Vec3::new(1.0, -1.0, 0.0),
    Vec3::new(-1.0, -1.0, 0.0),
    Vec3::new(1.0, 0.0, 1.0),
    Vec3::new(-1.0, 0.0, 1.0),
    Vec3::new(1.0, 0.0, -1.0),
    Vec3::new(-1.0, 0.0, -1.0),
    Vec3::new(0.0, 1.0, 1.0),
    Vec3::new(0.0, -1.0, 1.0),
    Vec3::new(0.0, 1.0, -1.0),
    Vec3::new(0.0, -1.0, -1.0),
];

/// The 32 gradient directions used by 4d simplex noise: the midpoints of a tesseract's edges.
pub const GRAD4: [Vec4; 32] = [
    // where x = 0
    Vec4::new(0.0, 1.0, 1.0, 1.0),
    Vec4::new(0.0, 1.0, 1.0, -1.0),
    Vec4::new(0.0, 1.0, -1.0, 1.0),
    Vec4::new(0.0, 1.0, -1.0, -1.0),
    Vec4::new(0.0, -1.0, 1.0, 1.0),
    Vec4::new(0.0, -1.0, 1.0, -1.0),
    Vec4::new(0.0, -1.0, -1.0, 1.0),
    Vec4::new(0.0, -1.0, -1.0, -1.0),
    // where y = 0
    Vec4::new(1.0, 0.0, 1.0, 1.0),
    Vec4::new(1.0, 0.0, 1.0, -1.0),
    Vec4::new(1.0, 0.0, -1.0, 1.0),
    Vec4::new(1.0, 0.0, -1.0, -1.0),
    Vec4::new(-1.0, 0.0, 1.0, 1.0),
    Vec4::new(-1.0, 0.0, 1.0, -1.0),
    Vec4::new(-1.0, 0.0, -1.0, 1.0),
    Vec4::new(-1.0, 0.0, -1.0, -1.0),
    // where z = 0
    Vec4::new(1.0, 1.0, 0.0, 1.0),
    Vec4::new(1.0, 1.0, 0.0, -1.0),
    Vec4::new(1.0, -1.0, 0.0, 1.0),
    Vec4::new(1.0, -1.0, 0.0, -1.0),
    Vec4::new(-1.0, 1.0, 0.0, 1.0),
    Vec4::new(-1.0, 1.0, 0.0, -1.0),
    Vec4::new(-1.0, -1.0, 0.0, 1.0),
    Vec4::new(-1.0, -1.0, 0.0, -1.0),
    // where w = 0
    Vec4::new(1.0, 1.0, 1.0, 0.0),
    Vec4::new(1.0, 1.0, -1.0, 0.0),
    Vec4::new(1.0, -1.0, 1.0, 0.0),
    Vec4::new(1.0, -1.0, -1.0, 0.0),
    Vec4::new(-1.0, 1.0, 1.0, 0.0),
    Vec4::new(-1.0, 1.0, -1.0, 0.0),
    Vec4::new(-1.0, -1.0, 1.0, 0.0),
    Vec4::new(-1.0, -1.0, -1.0, 0.0),
];

/// Picks the [`GRAD3`] entry for a hash.
#[inline]
pub fn gradient3(hash: u8) -> Vec3 {
    GRAD3[hash as usize % GRAD3.len()]
}

/// Picks the [`GRAD4`] entry for a hash.
#[inline]
pub fn gradient4(hash: u8) -> Vec4 {
    GRAD4[hash as usize % GRAD4.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutation_is_a_bijection() {
        let mut seen = [false; 256];
        for &value in PERLIN_PERMUTATION.iter() {
            assert!(!seen[value as usize], "{value} appears twice");
            seen[value as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn table_repeats_after_256() {
        let table = PERMUTATION.as_array();
        assert_eq!(table[..256], PERLIN_PERMUTATION);
        assert_eq!(table[256..], table[..256]);
        assert_eq!(table[0], 151);
        assert_eq!(table[511], 180);
    }

    #[test]
    fn hashes_nest_lookups() {
        let t = PERMUTATION.as_array();
        assert_eq!(PERMUTATION.hash1(3), t[3]);
        assert_eq!(
            PERMUTATION.hash2(IVec2::new(3, 7)),
            t[3 + t[7] as usize]
        );
        assert_eq!(
            PERMUTATION.hash3(IVec3::new(3, 7, 200)),
            t[3 + t[7 + t[200] as usize] as usize]
        );
        assert_eq!(
            PERMUTATION.hash4(IVec4::new(3, 7, 200, 255)),
            t[3 + t[7 + t[200 + t[255] as usize] as usize] as usize]
        );
    }

    #[test]
    fn hashes_wrap_every_256_cells() {
        let cell = IVec4::new(-1, 17, -300, 1024);
        let shifted = cell + IVec4::new(256, -512, 768, -256);
        assert_eq!(PERMUTATION.hash4(cell), PERMUTATION.hash4(shifted));
        assert_eq!(
            PERMUTATION.hash2(IVec2::new(-1, -1)),
            PERMUTATION.hash2(IVec2::new(255, 255))
        );
        assert_eq!(
            PERMUTATION.hash3(IVec3::new(i32::MIN, 0, i32::MAX)),
            PERMUTATION.hash3(IVec3::new(0, 0, 255))
        );
    }

    #[test]
    fn gradients_are_edge_midpoints() {
        for g in GRAD3 {
            let parts = g.to_array();
            assert!(parts.iter().all(|c| [-1.0, 0.0, 1.0].contains(c)));
            assert_eq!(parts.iter().filter(|c| **c == 0.0).count(), 1);
        }
        for g in GRAD4 {
            let parts = g.to_array();
            assert!(parts.iter().all(|c| [-1.0, 0.0, 1.0].contains(c)));
            assert_eq!(parts.iter().filter(|c| **c == 0.0).count(), 1);
        }
    }

    #[test]
    fn gradient_lookup_reduces_hash() {
        assert_eq!(gradient3(0), GRAD3[0]);
        assert_eq!(gradient3(12), GRAD3[0]);
        assert_eq!(gradient3(255), GRAD3[255 % 12]);
        assert_eq!(gradient4(32), GRAD4[0]);
        assert_eq!(gradient4(255), GRAD4[31]);
    }
}
