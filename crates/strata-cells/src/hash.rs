//! Spatial hash from horizontal positions to world-cell keys.
//!
//! The plane is split into four quadrants by coordinate sign. Inside a
//! quadrant, the magnitude of each axis is shifted right by [`CELL_SHIFT`]
//! to get a grid index, and the two 32-bit indices are packed into one
//! 64-bit id. Because the sign is folded out before shifting, the same id
//! appears in every quadrant; a [`CellKey`] is only unique together with
//! its [`Quadrant`].

use crate::CellCoord;

/// Log2 of the cell edge length in world units.
pub const CELL_SHIFT: u32 = 8;

/// Cell edge length in world units.
pub const CELL_SIZE: u32 = 1 << CELL_SHIFT;

/// Cell id that no position can hash to. Grid indices never exceed
/// `2^31 >> CELL_SHIFT`, so the all-ones pattern is unreachable.
pub const CELL_ID_SENTINEL: u64 = u64::MAX;

/// One of the four sign partitions of the horizontal plane.
///
/// The discriminant is the partition index: bit 0 is set for negative X,
/// bit 1 for negative Y.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum Quadrant {
    /// `x >= 0`, `y >= 0`.
    #[default]
    PosXPosY = 0,
    /// `x < 0`, `y >= 0`.
    NegXPosY = 1,
    /// `x >= 0`, `y < 0`.
    PosXNegY = 2,
    /// `x < 0`, `y < 0`.
    NegXNegY = 3,
}

impl Quadrant {
    /// All quadrants in index order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::PosXPosY,
        Quadrant::NegXPosY,
        Quadrant::PosXNegY,
        Quadrant::NegXNegY,
    ];

    /// Quadrant for the given axis signs.
    pub fn from_signs(negative_x: bool, negative_y: bool) -> Self {
        Self::from_index(u8::from(negative_x) + 2 * u8::from(negative_y))
    }

    /// Quadrant for a partition index.
    ///
    /// # Panics
    ///
    /// Panics if `index > 3`. An out-of-range index is a logic error in the
    /// caller, never a data condition.
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => Quadrant::PosXPosY,
            1 => Quadrant::NegXPosY,
            2 => Quadrant::PosXNegY,
            3 => Quadrant::NegXNegY,
            _ => panic!("quadrant index {index} out of range 0..=3"),
        }
    }

    /// Partition index in `0..4`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// True for the two quadrants left of the Y axis.
    pub fn negative_x(self) -> bool {
        (self as u8) & 1 != 0
    }

    /// True for the two quadrants below the X axis.
    pub fn negative_y(self) -> bool {
        (self as u8) & 2 != 0
    }
}

/// Directory key of a world cell: quadrant plus packed grid indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellKey {
    /// Sign partition the cell lies in.
    pub quadrant: Quadrant,
    /// `gx | gy << 32`, unique within `quadrant` only.
    pub id: u64,
}

impl CellKey {
    /// Grid indices `(gx, gy)` unpacked from the low and high halves of the id.
    pub fn grid(&self) -> (u32, u32) {
        (self.id as u32, (self.id >> 32) as u32)
    }

    /// Centroid and extent of the cell in world units.
    pub fn coord(&self) -> CellCoord {
        let (gx, gy) = self.grid();
        let half = i64::from(CELL_SIZE / 2);
        let mut x = (i64::from(gx) << CELL_SHIFT) + half;
        let mut y = (i64::from(gy) << CELL_SHIFT) + half;
        if self.quadrant.negative_x() {
            x = -x;
        }
        if self.quadrant.negative_y() {
            y = -y;
        }
        CellCoord {
            x: x as f32,
            y: y as f32,
            size: CELL_SIZE as f32,
        }
    }
}

/// Hashes a horizontal position to its cell key.
///
/// Coordinates are truncated toward zero before anything else, so `-0.4`
/// becomes `0` and lands in the non-negative quadrant. Values beyond the
/// `i32` range saturate; NaN truncates to zero.
pub fn cell_key(x: f32, y: f32) -> CellKey {
    let xi = x as i32;
    let yi = y as i32;
    let quadrant = Quadrant::from_signs(xi < 0, yi < 0);
    let gx = u64::from(xi.unsigned_abs() >> CELL_SHIFT);
    let gy = u64::from(yi.unsigned_abs() >> CELL_SHIFT);
    CellKey {
        quadrant,
        id: gx | (gy << 32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: f32 = CELL_SIZE as f32;

    #[test]
    fn test_origin_is_cell_zero_of_first_quadrant() {
        let key = cell_key(0.0, 0.0);
        assert_eq!(key.quadrant, Quadrant::PosXPosY);
        assert_eq!(key.id, 0);

        let coord = key.coord();
        assert_eq!(coord.x, SIZE / 2.0);
        assert_eq!(coord.y, SIZE / 2.0);
        assert_eq!(coord.size, SIZE);
    }

    #[test]
    fn test_quadrant_follows_signs() {
        assert_eq!(cell_key(5.0, 5.0).quadrant, Quadrant::PosXPosY);
        assert_eq!(cell_key(-5.0, 5.0).quadrant, Quadrant::NegXPosY);
        assert_eq!(cell_key(5.0, -5.0).quadrant, Quadrant::PosXNegY);
        assert_eq!(cell_key(-5.0, -5.0).quadrant, Quadrant::NegXNegY);
    }

    #[test]
    fn test_quadrant_stable_under_magnitude_change() {
        let signs = [(1.0, 1.0), (-1.0, 1.0), (1.0, -1.0), (-1.0, -1.0)];
        let magnitudes = [1.0, 7.5, 255.0, 256.0, 10_000.0, 1.0e6];
        for (sx, sy) in signs {
            let expected = cell_key(sx * 3.0, sy * 3.0).quadrant;
            for mx in magnitudes {
                for my in magnitudes {
                    assert_eq!(cell_key(sx * mx, sy * my).quadrant, expected);
                }
            }
        }
    }

    #[test]
    fn test_truncation_toward_zero_near_origin() {
        let key = cell_key(-0.4, -0.9);
        assert_eq!(key.quadrant, Quadrant::PosXPosY);
        assert_eq!(key.id, 0);

        assert_eq!(cell_key(-1.0, 0.0).quadrant, Quadrant::NegXPosY);
    }

    #[test]
    fn test_fraction_is_discarded_not_rounded() {
        assert_eq!(cell_key(255.9, 0.0).grid(), (0, 0));
        assert_eq!(cell_key(256.0, 0.0).grid(), (1, 0));
        assert_eq!(cell_key(-255.9, 0.0).grid(), (0, 0));
        assert_eq!(cell_key(-256.0, 0.0).grid(), (1, 0));
    }

    #[test]
    fn test_positions_within_one_cell_share_a_key() {
        let base = cell_key(512.0, 768.0);
        for dx in [0.0, 1.0, 100.5, 255.0] {
            for dy in [0.0, 17.0, 255.99] {
                assert_eq!(cell_key(512.0 + dx, 768.0 + dy), base);
            }
        }
    }

    #[test]
    fn test_translation_by_cell_size_steps_grid_index() {
        for quadrant_sign in [1.0_f32, -1.0] {
            let x = quadrant_sign * 300.0;
            let (gx, gy) = cell_key(x, 40.0).grid();
            for k in 1..5u32 {
                let shifted = x + quadrant_sign * SIZE * k as f32;
                let key = cell_key(shifted, 40.0);
                assert_eq!(key.grid(), (gx + k, gy));
                assert_eq!(key.quadrant, cell_key(x, 40.0).quadrant);
            }
        }
    }

    #[test]
    fn test_adjacent_rows_differ_by_cell_size() {
        let a = cell_key(10.0, 10.0);
        let b = cell_key(10.0, 10.0 + SIZE);

        assert_ne!(a.id, b.id);
        assert_eq!(a.quadrant, b.quadrant);
        assert_eq!(b.coord().y - a.coord().y, SIZE);
        assert_eq!(b.coord().x, a.coord().x);
    }

    #[test]
    fn test_centroid_rehashes_to_same_key() {
        let samples = [
            (0.0, 0.0),
            (10.0, 10.0),
            (-10.0, 10.0),
            (10.0, -10.0),
            (-3000.5, -777.0),
            (65_536.0, -1.0),
            (-1.0e6, 2.5e6),
        ];
        for (x, y) in samples {
            let key = cell_key(x, y);
            let coord = key.coord();
            assert_eq!(cell_key(coord.x, coord.y), key, "sample ({x}, {y})");
        }
    }

    #[test]
    fn test_mirrored_cells_share_id_but_not_quadrant() {
        let east = cell_key(10.0, 10.0);
        let west = cell_key(-10.0, 10.0);

        assert_eq!(east.id, west.id);
        assert_ne!(east.quadrant, west.quadrant);
        assert_eq!(west.coord().x, -east.coord().x);
    }

    #[test]
    fn test_extreme_values_saturate() {
        let key = cell_key(f32::MAX, f32::MIN);
        assert_eq!(key.quadrant, Quadrant::PosXNegY);
        assert_ne!(key.id, CELL_ID_SENTINEL);

        let nan = cell_key(f32::NAN, f32::NAN);
        assert_eq!(nan.id, 0);
        assert_eq!(nan.quadrant, Quadrant::PosXPosY);
    }

    #[test]
    fn test_quadrant_index_round_trip() {
        for q in Quadrant::ALL {
            assert_eq!(Quadrant::from_index(q.index() as u8), q);
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_invalid_quadrant_index_panics() {
        let _ = Quadrant::from_index(4);
    }
}
