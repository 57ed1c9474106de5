///
/// The largest number of levels a coefficient table can have
///
/// Each level has four times as many cells as the one before, so the number of cells in a table with more levels than
/// this cannot be indexed on 32-bit targets (and would not fit in memory on any target)
///
pub const MAX_COEFFICIENT_LEVELS: usize = 15;

///
/// Identifies a square cell of the unit domain at a particular level of subdivision
///
/// The cell `(level, kx, ky)` covers `[kx/2^level, (kx+1)/2^level) x [ky/2^level, (ky+1)/2^level)`. Level 0 has a single
/// cell covering the whole domain, and each level has 4 times as many cells as the one before.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DyadicCell {
    pub level:  usize,
    pub kx:     usize,
    pub ky:     usize,
}

impl DyadicCell {
    ///
    /// Creates a new dyadic cell
    ///
    #[inline]
    pub fn new(level: usize, kx: usize, ky: usize) -> DyadicCell {
        debug_assert!(kx < Self::cells_per_axis(level) && ky < Self::cells_per_axis(level), "Cell ({}, {}) is out of range for level {}", kx, ky, level);

        DyadicCell { level, kx, ky }
    }

    ///
    /// The cell at level 0 that covers the whole domain
    ///
    #[inline]
    pub fn root() -> DyadicCell {
        DyadicCell { level: 0, kx: 0, ky: 0 }
    }

    ///
    /// The number of cells across each axis at a particular level
    ///
    #[inline]
    pub fn cells_per_axis(level: usize) -> usize {
        1 << level
    }

    ///
    /// The scale factor used by the wavelets at a particular level: this is the number of cells per axis, or the inverse of
    /// the size of a cell as a fraction of the domain
    ///
    #[inline]
    pub fn scale(level: usize) -> f64 {
        Self::cells_per_axis(level) as f64
    }

    ///
    /// The number of cells in all the levels before the specified level (this is where the level starts in a flat list of cells)
    ///
    /// `level` can be at most `MAX_COEFFICIENT_LEVELS`.
    ///
    #[inline]
    pub fn level_offset(level: usize) -> usize {
        debug_assert!(level <= MAX_COEFFICIENT_LEVELS, "Level {} is beyond the maximum of {}", level, MAX_COEFFICIENT_LEVELS);

        ((1 << (2*level)) - 1) / 3
    }

    ///
    /// The total number of cells in a table with the specified number of levels
    ///
    #[inline]
    pub fn total_cells(num_levels: usize) -> usize {
        Self::level_offset(num_levels)
    }

    ///
    /// The index of this cell in a flat list of the cells for every level
    ///
    #[inline]
    pub fn index(&self) -> usize {
        Self::level_offset(self.level) + self.kx * Self::cells_per_axis(self.level) + self.ky
    }

    ///
    /// Finds the cell at a level that contains a point, along with the position of the point within that cell (each 
    /// coordinate in the range 0..1)
    ///
    /// Returns None if the point is outside of the unit domain
    ///
    #[inline]
    pub fn containing(level: usize, x: f64, y: f64) -> Option<(DyadicCell, (f64, f64))> {
        let scale       = Self::scale(level);
        let (sx, sy)    = (scale * x, scale * y);
        let (kx, ky)    = (sx.floor(), sy.floor());

        if kx >= 0.0 && ky >= 0.0 && kx < scale && ky < scale {
            Some((DyadicCell { level, kx: kx as usize, ky: ky as usize }, (sx - kx, sy - ky)))
        } else {
            None
        }
    }

    ///
    /// Iterates through all of the cells in the levels `0..num_levels`, in the same order as their indexes
    ///
    pub fn all_cells(num_levels: usize) -> impl Iterator<Item=DyadicCell> {
        (0..num_levels).flat_map(|level| Self::cells_in_level(level))
    }

    ///
    /// Iterates through the cells in a single level, in index order
    ///
    pub fn cells_in_level(level: usize) -> impl Iterator<Item=DyadicCell> {
        let cells_per_axis = Self::cells_per_axis(level);

        (0..cells_per_axis).flat_map(move |kx| (0..cells_per_axis).map(move |ky| DyadicCell { level, kx, ky }))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn largest_table_can_be_indexed() {
        let last_cell = DyadicCell::new(MAX_COEFFICIENT_LEVELS - 1, (1 << (MAX_COEFFICIENT_LEVELS - 1)) - 1, (1 << (MAX_COEFFICIENT_LEVELS - 1)) - 1);

        assert!(last_cell.index() + 1 == DyadicCell::total_cells(MAX_COEFFICIENT_LEVELS));
        assert!(DyadicCell::total_cells(MAX_COEFFICIENT_LEVELS) == ((1usize << 30) - 1) / 3);
    }

    #[test]
    fn indexes_are_contiguous() {
        let cells = DyadicCell::all_cells(4).collect::<Vec<_>>();

        assert!(cells.len() == DyadicCell::total_cells(4));
        assert!(cells.len() == 1 + 4 + 16 + 64);

        for (expected_index, cell) in cells.iter().enumerate() {
            assert!(cell.index() == expected_index, "{:?} has index {}, expected {}", cell, cell.index(), expected_index);
        }
    }

    #[test]
    fn containing_cell() {
        let (cell, (fx, fy)) = DyadicCell::containing(2, 0.3, 0.8).unwrap();

        assert!(cell == DyadicCell::new(2, 1, 3), "{:?}", cell);
        assert!((fx - 0.2).abs() < 1e-12 && (fy - 0.2).abs() < 1e-12, "{} {}", fx, fy);
    }

    #[test]
    fn outside_domain_has_no_cell() {
        assert!(DyadicCell::containing(3, 1.0, 0.5).is_none());
        assert!(DyadicCell::containing(3, 0.5, -0.01).is_none());
    }
}
