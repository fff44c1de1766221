// mask.rs - Obstacle mask
//
// One flag per fine cell. Blocked cells are walls: the wave step skips
// them and open neighbors reflect off them. Starts fully blocked.

use ndarray::Array2;

pub struct Mask {
    blocked: Array2<bool>,
}

impl Mask {
    pub fn new(side: usize) -> Self {
        Self {
            blocked: Array2::from_elem((side, side), true),
        }
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.blocked.nrows()
    }

    #[inline]
    fn index(&self, row: isize, col: isize) -> Option<(usize, usize)> {
        let side = self.side() as isize;
        if row >= 0 && row < side && col >= 0 && col < side {
            Some((row as usize, col as usize))
        } else {
            None
        }
    }

    /// Out of range counts as blocked
    #[inline(always)]
    pub fn is_blocked(&self, row: isize, col: isize) -> bool {
        match self.index(row, col) {
            Some(idx) => self.blocked[idx],
            None => true,
        }
    }

    #[inline]
    pub fn is_open(&self, row: isize, col: isize) -> bool {
        !self.is_blocked(row, col)
    }

    pub fn set_blocked(&mut self, row: isize, col: isize, value: bool) {
        if let Some(idx) = self.index(row, col) {
            self.blocked[idx] = value;
        }
    }

    /// Block every cell of a square region, clipped to the board
    pub fn block_square(&mut self, row0: usize, col0: usize, size: usize) {
        let side = self.side();
        let (r1, c1) = ((row0 + size).min(side), (col0 + size).min(side));
        if row0 >= r1 || col0 >= c1 {
            return;
        }
        self.blocked
            .slice_mut(ndarray::s![row0..r1, col0..c1])
            .fill(true);
    }

    /// Number of open cells
    pub fn open_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| !b).count()
    }

    pub fn view(&self) -> ndarray::ArrayView2<'_, bool> {
        self.blocked.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_fully_blocked() {
        let mask = Mask::new(8);
        assert_eq!(mask.side(), 8);
        assert_eq!(mask.open_count(), 0);
        assert!(mask.is_blocked(3, 3));
    }

    #[test]
    fn set_and_query() {
        let mut mask = Mask::new(8);
        mask.set_blocked(2, 5, false);
        assert!(mask.is_open(2, 5));
        assert!(mask.is_blocked(5, 2));
        assert_eq!(mask.open_count(), 1);
    }

    #[test]
    fn block_square_clips_to_board() {
        let mut mask = Mask::new(4);
        for r in 0..4 {
            for c in 0..4 {
                mask.set_blocked(r, c, false);
            }
        }
        mask.block_square(2, 2, 10);
        assert_eq!(mask.open_count(), 12);
        assert!(mask.is_blocked(3, 3));
        assert!(mask.is_open(1, 3));
    }

    proptest! {
        #[test]
        fn prop_out_of_range_is_blocked_and_unwritable(
            row in prop_oneof![(-100isize..0), (16isize..100)],
            col in -100isize..100,
        ) {
            let mut mask = Mask::new(16);
            mask.set_blocked(row, col, false);
            mask.set_blocked(col, row, false);
            prop_assert!(mask.is_blocked(row, col));
            prop_assert!(mask.is_blocked(col, row));
            prop_assert_eq!(mask.open_count(), 0);
        }
    }
}
