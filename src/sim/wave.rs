// wave.rs - Triple-buffered height field
//
// Discrete 2D wave equation on the fine grid:
//   next = v^2 * (lap_x + lap_y) - last + 2 * now
// Blocked and off-board neighbors mirror the center cell (zero gradient),
// so walls reflect instead of absorbing.

use ndarray::{Array2, ArrayView2};

use crate::world::Mask;

// Buffer roles, rotated by `swap_buffers`
const NOW: usize = 0;
const LAST: usize = 1;
const NEXT: usize = 2;

pub struct WaveField {
    buf: [Array2<f32>; 3],
    v2: f32,
    rest: f32,
}

impl WaveField {
    pub fn new(side: usize, velocity: f32, rest: f32) -> Self {
        let slot = Array2::from_elem((side, side), rest);
        Self {
            buf: [slot.clone(), slot.clone(), slot],
            v2: velocity * velocity,
            rest,
        }
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.buf[NOW].nrows()
    }

    pub fn now(&self) -> ArrayView2<'_, f32> {
        self.buf[NOW].view()
    }

    pub fn last(&self) -> ArrayView2<'_, f32> {
        self.buf[LAST].view()
    }

    pub fn next(&self) -> ArrayView2<'_, f32> {
        self.buf[NEXT].view()
    }

    /// Current height at a cell, `None` off the board
    pub fn height(&self, row: usize, col: usize) -> Option<f32> {
        self.buf[NOW].get((row, col)).copied()
    }

    /// Compute NEXT for every open cell. NOW and LAST are only read.
    pub fn step(&mut self, mask: &Mask) {
        let side = self.side();
        let v2 = self.v2;
        let [now, last, next] = &mut self.buf;

        for i in 0..side {
            for j in 0..side {
                if mask.is_blocked(i as isize, j as isize) {
                    continue;
                }
                next[(i, j)] = stencil(now, last, mask, v2, i, j);
            }
        }
    }

    /// LAST <- NOW, NOW <- NEXT, old LAST becomes scratch NEXT
    pub fn swap_buffers(&mut self) {
        self.buf.rotate_right(1);
    }

    /// Force the current height of a cell. Off-board is a no-op.
    pub fn inject(&mut self, row: usize, col: usize, value: f32) {
        if let Some(h) = self.buf[NOW].get_mut((row, col)) {
            *h = value;
        }
    }

    /// Put all three slots of a square block back at rest height
    pub fn reset_block(&mut self, row0: usize, col0: usize, size: usize) {
        let side = self.side();
        let (r1, c1) = ((row0 + size).min(side), (col0 + size).min(side));
        if row0 >= r1 || col0 >= c1 {
            return;
        }
        for slot in self.buf.iter_mut() {
            slot.slice_mut(ndarray::s![row0..r1, col0..c1]).fill(self.rest);
        }
    }
}

#[inline(always)]
fn stencil(now: &Array2<f32>, last: &Array2<f32>, mask: &Mask, v2: f32, i: usize, j: usize) -> f32 {
    let center = now[(i, j)];
    let nb = |di: isize, dj: isize| {
        let (ni, nj) = (i as isize + di, j as isize + dj);
        if mask.is_blocked(ni, nj) {
            center
        } else {
            now[(ni as usize, nj as usize)]
        }
    };

    let lap_x = nb(0, 1) - 2.0 * center + nb(0, -1);
    let lap_y = nb(1, 0) - 2.0 * center + nb(-1, 0);
    v2 * (lap_x + lap_y) - last[(i, j)] + 2.0 * center
}
