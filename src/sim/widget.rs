// widget.rs - Pipe pieces
//
// A widget owns one tile of the board. Its channel is described once,
// unrotated, in tile-local cells and turned into place when carved.

use crate::config::LakeConfig;
use crate::render::Encoder;
use crate::world::{Mask, rotate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    /// Elbow joining two adjacent edges
    Bend,
    /// Channel joining opposite edges
    Straight,
}

impl WidgetKind {
    /// Whether tile-local cell `(i, j)` lies in the unrotated channel.
    /// `inner` and `outer` are the exclusive channel bounds.
    #[inline]
    pub fn carves(self, i: usize, j: usize, inner: f32, outer: f32) -> bool {
        let (i, j) = (i as f32, j as f32);
        match self {
            // top and left edges
            WidgetKind::Bend => i < outer && j < outer && (i > inner || j > inner),
            // top and bottom edges
            WidgetKind::Straight => j > inner && j < outer,
        }
    }
}

/// Per-frame extension points. Both default to doing nothing.
pub trait WidgetHooks {
    /// Logical update, before the wave step
    fn update(&mut self) {}

    /// Overlay drawing, after the buffers swap
    fn draw_frame(&self, _out: &mut Encoder) {}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    pub row: usize,
    pub col: usize,
    /// Quarter turns clockwise, 0..4
    pub rotation: u8,
    pub kind: WidgetKind,
}

impl WidgetHooks for Widget {}

impl Widget {
    pub fn new(row: usize, col: usize, kind: WidgetKind, rotation: u8) -> Self {
        Self { row, col, rotation: rotation % 4, kind }
    }

    /// Open this widget's channel in the mask. Only ever unblocks; clearing
    /// stale openings is the caller's job.
    ///
    /// Turns are taken about the middle of the tile's cells, so every quarter
    /// turn maps the tile exactly onto itself and channels reach both edges.
    pub fn carve(&self, mask: &mut Mask, cfg: &LakeConfig) {
        let tile = cfg.tile();
        let (inner, outer) = (cfg.inner(), cfg.outer());
        let (r0, c0) = (self.row * tile, self.col * tile);
        let mid = (tile as f64 - 1.0) / 2.0;
        let (cy, cx) = (r0 as f64 + mid, c0 as f64 + mid);
        let degrees = self.rotation as f64 * 90.0;

        for i in 0..tile {
            for j in 0..tile {
                if !self.kind.carves(i, j, inner, outer) {
                    continue;
                }
                let x = (c0 + j) as f64;
                let y = (r0 + i) as f64;
                if let Some((nx, ny)) = rotate(x, y, cx, cy, degrees, mask.side()) {
                    mask.set_blocked(ny as isize, nx as isize, false);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_cells(mask: &Mask) -> Vec<(usize, usize)> {
        mask.view()
            .indexed_iter()
            .filter(|(_, b)| !**b)
            .map(|(idx, _)| idx)
            .collect()
    }

    #[test]
    fn bend_shape_is_an_l() {
        assert!(WidgetKind::Bend.carves(0, 20, 12.0, 28.0));
        assert!(WidgetKind::Bend.carves(20, 0, 12.0, 28.0));
        assert!(WidgetKind::Bend.carves(27, 27, 12.0, 28.0));
        assert!(!WidgetKind::Bend.carves(12, 12, 12.0, 28.0));
        assert!(!WidgetKind::Bend.carves(28, 20, 12.0, 28.0));
        assert!(!WidgetKind::Bend.carves(5, 5, 12.0, 28.0));
    }

    #[test]
    fn straight_shape_is_a_band() {
        assert!(WidgetKind::Straight.carves(0, 13, 12.0, 28.0));
        assert!(WidgetKind::Straight.carves(39, 27, 12.0, 28.0));
        assert!(!WidgetKind::Straight.carves(20, 12, 12.0, 28.0));
        assert!(!WidgetKind::Straight.carves(20, 28, 12.0, 28.0));
    }

    #[test]
    fn rotation_wraps() {
        assert_eq!(Widget::new(0, 0, WidgetKind::Bend, 7).rotation, 3);
    }

    #[test]
    fn carve_stays_in_own_tile() {
        let cfg = LakeConfig { grids: 3, ..Default::default() };
        for rotation in 0..4 {
            let mut mask = Mask::new(cfg.side());
            Widget::new(1, 1, WidgetKind::Bend, rotation).carve(&mut mask, &cfg);
            let cells = open_cells(&mask);
            assert!(!cells.is_empty());
            assert!(cells.iter().all(|&(r, c)| (40..80).contains(&r) && (40..80).contains(&c)));
        }
    }

    #[test]
    fn straight_quarter_turn_runs_across() {
        let cfg = LakeConfig { grids: 1, ..Default::default() };
        let mut mask = Mask::new(cfg.side());
        Widget::new(0, 0, WidgetKind::Straight, 1).carve(&mut mask, &cfg);
        // horizontal band rows 13..28, edge to edge
        for r in 13..28 {
            assert!(mask.is_open(r, 0), "row {r}");
            assert!(mask.is_open(r, 39), "row {r}");
        }
        assert!(mask.is_blocked(12, 20));
        assert!(mask.is_blocked(28, 20));
        assert!(mask.is_blocked(0, 20));
    }

    #[test]
    fn every_turn_reaches_both_edges() {
        let cfg = LakeConfig { grids: 1, ..Default::default() };
        for rotation in 0..4 {
            let mut mask = Mask::new(cfg.side());
            Widget::new(0, 0, WidgetKind::Straight, rotation).carve(&mut mask, &cfg);
            let (first, last) = if rotation % 2 == 0 {
                ((0..40).any(|c| mask.is_open(0, c)), (0..40).any(|c| mask.is_open(39, c)))
            } else {
                ((0..40).any(|r| mask.is_open(r, 0)), (0..40).any(|r| mask.is_open(r, 39)))
            };
            assert!(first && last, "rotation {rotation}");
            // quarter turns permute the tile, so the area never changes
            assert_eq!(mask.open_count(), 40 * 15, "rotation {rotation}");
        }
    }

    #[test]
    fn carving_twice_is_idempotent() {
        let cfg = LakeConfig { grids: 2, ..Default::default() };
        let w = Widget::new(1, 0, WidgetKind::Bend, 2);
        let mut once = Mask::new(cfg.side());
        w.carve(&mut once, &cfg);
        let mut twice = Mask::new(cfg.side());
        w.carve(&mut twice, &cfg);
        w.carve(&mut twice, &cfg);
        assert_eq!(once.view(), twice.view());
    }
}
