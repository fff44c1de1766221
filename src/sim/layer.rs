// layer.rs - Tile grid of widgets
//
// Each tile holds at most one widget. Replacing a widget always resets
// the tile (walls + rest height) before the new one carves, since carving
// never re-blocks anything.

use ndarray::Array2;

use super::{Widget, WidgetHooks, WidgetKind, WaveField};
use crate::config::LakeConfig;
use crate::render::Encoder;
use crate::world::Mask;

pub struct WidgetLayer {
    tiles: Array2<Option<Widget>>,
    cfg: LakeConfig,
}

impl WidgetLayer {
    pub fn new(cfg: LakeConfig) -> Self {
        let n = cfg.grids as usize;
        Self {
            tiles: Array2::from_elem((n, n), None),
            cfg,
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Widget> {
        self.tiles.get((row, col)).and_then(Option::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Widget> {
        self.tiles.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Put a widget on a tile, replacing any occupant. Off-grid is a no-op.
    pub fn place(
        &mut self,
        mask: &mut Mask,
        field: &mut WaveField,
        row: usize,
        col: usize,
        kind: WidgetKind,
        rotation: u8,
    ) {
        if self.tiles.get((row, col)).is_none() {
            return;
        }
        self.clear(mask, field, row, col);
        let widget = Widget::new(row, col, kind, rotation);
        widget.carve(mask, &self.cfg);
        log::debug!("placed {:?} at ({row}, {col}) rotation {}", kind, widget.rotation);
        self.tiles[(row, col)] = Some(widget);
    }

    /// Turn the widget on a tile a quarter clockwise. Returns the new
    /// rotation, or `None` when the tile is empty or off-grid.
    pub fn rotate_at(&mut self, mask: &mut Mask, field: &mut WaveField, row: usize, col: usize) -> Option<u8> {
        let (kind, rotation) = self.get(row, col).map(|w| (w.kind, w.rotation))?;
        let next = (rotation + 1) % 4;
        self.place(mask, field, row, col, kind, next);
        Some(next)
    }

    /// Remove the widget on a tile and wall the tile off again.
    /// Returns whether a widget was there.
    pub fn clear(&mut self, mask: &mut Mask, field: &mut WaveField, row: usize, col: usize) -> bool {
        let Some(slot) = self.tiles.get_mut((row, col)) else {
            return false;
        };
        if slot.take().is_none() {
            return false;
        }
        let tile = self.cfg.tile();
        let (r0, c0) = (row * tile, col * tile);
        mask.block_square(r0, c0, tile);
        field.reset_block(r0, c0, tile);
        true
    }

    pub fn update_all(&mut self) {
        for widget in self.tiles.iter_mut().flatten() {
            widget.update();
        }
    }

    pub fn draw_all(&self, out: &mut Encoder) {
        for widget in self.iter() {
            widget.draw_frame(out);
        }
    }
}
