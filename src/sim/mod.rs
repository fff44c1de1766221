// sim/ - Lake simulation
//
// The board state (mask, height buffers, widget tiles) lives in one
// struct. A frame runs widget updates, the wave step, brightness
// sampling, the buffer swap and widget overlays, in that order.

mod layer;
mod wave;
mod widget;

pub use layer::WidgetLayer;
pub use wave::WaveField;
pub use widget::{Widget, WidgetHooks, WidgetKind};

use crate::config::{ConfigError, LakeConfig};
use crate::render::Encoder;
use crate::world::Mask;

/// Rotation of every tile on the starting board
pub const START_ROTATION: u8 = 1;

pub struct Simulation {
    cfg: LakeConfig,
    mask: Mask,
    field: WaveField,
    widgets: WidgetLayer,
    frames: u64,
}

impl Simulation {
    /// Empty board: every cell walled, no widgets
    pub fn new(cfg: LakeConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let side = cfg.side();
        Ok(Self {
            cfg,
            mask: Mask::new(side),
            field: WaveField::new(side, cfg.velocity, cfg.start_height()),
            widgets: WidgetLayer::new(cfg),
            frames: 0,
        })
    }

    /// Board with a bend on every tile
    pub fn with_default_board(cfg: LakeConfig) -> Result<Self, ConfigError> {
        let mut sim = Self::new(cfg)?;
        let n = cfg.grids as usize;
        for row in 0..n {
            for col in 0..n {
                sim.place(row, col, WidgetKind::Bend, START_ROTATION);
            }
        }
        log::info!(
            "lake ready: {}x{} tiles, {} open cells",
            n,
            n,
            sim.mask.open_count()
        );
        Ok(sim)
    }

    pub fn config(&self) -> &LakeConfig {
        &self.cfg
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn field(&self) -> &WaveField {
        &self.field
    }

    pub fn widgets(&self) -> &WidgetLayer {
        &self.widgets
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn place(&mut self, row: usize, col: usize, kind: WidgetKind, rotation: u8) {
        self.widgets
            .place(&mut self.mask, &mut self.field, row, col, kind, rotation);
    }

    pub fn rotate_at(&mut self, row: usize, col: usize) -> Option<u8> {
        self.widgets.rotate_at(&mut self.mask, &mut self.field, row, col)
    }

    pub fn clear(&mut self, row: usize, col: usize) -> bool {
        self.widgets.clear(&mut self.mask, &mut self.field, row, col)
    }

    pub fn inject(&mut self, row: usize, col: usize, value: f32) {
        self.field.inject(row, col, value);
    }

    /// Advance one timestep and leave the result in `out`
    pub fn frame(&mut self, out: &mut Encoder) {
        self.widgets.update_all();

        self.field.step(&self.mask);
        // sample before the swap promotes NEXT
        out.encode_wave(self.field.next(), &self.mask, &self.cfg);
        self.field.swap_buffers();

        self.widgets.draw_all(out);
        self.frames += 1;
    }

    /// Pointer over the canvas raises the cell under it to max height.
    /// Returns whether anything was injected.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        let Some((row, col)) = self.fine_cell(x, y) else {
            log::trace!("pointer ({x}, {y}) off canvas");
            return false;
        };
        if self.mask.is_blocked(row as isize, col as isize) {
            return false;
        }
        self.field.inject(row, col, self.cfg.max_height);
        true
    }

    /// Click turns the widget on the tile under the pointer.
    /// Returns the new rotation.
    pub fn click(&mut self, x: f32, y: f32) -> Option<u8> {
        let (row, col) = self.fine_cell(x, y)?;
        let tile = self.cfg.tile();
        self.rotate_at(row / tile, col / tile)
    }

    /// Pixel to fine cell; `None` off the simulated square (sidebar included)
    fn fine_cell(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let side = self.cfg.side() as f32;
        if !(x >= 0.0 && x < side && y >= 0.0 && y < side) {
            return None;
        }
        Some((y as usize, x as usize))
    }
}
