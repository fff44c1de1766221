// render.rs - Encode simulation state to output buffers
//
// Two buffers per frame, both handed to the canvas by pointer:
//   out    one byte per fine cell: 0 = wall, otherwise wave brightness
//   frame  RGBA, (canvas + sidebar) x canvas, ready for putImageData
//
// Open water is drawn blue with the brightness in the blue channel.

use ndarray::ArrayView2;

use crate::config::LakeConfig;
use crate::world::Mask;

const WALL: [u8; 4] = [0, 0, 0, 255];
const SIDEBAR: [u8; 4] = [220, 220, 220, 255];

pub struct Encoder {
    out: Vec<u8>,
    frame: Vec<u8>,
    side: usize,
    w: usize,
}

impl Encoder {
    /// Buffers sized for `cfg`. Pass the config of a built `Simulation`,
    /// which has already been validated.
    pub fn new(cfg: &LakeConfig) -> Self {
        let side = cfg.side();
        let w = side + cfg.sidebar_width as usize;
        let mut frame = vec![0; w * side * 4];
        for px in frame.chunks_exact_mut(4) {
            px.copy_from_slice(&SIDEBAR);
        }
        Self {
            out: vec![0; side * side],
            frame,
            side,
            w,
        }
    }

    /// Sample brightness from a freshly stepped height slot
    pub fn encode_wave(&mut self, heights: ArrayView2<'_, f32>, mask: &Mask, cfg: &LakeConfig) {
        for ((i, j), &h) in heights.indexed_iter() {
            let idx = i * self.side + j;
            let px = (i * self.w + j) * 4;
            if mask.is_blocked(i as isize, j as isize) {
                self.out[idx] = 0;
                self.frame[px..px + 4].copy_from_slice(&WALL);
            } else {
                let b = brightness(h, cfg);
                self.out[idx] = b;
                self.frame[px..px + 4].copy_from_slice(&[0, 0, b, 255]);
            }
        }
    }

    pub fn brightness(&self) -> &[u8] {
        &self.out
    }

    pub fn rgba(&self) -> &[u8] {
        &self.frame
    }

    pub fn ptr(&self) -> *const u8 {
        self.out.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn frame_ptr(&self) -> *const u8 {
        self.frame.as_ptr()
    }

    pub fn frame_len(&self) -> usize {
        self.frame.len()
    }

    /// Frame width in pixels, sidebar included
    pub fn width(&self) -> u32 {
        self.w as u32
    }

    pub fn height(&self) -> u32 {
        self.side as u32
    }
}

/// Map a height to 0..=255, clamped to the configured range.
///
/// Never panics. An inverted range (which `LakeConfig::validate` rejects)
/// pins every height to `max_brightness`.
#[inline]
pub fn brightness(h: f32, cfg: &LakeConfig) -> u8 {
    let b = 255.0 * h / cfg.max_height;
    b.max(cfg.min_brightness as f32).min(cfg.max_brightness as f32) as u8
}

/// Pixel offsets of the tile borders, both ends included
pub fn grid_lines(cfg: &LakeConfig) -> Vec<u32> {
    (0..=cfg.grids).map(|k| k * cfg.widget_size).collect()
}
