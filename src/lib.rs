use wasm_bindgen::prelude::*;

// ============================================================================
// LAKE WORLD - Wave simulation through rotatable pipe tiles
// ============================================================================

pub mod config;
pub mod render;
pub mod sim;
pub mod world;

pub use config::{ConfigError, LakeConfig};
pub use render::Encoder;
pub use sim::{Simulation, WidgetKind};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lake-engine loaded");
}

#[wasm_bindgen]
pub struct LakeWorld {
    sim: Simulation,
    encoder: Encoder,
}

#[wasm_bindgen]
impl LakeWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(config: LakeConfig) -> Result<LakeWorld, JsError> {
        let sim = Simulation::with_default_board(config)?;
        let encoder = Encoder::new(sim.config());
        Ok(Self { sim, encoder })
    }

    pub fn tick(&mut self) {
        self.sim.frame(&mut self.encoder);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.sim.pointer_move(x, y);
    }

    pub fn click(&mut self, x: f32, y: f32) {
        if let Some(rotation) = self.sim.click(x, y) {
            log::debug!("tile under ({x}, {y}) turned to {rotation}");
        }
    }

    /// Tile border offsets for the overlay lines
    pub fn grid_lines(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&render::grid_lines(self.sim.config())[..])
    }

    // Accessors for WASM
    pub fn output_ptr(&self) -> *const u8 { self.encoder.ptr() }
    pub fn output_len(&self) -> usize { self.encoder.len() }
    pub fn frame_ptr(&self) -> *const u8 { self.encoder.frame_ptr() }
    pub fn frame_len(&self) -> usize { self.encoder.frame_len() }
    pub fn width(&self) -> u32 { self.encoder.width() }
    pub fn height(&self) -> u32 { self.encoder.height() }
    pub fn canvas_size(&self) -> u32 { self.sim.config().canvas_size() }
    pub fn frame_count(&self) -> f64 { self.sim.frame_count() as f64 }
}
