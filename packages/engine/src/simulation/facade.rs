use wasm_bindgen::prelude::*;

use crate::domain::Material;
use crate::error::SimError;

use super::{SimSettings, SimulationCore, TickStats};

fn to_js(err: SimError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn material_from_js(id: u8) -> Result<Material, JsValue> {
    Material::try_from(id).map_err(to_js)
}

#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Create an empty simulation with default settings
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: SimulationCore::new(width, height),
        }
    }

    #[wasm_bindgen(js_name = withSettings)]
    pub fn with_settings(width: u32, height: u32, settings_json: String) -> Result<Simulation, JsValue> {
        let settings = SimSettings::from_json(&settings_json).map_err(to_js)?;
        let core = SimulationCore::with_settings(width, height, settings).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Advance one tick of `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.core.tick(dt);
    }

    /// Advance one tick of the configured default delta
    pub fn step(&mut self) {
        self.core.tick_default();
    }

    pub fn spawn_at(&mut self, x: i32, y: i32, material: u8, radius: i32) -> Result<u32, JsValue> {
        let material = material_from_js(material)?;
        Ok(self.core.spawn_at(x, y, material, radius) as u32)
    }

    pub fn spawn_between(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        material: u8,
        radius: i32,
    ) -> Result<u32, JsValue> {
        let material = material_from_js(material)?;
        Ok(self.core.spawn_between(x0, y0, x1, y1, material, radius) as u32)
    }

    /// Brush tap with the current material
    pub fn paint_at(&mut self, x: i32, y: i32) -> u32 {
        self.core.paint_at(x, y) as u32
    }

    /// Brush drag with the current material
    pub fn paint_stroke(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> u32 {
        self.core.paint_stroke(x0, y0, x1, y1) as u32
    }

    pub fn erase_at(&mut self, x: i32, y: i32, radius: i32) -> u32 {
        self.core.erase_at(x, y, radius) as u32
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    #[wasm_bindgen(getter)]
    pub fn current_material(&self) -> u8 {
        self.core.current_material().id()
    }

    pub fn set_current_material(&mut self, material: u8) -> Result<(), JsValue> {
        let material = material_from_js(material)?;
        self.core.set_current_material(material);
        Ok(())
    }

    /// Material id at a cell
    pub fn material_at(&self, x: i32, y: i32) -> Result<u8, JsValue> {
        let cell = self.core.at(x, y).map_err(to_js)?;
        Ok(cell.material.id())
    }

    /// Pointer into wasm memory for the RGBA color buffer. Valid until the
    /// next call that mutates the simulation.
    pub fn colors_ptr(&self) -> *const u8 {
        self.core.color_bytes().as_ptr()
    }

    pub fn colors_len_elements(&self) -> usize {
        self.core.color_buffer().len()
    }

    pub fn colors_len_bytes(&self) -> usize {
        self.core.color_bytes().len()
    }

    /// Snapshot of the color buffer, for renderers that cannot read wasm memory
    pub fn copy_colors(&self) -> Vec<u8> {
        self.core.color_bytes().to_vec()
    }

    pub fn apply_settings_json(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_settings_json(&json).map_err(to_js)
    }

    pub fn settings_json(&self) -> String {
        self.core.settings().to_json()
    }

    /// Enable or disable per-tick stats (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Last tick's stats (zeros when perf is disabled)
    pub fn tick_stats(&self) -> TickStats {
        self.core.tick_stats()
    }
}
