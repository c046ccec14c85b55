//! Particle Sim Engine - falling-sand cellular automaton in WASM
//!
//! Architecture:
//! - domain/      - materials, cells, colors, the material catalog
//! - spatial/     - SoA grid storage
//! - systems/     - per-category behaviors, reactions, decay
//! - simulation/  - orchestration, spawning, the wasm facade

pub mod error;
pub mod spatial;
pub mod domain;
pub mod systems;
pub mod simulation;

pub use spatial::grid;
pub use systems::behaviors;
pub use systems::reactions;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Particle sim engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// JSON list of every material for building a picker
#[wasm_bindgen]
pub fn material_manifest_json() -> String {
    domain::catalog::manifest_json()
}

// Re-export main types
pub use domain::{Cell, Color, Material};
pub use error::{SimError, SimResult};
pub use simulation::{SimSettings, Simulation, SimulationCore, TickStats};

// Export material ids for JS
#[wasm_bindgen]
pub fn el_empty() -> u8 { Material::Empty.id() }
#[wasm_bindgen]
pub fn el_sand() -> u8 { Material::Sand.id() }
#[wasm_bindgen]
pub fn el_water() -> u8 { Material::Water.id() }
#[wasm_bindgen]
pub fn el_salt() -> u8 { Material::Salt.id() }
#[wasm_bindgen]
pub fn el_wood() -> u8 { Material::Wood.id() }
#[wasm_bindgen]
pub fn el_fire() -> u8 { Material::Fire.id() }
#[wasm_bindgen]
pub fn el_smoke() -> u8 { Material::Smoke.id() }
#[wasm_bindgen]
pub fn el_ember() -> u8 { Material::Ember.id() }
#[wasm_bindgen]
pub fn el_steam() -> u8 { Material::Steam.id() }
#[wasm_bindgen]
pub fn el_gunpowder() -> u8 { Material::Gunpowder.id() }
#[wasm_bindgen]
pub fn el_oil() -> u8 { Material::Oil.id() }
#[wasm_bindgen]
pub fn el_lava() -> u8 { Material::Lava.id() }
#[wasm_bindgen]
pub fn el_stone() -> u8 { Material::Stone.id() }
#[wasm_bindgen]
pub fn el_acid() -> u8 { Material::Acid.id() }
