//! Tunable simulation constants, loadable from JSON.

use serde::{Deserialize, Serialize};

use crate::domain::Material;
use crate::error::{SimError, SimResult};

use super::SimulationCore;

const MAX_EXPLOSION_RADIUS: i32 = 16;
pub(super) const MAX_BRUSH_RADIUS: i32 = 64;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimSettings {
    /// Added to a falling particle's vertical velocity every tick
    pub gravity_accel: f32,
    /// Cap for falling vertical velocity
    pub max_fall_speed: f32,
    /// Fraction of ticks lava is allowed to fall
    pub lava_gravity_scale: f32,
    pub lava_spread_chance: f32,
    /// Per-tick chance a fire older than its lifetime goes out
    pub fire_extinguish_chance: f32,
    pub steam_condense_chance: f32,
    pub explosion_radius: i32,
    pub brush_radius: i32,
    /// Seconds advanced by `tick_default`
    pub default_delta: f32,
    /// Only read at creation; changing it later does not reseed
    pub seed: u64,
    /// Current material of a freshly created simulation
    pub initial_material: Material,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            gravity_accel: 0.1,
            max_fall_speed: 4.0,
            lava_gravity_scale: 0.5,
            lava_spread_chance: 0.3,
            fire_extinguish_chance: 0.1,
            steam_condense_chance: 0.001,
            explosion_radius: 3,
            brush_radius: 2,
            default_delta: 1.0 / 60.0,
            seed: 0x5EED_CAFE,
            initial_material: Material::Sand,
        }
    }
}

impl SimSettings {
    pub fn from_json(json: &str) -> SimResult<Self> {
        let settings: SimSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> SimResult<()> {
        non_negative("gravityAccel", self.gravity_accel)?;
        non_negative("maxFallSpeed", self.max_fall_speed)?;
        probability("lavaGravityScale", self.lava_gravity_scale)?;
        probability("lavaSpreadChance", self.lava_spread_chance)?;
        probability("fireExtinguishChance", self.fire_extinguish_chance)?;
        probability("steamCondenseChance", self.steam_condense_chance)?;
        if !(0..=MAX_EXPLOSION_RADIUS).contains(&self.explosion_radius) {
            return Err(SimError::InvalidSettings(format!(
                "explosionRadius must be within 0..={}, got {}",
                MAX_EXPLOSION_RADIUS, self.explosion_radius
            )));
        }
        if !(0..=MAX_BRUSH_RADIUS).contains(&self.brush_radius) {
            return Err(SimError::InvalidSettings(format!(
                "brushRadius must be within 0..={}, got {}",
                MAX_BRUSH_RADIUS, self.brush_radius
            )));
        }
        if !self.default_delta.is_finite() || self.default_delta <= 0.0 {
            return Err(SimError::InvalidSettings(format!(
                "defaultDelta must be positive, got {}",
                self.default_delta
            )));
        }
        Ok(())
    }
}

fn non_negative(name: &str, v: f32) -> SimResult<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidSettings(format!("{} must be a non-negative number, got {}", name, v)))
    }
}

fn probability(name: &str, v: f32) -> SimResult<()> {
    if v.is_finite() && (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(SimError::InvalidSettings(format!("{} must be within [0, 1], got {}", name, v)))
    }
}

pub(super) fn apply_settings(sim: &mut SimulationCore, settings: SimSettings) -> SimResult<()> {
    settings.validate()?;
    tracing::debug!(?settings, "applying simulation settings");
    sim.settings = settings;
    Ok(())
}

pub(super) fn enable_perf_metrics(sim: &mut SimulationCore, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.tick_stats.reset();
    }
}
