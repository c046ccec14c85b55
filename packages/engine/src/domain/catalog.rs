//! Material Catalog - colors and fresh cells for every material
//!
//! All randomness comes from the caller's generator so a seeded
//! simulation replays identically.

use rand::Rng;
use serde::Serialize;

use super::cell::{Cell, Vec2};
use super::color::Color;
use super::materials::Material;

/// Colors fire cycles through while burning.
pub const FIRE_PALETTE: [Color; 5] = [
    Color::rgba(255, 80, 0, 255),
    Color::rgba(255, 140, 0, 255),
    Color::rgba(230, 40, 0, 255),
    Color::rgba(255, 200, 40, 255),
    Color::rgba(200, 30, 0, 255),
];

#[inline]
pub fn default_color(material: Material) -> Color {
    material.props().color
}

/// Default color with a material-specific random perturbation.
pub fn randomized_color<R: Rng + ?Sized>(material: Material, rng: &mut R) -> Color {
    let base = default_color(material);
    match material {
        Material::Empty => Color::TRANSPARENT,
        Material::Sand => {
            let v = rng.gen_range(-15..=15);
            base.offset(v, v, v / 2)
        }
        Material::Water => {
            let v = rng.gen_range(-15..=15);
            base.offset(v / 3, v / 2, v)
        }
        Material::Salt => {
            let v = rng.gen_range(-5..=5);
            base.offset(v, v, v)
        }
        Material::Fire => {
            let v = rng.gen_range(-30..=30);
            base.offset(v / 2, v / 3, 0)
        }
        Material::Lava => {
            let v = rng.gen_range(-20..=20);
            base.offset(v / 2, v / 3, 0)
        }
        _ => {
            let v = rng.gen_range(-15..=15);
            base.offset(v, v, v)
        }
    }
}

/// Random pick from the fire palette.
pub fn fire_flicker<R: Rng + ?Sized>(rng: &mut R) -> Color {
    FIRE_PALETTE[rng.gen_range(0..FIRE_PALETTE.len())]
}

/// Fresh cell of `material` with a randomized initial velocity.
///
/// Falling materials only ever get `vy >= 0`, rising ones `vy <= 0`.
pub fn spawn<R: Rng + ?Sized>(material: Material, rng: &mut R) -> Cell {
    let velocity = match material {
        Material::Sand | Material::Salt | Material::Gunpowder => {
            Vec2::new(rng.gen_range(-0.5..=0.5), rng.gen_range(0.0..=2.0))
        }
        Material::Water | Material::Oil | Material::Acid => {
            Vec2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(0.0..=1.0))
        }
        Material::Lava => Vec2::new(rng.gen_range(-0.3..=0.3), rng.gen_range(0.0..=0.5)),
        Material::Fire => Vec2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-2.0..=0.0)),
        Material::Ember => Vec2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-3.0..=-1.0)),
        Material::Smoke | Material::Steam => {
            Vec2::new(rng.gen_range(-0.5..=0.5), rng.gen_range(-1.5..=-0.5))
        }
        Material::Empty | Material::Wood | Material::Stone => Vec2::ZERO,
    };
    Cell::new(material, velocity)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MaterialManifest {
    format_version: u32,
    materials: Vec<MaterialManifestEntry>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MaterialManifestEntry {
    id: u8,
    key: &'static str,
    name: &'static str,
    color: Color,
    selectable: bool,
}

/// JSON description of every material, for building a picker UI.
pub fn manifest_json() -> String {
    let manifest = MaterialManifest {
        format_version: 1,
        materials: Material::ALL
            .iter()
            .map(|&m| MaterialManifestEntry {
                id: m.id(),
                key: m.key(),
                name: m.name(),
                color: default_color(m),
                selectable: m.is_selectable(),
            })
            .collect(),
    };
    serde_json::to_string(&manifest).unwrap_or_else(|_| "{}".to_string())
}
