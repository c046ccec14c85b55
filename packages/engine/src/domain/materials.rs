//! Material Definitions - the closed set of particle kinds
//!
//! Single source of truth for per-material static data: stable id, key,
//! display name, default color, density and behavior category.
//! Everything else (jitter, spawn velocity, rules) is keyed off `Material`.

use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::error::{SimError, SimResult};

/// Particle kind stored in every grid cell.
///
/// Discriminants are stable and cross the wasm boundary as `u8`.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Material {
    #[default]
    Empty = 0,
    Sand = 1,
    Water = 2,
    Salt = 3,
    Wood = 4,
    Fire = 5,
    Smoke = 6,
    Ember = 7,
    Steam = 8,
    Gunpowder = 9,
    Oil = 10,
    Lava = 11,
    Stone = 12,
    Acid = 13,
}

/// Behavior category used for rule dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Empty,
    /// Immobile (wood, stone)
    Solid,
    /// Falls and piles (sand, salt, gunpowder)
    Powder,
    /// Falls and spreads sideways (water, oil, acid, lava)
    Liquid,
    /// Rises (smoke, steam)
    Gas,
    /// Rises and burns things (fire, ember)
    Energy,
}

/// Static per-material properties.
#[derive(Clone, Copy, Debug)]
pub struct MaterialProps {
    pub key: &'static str,
    pub name: &'static str,
    pub color: Color,
    /// Relative weight; heavier sinks through lighter fluids.
    pub density: f32,
    pub category: Category,
}

pub const MATERIAL_COUNT: usize = 14;

pub static MATERIAL_DATA: [MaterialProps; MATERIAL_COUNT] = [
    MaterialProps { key: "empty", name: "Empty", color: Color::rgba(0, 0, 0, 0), density: 0.0, category: Category::Empty },
    MaterialProps { key: "sand", name: "Sand", color: Color::rgba(150, 100, 50, 255), density: 1.6, category: Category::Powder },
    MaterialProps { key: "water", name: "Water", color: Color::rgba(20, 100, 170, 200), density: 1.0, category: Category::Liquid },
    MaterialProps { key: "salt", name: "Salt", color: Color::rgba(200, 180, 190, 255), density: 2.1, category: Category::Powder },
    MaterialProps { key: "wood", name: "Wood", color: Color::rgba(60, 40, 20, 255), density: 0.7, category: Category::Solid },
    MaterialProps { key: "fire", name: "Fire", color: Color::rgba(150, 20, 0, 255), density: 0.1, category: Category::Energy },
    MaterialProps { key: "smoke", name: "Smoke", color: Color::rgba(50, 50, 50, 255), density: 0.05, category: Category::Gas },
    MaterialProps { key: "ember", name: "Ember", color: Color::rgba(200, 120, 20, 255), density: 0.2, category: Category::Energy },
    MaterialProps { key: "steam", name: "Steam", color: Color::rgba(220, 220, 250, 255), density: 0.03, category: Category::Gas },
    MaterialProps { key: "gunpowder", name: "Gunpowder", color: Color::rgba(60, 60, 60, 255), density: 1.4, category: Category::Powder },
    MaterialProps { key: "oil", name: "Oil", color: Color::rgba(80, 70, 60, 255), density: 0.8, category: Category::Liquid },
    MaterialProps { key: "lava", name: "Lava", color: Color::rgba(200, 50, 0, 255), density: 3.0, category: Category::Liquid },
    MaterialProps { key: "stone", name: "Stone", color: Color::rgba(120, 110, 120, 255), density: 2.5, category: Category::Solid },
    MaterialProps { key: "acid", name: "Acid", color: Color::rgba(90, 200, 60, 255), density: 1.1, category: Category::Liquid },
];

impl Material {
    pub const ALL: [Material; MATERIAL_COUNT] = [
        Material::Empty,
        Material::Sand,
        Material::Water,
        Material::Salt,
        Material::Wood,
        Material::Fire,
        Material::Smoke,
        Material::Ember,
        Material::Steam,
        Material::Gunpowder,
        Material::Oil,
        Material::Lava,
        Material::Stone,
        Material::Acid,
    ];

    /// Materials offered by the picker, in picker order.
    pub const SELECTABLE: [Material; 12] = [
        Material::Sand,
        Material::Water,
        Material::Salt,
        Material::Wood,
        Material::Fire,
        Material::Smoke,
        Material::Steam,
        Material::Gunpowder,
        Material::Oil,
        Material::Lava,
        Material::Stone,
        Material::Acid,
    ];

    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn props(self) -> &'static MaterialProps {
        &MATERIAL_DATA[self as usize]
    }

    #[inline]
    pub fn category(self) -> Category {
        self.props().category
    }

    #[inline]
    pub fn density(self) -> f32 {
        self.props().density
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.props().name
    }

    #[inline]
    pub fn key(self) -> &'static str {
        self.props().key
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Material::Empty
    }

    pub fn is_selectable(self) -> bool {
        Material::SELECTABLE.contains(&self)
    }

    pub fn from_id(id: u8) -> SimResult<Material> {
        Material::ALL
            .get(id as usize)
            .copied()
            .ok_or(SimError::InvalidMaterial(id))
    }
}

impl TryFrom<u8> for Material {
    type Error = SimError;

    fn try_from(id: u8) -> SimResult<Self> {
        Material::from_id(id)
    }
}

impl From<Material> for u8 {
    fn from(m: Material) -> u8 {
        m.id()
    }
}
