pub mod catalog;
pub mod cell;
pub mod color;
pub mod materials;
pub mod materials_ext;

pub use cell::{Cell, Vec2};
pub use color::Color;
pub use materials::{Category, Material, MaterialProps, MATERIAL_COUNT, MATERIAL_DATA};
