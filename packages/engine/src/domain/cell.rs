//! Cell - value view of one grid slot
//!
//! The grid stores cells as Structure of Arrays; `Cell` is what
//! `Grid::at` hands out and `Grid::set` accepts.

use super::materials::Material;

/// 2D velocity in cells per tick
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Grid step (-1/0/1 per axis) this velocity points toward.
    pub fn step(&self) -> (i32, i32) {
        (axis_step(self.x), axis_step(self.y))
    }
}

#[inline]
fn axis_step(v: f32) -> i32 {
    if v >= 0.5 {
        1
    } else if v <= -0.5 {
        -1
    } else {
        0
    }
}

/// One grid slot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cell {
    pub material: Material,
    /// Set once the cell has acted this tick; cleared by the decay pass.
    pub updated_this_tick: bool,
    /// Seconds since creation.
    pub age: f32,
    pub velocity: Vec2,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        material: Material::Empty,
        updated_this_tick: false,
        age: 0.0,
        velocity: Vec2::ZERO,
    };

    pub fn new(material: Material, velocity: Vec2) -> Self {
        Self {
            material,
            updated_this_tick: false,
            age: 0.0,
            velocity,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.material.is_empty()
    }
}
