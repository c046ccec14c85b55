//! Grid - Structure of Arrays (SoA) storage for every cell
//!
//! Instead of: Vec<Cell>                 // whole cell touched on every read
//! We have:    materials[], colors[], ... // each property contiguous
//!
//! `colors` is the render buffer: the renderer only ever sees it through
//! `color_buffer()` / `color_bytes()`.

use crate::domain::{Color, Material};

mod indexing;
mod accessors;
mod moves;

/// SoA Grid - all cell data in parallel arrays, index = `y * width + x`
pub struct Grid {
    width: u32,
    height: u32,
    size: usize,

    pub(crate) materials: Vec<Material>,
    pub(crate) colors: Vec<Color>,
    /// Seconds since the particle was created
    pub(crate) ages: Vec<f32>,
    /// Processed this tick (moved, transformed or settled)
    pub(crate) updated: Vec<bool>,
    pub(crate) vx: Vec<f32>,
    pub(crate) vy: Vec<f32>,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);

        Self {
            width,
            height,
            size,
            materials: vec![Material::Empty; size],
            colors: vec![Color::TRANSPARENT; size],
            ages: vec![0.0; size],
            updated: vec![false; size],
            vx: vec![0.0; size],
            vy: vec![0.0; size],
        }
    }
}
