use super::super::*;
use crate::domain::catalog;
use crate::domain::{Cell, Vec2};
use crate::error::SimResult;

impl Grid {
    /// Bounds-checked read of one cell.
    pub fn at(&self, x: i32, y: i32) -> SimResult<Cell> {
        let idx = self.checked_index(x, y)?;
        Ok(self.cell_idx(idx))
    }

    /// Bounds-checked write of one cell. The display color becomes the
    /// material's default color; an Empty cell is normalized to `Cell::EMPTY`.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> SimResult<()> {
        let idx = self.checked_index(x, y)?;
        if cell.is_empty() {
            self.clear_idx(idx);
        } else {
            self.put_idx(idx, cell, catalog::default_color(cell.material));
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn cell_idx(&self, idx: usize) -> Cell {
        Cell {
            material: self.materials[idx],
            updated_this_tick: self.updated[idx],
            age: self.ages[idx],
            velocity: Vec2::new(self.vx[idx], self.vy[idx]),
        }
    }

    // === Set particle with all data ===
    #[inline]
    pub(crate) fn put_idx(&mut self, idx: usize, cell: Cell, color: Color) {
        self.materials[idx] = cell.material;
        self.colors[idx] = color;
        self.ages[idx] = cell.age;
        self.updated[idx] = cell.updated_this_tick;
        self.vx[idx] = cell.velocity.x;
        self.vy[idx] = cell.velocity.y;
    }

    pub(crate) fn put(&mut self, x: u32, y: u32, cell: Cell, color: Color) {
        let idx = self.index(x, y);
        self.put_idx(idx, cell, color);
    }

    // === Clear single cell ===
    #[inline]
    pub(crate) fn clear_idx(&mut self, idx: usize) {
        self.materials[idx] = Material::Empty;
        self.colors[idx] = Color::TRANSPARENT;
        self.ages[idx] = 0.0;
        self.updated[idx] = false;
        self.vx[idx] = 0.0;
        self.vy[idx] = 0.0;
    }

    pub fn clear_cell(&mut self, x: u32, y: u32) {
        let idx = self.index(x, y);
        self.clear_idx(idx);
    }

    // === Clear entire grid ===
    /// Back to all-Empty / all-transparent, keeping the allocations.
    pub fn reset(&mut self) {
        self.materials.fill(Material::Empty);
        self.colors.fill(Color::TRANSPARENT);
        self.ages.fill(0.0);
        self.updated.fill(false);
        self.vx.fill(0.0);
        self.vy.fill(0.0);
    }

    /// Number of non-Empty cells.
    pub fn particle_count(&self) -> usize {
        self.materials.iter().filter(|m| !m.is_empty()).count()
    }
}
