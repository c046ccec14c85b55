use super::super::*;

impl Grid {
    #[inline]
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        if !self.in_bounds(x, y) { return false; }
        self.materials[self.index(x as u32, y as u32)] == Material::Empty
    }

    // === Material access ===
    /// Material at a neighbor coordinate; `None` outside the grid.
    #[inline]
    pub fn material(&self, x: i32, y: i32) -> Option<Material> {
        if !self.in_bounds(x, y) { return None; }
        Some(self.materials[self.index(x as u32, y as u32)])
    }

    #[inline]
    pub fn material_at(&self, x: u32, y: u32) -> Material {
        self.materials[self.index(x, y)]
    }

    // === Color access ===
    #[inline]
    pub fn color_at(&self, x: u32, y: u32) -> Color {
        self.colors[self.index(x, y)]
    }

    /// Read-only render view, row-major, `width * height` entries.
    #[inline]
    pub fn color_buffer(&self) -> &[Color] {
        &self.colors
    }

    /// Same buffer as raw RGBA bytes.
    #[inline]
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }
}
