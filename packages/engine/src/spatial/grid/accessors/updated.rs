use super::super::*;

impl Grid {
    // === Updated flag ===
    #[inline]
    pub fn is_updated(&self, x: u32, y: u32) -> bool {
        self.updated[self.index(x, y)]
    }

    #[inline]
    pub fn set_updated(&mut self, x: u32, y: u32, u: bool) {
        let idx = self.index(x, y);
        self.updated[idx] = u;
    }

    /// Reset updated flags for all cells
    #[inline]
    pub fn reset_updated(&mut self) {
        self.updated.fill(false);
    }
}
