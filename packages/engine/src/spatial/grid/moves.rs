use super::*;

impl Grid {
    // === Swap two cells (all data) ===
    #[inline]
    pub fn swap_idx(&mut self, idx1: usize, idx2: usize) {
        self.materials.swap(idx1, idx2);
        self.colors.swap(idx1, idx2);
        self.ages.swap(idx1, idx2);
        self.updated.swap(idx1, idx2);
        // Velocity moves with the particle
        self.vx.swap(idx1, idx2);
        self.vy.swap(idx1, idx2);
    }

    /// Move the particle at `from` into `to` (swapping whatever was there)
    /// and mark it processed for this tick.
    #[inline]
    pub fn move_particle(&mut self, from_x: u32, from_y: u32, to_x: u32, to_y: u32) {
        let from = self.index(from_x, from_y);
        let to = self.index(to_x, to_y);
        self.swap_idx(from, to);
        self.updated[to] = true;
    }
}
