use super::super::*;
use crate::domain::Vec2;

impl Grid {
    // === Velocity access ===
    #[inline]
    pub fn velocity(&self, x: u32, y: u32) -> Vec2 {
        let idx = self.index(x, y);
        Vec2::new(self.vx[idx], self.vy[idx])
    }

    #[inline]
    pub fn set_velocity(&mut self, x: u32, y: u32, v: Vec2) {
        let idx = self.index(x, y);
        self.vx[idx] = v.x;
        self.vy[idx] = v.y;
    }
}
