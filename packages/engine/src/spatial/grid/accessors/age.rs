use super::super::*;

impl Grid {
    #[inline]
    pub fn age(&self, x: u32, y: u32) -> f32 {
        self.ages[self.index(x, y)]
    }
}
