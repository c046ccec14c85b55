use super::super::*;

impl Grid {
    // These skip bounds checks; only for coordinates produced by the scan
    // loop itself.

    /// Fast material read - UNSAFE: caller must ensure x,y are valid
    #[inline(always)]
    pub unsafe fn material_unchecked(&self, x: u32, y: u32) -> Material {
        let idx = self.index_unchecked(x, y);
        *self.materials.get_unchecked(idx)
    }

    /// Fast updated check - UNSAFE: caller must ensure idx is valid
    #[inline(always)]
    pub unsafe fn is_updated_unchecked(&self, idx: usize) -> bool {
        *self.updated.get_unchecked(idx)
    }
}
