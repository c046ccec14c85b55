use super::*;
use crate::error::{SimError, SimResult};

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let x = (idx % self.width as usize) as u32;
        let y = (idx / self.width as usize) as u32;
        (x, y)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as i64) < self.width as i64 && y >= 0 && (y as i64) < self.height as i64
    }

    /// Index for a public coordinate, or `OutOfBounds`.
    pub fn checked_index(&self, x: i32, y: i32) -> SimResult<usize> {
        if self.in_bounds(x, y) {
            Ok(self.index(x as u32, y as u32))
        } else {
            Err(SimError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Index for a coordinate the caller already validated.
    #[inline(always)]
    pub fn index_unchecked(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "index_unchecked: out of bounds ({}, {}) for {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize) * (self.width as usize) + (x as usize)
    }
}
