//! RGBA display color - one per grid cell, laid out for direct texture upload.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 4 x 8-bit RGBA color.
///
/// `#[repr(C)]` + `Pod` so the whole color array can be handed to a renderer
/// as raw bytes (`[r, g, b, a, r, g, b, a, ...]`).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Add signed offsets per channel, saturating at 0 and 255.
    #[inline]
    pub fn offset(self, dr: i32, dg: i32, db: i32) -> Self {
        Self {
            r: offset_channel(self.r, dr),
            g: offset_channel(self.g, dg),
            b: offset_channel(self.b, db),
            a: self.a,
        }
    }

    #[inline]
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation per channel, `t` clamped to [0, 1].
    pub fn lerp(self, to: Color, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: lerp_channel(self.r, to.r, t),
            g: lerp_channel(self.g, to.g, t),
            b: lerp_channel(self.b, to.b, t),
            a: lerp_channel(self.a, to.a, t),
        }
    }
}

#[inline]
fn offset_channel(c: u8, delta: i32) -> u8 {
    (c as i32 + delta).clamp(0, 255) as u8
}

#[inline]
fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
    let v = from as f32 + (to as f32 - from as f32) * t;
    v.round().clamp(0.0, 255.0) as u8
}
