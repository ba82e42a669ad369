//! Color extraction from a name digest.
//!
//! Two non-adjacent byte windows feed the two gradient stops, so names that
//! only differ late in the hash still move the second color.

use serde::{Deserialize, Serialize};

use crate::hashing::Digest;

/// Digest bytes feeding the first stop (hex chars [0,6)).
const COLOR1_OFFSET: usize = 0;
/// Digest bytes feeding the second stop (hex chars [12,18)).
const COLOR2_OFFSET: usize = 6;

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: u8::MAX }
    }

    /// `#rrggbb`, alpha omitted since avatars are always opaque.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, self.a])
    }

    fn from_window(digest: &Digest, offset: usize) -> Self {
        Self::opaque(digest[offset], digest[offset + 1], digest[offset + 2])
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(px: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        Self { r, g, b, a }
    }
}

/// Map a digest to the two gradient stops.
///
/// Reading raw bytes [0,3) and [6,9) gives the same values as parsing hex
/// pairs [0,6) and [12,18) of the lowercase hex digest.
pub fn extract_colors(digest: &Digest) -> (Color, Color) {
    (
        Color::from_window(digest, COLOR1_OFFSET),
        Color::from_window(digest, COLOR2_OFFSET),
    )
}
