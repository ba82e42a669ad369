//! Gradient Renderer - diagonal two-stop fill

use image::{ImageBuffer, Rgba, RgbaImage};
use thiserror::Error;

use crate::color::Color;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("Canvas size must be positive, got {0}")]
    InvalidSize(u32),
}

/// Raster produced by the renderer and consumed by an encoder.
pub type Canvas = RgbaImage;

/// Render a `size x size` diagonal gradient.
///
/// `from` sits at (0,0), `to` at (size-1, size-1). A pixel's position along
/// the axis is its projection onto the diagonal, so every anti-diagonal is
/// one flat color. Zero-sized canvases are rejected.
pub fn render(from: Color, to: Color, size: u32) -> Result<Canvas, RenderError> {
    if size == 0 {
        return Err(RenderError::InvalidSize(size));
    }

    // Number of steps between the two corners along the axis.
    let span = 2 * (size as u64 - 1);

    let canvas: Canvas = ImageBuffer::from_fn(size, size, |x, y| {
        let t = if span == 0 {
            0.0
        } else {
            (x as u64 + y as u64) as f64 / span as f64
        };
        lerp_color(from, to, t)
    });
    Ok(canvas)
}

fn lerp_color(from: Color, to: Color, t: f64) -> Rgba<u8> {
    Rgba([
        lerp(from.r, to.r, t),
        lerp(from.g, to.g, t),
        lerp(from.b, to.b, t),
        lerp(from.a, to.a, t),
    ])
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    let v = a as f64 + (b as f64 - a as f64) * t;
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::opaque(255, 0, 0);
    const BLUE: Color = Color::opaque(0, 0, 255);

    #[test]
    fn test_corners_are_exact_stops() {
        let canvas = render(RED, BLUE, 128).unwrap();
        assert_eq!(canvas.dimensions(), (128, 128));
        assert_eq!(Color::from(*canvas.get_pixel(0, 0)), RED);
        assert_eq!(Color::from(*canvas.get_pixel(127, 127)), BLUE);
    }

    #[test]
    fn test_midpoint_blends() {
        let canvas = render(Color::opaque(0, 0, 0), Color::opaque(254, 100, 10), 3).unwrap();
        // (1,1) and (2,0) sit halfway along the axis.
        assert_eq!(*canvas.get_pixel(1, 1), Rgba([127, 50, 5, 255]));
        assert_eq!(canvas.get_pixel(2, 0), canvas.get_pixel(1, 1));
        assert_eq!(canvas.get_pixel(0, 2), canvas.get_pixel(1, 1));
    }

    #[test]
    fn test_anti_diagonals_share_a_color() {
        let canvas = render(RED, BLUE, 16).unwrap();
        for x in 0..10u32 {
            assert_eq!(canvas.get_pixel(x, 9 - x), canvas.get_pixel(9, 0));
        }
    }

    #[test]
    fn test_monotonic_along_axis() {
        let canvas = render(RED, BLUE, 32).unwrap();
        let mut last_blue = 0;
        for i in 0..32u32 {
            let px = canvas.get_pixel(i, i);
            assert!(px[2] >= last_blue);
            last_blue = px[2];
        }
    }

    #[test]
    fn test_fully_opaque() {
        let canvas = render(RED, BLUE, 8).unwrap();
        assert!(canvas.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn test_single_pixel_uses_first_stop() {
        let canvas = render(RED, BLUE, 1).unwrap();
        assert_eq!(Color::from(*canvas.get_pixel(0, 0)), RED);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(render(RED, BLUE, 0).unwrap_err(), RenderError::InvalidSize(0));
    }
}
