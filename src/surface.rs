//! Drawing-surface abstraction and the built-in software surface.
//!
//! A [`GridCanvas`](crate::GridCanvas) paints through the [`Surface`] trait so
//! the same grid logic can target a window-backed canvas, a test double, or
//! the bundled [`Pixmap`]. The trait mirrors the handful of 2D-context
//! primitives the canvas actually uses: resize, rectangle fill, and reset.

use crate::color::Color;

/// The drawing target a grid canvas paints onto.
///
/// Implementations are immediate-mode: every call takes effect before it
/// returns, and there is no queuing or batching.
pub trait Surface {
    /// Resize the surface to `width` x `height` pixels. Existing pixel
    /// content is discarded.
    fn set_size(&mut self, width: u32, height: u32);

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Fill an axis-aligned rectangle with a solid color. Rectangles
    /// extending past the surface extents are clipped.
    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color);

    /// Erase all pixel content, keeping the current dimensions.
    fn reset(&mut self);
}

/// An in-memory RGBA8 surface, row-major, 4 bytes per pixel.
///
/// Unset pixels are transparent black; [`fill_rect`](Surface::fill_rect)
/// writes fully opaque pixels. This is the surface the CLI renders with and
/// the one the golden tests hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    /// Raw RGBA buffer, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// RGBA value of a single pixel, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + x as usize) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Encode as a binary PPM (P6) image. Alpha is dropped; transparent
    /// pixels come out black.
    pub fn to_ppm(&self) -> Vec<u8> {
        let mut out = format!("P6\n{} {}\n255\n", self.width, self.height).into_bytes();
        out.reserve(self.data.len() / 4 * 3);
        for px in self.data.chunks_exact(4) {
            out.extend_from_slice(&px[..3]);
        }
        out
    }
}

impl Surface for Pixmap {
    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.data = vec![0; (width as usize) * (height as usize) * 4];
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color) {
        let x1 = x.min(self.width) as usize;
        let y1 = y.min(self.height) as usize;
        let x2 = x.saturating_add(width).min(self.width) as usize;
        let y2 = y.saturating_add(height).min(self.height) as usize;
        let rgba = color.to_rgba();

        for row in y1..y2 {
            let start = (row * self.width as usize + x1) * 4;
            let end = (row * self.width as usize + x2) * 4;
            for px in self.data[start..end].chunks_exact_mut(4) {
                px.copy_from_slice(&rgba);
            }
        }
    }

    fn reset(&mut self) {
        self.data.fill(0);
    }
}
