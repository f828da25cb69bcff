//! Read-only pixel buffer view and region selection types
//!
//! The engine never owns image data: callers hand it a borrowed RGBA
//! byte slice plus dimensions, and every analysis pass reads through
//! this view. The only hard precondition in the whole crate is checked
//! here: the slice length must match `width * height * 4`.

use serde::{Deserialize, Serialize};

use crate::{AnalysisError, Result};

/// One RGBA pixel, channels in [0, 255]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Rectangular selection in buffer pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Borrowed view over a row-major RGBA pixel buffer.
///
/// The engine only reads through this view; it never mutates the data
/// and no result type holds a reference back into it.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> PixelBuffer<'a> {
    /// Create a view over `data`, validating the shape contract.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidBuffer`] when `data.len()` is not
    /// exactly `width * height * 4`.
    pub fn new(width: u32, height: u32, data: &'a [u8]) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(AnalysisError::InvalidBuffer {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total pixel count, including transparent pixels
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw RGBA bytes, row-major
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Pixel at `(x, y)`. Coordinates must be in bounds; the shape check
    /// in [`PixelBuffer::new`] guarantees the backing slice is large
    /// enough for any in-bounds access.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        debug_assert!(x < self.width && y < self.height);
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        Rgba {
            r: self.data[idx],
            g: self.data[idx + 1],
            b: self.data[idx + 2],
            a: self.data[idx + 3],
        }
    }

    /// Iterate over every pixel in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = Rgba> + 'a {
        self.data.chunks_exact(4).map(|px| Rgba {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        })
    }

    /// Iterate over the pixels of `rect`, clipped to the buffer bounds.
    ///
    /// Portions of the rectangle outside the buffer are simply not
    /// visited; callers treat them as if they held transparent padding.
    pub fn region_pixels(&self, rect: Rect) -> impl Iterator<Item = Rgba> + 'a {
        let x0 = rect.x.min(self.width);
        let y0 = rect.y.min(self.height);
        let x1 = rect.x.saturating_add(rect.width).min(self.width);
        let y1 = rect.y.saturating_add(rect.height).min(self.height);

        let width = self.width;
        let data = self.data;
        (y0..y1).flat_map(move |y| {
            (x0..x1).map(move |x| {
                let idx = (y as usize * width as usize + x as usize) * 4;
                Rgba {
                    r: data[idx],
                    g: data[idx + 1],
                    b: data[idx + 2],
                    a: data[idx + 3],
                }
            })
        })
    }
}
