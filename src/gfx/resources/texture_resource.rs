//! CPU-side texture images
//!
//! Provides RGBA8 pixel data that a renderer can upload as-is, including the
//! procedural checkerboard used to inspect texture coordinates.

/// Side length, in texels, of one checkerboard cell.
pub const CHECKER_CELL: usize = 8;

/// Tightly packed RGBA8 image, rows stored top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureImage {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl TextureImage {
    /// Creates a `size` x `size` black and white checkerboard.
    ///
    /// Cells are [`CHECKER_CELL`] texels wide; the texel at `(0, 0)` is black.
    pub fn checkerboard(size: usize) -> Self {
        let mut pixels = vec![0u8; 4 * size * size];

        for i in 0..size {
            for j in 0..size {
                let c = if ((i & CHECKER_CELL) == 0) ^ ((j & CHECKER_CELL) == 0) {
                    255
                } else {
                    0
                };
                let texel = (i * size + j) * 4;
                pixels[texel] = c;
                pixels[texel + 1] = c;
                pixels[texel + 2] = c;
                pixels[texel + 3] = 255;
            }
        }

        Self {
            width: size,
            height: size,
            pixels,
        }
    }

    /// RGBA of the texel at row `i`, column `j`.
    pub fn texel(&self, i: usize, j: usize) -> Option<[u8; 4]> {
        if i >= self.height || j >= self.width {
            return None;
        }
        let texel = (i * self.width + j) * 4;
        let mut rgba = [0u8; 4];
        rgba.copy_from_slice(&self.pixels[texel..texel + 4]);
        Some(rgba)
    }

    /// Texel nearest to `(u, v)`, with `v = 0` at the bottom row.
    pub fn sample_nearest(&self, uv: [f32; 2]) -> Option<[u8; 4]> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let u = uv[0].clamp(0.0, 1.0);
        let v = uv[1].clamp(0.0, 1.0);
        let j = ((u * self.width as f32) as usize).min(self.width - 1);
        let i = (((1.0 - v) * self.height as f32) as usize).min(self.height - 1);
        self.texel(i, j)
    }
}
