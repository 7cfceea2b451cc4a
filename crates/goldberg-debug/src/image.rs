//! A flat RGBA image with the few drawing primitives the atlas needs.

use std::path::Path;

use glam::DVec2;

use crate::DebugRenderError;

/// One pixel, `[r, g, b, a]`.
pub type Rgba = [u8; 4];

/// Row-major RGBA image.
#[derive(Clone, Debug, PartialEq)]
pub struct DebugImage {
    pub width: u32,
    pub height: u32,
    /// `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

impl DebugImage {
    /// A fully transparent image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Set a pixel. Coordinates outside the image are ignored.
    pub fn put(&mut self, x: i64, y: i64, color: Rgba) {
        if let Some(i) = self.offset(x, y) {
            self.pixels[i..i + 4].copy_from_slice(&color);
        }
    }

    /// The pixel at `(x, y)`, or `None` outside the image.
    pub fn get(&self, x: i64, y: i64) -> Option<Rgba> {
        let i = self.offset(x, y)?;
        let mut color = [0; 4];
        color.copy_from_slice(&self.pixels[i..i + 4]);
        Some(color)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels with non-zero alpha.
    pub fn covered_pixels(&self) -> usize {
        self.pixels.chunks_exact(4).filter(|p| p[3] != 0).count()
    }

    fn offset(&self, x: i64, y: i64) -> Option<usize> {
        let inside = x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height);
        inside.then(|| (y as usize * self.width as usize + x as usize) * 4)
    }

    /// Fill every pixel whose center lies inside or on the triangle,
    /// regardless of winding.
    pub fn fill_triangle(&mut self, a: DVec2, b: DVec2, c: DVec2, color: Rgba) {
        let area = edge(a, b, c);
        if area.abs() < f64::EPSILON {
            return;
        }
        let min = a.min(b).min(c).floor();
        let max = a.max(b).max(c).ceil();
        for y in (min.y as i64)..(max.y as i64) {
            for x in (min.x as i64)..(max.x as i64) {
                let p = DVec2::new(x as f64 + 0.5, y as f64 + 0.5);
                let w = [edge(b, c, p), edge(c, a, p), edge(a, b, p)];
                let inside = if area > 0.0 {
                    w.iter().all(|&w| w >= 0.0)
                } else {
                    w.iter().all(|&w| w <= 0.0)
                };
                if inside {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Draw a one-pixel line by sampling at unit steps.
    pub fn draw_line(&mut self, from: DVec2, to: DVec2, color: Rgba) {
        let steps = (to - from).abs().max_element().ceil().max(1.0) as i64;
        for i in 0..=steps {
            let p = from.lerp(to, i as f64 / steps as f64);
            self.put(p.x.floor() as i64, p.y.floor() as i64, color);
        }
    }

    /// Encode as an 8-bit RGBA PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, DebugRenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(DebugRenderError::Empty {
                width: self.width,
                height: self.height,
            });
        }
        let mut bytes = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut bytes, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.pixels)?;
        }
        Ok(bytes)
    }

    /// Encode as PNG and write to `path`.
    pub fn save_png(&self, path: &Path) -> Result<(), DebugRenderError> {
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes).map_err(|source| DebugRenderError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Twice the signed area of `abc`; positive when `c` is left of `ab` in
/// image coordinates.
fn edge(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    (b - a).perp_dot(c - a)
}
