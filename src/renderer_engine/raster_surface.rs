use anyhow::{Context, Result};
use glam::{Vec2, Vec4};
use image::{Rgba, Rgba32FImage, RgbaImage};
use std::path::Path;

use crate::renderer_engine::{r#trait::Surface, types::CompositeMode};

/// Surface raster logicielle.
///
/// Les pixels sont stockés en RGBA flottant **prémultiplié**, ce qui rend les
/// deux modes de composition triviaux :
/// - source-over : `dst = src * a + dst * (1 - a)`
/// - lighter     : `dst = min(1, src * a + dst)`
#[derive(Debug, Clone)]
pub struct RasterSurface {
    pixels: Rgba32FImage,
    composite: CompositeMode,
    fill: Vec4,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: Rgba32FImage::new(width, height),
            composite: CompositeMode::SourceOver,
            fill: Vec4::new(0.0, 0.0, 0.0, 1.0),
        }
    }

    pub fn composite(&self) -> CompositeMode {
        self.composite
    }

    /// Pixel prémultiplié en `(x, y)`, `None` hors surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Vec4> {
        if x >= self.pixels.width() || y >= self.pixels.height() {
            return None;
        }
        let Rgba([r, g, b, a]) = *self.pixels.get_pixel(x, y);
        Some(Vec4::new(r, g, b, a))
    }

    /// Image 8 bits aplatie sur fond noir (ce qu'affiche la fenêtre).
    pub fn to_rgba8(&self) -> RgbaImage {
        let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        RgbaImage::from_fn(self.pixels.width(), self.pixels.height(), |x, y| {
            let Rgba([r, g, b, _]) = *self.pixels.get_pixel(x, y);
            Rgba([to_u8(r), to_u8(g), to_u8(b), 255])
        })
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.to_rgba8()
            .save(path)
            .with_context(|| format!("failed to save screenshot to '{}'", path.display()))
    }

    /// Recopie le contenu de `other` (mêmes dimensions après l'appel).
    pub fn copy_from(&mut self, other: &RasterSurface) {
        self.pixels.clone_from(&other.pixels);
    }

    /// Taille du buffer en octets.
    pub fn byte_size(&self) -> usize {
        self.pixels.as_raw().len() * std::mem::size_of::<f32>()
    }

    #[inline]
    fn blend(&mut self, x: u32, y: u32, coverage: f32) {
        let a = self.fill.w * coverage;
        if a <= 0.0 || !a.is_finite() {
            return;
        }
        let src = [self.fill.x * a, self.fill.y * a, self.fill.z * a, a];
        let Rgba(dst) = self.pixels.get_pixel_mut(x, y);
        match self.composite {
            CompositeMode::SourceOver => {
                for (d, s) in dst.iter_mut().zip(src) {
                    *d = s + *d * (1.0 - a);
                }
            }
            CompositeMode::Lighter => {
                for (d, s) in dst.iter_mut().zip(src) {
                    *d = (s + *d).min(1.0);
                }
            }
        }
    }
}

impl Surface for RasterSurface {
    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn resize(&mut self, width: u32, height: u32) {
        if (width, height) != self.pixels.dimensions() {
            self.pixels = Rgba32FImage::new(width, height);
        }
    }

    fn set_composite(&mut self, mode: CompositeMode) {
        self.composite = mode;
    }

    fn set_fill(&mut self, color: Vec4) {
        self.fill = color;
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        if !(w > 0.0 && h > 0.0) || !x.is_finite() || !y.is_finite() {
            return;
        }
        let (width, height) = self.pixels.dimensions();
        let x0 = x.round().clamp(0.0, width as f32) as u32;
        let x1 = (x + w).round().clamp(0.0, width as f32) as u32;
        let y0 = y.round().clamp(0.0, height as f32) as u32;
        let y1 = (y + h).round().clamp(0.0, height as f32) as u32;

        for py in y0..y1 {
            for px in x0..x1 {
                self.blend(px, py, 1.0);
            }
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        if !(radius > 0.0) || !radius.is_finite() || !center.is_finite() {
            return;
        }
        let (width, height) = self.pixels.dimensions();
        let x0 = (center.x - radius - 1.0).floor().clamp(0.0, width as f32) as u32;
        let x1 = (center.x + radius + 1.0).ceil().clamp(0.0, width as f32) as u32;
        let y0 = (center.y - radius - 1.0).floor().clamp(0.0, height as f32) as u32;
        let y1 = (center.y + radius + 1.0).ceil().clamp(0.0, height as f32) as u32;

        // petits disques : couverture atténuée en proportion de leur taille
        let small_scale = (2.0 * radius).min(1.0);

        for py in y0..y1 {
            for px in x0..x1 {
                let pixel_center = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
                let dist = pixel_center.distance(center);
                let coverage = (radius + 0.5 - dist).clamp(0.0, 1.0) * small_scale;
                if coverage > 0.0 {
                    self.blend(px, py, coverage);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_over_fill() {
        let mut s = RasterSurface::new(4, 4);
        s.set_fill(Vec4::new(1.0, 0.0, 0.0, 0.5));
        s.fill_rect(0.0, 0.0, 4.0, 4.0);
        let p = s.pixel(2, 2).unwrap();
        assert!((p.x - 0.5).abs() < 1e-6);
        assert!((p.w - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_lighter_adds_and_saturates() {
        let mut s = RasterSurface::new(4, 4);
        s.set_composite(CompositeMode::Lighter);
        s.set_fill(Vec4::new(0.6, 0.2, 0.0, 1.0));
        s.fill_rect(0.0, 0.0, 4.0, 4.0);
        s.fill_rect(0.0, 0.0, 4.0, 4.0);
        let p = s.pixel(0, 0).unwrap();
        assert_eq!(p.x, 1.0);
        assert!((p.y - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_draws_are_ignored() {
        let mut s = RasterSurface::new(4, 4);
        s.set_fill(Vec4::ONE);
        s.fill_circle(Vec2::new(2.0, 2.0), 0.0);
        s.fill_circle(Vec2::new(2.0, 2.0), -3.0);
        s.fill_circle(Vec2::new(f32::NAN, 2.0), 3.0);
        s.fill_rect(0.0, 0.0, -1.0, 4.0);
        assert!((0..4).all(|x| (0..4).all(|y| s.pixel(x, y) == Some(Vec4::ZERO))));
    }

    #[test]
    fn test_resize_clears() {
        let mut s = RasterSurface::new(2, 2);
        s.set_fill(Vec4::ONE);
        s.fill_rect(0.0, 0.0, 2.0, 2.0);
        s.resize(3, 1);
        assert_eq!((s.width(), s.height()), (3, 1));
        assert_eq!(s.pixel(0, 0), Some(Vec4::ZERO));
    }
}
