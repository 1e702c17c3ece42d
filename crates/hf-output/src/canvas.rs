//! Drawing surface abstraction and an in-memory raster implementation.

use std::path::Path;

use hf_core::Point2D;
use image::{ImageFormat, Rgb, RgbImage};

use crate::{Color, OutputResult};

/// The primitives a frame renderer needs from a drawing surface.
///
/// Coordinates are field pixels with the origin at the top-left corner.
/// Anything drawn outside the surface is clipped.
pub trait Canvas {
    /// `(width, height)` in pixels.
    fn size(&self) -> (u32, u32);

    /// Paint the whole surface.
    fn fill(&mut self, color: Color);

    /// Paint a filled disc.
    fn draw_circle(&mut self, center: Point2D, radius: f64, color: Color);

    /// Attach heads-up text to the current frame.  Surfaces that cannot show
    /// text may ignore it.
    fn overlay_text(&mut self, _lines: &[String]) {}
}

/// A headless RGB raster backed by an [`RgbImage`], saved as PNG.
///
/// The overlay text is kept next to the pixels for callers that want to log
/// or display it; it is not rasterized.
#[derive(Clone, Debug)]
pub struct PixelCanvas {
    image:   RgbImage,
    overlay: Vec<String>,
}

impl PixelCanvas {
    /// A black canvas of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image:   RgbImage::new(width, height),
            overlay: Vec::new(),
        }
    }

    /// Color of pixel `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image
            .get_pixel_checked(x, y)
            .map(|Rgb([r, g, b])| Color::new(*r, *g, *b))
    }

    /// Text attached by the last [`Canvas::overlay_text`] call.
    pub fn overlay(&self) -> &[String] {
        &self.overlay
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Write the frame to `path` as a PNG image.
    pub fn save_png(&self, path: &Path) -> OutputResult<()> {
        self.image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

impl Canvas for PixelCanvas {
    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn fill(&mut self, color: Color) {
        let rgb = Rgb(color.to_array());
        for px in self.image.pixels_mut() {
            *px = rgb;
        }
    }

    fn draw_circle(&mut self, center: Point2D, radius: f64, color: Color) {
        let (width, height) = self.image.dimensions();
        if width == 0 || height == 0 || !radius.is_finite() || radius < 0.0 {
            return;
        }
        if !center.x.is_finite() || !center.y.is_finite() {
            return;
        }

        let clip = |v: f64, max: u32| v.clamp(0.0, (max - 1) as f64) as u32;
        let (x0, x1) = (center.x - radius, center.x + radius);
        let (y0, y1) = (center.y - radius, center.y + radius);
        if x1 < 0.0 || y1 < 0.0 || x0 > (width - 1) as f64 || y0 > (height - 1) as f64 {
            return;
        }

        let rgb = Rgb(color.to_array());
        let r2 = radius * radius;
        for y in clip(y0.floor(), height)..=clip(y1.ceil(), height) {
            let dy = y as f64 - center.y;
            for x in clip(x0.floor(), width)..=clip(x1.ceil(), width) {
                let dx = x as f64 - center.x;
                if dx * dx + dy * dy <= r2 {
                    self.image.put_pixel(x, y, rgb);
                }
            }
        }
    }

    fn overlay_text(&mut self, lines: &[String]) {
        self.overlay = lines.to_vec();
    }
}
