use std::path::Path;

use image::{Rgba, RgbaImage};
use tracing::{debug, info};

use crate::error::{Result, RidgeError};
use crate::geometry::{Point, RidgeSequence, Triangle};
use crate::source::UniformSource;
use crate::utils::{BACKGROUND, OUTLINE, RIDGE_FILL, happy_color};

/// A pixel surface for drawing ridge geometry.
///
/// Coordinates are canvas units with one unit per pixel; pixels are sampled at
/// their centres, so pixel `(x, y)` covers `[x, x + 1) × [y, y + 1)`.
pub struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RidgeError::invalid_argument(format!(
                "canvas must not be empty, got {width}x{height}"
            )));
        }
        Ok(Self {
            img: RgbaImage::from_pixel(width, height, background),
        })
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.img
    }

    pub fn into_image(self) -> RgbaImage {
        self.img
    }

    // Even-odd scanline fill.
    // The polygon is closed implicitly, last point back to first.
    pub fn fill_polygon(&mut self, points: &[Point], color: Rgba<u8>) {
        if points.len() < 3 {
            return;
        }
        let (w, h) = (self.img.width(), self.img.height());
        let mut crossings = Vec::with_capacity(points.len());

        for row in 0..h {
            let cy = row as f64 + 0.5;
            crossings.clear();

            for (i, a) in points.iter().enumerate() {
                let b = &points[(i + 1) % points.len()];
                // Half-open rule so a vertex on the scanline is counted once
                if (a.y <= cy) != (b.y <= cy) {
                    let t = (cy - a.y) / (b.y - a.y);
                    crossings.push(a.x + t * (b.x - a.x));
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));

            for span in crossings.chunks_exact(2) {
                // Pixels whose centre lies inside [start, end)
                let start = (span[0] - 0.5).ceil().max(0.0);
                let end = (span[1] - 0.5).ceil().min(w as f64);
                if start >= end {
                    continue;
                }
                for col in start as u32..end as u32 {
                    self.img.put_pixel(col, row, color);
                }
            }
        }
    }

    // Paint every pixel whose centre lies within half the line width of a segment.
    pub fn stroke_polyline(
        &mut self,
        points: &[Point],
        closed: bool,
        line_width: f64,
        color: Rgba<u8>,
    ) {
        if points.len() < 2 || !(line_width > 0.0) {
            return;
        }
        for pair in points.windows(2) {
            self.stroke_segment(pair[0], pair[1], line_width, color);
        }
        if closed && points.len() > 2 {
            self.stroke_segment(points[points.len() - 1], points[0], line_width, color);
        }
    }

    pub fn stroke_triangle(&mut self, triangle: &Triangle, line_width: f64, color: Rgba<u8>) {
        self.stroke_polyline(triangle.vertices(), true, line_width, color);
    }

    fn stroke_segment(&mut self, a: Point, b: Point, line_width: f64, color: Rgba<u8>) {
        let half = line_width * 0.5;
        let (w, h) = (self.img.width() as f64, self.img.height() as f64);

        // Bounding box of the thick segment, clipped to the image
        let x0 = (a.x.min(b.x) - half - 0.5).floor().max(0.0);
        let x1 = (a.x.max(b.x) + half + 0.5).ceil().min(w);
        let y0 = (a.y.min(b.y) - half - 0.5).floor().max(0.0);
        let y1 = (a.y.max(b.y) + half + 0.5).ceil().min(h);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let (dx, dy) = (b.x - a.x, b.y - a.y);
        let len_sq = dx * dx + dy * dy;
        let half_sq = half * half;

        for row in y0 as u32..y1 as u32 {
            for col in x0 as u32..x1 as u32 {
                let px = col as f64 + 0.5;
                let py = row as f64 + 0.5;
                // Closest point on the segment
                let t = if len_sq > 0.0 {
                    (((px - a.x) * dx + (py - a.y) * dy) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let ex = px - (a.x + t * dx);
                let ey = py - (a.y + t * dy);
                if ex * ex + ey * ey <= half_sq {
                    self.img.put_pixel(col, row, color);
                }
            }
        }
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.img.save_with_format(path, image::ImageFormat::Png)?;
        info!(path = %path.display(), width = self.width(), height = self.height(), "saved ridge image");
        Ok(())
    }
}

/// Line widths for [`render_scene`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneStyle {
    pub outline_width: f64,
    pub triangle_width: f64,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            outline_width: 5.0,
            triangle_width: 1.0,
        }
    }
}

/// Draw a ridge and its triangulation.
///
/// Clears to the background, fills the closed silhouette, strokes its outline
/// and then strokes every triangle in its own colour drawn from `source`.
pub fn render_scene(
    width: u32,
    height: u32,
    ridge: &RidgeSequence,
    triangles: &[Triangle],
    style: &SceneStyle,
    source: &mut impl UniformSource,
) -> Result<Canvas> {
    let mut canvas = Canvas::new(width, height, BACKGROUND)?;

    let outline = ridge.outline();
    canvas.fill_polygon(&outline, RIDGE_FILL);
    canvas.stroke_polyline(&outline, true, style.outline_width, OUTLINE);

    for t in triangles {
        let color = happy_color(source);
        canvas.stroke_triangle(t, style.triangle_width, color);
    }

    debug!(
        points = ridge.len(),
        triangles = triangles.len(),
        width,
        height,
        "rendered ridge scene"
    );
    Ok(canvas)
}
