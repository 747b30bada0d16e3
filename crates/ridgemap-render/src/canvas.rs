//! Ridgeline rasterisation via tiny-skia.
//!
//! Composes rendered ridge lines onto a single raster canvas sized to
//! the source image: background filled with the configured color, each
//! line stroked on top with round caps and anti-aliasing. No axes,
//! grid, or borders.
//!
//! Ridge geometry is in plot coordinates (+Y up) spanning
//! `[offset, offset + elevation]`, which exceeds the image height for
//! the topmost rows. The canvas therefore fits the emitted y-range onto
//! the pixel height, the way an autoscaled figure would, so every line
//! stays visible; the fit also flips to pixel space (+Y down) here, at
//! the raster boundary.

use image::{Rgba, RgbaImage};
use ridgemap_pipeline::{Dimensions, RenderConfig, RidgeLine, RidgeShape};
use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Errors that can occur while assembling the output canvas.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The pixmap could not be allocated (zero or oversized dimensions).
    #[error("cannot allocate a {width}x{height} canvas")]
    Canvas {
        /// Requested canvas width in pixels.
        width: u32,
        /// Requested canvas height in pixels.
        height: u32,
    },
}

/// Render ridge lines onto a background-filled canvas.
///
/// The canvas matches the source image dimensions exactly. Lines are
/// stroked in the configured line color and width; in segmented mode
/// only the visible segments are present in `lines`, so everything
/// else stays background.
///
/// # Errors
///
/// Returns [`RenderError::Canvas`] if a pixmap of the requested
/// dimensions cannot be allocated.
pub fn render(
    lines: &[RidgeLine],
    dimensions: Dimensions,
    config: &RenderConfig,
) -> Result<RgbaImage, RenderError> {
    let Dimensions { width, height } = dimensions;
    let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::Canvas { width, height })?;

    let [br, bg, bb, ba] = config.background_color;
    pixmap.fill(tiny_skia::Color::from_rgba8(br, bg, bb, ba));

    let [lr, lg, lb, la] = config.line_color;
    let mut paint = Paint::default();
    paint.set_color_rgba8(lr, lg, lb, la);
    paint.anti_alias = true;

    let stroke = Stroke {
        width: config.line_width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    };

    let projection = YProjection::fit(lines, height);
    for line in lines {
        if let Some(path) = build_path(line, projection) {
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }

    Ok(to_rgba_image(&pixmap, width, height))
}

/// Linear fit of the emitted plot y-range onto pixel rows.
///
/// The highest plot y maps to pixel row 0 and the lowest to the bottom
/// edge. A flat or single-point range (zero span) centers mid-canvas.
#[derive(Debug, Clone, Copy)]
struct YProjection {
    /// Highest plot y over all emitted points.
    top: f64,
    /// Pixel rows per plot unit; 0 for a zero-span range.
    pixels_per_unit: f64,
    /// Row used when the range has zero span.
    mid: f64,
}

impl YProjection {
    fn fit(lines: &[RidgeLine], height: u32) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for line in lines {
            match &line.shape {
                RidgeShape::Continuous(polyline) => {
                    for p in polyline.points() {
                        min = min.min(p.y);
                        max = max.max(p.y);
                    }
                }
                RidgeShape::Segments(segments) => {
                    for seg in segments {
                        min = min.min(seg.start.y.min(seg.end.y));
                        max = max.max(seg.start.y.max(seg.end.y));
                    }
                }
            }
        }

        let span = max - min;
        let pixels_per_unit = if span > 0.0 {
            f64::from(height) / span
        } else {
            0.0
        };
        Self {
            top: max,
            pixels_per_unit,
            mid: f64::from(height) / 2.0,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn apply(self, plot_y: f64) -> f32 {
        if self.pixels_per_unit > 0.0 {
            ((self.top - plot_y) * self.pixels_per_unit) as f32
        } else {
            self.mid as f32
        }
    }
}

/// Build a tiny-skia path for one ridge line, projecting plot Y onto
/// pixel rows.
///
/// A segmented line becomes one path with a subpath per segment, so the
/// whole row strokes in a single call.
#[allow(clippy::cast_possible_truncation)]
fn build_path(line: &RidgeLine, projection: YProjection) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    match &line.shape {
        RidgeShape::Continuous(polyline) => {
            let points = polyline.points();
            let first = points.first()?;
            pb.move_to(first.x as f32, projection.apply(first.y));
            for p in &points[1..] {
                pb.line_to(p.x as f32, projection.apply(p.y));
            }
        }
        RidgeShape::Segments(segments) => {
            for seg in segments {
                pb.move_to(seg.start.x as f32, projection.apply(seg.start.y));
                pb.line_to(seg.end.x as f32, projection.apply(seg.end.y));
            }
        }
    }
    pb.finish()
}

/// Convert a pixmap (premultiplied RGBA) to an `RgbaImage` (straight RGBA).
#[allow(clippy::cast_possible_truncation)]
fn to_rgba_image(pixmap: &Pixmap, width: u32, height: u32) -> RgbaImage {
    let data = pixmap.data();
    let mut img = RgbaImage::new(width, height);
    for (i, pixel) in img.pixels_mut().enumerate() {
        let off = i * 4;
        let a = data[off + 3];
        if a == 0 {
            *pixel = Rgba([0, 0, 0, 0]);
        } else {
            // Un-premultiply: channel = premultiplied * 255 / alpha.
            let r = u16::from(data[off]) * 255 / u16::from(a);
            let g = u16::from(data[off + 1]) * 255 / u16::from(a);
            let b = u16::from(data[off + 2]) * 255 / u16::from(a);
            *pixel = Rgba([r as u8, g as u8, b as u8, a]);
        }
    }
    img
}
