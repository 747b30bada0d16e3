//! Ridgeline rendering: selected rows of the elevation field become
//! stacked, vertically-offset drawable curves.
//!
//! Every n-th row is selected (n = `floor(height / line_count)`, at
//! least 1) and resampled onto a uniform x grid spanning `[0, width]`.
//! Each selected row gets a vertical offset of `height - row`, so rows
//! from the top of the source image stack highest on the canvas.
//!
//! Two mutually exclusive modes per run: continuous mode emits one
//! polyline per row; segmented mode emits only the adjacent-sample
//! segments whose starting elevation clears [`VISIBILITY_THRESHOLD`].

use crate::types::{ElevationField, Point, Polyline, RenderConfig, RidgeLine, RidgeShape, Segment};

/// Minimum starting elevation for a segment to be drawn in segmented
/// mode. Absolute, not relative to the configured `scale`: raising
/// `scale` makes proportionally more segments visible. Kept that way
/// for compatibility with existing output.
pub const VISIBILITY_THRESHOLD: f32 = 0.5;

/// Row step for the given image height and requested line count.
///
/// `floor(height / line_count)`, clamped to at least 1 so that a line
/// count at or above the image height selects every row instead of
/// dividing by zero.
#[must_use]
pub const fn row_step(height: u32, line_count: u32) -> u32 {
    if line_count == 0 {
        return 1;
    }
    let step = height / line_count;
    if step < 1 { 1 } else { step }
}

/// Uniform grid of `samples` x positions spanning `[0, width]`.
///
/// One position per elevation column. A single-sample grid collapses
/// to `[0.0]`.
#[must_use]
pub fn sample_grid(width: u32, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![0.0],
        n => {
            let span = f64::from(width);
            let last = (n - 1) as f64;
            (0..n).map(|i| span * (i as f64) / last).collect()
        }
    }
}

/// Render the smoothed elevation field into drawable ridge lines.
///
/// Rows are processed in increasing row index; the returned sequence
/// preserves that order. An empty field yields an empty sequence.
#[must_use]
pub fn render_ridgelines(field: &ElevationField, config: &RenderConfig) -> Vec<RidgeLine> {
    render_ridgelines_with(field, config, |_| {})
}

/// Like [`render_ridgelines`], invoking `progress` with the percentage
/// of image height processed after each selected row. Advisory only.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn render_ridgelines_with(
    field: &ElevationField,
    config: &RenderConfig,
    mut progress: impl FnMut(u32),
) -> Vec<RidgeLine> {
    let (width, height) = field.dimensions();
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let step = row_step(height, config.line_count);
    let xs = sample_grid(width, width as usize);
    let mut lines = Vec::new();

    for y in 0..height {
        if y % step != 0 {
            continue;
        }

        let offset = f64::from(height - y);
        let row: Vec<f32> = (0..width).map(|x| field.get_pixel(x, y).0[0]).collect();

        let shape = if config.continuous {
            RidgeShape::Continuous(continuous_row(&xs, &row, offset))
        } else {
            RidgeShape::Segments(thresholded_row(&xs, &row, offset))
        };

        lines.push(RidgeLine {
            row: y,
            offset,
            shape,
        });

        let pct = (f64::from(y) / f64::from(height) * 100.0).round() as u32;
        progress(pct);
    }

    lines
}

/// One uninterrupted curve: every sample, offset applied.
fn continuous_row(xs: &[f64], row: &[f32], offset: f64) -> Polyline {
    let points = xs
        .iter()
        .zip(row)
        .map(|(&x, &elev)| Point::new(x, f64::from(elev) + offset))
        .collect();
    Polyline::new(points)
}

/// Adjacent-sample segments whose *starting* elevation clears the
/// visibility threshold. Below-threshold segments are omitted; the
/// canvas background stands in for them.
fn thresholded_row(xs: &[f64], row: &[f32], offset: f64) -> Vec<Segment> {
    let mut segments = Vec::new();
    for i in 0..row.len().saturating_sub(1) {
        if row[i] >= VISIBILITY_THRESHOLD {
            segments.push(Segment::new(
                Point::new(xs[i], f64::from(row[i]) + offset),
                Point::new(xs[i + 1], f64::from(row[i + 1]) + offset),
            ));
        }
    }
    segments
}
