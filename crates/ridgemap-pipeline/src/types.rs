//! Shared types for the ridgemap elevation pipeline.

use serde::{Deserialize, Serialize};

/// Re-export `RgbImage` so downstream crates can reference the decoded
/// source image without depending on `image` directly.
pub use image::RgbImage;

/// A 2D scalar field over the source image, one `f32` per pixel.
///
/// Used for both the raw hue-proxy field and the normalized/smoothed
/// elevation field. After [`crate::elevation::normalize`] all values lie
/// in `[0, scale]`; Gaussian smoothing may push values slightly outside
/// that range at extrema, which is accepted and not clamped.
pub type ElevationField = image::ImageBuffer<image::Luma<f32>, Vec<f32>>;

/// A 2D point in plot coordinates.
///
/// Ridgeline geometry uses the mathematical convention of +Y pointing
/// upward; the canvas renderer flips to pixel space at the raster
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position (pixels from left edge).
    pub x: f64,
    /// Vertical position (plot units, +Y up).
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A sequence of connected points forming one continuous curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline(Vec<Point>);

impl Polyline {
    /// Create a new polyline from a vector of points.
    #[must_use]
    pub const fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// Returns `true` if the polyline has no points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of points in the polyline.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns a slice of all points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Consumes the polyline and returns the underlying vector of points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.0
    }
}

/// A single drawable 2-point segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Segment start, in plot coordinates.
    pub start: Point,
    /// Segment end, in plot coordinates.
    pub end: Point,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// Geometry produced for one selected source row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RidgeShape {
    /// One uninterrupted curve spanning the full row width.
    Continuous(Polyline),
    /// Only the segments whose starting elevation clears the visibility
    /// threshold. Suppressed segments are omitted entirely; the canvas
    /// background already matches their would-be color.
    Segments(Vec<Segment>),
}

/// One rendered scan line of the elevation field.
///
/// Point `y` values already include the vertical stacking offset
/// `height - row`, so rows near the top of the source image sit highest
/// on the final canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RidgeLine {
    /// Source image row index this line was sampled from.
    pub row: u32,
    /// Vertical stacking offset (`height - row`) baked into the geometry.
    pub offset: f64,
    /// The drawable geometry for this row.
    pub shape: RidgeShape,
}

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// An RGBA color, straight (non-premultiplied) `[r, g, b, a]`.
pub type Color = [u8; 4];

/// Configuration for one ridgeline run.
///
/// Immutable snapshot read by every pipeline stage; never mutated during
/// a run. Defaults match the CLI defaults (100 lines, scale 50, width 3,
/// roughness 5, segmented mode, white on black).
///
/// Construction from untrusted input should go through [`Self::validate`]
/// before entering the pipeline; `line_count`, `scale`, `line_width`, and
/// `roughness` must all be positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Number of plot lines to draw. The row step is
    /// `floor(height / line_count)`, clamped to at least 1.
    pub line_count: u32,

    /// Maximum elevation difference. Higher values exaggerate the gap
    /// between low and high spots on the map.
    pub scale: f32,

    /// Stroke width of the plot lines, in output pixels.
    pub line_width: f32,

    /// Gaussian smoothing sigma applied to the elevation field.
    /// Higher values produce smoother, more rounded terrain.
    pub roughness: f32,

    /// Draw each line continuously for the whole width instead of only
    /// the raised portions.
    pub continuous: bool,

    /// Stroke color of the plot lines.
    pub line_color: Color,

    /// Canvas background color.
    pub background_color: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            line_count: 100,
            scale: 50.0,
            line_width: 3.0,
            roughness: 5.0,
            continuous: false,
            line_color: [255, 255, 255, 255],
            background_color: [0, 0, 0, 255],
        }
    }
}

impl RenderConfig {
    /// Check that every numeric parameter is positive.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidConfig`] naming the offending
    /// parameter.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.line_count == 0 {
            return Err(PipelineError::InvalidConfig(
                "line count must be positive".to_owned(),
            ));
        }
        if self.scale <= 0.0 {
            return Err(PipelineError::InvalidConfig(format!(
                "scale must be positive, got {}",
                self.scale,
            )));
        }
        if self.line_width <= 0.0 {
            return Err(PipelineError::InvalidConfig(format!(
                "line width must be positive, got {}",
                self.line_width,
            )));
        }
        if self.roughness <= 0.0 {
            return Err(PipelineError::InvalidConfig(format!(
                "roughness must be positive, got {}",
                self.roughness,
            )));
        }
        Ok(())
    }
}

/// Result of running the full elevation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Rendered scan lines, ordered top image row to bottom image row.
    pub lines: Vec<RidgeLine>,

    /// Dimensions of the source image in pixels. The output canvas uses
    /// the same dimensions.
    pub dimensions: Dimensions,
}

/// Errors that can occur during pipeline processing.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to decode the input image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,

    /// The source image has zero hue variance (flat single color), so
    /// min-max normalization is undefined.
    #[error("image has no hue variation to derive elevation from")]
    DegenerateImage,

    /// Pipeline configuration is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // --- Polyline tests ---

    #[test]
    fn polyline_new_and_len() {
        let pl = Polyline::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        assert_eq!(pl.len(), 2);
        assert!(!pl.is_empty());
    }

    #[test]
    fn polyline_empty() {
        let pl = Polyline::new(vec![]);
        assert!(pl.is_empty());
        assert_eq!(pl.len(), 0);
    }

    #[test]
    fn polyline_into_points_returns_owned_vec() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let pl = Polyline::new(points.clone());
        assert_eq!(pl.into_points(), points);
    }

    // --- RenderConfig tests ---

    #[test]
    fn config_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.line_count, 100);
        assert!((config.scale - 50.0).abs() < f32::EPSILON);
        assert!((config.line_width - 3.0).abs() < f32::EPSILON);
        assert!((config.roughness - 5.0).abs() < f32::EPSILON);
        assert!(!config.continuous);
        assert_eq!(config.line_color, [255, 255, 255, 255]);
        assert_eq!(config.background_color, [0, 0, 0, 255]);
    }

    #[test]
    fn default_config_is_valid() {
        assert!(RenderConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_line_count_is_rejected() {
        let config = RenderConfig {
            line_count: 0,
            ..RenderConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PipelineError::InvalidConfig(_)),
        ));
    }

    #[test]
    fn non_positive_scale_is_rejected() {
        for scale in [0.0, -1.0] {
            let config = RenderConfig {
                scale,
                ..RenderConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(PipelineError::InvalidConfig(_)),
            ));
        }
    }

    #[test]
    fn non_positive_roughness_is_rejected() {
        let config = RenderConfig {
            roughness: -0.5,
            ..RenderConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PipelineError::InvalidConfig(_)),
        ));
    }

    #[test]
    fn non_positive_line_width_is_rejected() {
        let config = RenderConfig {
            line_width: 0.0,
            ..RenderConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PipelineError::InvalidConfig(_)),
        ));
    }

    // --- PipelineError display ---

    #[test]
    fn error_empty_input_display() {
        let err = PipelineError::EmptyInput;
        assert_eq!(err.to_string(), "input image data is empty");
    }

    #[test]
    fn error_degenerate_display() {
        let err = PipelineError::DegenerateImage;
        assert_eq!(
            err.to_string(),
            "image has no hue variation to derive elevation from",
        );
    }

    #[test]
    fn error_invalid_config_display() {
        let err = PipelineError::InvalidConfig("scale must be positive, got -1".to_owned());
        assert_eq!(
            err.to_string(),
            "invalid configuration: scale must be positive, got -1",
        );
    }

    // --- Serde round-trips ---

    #[test]
    fn config_serde_round_trip() {
        let config = RenderConfig {
            line_count: 40,
            scale: 25.0,
            line_width: 1.5,
            roughness: 2.0,
            continuous: true,
            line_color: [10, 20, 30, 255],
            background_color: [0, 0, 0, 0],
        };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: RenderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn ridge_line_serde_round_trip() {
        let line = RidgeLine {
            row: 5,
            offset: 95.0,
            shape: RidgeShape::Segments(vec![Segment::new(
                Point::new(0.0, 95.5),
                Point::new(1.0, 96.0),
            )]),
        };
        let json = serde_json::to_string(&line).unwrap();
        let deserialized: RidgeLine = serde_json::from_str(&json).unwrap();
        assert_eq!(line, deserialized);
    }
}
