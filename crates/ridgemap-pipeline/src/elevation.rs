//! Elevation normalization and smoothing.
//!
//! Two sequential passes over the hue-proxy field:
//!
//! ```text
//! norm = (v - min) / (max - min)     min-max to [0, 1]
//! elev = (1 - norm) * scale          invert, then stretch to [0, scale]
//! ```
//!
//! followed by an isotropic Gaussian blur whose sigma is the configured
//! roughness. The invert flips the hue proxy (higher = lower elevation)
//! back to standard semantics. Blur diffusion may push values slightly
//! outside `[0, scale]` at extrema; that is accepted, not clamped.

use crate::types::{ElevationField, PipelineError};

/// Min-max normalize, invert, and scale the field in place.
///
/// After this pass all values lie in `[0, scale]`: the raw minimum maps
/// to `scale` and the raw maximum to 0. An empty field is left untouched.
///
/// # Errors
///
/// Returns [`PipelineError::DegenerateImage`] when the field is flat
/// (max == min), where the normalization divisor would be zero.
pub fn normalize(field: &mut ElevationField, scale: f32) -> Result<(), PipelineError> {
    if field.is_empty() {
        return Ok(());
    }

    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for pixel in field.pixels() {
        let v = pixel.0[0];
        min = min.min(v);
        max = max.max(v);
    }

    let range = max - min;
    if range <= f32::EPSILON {
        return Err(PipelineError::DegenerateImage);
    }

    for pixel in field.pixels_mut() {
        let norm = (pixel.0[0] - min) / range;
        pixel.0[0] = (1.0 - norm) * scale;
    }
    Ok(())
}

/// Apply Gaussian blur to the elevation field.
///
/// Higher `sigma` values produce smoother, more rounded terrain.
/// Non-positive sigma values (zero or negative) return the field
/// unchanged, since `imageproc`'s underlying function panics on
/// `sigma <= 0.0`; config validation rejects them before this point.
#[must_use = "returns the smoothed field"]
pub fn smooth(field: &ElevationField, sigma: f32) -> ElevationField {
    if sigma <= 0.0 {
        return field.clone();
    }

    imageproc::filter::gaussian_blur_f32(field, sigma)
}
