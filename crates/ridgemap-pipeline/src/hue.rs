//! Image decoding and hue-based elevation extraction.
//!
//! Accepts raw image bytes (PNG, JPEG, BMP, WebP) and produces the raw
//! hue-proxy elevation field: each pixel's hue angle, remapped so that
//! topographic map colors order sensibly. The assumption is the common
//! red(high) / green(low) / blue(water) coloring, so after remapping a
//! *higher* proxy value corresponds to a *lower* elevation. The
//! normalization stage inverts this.

use crate::types::{ElevationField, PipelineError, RgbImage};

/// Hue angle above which a color counts as "near-red": reds with a blue
/// component land at the top of the hue circle and must wrap back to 0°.
pub const NEAR_RED_CUTOFF: f32 = 300.0;

/// Hue ceiling for the elevation proxy. Water hues (blue, ~150°+) are
/// clamped down to this so water depth does not distort the land range.
pub const HUE_CAP: f32 = 120.0;

/// Decode raw image bytes into an RGB source image.
///
/// Supports whatever the `image` crate can decode. Alpha and palette
/// formats are normalized to RGB, so every successfully decoded image
/// has color channels to derive hue from.
///
/// # Errors
///
/// Returns [`PipelineError::EmptyInput`] if `bytes` is empty.
/// Returns [`PipelineError::ImageDecode`] if the image format is
/// unrecognized or the data is corrupt.
pub fn decode_source(bytes: &[u8]) -> Result<RgbImage, PipelineError> {
    if bytes.is_empty() {
        return Err(PipelineError::EmptyInput);
    }

    let img = image::load_from_memory(bytes)?;
    Ok(img.to_rgb8())
}

/// Hue angle of an RGB pixel in degrees, `[0, 360)`.
///
/// Standard RGB→HSV hue formula; only the hue channel is needed.
/// Achromatic pixels (zero chroma) report 0°.
#[must_use]
pub fn pixel_hue(r: u8, g: u8, b: u8) -> f32 {
    let r = f32::from(r) / 255.0;
    let g = f32::from(g) / 255.0;
    let b = f32::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    if delta <= f32::EPSILON {
        return 0.0;
    }

    let sector = if (max - r).abs() <= f32::EPSILON {
        ((g - b) / delta).rem_euclid(6.0)
    } else if (max - g).abs() <= f32::EPSILON {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    60.0 * sector
}

/// Remap a hue angle into the elevation-proxy range.
///
/// Hues above [`NEAR_RED_CUTOFF`] wrap to 0° (near-red), then anything
/// above [`HUE_CAP`] clamps to the cap. Idempotent: remapping an
/// already-remapped value is a no-op.
#[must_use]
pub fn remap_hue(hue: f32) -> f32 {
    let hue = if hue > NEAR_RED_CUTOFF { 0.0 } else { hue };
    if hue > HUE_CAP { HUE_CAP } else { hue }
}

/// Extract the raw hue-proxy elevation field from a source image.
///
/// One remapped hue value per pixel; read-only over the source. The
/// proxy is inverted semantics (higher value = lower elevation) until
/// [`crate::elevation::normalize`] flips it.
#[must_use]
pub fn extract_elevation(source: &RgbImage) -> ElevationField {
    ElevationField::from_fn(source.width(), source.height(), |x, y| {
        let [r, g, b] = source.get_pixel(x, y).0;
        image::Luma([remap_hue(pixel_hue(r, g, b))])
    })
}
