//! ridgemap-pipeline: Pure map-to-ridgeline pipeline (sans-IO).
//!
//! Converts a topographic map image into stacked elevation curves
//! through: hue extraction -> normalization -> Gaussian smoothing ->
//! ridgeline rendering.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! byte slices and returns structured geometry. Rasterisation lives in
//! `ridgemap-render`; all filesystem and terminal interaction lives in
//! the `ridgemap` binary.

pub mod elevation;
pub mod hue;
pub mod ridgeline;
pub mod types;

pub use ridgeline::VISIBILITY_THRESHOLD;
pub use types::{
    Dimensions, PipelineError, Point, Polyline, ProcessResult, RenderConfig, RidgeLine,
    RidgeShape, Segment,
};

/// Run the full map-to-ridgeline pipeline.
///
/// Takes raw image bytes (PNG, JPEG, BMP, WebP) and a configuration,
/// then produces a [`ProcessResult`] containing the drawable ridge
/// lines and the source image dimensions. The dimensions size the
/// output canvas.
///
/// # Pipeline steps
///
/// 1. Validate the configuration
/// 2. Decode the image to RGB
/// 3. Extract the hue-proxy elevation field
/// 4. Normalize, invert, and scale to `[0, scale]`
/// 5. Gaussian-smooth with sigma = roughness
/// 6. Render selected rows into continuous or thresholded geometry
///
/// # Errors
///
/// Returns [`PipelineError::InvalidConfig`] for non-positive numeric
/// parameters.
/// Returns [`PipelineError::EmptyInput`] if `image_bytes` is empty.
/// Returns [`PipelineError::ImageDecode`] if the image format is
/// unrecognized.
/// Returns [`PipelineError::DegenerateImage`] if the image has no hue
/// variation.
pub fn process(
    image_bytes: &[u8],
    config: &RenderConfig,
) -> Result<ProcessResult, PipelineError> {
    process_with_progress(image_bytes, config, |_| {})
}

/// Like [`process`], invoking `progress` with a completion percentage
/// after each rendered row. Advisory only; the callback is not part of
/// the data contract.
pub fn process_with_progress(
    image_bytes: &[u8],
    config: &RenderConfig,
    progress: impl FnMut(u32),
) -> Result<ProcessResult, PipelineError> {
    // 1. Validate configuration at the boundary.
    config.validate()?;

    // 2. Decode to RGB. The decoded handle is dropped here once the
    //    pixel data is in memory.
    let source = hue::decode_source(image_bytes)?;
    let dimensions = Dimensions {
        width: source.width(),
        height: source.height(),
    };

    // 3. Hue-proxy elevation field.
    let mut field = hue::extract_elevation(&source);
    drop(source);

    // 4. Normalize, invert, scale (in place).
    elevation::normalize(&mut field, config.scale)?;

    // 5. Smooth with sigma = roughness.
    let field = elevation::smooth(&field, config.roughness);

    // 6. Render rows.
    let lines = ridgeline::render_ridgelines_with(&field, config, progress);

    Ok(ProcessResult { lines, dimensions })
}
